use std::path::Path;

use tracing::info;

use crate::consts::{PLACEHOLDER_CELL, PLACEHOLDER_SIZE};
use crate::error::Result;

/// Decoded image ready for upload as a texture.
/// Pixels are RGBA8, row-major, `width * height * 4` bytes.
#[derive(Clone, Debug)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl RasterImage {
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

/// Load any format the `image` crate can decode.
pub fn load_raster(path: &Path) -> Result<RasterImage> {
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();
    info!(path = %path.display(), width, height, "Image loaded");
    Ok(RasterImage {
        width,
        height,
        rgba: img.into_raw(),
    })
}

/// Grey checkerboard shown until a real image is opened.
pub fn placeholder_raster() -> RasterImage {
    let [width, height] = PLACEHOLDER_SIZE;
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = if (x / PLACEHOLDER_CELL + y / PLACEHOLDER_CELL) % 2 == 0 {
                60
            } else {
                110
            };
            rgba.extend_from_slice(&[v, v, v, 255]);
        }
    }
    RasterImage {
        width,
        height,
        rgba,
    }
}
