use pinmark_core::io::image_io::RasterImage;

/// Convert a decoded RGBA8 raster to an egui ColorImage.
pub fn raster_to_color_image(raster: &RasterImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(raster.size(), &raster.rgba)
}
