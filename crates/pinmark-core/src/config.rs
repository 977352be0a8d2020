use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::pos2;
use crate::points::{AnnotatedPoint, PointId};
use crate::scene::SceneLayout;
use crate::viewport::{ViewportState, ZoomLimits};

/// Startup configuration, read from a TOML file.
///
/// ```toml
/// image = "photo.png"
///
/// [zoom]
/// step = 1.1
/// min_scale = 0.1
/// max_scale = 10.0
///
/// [[points]]
/// id = 1
/// x = 100.0
/// y = 100.0
/// title = "Point 1"
/// description = "This is an interesting location"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Image opened at startup. A placeholder is shown when absent.
    pub image: Option<PathBuf>,
    pub zoom: ZoomLimits,
    pub initial_view: ViewportState,
    pub scene: SceneLayout,
    /// Points present when the session starts.
    pub points: Vec<SeedPoint>,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            image: None,
            zoom: ZoomLimits::default(),
            initial_view: ViewportState::default(),
            scene: SceneLayout::default(),
            points: demo_points(),
        }
    }
}

impl AnnotatorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a config file. Relative `image` paths resolve against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        if let (Some(image), Some(dir)) = (config.image.as_mut(), path.parent()) {
            if image.is_relative() {
                *image = dir.join(&*image);
            }
        }
        Ok(config)
    }
}

/// A point declared in the config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedPoint {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl SeedPoint {
    pub fn to_point(&self) -> AnnotatedPoint {
        AnnotatedPoint::new(
            PointId(self.id),
            pos2(self.x, self.y),
            self.title.as_str(),
            self.description.as_str(),
        )
    }
}

fn demo_points() -> Vec<SeedPoint> {
    [
        (1, 100.0, 100.0, "Point 1", "This is an interesting location"),
        (2, 200.0, 150.0, "Point 2", "Another fascinating spot"),
        (3, 150.0, 200.0, "Point 3", "Something cool here"),
    ]
    .into_iter()
    .map(|(id, x, y, title, description)| SeedPoint {
        id,
        x,
        y,
        title: title.into(),
        description: description.into(),
    })
    .collect()
}
