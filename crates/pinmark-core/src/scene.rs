use serde::{Deserialize, Serialize};

use crate::consts::{
    IMAGE_ORIGIN, MARKER_RADIUS, MARKER_STROKE, PLACEHOLDER_SIZE, TEMPLATE_ANCHOR, TOOLBAR_HEIGHT,
};
use crate::geometry::{vec2, Pos2, Rect, Vec2};

/// Fixed placement of the scene's parts.
///
/// The toolbar strip and the template marker live in screen space and do not
/// follow pan/zoom. The image and the point markers live in canvas space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneLayout {
    pub toolbar_height: f32,
    pub template_anchor: Pos2,
    pub image_origin: Pos2,
    pub marker_radius: f32,
    pub marker_stroke: f32,
    #[serde(skip)]
    pub image_size: Vec2,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            toolbar_height: TOOLBAR_HEIGHT,
            template_anchor: TEMPLATE_ANCHOR.into(),
            image_origin: IMAGE_ORIGIN.into(),
            marker_radius: MARKER_RADIUS,
            marker_stroke: MARKER_STROKE,
            image_size: vec2(PLACEHOLDER_SIZE[0] as f32, PLACEHOLDER_SIZE[1] as f32),
        }
    }
}

impl SceneLayout {
    /// Image rectangle in canvas space.
    pub fn image_bounds(&self) -> Rect {
        Rect::from_min_size(self.image_origin, self.image_size)
    }

    /// Whether a screen position falls on the toolbar strip.
    pub fn toolbar_contains(&self, screen: Pos2) -> bool {
        screen.y >= 0.0 && screen.y < self.toolbar_height
    }

    /// Radius used for hit tests: the disc plus its ring.
    pub fn hit_radius(&self) -> f32 {
        self.marker_radius + self.marker_stroke
    }

    /// Canvas position expressed relative to the image's top-left pixel.
    pub fn image_local(&self, canvas: Pos2) -> Pos2 {
        Pos2::ZERO + (canvas - self.image_origin)
    }
}
