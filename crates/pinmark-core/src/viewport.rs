//! Pan/zoom transform between canvas space and screen space.
//!
//! The map is `screen = canvas * scale + offset`. Every operation here is a
//! pure function returning a new [`ViewportState`]; the owner keeps the value
//! and hands it to the renderer each frame.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCALE, MIN_SCALE, ZOOM_STEP};
use crate::geometry::{pos2, vec2, Pos2, Rect, Vec2};

/// Direction of a single wheel notch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    In,
    Out,
}

impl WheelDirection {
    /// Classify a vertical scroll delta where positive means "scrolled up".
    /// Returns `None` for a zero delta.
    pub fn from_scroll_delta(dy: f32) -> Option<Self> {
        if dy > 0.0 {
            Some(Self::In)
        } else if dy < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Zoom step and the scale range it is clamped to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub step: f32,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            step: ZOOM_STEP,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
        }
    }
}

impl ZoomLimits {
    pub fn clamp(&self, scale: f32) -> f32 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Repair a hand-edited config: positive bounds in order, a step above 1.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut limits = self;
        if !(limits.step.is_finite() && limits.step > 1.0) {
            limits.step = defaults.step;
        }
        if !(limits.min_scale.is_finite() && limits.min_scale > 0.0) {
            limits.min_scale = defaults.min_scale;
        }
        if !(limits.max_scale.is_finite() && limits.max_scale >= limits.min_scale) {
            limits.max_scale = defaults.max_scale.max(limits.min_scale);
        }
        limits
    }
}

/// Scale and translation of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportState {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ViewportState {
    pub fn offset(&self) -> Vec2 {
        vec2(self.offset_x, self.offset_y)
    }

    fn with_offset(scale: f32, offset: Vec2) -> Self {
        Self {
            scale,
            offset_x: offset.x,
            offset_y: offset.y,
        }
    }

    /// Repair a hand-edited view: a positive finite scale within `limits`
    /// and finite offsets.
    pub fn sanitized(self, limits: &ZoomLimits) -> Self {
        let defaults = Self::default();
        let scale = if self.scale.is_finite() && self.scale > 0.0 {
            limits.clamp(self.scale)
        } else {
            limits.clamp(defaults.scale)
        };
        let finite_or = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };
        Self {
            scale,
            offset_x: finite_or(self.offset_x, defaults.offset_x),
            offset_y: finite_or(self.offset_y, defaults.offset_y),
        }
    }

    /// `(screen - offset) / scale`
    pub fn to_canvas_space(&self, screen: Pos2) -> Pos2 {
        pos2(
            (screen.x - self.offset_x) / self.scale,
            (screen.y - self.offset_y) / self.scale,
        )
    }

    /// `canvas * scale + offset`
    pub fn to_screen_space(&self, canvas: Pos2) -> Pos2 {
        pos2(
            canvas.x * self.scale + self.offset_x,
            canvas.y * self.scale + self.offset_y,
        )
    }

    /// One wheel notch of zoom anchored at the pointer.
    ///
    /// The canvas point under `pointer` keeps its screen position. Without a
    /// pointer position the state is returned unchanged.
    pub fn zoom(&self, pointer: Option<Pos2>, direction: WheelDirection, limits: &ZoomLimits) -> Self {
        let Some(pointer) = pointer else {
            return *self;
        };

        let new_scale = match direction {
            WheelDirection::In => self.scale * limits.step,
            WheelDirection::Out => self.scale / limits.step,
        };
        let new_scale = limits.clamp(new_scale);
        if new_scale == self.scale {
            return *self;
        }

        let anchor = self.to_canvas_space(pointer);
        let offset = pointer.to_vec2() - anchor.to_vec2() * new_scale;
        Self::with_offset(new_scale, offset)
    }

    /// Translate the whole canvas by a screen-space delta.
    pub fn pan(&self, delta: Vec2) -> Self {
        Self::with_offset(self.scale, self.offset() + delta)
    }

    /// Scale and center `content` (canvas space) inside a screen area of `available` size.
    pub fn fit_rect(content: Rect, available: Vec2, limits: &ZoomLimits) -> Self {
        if content.width() <= 0.0 || content.height() <= 0.0 {
            return Self::default();
        }
        let fit_x = available.x / content.width();
        let fit_y = available.y / content.height();
        let scale = limits.clamp(fit_x.min(fit_y));

        let screen_center = pos2(available.x / 2.0, available.y / 2.0);
        let offset = screen_center.to_vec2() - content.center().to_vec2() * scale;
        Self::with_offset(scale, offset)
    }
}
