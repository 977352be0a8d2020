use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PinmarkError, Result};
use crate::geometry::{pos2, Pos2};

/// Identifier of an annotated point. Unique within a [`PointStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled marker. `x`/`y` are canvas-space coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotatedPoint {
    pub id: PointId,
    pub x: f32,
    pub y: f32,
    pub title: String,
    pub description: String,
}

impl AnnotatedPoint {
    pub fn new(id: PointId, at: Pos2, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            x: at.x,
            y: at.y,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn position(&self) -> Pos2 {
        pos2(self.x, self.y)
    }
}

/// Fields to overwrite on [`PointStore::update`]. `None` leaves a field alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PointPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// Insertion-ordered collection of annotated points.
///
/// Iteration order is render order: later points are drawn on top and win
/// hit tests where markers overlap.
#[derive(Clone, Debug, Default)]
pub struct PointStore {
    points: Vec<AnnotatedPoint>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.points.iter().any(|p| p.id == id)
    }

    pub fn get(&self, id: PointId) -> Option<&AnnotatedPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnotatedPoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[AnnotatedPoint] {
        &self.points
    }

    /// Append a point. Rejects an id that is already present.
    pub fn add(&mut self, point: AnnotatedPoint) -> Result<()> {
        if self.contains(point.id) {
            return Err(PinmarkError::DuplicateId(point.id));
        }
        debug!(id = %point.id, x = point.x, y = point.y, "Point added");
        self.points.push(point);
        Ok(())
    }

    /// Merge the patch's title/description into an existing point.
    pub fn update(&mut self, id: PointId, patch: PointPatch) -> Result<&AnnotatedPoint> {
        let point = self
            .points
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PinmarkError::NotFound(id))?;

        if let Some(title) = patch.title {
            point.title = title;
        }
        if let Some(description) = patch.description {
            point.description = description;
        }
        debug!(%id, "Point updated");
        Ok(point)
    }

    /// Delete a point. Removing an unknown id is a silent no-op and returns `None`.
    pub fn remove(&mut self, id: PointId) -> Option<AnnotatedPoint> {
        let index = self.points.iter().position(|p| p.id == id)?;
        debug!(%id, "Point removed");
        Some(self.points.remove(index))
    }

    /// Topmost point whose marker disc of `radius` contains `canvas_pos`.
    pub fn hit_test(&self, canvas_pos: Pos2, radius: f32) -> Option<PointId> {
        let radius_sq = radius * radius;
        self.points
            .iter()
            .rev()
            .find(|p| p.position().distance_sq(canvas_pos) <= radius_sq)
            .map(|p| p.id)
    }
}
