/// Multiplicative scale change applied per wheel notch.
pub const ZOOM_STEP: f32 = 1.1;

/// Smallest scale a zoom step may reach.
pub const MIN_SCALE: f32 = 0.1;

/// Largest scale a zoom step may reach.
pub const MAX_SCALE: f32 = 10.0;

/// Title given to a point created by dropping the template marker.
pub const DEFAULT_POINT_TITLE: &str = "New Point";

/// Description given to a point created by dropping the template marker.
pub const DEFAULT_POINT_DESCRIPTION: &str = "Click to edit description";

/// Height of the toolbar strip at the top of the canvas, in screen pixels.
pub const TOOLBAR_HEIGHT: f32 = 40.0;

/// Resting screen position of the template marker inside the toolbar.
pub const TEMPLATE_ANCHOR: [f32; 2] = [30.0, 20.0];

/// Where the top-left corner of the image sits in canvas space.
/// Leaves room for the toolbar strip at the default view.
pub const IMAGE_ORIGIN: [f32; 2] = [0.0, 50.0];

/// Marker disc radius in canvas units (the disc scales with zoom).
pub const MARKER_RADIUS: f32 = 8.0;

/// Width of the white ring drawn around each marker, in canvas units.
pub const MARKER_STROKE: f32 = 2.0;

/// Placeholder raster size used until an image is opened.
pub const PLACEHOLDER_SIZE: [u32; 2] = [400, 300];

/// Edge length of one placeholder checker cell, in pixels.
pub const PLACEHOLDER_CELL: u32 = 20;
