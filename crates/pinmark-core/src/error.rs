use thiserror::Error;

use crate::points::PointId;

#[derive(Error, Debug)]
pub enum PinmarkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Point id {0} already exists")]
    DuplicateId(PointId),

    #[error("Point {0} not found")]
    NotFound(PointId),

    #[error("No pointer position available")]
    MissingPointer,

    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, PinmarkError>;
