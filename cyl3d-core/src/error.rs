/// Error types shared by the cyl3d crates
use thiserror::Error;

/// Main error type for cyl3d operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid axis: {0:?} (expected one of x, y, z)")]
    InvalidAxis(String),

    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("Invalid colormap spec: {0:?}")]
    ColormapParse(String),
}

/// Result type alias for cyl3d operations
pub type Result<T> = std::result::Result<T, Error>;
