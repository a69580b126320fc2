/// Cyl3D Core Library - Shared geometry and transformation logic
///
/// This library provides the stateless core functionality for cylinder
/// rendering, including mesh construction, colormap lookup, Euler-angle
/// rotations, and projection calculations.

pub mod colormap;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use colormap::{Colormap, DEFAULT_COLOR};
pub use error::{Error, Result};
pub use geometry::{Axis, Mesh};
pub use projection::Camera;
pub use transform::{Orientation, Transform};
