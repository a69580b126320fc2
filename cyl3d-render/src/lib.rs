/// Off-screen cylinder renderer
///
/// Builds a color-graded cylinder mesh, rotates it, and rasterizes it from
/// a fixed front-facing camera into color and grayscale rasters. Every
/// render call is an independent, deterministic computation.

use cyl3d_core::{Axis, Camera, Colormap, Error, Mesh, Orientation, Result, Transform};
use image::{GrayImage, RgbImage};
use nalgebra::Point3;

pub mod preview;
pub mod rasterizer;

pub use rasterizer::Rasterizer;

/// Output raster width and height in pixels
pub const RENDER_SIZE: u32 = 300;

/// Number of segments around the cylinder circumference
pub const CYLINDER_SEGMENTS: usize = 1000;

/// Cylinder radius as a fraction of its nominal size
pub const RADIUS_RATIO: f32 = 0.2;

/// Default camera distance from the origin
pub const DEFAULT_DISTANCE: f32 = 3.0;

/// Framebuffer background color
pub const BACKGROUND: [u8; 3] = [0, 0, 0];

/// One-shot renderer for a color-graded cylinder.
///
/// The cylinder's nominal size, gradient axis and colormap are fixed at
/// construction; position, orientation and camera distance vary per call.
pub struct CylinderRenderer {
    size: f32,
    axis: Axis,
    colormap: Colormap,
}

/// Per-call render parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    /// Cylinder center position, applied before rotation
    pub center: Point3<f32>,
    /// Rotation about the world origin, in degrees
    pub orientation: Orientation,
    /// Camera distance along +X
    pub distance: f32,
    /// Preview the color raster in the terminal
    pub show: bool,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            orientation: Orientation::zero(),
            distance: DEFAULT_DISTANCE,
            show: false,
        }
    }
}

/// Color and grayscale rasters produced by one render call
pub struct Rendering {
    pub color: RgbImage,
    pub gray: GrayImage,
}

impl CylinderRenderer {
    /// Create a renderer for a cylinder of the given nominal size.
    ///
    /// The size is the cylinder height; the radius is [`RADIUS_RATIO`]
    /// times the size. The gradient axis selects which body-frame
    /// coordinate drives the colormap.
    pub fn new(size: f32, axis: Axis, colormap: Colormap) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "size",
                value: size,
            });
        }

        Ok(Self {
            size,
            axis,
            colormap,
        })
    }

    /// Render the cylinder and return the color and grayscale rasters.
    ///
    /// The mesh is colored from its pre-rotation coordinates along the
    /// gradient axis, rotated about the world origin, and rasterized from
    /// a camera at `(distance, 0, 0)` looking at the origin with +Z up.
    pub fn render(&self, request: &RenderRequest) -> Result<Rendering> {
        validate_request(request)?;

        // Cap-less cylinder aligned with +Z at the requested center
        let mut mesh = Mesh::cylinder(
            request.center,
            RADIUS_RATIO * self.size,
            self.size,
            CYLINDER_SEGMENTS,
        );

        // Scalars along the gradient axis, mapped through the colormap
        let scalars = mesh.axis_scalars(self.axis);
        let colors = self.colormap.map_scalars(&scalars);
        mesh.set_scalars(scalars);
        mesh.set_colors(colors);

        // Rotate about the world origin
        let model = Transform::rotation_matrix(&request.orientation);
        mesh.transform(&model);

        // Fixed front-facing camera
        let camera = Camera::front(request.distance, RENDER_SIZE, RENDER_SIZE);

        let mut rasterizer = Rasterizer::new(RENDER_SIZE, RENDER_SIZE, BACKGROUND);
        rasterizer.render_mesh(&mesh, &camera);

        let color = rasterizer.into_image();
        let gray = rasterizer::to_grayscale(&color);

        if request.show {
            preview::show(&color)?;
        }

        Ok(Rendering { color, gray })
    }
}

impl Default for CylinderRenderer {
    /// Unit-size cylinder with a Z gradient and the solid default color
    fn default() -> Self {
        Self {
            size: 1.0,
            axis: Axis::Z,
            colormap: Colormap::default(),
        }
    }
}

fn validate_request(request: &RenderRequest) -> Result<()> {
    if !request.distance.is_finite() || request.distance <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "distance",
            value: request.distance,
        });
    }

    let fields = [
        ("center.x", request.center.x),
        ("center.y", request.center.y),
        ("center.z", request.center.z),
        ("roll", request.orientation.roll),
        ("pitch", request.orientation.pitch),
        ("yaw", request.orientation.yaw),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(Error::InvalidParameter { name, value });
        }
    }

    Ok(())
}
