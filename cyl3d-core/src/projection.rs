/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

/// Perspective camera for rendering
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Vertical field of view (30 degrees)
    pub const FOV: f32 = std::f32::consts::PI / 6.0;
    /// Near clip plane distance
    pub const NEAR: f32 = 0.1;
    /// Far clip plane distance
    pub const FAR: f32 = 100.0;

    /// Create a front-facing camera on the +X axis.
    ///
    /// The camera sits at `(distance, 0, 0)`, looks at the origin and keeps
    /// world +Z pointing up on screen.
    pub fn front(distance: f32, width: u32, height: u32) -> Self {
        Self {
            position: Point3::new(distance, 0.0, 0.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 0.0, 1.0),
            fov: Self::FOV,
            aspect: width as f32 / height as f32,
            near: Self::NEAR,
            far: Self::FAR,
        }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Project a 3D point to 2D screen space.
    ///
    /// Returns `(screen_x, screen_y, depth)` where depth increases away from
    /// the camera, or `None` for points nearer than the near plane. Points
    /// outside the viewport still project; callers clip in screen space.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        // Transform to clip space
        let clip = self.projection_matrix() * self.view_matrix() * point.to_homogeneous();

        // w equals the view depth; clip points on the camera side of the
        // near plane (behind the eye, w is negative)
        if clip.w < self.near {
            return None;
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let depth = clip.z / clip.w;

        // Convert to screen space
        let screen_x = (ndc_x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc_y) * 0.5 * height as f32;

        Some((screen_x, screen_y, depth))
    }
}
