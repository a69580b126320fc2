/// CPU rasterizer that fills an RGB framebuffer from a mesh
use cyl3d_core::{Camera, Mesh};
use image::{GrayImage, Luma, Rgb, RgbImage};

/// Vertex color used when a mesh carries no color channel
const UNCOLORED: [u8; 3] = [255, 255, 255];

/// Depth-buffered scanline rasterizer
pub struct Rasterizer {
    width: u32,
    height: u32,
    depth_buffer: Vec<f32>,
    color_buffer: Vec<[u8; 3]>,
}

impl Rasterizer {
    pub fn new(width: u32, height: u32, background: [u8; 3]) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            color_buffer: vec![background; size],
        }
    }

    pub fn render_mesh(&mut self, mesh: &Mesh, camera: &Camera) {
        for face in &mesh.faces {
            self.render_triangle(mesh, *face, camera);
        }
    }

    fn render_triangle(&mut self, mesh: &Mesh, face: [usize; 3], camera: &Camera) {
        // Project vertices to screen space
        let mut screen_coords = [(0.0f32, 0.0f32, 0.0f32); 3];
        for (corner, &index) in face.iter().enumerate() {
            match camera.project_to_screen(&mesh.vertices[index], self.width, self.height) {
                Some(coords) => screen_coords[corner] = coords,
                None => return, // Triangle reaches behind the near plane
            }
        }

        let colors = match &mesh.colors {
            Some(colors) => [colors[face[0]], colors[face[1]], colors[face[2]]],
            None => [UNCOLORED; 3],
        };

        self.rasterize_triangle(&screen_coords, &colors);
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32); 3], colors: &[[u8; 3]; 3]) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box, clipped to screen bounds
        let min_x = (v0.0.min(v1.0).min(v2.0).floor() as i32).max(0);
        let max_x = (v0.0.max(v1.0).max(v2.0).ceil() as i32).min(self.width as i32 - 1);
        let min_y = (v0.1.min(v1.1).min(v2.1).floor() as i32).max(0);
        let max_y = (v0.1.max(v1.1).max(v2.1).ceil() as i32).min(self.height as i32 - 1);

        // Scanline rasterization
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                // Barycentric coordinates
                if let Some((w0, w1, w2)) =
                    barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py))
                {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        // Interpolate depth and color
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;

                        let idx = y as usize * self.width as usize + x as usize;
                        if depth < self.depth_buffer[idx] {
                            self.depth_buffer[idx] = depth;
                            self.color_buffer[idx] = [
                                blend_channel(colors[0][0], colors[1][0], colors[2][0], w0, w1, w2),
                                blend_channel(colors[0][1], colors[1][1], colors[2][1], w0, w1, w2),
                                blend_channel(colors[0][2], colors[1][2], colors[2][2], w0, w1, w2),
                            ];
                        }
                    }
                }
            }
        }
    }

    /// Consume the framebuffer into an RGB image
    pub fn into_image(self) -> RgbImage {
        let mut image = RgbImage::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = (y * self.width + x) as usize;
                image.put_pixel(x, y, Rgb(self.color_buffer[idx]));
            }
        }
        image
    }
}

/// Convert a color raster to grayscale with Rec. 601 luma weights
pub fn to_grayscale(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let p = image.get_pixel(x, y);
        let luma = 0.299 * p[0] as f32 + 0.587 * p[1] as f32 + 0.114 * p[2] as f32;
        Luma([luma.round() as u8])
    })
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    a: (f32, f32),
    b: (f32, f32),
    c: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (b.1 - c.1) * (a.0 - c.0) + (c.0 - b.0) * (a.1 - c.1);

    // Degenerate (edge-on) triangles have no interior
    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((b.1 - c.1) * (p.0 - c.0) + (c.0 - b.0) * (p.1 - c.1)) / denom;
    let w1 = ((c.1 - a.1) * (p.0 - c.0) + (a.0 - c.0) * (p.1 - c.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

fn blend_channel(c0: u8, c1: u8, c2: u8, w0: f32, w1: f32, w2: f32) -> u8 {
    let value = w0 * c0 as f32 + w1 * c1 as f32 + w2 * c2 as f32;
    value.round().clamp(0.0, 255.0) as u8
}
