/// Geometry primitives for cylinder rendering
use std::f32::consts::TAU;
use std::str::FromStr;

use nalgebra::{Matrix4, Point3};

use crate::error::Error;

/// A principal coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of this axis into a point's coordinates
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(Error::InvalidAxis(s.to_string())),
        }
    }
}

/// An indexed triangle mesh with optional per-vertex scalars and colors
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Point3<f32>>,
    pub faces: Vec<[usize; 3]>,
    pub scalars: Option<Vec<f32>>,
    pub colors: Option<Vec<[u8; 3]>>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            scalars: None,
            colors: None,
        }
    }

    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
            scalars: None,
            colors: None,
        }
    }

    pub fn add_vertex(&mut self, vertex: Point3<f32>) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub fn add_face(&mut self, face: [usize; 3]) {
        self.faces.push(face);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Create a cap-less cylinder around `center`, aligned with the Z axis.
    ///
    /// The wall is a closed band of `segments` quads (two triangles each)
    /// between two rings of shared vertices, so the mesh has `2 * segments`
    /// vertices and `2 * segments` faces. The open ends are not filled.
    pub fn cylinder(center: Point3<f32>, radius: f32, height: f32, segments: usize) -> Self {
        let segments = segments.max(3);
        let half = height / 2.0;
        let mut mesh = Self::with_capacity(2 * segments, 2 * segments);

        // Bottom ring, then top ring
        for ring in 0..2 {
            let z = if ring == 0 { -half } else { half };
            for i in 0..segments {
                let theta = TAU * i as f32 / segments as f32;
                mesh.add_vertex(Point3::new(
                    center.x + radius * theta.cos(),
                    center.y + radius * theta.sin(),
                    center.z + z,
                ));
            }
        }

        // One wall quad per segment, wrapping back to the seam
        for i in 0..segments {
            let j = (i + 1) % segments;
            let (b0, b1) = (i, j);
            let (t0, t1) = (segments + i, segments + j);
            mesh.add_face([b0, b1, t1]);
            mesh.add_face([b0, t1, t0]);
        }

        mesh
    }

    /// Per-vertex coordinate along the given axis
    pub fn axis_scalars(&self, axis: Axis) -> Vec<f32> {
        let index = axis.index();
        self.vertices.iter().map(|v| v[index]).collect()
    }

    /// Attach a scalar channel; ignored when the length does not match
    pub fn set_scalars(&mut self, scalars: Vec<f32>) {
        if scalars.len() == self.vertices.len() {
            self.scalars = Some(scalars);
        }
    }

    /// Attach vertex colors; ignored when the length does not match
    pub fn set_colors(&mut self, colors: Vec<[u8; 3]>) {
        if colors.len() == self.vertices.len() {
            self.colors = Some(colors);
        }
    }

    /// Apply a homogeneous transform to every vertex in place
    pub fn transform(&mut self, matrix: &Matrix4<f32>) {
        for vertex in &mut self.vertices {
            *vertex = matrix.transform_point(vertex);
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
