//! Integration tests for the one-shot cylinder renderer
//!
//! These tests check the fixed render contract: raster dimensions,
//! determinism, the canonical front view, gradient behaviour, rotation
//! and offset effects, and fail-fast validation.

use std::collections::HashSet;

use cyl3d_core::{Axis, Colormap, Error, Orientation, DEFAULT_COLOR};
use cyl3d_render::{CylinderRenderer, RenderRequest, Rendering, BACKGROUND, RENDER_SIZE};
use image::RgbImage;
use nalgebra::Point3;

/// Render the default unit cylinder from the default camera
fn render_default() -> Rendering {
    CylinderRenderer::default()
        .render(&RenderRequest::default())
        .expect("default render should succeed")
}

/// Count pixels that differ from the background
fn covered_count(image: &RgbImage) -> usize {
    image.pixels().filter(|p| p.0 != BACKGROUND).count()
}

/// Bounding box of non-background pixels as (min_x, max_x, min_y, max_y)
fn coverage_bounds(image: &RgbImage) -> (u32, u32, u32, u32) {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0 != BACKGROUND {
            bounds = Some(match bounds {
                None => (x, x, y, y),
                Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
            });
        }
    }
    bounds.expect("image should contain non-background pixels")
}

#[test]
fn test_raster_dimensions() {
    let rendering = render_default();
    assert_eq!(rendering.color.dimensions(), (RENDER_SIZE, RENDER_SIZE));
    assert_eq!(rendering.gray.dimensions(), (RENDER_SIZE, RENDER_SIZE));
}

#[test]
fn test_repeated_renders_are_bit_identical() {
    let a = render_default();
    let b = render_default();
    assert_eq!(a.color.as_raw(), b.color.as_raw());
    assert_eq!(a.gray.as_raw(), b.gray.as_raw());

    // Also for a rotated, gradient-mapped configuration
    let renderer = CylinderRenderer::new(1.0, Axis::Z, Colormap::viridis()).unwrap();
    let request = RenderRequest {
        orientation: Orientation::new(30.0, 40.0, 50.0),
        ..Default::default()
    };
    let c = renderer.render(&request).unwrap();
    let d = renderer.render(&request).unwrap();
    assert_eq!(c.color.as_raw(), d.color.as_raw());
}

#[test]
fn test_canonical_front_view() {
    let rendering = render_default();
    let color = &rendering.color;

    // Solid default color in the middle, background in the corners
    assert_eq!(color.get_pixel(150, 150).0, DEFAULT_COLOR);
    assert_eq!(color.get_pixel(0, 0).0, BACKGROUND);
    assert_eq!(color.get_pixel(299, 0).0, BACKGROUND);
    assert_eq!(color.get_pixel(0, 299).0, BACKGROUND);
    assert_eq!(color.get_pixel(299, 299).0, BACKGROUND);

    // A solid colormap yields exactly two distinct colors
    let unique: HashSet<[u8; 3]> = color.pixels().map(|p| p.0).collect();
    assert_eq!(unique.len(), 2);
    assert!(unique.contains(&BACKGROUND));
    assert!(unique.contains(&DEFAULT_COLOR));

    // The silhouette covers a moderate, centered, upright patch
    let covered = covered_count(color);
    let total = (RENDER_SIZE * RENDER_SIZE) as usize;
    assert!(covered > total / 12, "covered {covered} of {total}");
    assert!(covered < total / 3, "covered {covered} of {total}");

    let (min_x, max_x, min_y, max_y) = coverage_bounds(color);
    assert!(max_y - min_y > max_x - min_x);
    assert!((min_x + max_x).abs_diff(299) <= 2);
    assert!((min_y + max_y).abs_diff(299) <= 2);
}

#[test]
fn test_grayscale_matches_color_raster() {
    let rendering = render_default();

    // Background maps to 0, the default color to its Rec. 601 luma
    let levels: HashSet<u8> = rendering.gray.pixels().map(|p| p.0[0]).collect();
    assert_eq!(levels, HashSet::from([0, 185]));

    // Gray coverage coincides with color coverage
    for (x, y, pixel) in rendering.color.enumerate_pixels() {
        let level = rendering.gray.get_pixel(x, y).0[0];
        if pixel.0 == BACKGROUND {
            assert_eq!(level, 0);
        } else {
            assert_eq!(level, 185);
        }
    }
}

#[test]
fn test_gradient_runs_along_screen_vertical() {
    let colormap: Colormap = "#ff0000:#0000ff".parse().unwrap();
    let renderer = CylinderRenderer::new(1.0, Axis::Z, colormap).unwrap();
    let rendering = renderer.render(&RenderRequest::default()).unwrap();

    // High-scalar (top) pixels are blue-dominant, low ones red-dominant
    let top = rendering.color.get_pixel(150, 60).0;
    let bottom = rendering.color.get_pixel(150, 240).0;
    assert!(top[2] > top[0], "top pixel {top:?}");
    assert!(bottom[0] > bottom[2], "bottom pixel {bottom:?}");
}

#[test]
fn test_gradient_follows_the_rotated_body() {
    let colormap: Colormap = "#ff0000:#0000ff".parse().unwrap();
    let renderer = CylinderRenderer::new(1.0, Axis::Z, colormap).unwrap();
    let rolled = renderer
        .render(&RenderRequest {
            orientation: Orientation::new(90.0, 0.0, 0.0),
            ..Default::default()
        })
        .unwrap();

    // Scalars are sampled before rotation, so a quarter roll lays the ramp
    // across the screen with the high-scalar end on the left
    let left = rolled.color.get_pixel(60, 150).0;
    let right = rolled.color.get_pixel(240, 150).0;
    assert!(left[2] > left[0], "left pixel {left:?}");
    assert!(right[0] > right[2], "right pixel {right:?}");
}

#[test]
fn test_gradient_axis_changes_colors_not_geometry() {
    let colormap: Colormap = "#ff0000:#0000ff".parse().unwrap();
    let along_z = CylinderRenderer::new(1.0, Axis::Z, colormap.clone())
        .unwrap()
        .render(&RenderRequest::default())
        .unwrap();
    let along_x = CylinderRenderer::new(1.0, Axis::X, colormap)
        .unwrap()
        .render(&RenderRequest::default())
        .unwrap();

    let mask_z: Vec<bool> = along_z.color.pixels().map(|p| p.0 != BACKGROUND).collect();
    let mask_x: Vec<bool> = along_x.color.pixels().map(|p| p.0 != BACKGROUND).collect();
    assert_eq!(mask_z, mask_x);
    assert_ne!(along_z.color.as_raw(), along_x.color.as_raw());
}

#[test]
fn test_roll_turns_silhouette_sideways() {
    let upright = render_default();
    let rolled = CylinderRenderer::default()
        .render(&RenderRequest {
            orientation: Orientation::new(90.0, 0.0, 0.0),
            ..Default::default()
        })
        .unwrap();

    let (ux0, ux1, uy0, uy1) = coverage_bounds(&upright.color);
    let (rx0, rx1, ry0, ry1) = coverage_bounds(&rolled.color);
    assert!(uy1 - uy0 > ux1 - ux0, "upright should be taller than wide");
    assert!(rx1 - rx0 > ry1 - ry0, "rolled should be wider than tall");
}

#[test]
fn test_pitch_points_the_open_end_at_the_camera() {
    // Pitched 90 degrees the tube points straight at the camera. With no
    // caps the raster is an annulus: a covered wall ring around a hollow
    // center where rays pass through both open ends
    let pitched = CylinderRenderer::default()
        .render(&RenderRequest {
            orientation: Orientation::new(0.0, 90.0, 0.0),
            ..Default::default()
        })
        .unwrap();

    let (x0, x1, y0, y1) = coverage_bounds(&pitched.color);
    let width = x1 - x0;
    let height = y1 - y0;
    assert!(width.abs_diff(height) <= 4, "width {width}, height {height}");

    assert_eq!(pitched.color.get_pixel(150, 150).0, BACKGROUND);
    assert_ne!(pitched.color.get_pixel(188, 150).0, BACKGROUND);
}

#[test]
fn test_camera_distance_scales_silhouette() {
    let near = CylinderRenderer::default()
        .render(&RenderRequest {
            distance: 2.0,
            ..Default::default()
        })
        .unwrap();
    let far = CylinderRenderer::default()
        .render(&RenderRequest {
            distance: 6.0,
            ..Default::default()
        })
        .unwrap();

    assert!(covered_count(&near.color) > covered_count(&far.color));
}

#[test]
fn test_center_offset_moves_silhouette_up() {
    let centered = render_default();
    let shifted = CylinderRenderer::default()
        .render(&RenderRequest {
            center: Point3::new(0.0, 0.0, 0.3),
            ..Default::default()
        })
        .unwrap();

    let (_, _, cy0, cy1) = coverage_bounds(&centered.color);
    let (_, _, sy0, sy1) = coverage_bounds(&shifted.color);
    assert!(sy0 < cy0);
    assert!(sy1 < cy1);
}

#[test]
fn test_invalid_parameters_are_rejected() {
    for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let result = CylinderRenderer::new(size, Axis::Z, Colormap::default());
        assert!(matches!(result, Err(Error::InvalidParameter { .. })));
    }

    let renderer = CylinderRenderer::default();
    for distance in [0.0, -3.0, f32::NAN] {
        let request = RenderRequest {
            distance,
            ..Default::default()
        };
        assert!(matches!(
            renderer.render(&request),
            Err(Error::InvalidParameter { .. })
        ));
    }

    let request = RenderRequest {
        center: Point3::new(f32::NAN, 0.0, 0.0),
        ..Default::default()
    };
    assert!(renderer.render(&request).is_err());

    let request = RenderRequest {
        orientation: Orientation::new(0.0, f32::INFINITY, 0.0),
        ..Default::default()
    };
    assert!(renderer.render(&request).is_err());
}
