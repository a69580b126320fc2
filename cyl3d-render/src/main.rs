/// Cyl3D Demo - Cylinder Snapshot
///
/// Renders a color-graded cylinder off-screen and writes the color and
/// grayscale rasters as PNG files. With --show the color raster is also
/// previewed in the terminal.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cyl3d_core::{Axis, Colormap, Orientation};
use cyl3d_render::{CylinderRenderer, RenderRequest, DEFAULT_DISTANCE};
use nalgebra::Point3;

#[derive(Parser)]
#[command(name = "cyl3d", about = "Render a color-graded cylinder to PNG", version)]
struct Args {
    /// Cylinder size (height; the radius is 0.2x the size)
    #[arg(long, default_value_t = 1.0)]
    size: f32,

    /// Gradient axis: x, y or z
    #[arg(long, default_value = "z")]
    axis: String,

    /// Colormap spec: "default", "gray", "viridis" or "#rrggbb[:#rrggbb...]"
    #[arg(long, default_value = "default")]
    cmap: String,

    /// Cylinder center x coordinate
    #[arg(long, default_value_t = 0.0)]
    x: f32,

    /// Cylinder center y coordinate
    #[arg(long, default_value_t = 0.0)]
    y: f32,

    /// Cylinder center z coordinate
    #[arg(long, default_value_t = 0.0)]
    z: f32,

    /// Roll angle in degrees (about X)
    #[arg(long, default_value_t = 0.0)]
    roll: f32,

    /// Pitch angle in degrees (about Y)
    #[arg(long, default_value_t = 0.0)]
    pitch: f32,

    /// Yaw angle in degrees (about Z)
    #[arg(long, default_value_t = 0.0)]
    yaw: f32,

    /// Camera distance from the origin
    #[arg(long, default_value_t = DEFAULT_DISTANCE)]
    distance: f32,

    /// Color output path
    #[arg(long, default_value = "cylinder.png")]
    out: PathBuf,

    /// Grayscale output path
    #[arg(long, default_value = "cylinder_gray.png")]
    gray_out: PathBuf,

    /// Preview the render in the terminal
    #[arg(long)]
    show: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let axis: Axis = args.axis.parse()?;
    let colormap: Colormap = args.cmap.parse()?;

    let renderer = CylinderRenderer::new(args.size, axis, colormap)?;
    let request = RenderRequest {
        center: Point3::new(args.x, args.y, args.z),
        orientation: Orientation::new(args.roll, args.pitch, args.yaw),
        distance: args.distance,
        show: args.show,
    };

    let rendering = renderer.render(&request)?;

    rendering
        .color
        .save(&args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    rendering
        .gray
        .save(&args.gray_out)
        .with_context(|| format!("failed to write {}", args.gray_out.display()))?;

    println!(
        "Rendered {}x{} cylinder to {} and {}",
        rendering.color.width(),
        rendering.color.height(),
        args.out.display(),
        args.gray_out.display()
    );

    Ok(())
}
