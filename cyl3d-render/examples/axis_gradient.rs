/// Example: Render the viridis gradient along each principal axis
///
/// Usage: cargo run --example axis_gradient

use cyl3d_core::{Axis, Colormap};
use cyl3d_render::{CylinderRenderer, RenderRequest};

fn main() -> anyhow::Result<()> {
    for (axis, path) in [
        (Axis::X, "cylinder_x.png"),
        (Axis::Y, "cylinder_y.png"),
        (Axis::Z, "cylinder_z.png"),
    ] {
        let renderer = CylinderRenderer::new(1.0, axis, Colormap::viridis())?;
        let rendering = renderer.render(&RenderRequest::default())?;
        rendering.color.save(path)?;
        println!("Wrote {} ({:?} gradient)", path, axis);
    }

    Ok(())
}
