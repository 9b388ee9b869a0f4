#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
//! Layouts and views walkthrough, rendered with a vertex-splat renderer.
//!
//! Run with: cargo run --example layouts_and_views -- [output_dir]
//!
//! Writes one PNG per layout to `output_dir` (default: target/surfplot-demo).

use std::f32::consts::PI;
use std::path::PathBuf;

use surfplot::*;

/// Projects each vertex through the cell camera and draws a gray dot.
struct SplatRenderer;

impl Renderer for SplatRenderer {
    fn render_cell(&mut self, cell: &CellRender<'_>) -> RenderResult<RgbaImage> {
        let mut tile = RgbaImage::from_pixel(
            cell.width,
            cell.height,
            Rgba(cell.options.background_rgba8()),
        );
        let surface = Rgba(cell.options.surface_rgba8());
        let vp = cell.camera.view_projection_matrix();
        for &v in cell.mesh.vertices() {
            let ndc = vp.project_point3(v);
            if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
                continue;
            }
            let x = ((ndc.x + 1.0) * 0.5 * cell.width as f32) as u32;
            let y = ((1.0 - ndc.y) * 0.5 * cell.height as f32) as u32;
            if x < cell.width && y < cell.height {
                tile.put_pixel(x, y, surface);
            }
        }
        Ok(tile)
    }
}

/// A UV sphere squashed into a hemisphere-like ellipsoid.
fn hemisphere(x_center: f32) -> Result<SurfaceMesh> {
    const STACKS: u32 = 24;
    const SLICES: u32 = 48;
    let radii = Vec3::new(35.0, 70.0, 55.0);
    let mut vertices = Vec::new();
    for i in 0..=STACKS {
        let theta = PI * i as f32 / STACKS as f32;
        for j in 0..SLICES {
            let phi = 2.0 * PI * j as f32 / SLICES as f32;
            let unit = Vec3::new(theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos());
            vertices.push(Vec3::new(x_center, 0.0, 0.0) + unit * radii);
        }
    }
    let mut faces = Vec::new();
    for i in 0..STACKS {
        for j in 0..SLICES {
            let a = i * SLICES + j;
            let b = i * SLICES + (j + 1) % SLICES;
            let c = a + SLICES;
            let d = b + SLICES;
            faces.push(UVec3::new(a, c, b));
            faces.push(UVec3::new(b, c, d));
        }
    }
    SurfaceMesh::new(vertices, faces)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("target/surfplot-demo"), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    let lh = hemisphere(-40.0)?;
    let rh = hemisphere(40.0)?;

    let plots = [
        ("grid", Plot::new().left(lh.clone()).right(rh.clone())),
        (
            "row",
            Plot::new()
                .left(lh.clone())
                .right(rh.clone())
                .size(800, 200)
                .zoom(1.2)
                .layout(LayoutMode::Row),
        ),
        (
            "column",
            Plot::new()
                .left(lh.clone())
                .right(rh.clone())
                .size(200, 600)
                .zoom(1.6)
                .layout(LayoutMode::Column),
        ),
        (
            "right_all_views",
            Plot::new()
                .right(rh.clone())
                .size(900, 200)
                .zoom(0.8)
                .layout(LayoutMode::Row)
                .views(View::ALL),
        ),
        (
            "anterior_flipped",
            Plot::new()
                .left(lh)
                .right(rh)
                .size(400, 200)
                .zoom(1.2)
                .view(View::Anterior)
                .flip(true),
        ),
    ];

    for (name, plot) in plots {
        let figure = plot.render(&mut SplatRenderer)?;
        let (rows, cols) = figure.plan().shape();
        let path = out_dir.join(format!("{name}.png"));
        std::fs::write(&path, figure.to_png()?)?;
        println!("{name}: {rows}x{cols} cells -> {}", path.display());
    }

    Ok(())
}
