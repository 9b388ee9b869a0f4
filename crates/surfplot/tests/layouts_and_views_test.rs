//! Integration tests walking through the layout and view options.
//!
//! Each test mirrors one way of configuring a plot: default grid, row and
//! column layouts, a single hemisphere, selected views, and flipping.

use surfplot::*;

/// Fills each cell with the hemisphere's color, darker for later views.
struct TagRenderer {
    seen: Vec<(Hemisphere, View)>,
}

impl TagRenderer {
    fn new() -> Self {
        Self { seen: Vec::new() }
    }
}

fn tag_color(hemisphere: Hemisphere, view: View) -> Rgba<u8> {
    let shade = 255 - 30 * View::ALL.iter().position(|&v| v == view).unwrap() as u8;
    match hemisphere {
        Hemisphere::Left => Rgba([shade, 0, 0, 255]),
        Hemisphere::Right => Rgba([0, 0, shade, 255]),
    }
}

impl Renderer for TagRenderer {
    fn render_cell(&mut self, cell: &CellRender<'_>) -> RenderResult<RgbaImage> {
        self.seen.push((cell.cell.hemisphere, cell.cell.view));
        Ok(RgbaImage::from_pixel(
            cell.width,
            cell.height,
            tag_color(cell.cell.hemisphere, cell.cell.view),
        ))
    }
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render_cell(&mut self, _cell: &CellRender<'_>) -> RenderResult<RgbaImage> {
        Err(RenderError::Backend("no graphics context".into()))
    }
}

/// An octahedron standing in for a hemisphere, shifted along X.
fn hemisphere_mesh(x_offset: f32) -> SurfaceMesh {
    let c = Vec3::new(x_offset, 0.0, 0.0);
    let vertices = vec![
        c + Vec3::new(0.6, 0.0, 0.0),
        c + Vec3::new(-0.6, 0.0, 0.0),
        c + Vec3::new(0.0, 1.0, 0.0),
        c + Vec3::new(0.0, -1.0, 0.0),
        c + Vec3::new(0.0, 0.0, 0.8),
        c + Vec3::new(0.0, 0.0, -0.8),
    ];
    let faces = vec![
        UVec3::new(0, 2, 4),
        UVec3::new(2, 1, 4),
        UVec3::new(1, 3, 4),
        UVec3::new(3, 0, 4),
        UVec3::new(2, 0, 5),
        UVec3::new(1, 2, 5),
        UVec3::new(3, 1, 5),
        UVec3::new(0, 3, 5),
    ];
    SurfaceMesh::new(vertices, faces).expect("valid mesh")
}

fn lh() -> SurfaceMesh {
    hemisphere_mesh(-0.7)
}

fn rh() -> SurfaceMesh {
    hemisphere_mesh(0.7)
}

fn layout_of(figure: &Figure) -> Vec<Vec<(Hemisphere, View)>> {
    figure
        .plan()
        .grid()
        .iter()
        .map(|row| row.iter().map(|c| (c.hemisphere, c.view)).collect())
        .collect()
}

#[test]
fn default_plot_is_two_by_two_grid() {
    let mut renderer = TagRenderer::new();
    let figure = Plot::new().left(lh()).right(rh()).render(&mut renderer).unwrap();

    assert_eq!(
        layout_of(&figure),
        vec![
            vec![
                (Hemisphere::Left, View::Lateral),
                (Hemisphere::Right, View::Lateral)
            ],
            vec![
                (Hemisphere::Left, View::Medial),
                (Hemisphere::Right, View::Medial)
            ],
        ]
    );
    assert_eq!(figure.dimensions(), (500, 400));
    assert_eq!(figure.plan().zoom(), 1.5);

    // Left hemisphere lives in the left column.
    let top_left = figure.cell_image(0, 0).unwrap();
    assert_eq!(*top_left.get_pixel(0, 0), tag_color(Hemisphere::Left, View::Lateral));
    let bottom_right = figure.cell_image(1, 1).unwrap();
    assert_eq!(
        *bottom_right.get_pixel(10, 10),
        tag_color(Hemisphere::Right, View::Medial)
    );
}

#[test]
fn row_layout_is_one_horizontal_strip() {
    let plot = Plot::new()
        .left(lh())
        .right(rh())
        .size(800, 200)
        .zoom(1.2)
        .layout(LayoutMode::Row);
    let mut renderer = TagRenderer::new();
    let figure = plot.render(&mut renderer).unwrap();

    assert_eq!(figure.plan().shape(), (1, 4));
    assert_eq!(figure.cell_size(), (200, 200));
    assert_eq!(
        renderer.seen,
        vec![
            (Hemisphere::Left, View::Lateral),
            (Hemisphere::Right, View::Lateral),
            (Hemisphere::Left, View::Medial),
            (Hemisphere::Right, View::Medial),
        ]
    );
    assert!(figure.cameras().iter().all(|c| c.zoom == 1.2));
}

#[test]
fn column_layout_is_one_vertical_strip() {
    let plot = Plot::new()
        .left(lh())
        .right(rh())
        .size(200, 600)
        .zoom(1.6)
        .layout(LayoutMode::Column);
    let figure = plot.render(&mut TagRenderer::new()).unwrap();

    assert_eq!(figure.plan().shape(), (4, 1));
    assert_eq!(figure.cell_size(), (200, 150));
    assert_eq!(figure.dimensions(), (200, 600));
}

#[test]
fn single_hemisphere_grid_is_a_row() {
    let plot = Plot::new().left(lh()).size(400, 200).zoom(1.2);
    let figure = plot.render(&mut TagRenderer::new()).unwrap();

    assert_eq!(
        layout_of(&figure),
        vec![vec![
            (Hemisphere::Left, View::Lateral),
            (Hemisphere::Left, View::Medial)
        ]]
    );
    assert_eq!(figure.cell_size(), (200, 200));
}

#[test]
fn single_view_for_both_hemispheres() {
    let plot = Plot::new()
        .left(lh())
        .right(rh())
        .size(400, 200)
        .zoom(1.2)
        .view(View::Lateral);
    let figure = plot.render(&mut TagRenderer::new()).unwrap();

    assert_eq!(figure.plan().shape(), (1, 2));
    assert_eq!(figure.cell_size(), (200, 200));
}

#[test]
fn views_are_plotted_in_the_order_given() {
    let plot = Plot::new()
        .left(lh())
        .right(rh())
        .size(500, 400)
        .zoom(1.4)
        .views([View::Lateral, View::Posterior]);
    let figure = plot.render(&mut TagRenderer::new()).unwrap();

    assert_eq!(
        layout_of(&figure),
        vec![
            vec![
                (Hemisphere::Left, View::Lateral),
                (Hemisphere::Right, View::Lateral)
            ],
            vec![
                (Hemisphere::Left, View::Posterior),
                (Hemisphere::Right, View::Posterior)
            ],
        ]
    );
}

#[test]
fn all_views_of_the_right_hemisphere_in_a_row() {
    let plot = Plot::with_surfaces(None, Some(rh()))
        .size(900, 200)
        .zoom(0.8)
        .layout(LayoutMode::Row)
        .views(View::ALL);
    let mut renderer = TagRenderer::new();
    let figure = plot.render(&mut renderer).unwrap();

    assert_eq!(figure.plan().shape(), (1, 6));
    assert_eq!(figure.cell_size(), (150, 200));
    let views: Vec<View> = renderer.seen.iter().map(|&(_, v)| v).collect();
    assert_eq!(views, View::ALL.to_vec());
    assert!(renderer.seen.iter().all(|&(h, _)| h == Hemisphere::Right));
}

#[test]
fn flip_puts_right_hemisphere_first() {
    let plot = Plot::new()
        .left(lh())
        .right(rh())
        .size(200, 200)
        .zoom(3.0)
        .view(View::Anterior)
        .flip(true);
    let figure = plot.render(&mut TagRenderer::new()).unwrap();

    assert_eq!(
        layout_of(&figure),
        vec![vec![
            (Hemisphere::Right, View::Anterior),
            (Hemisphere::Left, View::Anterior)
        ]]
    );
    // Both anterior cameras look toward -Y, each at its own hemisphere.
    let cams = figure.cameras();
    assert!(cams[0].target.x > 0.0);
    assert!(cams[1].target.x < 0.0);
    assert!(cams.iter().all(|c| c.look_dir().y < 0.0));
}

#[test]
fn json_configuration_matches_builder() {
    let from_json = Plot::new()
        .left(lh())
        .right(rh())
        .configure_json(r#"{"layout": "row", "views": "anterior", "flip": true, "size": [400, 200]}"#)
        .unwrap();
    let from_builder = Plot::new()
        .left(lh())
        .right(rh())
        .layout(LayoutMode::Row)
        .view(View::Anterior)
        .flip(true)
        .size(400, 200);
    assert_eq!(from_json.plan().unwrap(), from_builder.plan().unwrap());
}

#[test]
fn invalid_configuration_is_reported() {
    let err = Plot::new()
        .left(lh())
        .configure_json(r#"{"layout": "diagonal"}"#)
        .unwrap_err();
    assert!(err.is_invalid_configuration());

    let err = Plot::new().left(lh()).views(Vec::new()).plan().unwrap_err();
    assert!(err.is_invalid_configuration());

    let err = Plot::new().plan().unwrap_err();
    assert!(err.is_invalid_configuration());

    let err = Plot::new().render(&mut TagRenderer::new()).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Plan(SurfplotError::InvalidConfiguration(_))
    ));
}

#[test]
fn oversized_canvas_is_rejected_before_rendering() {
    let mut renderer = TagRenderer::new();
    let err = Plot::new()
        .left(lh())
        .size(u32::MAX, u32::MAX)
        .render(&mut renderer)
        .unwrap_err();
    assert!(matches!(
        err,
        RenderError::Plan(SurfplotError::InvalidConfiguration(_))
    ));
    assert!(renderer.seen.is_empty());
}

#[test]
fn renderer_failure_propagates() {
    let err = Plot::new()
        .right(rh())
        .render(&mut FailingRenderer)
        .unwrap_err();
    assert!(err.to_string().contains("no graphics context"));
}

#[test]
fn cameras_are_exposed_without_rendering() {
    let plot = Plot::new().left(lh()).right(rh()).zoom(2.0);
    let cameras = plot.cameras().unwrap();
    assert_eq!(cameras.len(), 4);
    // Grid order: lateral-left, lateral-right, medial-left, medial-right.
    assert!(cameras[0].position.x < cameras[0].target.x);
    assert!(cameras[1].position.x > cameras[1].target.x);
    assert!(cameras[2].position.x > cameras[2].target.x);
    assert!(cameras[3].position.x < cameras[3].target.x);
}

#[test]
fn render_options_reach_the_renderer() {
    struct OptionsProbe(Option<RenderOptions>);

    impl Renderer for OptionsProbe {
        fn render_cell(&mut self, cell: &CellRender<'_>) -> RenderResult<RgbaImage> {
            self.0 = Some(cell.options.clone());
            Ok(RgbaImage::new(cell.width, cell.height))
        }
    }

    let mut probe = OptionsProbe(None);
    Plot::new()
        .left(lh())
        .background(Vec3::ZERO)
        .brightness(0.9)
        .off_screen(false)
        .render(&mut probe)
        .unwrap();
    let seen = probe.0.unwrap();
    assert_eq!(seen.background, Vec3::ZERO);
    assert_eq!(seen.brightness, 0.9);
    assert!(!seen.off_screen);
}

#[test]
fn transparent_export_clears_background_only() {
    struct Inset;

    impl Renderer for Inset {
        fn render_cell(&mut self, cell: &CellRender<'_>) -> RenderResult<RgbaImage> {
            let mut tile = RgbaImage::from_pixel(
                cell.width,
                cell.height,
                Rgba(cell.options.background_rgba8()),
            );
            tile.put_pixel(cell.width / 2, cell.height / 2, Rgba(cell.options.surface_rgba8()));
            Ok(tile)
        }
    }

    let figure = Plot::new()
        .right(rh())
        .size(20, 10)
        .view(View::Lateral)
        .render(&mut Inset)
        .unwrap();
    let png = figure
        .to_png_with(&ExportOptions {
            transparent_background: true,
        })
        .unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
    assert_eq!(decoded.get_pixel(10, 5).0, [128, 128, 128, 255]);
}
