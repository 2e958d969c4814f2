// File: crates/scatter-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic scene with every overlay enabled to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; the structural pixel checks below still run.
// - Every run decodes the PNG and checks size, background and point pixels.

use scatter_core::{DataPoint, RasterSurface, RenderOptions, RenderPipeline, Scene, Theme, ViewToggles, Viewport};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

const W: u32 = 400;
const H: u32 = 300;

/// Golden-independent checks: size, an untouched background pixel, a point centre.
fn check_pixels(bytes: &[u8], theme: &Theme) {
    let img = image::load_from_memory(bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (W, H));

    let rgba = |c: skia_safe::Color| [c.r(), c.g(), c.b(), 255];
    // Cell centre in the top-left corner; no overlay reaches it for this scene.
    assert_eq!(img.get_pixel(25, 25).0, rgba(theme.background), "background");
    // (0.85, 0.9) is drawn last at (340, 30).
    assert_eq!(img.get_pixel(340, 30).0, rgba(theme.point), "point centre");
}

fn render_bytes(theme: Theme) -> Vec<u8> {
    let scene = Scene::with_points(
        [(0.1, 0.2), (0.25, 0.35), (0.4, 0.3), (0.55, 0.6), (0.7, 0.55), (0.85, 0.9)]
            .into_iter()
            .map(DataPoint::from),
    );
    let pipeline = RenderPipeline::new(RenderOptions { theme, ..RenderOptions::default() });
    let mut surface = RasterSurface::new(Viewport::new(W as f32, H as f32)).expect("raster surface");
    pipeline.render(&mut surface, &scene, &ViewToggles::all());
    surface.to_png_bytes().expect("render bytes")
}

#[test]
fn golden_light_scatter() {
    let bytes = render_bytes(Theme::light());
    check_pixels(&bytes, &Theme::light());
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/scatter_light.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_dark_scatter() {
    let bytes = render_bytes(Theme::dark());
    check_pixels(&bytes, &Theme::dark());
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/scatter_dark.png");
    write_or_compare(&path, &bytes);
}
