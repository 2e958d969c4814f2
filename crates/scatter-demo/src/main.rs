// File: crates/scatter-demo/src/main.rs
// Summary: Demo loads x,y points from CSV (or a built-in sample), renders every overlay to PNG and prints the summary.

use anyhow::{Context, Result};
use scatter_core::{theme, DataPoint, RasterSurface, RenderOptions, RenderPipeline, Scene, ViewToggles, Viewport};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    // Args: [points.csv] [out.png] [theme]
    let mut args = std::env::args().skip(1);
    let input = args.next().filter(|a| a != "-");
    let out = args.next().map(PathBuf::from);
    let theme_name = args.next().unwrap_or_else(|| "light".to_string());

    let (points, out) = match input {
        Some(raw) => {
            let path = PathBuf::from(raw);
            let points = load_points_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            (points, out.unwrap_or_else(|| out_name_for(&path)))
        }
        None => {
            println!("No input file given; using the built-in sample.");
            (sample_points(), out.unwrap_or_else(|| PathBuf::from("target/out/scatter_sample.png")))
        }
    };

    if points.is_empty() {
        anyhow::bail!("no points loaded; expected numeric x,y columns");
    }
    println!("Loaded {} points", points.len());

    let points = normalize_if_needed(points);
    let scene = Scene::with_points(points);
    let pipeline = RenderPipeline::new(RenderOptions { theme: theme::find(&theme_name), ..RenderOptions::default() });

    let mut surface = RasterSurface::new(Viewport::default())?;
    let summary = pipeline.render(&mut surface, &scene, &ViewToggles::all());
    surface.save_png(&out).with_context(|| format!("writing {}", out.display()))?;

    println!("{summary}");
    println!("Wrote {}", out.display());
    Ok(())
}

/// Produce output file name like target/out/scatter_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("points");
    PathBuf::from("target/out").join(format!("scatter_{stem}.png"))
}

/// Load a CSV with x/y columns (by header name, else the first two columns).
fn load_points_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    log::debug!("headers: {headers:?}");

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.iter().any(|want| h == want))
    };
    let i_x = idx(&["x", "px", "u"]).unwrap_or(0);
    let i_y = idx(&["y", "py", "v"]).unwrap_or(1);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite()) };
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => out.push(DataPoint::new(x, y)),
            _ => log::warn!("skipping row {}: not numeric", row + 2),
        }
    }
    Ok(out)
}

/// Values already in the unit square are kept; anything else is min-max scaled per axis.
fn normalize_if_needed(points: Vec<DataPoint>) -> Vec<DataPoint> {
    let inside = points.iter().all(|p| (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
    if inside {
        return points;
    }

    let (min_x, max_x) = minmax(points.iter().map(|p| p.x));
    let (min_y, max_y) = minmax(points.iter().map(|p| p.y));
    log::info!("rescaling x [{min_x}, {max_x}] and y [{min_y}, {max_y}] into the unit square");
    let scale = |v: f64, lo: f64, hi: f64| if hi - lo < 1e-12 { 0.5 } else { (v - lo) / (hi - lo) };
    points
        .into_iter()
        .map(|p| DataPoint::new(scale(p.x, min_x, max_x), scale(p.y, min_y, max_y)))
        .collect()
}

fn minmax(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

fn sample_points() -> Vec<DataPoint> {
    [(0.08, 0.15), (0.2, 0.3), (0.31, 0.22), (0.45, 0.5), (0.52, 0.41), (0.66, 0.7), (0.78, 0.62), (0.9, 0.88)]
        .into_iter()
        .map(DataPoint::from)
        .collect()
}
