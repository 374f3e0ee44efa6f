// File: crates/demo/src/main.rs
// Summary: Demo loads the state CSV and renders the scatter chart to PNG and SVG.

use anyhow::{Context, Result};
use scatter_core::{load_csv_path, RenderOptions, ScatterChart};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept path from CLI or fall back to the bundled sample data.
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/data.csv".to_string());
    let path = PathBuf::from(&raw);
    println!("Using input file: {}", path.display());

    let (points, report) = load_csv_path(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} points ({} rows rejected)", report.rows, report.rejected);

    let chart = ScatterChart::new(points);
    let opts = RenderOptions::default();

    let out_png = out_name(&path);
    chart.render_to_png(&opts, &out_png)?;
    println!("Wrote {}", out_png.display());

    let out_svg = out_png.with_extension("svg");
    chart.render_to_svg(&opts, &out_svg)?;
    println!("Wrote {}", out_svg.display());

    Ok(())
}

/// Produce output file name like target/out/scatter_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("scatter_{}.png", stem));
    out
}
