// File: crates/scatter-core/src/svg.rs
// Summary: Standalone SVG document emission mirroring the raster output.

use std::fmt::Write as _;

use anyhow::Result;
use skia_safe as skia;

use crate::chart::{RenderOptions, ScatterChart};
use crate::scene::Scene;
use crate::types::{LABEL_DX_EM, LABEL_DY_EM, LABEL_FONT_PX, MARK_RADIUS};

impl ScatterChart {
    /// Render the chart to an SVG file.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let doc = self.render_to_svg_string(opts);
        let path = output_svg_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, doc)?;
        Ok(())
    }

    /// Render the chart to an SVG document string. Deterministic: identical
    /// inputs yield byte-identical output.
    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> String {
        let scene = self.layout(opts);
        write_document(&scene, opts)
    }
}

fn write_document(scene: &Scene, opts: &RenderOptions) -> String {
    let theme = &opts.theme;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height,
    );
    let _ = writeln!(
        out,
        r#"  <rect width="{}" height="{}" fill="{}"/>"#,
        scene.width,
        scene.height,
        hex(theme.background),
    );

    let (l, t) = (scene.plot.left, scene.plot.top);
    let (r, b) = (scene.plot.right, scene.plot.bottom);
    let axis = hex(theme.axis_line);
    let label = hex(theme.axis_label);

    // Axis lines.
    let _ = writeln!(
        out,
        r#"  <line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="{axis}" stroke-width="1.5"/>"#
    );
    let _ = writeln!(
        out,
        r#"  <line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="{axis}" stroke-width="1.5"/>"#
    );

    // Ticks with labels.
    for tick in &scene.x_ticks {
        let _ = writeln!(
            out,
            r#"  <line x1="{p:.1}" y1="{b}" x2="{p:.1}" y2="{b2}" stroke="{axis}"/>"#,
            p = tick.pos,
            b2 = b + 6,
        );
        if opts.draw_labels {
            let _ = writeln!(
                out,
                r#"  <text x="{p:.1}" y="{y}" font-size="12" text-anchor="middle" fill="{label}">{txt}</text>"#,
                p = tick.pos,
                y = b + 20,
                txt = escape(&tick.label),
            );
        }
    }
    for tick in &scene.y_ticks {
        let _ = writeln!(
            out,
            r#"  <line x1="{l2}" y1="{p:.1}" x2="{l}" y2="{p:.1}" stroke="{axis}"/>"#,
            p = tick.pos,
            l2 = l - 6,
        );
        if opts.draw_labels {
            let _ = writeln!(
                out,
                r#"  <text x="{x}" y="{p:.1}" font-size="12" text-anchor="end" dy="0.32em" fill="{label}">{txt}</text>"#,
                x = l - 10,
                p = tick.pos,
                txt = escape(&tick.label),
            );
        }
    }

    // Marks, then labels so text sits on top of neighboring circles.
    let fill = hex(theme.mark_fill);
    let stroke = hex(theme.mark_stroke);
    for m in &scene.marks {
        let _ = writeln!(
            out,
            r#"  <circle cx="{x:.1}" cy="{y:.1}" r="{r}" fill="{fill}" stroke="{stroke}" stroke-width="1"/>"#,
            x = m.x,
            y = m.y,
            r = MARK_RADIUS,
        );
    }
    if opts.draw_labels {
        for m in &scene.marks {
            let _ = writeln!(
                out,
                r#"  <text x="{x:.1}" y="{y:.1}" dx="{dx}em" dy="{dy}em" font-size="{fs}" fill="{label}">{txt}</text>"#,
                x = m.x,
                y = m.y,
                dx = LABEL_DX_EM,
                dy = LABEL_DY_EM,
                fs = LABEL_FONT_PX,
                txt = escape(&m.label),
            );
        }

        // Axis titles.
        let cx = (l + r) / 2;
        let cy = (t + b) / 2;
        let _ = writeln!(
            out,
            r#"  <text x="{cx}" y="{y}" font-size="14" text-anchor="middle" fill="{label}">{txt}</text>"#,
            y = b + 40,
            txt = escape(&scene.x_title),
        );
        let _ = writeln!(
            out,
            r#"  <text transform="translate(14,{cy}) rotate(-90)" font-size="14" text-anchor="middle" fill="{label}">{txt}</text>"#,
            txt = escape(&scene.y_title),
        );
    }

    out.push_str("</svg>\n");
    out
}

fn hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
