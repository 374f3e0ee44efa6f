// File: crates/scatter-core/src/scene.rs
// Summary: Pure layout pass: plot rect, scales, marks, ticks, titles.

use crate::data::DataPoint;
use crate::grid::{linspace, tick_label};
use crate::scale::{extent, LinearScale};
use crate::types::{Insets, RectI32, TICK_COUNT};

/// One plotted point: circle center in surface pixels plus its label text.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    pub x: f32,
    pub y: f32,
    pub label: String,
}

/// One axis tick: position along the axis in surface pixels plus label text.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub pos: f32,
    pub label: String,
}

/// Everything a backend needs to draw one frame. Built fresh per render
/// pass; a pass never mutates a previous pass's scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub plot: RectI32,
    pub marks: Vec<Mark>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub x_title: String,
    pub y_title: String,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

/// Plot rectangle for a viewport: viewport minus margins, floored at 1x1
/// so sub-margin viewports degrade instead of underflowing.
pub fn plot_rect(width: i32, height: i32, insets: &Insets) -> RectI32 {
    let left = insets.left as i32;
    let top = insets.top as i32;
    let right = (width - insets.right as i32).max(left + 1);
    let bottom = (height - insets.bottom as i32).max(top + 1);
    RectI32::from_ltrb(left, top, right, bottom)
}

/// Lay out the scatter scene for a viewport. Pure function of its inputs:
/// identical points and dimensions produce an identical scene.
pub fn layout(
    points: &[DataPoint],
    width: i32,
    height: i32,
    insets: &Insets,
    x_title: &str,
    y_title: &str,
) -> Scene {
    let plot = plot_rect(width, height, insets);

    let x_domain = extent(points.iter().map(|p| p.income)).unwrap_or((0.0, 1.0));
    let y_max = extent(points.iter().map(|p| p.healthcare))
        .map(|(_, hi)| hi)
        .unwrap_or(1.0);

    let x_scale = LinearScale::new(x_domain, (plot.left as f32, plot.right as f32));
    // Inverted range: larger values plot higher on screen.
    let y_scale = LinearScale::new((0.0, y_max), (plot.bottom as f32, plot.top as f32));

    let marks = points
        .iter()
        .map(|p| Mark {
            x: x_scale.scale(p.income),
            y: y_scale.scale(p.healthcare),
            label: p.abbr.clone(),
        })
        .collect();

    let ticks = |scale: &LinearScale| -> Vec<Tick> {
        let (d0, d1) = scale.domain();
        linspace(d0, d1, TICK_COUNT)
            .into_iter()
            .map(|v| Tick { pos: scale.scale(v), label: tick_label(v) })
            .collect()
    };

    Scene {
        width,
        height,
        plot,
        marks,
        x_ticks: ticks(&x_scale),
        y_ticks: ticks(&y_scale),
        x_title: x_title.to_string(),
        y_title: y_title.to_string(),
        x_scale,
        y_scale,
    }
}
