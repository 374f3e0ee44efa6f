// File: crates/scatter-core/src/chart.rs
// Summary: ScatterChart and the headless rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::data::DataPoint;
use crate::scene::{self, Scene};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, LABEL_DX_EM, LABEL_DY_EM, LABEL_FONT_PX, MARK_RADIUS, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw tick labels, mark labels and axis titles. Tests disable this
    /// to keep pixel output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

pub struct ScatterChart {
    pub points: Vec<DataPoint>,
    pub x_title: String,
    pub y_title: String,
}

impl ScatterChart {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            x_title: "Income".to_string(),
            y_title: "Lacks Healthcare (%)".to_string(),
        }
    }

    /// Compute the scene for a viewport. Pure: no surface or event-loop
    /// concerns, so callers can test layout with literal inputs.
    pub fn layout(&self, opts: &RenderOptions) -> Scene {
        scene::layout(
            &self.points,
            opts.width,
            opts.height,
            &opts.insets,
            &self.x_title,
            &self.y_title,
        )
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render the chart to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(opts)?;
        encode_png(&mut surface)
    }

    /// Render the chart to an RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(opts)?;
        read_rgba8(&mut surface, opts.width, opts.height)
    }

    fn rasterize(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let scene = self.layout(opts);
        // Every pass starts from a fresh surface: teardown by construction,
        // no partial update of a previous frame.
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(opts.theme.background);
        draw_grid(canvas, &scene, &opts.theme);
        draw_axes(canvas, &scene, &opts.theme, opts.draw_labels);
        draw_marks(canvas, &scene, &opts.theme, opts.draw_labels);
        if opts.draw_labels {
            draw_titles(canvas, &scene, &opts.theme);
        }
        Ok(surface)
    }
}

/// Render a frame that carries only a message, for surfacing load failures
/// and in-progress loads in a window instead of a stale or blank chart.
pub fn render_notice_rgba8(
    opts: &RenderOptions,
    message: &str,
) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(opts.theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(16.0);
    canvas.draw_str(message, (24.0, 40.0), &font, &paint);

    read_rgba8(&mut surface, opts.width, opts.height)
}

// ---- helpers ----------------------------------------------------------------

fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

fn read_rgba8(
    surface: &mut skia::Surface,
    width: i32,
    height: i32,
) -> Result<(Vec<u8>, u32, u32, usize)> {
    let info = skia::ImageInfo::new(
        (width, height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    let ok = surface.read_pixels(&info, &mut pixels, stride, (0, 0));
    if !ok {
        anyhow::bail!("read_pixels failed");
    }
    Ok((pixels, width as u32, height as u32, stride))
}

fn draw_grid(canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (t, b) = (scene.plot.top as f32, scene.plot.bottom as f32);
    let (l, r) = (scene.plot.left as f32, scene.plot.right as f32);
    for tick in &scene.x_ticks {
        canvas.draw_line((tick.pos, t), (tick.pos, b), &paint);
    }
    for tick in &scene.y_ticks {
        canvas.draw_line((l, tick.pos), (r, tick.pos), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, scene: &Scene, theme: &Theme, draw_labels: bool) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t) = (scene.plot.left as f32, scene.plot.top as f32);
    let (r, b) = (scene.plot.right as f32, scene.plot.bottom as f32);

    // Bottom X axis and left Y axis lines.
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    // Tick marks point outward from the plot.
    for tick in &scene.x_ticks {
        canvas.draw_line((tick.pos, b), (tick.pos, b + 6.0), &axis_paint);
    }
    for tick in &scene.y_ticks {
        canvas.draw_line((l - 6.0, tick.pos), (l, tick.pos), &axis_paint);
    }

    if !draw_labels {
        return;
    }

    let mut text_paint = skia::Paint::default();
    text_paint.set_anti_alias(true);
    text_paint.set_color(theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(12.0);

    for tick in &scene.x_ticks {
        let (w, _) = font.measure_str(&tick.label, Some(&text_paint));
        canvas.draw_str(&tick.label, (tick.pos - w * 0.5, b + 20.0), &font, &text_paint);
    }
    for tick in &scene.y_ticks {
        let (w, _) = font.measure_str(&tick.label, Some(&text_paint));
        canvas.draw_str(&tick.label, (l - 10.0 - w, tick.pos + 4.0), &font, &text_paint);
    }
}

fn draw_marks(canvas: &skia::Canvas, scene: &Scene, theme: &Theme, draw_labels: bool) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.mark_fill);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(theme.mark_stroke);

    for m in &scene.marks {
        canvas.draw_circle((m.x, m.y), MARK_RADIUS, &fill);
        canvas.draw_circle((m.x, m.y), MARK_RADIUS, &stroke);
    }

    if !draw_labels {
        return;
    }

    let mut text_paint = skia::Paint::default();
    text_paint.set_anti_alias(true);
    text_paint.set_color(theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(LABEL_FONT_PX);

    for m in &scene.marks {
        let x = m.x + LABEL_DX_EM * LABEL_FONT_PX;
        let y = m.y + LABEL_DY_EM * LABEL_FONT_PX;
        canvas.draw_str(&m.label, (x, y), &font, &text_paint);
    }
}

fn draw_titles(canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(14.0);

    // X title centered below the bottom axis.
    let (w, _) = font.measure_str(&scene.x_title, Some(&paint));
    let cx = (scene.plot.left + scene.plot.right) as f32 * 0.5;
    canvas.draw_str(
        &scene.x_title,
        (cx - w * 0.5, scene.plot.bottom as f32 + 40.0),
        &font,
        &paint,
    );

    // Y title rotated 90 degrees CCW, vertically centered on the plot.
    let (wy, _) = font.measure_str(&scene.y_title, Some(&paint));
    let cy = (scene.plot.top + scene.plot.bottom) as f32 * 0.5;
    canvas.save();
    canvas.translate((14.0, cy));
    canvas.rotate(-90.0, None);
    canvas.draw_str(&scene.y_title, (-wy * 0.5, 0.0), &font, &paint);
    canvas.restore();
}
