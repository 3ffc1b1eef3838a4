// File: crates/chart-render-skia/src/draw.rs
// Summary: Skia drawing helpers for grid, axes, payoff curves, mark-lines and legend.

use chart_core::option::AxisOption;
use chart_core::{MarkLineDatum, SeriesOption};
use skia_safe as skia;

use crate::color::parse_css_color;
use crate::geometry::PlotArea;
use crate::theme::Theme;
use crate::view::ViewState;

const X_TICKS: usize = 9;
const Y_TICKS: usize = 6;

/// `count` evenly spaced values from `lo` to `hi`, both ends included.
fn ticks(lo: f64, hi: f64, count: usize) -> impl Iterator<Item = f64> {
    let last = count.saturating_sub(1).max(1) as f64;
    (0..count.max(2)).map(move |i| lo + (hi - lo) * i as f64 / last)
}

fn label_font(size: f32) -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(size);
    font
}

fn text_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint
}

pub fn draw_grid(canvas: &skia::Canvas, plot: &PlotArea, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in ticks(plot.left as f64, plot.right as f64, X_TICKS) {
        canvas.draw_line((x as f32, plot.top), (x as f32, plot.bottom), &paint);
    }
    // horizontals
    for y in ticks(plot.top as f64, plot.bottom as f64, Y_TICKS) {
        canvas.draw_line((plot.left, y as f32), (plot.right, y as f32), &paint);
    }
}

pub fn draw_zero_line(canvas: &skia::Canvas, plot: &PlotArea, view: &ViewState, theme: &Theme) {
    if view.y_min > 0.0 || view.y_max < 0.0 { return; }
    let y = view.y_to_px(plot, 0.0);
    let mut paint = skia::Paint::default();
    paint.set_color(theme.zero_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    canvas.draw_line((plot.left, y), (plot.right, y), &paint);
}

/// Axis lines, tick labels (through the axis label formatter) and axis names.
pub fn draw_axes(
    canvas: &skia::Canvas,
    plot: &PlotArea,
    view: &ViewState,
    x_axis: Option<&AxisOption>,
    y_axis: Option<&AxisOption>,
    theme: &Theme,
    draw_labels: bool,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &axis_paint);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &axis_paint);

    if !draw_labels { return; }

    let paint = text_paint(theme.axis_label);
    let font = label_font(12.0);
    let fmt = |axis: Option<&AxisOption>, v: f64| -> String {
        axis.and_then(|a| a.axis_label.as_ref())
            .and_then(|l| l.formatter.as_ref())
            .map(|f| f.call(v))
            .unwrap_or_else(|| format!("{v:.2}"))
    };

    for v in ticks(view.x_min, view.x_max, X_TICKS) {
        let px = view.x_to_px(plot, v);
        canvas.draw_str(fmt(x_axis, v), (px - 24.0, plot.bottom + 18.0), &font, &paint);
    }
    for v in ticks(view.y_min, view.y_max, Y_TICKS) {
        let py = view.y_to_px(plot, v);
        canvas.draw_str(fmt(y_axis, v), (4.0, py + 4.0), &font, &paint);
    }

    let name_font = label_font(14.0);
    if let Some(name) = x_axis.and_then(|a| a.name.as_deref()) {
        canvas.draw_str(name, (plot.right - 80.0, plot.bottom + 42.0), &name_font, &paint);
    }
    if let Some(name) = y_axis.and_then(|a| a.name.as_deref()) {
        canvas.draw_str(name, (4.0, plot.top - 12.0), &name_font, &paint);
    }
}

pub fn draw_line_series(canvas: &skia::Canvas, plot: &PlotArea, view: &ViewState, series: &SeriesOption, theme: &Theme) {
    let Some(data) = series.data.as_ref() else { return };
    if data.len() < 2 { return; }

    let mut path = skia::Path::new();
    let [x0, y0] = data[0];
    path.move_to((view.x_to_px(plot, x0), view.y_to_px(plot, y0)));
    for &[x, y] in data.iter().skip(1) {
        path.line_to((view.x_to_px(plot, x), view.y_to_px(plot, y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(series.color().and_then(parse_css_color).unwrap_or(theme.line_stroke));

    canvas.save();
    canvas.clip_rect(skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom), None, true);
    canvas.draw_path(&path, &stroke);
    canvas.restore();
}

/// Dashed vertical line at the mark's x position, with its label at the top.
pub fn draw_mark_line(
    canvas: &skia::Canvas,
    plot: &PlotArea,
    view: &ViewState,
    mark: &MarkLineDatum,
    theme: &Theme,
    draw_labels: bool,
) {
    if mark.x_axis < view.x_min || mark.x_axis > view.x_max { return; }
    let x = view.x_to_px(plot, mark.x_axis);
    let color = mark.line_style.color.as_deref().and_then(parse_css_color).unwrap_or(theme.mark_line);

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.5);
    paint.set_color(color);
    paint.set_path_effect(skia::PathEffect::dash(&[6.0, 4.0], 0.0));
    canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);

    if draw_labels {
        canvas.draw_str(&mark.label.formatter, (x + 4.0, plot.top + 14.0), &label_font(12.0), &text_paint(color));
    }
}

/// Color swatch + name per series, left to right above the plot.
pub fn draw_legend(canvas: &skia::Canvas, plot: &PlotArea, entries: &[(String, skia::Color)], theme: &Theme, draw_labels: bool) {
    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Fill);
    let font = label_font(12.0);
    let paint = text_paint(theme.axis_label);

    let mut x = plot.left;
    let y = plot.top - 30.0;
    for (name, color) in entries {
        swatch.set_color(*color);
        canvas.draw_rect(skia::Rect::from_xywh(x, y, 12.0, 12.0), &swatch);
        if draw_labels {
            canvas.draw_str(name, (x + 16.0, y + 11.0), &font, &paint);
        }
        x += 24.0 + name.chars().count() as f32 * 7.0;
    }
}
