// File: crates/chart-render-skia/src/canvas.rs
// Summary: Skia-backed chart canvas: merged option state, headless PNG rendering, click/hover hit-testing, pan/zoom.

use chart_core::{
    AxisTooltipParam, ChartCanvas, ChartError, ChartEvent, ChartOption, ComponentType, EventHandler, EventKind,
};
use skia_safe as skia;
use tracing::{debug, warn};

use crate::color::parse_css_color;
use crate::draw::{draw_axes, draw_grid, draw_legend, draw_line_series, draw_mark_line, draw_zero_line};
use crate::error::RenderError;
use crate::geometry::PlotArea;
use crate::types::SurfaceSpec;
use crate::view::ViewState;

/// Pixel distance within which a click counts as hitting a mark-line.
pub const MARK_LINE_HIT_PX: f32 = 5.0;

pub struct SkiaCanvas {
    spec: SurfaceSpec,
    current: ChartOption,
    handlers: Vec<(EventKind, EventHandler)>,
    view: ViewState,
    disposed: bool,
}

impl SkiaCanvas {
    pub fn spec(&self) -> &SurfaceSpec { &self.spec }

    pub fn option(&self) -> &ChartOption { &self.current }

    pub fn view(&self) -> ViewState { self.view }

    pub fn plot_area(&self) -> PlotArea { PlotArea::from_spec(&self.spec) }

    fn ensure_active(&self) -> Result<(), RenderError> {
        if self.disposed { Err(RenderError::Disposed) } else { Ok(()) }
    }

    /// Render the merged option to PNG bytes using a CPU raster surface.
    pub fn render_png_bytes(&self) -> Result<Vec<u8>, RenderError> {
        self.ensure_active()?;
        let (width, height) = (self.spec.width, self.spec.height);
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RenderError::Surface { width, height })?;
        let canvas = surface.canvas();
        self.paint(canvas);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<(), RenderError> {
        let bytes = self.render_png_bytes()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas) {
        let theme = &self.spec.theme;
        let plot = self.plot_area();
        let labels = self.spec.draw_labels;
        canvas.clear(theme.background);

        draw_grid(canvas, &plot, theme);
        draw_zero_line(canvas, &plot, &self.view, theme);
        draw_axes(canvas, &plot, &self.view, self.current.x_axis.as_ref(), self.current.y_axis.as_ref(), theme, labels);

        let series = self.current.series.as_deref().unwrap_or_default();
        for s in series {
            draw_line_series(canvas, &plot, &self.view, s, theme);
        }
        for mark in self.current.mark_line_data() {
            draw_mark_line(canvas, &plot, &self.view, mark, theme, labels);
        }

        let legend = series
            .iter()
            .filter_map(|s| {
                let name = s.name.clone()?;
                let color = s.color().and_then(parse_css_color).unwrap_or(theme.line_stroke);
                Some((name, color))
            })
            .collect::<Vec<_>>();
        draw_legend(canvas, &plot, &legend, theme, labels);
    }

    /// Hit-test a click at pixel `(px, py)` and dispatch it to the click handlers.
    /// Returns the event delivered, or `None` for clicks outside the plot.
    pub fn click_at(&mut self, px: f32, py: f32) -> Result<Option<ChartEvent>, RenderError> {
        self.ensure_active()?;
        let plot = self.plot_area();
        if !plot.contains(px, py) {
            return Ok(None);
        }
        let hit_mark = self
            .current
            .mark_line_data()
            .find(|m| (self.view.x_to_px(&plot, m.x_axis) - px).abs() <= MARK_LINE_HIT_PX)
            .map(|m| m.x_axis);
        let event = match hit_mark {
            Some(x) => ChartEvent { component_type: ComponentType::MarkLine, series_index: None, value: Some(x) },
            None => ChartEvent {
                component_type: ComponentType::Series,
                series_index: None,
                value: Some(self.view.x_from_px(&plot, px)),
            },
        };
        self.dispatch(EventKind::Click, &event);
        Ok(Some(event))
    }

    fn dispatch(&mut self, kind: EventKind, event: &ChartEvent) {
        let mut follow_ups = Vec::new();
        for (k, handler) in self.handlers.iter_mut() {
            if *k == kind {
                if let Some(patch) = handler(event) {
                    follow_ups.push(patch);
                }
            }
        }
        if follow_ups.is_empty() {
            debug!(kind = kind.as_str(), component = ?event.component_type, "event without follow-up patch");
        }
        for patch in follow_ups {
            self.set_option(patch);
        }
    }

    /// Tooltip markup for the cursor at pixel column `px`, from the nearest sample of every series.
    pub fn hover_at(&self, px: f32, py: f32) -> Result<Option<String>, RenderError> {
        self.ensure_active()?;
        let plot = self.plot_area();
        if !plot.contains(px, py) {
            return Ok(None);
        }
        let Some(formatter) = self.current.tooltip.as_ref().and_then(|t| t.formatter.as_ref()) else {
            return Ok(None);
        };
        let x = self.view.x_from_px(&plot, px);
        let params = self
            .current
            .series
            .iter()
            .flatten()
            .filter_map(|s| {
                let nearest = s
                    .data
                    .as_ref()?
                    .iter()
                    .min_by(|a, b| (a[0] - x).abs().total_cmp(&(b[0] - x).abs()))?;
                Some((s, *nearest))
            })
            .map(|(s, sample)| AxisTooltipParam {
                axis_value: sample[0],
                value: sample,
                color: s.color().unwrap_or_default().to_string(),
                series_name: s.name.clone().unwrap_or_default(),
            })
            .collect::<Vec<_>>();
        if params.is_empty() {
            return Ok(None);
        }
        Ok(Some(formatter.call(&params)))
    }

    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) -> Result<(), RenderError> {
        self.ensure_active()?;
        let plot = self.plot_area();
        self.view.pan_by_pixels(dx, dy, &plot);
        Ok(())
    }

    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, cursor_y: f64) -> Result<(), RenderError> {
        self.ensure_active()?;
        let plot = self.plot_area();
        self.view.zoom_at_pixel(scroll, cursor_x, cursor_y, &plot);
        Ok(())
    }

    /// Refit the view to the current option.
    pub fn reset_view(&mut self) -> Result<(), RenderError> {
        self.ensure_active()?;
        self.view = ViewState::from_option(&self.current);
        Ok(())
    }
}

impl ChartCanvas for SkiaCanvas {
    type Container = SurfaceSpec;

    fn init(spec: SurfaceSpec) -> Result<Self, ChartError> {
        if spec.width <= 0 || spec.height <= 0 {
            return Err(ChartError::Backend(format!("invalid surface size {}x{}", spec.width, spec.height)));
        }
        debug!(width = spec.width, height = spec.height, theme = spec.theme.name, "skia canvas created");
        Ok(Self { spec, current: ChartOption::default(), handlers: Vec::new(), view: ViewState::default(), disposed: false })
    }

    fn set_option(&mut self, patch: ChartOption) {
        if self.disposed {
            warn!("set_option on a disposed skia canvas; patch dropped");
            return;
        }
        // Only new curves or axes move the view; mark-line patches keep pan/zoom.
        let refit = patch.x_axis.is_some() || patch.series.iter().flatten().any(|s| s.data.is_some());
        self.current.merge(patch);
        if refit {
            self.view = ViewState::from_option(&self.current);
        }
    }

    fn on(&mut self, kind: EventKind, handler: EventHandler) {
        self.handlers.push((kind, handler));
    }

    fn dispose(&mut self) {
        self.handlers.clear();
        self.current = ChartOption::default();
        self.disposed = true;
        debug!("skia canvas disposed");
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}
