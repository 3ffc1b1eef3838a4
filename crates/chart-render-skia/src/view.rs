// File: crates/chart-render-skia/src/view.rs
// Visible x/y window of the payoff chart with pan/zoom helpers and world<->pixel mapping.

use chart_core::ChartOption;

use crate::geometry::PlotArea;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 }
    }
}

impl ViewState {
    /// Fit the option: x from the axis bounds (or the samples), y from finite samples and zero.
    pub fn from_option(option: &ChartOption) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in option.series.iter().flatten() {
            for &[x, y] in s.data.iter().flatten() {
                if x.is_finite() {
                    x_min = x_min.min(x);
                    x_max = x_max.max(x);
                }
                if y.is_finite() {
                    y_min = y_min.min(y);
                    y_max = y_max.max(y);
                }
            }
        }
        if let Some(axis) = &option.x_axis {
            if let (Some(lo), Some(hi)) = (axis.min, axis.max) {
                x_min = lo;
                x_max = hi;
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self::default();
        }
        // Keep the zero profit/loss line in view.
        y_min = y_min.min(0.0);
        y_max = y_max.max(0.0);
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * 0.05;
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn x_to_px(&self, plot: &PlotArea, x: f64) -> f32 {
        let span = (self.x_max - self.x_min).max(1e-9);
        plot.left + ((x - self.x_min) / span) as f32 * plot.width()
    }

    pub fn y_to_px(&self, plot: &PlotArea, y: f64) -> f32 {
        let span = (self.y_max - self.y_min).max(1e-9);
        plot.bottom - ((y - self.y_min) / span) as f32 * plot.height()
    }

    pub fn x_from_px(&self, plot: &PlotArea, px: f32) -> f64 {
        self.x_min + ((px - plot.left) / plot.width()) as f64 * (self.x_max - self.x_min)
    }

    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, plot: &PlotArea) {
        let plot_w = (plot.width() as f64).max(1.0);
        let plot_h = (plot.height() as f64).max(1.0);
        let x_span = self.x_max - self.x_min;
        let y_span = self.y_max - self.y_min;
        let wx = -dx / plot_w * x_span;
        let wy = dy / plot_h * y_span;
        self.x_min += wx; self.x_max += wx;
        self.y_min += wy; self.y_max += wy;
    }

    /// Zoom both axes around the cursor; positive `scroll` zooms in.
    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, cursor_y: f64, plot: &PlotArea) {
        let (l, rpx) = (plot.left as f64, plot.right as f64);
        let (t, bpx) = (plot.top as f64, plot.bottom as f64);
        let plot_w = (rpx - l).max(1.0); let plot_h = (bpx - t).max(1.0);
        let cx = cursor_x.clamp(l, rpx); let cy = cursor_y.clamp(t, bpx);
        let x_span = self.x_max - self.x_min; let y_span = self.y_max - self.y_min;
        let wx = self.x_min + (cx - l) / plot_w * x_span;
        let wy = self.y_max - (cy - t) / plot_h * y_span;
        let factor = (1.0 - scroll).clamp(0.1, 10.0);
        let nx = x_span * factor; let ny = y_span * factor;
        let rx = (wx - self.x_min) / x_span; let ry = (self.y_max - wy) / y_span;
        self.x_min = wx - rx * nx; self.x_max = self.x_min + nx;
        self.y_max = wy + ry * ny; self.y_min = self.y_max - ny;
    }
}
