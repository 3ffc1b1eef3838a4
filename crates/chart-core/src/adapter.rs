// File: crates/chart-core/src/adapter.rs
// Summary: Profit/loss chart adapter; owns one canvas, builds the payoff option, toggles the break-even mark-line.
// Notes:
// - Lifecycle: `new` (Active) -> `dispose` or drop (Disposed). The canvas is
//   disposed exactly once on either path.
// - At most one mark-line exists; installing a new one replaces the old one.

use payoff_core::{break_even, line_label, reward, to_currency, OptionContract};
use tracing::debug;

use crate::canvas::{ChartCanvas, ChartEvent, ComponentType, EventKind};
use crate::error::ChartError;
use crate::option::{
    AxisLabel, AxisOption, ChartOption, DataZoomOption, LegendOption, LineStyle, MarkLineDatum, MarkLineLabel,
    SeriesOption, TooltipFormatter, TooltipOption, ValueFormatter,
};
use crate::palette::Palette;
use crate::tooltip::format_axis_tooltip;

/// Upper bound on samples per curve.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Caller-supplied builders and sampling range for the payoff curves.
pub struct ChartOptions {
    /// Legend/series name for contract `index`.
    pub line_label_builder: Box<dyn Fn(&OptionContract, usize) -> String>,
    /// Payoff value at underlying price `x`.
    pub y_axis_builder: Box<dyn Fn(f64, &OptionContract) -> f64>,
    pub x_min_value: f64,
    pub x_max_value: f64,
    pub x_step: f64,
    pub color_builder: Box<dyn Fn(usize) -> String>,
}

impl ChartOptions {
    /// Standard payoff chart: `#n (Type&Position)` labels, `reward` curves, palette colors.
    pub fn payoff(x_min_value: f64, x_max_value: f64, x_step: f64, palette: Palette) -> Self {
        Self {
            line_label_builder: Box::new(line_label),
            y_axis_builder: Box::new(reward),
            x_min_value,
            x_max_value,
            x_step,
            color_builder: Box::new(move |i| palette.color(i).to_string()),
        }
    }
}

/// Vertical reference line request.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkLine {
    pub value: f64,
    pub label: String,
    pub color: String,
}

impl From<&MarkLine> for MarkLineDatum {
    fn from(m: &MarkLine) -> Self {
        MarkLineDatum {
            x_axis: m.value,
            label: MarkLineLabel { formatter: m.label.clone() },
            line_style: LineStyle::color(m.color.clone()),
        }
    }
}

/// Mark-line for a contract's break-even, labelled like `Break Even: $102.00`.
pub fn break_even_mark(contract: &OptionContract, color: impl Into<String>) -> MarkLine {
    let value = break_even(contract);
    MarkLine { value, label: format!("Break Even: {}", to_currency(value)), color: color.into() }
}

/// Sample points `min + i*step` for every point in `[min, max)`.
pub fn sample_range(min: f64, max: f64, step: f64) -> Result<Vec<f64>, ChartError> {
    let invalid = |reason| ChartError::InvalidRange { min, max, step, reason };
    if !min.is_finite() || !max.is_finite() || !step.is_finite() {
        return Err(invalid("bounds and step must be finite"));
    }
    if step <= 0.0 {
        return Err(invalid("step must be positive"));
    }
    if min > max {
        return Err(invalid("min is above max"));
    }
    let count = ((max - min) / step).ceil();
    if count > MAX_SAMPLES as f64 {
        return Err(invalid("too many samples"));
    }
    let xs = (0..count as usize)
        .map(|i| min + i as f64 * step)
        .take_while(|x| *x < max)
        .collect();
    Ok(xs)
}

/// Full chart option for `contracts`: one line series each, legend, axis tooltip, pan/zoom.
pub fn build_option(contracts: &[OptionContract], options: &ChartOptions) -> Result<ChartOption, ChartError> {
    let xs = sample_range(options.x_min_value, options.x_max_value, options.x_step)?;

    let series = contracts
        .iter()
        .enumerate()
        .map(|(i, contract)| {
            let color = (options.color_builder)(i);
            let data = xs.iter().map(|&x| [x, (options.y_axis_builder)(x, contract)]).collect();
            SeriesOption {
                name: Some((options.line_label_builder)(contract, i)),
                kind: Some("line".to_string()),
                show_symbol: Some(false),
                line_style: Some(LineStyle::color(color.clone())),
                item_style: Some(LineStyle::color(color)),
                data: Some(data),
                mark_line: None,
            }
        })
        .collect::<Vec<_>>();

    let legend = series.iter().filter_map(|s| s.name.clone()).collect();
    let currency_axis = |name: &str, min: Option<f64>, max: Option<f64>| AxisOption {
        kind: Some("value".to_string()),
        name: Some(name.to_string()),
        min,
        max,
        axis_label: Some(AxisLabel { formatter: Some(ValueFormatter::new(to_currency)) }),
    };

    Ok(ChartOption {
        tooltip: Some(TooltipOption {
            trigger: Some("axis".to_string()),
            formatter: Some(TooltipFormatter::new(format_axis_tooltip)),
        }),
        legend: Some(LegendOption { data: legend }),
        x_axis: Some(currency_axis("Price", Some(options.x_min_value), Some(options.x_max_value))),
        y_axis: Some(currency_axis("Profit / Loss", None, None)),
        data_zoom: Some(vec![DataZoomOption::inside_x(), DataZoomOption::inside_y()]),
        series: Some(series),
    })
}

fn clear_mark_line_on_click(event: &ChartEvent) -> Option<ChartOption> {
    if event.component_type == ComponentType::MarkLine {
        debug!("mark-line clicked; clearing");
        Some(ChartOption::clear_mark_lines())
    } else {
        None
    }
}

/// Payoff chart bound to exactly one canvas handle.
pub struct ProfitLossChart<C: ChartCanvas> {
    canvas: Option<C>,
}

impl<C: ChartCanvas> ProfitLossChart<C> {
    /// Acquire a canvas on `container` and submit the full option for `contracts`.
    /// The range is validated before the canvas is acquired.
    pub fn new(container: C::Container, contracts: &[OptionContract], options: &ChartOptions) -> Result<Self, ChartError> {
        let option = build_option(contracts, options)?;
        let mut canvas = C::init(container)?;
        debug!(series = contracts.len(), "chart canvas initialized");
        canvas.set_option(option);
        canvas.on(EventKind::Click, Box::new(clear_mark_line_on_click));
        Ok(Self { canvas: Some(canvas) })
    }

    /// Install `mark` as the only mark-line, replacing any previous one.
    pub fn set_mark_line(&mut self, mark: &MarkLine) -> Result<(), ChartError> {
        let canvas = self.active()?;
        debug!(value = mark.value, label = %mark.label, "installing mark-line");
        canvas.set_option(ChartOption::mark_lines(vec![MarkLineDatum::from(mark)]));
        Ok(())
    }

    /// Remove the mark-line; same patch as a mark-line click.
    pub fn clear_mark_line(&mut self) -> Result<(), ChartError> {
        self.active()?.set_option(ChartOption::clear_mark_lines());
        Ok(())
    }

    pub fn canvas(&self) -> Option<&C> { self.canvas.as_ref() }

    pub fn canvas_mut(&mut self) -> Option<&mut C> { self.canvas.as_mut() }

    /// Release the canvas. Consumes the adapter, so no operation can follow.
    pub fn dispose(mut self) {
        self.release();
    }

    /// The canvas, unless it is gone or was disposed behind the adapter's back.
    fn active(&mut self) -> Result<&mut C, ChartError> {
        match self.canvas.as_mut() {
            Some(canvas) if !canvas.is_disposed() => Ok(canvas),
            _ => Err(ChartError::Disposed),
        }
    }

    fn release(&mut self) {
        match self.canvas.take() {
            Some(canvas) if canvas.is_disposed() => debug!("chart canvas already disposed"),
            Some(mut canvas) => {
                canvas.dispose();
                debug!("chart canvas disposed");
            }
            None => {}
        }
    }
}

impl<C: ChartCanvas> Drop for ProfitLossChart<C> {
    fn drop(&mut self) {
        self.release();
    }
}
