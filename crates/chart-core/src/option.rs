// File: crates/chart-core/src/option.rs
// Summary: Declarative chart option model (series, axes, legend, tooltip, mark-lines) with merge-style patches.
// Notes:
// - Every field is optional so the same type serves as a full option and as a patch.
// - Function-valued fields are reference-counted closures and are skipped when serializing.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::tooltip::AxisTooltipParam;

/// Tooltip formatter invoked by the canvas with one param per visible series.
#[derive(Clone)]
pub struct TooltipFormatter(Rc<dyn Fn(&[AxisTooltipParam]) -> String>);

impl TooltipFormatter {
    pub fn new(f: impl Fn(&[AxisTooltipParam]) -> String + 'static) -> Self {
        Self(Rc::new(f))
    }
    pub fn call(&self, params: &[AxisTooltipParam]) -> String {
        (self.0)(params)
    }
}

impl fmt::Debug for TooltipFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TooltipFormatter(..)")
    }
}

impl PartialEq for TooltipFormatter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Axis tick label formatter (e.g. currency).
#[derive(Clone)]
pub struct ValueFormatter(Rc<dyn Fn(f64) -> String>);

impl ValueFormatter {
    pub fn new(f: impl Fn(f64) -> String + 'static) -> Self {
        Self(Rc::new(f))
    }
    pub fn call(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormatter(..)")
    }
}

impl PartialEq for ValueFormatter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendOption>,
    #[serde(rename = "xAxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisOption>,
    #[serde(rename = "yAxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_zoom: Option<Vec<DataZoomOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<SeriesOption>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TooltipOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip)]
    pub formatter: Option<TooltipFormatter>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LegendOption {
    pub data: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOption {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<AxisLabel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AxisLabel {
    #[serde(skip)]
    pub formatter: Option<ValueFormatter>,
}

/// Pan/zoom component bound to one axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataZoomOption {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<Vec<usize>>,
    pub filter_mode: String,
}

impl DataZoomOption {
    pub fn inside_x() -> Self {
        Self { kind: "inside".into(), x_axis_index: Some(vec![0]), y_axis_index: None, filter_mode: "none".into() }
    }
    pub fn inside_y() -> Self {
        Self { kind: "inside".into(), x_axis_index: None, y_axis_index: Some(vec![0]), filter_mode: "none".into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_symbol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<LineStyle>,
    /// `[x, y]` pairs in sampling order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<[f64; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_line: Option<MarkLineOption>,
}

impl SeriesOption {
    /// Series color, from line style first, then item style.
    pub fn color(&self) -> Option<&str> {
        self.line_style
            .as_ref()
            .and_then(|s| s.color.as_deref())
            .or_else(|| self.item_style.as_ref().and_then(|s| s.color.as_deref()))
    }

    fn merge(&mut self, patch: SeriesOption) {
        if patch.name.is_some() { self.name = patch.name; }
        if patch.kind.is_some() { self.kind = patch.kind; }
        if patch.show_symbol.is_some() { self.show_symbol = patch.show_symbol; }
        if patch.line_style.is_some() { self.line_style = patch.line_style; }
        if patch.item_style.is_some() { self.item_style = patch.item_style; }
        if patch.data.is_some() { self.data = patch.data; }
        if patch.mark_line.is_some() { self.mark_line = patch.mark_line; }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl LineStyle {
    pub fn color(color: impl Into<String>) -> Self {
        Self { color: Some(color.into()), width: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MarkLineOption {
    pub data: Vec<MarkLineDatum>,
}

/// One vertical reference line at `x_axis`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkLineDatum {
    #[serde(rename = "xAxis")]
    pub x_axis: f64,
    pub label: MarkLineLabel,
    pub line_style: LineStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkLineLabel {
    pub formatter: String,
}

impl ChartOption {
    /// Patch that replaces the mark-line list of the first series.
    pub fn mark_lines(data: Vec<MarkLineDatum>) -> Self {
        Self {
            series: Some(vec![SeriesOption { mark_line: Some(MarkLineOption { data }), ..Default::default() }]),
            ..Default::default()
        }
    }

    /// Patch that removes every mark-line.
    pub fn clear_mark_lines() -> Self {
        Self::mark_lines(Vec::new())
    }

    /// Apply `patch` on top of `self`: present fields replace, series merge by index.
    pub fn merge(&mut self, patch: ChartOption) {
        if patch.tooltip.is_some() { self.tooltip = patch.tooltip; }
        if patch.legend.is_some() { self.legend = patch.legend; }
        if patch.x_axis.is_some() { self.x_axis = patch.x_axis; }
        if patch.y_axis.is_some() { self.y_axis = patch.y_axis; }
        if patch.data_zoom.is_some() { self.data_zoom = patch.data_zoom; }
        if let Some(incoming) = patch.series {
            let series = self.series.get_or_insert_with(Vec::new);
            for (i, s) in incoming.into_iter().enumerate() {
                match series.get_mut(i) {
                    Some(existing) => existing.merge(s),
                    None => series.push(s),
                }
            }
        }
    }

    /// Mark-lines currently attached to any series.
    pub fn mark_line_data(&self) -> impl Iterator<Item = &MarkLineDatum> {
        self.series
            .iter()
            .flatten()
            .filter_map(|s| s.mark_line.as_ref())
            .flat_map(|m| m.data.iter())
    }
}
