// File: crates/chart-core/tests/option.rs
// Purpose: Merge semantics of option patches and their serialized shape.

use chart_core::option::{LegendOption, LineStyle, MarkLineLabel};
use chart_core::{ChartOption, MarkLineDatum, Palette, SeriesOption};
use serde_json::json;

fn line(name: &str, data: Vec<[f64; 2]>) -> SeriesOption {
    SeriesOption { name: Some(name.into()), kind: Some("line".into()), data: Some(data), ..Default::default() }
}

fn mark(x: f64) -> MarkLineDatum {
    MarkLineDatum { x_axis: x, label: MarkLineLabel { formatter: format!("at {x}") }, line_style: LineStyle::color("red") }
}

#[test]
fn series_merge_by_index_and_keep_untouched_fields() {
    let mut base = ChartOption {
        legend: Some(LegendOption { data: vec!["a".into(), "b".into()] }),
        series: Some(vec![line("a", vec![[0.0, 1.0]]), line("b", vec![[0.0, 2.0]])]),
        ..Default::default()
    };
    base.merge(ChartOption::mark_lines(vec![mark(5.0)]));

    let series = base.series.as_ref().unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].name.as_deref(), Some("a"));
    assert_eq!(series[0].data, Some(vec![[0.0, 1.0]]));
    assert_eq!(series[0].mark_line.as_ref().unwrap().data.len(), 1);
    assert!(series[1].mark_line.is_none());
    assert!(base.legend.is_some());
}

#[test]
fn mark_line_data_is_replaced_not_appended() {
    let mut base = ChartOption { series: Some(vec![line("a", vec![])]), ..Default::default() };
    base.merge(ChartOption::mark_lines(vec![mark(1.0)]));
    base.merge(ChartOption::mark_lines(vec![mark(2.0)]));
    assert_eq!(base.mark_line_data().map(|m| m.x_axis).collect::<Vec<_>>(), vec![2.0]);
    base.merge(ChartOption::clear_mark_lines());
    assert_eq!(base.mark_line_data().count(), 0);
}

#[test]
fn patch_on_empty_option_appends_series() {
    let mut base = ChartOption::default();
    base.merge(ChartOption::clear_mark_lines());
    assert_eq!(base.series.as_ref().map(Vec::len), Some(1));
}

#[test]
fn clear_patch_serializes_to_empty_mark_line_data() {
    let v = serde_json::to_value(ChartOption::clear_mark_lines()).unwrap();
    assert_eq!(v, json!({ "series": [{ "markLine": { "data": [] } }] }));
}

#[test]
fn series_color_prefers_line_style() {
    let mut s = line("a", vec![]);
    assert_eq!(s.color(), None);
    s.item_style = Some(LineStyle::color("blue"));
    assert_eq!(s.color(), Some("blue"));
    s.line_style = Some(LineStyle::color("red"));
    assert_eq!(s.color(), Some("red"));
}

#[test]
fn palette_cycles_and_rejects_empty() {
    let p = Palette::default();
    assert_eq!(p.color(0), "#4bc0c0");
    assert_eq!(p.color(3), "#ff6384");
    assert_eq!(p.color(4), "#4bc0c0");
    assert_eq!(Palette::new(Vec::<String>::new()), Palette::default());
    let custom = Palette::new(["red", "blue"]);
    assert_eq!(custom.len(), 2);
    assert_eq!(custom.color(5), "blue");
}
