// File: crates/chart-core/tests/tooltip.rs
// Purpose: Tooltip markup: price line, per-series lines in input order, direction cue, escaping.

use chart_core::{format_axis_tooltip, render_tooltip, AxisTooltipParam, TooltipEntry};

fn entry(name: &str, value: f64, color: &str) -> TooltipEntry {
    TooltipEntry { series_name: name.into(), value, color: color.into() }
}

#[test]
fn renders_price_and_positive_line() {
    let html = render_tooltip(100.0, &[entry("Call&Long", 200.0, "red")]);
    let expected = concat!(
        r#"<div class="tooltip-content"><strong>Price:</strong> $100.00 <br>"#,
        r#"<div class="tooltip-item"><span class="tooltip-color" style="background-color: red;"></span>"#,
        r#"<span>Call&amp;Long:</span> &nbsp; <span class="flex items-center text-green-500"> $200.00 "#,
        r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg" class="">"#,
        r#"<path d="M7.1341 4.88941C7.519 4.22274 8.48125 4.22274 8.86615 4.8894L12.5946 11.3473C12.9795 12.014 12.4984 12.8474 11.7286 12.8474H4.27163C3.50183 12.8474 3.0207 12.014 3.4056 11.3474L7.1341 4.88941Z" fill="currentColor"></path></svg></span></div>"#,
        r#"</div>"#,
    );
    assert_eq!(html, expected);
}

#[test]
fn negative_values_point_down() {
    let html = render_tooltip(90.0, &[entry("#1 (Put&Short)", -9.0, "#9966ff")]);
    assert!(html.contains(r#"<span class="flex items-center text-red-500"> -$9.00 "#), "{html}");
    assert!(html.contains(r#"class="rotate-180""#));
    assert!(!html.contains("text-green-500"));
}

#[test]
fn zero_counts_as_non_negative() {
    let html = render_tooltip(102.0, &[entry("a", 0.0, "red")]);
    assert!(html.contains("text-green-500"));
}

#[test]
fn keeps_input_order() {
    let html = render_tooltip(
        100.0,
        &[entry("zeta", 1.0, "red"), entry("alpha", 2.0, "blue"), entry("mid", -3.0, "green")],
    );
    let z = html.find("zeta:").unwrap();
    let a = html.find("alpha:").unwrap();
    let m = html.find("mid:").unwrap();
    assert!(z < a && a < m);
    assert_eq!(html.matches(r#"class="tooltip-item""#).count(), 3);
}

#[test]
fn escapes_markup_in_names_and_colors() {
    let html = render_tooltip(1.0, &[entry("<b>x</b>", 1.0, "red\" onload=\"x")]);
    assert!(html.contains("&lt;b&gt;x&lt;/b&gt;:"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("red&quot; onload=&quot;x"));
}

#[test]
fn infinite_values_render_literally() {
    let html = render_tooltip(f64::INFINITY, &[]);
    assert_eq!(html, r#"<div class="tooltip-content"><strong>Price:</strong> Infinity <br></div>"#);
}

#[test]
fn axis_params_adapter() {
    let params = vec![
        AxisTooltipParam { axis_value: 110.0, value: [110.0, 8.0], color: "#4bc0c0".into(), series_name: "#1 (Call&Long)".into() },
        AxisTooltipParam { axis_value: 110.0, value: [110.0, 1.0], color: "#9966ff".into(), series_name: "#2 (Put&Short)".into() },
    ];
    let html = format_axis_tooltip(&params);
    assert_eq!(
        html,
        render_tooltip(110.0, &[entry("#1 (Call&Long)", 8.0, "#4bc0c0"), entry("#2 (Put&Short)", 1.0, "#9966ff")])
    );
    assert_eq!(format_axis_tooltip(&[]), "");
}
