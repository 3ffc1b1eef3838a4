// File: crates/chart-core/src/tooltip.rs
// Summary: Tooltip renderer; turns a hovered price and per-series rewards into an HTML fragment.

use std::fmt::Write as _;

use payoff_core::to_currency;
use serde::Serialize;

/// Upward triangle; rendered rotated for negative values.
const TRIANGLE_PATH: &str = "M7.1341 4.88941C7.519 4.22274 8.48125 4.22274 8.86615 4.8894L12.5946 11.3473C12.9795 12.014 12.4984 12.8474 11.7286 12.8474H4.27163C3.50183 12.8474 3.0207 12.014 3.4056 11.3474L7.1341 4.88941Z";

/// One reward line of the tooltip.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipEntry {
    pub series_name: String,
    pub value: f64,
    pub color: String,
}

/// Per-series hover data as handed to the formatter by the canvas.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTooltipParam {
    pub axis_value: f64,
    /// `[x, y]` of the hovered sample.
    pub value: [f64; 2],
    pub color: String,
    pub series_name: String,
}

/// Render the tooltip markup: price line, then one line per entry in input order.
pub fn render_tooltip(price: f64, entries: &[TooltipEntry]) -> String {
    let mut html = String::with_capacity(256 + entries.len() * 640);
    html.push_str(r#"<div class="tooltip-content"><strong>Price:</strong> "#);
    html.push_str(&escape_html(&to_currency(price)));
    html.push_str(" <br>");
    for entry in entries {
        let (tone, icon_class) = if entry.value >= 0.0 {
            ("text-green-500", "")
        } else {
            ("text-red-500", "rotate-180")
        };
        // Writing into a String cannot fail.
        let _ = write!(
            html,
            concat!(
                r#"<div class="tooltip-item">"#,
                r#"<span class="tooltip-color" style="background-color: {color};"></span>"#,
                r#"<span>{name}:</span> &nbsp; "#,
                r#"<span class="flex items-center {tone}"> {value} "#,
                r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg" class="{icon}">"#,
                r#"<path d="{path}" fill="currentColor"></path></svg></span></div>"#,
            ),
            color = escape_html(&entry.color),
            name = escape_html(&entry.series_name),
            tone = tone,
            value = escape_html(&to_currency(entry.value)),
            icon = icon_class,
            path = TRIANGLE_PATH,
        );
    }
    html.push_str("</div>");
    html
}

/// Formatter bound into the chart option: the price comes from the first param.
pub fn format_axis_tooltip(params: &[AxisTooltipParam]) -> String {
    let Some(first) = params.first() else { return String::new() };
    let entries = params
        .iter()
        .map(|p| TooltipEntry { series_name: p.series_name.clone(), value: p.value[1], color: p.color.clone() })
        .collect::<Vec<_>>();
    render_tooltip(first.axis_value, &entries)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
