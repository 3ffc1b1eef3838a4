// File: crates/chart-core/src/lib.rs
// Summary: Chart library entry point; exports the option model, canvas contract, adapter and tooltip renderer.

pub mod adapter;
pub mod canvas;
pub mod error;
pub mod option;
pub mod palette;
pub mod tooltip;

pub use adapter::{break_even_mark, build_option, sample_range, ChartOptions, MarkLine, ProfitLossChart};
pub use canvas::{CanvasCall, CanvasProbe, ChartCanvas, ChartEvent, ComponentType, EventHandler, EventKind, RecordingCanvas};
pub use error::ChartError;
pub use option::{ChartOption, MarkLineDatum, SeriesOption, TooltipFormatter, ValueFormatter};
pub use palette::Palette;
pub use tooltip::{format_axis_tooltip, render_tooltip, AxisTooltipParam, TooltipEntry};
