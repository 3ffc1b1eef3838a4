// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia chart canvas; implements the chart-core canvas contract with CPU raster rendering.

pub mod canvas;
pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod theme;
pub mod types;
pub mod view;

pub use canvas::SkiaCanvas;
pub use error::RenderError;
pub use geometry::PlotArea;
pub use theme::Theme;
pub use types::{Insets, SurfaceSpec};
pub use view::ViewState;
