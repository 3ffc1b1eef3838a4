// File: crates/chart-render-skia/src/types.rs
// Summary: Surface description (size, margins, theme) used as the canvas container.

use crate::theme::Theme;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // Wider left margin for currency tick labels, top margin for the legend.
        Self::new(96, 24, 48, 56)
    }
}

/// What a [`crate::SkiaCanvas`] binds to.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceSpec {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (ticks, legend, mark-line label). Off for pixel-exact tests.
    pub draw_labels: bool,
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, insets: Insets::default(), theme: Theme::dark(), draw_labels: true }
    }
}
