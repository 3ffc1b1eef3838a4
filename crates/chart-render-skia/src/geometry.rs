// File: crates/chart-render-skia/src/geometry.rs
// Summary: Plot rectangle inside the surface margins.

use crate::types::SurfaceSpec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    pub fn from_spec(spec: &SurfaceSpec) -> Self {
        let left = spec.insets.left as f32;
        let top = spec.insets.top as f32;
        let right = (spec.width - spec.insets.right as i32) as f32;
        let bottom = (spec.height - spec.insets.bottom as i32) as f32;
        Self { left, top, right: right.max(left + 1.0), bottom: bottom.max(top + 1.0) }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}
