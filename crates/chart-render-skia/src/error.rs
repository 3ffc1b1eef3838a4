// File: crates/chart-render-skia/src/error.rs
// Summary: Rendering errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create raster surface {width}x{height}")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("skia canvas already disposed")]
    Disposed,
}
