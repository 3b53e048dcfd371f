use thiserror::Error;

/// Errors from checked canvas construction.
///
/// Rasterization itself never fails; out-of-range geometry is clipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("stride {stride} is smaller than width {width}")]
    StrideTooSmall { stride: usize, width: usize },

    #[error("pixel buffer holds {len} pixels but {required} are required")]
    BufferTooSmall { len: usize, required: usize },
}

pub type Result<T> = std::result::Result<T, CanvasError>;
