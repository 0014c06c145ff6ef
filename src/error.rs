// Error types. Every variant states *where* things went wrong.
use crate::types::Rect;

/// Invalid parameters handed to [`ScratchMask::new`](crate::engine::ScratchMask::new).
///
/// These are the only failures the engine knows about: once a mask exists,
/// stroke and coverage calls cannot fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Mask raster has no pixels.
    #[error("mask size must be non-zero, got {width}x{height}")]
    EmptyMask { width: usize, height: usize },

    /// Mask raster too big to allocate or to export as an image.
    #[error("mask size {width}x{height} is too large")]
    MaskTooLarge { width: usize, height: usize },

    /// Coverage area has zero width or height.
    #[error("coverage area {0:?} has zero area")]
    EmptyCoverageArea(Rect),

    /// Coverage area does not fit inside `[0,width) x [0,height)`.
    #[error("coverage area {area:?} does not fit in a {width}x{height} mask")]
    CoverageOutOfBounds { area: Rect, width: usize, height: usize },

    /// Threshold outside (0, 100].
    #[error("threshold must lie in (0, 100], got {0}")]
    Threshold(f32),

    /// Brush radius negative or not finite.
    #[error("brush radius must be finite and non-negative, got {0}")]
    BrushRadius(f32),

    /// Feather width negative or not finite.
    #[error("feather width must be finite and non-negative, got {0}")]
    Feather(f32),
}

/// Application-level error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The scratch mask could not be created.
    #[error("Mask config error: {0}")]
    Config(#[from] ConfigError),

    /// Creating the window failed.
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// Opening or decoding the ticket image failed.
    #[error("Ticket image error: {0}")]
    Image(#[from] image::ImageError),

    /// Two buffers that must match in size did not.
    #[error("Buffer size mismatch: {0}")]
    BufferSize(String),
}
