//! Scratch-off tickets: an erasable foil mask, the pointer plumbing that
//! scratches it, and a software compositor that shows the result.
//!
//! The [`engine`] module is front-end neutral and works purely in mask
//! pixels; [`input`] maps window or UV coordinates into that space.

pub mod compose;
pub mod draw;
pub mod engine;
pub mod error;
pub mod gamma;
pub mod input;
pub mod ticket;
pub mod types;

pub use engine::{create, MaskConfig, ScratchMask};
pub use error::{ConfigError, Error};
pub use input::{PointerAdapter, PointerEvent, PointerTracker, Surface};
pub use types::{FrameBuffer, Point, Rect, StrokeState};
