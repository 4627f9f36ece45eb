//! A freehand drawing surface.
//!
//! Pointer input is captured into styled [`paint::LinePoint`]s, smoothed into strokes, and
//! rasterized onto a [`Surface`]. Every stroke start captures a full-frame snapshot of the surface,
//! so undo is a matter of putting the newest snapshot back.

pub mod config;
mod error;
pub mod image_coder;
pub mod input;
pub mod paint;
pub mod replay;
#[cfg(all(target_arch = "wasm32", feature = "renderer-canvas"))]
mod web;

pub use error::*;
pub use scribble_renderer::{Color, Surface};
