//! Color handling.
//!
//! The engine itself only ever needs a clear color; layers and batch
//! renderers are free to reuse the type for their own draw data.

mod color;

pub use color::Color;
