//! Strata engine crate.
//!
//! Scrollable-viewport render core for tile-based maps. This crate owns the
//! viewport clamping rules, the ordered layer pipeline, per-cycle frame
//! timing, and the begin/complete bracket around the batch renderer. Map
//! parsing, draw accumulation, and surface lifecycle live in the host
//! application; the engine consumes them through the contracts in [`map`],
//! [`render`] and [`host`].
//!
//! The engine is single-threaded by construction: driver and pipeline are
//! `Rc`/`RefCell` based and live on the host surface's frame-callback thread.

pub mod core;
pub mod host;
pub mod map;
pub mod render;
pub mod time;
pub mod view;

pub mod logging;
pub mod paint;
