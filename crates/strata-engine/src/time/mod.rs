//! Frame timing.
//!
//! One `FrameClock` per driver. `tick()` is called once per render cycle so
//! every layer in that cycle observes the same timestamp.

mod frame_clock;

pub use frame_clock::FrameClock;
