//! Frame-cycle orchestration.
//!
//! `FrameDriver` is the stable interface between host-surface adapters and
//! the rest of the engine: one call renders one complete frame.

mod driver;

pub use driver::FrameDriver;
