//! Host-surface integration.
//!
//! Host platforms hand the engine a frame callback slot in one of two
//! shapes: a trait object with surface lifecycle hooks, or a plain closure
//! invoked per frame. Both adapters here reduce to the same single
//! "render one frame" operation on a shared [`FrameDriver`].

mod surface;

pub use surface::{PipelineRenderer, SharedDriver, SurfaceRenderer, frame_callback};
