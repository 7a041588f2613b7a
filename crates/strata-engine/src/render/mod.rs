//! Render-cycle subsystem.
//!
//! Layers consume a [`RenderContext`] and issue draws through the host's
//! batch renderer. The engine never touches draw primitives itself; it only
//! guarantees ordering (the pipeline) and bracketing (the batch scope).

mod batch;
mod ctx;
mod pipeline;

pub use batch::{BatchRenderer, BatchScope, FrameStats};
pub use ctx::RenderContext;
pub use pipeline::{Layer, LayerRef, RenderPipeline};
