use crate::paint::Color;

/// Contract of the host's low-level draw accumulator.
///
/// Draw calls issued between [`begin`](Self::begin) and
/// [`complete`](Self::complete) are batched and submitted once per frame.
/// The counters report the last completed frame and are read after the
/// bracket closes.
pub trait BatchRenderer {
    /// Host-surface handle threaded through from the frame callback into
    /// `begin` (a GL substrate, a command encoder, a plain framebuffer).
    type Surface;

    /// Opens a frame: clears the target to `clear`, sized
    /// `pixel_width` x `pixel_height`.
    fn begin(
        &mut self,
        surface: &mut Self::Surface,
        pixel_width: u32,
        pixel_height: u32,
        clear: Color,
    );

    /// Flushes the accumulated batch and closes the frame.
    fn complete(&mut self);

    /// Draw calls submitted for the last completed frame.
    fn draw_calls(&self) -> u32;

    /// Triangles submitted for the last completed frame.
    fn triangles(&self) -> u32;
}

/// Scoped begin/complete bracket around a [`BatchRenderer`].
///
/// `complete()` runs on drop, so the bracket closes on every exit path from a
/// render cycle — normal completion, a failing layer returning early, or a
/// panic unwinding through the driver. Graphics-driver state is never left
/// mid-batch.
pub struct BatchScope<'a, B: BatchRenderer> {
    batch: &'a mut B,
}

impl<'a, B: BatchRenderer> BatchScope<'a, B> {
    /// Opens the frame on `batch` and returns the guard that will close it.
    pub fn begin(
        batch: &'a mut B,
        surface: &mut B::Surface,
        pixel_width: u32,
        pixel_height: u32,
        clear: Color,
    ) -> Self {
        batch.begin(surface, pixel_width, pixel_height, clear);
        Self { batch }
    }

    /// The bracketed renderer, for issuing draws.
    #[inline]
    pub fn batch_mut(&mut self) -> &mut B {
        self.batch
    }
}

impl<B: BatchRenderer> Drop for BatchScope<'_, B> {
    fn drop(&mut self) {
        self.batch.complete();
    }
}

/// Post-frame counters surfaced for diagnostics.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub draw_calls: u32,
    pub triangles: u32,
}

impl FrameStats {
    /// Emits the per-frame diagnostic lines.
    pub fn report(self) {
        log::debug!("Calls {}", self.draw_calls);
        log::debug!("Triangles {}", self.triangles);
    }
}
