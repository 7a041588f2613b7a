use std::fmt;
use std::rc::Rc;

use anyhow::Result;

use crate::map::MapData;
use crate::render::{BatchRenderer, BatchScope, FrameStats, RenderContext, RenderPipeline};
use crate::time::FrameClock;
use crate::view::Viewport;

/// Top-level per-frame orchestration.
///
/// The host surface invokes [`render_frame`](Self::render_frame) once per
/// displayed frame; the cycle runs synchronously to completion before
/// control returns. The `&mut self` receiver rules out reentry: a new cycle
/// cannot begin before the previous one finishes.
///
/// The driver references the map for its lifetime (`Rc`, shared with the
/// loader) and owns viewport, clock, pipeline, and batch renderer.
pub struct FrameDriver<B: BatchRenderer> {
    map: Rc<MapData>,
    viewport: Viewport,
    clock: FrameClock,
    pipeline: RenderPipeline<B>,
    batch: B,
}

impl<B: BatchRenderer> FrameDriver<B> {
    /// Creates a driver over `map` with a viewport of `view_width` x
    /// `view_height` tiles and an empty pipeline.
    pub fn new(map: Rc<MapData>, batch: B, view_width: u32, view_height: u32) -> Self {
        let viewport = Viewport::new(&map, view_width, view_height);

        Self {
            map,
            viewport,
            clock: FrameClock::new(),
            pipeline: RenderPipeline::new(),
            batch,
        }
    }

    /// Runs one frame cycle.
    ///
    /// Ticks the clock, opens the batch bracket (clear to the map background,
    /// sized to the viewport's pixel extent), dispatches the pipeline in
    /// order, closes the bracket, then reads the post-frame counters.
    ///
    /// A failing layer aborts the cycle and skips the remaining layers; the
    /// bracket is still closed before the error propagates.
    pub fn render_frame(&mut self, surface: &mut B::Surface) -> Result<FrameStats> {
        let time_ms = self.clock.tick();

        {
            let mut scope = BatchScope::begin(
                &mut self.batch,
                surface,
                self.viewport.pixel_width(),
                self.viewport.pixel_height(),
                self.map.background_color(),
            );
            let mut ctx = RenderContext::new(&self.map, &self.viewport, time_ms, scope.batch_mut());
            self.pipeline.run(&mut ctx)?;
        }

        Ok(FrameStats {
            draw_calls: self.batch.draw_calls(),
            triangles: self.batch.triangles(),
        })
    }

    /// Restarts the animation clock, e.g. when resuming from suspension.
    pub fn restart_time(&mut self) {
        self.clock.restart();
    }

    #[inline]
    pub fn map(&self) -> &MapData {
        &self.map
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Scroll control between cycles (move_to / move_by / center).
    #[inline]
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    #[inline]
    pub fn pipeline(&self) -> &RenderPipeline<B> {
        &self.pipeline
    }

    /// Pipeline membership control between cycles (add / remove).
    #[inline]
    pub fn pipeline_mut(&mut self) -> &mut RenderPipeline<B> {
        &mut self.pipeline
    }

    #[inline]
    pub fn batch(&self) -> &B {
        &self.batch
    }
}

impl<B: BatchRenderer> fmt::Debug for FrameDriver<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameDriver")
            .field("width", &self.viewport.width())
            .field("height", &self.viewport.height())
            .field("pixel_width", &self.viewport.pixel_width())
            .field("pixel_height", &self.viewport.pixel_height())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use anyhow::bail;

    use crate::paint::Color;
    use crate::render::{Layer, LayerRef};

    /// Records the bracket and exposes canned counters.
    #[derive(Default)]
    struct RecordingBatch {
        begins: u32,
        completes: u32,
        last_clear: Option<(u32, u32, Color)>,
        calls: u32,
        triangles: u32,
    }

    impl BatchRenderer for RecordingBatch {
        type Surface = ();

        fn begin(&mut self, _surface: &mut (), w: u32, h: u32, clear: Color) {
            self.begins += 1;
            self.last_clear = Some((w, h, clear));
        }

        fn complete(&mut self) {
            self.completes += 1;
        }

        fn draw_calls(&self) -> u32 {
            self.calls
        }

        fn triangles(&self) -> u32 {
            self.triangles
        }
    }

    struct TimeProbe {
        seen: Rc<RefCell<Vec<u32>>>,
    }

    impl Layer<RecordingBatch> for TimeProbe {
        fn render(&mut self, ctx: &mut RenderContext<'_, RecordingBatch>) -> Result<()> {
            self.seen.borrow_mut().push(ctx.current_time());
            Ok(())
        }
    }

    struct FailingLayer;

    impl Layer<RecordingBatch> for FailingLayer {
        fn render(&mut self, _ctx: &mut RenderContext<'_, RecordingBatch>) -> Result<()> {
            bail!("tile atlas missing");
        }
    }

    fn driver() -> FrameDriver<RecordingBatch> {
        let map = Rc::new(MapData::new(
            20,
            15,
            16,
            16,
            Color::from_argb_u32(0xFF10_2030),
            Vec::new(),
        ));
        FrameDriver::new(map, RecordingBatch::default(), 10, 8)
    }

    // ── bracketing ────────────────────────────────────────────────────────

    #[test]
    fn empty_pipeline_still_brackets_once() {
        let mut driver = driver();

        let stats = driver.render_frame(&mut ()).unwrap();

        assert_eq!(driver.batch().begins, 1);
        assert_eq!(driver.batch().completes, 1);
        assert_eq!(stats, FrameStats::default());
    }

    #[test]
    fn begin_uses_viewport_extent_and_background() {
        let mut driver = driver();
        let background = driver.map().background_color();

        driver.render_frame(&mut ()).unwrap();

        assert_eq!(driver.batch().last_clear, Some((160, 128, background)));
    }

    #[test]
    fn failing_layer_aborts_but_closes_the_bracket() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut driver = driver();

        driver.pipeline_mut().add(Rc::new(RefCell::new(FailingLayer)));
        let after: LayerRef<RecordingBatch> = Rc::new(RefCell::new(TimeProbe {
            seen: Rc::clone(&seen),
        }));
        driver.pipeline_mut().add(after);

        let err = driver.render_frame(&mut ()).unwrap_err();
        assert!(err.to_string().contains("tile atlas missing"));

        // Later layers were skipped, the bracket still closed.
        assert!(seen.borrow().is_empty());
        assert_eq!(driver.batch().begins, 1);
        assert_eq!(driver.batch().completes, 1);
    }

    // ── timing ────────────────────────────────────────────────────────────

    #[test]
    fn all_layers_observe_the_same_frame_time() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut driver = driver();

        for _ in 0..3 {
            driver.pipeline_mut().add(Rc::new(RefCell::new(TimeProbe {
                seen: Rc::clone(&seen),
            })));
        }

        driver.render_frame(&mut ()).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|&t| t == seen[0]));
    }

    // ── diagnostics ───────────────────────────────────────────────────────

    #[test]
    fn stats_pass_through_post_frame_counters() {
        let mut driver = driver();
        driver.batch = RecordingBatch {
            calls: 7,
            triangles: 42,
            ..RecordingBatch::default()
        };

        let stats = driver.render_frame(&mut ()).unwrap();
        assert_eq!(
            stats,
            FrameStats {
                draw_calls: 7,
                triangles: 42,
            }
        );
    }

    #[test]
    fn debug_summarizes_geometry() {
        let driver = driver();
        let summary = format!("{driver:?}");
        assert!(summary.contains("pixel_width: 160"));
        assert!(summary.contains("pixel_height: 128"));
    }
}
