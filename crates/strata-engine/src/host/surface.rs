use std::cell::RefCell;
use std::rc::Rc;

use crate::core::FrameDriver;
use crate::render::BatchRenderer;

/// Driver handle shared between the host adapter and application logic.
///
/// `Rc<RefCell<..>>` keeps the whole engine on one thread; a host that tried
/// to invoke the frame callback from another thread would not compile.
pub type SharedDriver<B> = Rc<RefCell<FrameDriver<B>>>;

/// Contract for hosts that drive rendering through a trait object.
///
/// The host calls [`on_surface_render`](Self::on_surface_render) once per
/// displayed frame on its own refresh schedule. The lifecycle hooks exist for
/// hosts that recreate their surface; GPU-side programs may need rebuilding
/// there, but the engine takes no action of its own.
pub trait SurfaceRenderer<S> {
    /// Renders one frame into `surface`.
    fn on_surface_render(&mut self, surface: &mut S);

    /// The surface was created.
    fn on_surface_created(&mut self, surface: &mut S) {
        let _ = surface;
    }

    /// The surface changed (resize, backing storage replaced).
    fn on_surface_changed(&mut self, surface: &mut S, width: u32, height: u32) {
        let _ = (surface, width, height);
    }
}

/// Trait-shaped adapter over a shared [`FrameDriver`].
pub struct PipelineRenderer<B: BatchRenderer> {
    driver: SharedDriver<B>,
}

impl<B: BatchRenderer> PipelineRenderer<B> {
    pub fn new(driver: SharedDriver<B>) -> Self {
        Self { driver }
    }
}

impl<B: BatchRenderer> SurfaceRenderer<B::Surface> for PipelineRenderer<B> {
    fn on_surface_render(&mut self, surface: &mut B::Surface) {
        render_one_frame(&self.driver, surface);
    }
}

/// Closure-shaped adapter for hosts that take a plain per-frame callback.
pub fn frame_callback<B: BatchRenderer>(
    driver: SharedDriver<B>,
) -> impl FnMut(&mut B::Surface) {
    move |surface| render_one_frame(&driver, surface)
}

/// The single frame operation both adapter shapes reduce to: run the cycle,
/// report diagnostics, log an aborted cycle instead of unwinding into the
/// host.
fn render_one_frame<B: BatchRenderer>(driver: &SharedDriver<B>, surface: &mut B::Surface) {
    match driver.borrow_mut().render_frame(surface) {
        Ok(stats) => stats.report(),
        Err(err) => log::error!("frame cycle aborted: {err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapData;
    use crate::paint::Color;

    #[derive(Default)]
    struct CountingBatch {
        frames: u32,
    }

    impl BatchRenderer for CountingBatch {
        type Surface = ();

        fn begin(&mut self, _surface: &mut (), _w: u32, _h: u32, _clear: Color) {
            self.frames += 1;
        }

        fn complete(&mut self) {}

        fn draw_calls(&self) -> u32 {
            0
        }

        fn triangles(&self) -> u32 {
            0
        }
    }

    fn shared_driver() -> SharedDriver<CountingBatch> {
        let map = Rc::new(MapData::new(20, 15, 16, 16, Color::BLACK, Vec::new()));
        Rc::new(RefCell::new(FrameDriver::new(
            map,
            CountingBatch::default(),
            10,
            8,
        )))
    }

    #[test]
    fn trait_adapter_renders_one_frame_per_invocation() {
        let driver = shared_driver();
        let mut renderer = PipelineRenderer::new(Rc::clone(&driver));

        renderer.on_surface_render(&mut ());
        renderer.on_surface_render(&mut ());

        assert_eq!(driver.borrow().batch().frames, 2);
    }

    #[test]
    fn closure_adapter_drives_the_same_driver() {
        let driver = shared_driver();
        let mut on_frame = frame_callback(Rc::clone(&driver));

        on_frame(&mut ());

        assert_eq!(driver.borrow().batch().frames, 1);
    }

    #[test]
    fn lifecycle_hooks_default_to_noops() {
        let driver = shared_driver();
        let mut renderer = PipelineRenderer::new(Rc::clone(&driver));

        renderer.on_surface_created(&mut ());
        renderer.on_surface_changed(&mut (), 320, 240);

        assert_eq!(driver.borrow().batch().frames, 0);
    }
}
