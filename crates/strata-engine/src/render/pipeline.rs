use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

use super::{BatchRenderer, RenderContext};

/// One stage of the pipeline contributing to a frame's output.
///
/// Effects go through the batch renderer only; the context never exposes
/// viewport or map mutation. An error aborts the current cycle (the driver
/// still closes the batch bracket before propagating it).
pub trait Layer<B: BatchRenderer> {
    fn render(&mut self, ctx: &mut RenderContext<'_, B>) -> Result<()>;
}

/// Shared handle to a pipeline member.
///
/// `Rc` identity doubles as the removal key, and cloning a handle into the
/// pipeline twice is the supported way to render a layer twice per cycle.
pub type LayerRef<B> = Rc<RefCell<dyn Layer<B>>>;

/// Ordered collection of layers, dispatched once per render cycle.
///
/// Insertion order is paint order and is preserved across add/remove.
/// Membership is mutated between cycles on the render thread; during `run`
/// the list is borrowed and cannot change, so every cycle sees a consistent
/// snapshot.
pub struct RenderPipeline<B: BatchRenderer> {
    layers: Vec<LayerRef<B>>,
}

impl<B: BatchRenderer> RenderPipeline<B> {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Appends a layer. No deduplication.
    pub fn add(&mut self, layer: LayerRef<B>) {
        self.layers.push(layer);
    }

    /// Removes the first entry pointing at the same layer as `layer`.
    ///
    /// Returns whether an entry was removed; no-op if absent.
    pub fn remove(&mut self, layer: &LayerRef<B>) -> bool {
        match self.layers.iter().position(|l| Rc::ptr_eq(l, layer)) {
            Some(index) => {
                self.layers.remove(index);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Invokes every current member exactly once, in list order, stopping at
    /// the first error.
    pub fn run(&self, ctx: &mut RenderContext<'_, B>) -> Result<()> {
        for layer in &self.layers {
            layer.borrow_mut().render(ctx)?;
        }
        Ok(())
    }
}

impl<B: BatchRenderer> Default for RenderPipeline<B> {
    fn default() -> Self {
        Self::new()
    }
}
