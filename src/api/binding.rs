use tracing::debug;

use super::{InputEvent, ViewportEngine};

/// Scoped attachment of a host input surface to the engine.
///
/// A binding borrows the engine exclusively for the lifetime of the
/// listener registration on the host side; dropping it cancels any drag
/// session still in flight, so a torn-down surface can never leave an
/// orphaned anchor behind.
#[derive(Debug)]
pub struct InputBinding<'a> {
    engine: &'a mut ViewportEngine,
}

impl ViewportEngine {
    /// Attaches an input surface. Detach by dropping the binding.
    pub fn bind_input(&mut self) -> InputBinding<'_> {
        debug!("input surface attached");
        InputBinding { engine: self }
    }
}

impl InputBinding<'_> {
    pub fn forward(&mut self, event: InputEvent) {
        self.engine.apply_event(event);
    }

    #[must_use]
    pub fn engine(&self) -> &ViewportEngine {
        self.engine
    }
}

impl Drop for InputBinding<'_> {
    fn drop(&mut self) {
        debug!("input surface detached");
        self.engine.drag_cancel();
    }
}
