mod binding;
mod drag_controller;
mod engine_snapshot;
mod events;
mod pan_delta_resolver;
mod snapshot_controller;
mod zoom_controller;
mod zoom_target_resolver;

pub use binding::InputBinding;
pub use engine_snapshot::EngineSnapshot;
pub use events::{InputEvent, WheelDirection};

use tracing::{debug, trace};

use crate::core::{Container, IndexDomain, ViewportState, ZoomTuning, window_slice};
use crate::error::ViewportResult;
use crate::interaction::{DragSession, InteractionMode, InteractionState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportEngineConfig {
    pub container: Container,
    pub dataset_len: usize,
    pub tuning: ZoomTuning,
}

impl ViewportEngineConfig {
    #[must_use]
    pub fn new(container: Container, dataset_len: usize) -> Self {
        Self {
            container,
            dataset_len,
            tuning: ZoomTuning::default(),
        }
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: ZoomTuning) -> Self {
        self.tuning = tuning;
        self
    }
}

/// Owns viewport and drag state for one dataset/container pair and applies
/// abstract input events to it. Hosts pull the visible window from the
/// engine; the engine never calls back into the host.
///
/// One engine instance must be driven from a single serialized input
/// source: every operation runs to completion before the next event.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportEngine {
    container: Container,
    dataset_len: usize,
    tuning: ZoomTuning,
    state: ViewportState,
    interaction: InteractionState,
}

impl ViewportEngine {
    pub fn new(config: ViewportEngineConfig) -> ViewportResult<Self> {
        let tuning = config.tuning.validate()?;
        Ok(Self {
            container: config.container,
            dataset_len: config.dataset_len,
            tuning,
            state: ViewportState::initial(config.dataset_len, tuning),
            interaction: InteractionState::default(),
        })
    }

    /// Attaches a new dataset, replacing viewport state wholesale.
    ///
    /// Any active drag session is destroyed: its anchor domain describes a
    /// window over the previous dataset.
    pub fn attach_dataset(&mut self, dataset_len: usize) {
        debug!(dataset_len, "attach dataset");
        self.dataset_len = dataset_len;
        self.state = ViewportState::initial(dataset_len, self.tuning);
        self.interaction = InteractionState::default();
    }

    /// Forwards a host-side container resize. Window indices are left
    /// untouched; geometry only affects future pixel-to-index conversion.
    pub fn set_container(&mut self, container: Container) {
        trace!(width = container.width, "set container");
        self.container = container;
    }

    #[must_use]
    pub fn container(&self) -> Container {
        self.container
    }

    #[must_use]
    pub fn dataset_len(&self) -> usize {
        self.dataset_len
    }

    #[must_use]
    pub fn tuning(&self) -> ZoomTuning {
        self.tuning
    }

    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<DragSession> {
        self.interaction.drag_session()
    }

    #[must_use]
    pub fn current_scale(&self) -> f64 {
        self.state.scale()
    }

    /// `true` once any magnification is applied; hosts use this to gate
    /// reset-zoom affordances and idle hints.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.state.scale() > self.tuning.min_scale
    }

    #[must_use]
    pub fn visible_domain(&self) -> Option<IndexDomain> {
        self.state.domain()
    }

    /// Inclusive `[start, end]` index pair of the visible window; `None`
    /// for an empty dataset.
    #[must_use]
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        self.state.domain().map(IndexDomain::as_tuple)
    }

    /// Projects the visible window onto the host's records.
    #[must_use]
    pub fn visible_slice<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        window_slice(records, self.state.domain())
    }
}
