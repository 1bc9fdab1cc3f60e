use crate::error::{ViewportError, ViewportResult};

use super::{EngineSnapshot, ViewportEngine};

impl ViewportEngine {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            container: self.container,
            dataset_len: self.dataset_len,
            scale: self.state.scale(),
            visible_domain: self.visible_range(),
            mode: self.interaction.mode(),
            drag: self.interaction.drag_session(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ViewportResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ViewportError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
