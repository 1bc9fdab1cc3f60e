use serde::{Deserialize, Serialize};

use crate::core::Container;
use crate::interaction::{DragSession, InteractionMode};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub container: Container,
    pub dataset_len: usize,
    pub scale: f64,
    pub visible_domain: Option<(usize, usize)>,
    pub mode: InteractionMode,
    pub drag: Option<DragSession>,
}
