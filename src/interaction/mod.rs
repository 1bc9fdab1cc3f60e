use serde::{Deserialize, Serialize};

use crate::core::IndexDomain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

/// Ephemeral record of a pan gesture: the pointer position and the domain
/// snapshot captured when the drag began. Destroyed on drag end or cancel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub anchor_pointer_x: f64,
    pub anchor_domain: IndexDomain,
}

/// Drag-gesture state machine: `Idle` until a drag starts, `Dragging`
/// until the host reports drag end, cancel, or input-capture loss.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    drag: Option<DragSession>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        if self.drag.is_some() {
            InteractionMode::Dragging
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn drag_session(self) -> Option<DragSession> {
        self.drag
    }

    /// Opens a drag session. Returns `false` when a session is already
    /// active; only the first session is honored until it ends.
    pub fn on_drag_start(&mut self, anchor_pointer_x: f64, anchor_domain: IndexDomain) -> bool {
        if self.drag.is_some() {
            return false;
        }
        self.drag = Some(DragSession {
            anchor_pointer_x,
            anchor_domain,
        });
        true
    }

    /// Destroys the active drag session. Returns `false` when idle.
    pub fn on_drag_end(&mut self) -> bool {
        self.drag.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionMode, InteractionState};
    use crate::core::IndexDomain;

    #[test]
    fn drag_lifecycle_transitions_mode() {
        let domain = IndexDomain::new(0, 9).expect("valid domain");
        let mut interaction = InteractionState::default();
        assert_eq!(interaction.mode(), InteractionMode::Idle);

        assert!(interaction.on_drag_start(120.0, domain));
        assert_eq!(interaction.mode(), InteractionMode::Dragging);

        assert!(interaction.on_drag_end());
        assert_eq!(interaction.mode(), InteractionMode::Idle);
        assert!(!interaction.on_drag_end());
    }

    #[test]
    fn second_drag_start_is_ignored() {
        let domain = IndexDomain::new(0, 9).expect("valid domain");
        let mut interaction = InteractionState::default();

        assert!(interaction.on_drag_start(100.0, domain));
        assert!(!interaction.on_drag_start(500.0, domain));

        let session = interaction.drag_session().expect("active session");
        assert_eq!(session.anchor_pointer_x, 100.0);
    }
}
