use crate::core::BlockId;
use glam::Vec2;

/// Transienter Zustand zwischen Pointer-Down und Pointer-Up.
///
/// Es wird höchstens ein Block gleichzeitig gezogen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Aktuell gezogener Block
    pub dragged: Option<BlockId>,
    /// Pointer-Position beim Drag-Start (Canvas-Koordinaten)
    pub pointer_origin: Vec2,
}

impl DragState {
    /// Gibt zurück, ob gerade ein Block gezogen wird.
    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }
}
