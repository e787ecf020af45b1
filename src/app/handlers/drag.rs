//! Handler für den Drag-Lebenszyklus von Blöcken.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::BlockId;

/// Startet den Drag eines Blocks.
pub fn begin(state: &mut AppState, block_id: BlockId, pointer: glam::Vec2) -> anyhow::Result<()> {
    use_cases::drag::begin(state, block_id, pointer)
}

/// Zieht den aktiven Block zur Pointer-Position.
pub fn drag_to(state: &mut AppState, pointer: glam::Vec2) -> anyhow::Result<()> {
    use_cases::drag::drag_to(state, pointer)
}

/// Beendet den aktiven Drag.
pub fn end(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::drag::end(state)
}
