//! Handler für Canvas-Aufbau und Darstellungsschalter.

use crate::app::use_cases;
use crate::app::AppState;

/// Baut die Canvas aus den Start-Blöcken neu auf.
pub fn reset(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::scratchpad::reset(state)
}

/// Schaltet das Snap-Regionen-Overlay um.
pub fn toggle_snap_regions(state: &mut AppState) {
    use_cases::scratchpad::toggle_snap_regions(state);
}

/// Setzt die Linienstärke aller Blöcke.
pub fn set_stroke_size(state: &mut AppState, size: f32) -> anyhow::Result<()> {
    use_cases::scratchpad::set_stroke_size(state, size)
}
