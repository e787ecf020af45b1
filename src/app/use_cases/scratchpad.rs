//! Use-Case-Funktionen für Aufbau und Pflege der Canvas.

use crate::app::AppState;
use crate::core::BlockCanvas;
use crate::shared::ScratchpadOptions;

/// Baut eine Canvas aus den konfigurierten Start-Blöcken.
pub fn build_canvas(options: &ScratchpadOptions) -> anyhow::Result<BlockCanvas> {
    let mut canvas = BlockCanvas::new(options.layout);
    for config in &options.blocks {
        canvas.add_block(config)?;
    }
    Ok(canvas)
}

/// Verwirft alle Blöcke und baut die Canvas neu auf.
pub fn reset(state: &mut AppState) -> anyhow::Result<()> {
    state.canvas = build_canvas(&state.options)?;
    state.drag = Default::default();
    state.status_message = Some(format!(
        "Scratchpad zurückgesetzt ({} Blöcke)",
        state.canvas.block_count()
    ));
    log::info!("Scratchpad zurückgesetzt: {} Blöcke", state.canvas.block_count());
    Ok(())
}

/// Schaltet das Debug-Overlay der Snap-Regionen um.
pub fn toggle_snap_regions(state: &mut AppState) {
    state.options.show_snap_regions = !state.options.show_snap_regions;
}

/// Setzt die Linienstärke aller Blöcke.
pub fn set_stroke_size(state: &mut AppState, size: f32) -> anyhow::Result<()> {
    let ids: Vec<_> = state.canvas.blocks().map(|(id, _)| id).collect();
    for id in ids {
        state.canvas.set_stroke_size(id, size)?;
    }
    Ok(())
}
