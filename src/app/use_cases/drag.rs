//! Use-Case-Funktionen für das Ziehen von Blöcken.
//!
//! Pointer-Down merkt sich Block und Pointer, Pointer-Move berechnet die
//! Kandidaten-Position relativ zur Drag-Start-Position und fragt die
//! Snap-Registry. Ein Treffer paart Block und Slot, ohne Treffer wird ein
//! bestehendes Pairing gelöst. Danach landet der Block an der gemeldeten
//! Position (Regions-Ecke oder Kandidat).

use crate::app::AppState;
use crate::core::{BlockId, Entity};
use anyhow::anyhow;
use glam::Vec2;

/// Beginnt den Drag eines Blocks.
///
/// Hebt den Block samt eingerasteter Kette nach oben und deaktiviert die
/// Regionen seiner Slots. Läuft bereits ein Drag, passiert nichts.
pub fn begin(state: &mut AppState, block_id: BlockId, pointer: Vec2) -> anyhow::Result<()> {
    if let Some(current) = state.drag.dragged {
        log::debug!("Drag von {block_id} ignoriert: {current} wird bereits gezogen");
        return Ok(());
    }

    let draggable = state
        .canvas
        .block(block_id)
        .ok_or_else(|| anyhow!("Block {block_id} existiert nicht"))?
        .draggable;
    if !draggable {
        log::debug!("Block {block_id} ist statisch, kein Drag");
        return Ok(());
    }

    state.canvas.raise_block(block_id)?;
    state.canvas.mark_dragging(block_id)?;
    state.drag.dragged = Some(block_id);
    state.drag.pointer_origin = pointer;

    log::debug!("Drag von Block {block_id} gestartet bei {pointer}");
    Ok(())
}

/// Bewegt den gezogenen Block zum Pointer und rastet ein bzw. löst.
pub fn drag_to(state: &mut AppState, pointer: Vec2) -> anyhow::Result<()> {
    let Some(block_id) = state.drag.dragged else {
        return Ok(());
    };

    let drag_start = state
        .canvas
        .block(block_id)
        .ok_or_else(|| anyhow!("Gezogener Block {block_id} existiert nicht"))?
        .drag_start()
        .ok_or_else(|| anyhow!("Block {block_id} ist nicht als gezogen markiert"))?;

    let candidate = pointer - state.drag.pointer_origin + drag_start;
    let tolerance = state.options.snap_tolerance_vec();
    let mut query = state.canvas.query(candidate, tolerance);

    let block = Entity::Block(block_id);
    if let (Some(hit), Some(current)) = (query.hit, state.canvas.pair_of(block)) {
        if current != Entity::Slot(hit.slot) {
            // Wechsel in einen anderen Slot: altes Pairing zuerst lösen.
            // Das Lösen verändert den Stapel des alten Besitzers (der
            // getroffene Slot kann sogar entfernt sein), daher neu abfragen.
            state.canvas.unpair(block)?;
            query = state.canvas.query(candidate, tolerance);
        }
    }

    match query.hit {
        Some(hit) => {
            state.canvas.pair(Entity::Slot(hit.slot), block)?;
        }
        None => {
            state.canvas.unpair(block)?;
        }
    }

    state.canvas.set_block_position(block_id, query.position)?;
    Ok(())
}

/// Beendet den laufenden Drag.
pub fn end(state: &mut AppState) -> anyhow::Result<()> {
    let Some(block_id) = state.drag.dragged.take() else {
        return Ok(());
    };

    state.canvas.clear_dragging(block_id)?;
    log::debug!("Drag von Block {block_id} beendet");
    Ok(())
}
