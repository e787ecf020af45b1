//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{BlockScene, BlockVisual, RegionVisual, SlotVisual};

/// Baut eine BlockScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> BlockScene {
    let canvas = &state.canvas;

    let blocks = canvas
        .blocks()
        .map(|(id, block)| BlockVisual {
            id,
            position: block.position,
            color: block.color,
            stroke_width: block.stroke_width,
            text: block.text.clone(),
            draggable: block.draggable,
            dragging: block.is_dragging(),
            slots: block
                .slots()
                .iter()
                .filter_map(|slot_id| {
                    canvas.slot(*slot_id).map(|slot| SlotVisual {
                        id: *slot_id,
                        y: slot.y,
                        height: slot.height,
                        is_tail: slot.is_tail,
                    })
                })
                .collect(),
        })
        .collect();

    let regions = if state.options.show_snap_regions {
        canvas
            .registry()
            .regions()
            .map(|(_, region)| RegionVisual {
                position: region.position,
                size: region.size,
                enabled: region.enabled,
            })
            .collect()
    } else {
        Vec::new()
    };

    BlockScene {
        blocks,
        regions,
        metrics: *canvas.metrics(),
        background: state.options.canvas_background,
        region_color: state.options.region_overlay_color,
    }
}
