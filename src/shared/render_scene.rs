//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::{BlockId, LayoutMetrics, SlotId};
use glam::Vec2;

/// Darstellungsdaten eines Slots, relativ zum Eltern-Block.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotVisual {
    pub id: SlotId,
    /// Vertikaler Offset innerhalb des Blocks
    pub y: f32,
    pub height: f32,
    /// Tail-Slots bekommen den abschließenden Deckel
    pub is_tail: bool,
}

/// Darstellungsdaten eines Blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockVisual {
    pub id: BlockId,
    /// Weltposition der Banner-Ecke oben links
    pub position: Vec2,
    /// Füllfarbe (RGBA)
    pub color: [f32; 4],
    pub stroke_width: f32,
    pub text: String,
    /// Banner mit Griff und Kerbe zeichnen
    pub draggable: bool,
    pub dragging: bool,
    /// Slots von oben nach unten
    pub slots: Vec<SlotVisual>,
}

/// Debug-Darstellung einer Snap-Region in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionVisual {
    pub position: Vec2,
    pub size: Vec2,
    pub enabled: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockScene {
    /// Blöcke in Zeichenreihenfolge (letzter = oberster)
    pub blocks: Vec<BlockVisual>,
    /// Snap-Regionen (leer, wenn das Overlay ausgeschaltet ist)
    pub regions: Vec<RegionVisual>,
    /// Maße für Banner und Slot-Streifen
    pub metrics: LayoutMetrics,
    /// Hintergrundfarbe der Canvas
    pub background: [f32; 4],
    /// Farbe des Regionen-Overlays
    pub region_color: [f32; 4],
}

impl BlockScene {
    /// Gibt zurück, ob Blöcke zum Zeichnen vorhanden sind.
    pub fn has_blocks(&self) -> bool {
        !self.blocks.is_empty()
    }

    /// Sucht die Darstellung eines Blocks.
    pub fn block(&self, id: BlockId) -> Option<&BlockVisual> {
        self.blocks.iter().find(|b| b.id == id)
    }
}
