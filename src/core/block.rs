//! Instruktions-Block: Banner mit Text und optionalem Slot-Stapel.

use super::SlotId;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Startparameter eines Blocks (aus der Konfiguration oder vom Host).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockConfig {
    /// Anzeigetext im Banner
    pub text: String,
    /// Füllfarbe (RGBA)
    pub color: [f32; 4],
    /// Start-X in Weltkoordinaten
    pub x: f32,
    /// Start-Y in Weltkoordinaten
    pub y: f32,
    /// Ob der Block andockbare Slots besitzt
    pub has_slots: bool,
    /// Ob der Block gezogen werden kann
    #[serde(default = "default_draggable")]
    pub draggable: bool,
    /// Linienstärke der Umrandung
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
}

fn default_draggable() -> bool {
    true
}

fn default_stroke_width() -> f32 {
    1.0
}

impl BlockConfig {
    /// Erstellt eine Konfiguration mit Standard-Linienstärke.
    pub fn new(
        text: impl Into<String>,
        color: [f32; 4],
        x: f32,
        y: f32,
        has_slots: bool,
        draggable: bool,
    ) -> Self {
        Self {
            text: text.into(),
            color,
            x,
            y,
            has_slots,
            draggable,
            stroke_width: default_stroke_width(),
        }
    }
}

/// Ein Block in der Canvas-Arena
#[derive(Debug, Clone)]
pub struct Block {
    /// Anzeigetext
    pub text: String,
    /// Füllfarbe (RGBA), wird an neue Slots vererbt
    pub color: [f32; 4],
    /// Linienstärke der Umrandung
    pub stroke_width: f32,
    /// Ob der Block gezogen werden kann
    pub draggable: bool,
    /// Ob der Block Slots besitzt
    pub has_slots: bool,
    /// Position der oberen linken Ecke in Weltkoordinaten
    pub position: Vec2,
    /// Geordneter Slot-Stapel (leer wenn `has_slots == false`)
    pub(crate) slots: Vec<SlotId>,
    /// Position beim Drag-Start (nur während eines Drags gesetzt)
    pub(crate) drag_start: Option<Vec2>,
}

impl Block {
    pub(crate) fn from_config(config: &BlockConfig) -> Self {
        Self {
            text: config.text.clone(),
            color: config.color,
            stroke_width: config.stroke_width,
            draggable: config.draggable,
            has_slots: config.has_slots,
            position: Vec2::new(config.x, config.y),
            slots: Vec::new(),
            drag_start: None,
        }
    }

    /// Slots in Stapelreihenfolge.
    pub fn slots(&self) -> &[SlotId] {
        &self.slots
    }

    /// Letzter Slot des Stapels.
    pub fn tail_slot(&self) -> Option<SlotId> {
        self.slots.last().copied()
    }

    /// Gibt zurück, ob der Block (oder ein Vorfahre) gerade gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    /// Position zu Beginn des aktuellen Drags.
    pub fn drag_start(&self) -> Option<Vec2> {
        self.drag_start
    }
}
