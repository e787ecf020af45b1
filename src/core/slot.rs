//! Slot: eine Andock-Position im Stapel eines Blocks.

use super::{BlockId, RegionHandle};

/// Ein Slot in der Canvas-Arena
#[derive(Debug, Clone)]
pub struct Slot {
    /// Besitzender Block (Rückverweis)
    pub parent: BlockId,
    /// Höhe: Gesamthöhe des eingerasteten Blocks oder Tail-Höhe
    pub height: f32,
    /// Letzter Slot im Stapel (mit Abschlusskappe)
    pub is_tail: bool,
    /// Vertikaler Offset innerhalb des Blocks
    pub y: f32,
    /// Füllfarbe (vom Block geerbt)
    pub color: [f32; 4],
    /// Handle der eigenen Snap-Region
    pub(crate) region: RegionHandle,
}

impl Slot {
    /// Handle der Snap-Region dieses Slots.
    pub fn region(&self) -> RegionHandle {
        self.region
    }
}
