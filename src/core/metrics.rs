//! Feste Maße für Banner, Slots und Snap-Regionen.

use serde::{Deserialize, Serialize};

/// Breite des Block-Banners.
pub const BANNER_WIDTH: f32 = 400.0;
/// Höhe des Block-Banners.
pub const BANNER_HEIGHT: f32 = 30.0;
/// Breite des linken Slot-Streifens.
pub const NESTED_WIDTH: f32 = 12.0;
/// Höhe der Abschlusskappe unter dem letzten Slot.
pub const NESTED_TAIL_HEIGHT: f32 = 12.0;
/// Breite einer Snap-Region.
pub const SNAP_REGION_WIDTH: f32 = 20.0;

/// Layout-Maße, die das Block-Modell für Stapelung und Snap-Regionen braucht.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Breite des Banners
    pub banner_width: f32,
    /// Höhe des Banners (Startoffset der Slot-Stapelung)
    pub banner_height: f32,
    /// Breite des Slot-Streifens, zugleich X-Offset eingerasteter Blöcke
    pub nested_width: f32,
    /// Höhe eines leeren Tail-Slots
    pub tail_slot_height: f32,
    /// Breite einer Snap-Region
    pub snap_region_width: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            banner_width: BANNER_WIDTH,
            banner_height: BANNER_HEIGHT,
            nested_width: NESTED_WIDTH,
            tail_slot_height: NESTED_TAIL_HEIGHT + BANNER_HEIGHT,
            snap_region_width: SNAP_REGION_WIDTH,
        }
    }
}

impl LayoutMetrics {
    /// Höhe einer Snap-Region (entspricht der Banner-Höhe).
    pub fn snap_region_height(&self) -> f32 {
        self.banner_height
    }
}
