use crate::core::BlockId;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag eines Blocks beginnen (Pointer in Canvas-Koordinaten)
    BeginBlockDrag {
        block_id: BlockId,
        pointer: glam::Vec2,
    },
    /// Gezogenen Block zum Pointer bewegen, inklusive Snap-Abfrage
    DragBlockTo { pointer: glam::Vec2 },
    /// Drag beenden
    EndBlockDrag,
    /// Canvas neu aufbauen
    ResetScratchpad,
    /// Snap-Regionen-Overlay umschalten
    ToggleSnapRegions,
    /// Linienstärke aller Blöcke setzen
    SetStrokeSize { size: f32 },
    /// Optionen persistieren
    SaveOptions,
    /// Anwendung beenden
    RequestExit,
}
