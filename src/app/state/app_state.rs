use crate::app::use_cases;
use crate::app::CommandLog;
use crate::core::BlockCanvas;
use crate::shared::ScratchpadOptions;

use super::DragState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Blöcke, Slots und Snap-Registry
    pub canvas: BlockCanvas,
    /// Laufender Drag (falls vorhanden)
    pub drag: DragState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Toleranzen, Layout, Start-Blöcke)
    pub options: ScratchpadOptions,
    /// Statuszeile (letzte Meldung)
    pub status_message: Option<String>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den App-State und baut die Canvas aus den Start-Blöcken auf.
    pub fn from_options(options: ScratchpadOptions) -> anyhow::Result<Self> {
        let canvas = use_cases::scratchpad::build_canvas(&options)?;
        Ok(Self {
            canvas,
            drag: DragState::default(),
            command_log: CommandLog::new(),
            options,
            status_message: None,
            should_exit: false,
        })
    }

    /// Gibt die Anzahl der Blöcke zurück (für UI-Anzeige)
    pub fn block_count(&self) -> usize {
        self.canvas.block_count()
    }

    /// Gibt die Anzahl der Slots zurück (für UI-Anzeige)
    pub fn slot_count(&self) -> usize {
        self.canvas.slot_count()
    }

    /// Gibt die Anzahl aktiver Pairings zurück (für UI-Anzeige)
    pub fn pairing_count(&self) -> usize {
        self.canvas.registry().pair_count()
    }
}
