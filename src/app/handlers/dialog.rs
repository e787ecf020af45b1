//! Handler für Optionen und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::ScratchpadOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Persistiert die aktuellen Optionen in der Konfigurationsdatei.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    let path = ScratchpadOptions::config_path();
    state.options.save_to_file(&path)?;
    state.status_message = Some(format!("Optionen gespeichert: {}", path.display()));
    Ok(())
}
