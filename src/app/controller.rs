//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::BlockScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Drag ===
            AppCommand::BeginBlockDrag { block_id, pointer } => {
                handlers::drag::begin(state, block_id, pointer)?
            }
            AppCommand::DragBlockTo { pointer } => handlers::drag::drag_to(state, pointer)?,
            AppCommand::EndBlockDrag => handlers::drag::end(state)?,

            // === Canvas ===
            AppCommand::ResetScratchpad => handlers::scratchpad::reset(state)?,
            AppCommand::ToggleSnapRegions => handlers::scratchpad::toggle_snap_regions(state),
            AppCommand::SetStrokeSize { size } => {
                handlers::scratchpad::set_stroke_size(state, size)?
            }

            // === Optionen & Anwendungssteuerung ===
            AppCommand::SaveOptions => handlers::dialog::save_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> BlockScene {
        render_scene::build(state)
    }
}
