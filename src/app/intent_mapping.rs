//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => {
            if state.drag.is_active() {
                return Vec::new();
            }

            // Oberster getroffener Block; statische Blöcke fangen den Klick ab
            match state.canvas.block_at(pos) {
                Some(block_id)
                    if state
                        .canvas
                        .block(block_id)
                        .is_some_and(|block| block.draggable) =>
                {
                    vec![AppCommand::BeginBlockDrag {
                        block_id,
                        pointer: pos,
                    }]
                }
                _ => Vec::new(),
            }
        }
        AppIntent::PointerMoved { pos } => {
            if state.drag.is_active() {
                vec![AppCommand::DragBlockTo { pointer: pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased => {
            if state.drag.is_active() {
                vec![AppCommand::EndBlockDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::ResetScratchpadRequested => {
            let mut commands = Vec::new();
            if state.drag.is_active() {
                commands.push(AppCommand::EndBlockDrag);
            }
            commands.push(AppCommand::ResetScratchpad);
            commands
        }
        AppIntent::ToggleSnapRegionsRequested => vec![AppCommand::ToggleSnapRegions],
        AppIntent::StrokeSizeChanged { size } => vec![AppCommand::SetStrokeSize { size }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
