//! Canvas-Input-Handling: Maus-Events → AppIntent, dazu der Canvas-Cursor.

use crate::app::{AppIntent, AppState};

/// Verwaltet den Input-Zustand der Canvas (laufender Primär-Drag)
#[derive(Default)]
pub struct InputState {
    pointer_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pointer_down: false,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Positionen werden relativ zur oberen linken Ecke der Canvas geliefert.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let origin = response.rect.min;

        if response.drag_started_by(egui::PointerButton::Primary) {
            // press_origin() liefert die exakte Klickposition vor der Drag-Schwelle
            let press_pos = ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(pointer_pos) = press_pos {
                events.push(AppIntent::PointerPressed {
                    pos: screen_to_canvas(pointer_pos, origin),
                });
                self.pointer_down = true;
            }
        }

        if self.pointer_down && response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::PointerMoved {
                    pos: screen_to_canvas(pointer_pos, origin),
                });
            }
        }

        if self.pointer_down && response.drag_stopped_by(egui::PointerButton::Primary) {
            events.push(AppIntent::PointerReleased);
            self.pointer_down = false;
        }

        events
    }
}

/// Setzt den Cursor über der Canvas: Greifhand über ziehbaren Blöcken,
/// geschlossene Hand während eines Drags. Sonst bleibt der Standard-Cursor.
pub fn update_canvas_cursor(ui: &egui::Ui, response: &egui::Response, state: &AppState) {
    let hover = response
        .hover_pos()
        .map(|pos| screen_to_canvas(pos, response.rect.min));
    let icon = canvas_cursor(state, hover);
    if icon != egui::CursorIcon::Default {
        ui.ctx().set_cursor_icon(icon);
    }
}

fn canvas_cursor(state: &AppState, hover: Option<glam::Vec2>) -> egui::CursorIcon {
    if state.drag.is_active() {
        return egui::CursorIcon::Grabbing;
    }

    let over_draggable = hover
        .and_then(|pos| state.canvas.block_at(pos))
        .and_then(|id| state.canvas.block(id))
        .is_some_and(|block| block.draggable);
    if over_draggable {
        egui::CursorIcon::Grab
    } else {
        egui::CursorIcon::Default
    }
}

/// Bildschirm-Position → Canvas-Koordinaten.
fn screen_to_canvas(pointer_pos: egui::Pos2, origin: egui::Pos2) -> glam::Vec2 {
    let local = pointer_pos - origin;
    glam::Vec2::new(local.x, local.y)
}
