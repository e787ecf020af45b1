//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Blöcke: {} | Slots: {} | Pairings: {}",
                state.block_count(),
                state.slot_count(),
                state.pairing_count()
            ));

            ui.separator();

            match state.drag.dragged.and_then(|id| state.canvas.block(id).map(|b| (id, b))) {
                Some((id, block)) => {
                    ui.label(format!("Gezogen: {} '{}'", id, block.text));
                }
                None => {
                    ui.label("Gezogen: -");
                }
            }

            if state.options.show_snap_regions {
                ui.separator();
                ui.label(format!("Regionen: {}", state.canvas.registry().region_count()));
            }

            // Statusnachricht (z.B. Reset, Optionen gespeichert)
            if let Some(ref msg) = state.status_message {
                ui.separator();
                ui.label(msg);
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
