//! Top-Menü (Scratchpad, Ansicht, Hilfe).

use crate::app::{AppIntent, AppState};

/// Auswählbare Linienstärken im Ansicht-Menü
const STROKE_SIZES: [f32; 3] = [1.0, 2.0, 3.0];

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Scratchpad", |ui| {
                if ui.button("Zurücksetzen").clicked() {
                    events.push(AppIntent::ResetScratchpadRequested);
                    ui.close();
                }

                if ui.button("Optionen speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui
                    .selectable_label(state.options.show_snap_regions, "Snap-Regionen anzeigen")
                    .clicked()
                {
                    events.push(AppIntent::ToggleSnapRegionsRequested);
                    ui.close();
                }

                ui.separator();

                ui.menu_button("Linienstärke", |ui| {
                    let current = state.canvas.blocks().next().map(|(_, b)| b.stroke_width);

                    for size in STROKE_SIZES {
                        if ui
                            .selectable_label(current == Some(size), format!("{size:.0} px"))
                            .clicked()
                        {
                            events.push(AppIntent::StrokeSizeChanged { size });
                            ui.close();
                        }
                    }
                });
            });

            ui.menu_button("Hilfe", |ui| {
                if ui.button("Über").clicked() {
                    log::info!("Block Scratchpad v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
