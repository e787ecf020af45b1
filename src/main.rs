//! Block Scratchpad.
//!
//! Canvas mit Instruktions-Blöcken, die sich per Drag & Drop
//! ineinander verschachteln lassen. Läuft mit egui + glow.

use block_scratchpad::{render, ui, AppController, AppIntent, AppState, ScratchpadOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Block Scratchpad v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 720.0])
                .with_title("Block Scratchpad"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Block Scratchpad",
            options,
            Box::new(|_cc| Ok(Box::new(ScratchpadApp::new()?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ScratchpadApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl ScratchpadApp {
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ScratchpadOptions::config_path();
        let options = ScratchpadOptions::load_from_file(&config_path);

        let state = AppState::from_options(options)?;
        log::info!("Canvas mit {} Blöcken aufgebaut", state.block_count());

        Ok(Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        })
    }
}

impl eframe::App for ScratchpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events || self.state.drag.is_active() {
            ctx.request_repaint();
        }
    }
}

impl ScratchpadApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_canvas_events(ui, &response));
                ui::update_canvas_cursor(ui, &response, &self.state);

                let scene = self.controller.build_render_scene(&self.state);
                let painter = ui.painter_at(rect);
                render::paint_scene(&painter, rect.min, &scene);

                if !scene.has_blocks() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Keine Blöcke konfiguriert",
                        egui::FontId::proportional(20.0),
                        egui::Color32::GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
