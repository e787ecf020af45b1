//! UI-Komponenten: Menü, Status-Bar und Canvas-Input.

/// UI-Layer mit egui
///
/// Dieses Modul implementiert die UI-Komponenten rund um die Canvas.
/// Die Canvas-Eingabe ist in `input.rs` ausgelagert.
pub mod input;
pub mod menu;
pub mod status;

pub use input::{update_canvas_cursor, InputState};
pub use menu::render_menu;
pub use status::render_status_bar;
