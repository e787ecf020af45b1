//! Block-Rendering mit dem egui-Painter.
//!
//! `shapes` liefert die Geometrie in Block-lokalen Koordinaten,
//! `painter` überträgt sie auf den Bildschirm.

mod painter;
pub mod shapes;

pub use crate::shared::BlockScene;
pub use painter::paint_scene;
