//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::ScratchpadOptions;
pub use options::{SNAP_TOLERANCE_X, SNAP_TOLERANCE_Y};
pub use render_scene::{BlockScene, BlockVisual, RegionVisual, SlotVisual};
