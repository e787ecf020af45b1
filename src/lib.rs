//! Block Scratchpad Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, DragState};
pub use core::{
    Block, BlockCanvas, BlockConfig, BlockId, Entity, LayoutMetrics, Slot, SlotId, SnapQuery,
    SnapRegistry,
};
pub use shared::{BlockScene, ScratchpadOptions};
