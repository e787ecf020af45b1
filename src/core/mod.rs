//! Core-Domänentypen: Blöcke, Slots, Snap-Registry und Ketten-Mutationen.

pub mod block;
pub mod canvas;
mod chain;
pub mod entity;
pub mod metrics;
pub mod slot;
pub mod snap_registry;

pub use block::{Block, BlockConfig};
pub use canvas::BlockCanvas;
pub use entity::{BlockId, Entity, SlotId};
pub use metrics::LayoutMetrics;
pub use slot::Slot;
pub use snap_registry::{RegionHandle, SnapHit, SnapQuery, SnapRegion, SnapRegistry};
