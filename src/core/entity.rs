//! IDs der Arena-Einträge und das geschlossene Entity-Enum für Pairings.

use std::fmt;

/// ID eines Blocks in der Canvas-Arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u64);

/// ID eines Slots in der Canvas-Arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}", self.0)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// Eine Seite eines Pairings: entweder ein Block oder ein Slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    /// Instruktions-Block
    Block(BlockId),
    /// Verschachtelungs-Slot innerhalb eines Blocks
    Slot(SlotId),
}

impl Entity {
    /// Gibt die Block-ID zurück, falls die Entity ein Block ist.
    pub fn as_block(self) -> Option<BlockId> {
        match self {
            Entity::Block(id) => Some(id),
            Entity::Slot(_) => None,
        }
    }

    /// Gibt die Slot-ID zurück, falls die Entity ein Slot ist.
    pub fn as_slot(self) -> Option<SlotId> {
        match self {
            Entity::Slot(id) => Some(id),
            Entity::Block(_) => None,
        }
    }
}

impl From<BlockId> for Entity {
    fn from(id: BlockId) -> Self {
        Entity::Block(id)
    }
}

impl From<SlotId> for Entity {
    fn from(id: SlotId) -> Self {
        Entity::Slot(id)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Block(id) => id.fmt(f),
            Entity::Slot(id) => id.fmt(f),
        }
    }
}
