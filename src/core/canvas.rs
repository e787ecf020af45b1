//! Block-Canvas: Arena aller Blöcke und Slots samt Snap-Registry.
//!
//! Ownership ist strikt Block → Slot. Die Beziehung "Block steckt in Slot"
//! lebt ausschließlich als Pairing in der [`SnapRegistry`].

use super::{Block, BlockConfig, BlockId, Entity, LayoutMetrics, Slot, SlotId, SnapQuery};
use super::SnapRegistry;
use anyhow::{anyhow, bail};
use glam::Vec2;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Arena aller Blöcke und Slots einer Canvas.
#[derive(Debug, Clone)]
pub struct BlockCanvas {
    /// Layout-Maße für Stapelung und Regionen
    pub(crate) metrics: LayoutMetrics,
    /// Blöcke in Zeichenreihenfolge (letzter = oberster)
    pub(crate) blocks: IndexMap<BlockId, Block>,
    pub(crate) slots: HashMap<SlotId, Slot>,
    pub(crate) registry: SnapRegistry,
    next_block_id: u64,
    next_slot_id: u64,
}

impl Default for BlockCanvas {
    fn default() -> Self {
        Self::new(LayoutMetrics::default())
    }
}

impl BlockCanvas {
    /// Erstellt eine leere Canvas.
    pub fn new(metrics: LayoutMetrics) -> Self {
        Self {
            metrics,
            blocks: IndexMap::new(),
            slots: HashMap::new(),
            registry: SnapRegistry::new(),
            next_block_id: 1,
            next_slot_id: 1,
        }
    }

    /// Layout-Maße der Canvas.
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Legt einen Block an, inklusive initialem Tail-Slot bei `has_slots`.
    pub fn add_block(&mut self, config: &BlockConfig) -> anyhow::Result<BlockId> {
        let id = BlockId(self.next_block_id);
        self.next_block_id += 1;

        let block = Block::from_config(config);
        let position = block.position;
        self.blocks.insert(id, block);

        if config.has_slots {
            let tail = self.create_slot(id, self.metrics.tail_slot_height, true)?;
            self.block_mut(id)?.slots.push(tail);
            self.recalculate_slot_positions(id)?;
        }

        self.set_block_position(id, position)?;

        log::debug!("Block {id} angelegt: '{}'", config.text);
        Ok(id)
    }

    // ── Lookups ─────────────────────────────────────────────────────

    /// Liest einen Block.
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(&id)
    }

    /// Liest einen Slot.
    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(&id)
    }

    pub(crate) fn block_ref(&self, id: BlockId) -> anyhow::Result<&Block> {
        self.blocks
            .get(&id)
            .ok_or_else(|| anyhow!("Block {id} existiert nicht"))
    }

    pub(crate) fn block_mut(&mut self, id: BlockId) -> anyhow::Result<&mut Block> {
        self.blocks
            .get_mut(&id)
            .ok_or_else(|| anyhow!("Block {id} existiert nicht"))
    }

    pub(crate) fn slot_ref(&self, id: SlotId) -> anyhow::Result<&Slot> {
        self.slots
            .get(&id)
            .ok_or_else(|| anyhow!("Slot {id} existiert nicht"))
    }

    pub(crate) fn slot_mut(&mut self, id: SlotId) -> anyhow::Result<&mut Slot> {
        self.slots
            .get_mut(&id)
            .ok_or_else(|| anyhow!("Slot {id} existiert nicht"))
    }

    /// Iterator über alle Blöcke in Zeichenreihenfolge (unten → oben).
    pub fn blocks(&self) -> impl Iterator<Item = (BlockId, &Block)> {
        self.blocks.iter().map(|(id, block)| (*id, block))
    }

    /// Anzahl der Blöcke.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Anzahl der Slots über alle Blöcke.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Read-only Zugriff auf die Snap-Registry.
    pub fn registry(&self) -> &SnapRegistry {
        &self.registry
    }

    // ── Snap-Abfragen und Pairing ───────────────────────────────────

    /// Sucht die erste aktive Snap-Region nahe `point` (siehe [`SnapRegistry::query`]).
    pub fn query(&self, point: Vec2, tolerance: Vec2) -> SnapQuery {
        self.registry.query(point, tolerance)
    }

    /// Gegenseite des aktiven Pairings einer Entity.
    pub fn pair_of(&self, entity: impl Into<Entity>) -> Option<Entity> {
        self.registry.pair_of(entity.into())
    }

    /// Paart einen Block mit einem Slot (Reihenfolge egal).
    ///
    /// Steht eine Seite bereits in einem Pairing, passiert nichts und das
    /// Ergebnis ist trotzdem `true`. Ein Umhängen erfordert vorher `unpair`.
    /// `false` bedeutet, dass das Block-Modell das Andocken abgelehnt hat.
    pub fn pair(&mut self, a: Entity, b: Entity) -> anyhow::Result<bool> {
        if self.registry.is_paired(a) || self.registry.is_paired(b) {
            log::debug!("Pairing {a} ↔ {b} ignoriert: eine Seite ist bereits gepaart");
            return Ok(true);
        }

        let (slot, candidate) = match (a, b) {
            (Entity::Slot(slot), Entity::Block(block))
            | (Entity::Block(block), Entity::Slot(slot)) => (slot, block),
            _ => {
                log::warn!("Pairing {a} ↔ {b} abgelehnt: braucht genau einen Block und einen Slot");
                return Ok(false);
            }
        };

        let success = self.on_snap(slot, candidate)?;
        if success {
            self.registry.record_pair(a, b)?;
            self.update_slot_global_position(slot)?;
            log::debug!("Block {candidate} in Slot {slot} eingerastet");
        }

        Ok(success)
    }

    /// Löst das Pairing einer Entity.
    ///
    /// Gibt `true` zurück, wenn ein Pairing aufgelöst wurde, `false` wenn die
    /// Entity nicht gepaart war.
    pub fn unpair(&mut self, entity: Entity) -> anyhow::Result<bool> {
        let Some(partner) = self.registry.pair_of(entity) else {
            return Ok(false);
        };

        let slot = match (entity, partner) {
            (Entity::Slot(slot), _) | (Entity::Block(_), Entity::Slot(slot)) => slot,
            (Entity::Block(_), Entity::Block(_)) => {
                bail!("Pairing {entity} ↔ {partner} verbindet zwei Blöcke")
            }
        };

        let success = self.on_unsnap(slot)?;
        if success {
            self.registry.remove_pairing(entity);
            log::debug!("Pairing {entity} ↔ {partner} gelöst");
        }

        Ok(success)
    }

    // ── Slot-Lebenszyklus ───────────────────────────────────────────

    /// Erstellt einen Slot samt Snap-Region (noch nicht im Stapel eingehängt).
    pub(crate) fn create_slot(
        &mut self,
        parent: BlockId,
        height: f32,
        is_tail: bool,
    ) -> anyhow::Result<SlotId> {
        let (color, parent_dragging) = {
            let block = self.block_ref(parent)?;
            (block.color, block.is_dragging())
        };

        let id = SlotId(self.next_slot_id);
        self.next_slot_id += 1;

        let size = Vec2::new(
            self.metrics.snap_region_width,
            self.metrics.snap_region_height(),
        );
        let region = self.registry.create_region(Vec2::ZERO, size, id);
        if parent_dragging {
            self.registry.disable_region(region)?;
        }

        self.slots.insert(
            id,
            Slot {
                parent,
                height,
                is_tail,
                y: 0.0,
                color,
                region,
            },
        );

        Ok(id)
    }

    /// Entfernt einen Slot samt Snap-Region (ohne ihn aus dem Stapel zu lösen).
    pub(crate) fn destroy_slot(&mut self, id: SlotId) -> anyhow::Result<()> {
        let slot = self
            .slots
            .remove(&id)
            .ok_or_else(|| anyhow!("Slot {id} wurde bereits entfernt"))?;
        self.registry.remove_region(slot.region)?;
        Ok(())
    }

    // ── Zeichenreihenfolge und Hit-Test ─────────────────────────────

    /// Alle Blöcke der Kette unter `root` (inklusive `root`), Tiefensuche.
    pub fn chain_blocks(&self, root: BlockId) -> anyhow::Result<Vec<BlockId>> {
        let mut result = Vec::new();
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            result.push(id);
            let block = self.block_ref(id)?;
            for slot in block.slots.iter().rev() {
                if let Some(child) = self
                    .registry
                    .pair_of(Entity::Slot(*slot))
                    .and_then(Entity::as_block)
                {
                    stack.push(child);
                }
            }
        }

        Ok(result)
    }

    /// Hebt einen Block samt verschachtelter Kette an die oberste Zeichenposition.
    pub fn raise_block(&mut self, id: BlockId) -> anyhow::Result<()> {
        for block_id in self.chain_blocks(id)? {
            let index = self
                .blocks
                .get_index_of(&block_id)
                .ok_or_else(|| anyhow!("Block {block_id} existiert nicht"))?;
            let last = self.blocks.len() - 1;
            self.blocks.move_index(index, last);
        }
        Ok(())
    }

    /// Oberster Block, dessen Banner oder Slot-Streifen den Punkt enthält.
    pub fn block_at(&self, point: Vec2) -> Option<BlockId> {
        self.blocks
            .iter()
            .rev()
            .find(|(_, block)| self.hits_block(block, point))
            .map(|(id, _)| *id)
    }

    fn hits_block(&self, block: &Block, point: Vec2) -> bool {
        let local = point - block.position;
        let in_banner = local.x >= 0.0
            && local.x <= self.metrics.banner_width
            && local.y >= 0.0
            && local.y <= self.metrics.banner_height;
        if in_banner {
            return true;
        }

        local.x >= 0.0
            && local.x <= self.metrics.nested_width
            && block.slots.iter().filter_map(|id| self.slots.get(id)).any(|slot| {
                local.y >= slot.y && local.y <= slot.y + slot.height
            })
    }
}
