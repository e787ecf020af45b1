//! Ketten-Mutationen: Andocken, Lösen, Layout-Kaskade und Drag-Markierung.
//!
//! Jede strukturelle Änderung endet mit `recalculate_slot_positions` auf dem
//! betroffenen Block. Steckt dieser selbst in einem Slot, wächst oder
//! schrumpft der Eltern-Slot mit und die Neuberechnung läuft nach oben weiter.

use super::{BlockCanvas, BlockId, Entity, SlotId};
use anyhow::{anyhow, bail};
use glam::Vec2;

impl BlockCanvas {
    /// Dockt `candidate` an `slot` an.
    ///
    /// Fügt hinter `slot` einen neuen Slot mit dessen bisheriger Höhe und
    /// Tail-Eigenschaft ein; `slot` übernimmt die Gesamthöhe des Kandidaten.
    /// Lehnt ab (`false`), wenn der Kandidat bereits in einem Slot desselben
    /// Blocks steckt oder der Block selbst Teil der Kette des Kandidaten ist.
    ///
    /// Das Pairing selbst trägt [`BlockCanvas::pair`] ein.
    pub(crate) fn on_snap(&mut self, slot: SlotId, candidate: BlockId) -> anyhow::Result<bool> {
        let (owner, height, is_tail, y) = {
            let s = self.slot_ref(slot)?;
            (s.parent, s.height, s.is_tail, s.y)
        };

        if let Some(Entity::Slot(current)) = self.registry.pair_of(Entity::Block(candidate)) {
            if self.block_ref(owner)?.slots.contains(&current) {
                log::warn!(
                    "Block {candidate} steckt bereits in Slot {current} von Block {owner}; kein zweites Andocken"
                );
                return Ok(false);
            }
        }

        if self.chain_contains(candidate, owner)? {
            log::warn!(
                "Block {candidate} kann nicht in Block {owner} andocken: {owner} ist Teil seiner eigenen Kette"
            );
            return Ok(false);
        }

        let index = self.slot_index(owner, slot)?;

        let new_slot = self.create_slot(owner, height, is_tail)?;
        self.set_slot_offset(new_slot, y + height)?;
        self.block_mut(owner)?.slots.insert(index + 1, new_slot);

        let candidate_height = self.block_height(candidate)?;
        self.update_slot_shape(slot, candidate_height, Some(false))?;

        self.recalculate_slot_positions(owner)?;

        Ok(true)
    }

    /// Macht das Andocken an `slot` rückgängig.
    ///
    /// Ist der Nachfolger der Tail (Normalfall), übernimmt `slot` dessen
    /// Höhe und Tail-Eigenschaft und der Nachfolger wird entfernt. Steckt im
    /// Nachfolger selbst ein Block, wird stattdessen `slot` entfernt, damit
    /// das Pairing des Nachfolgers gültig bleibt.
    ///
    /// Das Pairing selbst entfernt [`BlockCanvas::unpair`].
    pub(crate) fn on_unsnap(&mut self, slot: SlotId) -> anyhow::Result<bool> {
        let owner = self.slot_ref(slot)?.parent;
        let index = self.slot_index(owner, slot)?;

        let next = self
            .block_ref(owner)?
            .slots
            .get(index + 1)
            .copied()
            .ok_or_else(|| anyhow!("Slot {slot} hat keinen Nachfolger; Tail-Invariante verletzt"))?;

        if self.registry.is_paired(Entity::Slot(next)) {
            self.destroy_slot(slot)?;
            self.block_mut(owner)?.slots.remove(index);
        } else {
            let (height, is_tail) = {
                let n = self.slot_ref(next)?;
                (n.height, n.is_tail)
            };
            self.update_slot_shape(slot, height, Some(is_tail))?;
            self.destroy_slot(next)?;
            self.block_mut(owner)?.slots.remove(index + 1);
        }

        self.recalculate_slot_positions(owner)?;

        Ok(true)
    }

    /// Stapelt alle Slots ab der Banner-Höhe und gibt Höhenänderungen nach oben weiter.
    pub fn recalculate_slot_positions(&mut self, block: BlockId) -> anyhow::Result<()> {
        let mut top = self.metrics.banner_height;

        let slots = self.block_ref(block)?.slots.clone();
        for slot in slots {
            self.set_slot_offset(slot, top)?;
            top += self.slot_ref(slot)?.height;
        }

        let parent_slot = self
            .registry
            .pair_of(Entity::Block(block))
            .and_then(Entity::as_slot);
        if let Some(parent_slot) = parent_slot {
            self.update_slot_shape(parent_slot, top, None)?;
            let parent = self.slot_ref(parent_slot)?.parent;
            self.recalculate_slot_positions(parent)?;
        }

        Ok(())
    }

    /// Gesamthöhe eines Blocks: Banner plus alle Slot-Höhen.
    pub fn block_height(&self, block: BlockId) -> anyhow::Result<f32> {
        let mut height = self.metrics.banner_height;
        for slot in &self.block_ref(block)?.slots {
            height += self.slot_ref(*slot)?.height;
        }
        Ok(height)
    }

    /// Setzt die Weltposition eines Blocks und zieht Regionen und eingerastete Kinder mit.
    pub fn set_block_position(&mut self, block: BlockId, position: Vec2) -> anyhow::Result<()> {
        self.block_mut(block)?.position = position;

        let slots = self.block_ref(block)?.slots.clone();
        for slot in slots {
            self.update_slot_global_position(slot)?;
        }

        Ok(())
    }

    /// Aktualisiert die Weltposition der Region und des eingerasteten Blocks eines Slots.
    pub fn update_slot_global_position(&mut self, slot: SlotId) -> anyhow::Result<()> {
        let (parent, y, region) = {
            let s = self.slot_ref(slot)?;
            (s.parent, s.y, s.region)
        };
        let parent_position = self.block_ref(parent)?.position;
        let world = parent_position + Vec2::new(self.metrics.nested_width, y);

        self.registry.move_region(region, world)?;

        if let Some(Entity::Block(child)) = self.registry.pair_of(Entity::Slot(slot)) {
            self.set_block_position(child, world)?;
        }

        Ok(())
    }

    /// Markiert einen Block samt eingerasteter Kette als gezogen.
    ///
    /// Die Regionen aller eigenen Slots werden deaktiviert, damit nichts in
    /// einen gerade gezogenen Block einrastet.
    pub fn mark_dragging(&mut self, block: BlockId) -> anyhow::Result<()> {
        let b = self.block_mut(block)?;
        b.drag_start = Some(b.position);

        let slots = self.block_ref(block)?.slots.clone();
        for slot in slots {
            let region = self.slot_ref(slot)?.region;
            self.registry.disable_region(region)?;

            if let Some(Entity::Block(child)) = self.registry.pair_of(Entity::Slot(slot)) {
                self.mark_dragging(child)?;
            }
        }

        Ok(())
    }

    /// Hebt die Drag-Markierung eines Blocks samt eingerasteter Kette auf.
    pub fn clear_dragging(&mut self, block: BlockId) -> anyhow::Result<()> {
        self.block_mut(block)?.drag_start = None;

        let slots = self.block_ref(block)?.slots.clone();
        for slot in slots {
            let region = self.slot_ref(slot)?.region;
            self.registry.enable_region(region)?;

            if let Some(Entity::Block(child)) = self.registry.pair_of(Entity::Slot(slot)) {
                self.clear_dragging(child)?;
            }
        }

        Ok(())
    }

    /// Setzt die Linienstärke eines Blocks (gilt auch für seine Slots).
    pub fn set_stroke_size(&mut self, block: BlockId, size: f32) -> anyhow::Result<()> {
        if !(size.is_finite() && size >= 0.0) {
            bail!("Ungültige Linienstärke {size}");
        }
        self.block_mut(block)?.stroke_width = size;
        Ok(())
    }

    /// Prüft, ob `block` gleich `root` ist oder (beliebig tief) in `root` steckt.
    pub fn chain_contains(&self, root: BlockId, block: BlockId) -> anyhow::Result<bool> {
        let mut current = block;
        // Die Kette ist ein Baum, die Tiefe ist durch die Blockanzahl begrenzt.
        for _ in 0..=self.blocks.len() {
            if current == root {
                return Ok(true);
            }
            match self.registry.pair_of(Entity::Block(current)) {
                Some(Entity::Slot(slot)) => current = self.slot_ref(slot)?.parent,
                _ => return Ok(false),
            }
        }
        bail!("Zyklus in der Block-Kette ab {block} entdeckt")
    }

    fn slot_index(&self, owner: BlockId, slot: SlotId) -> anyhow::Result<usize> {
        self.block_ref(owner)?
            .slots
            .iter()
            .position(|s| *s == slot)
            .ok_or_else(|| anyhow!("Slot {slot} fehlt im Stapel von Block {owner}"))
    }

    fn set_slot_offset(&mut self, slot: SlotId, y: f32) -> anyhow::Result<()> {
        self.slot_mut(slot)?.y = y;
        self.update_slot_global_position(slot)
    }

    fn update_slot_shape(
        &mut self,
        slot: SlotId,
        height: f32,
        is_tail: Option<bool>,
    ) -> anyhow::Result<()> {
        let s = self.slot_mut(slot)?;
        s.height = height;
        if let Some(is_tail) = is_tail {
            s.is_tail = is_tail;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
