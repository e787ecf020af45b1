//! Registry aller Snap-Regionen und aktiven Pairings einer Canvas.
//!
//! Regionen werden in Registrierungsreihenfolge gehalten; `query` liefert den
//! ersten Treffer (First-Fit), nicht den nächstgelegenen. Pairings sind eine
//! reine Relationsliste ohne Ownership. Das Block-Modell entscheidet, ob ein
//! Pairing zustande kommt, die Registry führt nur Buch.

use super::{Entity, SlotId};
use anyhow::{anyhow, bail};
use glam::Vec2;
use indexmap::IndexMap;

/// Handle auf eine registrierte Snap-Region.
///
/// Nach `remove_region` ist das Handle ungültig; jede weitere Verwendung
/// liefert einen Fehler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionHandle(u64);

/// Achsenparallele Andock-Fläche eines Slots
#[derive(Debug, Clone, PartialEq)]
pub struct SnapRegion {
    /// Obere linke Ecke in Weltkoordinaten
    pub position: Vec2,
    /// Breite und Höhe
    pub size: Vec2,
    /// Slot, zu dem die Region gehört (Rückverweis, kein Besitz)
    pub slot: SlotId,
    /// Deaktivierte Regionen werden von `query` übersprungen
    pub enabled: bool,
}

impl SnapRegion {
    /// Prüft, ob der Punkt strikt innerhalb der Region liegt (Ränder zählen nicht).
    pub fn contains_strict(&self, point: Vec2) -> bool {
        let max = self.position + self.size;
        point.x > self.position.x && point.x < max.x && point.y > self.position.y && point.y < max.y
    }
}

/// Treffer einer Snap-Abfrage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapHit {
    /// Getroffene Region
    pub region: RegionHandle,
    /// Slot der getroffenen Region
    pub slot: SlotId,
}

/// Ergebnis von [`SnapRegistry::query`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapQuery {
    /// Eingerastete Position (Regions-Ecke) oder der unveränderte Abfragepunkt
    pub position: Vec2,
    /// Getroffene Region, falls eingerastet
    pub hit: Option<SnapHit>,
}

impl SnapQuery {
    /// Gibt zurück, ob die Abfrage eine Region getroffen hat.
    pub fn is_snapped(&self) -> bool {
        self.hit.is_some()
    }
}

/// Globale Snap-Daten einer Canvas: Regionen und Pairings.
#[derive(Debug, Clone, Default)]
pub struct SnapRegistry {
    regions: IndexMap<RegionHandle, SnapRegion>,
    pairs: Vec<(Entity, Entity)>,
    next_region_id: u64,
}

impl SnapRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Regionen ────────────────────────────────────────────────────

    /// Registriert eine neue, aktivierte Region am Ende der Reihenfolge.
    pub fn create_region(&mut self, position: Vec2, size: Vec2, slot: SlotId) -> RegionHandle {
        let handle = RegionHandle(self.next_region_id);
        self.next_region_id += 1;
        self.regions.insert(
            handle,
            SnapRegion {
                position,
                size,
                slot,
                enabled: true,
            },
        );
        handle
    }

    fn region_mut(&mut self, handle: RegionHandle) -> anyhow::Result<&mut SnapRegion> {
        self.regions
            .get_mut(&handle)
            .ok_or_else(|| anyhow!("Snap-Region {:?} existiert nicht mehr", handle))
    }

    /// Aktiviert eine Region.
    pub fn enable_region(&mut self, handle: RegionHandle) -> anyhow::Result<()> {
        self.region_mut(handle)?.enabled = true;
        Ok(())
    }

    /// Deaktiviert eine Region (wird von `query` übersprungen).
    pub fn disable_region(&mut self, handle: RegionHandle) -> anyhow::Result<()> {
        self.region_mut(handle)?.enabled = false;
        Ok(())
    }

    /// Verschiebt die obere linke Ecke einer Region.
    pub fn move_region(&mut self, handle: RegionHandle, position: Vec2) -> anyhow::Result<()> {
        self.region_mut(handle)?.position = position;
        Ok(())
    }

    /// Entfernt eine Region; die Reihenfolge der übrigen bleibt erhalten.
    pub fn remove_region(&mut self, handle: RegionHandle) -> anyhow::Result<SnapRegion> {
        self.regions
            .shift_remove(&handle)
            .ok_or_else(|| anyhow!("Snap-Region {:?} wurde bereits entfernt", handle))
    }

    /// Liest eine Region (None nach dem Entfernen).
    pub fn region(&self, handle: RegionHandle) -> Option<&SnapRegion> {
        self.regions.get(&handle)
    }

    /// Iterator über alle Regionen in Registrierungsreihenfolge.
    pub fn regions(&self) -> impl Iterator<Item = (RegionHandle, &SnapRegion)> {
        self.regions.iter().map(|(handle, region)| (*handle, region))
    }

    /// Anzahl registrierter Regionen (aktiv und inaktiv).
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Sucht die erste aktive Region, die `point + tolerance` strikt enthält.
    pub fn query(&self, point: Vec2, tolerance: Vec2) -> SnapQuery {
        let probe = point + tolerance;

        self.regions
            .iter()
            .find(|(_, region)| region.enabled && region.contains_strict(probe))
            .map(|(handle, region)| SnapQuery {
                position: region.position,
                hit: Some(SnapHit {
                    region: *handle,
                    slot: region.slot,
                }),
            })
            .unwrap_or(SnapQuery {
                position: point,
                hit: None,
            })
    }

    // ── Pairings ────────────────────────────────────────────────────

    fn pairing_index(&self, entity: Entity) -> Option<usize> {
        self.pairs
            .iter()
            .position(|(a, b)| *a == entity || *b == entity)
    }

    /// Gibt die Gegenseite des aktiven Pairings zurück.
    pub fn pair_of(&self, entity: Entity) -> Option<Entity> {
        self.pairing_index(entity).map(|index| {
            let (a, b) = self.pairs[index];
            if a == entity {
                b
            } else {
                a
            }
        })
    }

    /// Gibt zurück, ob die Entity in einem Pairing steht.
    pub fn is_paired(&self, entity: Entity) -> bool {
        self.pairing_index(entity).is_some()
    }

    /// Trägt ein Pairing ein. Jede Entity darf nur in einem Pairing stehen.
    pub fn record_pair(&mut self, a: Entity, b: Entity) -> anyhow::Result<()> {
        if a == b {
            bail!("{a} kann nicht mit sich selbst gepaart werden");
        }
        if let Some(existing) = [a, b].into_iter().find(|e| self.is_paired(*e)) {
            bail!("{existing} steht bereits in einem Pairing");
        }
        self.pairs.push((a, b));
        Ok(())
    }

    /// Entfernt das Pairing der Entity und gibt es zurück.
    pub fn remove_pairing(&mut self, entity: Entity) -> Option<(Entity, Entity)> {
        self.pairing_index(entity)
            .map(|index| self.pairs.remove(index))
    }

    /// Alle aktiven Pairings in Eintragungsreihenfolge.
    pub fn pairs(&self) -> &[(Entity, Entity)] {
        &self.pairs
    }

    /// Anzahl aktiver Pairings.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}
