use crate::core::{BlockCanvas, BlockConfig, BlockId, Entity, LayoutMetrics, SlotId};
use approx::assert_relative_eq;
use glam::Vec2;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

fn canvas() -> BlockCanvas {
    BlockCanvas::new(LayoutMetrics {
        tail_slot_height: 12.0,
        ..LayoutMetrics::default()
    })
}

fn add(canvas: &mut BlockCanvas, x: f32, y: f32, has_slots: bool) -> BlockId {
    canvas
        .add_block(&BlockConfig::new("test", WHITE, x, y, has_slots, true))
        .expect("Block anlegen")
}

fn slots(canvas: &BlockCanvas, block: BlockId) -> Vec<SlotId> {
    canvas.block(block).expect("Block vorhanden").slots().to_vec()
}

fn tail(canvas: &BlockCanvas, block: BlockId) -> SlotId {
    canvas
        .block(block)
        .and_then(|b| b.tail_slot())
        .expect("Tail-Slot vorhanden")
}

fn snap(canvas: &mut BlockCanvas, slot: SlotId, block: BlockId) -> bool {
    canvas
        .pair(Entity::Slot(slot), Entity::Block(block))
        .expect("pair darf nicht fehlschlagen")
}

fn snap_into_tail(canvas: &mut BlockCanvas, owner: BlockId, block: BlockId) -> bool {
    let slot = tail(canvas, owner);
    snap(canvas, slot, block)
}

fn assert_tail_invariant(canvas: &BlockCanvas, block: BlockId) {
    let ids = slots(canvas, block);
    let (last, rest) = ids.split_last().expect("mindestens ein Slot");
    let last_slot = canvas.slot(*last).expect("Slot vorhanden");
    assert!(last_slot.is_tail, "letzter Slot muss Tail sein");
    assert!(canvas.pair_of(*last).is_none(), "Tail darf nicht belegt sein");
    for id in rest {
        let slot = canvas.slot(*id).expect("Slot vorhanden");
        assert!(!slot.is_tail, "nur der letzte Slot ist Tail");
        assert!(canvas.pair_of(*id).is_some(), "Slots vor dem Tail sind belegt");
    }
}

fn assert_height_additive(canvas: &BlockCanvas, block: BlockId) {
    let expected: f32 = canvas.metrics().banner_height
        + slots(canvas, block)
            .iter()
            .map(|id| canvas.slot(*id).expect("Slot vorhanden").height)
            .sum::<f32>();
    assert_relative_eq!(canvas.block_height(block).expect("Höhe"), expected);
}

#[test]
fn test_neuer_block_mit_slots_hat_einen_tail() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 100.0, 100.0, true);

    let ids = slots(&canvas, a);
    assert_eq!(ids.len(), 1);
    let slot = canvas.slot(ids[0]).expect("Slot vorhanden");
    assert!(slot.is_tail);
    assert_relative_eq!(slot.height, 12.0);
    assert_relative_eq!(slot.y, 30.0);

    let region = canvas
        .registry()
        .region(slot.region())
        .expect("Region vorhanden");
    assert_eq!(region.position, Vec2::new(112.0, 130.0));
    assert_relative_eq!(canvas.block_height(a).expect("Höhe"), 42.0);
}

#[test]
fn test_block_ohne_slots_hat_banner_hoehe() {
    let mut canvas = canvas();
    let b = add(&mut canvas, 0.0, 0.0, false);
    assert!(slots(&canvas, b).is_empty());
    assert_relative_eq!(canvas.block_height(b).expect("Höhe"), 30.0);
    assert_eq!(canvas.registry().region_count(), 0);
}

#[test]
fn test_andocken_an_tail_fuegt_neuen_tail_ein() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 100.0, 100.0, true);
    let b = add(&mut canvas, 500.0, 500.0, false);
    let old_tail = tail(&canvas, a);

    assert!(snap(&mut canvas, old_tail, b));

    let ids = slots(&canvas, a);
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0], old_tail);

    let former = canvas.slot(old_tail).expect("Slot vorhanden");
    assert_relative_eq!(former.height, 30.0);
    assert!(!former.is_tail);

    let new_tail = canvas.slot(ids[1]).expect("Slot vorhanden");
    assert_relative_eq!(new_tail.height, 12.0);
    assert!(new_tail.is_tail);
    assert_relative_eq!(new_tail.y, 60.0);

    assert_eq!(canvas.pair_of(old_tail), Some(Entity::Block(b)));
    assert_eq!(canvas.pair_of(b), Some(Entity::Slot(old_tail)));

    // Eingerasteter Block klebt am Slot
    let b_pos = canvas.block(b).expect("Block vorhanden").position;
    assert_eq!(b_pos, Vec2::new(112.0, 130.0));

    assert_tail_invariant(&canvas, a);
    assert_height_additive(&canvas, a);
}

#[test]
fn test_loesen_stellt_urspruenglichen_zustand_wieder_her() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 100.0, 100.0, true);
    let b = add(&mut canvas, 500.0, 500.0, false);
    let old_tail = tail(&canvas, a);
    let regions_before = canvas.registry().region_count();

    assert!(snap(&mut canvas, old_tail, b));
    let removed_tail = slots(&canvas, a)[1];
    let removed_region = canvas.slot(removed_tail).expect("Slot vorhanden").region();

    assert!(canvas.unpair(Entity::Block(b)).expect("unpair"));

    let ids = slots(&canvas, a);
    assert_eq!(ids, vec![old_tail]);
    let slot = canvas.slot(old_tail).expect("Slot vorhanden");
    assert_relative_eq!(slot.height, 12.0);
    assert!(slot.is_tail);

    assert_eq!(canvas.pair_of(b), None);
    assert_eq!(canvas.pair_of(old_tail), None);
    assert_eq!(canvas.registry().pair_count(), 0);

    assert!(canvas.slot(removed_tail).is_none());
    assert!(canvas.registry().region(removed_region).is_none());
    assert_eq!(canvas.registry().region_count(), regions_before);
}

#[test]
fn test_loesen_ueber_den_slot_funktioniert_ebenfalls() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 0.0, 0.0, true);
    let b = add(&mut canvas, 500.0, 0.0, false);
    let slot = tail(&canvas, a);

    assert!(snap(&mut canvas, slot, b));
    assert!(canvas.unpair(Entity::Slot(slot)).expect("unpair"));

    assert_eq!(slots(&canvas, a).len(), 1);
    assert_eq!(canvas.pair_of(b), None);
}

#[test]
fn test_unpair_ohne_pairing_ist_kein_fehler() {
    let mut canvas = canvas();
    let b = add(&mut canvas, 0.0, 0.0, false);
    assert!(!canvas.unpair(Entity::Block(b)).expect("unpair"));
}

#[test]
fn test_pair_mit_bereits_gepaarter_seite_ist_noop() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 0.0, 0.0, true);
    let c = add(&mut canvas, 0.0, 300.0, true);
    let b = add(&mut canvas, 500.0, 0.0, false);
    assert!(snap_into_tail(&mut canvas, a, b));

    let c_slots_before = slots(&canvas, c);
    let a_slots_before = slots(&canvas, a);

    assert!(snap_into_tail(&mut canvas, c, b));

    assert_eq!(canvas.registry().pair_count(), 1);
    assert_eq!(slots(&canvas, c), c_slots_before);
    assert_eq!(slots(&canvas, a), a_slots_before);
    assert_eq!(canvas.pair_of(b), Some(Entity::Slot(a_slots_before[0])));
}

#[test]
fn test_pair_von_zwei_bloecken_wird_abgelehnt() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 0.0, 0.0, true);
    let b = add(&mut canvas, 500.0, 0.0, false);

    assert!(!canvas
        .pair(Entity::Block(a), Entity::Block(b))
        .expect("pair"));
    assert_eq!(canvas.registry().pair_count(), 0);
}

#[test]
fn test_andocken_in_eigenen_slot_wird_abgelehnt() {
    let mut canvas = canvas();
    let b = add(&mut canvas, 0.0, 0.0, true);
    let own_tail = tail(&canvas, b);
    let slot_count = canvas.slot_count();

    assert!(!snap(&mut canvas, own_tail, b));

    assert_eq!(canvas.slot_count(), slot_count);
    assert_eq!(canvas.registry().pair_count(), 0);
    assert!(canvas.slot(own_tail).expect("Slot vorhanden").is_tail);
}

#[test]
fn test_andocken_in_verschachteltes_kind_wird_abgelehnt() {
    let mut canvas = canvas();
    let outer = add(&mut canvas, 0.0, 0.0, true);
    let inner = add(&mut canvas, 500.0, 0.0, true);
    assert!(snap_into_tail(&mut canvas, outer, inner));

    let inner_tail = tail(&canvas, inner);
    let slot_count = canvas.slot_count();
    let outer_height = canvas.block_height(outer).expect("Höhe");

    // outer würde in einen Slot seiner eigenen Kette wandern
    assert!(!snap(&mut canvas, inner_tail, outer));

    assert_eq!(canvas.slot_count(), slot_count);
    assert_eq!(canvas.registry().pair_count(), 1);
    assert_relative_eq!(canvas.block_height(outer).expect("Höhe"), outer_height);
}

#[test]
fn test_zweites_andocken_im_selben_block_wird_abgelehnt() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 0.0, 0.0, true);
    let b = add(&mut canvas, 500.0, 0.0, false);
    assert!(snap_into_tail(&mut canvas, a, b));

    let own_slot = slots(&canvas, a)[0];
    let new_tail = tail(&canvas, a);
    let slot_count = canvas.slot_count();
    let height = canvas.block_height(a).expect("Höhe");
    // Keine Kettenbeziehung: abgelehnt wird über den Besitzer-Check
    assert!(!canvas.chain_contains(b, a).expect("Kette"));

    assert!(!canvas.on_snap(new_tail, b).expect("on_snap"));

    assert_eq!(canvas.slot_count(), slot_count);
    assert_eq!(slots(&canvas, a), vec![own_slot, new_tail]);
    assert!(canvas.slot(new_tail).expect("Slot vorhanden").is_tail);
    assert_relative_eq!(canvas.block_height(a).expect("Höhe"), height);
    assert_eq!(canvas.pair_of(b), Some(Entity::Slot(own_slot)));
}

#[test]
fn test_hoehe_kaskadiert_durch_alle_ebenen() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 0.0, 0.0, true);
    let b = add(&mut canvas, 500.0, 0.0, true);
    let c = add(&mut canvas, 900.0, 0.0, false);

    assert!(snap_into_tail(&mut canvas, a, b));
    // B: 30 + 12 = 42, A: 30 + 42 + 12 = 84
    assert_relative_eq!(canvas.block_height(a).expect("Höhe"), 84.0);

    assert!(snap_into_tail(&mut canvas, b, c));
    // B: 30 + 30 + 12 = 72, A: 30 + 72 + 12 = 114
    assert_relative_eq!(canvas.block_height(b).expect("Höhe"), 72.0);
    assert_relative_eq!(canvas.block_height(a).expect("Höhe"), 114.0);
    let a_first = slots(&canvas, a)[0];
    assert_relative_eq!(canvas.slot(a_first).expect("Slot").height, 72.0);

    // A-Tail wandert mit nach unten
    let a_tail = canvas.slot(tail(&canvas, a)).expect("Slot");
    assert_relative_eq!(a_tail.y, 102.0);

    for block in [a, b, c] {
        assert_height_additive(&canvas, block);
    }
    assert_tail_invariant(&canvas, a);
    assert_tail_invariant(&canvas, b);

    assert!(canvas.unpair(Entity::Block(c)).expect("unpair"));
    assert_relative_eq!(canvas.block_height(b).expect("Höhe"), 42.0);
    assert_relative_eq!(canvas.block_height(a).expect("Höhe"), 84.0);
    assert_tail_invariant(&canvas, a);
    assert_tail_invariant(&canvas, b);
}

#[test]
fn test_verschachtelte_bloecke_folgen_dem_eltern_block() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 0.0, 0.0, true);
    let b = add(&mut canvas, 500.0, 0.0, true);
    let c = add(&mut canvas, 900.0, 0.0, false);
    assert!(snap_into_tail(&mut canvas, a, b));
    assert!(snap_into_tail(&mut canvas, b, c));

    canvas
        .set_block_position(a, Vec2::new(200.0, 100.0))
        .expect("Position setzen");

    assert_eq!(canvas.block(b).expect("B").position, Vec2::new(212.0, 130.0));
    assert_eq!(canvas.block(c).expect("C").position, Vec2::new(224.0, 160.0));

    let c_region_owner = tail(&canvas, b);
    let region = canvas.slot(c_region_owner).expect("Slot").region();
    assert_eq!(
        canvas.registry().region(region).expect("Region").position,
        Vec2::new(224.0, 190.0)
    );
}

#[test]
fn test_loesen_mit_belegtem_nachfolger_behaelt_dessen_pairing() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 0.0, 0.0, true);
    let b = add(&mut canvas, 500.0, 0.0, false);
    let c = add(&mut canvas, 900.0, 0.0, false);

    let first = tail(&canvas, a);
    assert!(snap(&mut canvas, first, b));
    let second = tail(&canvas, a);
    assert!(snap(&mut canvas, second, c));
    assert_eq!(slots(&canvas, a).len(), 3);

    assert!(canvas.unpair(Entity::Block(b)).expect("unpair"));

    let ids = slots(&canvas, a);
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0], second);
    assert_eq!(canvas.pair_of(c), Some(Entity::Slot(second)));
    assert!(canvas.slot(first).is_none());
    assert_relative_eq!(canvas.slot(second).expect("Slot").y, 30.0);
    assert_eq!(canvas.block(c).expect("C").position, Vec2::new(12.0, 30.0));
    assert_eq!(canvas.registry().region_count(), canvas.slot_count());
    assert_tail_invariant(&canvas, a);
    assert_height_additive(&canvas, a);
}

#[test]
fn test_jeder_slot_hat_genau_eine_region() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 0.0, 0.0, true);
    let b = add(&mut canvas, 500.0, 0.0, true);
    let c = add(&mut canvas, 900.0, 0.0, false);

    let check = |canvas: &BlockCanvas| {
        assert_eq!(canvas.registry().region_count(), canvas.slot_count());
        for (_, region) in canvas.registry().regions() {
            let slot = canvas.slot(region.slot).expect("Region ohne Slot");
            assert!(canvas.registry().region(slot.region()).is_some());
        }
    };

    check(&canvas);
    assert!(snap_into_tail(&mut canvas, a, b));
    check(&canvas);
    assert!(snap_into_tail(&mut canvas, b, c));
    check(&canvas);
    assert!(canvas.unpair(Entity::Block(b)).expect("unpair"));
    check(&canvas);
    assert!(canvas.unpair(Entity::Block(c)).expect("unpair"));
    check(&canvas);
}

#[test]
fn test_drag_markierung_deaktiviert_regionen_der_kette() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 0.0, 0.0, true);
    let b = add(&mut canvas, 500.0, 0.0, true);
    assert!(snap_into_tail(&mut canvas, a, b));

    canvas.mark_dragging(a).expect("mark_dragging");
    assert!(canvas.block(a).expect("A").is_dragging());
    assert!(canvas.block(b).expect("B").is_dragging());
    assert!(canvas.registry().regions().all(|(_, r)| !r.enabled));

    let b_tail = canvas.slot(tail(&canvas, b)).expect("Slot").region();
    let corner = canvas.registry().region(b_tail).expect("Region").position;
    assert!(!canvas.query(corner, Vec2::new(1.0, 1.0)).is_snapped());

    canvas.clear_dragging(a).expect("clear_dragging");
    assert!(!canvas.block(b).expect("B").is_dragging());
    assert!(canvas.registry().regions().all(|(_, r)| r.enabled));
    assert!(canvas.query(corner, Vec2::new(1.0, 1.0)).is_snapped());
}

#[test]
fn test_drag_start_merkt_position() {
    let mut canvas = canvas();
    let b = add(&mut canvas, 40.0, 50.0, false);
    canvas.mark_dragging(b).expect("mark_dragging");
    assert_eq!(
        canvas.block(b).expect("B").drag_start(),
        Some(Vec2::new(40.0, 50.0))
    );
    canvas.clear_dragging(b).expect("clear_dragging");
    assert_eq!(canvas.block(b).expect("B").drag_start(), None);
}

#[test]
fn test_raise_block_hebt_ganze_kette_nach_oben() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 0.0, 0.0, true);
    let b = add(&mut canvas, 500.0, 0.0, false);
    let other = add(&mut canvas, 0.0, 400.0, false);
    assert!(snap_into_tail(&mut canvas, a, b));

    canvas.raise_block(a).expect("raise");

    let order: Vec<BlockId> = canvas.blocks().map(|(id, _)| id).collect();
    assert_eq!(order, vec![other, a, b]);
}

#[test]
fn test_block_at_trifft_banner_und_slot_streifen() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 100.0, 100.0, true);
    let b = add(&mut canvas, 120.0, 110.0, false);

    // B liegt oben und überdeckt A
    assert_eq!(canvas.block_at(Vec2::new(150.0, 120.0)), Some(b));
    // Slot-Streifen von A (x 100..112, y 130..142)
    assert_eq!(canvas.block_at(Vec2::new(105.0, 141.0)), Some(a));
    assert_eq!(canvas.block_at(Vec2::new(50.0, 50.0)), None);
}

#[test]
fn test_linienstaerke_wird_validiert() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 0.0, 0.0, true);
    canvas.set_stroke_size(a, 3.0).expect("gültige Stärke");
    assert_relative_eq!(canvas.block(a).expect("A").stroke_width, 3.0);
    assert!(canvas.set_stroke_size(a, f32::NAN).is_err());
}

#[test]
fn test_neuer_slot_in_gezogenem_block_startet_deaktiviert() {
    let mut canvas = canvas();
    let a = add(&mut canvas, 0.0, 0.0, true);
    canvas.mark_dragging(a).expect("mark_dragging");

    let slot = canvas.create_slot(a, 12.0, false).expect("Slot anlegen");
    let region = canvas.slot(slot).expect("Slot").region();
    assert!(!canvas.registry().region(region).expect("Region").enabled);

    canvas.destroy_slot(slot).expect("Slot entfernen");
    assert!(canvas.destroy_slot(slot).is_err());
}
