//! Geometrie von Banner und Slot-Streifen in Block-lokalen Koordinaten.
//!
//! Füllungen werden als horizontale Spannen (`FillRow`) beschrieben, die
//! zeilenweise zu Vierecken trianguliert werden. Damit lassen sich auch die
//! nicht-konvexen Formen (Kerbe im Banner) ohne Polygon-Triangulierung füllen.
//! Umrisse sind offene Polylinien; ein Pfad mit Lücke besteht aus mehreren.

use crate::core::LayoutMetrics;
use glam::Vec2;

/// Oberes Ende von Kerbe und Lasche (relativ zur Oberkante)
pub const ARC_TOP: f32 = 4.0;
/// Unteres Ende von Kerbe und Lasche
pub const ARC_BOTTOM: f32 = 26.0;
/// Stützpunkte pro Halbkreis
const ARC_SEGMENTS: usize = 12;

/// Drag-Griff: linke obere Ecke des gepunkteten Feldes im Banner
pub const GRIP_POSITION: Vec2 = Vec2::new(20.0, 9.0);
/// Drag-Griff: Größe des gepunkteten Feldes
pub const GRIP_SIZE: Vec2 = Vec2::new(6.0, 12.0);

/// Horizontale Spanne einer Füllung auf Höhe `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRow {
    pub y: f32,
    pub left: f32,
    pub right: f32,
}

impl FillRow {
    fn new(y: f32, left: f32, right: f32) -> Self {
        Self { y, left, right }
    }
}

/// Halbkreis zwischen `ARC_TOP` und `ARC_BOTTOM`, der von `x` nach rechts ausbeult.
///
/// Punkte laufen von oben nach unten.
pub fn arc_points(x: f32) -> Vec<Vec2> {
    let radius = (ARC_BOTTOM - ARC_TOP) / 2.0;
    let center_y = ARC_TOP + radius;

    (0..=ARC_SEGMENTS)
        .map(|i| {
            let t = i as f32 / ARC_SEGMENTS as f32;
            let angle = -std::f32::consts::FRAC_PI_2 + t * std::f32::consts::PI;
            Vec2::new(x + radius * angle.cos(), center_y + radius * angle.sin())
        })
        .collect()
}

/// Füllung des Banners; ziehbare Blöcke bekommen links eine Kerbe.
pub fn banner_fill(metrics: &LayoutMetrics, draggable: bool) -> Vec<FillRow> {
    let width = metrics.banner_width;
    let mut rows = vec![FillRow::new(0.0, 0.0, width)];

    if draggable {
        rows.push(FillRow::new(ARC_TOP, 0.0, width));
        rows.extend(
            arc_points(0.0)
                .into_iter()
                .map(|p| FillRow::new(p.y, p.x, width)),
        );
        rows.push(FillRow::new(ARC_BOTTOM, 0.0, width));
    }

    rows.push(FillRow::new(metrics.banner_height, 0.0, width));
    rows
}

/// Umriss des Banners.
///
/// Mit Slots bleibt die Unterkante links neben dem Slot-Streifen offen.
pub fn banner_outline(metrics: &LayoutMetrics, draggable: bool, has_slots: bool) -> Vec<Vec<Vec2>> {
    let width = metrics.banner_width;
    let height = metrics.banner_height;

    let mut top = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(width, 0.0),
        Vec2::new(width, height),
    ];
    let mut left = Vec::new();

    if has_slots {
        top.push(Vec2::new(metrics.nested_width, height));
        left.push(Vec2::new(0.0, height));
    } else {
        top.push(Vec2::new(0.0, height));
    }

    if draggable {
        left.push(Vec2::new(0.0, ARC_BOTTOM));
        left.extend(arc_points(0.0).into_iter().rev());
    }
    left.push(Vec2::new(0.0, 0.0));

    if has_slots {
        vec![top, left]
    } else {
        top.extend(left);
        vec![top]
    }
}

/// Füllung eines Slot-Streifens mit Lasche.
pub fn slot_fill(metrics: &LayoutMetrics, height: f32) -> Vec<FillRow> {
    let width = metrics.nested_width;
    let bottom = height.max(ARC_BOTTOM);

    let mut rows = vec![FillRow::new(0.0, 0.0, width), FillRow::new(ARC_TOP, 0.0, width)];
    rows.extend(
        arc_points(width)
            .into_iter()
            .map(|p| FillRow::new(p.y, 0.0, p.x)),
    );
    rows.push(FillRow::new(ARC_BOTTOM, 0.0, width));
    rows.push(FillRow::new(bottom, 0.0, width));
    rows
}

/// Umriss eines Slot-Streifens; nur der Tail wird unten geschlossen.
pub fn slot_outline(metrics: &LayoutMetrics, height: f32, is_tail: bool) -> Vec<Vec<Vec2>> {
    let width = metrics.nested_width;
    let bottom = height.max(ARC_BOTTOM);

    let mut left = vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, bottom)];
    let mut right = vec![Vec2::new(width, bottom), Vec2::new(width, ARC_BOTTOM)];
    right.extend(arc_points(width).into_iter().rev());
    right.push(Vec2::new(width, 0.0));

    if is_tail {
        left.extend(right);
        vec![left]
    } else {
        vec![left, right]
    }
}

/// Mittelpunkte der Griff-Punkte (2 Spalten × 4 Reihen).
pub fn grip_dots() -> Vec<Vec2> {
    let columns = 2;
    let rows = 4;
    let step = Vec2::new(GRIP_SIZE.x / columns as f32, GRIP_SIZE.y / rows as f32);

    (0..rows)
        .flat_map(|row| {
            (0..columns).map(move |column| {
                GRIP_POSITION + step * Vec2::new(column as f32 + 0.5, row as f32 + 0.5)
            })
        })
        .collect()
}

/// Start der Beschriftung (links, vertikal mittig im Banner).
pub fn text_anchor(metrics: &LayoutMetrics, draggable: bool) -> Vec2 {
    let x = if draggable { 32.0 } else { 20.0 };
    Vec2::new(x, metrics.banner_height / 2.0)
}
