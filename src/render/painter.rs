//! Zeichnet eine `BlockScene` mit dem egui-Painter.

use super::shapes::{self, FillRow};
use crate::shared::{BlockScene, BlockVisual};
use glam::Vec2;

const OUTLINE_COLOR: egui::Color32 = egui::Color32::BLACK;
const TEXT_COLOR: egui::Color32 = egui::Color32::BLACK;
const TEXT_SIZE: f32 = 14.0;
const GRIP_DOT_RADIUS: f32 = 1.0;
/// Versatz des Schattens unter gezogenen Blöcken
const DRAG_SHADOW_OFFSET: Vec2 = Vec2::new(4.0, 4.0);

/// Zeichnet Hintergrund, Blöcke (unten → oben) und optional die Snap-Regionen.
///
/// `origin` ist die Bildschirmposition des Canvas-Ursprungs.
pub fn paint_scene(painter: &egui::Painter, origin: egui::Pos2, scene: &BlockScene) {
    painter.rect_filled(painter.clip_rect(), 0.0, to_color32(scene.background));

    for block in &scene.blocks {
        paint_block(painter, origin, scene, block);
    }

    let overlay = to_color32(scene.region_color);
    for region in &scene.regions {
        let rect = egui::Rect::from_min_size(
            to_screen(origin, region.position),
            egui::vec2(region.size.x, region.size.y),
        );
        if region.enabled {
            painter.rect_filled(rect, 0.0, overlay);
        } else {
            painter.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(1.0, overlay),
                egui::StrokeKind::Inside,
            );
        }
    }
}

fn paint_block(painter: &egui::Painter, origin: egui::Pos2, scene: &BlockScene, block: &BlockVisual) {
    let metrics = &scene.metrics;
    let fill = to_color32(block.color);
    let stroke = egui::Stroke::new(block.stroke_width, OUTLINE_COLOR);
    let block_origin = to_screen(origin, block.position);

    if block.dragging {
        let shadow = egui::Color32::from_black_alpha(40);
        let height = metrics.banner_height + block.slots.iter().map(|s| s.height).sum::<f32>();
        let rect = egui::Rect::from_min_size(
            to_screen(origin, block.position + DRAG_SHADOW_OFFSET),
            egui::vec2(metrics.banner_width, height),
        );
        painter.rect_filled(rect, 2.0, shadow);
    }

    for slot in &block.slots {
        let slot_origin = block_origin + egui::vec2(0.0, slot.y);
        paint_rows(painter, slot_origin, &shapes::slot_fill(metrics, slot.height), fill);
        for line in shapes::slot_outline(metrics, slot.height, slot.is_tail) {
            paint_polyline(painter, slot_origin, &line, stroke);
        }
    }

    paint_rows(
        painter,
        block_origin,
        &shapes::banner_fill(metrics, block.draggable),
        fill,
    );
    for line in shapes::banner_outline(metrics, block.draggable, !block.slots.is_empty()) {
        paint_polyline(painter, block_origin, &line, stroke);
    }

    if block.draggable {
        for dot in shapes::grip_dots() {
            painter.circle_filled(
                block_origin + egui::vec2(dot.x, dot.y),
                GRIP_DOT_RADIUS,
                OUTLINE_COLOR,
            );
        }
    }

    let anchor = shapes::text_anchor(metrics, block.draggable);
    painter.text(
        block_origin + egui::vec2(anchor.x, anchor.y),
        egui::Align2::LEFT_CENTER,
        &block.text,
        egui::FontId::proportional(TEXT_SIZE),
        TEXT_COLOR,
    );
}

/// Trianguliert aufeinanderfolgende Spannen zu Vierecken.
fn paint_rows(painter: &egui::Painter, origin: egui::Pos2, rows: &[FillRow], color: egui::Color32) {
    let mut mesh = egui::Mesh::default();

    for pair in rows.windows(2) {
        let (upper, lower) = (pair[0], pair[1]);
        let base = mesh.vertices.len() as u32;
        mesh.colored_vertex(origin + egui::vec2(upper.left, upper.y), color);
        mesh.colored_vertex(origin + egui::vec2(upper.right, upper.y), color);
        mesh.colored_vertex(origin + egui::vec2(lower.right, lower.y), color);
        mesh.colored_vertex(origin + egui::vec2(lower.left, lower.y), color);
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }

    painter.add(egui::Shape::mesh(mesh));
}

fn paint_polyline(painter: &egui::Painter, origin: egui::Pos2, points: &[Vec2], stroke: egui::Stroke) {
    let screen: Vec<egui::Pos2> = points
        .iter()
        .map(|p| origin + egui::vec2(p.x, p.y))
        .collect();
    painter.add(egui::Shape::line(screen, stroke));
}

fn to_screen(origin: egui::Pos2, position: Vec2) -> egui::Pos2 {
    origin + egui::vec2(position.x, position.y)
}

/// RGBA-Float-Farbe → egui-Farbe.
pub(crate) fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}
