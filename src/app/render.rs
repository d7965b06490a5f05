use eframe::egui;

use crate::graph::Graph;
use crate::model::Pt;

use super::settings::AppSettings;

const CANVAS_BG: egui::Color32 = egui::Color32::from_gray(245);
const MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(20, 20, 20);
const PENDING_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 40, 40);
const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(20, 20, 20);

pub(super) fn draw_background(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 0.0, CANVAS_BG);
}

/// Lines first, then markers on top. A marker whose highlight flag is set
/// (the pending first point of a link gesture) is filled in the accent color.
pub(super) fn draw_graph(
    painter: &egui::Painter,
    origin: egui::Pos2,
    graph: &Graph,
    settings: &AppSettings,
) {
    let stroke = egui::Stroke::new(settings.stroke_width, LINE_COLOR);
    for (_, line) in graph.lines() {
        painter.line_segment(
            [to_screen(origin, line.a), to_screen(origin, line.b)],
            stroke,
        );
    }
    for (_, point) in graph.points() {
        let color = if point.highlighted {
            PENDING_COLOR
        } else {
            MARKER_COLOR
        };
        painter.circle_filled(to_screen(origin, point.pos), settings.point_radius, color);
    }
}

fn to_screen(origin: egui::Pos2, p: Pt) -> egui::Pos2 {
    origin + p.to_pos2().to_vec2()
}
