// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas overlaid on the video frame.
//!
//! Replays the session's stroke list (and the selected saved
//! annotation) over the poster frame every repaint, and captures
//! pointer drags into normalized frame coordinates. Shape building is
//! pure: the same strokes and frame rect always produce the same
//! shapes, whatever the window size, because strokes are stored
//! normalized and mapped to the displayed rect here.

use crate::models::annotation::Annotation;
use crate::models::stroke::{Point, Stroke, StrokeKind, Tool};
use crate::util::geometry;

/// Arrowhead length in screen pixels, independent of shaft length.
pub const ARROW_HEAD_LENGTH: f32 = 15.0;

/// Result of canvas interaction, in normalized frame coordinates.
pub enum CanvasAction {
    None,
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    /// Press released without movement. Still commits a stroke: a
    /// zero-size shape is a valid annotation.
    Click(Point),
}

/// Display the canvas area and handle pointer interactions.
pub fn show(
    ui: &mut egui::Ui,
    frame_texture: &Option<egui::TextureHandle>,
    frame_size: Option<(u32, u32)>,
    session_strokes: &[Stroke],
    selected: Option<&Annotation>,
    current_tool: Tool,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let (Some(texture), Some((img_width, img_height))) = (frame_texture, frame_size) else {
            show_welcome(ui);
            return;
        };

        // Fit the frame into the available space, preserving aspect.
        let available = ui.available_size();
        let img_aspect = img_width as f32 / img_height as f32;
        let available_aspect = available.x / available.y;

        let (display_width, display_height) = if img_aspect > available_aspect {
            let width = available.x;
            (width, width / img_aspect)
        } else {
            let height = available.y;
            (height * img_aspect, height)
        };

        let x_offset = (available.x - display_width) / 2.0;
        let y_offset = (available.y - display_height) / 2.0;

        let frame_rect = egui::Rect::from_min_size(
            ui.min_rect().min + egui::vec2(x_offset, y_offset),
            egui::vec2(display_width, display_height),
        );

        ui.painter().image(
            texture.id(),
            frame_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        // Pointer capture only while a drawing tool is active.
        if current_tool.stroke_kind().is_some() {
            let response = ui.allocate_rect(frame_rect, egui::Sense::click_and_drag());
            let normalized = |pos: egui::Pos2| {
                geometry::normalize_coordinates(
                    (pos.x - frame_rect.min.x) as f64,
                    (pos.y - frame_rect.min.y) as f64,
                    display_width as f64,
                    display_height as f64,
                )
            };

            let pos = response.interact_pointer_pos().map(normalized);
            action = classify_pointer(
                response.drag_started(),
                response.dragged(),
                response.drag_stopped(),
                response.clicked(),
                pos,
            );
        }

        // Saved annotation under the in-progress session strokes.
        let painter = ui.painter();
        if let Some(annotation) = selected {
            for stroke in &annotation.drawing_data.strokes {
                painter.extend(stroke_shapes(stroke, &frame_rect));
            }
        }
        for stroke in session_strokes {
            painter.extend(stroke_shapes(stroke, &frame_rect));
        }
    });

    ui.separator();
    ui.horizontal(|ui| {
        let tool_text = match current_tool {
            Tool::Select => "Click a timeline marker or list entry to review an annotation",
            Tool::Freehand => "Drag to draw a freehand path",
            Tool::Rectangle => "Drag to frame a region",
            Tool::Circle => "Drag outward from the center",
            Tool::Arrow => "Drag from tail to tip",
            Tool::Eraser => "Eraser has no drawing behavior",
        };
        ui.label(egui::RichText::new(tool_text).italics().weak());
    });

    action
}

/// Map the pointer flags of one frame to a canvas action. A press
/// released without any movement reports as a click rather than a
/// drag, so it gets its own action.
fn classify_pointer(
    drag_started: bool,
    dragged: bool,
    drag_stopped: bool,
    clicked: bool,
    pos: Option<Point>,
) -> CanvasAction {
    if drag_started {
        match pos {
            Some(p) => CanvasAction::PointerDown(p),
            None => CanvasAction::None,
        }
    } else if dragged {
        match pos {
            Some(p) => CanvasAction::PointerMove(p),
            None => CanvasAction::None,
        }
    } else if drag_stopped {
        CanvasAction::PointerUp
    } else if clicked {
        match pos {
            Some(p) => CanvasAction::Click(p),
            None => CanvasAction::None,
        }
    } else {
        CanvasAction::None
    }
}

fn show_welcome(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("Swingmark")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.label(
                egui::RichText::new("Coaching video review and annotation")
                    .size(14.0)
                    .color(egui::Color32::from_gray(150)),
            );
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Load a video from the backend or open a frame image to begin")
                    .color(egui::Color32::from_gray(180)),
            );
        });
    });
}

/// Build the shapes for one stroke mapped into the displayed frame
/// rect. Deterministic and side-effect-free.
pub fn stroke_shapes(stroke: &Stroke, frame_rect: &egui::Rect) -> Vec<egui::Shape> {
    let color = hex_color(&stroke.color);
    let paint = egui::Stroke::new(stroke.width, color);

    match stroke.kind {
        StrokeKind::Freehand => {
            let screen: Vec<egui::Pos2> = stroke
                .points
                .iter()
                .map(|p| to_screen(*p, frame_rect))
                .collect();
            let mut shapes = Vec::with_capacity(screen.len() * 2);
            for pair in screen.windows(2) {
                shapes.push(egui::Shape::line_segment([pair[0], pair[1]], paint));
            }
            // Round caps and joins.
            for pos in &screen {
                shapes.push(egui::Shape::circle_filled(*pos, stroke.width / 2.0, color));
            }
            shapes
        }
        StrokeKind::Rectangle => {
            let (Some(start), Some(end)) = (stroke.start, stroke.end) else {
                return Vec::new();
            };
            // from_two_pos handles dragging up-left (negative spans).
            let rect = egui::Rect::from_two_pos(
                to_screen(start, frame_rect),
                to_screen(end, frame_rect),
            );
            vec![egui::Shape::rect_stroke(rect, egui::Rounding::ZERO, paint)]
        }
        StrokeKind::Circle => {
            let (Some(start), Some(end)) = (stroke.start, stroke.end) else {
                return Vec::new();
            };
            let center = to_screen(start, frame_rect);
            let radius = center.distance(to_screen(end, frame_rect));
            vec![egui::Shape::circle_stroke(center, radius, paint)]
        }
        StrokeKind::Arrow => {
            let (Some(start), Some(end)) = (stroke.start, stroke.end) else {
                return Vec::new();
            };
            let tail = to_screen(start, frame_rect);
            let tip = to_screen(end, frame_rect);
            let [left, right] = arrow_head(tail, tip, ARROW_HEAD_LENGTH);
            vec![
                egui::Shape::line_segment([tail, tip], paint),
                egui::Shape::line_segment([tip, left], paint),
                egui::Shape::line_segment([tip, right], paint),
            ]
        }
    }
}

/// The two arrowhead wing endpoints, each angled 30 degrees off the
/// shaft direction with a fixed length.
pub fn arrow_head(tail: egui::Pos2, tip: egui::Pos2, length: f32) -> [egui::Pos2; 2] {
    let angle = (tip.y - tail.y).atan2(tip.x - tail.x);
    let wing = |offset: f32| {
        egui::pos2(
            tip.x - length * (angle + offset).cos(),
            tip.y - length * (angle + offset).sin(),
        )
    };
    let spread = std::f32::consts::FRAC_PI_6;
    [wing(-spread), wing(spread)]
}

fn to_screen(point: Point, frame_rect: &egui::Rect) -> egui::Pos2 {
    let (x, y) = geometry::denormalize_coordinates(
        &point,
        frame_rect.width() as f64,
        frame_rect.height() as f64,
    );
    egui::pos2(frame_rect.min.x + x as f32, frame_rect.min.y + y as f32)
}

/// Parse a `#RRGGBB` hex color; unrecognized strings fall back to white.
pub fn hex_color(hex: &str) -> egui::Color32 {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return egui::Color32::WHITE;
    }
    match u32::from_str_radix(digits, 16) {
        Ok(rgb) => egui::Color32::from_rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        ),
        Err(_) => egui::Color32::WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 100.0))
    }

    #[test]
    fn hex_colors_parse_with_white_fallback() {
        assert_eq!(hex_color("#FF0000"), egui::Color32::from_rgb(255, 0, 0));
        assert_eq!(hex_color("#00FF00"), egui::Color32::from_rgb(0, 255, 0));
        assert_eq!(hex_color("FFA500"), egui::Color32::from_rgb(255, 165, 0));
        assert_eq!(hex_color("not-a-color"), egui::Color32::WHITE);
        assert_eq!(hex_color("#FFF"), egui::Color32::WHITE);
    }

    #[test]
    fn shape_building_is_deterministic() {
        let mut stroke = Stroke::freehand(Point::new(0.1, 0.1), "#FF0000", 3.0);
        stroke.extend_to(Point::new(0.3, 0.4));
        let first = stroke_shapes(&stroke, &frame());
        let second = stroke_shapes(&stroke, &frame());
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn rectangle_supports_negative_drags() {
        // Dragged up-left: start is the bottom-right corner.
        let mut stroke =
            Stroke::shape(StrokeKind::Rectangle, Point::new(0.5, 0.5), "#FF0000", 3.0);
        stroke.extend_to(Point::new(0.1, 0.2));
        let shapes = stroke_shapes(&stroke, &frame());
        assert_eq!(shapes.len(), 1);
        match &shapes[0] {
            egui::Shape::Rect(rect) => {
                assert_eq!(rect.rect.min, egui::pos2(20.0, 20.0));
                assert_eq!(rect.rect.max, egui::pos2(100.0, 50.0));
            }
            other => panic!("expected rect shape, got {other:?}"),
        }
    }

    #[test]
    fn circle_radius_is_screen_distance_from_center() {
        let mut stroke = Stroke::shape(StrokeKind::Circle, Point::new(0.25, 0.5), "#FF0000", 3.0);
        stroke.extend_to(Point::new(0.5, 0.5));
        let shapes = stroke_shapes(&stroke, &frame());
        match &shapes[0] {
            egui::Shape::Circle(circle) => {
                assert_eq!(circle.center, egui::pos2(50.0, 50.0));
                assert_eq!(circle.radius, 50.0);
            }
            other => panic!("expected circle shape, got {other:?}"),
        }
    }

    #[test]
    fn arrow_head_wings_have_fixed_length_and_spread() {
        let tail = egui::pos2(0.0, 0.0);
        let tip = egui::pos2(100.0, 0.0);
        let [left, right] = arrow_head(tail, tip, ARROW_HEAD_LENGTH);

        for wing in [left, right] {
            assert!((wing.distance(tip) - ARROW_HEAD_LENGTH).abs() < 0.001);
            // Both wings trail behind the tip.
            assert!(wing.x < tip.x);
        }
        // Symmetric about the shaft, 30 degrees each side.
        assert!((left.y + right.y).abs() < 0.001);
        let expected_dy = ARROW_HEAD_LENGTH * std::f32::consts::FRAC_PI_6.sin();
        assert!((left.y.abs() - expected_dy).abs() < 0.001);
    }

    #[test]
    fn stationary_click_yields_a_click_action() {
        let pos = Some(Point::new(0.5, 0.5));
        let action = classify_pointer(false, false, false, true, pos);
        assert!(matches!(action, CanvasAction::Click(p) if p == Point::new(0.5, 0.5)));
    }

    #[test]
    fn drag_flags_take_precedence_over_click() {
        let pos = Some(Point::new(0.2, 0.2));
        assert!(matches!(
            classify_pointer(true, false, false, false, pos),
            CanvasAction::PointerDown(_)
        ));
        assert!(matches!(
            classify_pointer(false, true, false, false, pos),
            CanvasAction::PointerMove(_)
        ));
        assert!(matches!(
            classify_pointer(false, false, true, false, pos),
            CanvasAction::PointerUp
        ));
        assert!(matches!(
            classify_pointer(false, false, false, false, pos),
            CanvasAction::None
        ));
    }

    #[test]
    fn degenerate_arrow_still_produces_shapes() {
        let stroke = Stroke::shape(StrokeKind::Arrow, Point::new(0.5, 0.5), "#FF0000", 3.0);
        let shapes = stroke_shapes(&stroke, &frame());
        assert_eq!(shapes.len(), 3);
    }
}
