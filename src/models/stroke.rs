// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Stroke data structures.
//!
//! This module defines the core data structures for a single drawn
//! stroke: freehand paths, rectangles, circles, and arrows, together
//! with their color and width metadata.

use serde::{Deserialize, Serialize};

/// A 2D point with normalized coordinates (0.0 to 1.0) relative to the
/// displayed video frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Kind of stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeKind {
    Freehand,
    Rectangle,
    Circle,
    Arrow,
}

/// Currently selected toolbar tool.
///
/// `Eraser` is selectable but pointer-down is a drawing no-op; the
/// eraser has no erase semantics (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Select,
    Freehand,
    Rectangle,
    Circle,
    Arrow,
    Eraser,
}

impl Tool {
    /// The stroke kind this tool records, if it records one at all.
    pub fn stroke_kind(self) -> Option<StrokeKind> {
        match self {
            Tool::Freehand => Some(StrokeKind::Freehand),
            Tool::Rectangle => Some(StrokeKind::Rectangle),
            Tool::Circle => Some(StrokeKind::Circle),
            Tool::Arrow => Some(StrokeKind::Arrow),
            Tool::Select | Tool::Eraser => None,
        }
    }
}

/// One atomic drawing operation.
///
/// A freehand stroke holds at least one point; a shape stroke always has
/// both `start` and `end` set (equal at pointer-down, `end` mutated while
/// the drag is active). The constructors below are the only way strokes
/// are created, which keeps those invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    #[serde(rename = "type")]
    pub kind: StrokeKind,
    /// Path points (freehand only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Point>,
    /// Anchor of a shape stroke (rectangle/circle/arrow).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Point>,
    /// Opposite corner / tip of a shape stroke.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Point>,
    /// Hex color string, e.g. "#FF0000".
    pub color: String,
    #[serde(rename = "strokeWidth")]
    pub width: f32,
}

impl Stroke {
    /// Begin a freehand stroke seeded with the pointer-down position.
    pub fn freehand(seed: Point, color: &str, width: f32) -> Self {
        Self {
            kind: StrokeKind::Freehand,
            points: vec![seed],
            start: None,
            end: None,
            color: color.to_string(),
            width,
        }
    }

    /// Begin a shape stroke with `start == end` at the pointer-down position.
    pub fn shape(kind: StrokeKind, at: Point, color: &str, width: f32) -> Self {
        debug_assert!(kind != StrokeKind::Freehand);
        Self {
            kind,
            points: Vec::new(),
            start: Some(at),
            end: Some(at),
            color: color.to_string(),
            width,
        }
    }

    /// Extend the stroke to a new pointer position while the drag is active.
    pub fn extend_to(&mut self, pos: Point) {
        match self.kind {
            StrokeKind::Freehand => self.points.push(pos),
            _ => self.end = Some(pos),
        }
    }

    /// A click with no drag: single-point freehand or zero-size shape.
    /// Degenerate strokes are kept, there is no minimum-size filter.
    pub fn is_degenerate(&self) -> bool {
        match self.kind {
            StrokeKind::Freehand => self.points.len() <= 1,
            _ => self.start == self.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_starts_with_coincident_endpoints() {
        let s = Stroke::shape(StrokeKind::Rectangle, Point::new(0.4, 0.4), "#FF0000", 3.0);
        assert_eq!(s.start, s.end);
        assert!(s.is_degenerate());
    }

    #[test]
    fn extend_mutates_end_for_shapes_and_appends_for_freehand() {
        let mut rect = Stroke::shape(StrokeKind::Rectangle, Point::new(0.1, 0.1), "#FF0000", 3.0);
        rect.extend_to(Point::new(0.5, 0.6));
        assert_eq!(rect.start, Some(Point::new(0.1, 0.1)));
        assert_eq!(rect.end, Some(Point::new(0.5, 0.6)));
        assert!(!rect.is_degenerate());

        let mut path = Stroke::freehand(Point::new(0.1, 0.1), "#00FF00", 2.0);
        path.extend_to(Point::new(0.2, 0.2));
        assert_eq!(path.points.len(), 2);
    }

    #[test]
    fn select_and_eraser_record_no_stroke_kind() {
        assert_eq!(Tool::Select.stroke_kind(), None);
        assert_eq!(Tool::Eraser.stroke_kind(), None);
        assert_eq!(Tool::Arrow.stroke_kind(), Some(StrokeKind::Arrow));
    }

    #[test]
    fn stroke_serializes_with_wire_field_names() {
        let s = Stroke::freehand(Point::new(0.25, 0.75), "#FF0000", 3.0);
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["type"], "freehand");
        assert_eq!(value["strokeWidth"], 3.0);
        assert_eq!(value["points"][0]["x"], 0.25);
        assert!(value.get("start").is_none());
    }
}
