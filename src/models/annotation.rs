// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! An annotation pairs one saved batch of strokes with a video timestamp.
//! Annotations are owned by the backend; this module defines the wire
//! shape they arrive in and the display ordering used by the UI.

use super::stroke::Stroke;
use serde::{Deserialize, Serialize};

fn drawing_type() -> String {
    "drawing".to_string()
}

/// The stroke batch carried by an annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingData {
    pub strokes: Vec<Stroke>,
}

/// A persisted annotation as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: String,
    #[serde(rename = "type", default = "drawing_type")]
    pub kind: String,
    /// Video position in seconds at the moment of save.
    pub timestamp: f64,
    pub drawing_data: DrawingData,
    pub color: String,
    pub stroke_width: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Length in seconds for time-range annotations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Sort annotations for display: ascending timestamp, ties broken by
/// creation order (the order the backend returned them in).
pub fn sort_for_display(annotations: &mut [Annotation]) {
    annotations.sort_by(|a, b| {
        a.timestamp
            .partial_cmp(&b.timestamp)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stroke::{Point, Stroke};

    fn annotation(id: &str, timestamp: f64) -> Annotation {
        Annotation {
            id: id.to_string(),
            kind: "drawing".to_string(),
            timestamp,
            drawing_data: DrawingData {
                strokes: vec![Stroke::freehand(Point::new(0.5, 0.5), "#FF0000", 3.0)],
            },
            color: "#FF0000".to_string(),
            stroke_width: 3.0,
            note: None,
            duration: None,
            created_by: None,
        }
    }

    #[test]
    fn display_sort_is_ascending_and_stable() {
        let mut list = vec![
            annotation("b", 30.0),
            annotation("a", 10.0),
            annotation("c", 30.0),
        ];
        sort_for_display(&mut list);
        let ids: Vec<&str> = list.iter().map(|a| a.id.as_str()).collect();
        // "b" was returned before "c" and keeps its place among the ties.
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn annotation_deserializes_wire_payload() {
        let json = r##"{
            "id": "ann-1",
            "type": "drawing",
            "timestamp": 12.5,
            "drawingData": {
                "strokes": [
                    {"type": "arrow", "start": {"x": 0.1, "y": 0.2},
                     "end": {"x": 0.3, "y": 0.4}, "color": "#00FF00", "strokeWidth": 4.0}
                ]
            },
            "color": "#00FF00",
            "strokeWidth": 4.0,
            "createdBy": "Coach Kim"
        }"##;
        let ann: Annotation = serde_json::from_str(json).unwrap();
        assert_eq!(ann.timestamp, 12.5);
        assert_eq!(ann.drawing_data.strokes.len(), 1);
        assert_eq!(ann.created_by.as_deref(), Some("Coach Kim"));
        assert_eq!(ann.duration, None);
    }
}
