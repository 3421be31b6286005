// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Wire types for the academy backend.

use super::ApiError;
use crate::models::annotation::{Annotation, DrawingData};
use crate::models::stroke::Stroke;
use serde::{Deserialize, Serialize};

/// Video metadata as returned by `GET /videos/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMeta {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Length in seconds.
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub player_name: Option<String>,
}

/// Request body for `POST /videos/{id}/annotations`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationDraft {
    #[serde(rename = "type")]
    kind: String,
    timestamp: f64,
    drawing_data: DrawingData,
    color: String,
    stroke_width: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl AnnotationDraft {
    /// Package a finished stroke batch for saving. An empty batch is a
    /// validation error and never reaches the network.
    pub fn new(
        strokes: Vec<Stroke>,
        timestamp: f64,
        color: String,
        stroke_width: f32,
        note: Option<String>,
    ) -> Result<Self, ApiError> {
        if strokes.is_empty() {
            return Err(ApiError::EmptyDrawing);
        }
        Ok(Self {
            kind: "drawing".to_string(),
            timestamp,
            drawing_data: DrawingData { strokes },
            color,
            stroke_width,
            note: note.filter(|n| !n.trim().is_empty()),
        })
    }
}

/// Body envelope used by every backend response: `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// Payload of `GET /videos/{id}/annotations`.
#[derive(Debug, Deserialize)]
pub(crate) struct AnnotationPage {
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    #[allow(dead_code)]
    pub total: u64,
}
