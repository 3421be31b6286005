// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Local export and import of annotation sets.
//!
//! This module handles exporting the currently loaded annotations to
//! YAML and JSON files for offline review, and importing them back.

use crate::models::annotation::Annotation;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk container for an exported annotation set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationExport {
    #[serde(default)]
    pub video_id: Option<String>,
    pub annotations: Vec<Annotation>,
}

/// Export annotations to YAML format.
pub fn export_yaml(data: &AnnotationExport, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export annotations to JSON format.
pub fn export_json(data: &AnnotationExport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import annotations from YAML format.
pub fn import_yaml(path: &Path) -> Result<AnnotationExport> {
    let yaml = std::fs::read_to_string(path)?;
    let data = serde_yaml::from_str(&yaml)?;
    Ok(data)
}

/// Import annotations from JSON format.
pub fn import_json(path: &Path) -> Result<AnnotationExport> {
    let json = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::DrawingData;
    use crate::models::stroke::{Point, Stroke};

    fn export() -> AnnotationExport {
        AnnotationExport {
            video_id: Some("vid-1".to_string()),
            annotations: vec![Annotation {
                id: "ann-1".to_string(),
                kind: "drawing".to_string(),
                timestamp: 30.0,
                drawing_data: DrawingData {
                    strokes: vec![Stroke::freehand(Point::new(0.2, 0.3), "#00FFFF", 2.0)],
                },
                color: "#00FFFF".to_string(),
                stroke_width: 2.0,
                note: Some("early wrist hinge".to_string()),
                duration: None,
                created_by: Some("Coach Kim".to_string()),
            }],
        }
    }

    #[test]
    fn json_export_import_roundtrip() {
        let path = std::env::temp_dir().join("swingmark-export-test.json");
        let data = export();
        export_json(&data, &path).unwrap();
        let imported = import_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(imported.video_id.as_deref(), Some("vid-1"));
        assert_eq!(imported.annotations, data.annotations);
    }

    #[test]
    fn yaml_export_import_roundtrip() {
        let path = std::env::temp_dir().join("swingmark-export-test.yaml");
        let data = export();
        export_yaml(&data, &path).unwrap();
        let imported = import_yaml(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(imported.annotations, data.annotations);
    }
}
