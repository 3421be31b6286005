// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation list panel.
//!
//! Side panel listing the persisted annotations for the loaded video
//! in display order, with selection and delete affordances, plus the
//! note field attached to the next save.

use crate::models::annotation::Annotation;
use crate::util::time::format_timestamp;

/// Result of panel interaction.
pub enum PanelAction {
    None,
    /// Seek to the annotation and highlight it.
    Select(String),
    /// Deletion is confirmed by the app before any request is made.
    RequestDelete(String),
}

/// Display the annotation list panel.
pub fn show(
    ui: &mut egui::Ui,
    annotations: &[Annotation],
    selected_id: Option<&str>,
    note_input: &mut String,
) -> PanelAction {
    let mut action = PanelAction::None;

    ui.heading("Annotations");
    ui.separator();

    ui.label("Note for next save:");
    ui.text_edit_singleline(note_input);
    ui.separator();

    if annotations.is_empty() {
        ui.label(egui::RichText::new("No annotations yet").italics().weak());
        return action;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for annotation in annotations {
            let is_selected = selected_id == Some(annotation.id.as_str());

            ui.horizontal(|ui| {
                let swatch = super::canvas::hex_color(&annotation.color);
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 4.0, swatch);

                let label = match &annotation.note {
                    Some(note) => format!("{}  {}", format_timestamp(annotation.timestamp), note),
                    None => format!(
                        "{}  {} strokes",
                        format_timestamp(annotation.timestamp),
                        annotation.drawing_data.strokes.len()
                    ),
                };
                if ui.selectable_label(is_selected, label).clicked() {
                    action = PanelAction::Select(annotation.id.clone());
                }

                if ui.small_button("🗑").on_hover_text("Delete annotation").clicked() {
                    action = PanelAction::RequestDelete(annotation.id.clone());
                }
            });

            if let Some(author) = &annotation.created_by {
                ui.label(egui::RichText::new(format!("   by {author}")).weak().small());
            }
        }
    });

    action
}
