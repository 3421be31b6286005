// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar: tool selection, color/width pickers, and session actions.

use crate::models::session::DrawingSession;
use crate::models::stroke::Tool;

/// The annotation color palette (hex, as sent to the backend).
pub const PALETTE: [&str; 8] = [
    "#FF0000", // Red
    "#00FF00", // Green
    "#0000FF", // Blue
    "#FFFF00", // Yellow
    "#FF00FF", // Magenta
    "#00FFFF", // Cyan
    "#FFFFFF", // White
    "#FFA500", // Orange
];

/// Selectable stroke widths.
pub const STROKE_WIDTHS: [f32; 5] = [2.0, 3.0, 4.0, 6.0, 8.0];

/// Session actions requested from the toolbar.
pub enum ToolbarAction {
    None,
    Undo,
    Redo,
    /// Clear-all is destructive; the app confirms before clearing.
    RequestClear,
    Save,
}

/// Display the toolbar.
pub fn show(
    ui: &mut egui::Ui,
    current_tool: &mut Tool,
    stroke_color: &mut String,
    stroke_width: &mut f32,
    session: &DrawingSession,
    saving: bool,
) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Tools:");
        ui.separator();

        let tools = [
            (Tool::Select, "⬆ Select"),
            (Tool::Freehand, "✏ Freehand"),
            (Tool::Rectangle, "▭ Rectangle"),
            (Tool::Circle, "◯ Circle"),
            (Tool::Arrow, "↗ Arrow"),
            (Tool::Eraser, "⌫ Eraser"),
        ];
        for (tool, label) in tools {
            if ui.selectable_label(*current_tool == tool, label).clicked() {
                *current_tool = tool;
            }
        }

        ui.separator();

        ui.label("Color:");
        for hex in PALETTE {
            let color = super::canvas::hex_color(hex);
            let selected = *stroke_color == hex;
            let button = egui::Button::new("  ").fill(color).stroke(if selected {
                egui::Stroke::new(2.0, egui::Color32::LIGHT_GRAY)
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(60))
            });
            if ui.add(button).on_hover_text(hex).clicked() {
                *stroke_color = hex.to_string();
            }
        }

        ui.separator();

        ui.label("Width:");
        for width in STROKE_WIDTHS {
            let label = format!("{}", width as u32);
            if ui
                .selectable_label((*stroke_width - width).abs() < f32::EPSILON, label)
                .clicked()
            {
                *stroke_width = width;
            }
        }

        ui.separator();

        if ui
            .add_enabled(session.can_undo(), egui::Button::new("⟲ Undo"))
            .clicked()
        {
            action = ToolbarAction::Undo;
        }
        if ui
            .add_enabled(session.can_redo(), egui::Button::new("⟳ Redo"))
            .clicked()
        {
            action = ToolbarAction::Redo;
        }
        if ui
            .add_enabled(!session.is_empty(), egui::Button::new("✖ Clear"))
            .clicked()
        {
            action = ToolbarAction::RequestClear;
        }

        ui.separator();

        let save_label = if saving { "Saving…" } else { "💾 Save" };
        let can_save = !session.is_empty() && !session.is_drawing() && !saving;
        if ui
            .add_enabled(can_save, egui::Button::new(save_label))
            .clicked()
        {
            action = ToolbarAction::Save;
        }
    });

    action
}
