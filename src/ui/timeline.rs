// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation timeline under the video.
//!
//! Maps each persisted annotation's timestamp (and optional duration)
//! onto a horizontal position proportional to the total video duration.
//! Clicking a marker seeks and selects; clicking the empty track
//! scrubs. Not shown at all until the duration is known and positive.

use crate::models::annotation::Annotation;
use crate::playback::PlaybackClock;
use crate::util::geometry::timeline_fraction;
use crate::util::time::format_timestamp;

const TRACK_HEIGHT: f32 = 8.0;
const MARKER_RADIUS: f32 = 6.0;

/// Result of timeline interaction.
pub enum TimelineAction {
    None,
    Seek(f64),
    /// Seek to the annotation's timestamp and select it.
    Select(String),
}

/// Display the timeline track with annotation markers.
pub fn show(
    ui: &mut egui::Ui,
    annotations: &[Annotation],
    clock: &PlaybackClock,
    selected_id: Option<&str>,
) -> TimelineAction {
    if !clock.has_duration() {
        ui.label(
            egui::RichText::new("Timeline appears once the video duration is known")
                .italics()
                .weak(),
        );
        return TimelineAction::None;
    }

    let mut action = TimelineAction::None;
    let duration = clock.duration();

    let desired = egui::vec2(ui.available_width(), MARKER_RADIUS * 2.0 + 12.0);
    let (area_rect, track_response) =
        ui.allocate_exact_size(desired, egui::Sense::click());
    let track_rect = egui::Rect::from_min_size(
        egui::pos2(area_rect.min.x, area_rect.center().y - TRACK_HEIGHT / 2.0),
        egui::vec2(area_rect.width(), TRACK_HEIGHT),
    );

    let painter = ui.painter();
    let at_fraction =
        |fraction: f64| track_rect.min.x + fraction as f32 * track_rect.width();

    // Track and elapsed fill.
    painter.rect_filled(track_rect, 4.0, egui::Color32::from_gray(60));
    let elapsed = timeline_fraction(clock.position(), duration);
    if elapsed > 0.0 {
        let fill = egui::Rect::from_min_max(
            track_rect.min,
            egui::pos2(at_fraction(elapsed), track_rect.max.y),
        );
        painter.rect_filled(fill, 4.0, egui::Color32::from_gray(110));
    }

    // Duration-bearing annotations get a width bar under the markers.
    for annotation in annotations {
        if let Some(span) = annotation.duration {
            let left = timeline_fraction(annotation.timestamp, duration);
            let right = timeline_fraction(annotation.timestamp + span, duration);
            let bar = egui::Rect::from_min_max(
                egui::pos2(at_fraction(left), track_rect.min.y),
                egui::pos2(at_fraction(right), track_rect.max.y),
            );
            let color = super::canvas::hex_color(&annotation.color);
            painter.rect_filled(bar, 2.0, color.gamma_multiply(0.4));
        }
    }

    // Markers, clickable.
    for (idx, annotation) in annotations.iter().enumerate() {
        let fraction = timeline_fraction(annotation.timestamp, duration);
        let center = egui::pos2(at_fraction(fraction), track_rect.center().y);
        let marker_rect = egui::Rect::from_center_size(
            center,
            egui::vec2(MARKER_RADIUS * 2.0, MARKER_RADIUS * 2.0),
        );
        let response = ui.interact(
            marker_rect,
            ui.id().with(("annotation_marker", idx)),
            egui::Sense::click(),
        );

        let is_selected = selected_id == Some(annotation.id.as_str());
        let color = super::canvas::hex_color(&annotation.color);
        let radius = if is_selected || response.hovered() {
            MARKER_RADIUS + 2.0
        } else {
            MARKER_RADIUS
        };
        painter.circle_filled(center, radius, color);
        if is_selected {
            painter.circle_stroke(center, radius, egui::Stroke::new(2.0, egui::Color32::WHITE));
        }

        let hover = match &annotation.note {
            Some(note) => format!("{} - {}", format_timestamp(annotation.timestamp), note),
            None => format_timestamp(annotation.timestamp),
        };
        if response.on_hover_text(hover).clicked() {
            action = TimelineAction::Select(annotation.id.clone());
        }
    }

    // Current-time indicator on top of everything.
    let cursor_x = at_fraction(elapsed);
    painter.line_segment(
        [
            egui::pos2(cursor_x, area_rect.min.y),
            egui::pos2(cursor_x, area_rect.max.y),
        ],
        egui::Stroke::new(2.0, egui::Color32::WHITE),
    );

    // Clicking the bare track scrubs proportionally. Marker clicks are
    // handled above and take precedence.
    if matches!(action, TimelineAction::None) && track_response.clicked() {
        if let Some(pos) = track_response.interact_pointer_pos() {
            let fraction = ((pos.x - track_rect.min.x) / track_rect.width()).clamp(0.0, 1.0);
            action = TimelineAction::Seek(fraction as f64 * duration);
        }
    }

    action
}
