// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the drawing session, the playback clock, and the
//! loaded video's annotations, and coordinates between the UI
//! components and the backend client. Network calls run on background
//! threads and report back over channels polled in `update`, so a
//! result arriving after the view moved on is simply dropped.

use crate::api::types::{AnnotationDraft, VideoMeta};
use crate::api::{AcademyClient, ApiError};
use crate::config::AppConfig;
use crate::io::media::DecodedFrame;
use crate::io::serialization::{self, AnnotationExport};
use crate::models::annotation::{self, Annotation};
use crate::models::session::DrawingSession;
use crate::models::stroke::Tool;
use crate::playback::PlaybackClock;
use crate::ui::{canvas, panel, timeline, toolbar};
use std::sync::mpsc::{channel, Receiver};

/// Result of a background video load.
struct LoadedVideo {
    meta: VideoMeta,
    annotations: Vec<Annotation>,
    /// Poster failures are tolerated; annotation review still works
    /// against a blank canvas.
    poster: Option<DecodedFrame>,
}

/// Destructive actions awaiting user confirmation.
enum ConfirmAction {
    ClearDrawing,
    DeleteAnnotation(String),
}

struct StatusLine {
    text: String,
    is_error: bool,
}

/// Main application state.
pub struct SwingmarkApp {
    client: AcademyClient,

    /// Video id field in the menu bar.
    video_id_input: String,

    /// Currently selected drawing tool
    current_tool: Tool,
    stroke_color: String,
    stroke_width: f32,

    /// Transient drawing state for the unsaved stroke batch
    session: DrawingSession,
    note_input: String,

    clock: PlaybackClock,
    video: Option<VideoMeta>,
    annotations: Vec<Annotation>,
    selected_annotation: Option<String>,

    /// Poster frame texture for display
    frame_texture: Option<egui::TextureHandle>,
    /// Poster dimensions (width, height)
    frame_size: Option<(u32, u32)>,

    confirm: Option<ConfirmAction>,
    status: Option<StatusLine>,

    /// Receiver for background video loading
    video_loader: Option<Receiver<Result<LoadedVideo, ApiError>>>,
    /// In-flight save request
    save_task: Option<Receiver<Result<Annotation, ApiError>>>,
    /// In-flight delete request (annotation id, receiver)
    delete_task: Option<(String, Receiver<Result<(), ApiError>>)>,
    /// Loading state message
    loading_message: Option<String>,
}

impl SwingmarkApp {
    /// Create a new Swingmark application instance.
    pub fn new(config: AppConfig) -> Self {
        let client = AcademyClient::new(&config);
        let mut app = Self {
            client,
            video_id_input: config.video_id.clone().unwrap_or_default(),
            current_tool: Tool::Freehand,
            stroke_color: toolbar::PALETTE[0].to_string(),
            stroke_width: 3.0,
            session: DrawingSession::new(),
            note_input: String::new(),
            clock: PlaybackClock::new(),
            video: None,
            annotations: Vec::new(),
            selected_annotation: None,
            frame_texture: None,
            frame_size: None,
            confirm: None,
            status: None,
            video_loader: None,
            save_task: None,
            delete_task: None,
            loading_message: None,
        };
        if let Some(video_id) = config.video_id {
            app.load_video(video_id);
        }
        app
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            is_error: false,
        });
    }

    fn set_error(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::error!("{text}");
        self.status = Some(StatusLine {
            text,
            is_error: true,
        });
    }

    /// Fetch video metadata, annotations, and the poster frame in the
    /// background.
    fn load_video(&mut self, video_id: String) {
        let (sender, receiver) = channel();
        self.video_loader = Some(receiver);
        self.loading_message = Some(format!("Loading video {video_id}…"));

        let client = self.client.clone();
        std::thread::spawn(move || {
            let result = (|| -> Result<LoadedVideo, ApiError> {
                let meta = client.video(&video_id)?;
                let annotations = client.list_annotations(&video_id)?;
                let poster = match client.fetch_poster(&video_id) {
                    Ok(bytes) => match crate::io::media::decode_frame(&bytes) {
                        Ok(frame) => Some(frame),
                        Err(e) => {
                            log::warn!("Failed to decode poster frame: {e}");
                            None
                        }
                    },
                    Err(e) => {
                        log::warn!("Failed to fetch poster frame: {e}");
                        None
                    }
                };
                Ok(LoadedVideo {
                    meta,
                    annotations,
                    poster,
                })
            })();

            let _ = sender.send(result);
        });
    }

    /// Package the current stroke batch and send it to the backend.
    /// The session is only cleared once the save succeeds.
    fn save_annotation(&mut self) {
        if self.save_task.is_some() {
            return;
        }
        let Some(video_id) = self.video.as_ref().map(|v| v.id.clone()) else {
            self.set_error("No video loaded; nothing to save to");
            return;
        };

        let draft = match AnnotationDraft::new(
            self.session.strokes().to_vec(),
            self.clock.position(),
            self.stroke_color.clone(),
            self.stroke_width,
            Some(self.note_input.clone()),
        ) {
            Ok(draft) => draft,
            Err(e) => {
                self.set_error(e.to_string());
                return;
            }
        };

        let (sender, receiver) = channel();
        self.save_task = Some(receiver);

        let client = self.client.clone();
        std::thread::spawn(move || {
            let _ = sender.send(client.create_annotation(&video_id, &draft));
        });
    }

    /// Issue the delete the user just confirmed.
    fn delete_annotation(&mut self, annotation_id: String) {
        if self.delete_task.is_some() {
            return;
        }
        let (sender, receiver) = channel();
        self.delete_task = Some((annotation_id.clone(), receiver));

        let client = self.client.clone();
        std::thread::spawn(move || {
            let _ = sender.send(client.delete_annotation(&annotation_id));
        });
    }

    /// Seek to an annotation and highlight it. Selection never changes
    /// the play/pause state.
    fn select_annotation(&mut self, annotation_id: String) {
        if let Some(annotation) = self.annotations.iter().find(|a| a.id == annotation_id) {
            self.clock.seek(annotation.timestamp);
            self.selected_annotation = Some(annotation_id);
        }
    }

    fn set_frame(&mut self, ctx: &egui::Context, frame: &DecodedFrame) {
        let size = [frame.width as usize, frame.height as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &frame.pixels);
        let texture = ctx.load_texture("poster_frame", color_image, egui::TextureOptions::LINEAR);
        self.frame_texture = Some(texture);
        self.frame_size = Some((frame.width, frame.height));
    }

    /// Poll in-flight background work.
    fn poll_background(&mut self, ctx: &egui::Context) {
        if let Some(ref receiver) = self.video_loader {
            if let Ok(result) = receiver.try_recv() {
                self.video_loader = None;
                self.loading_message = None;

                match result {
                    Ok(loaded) => {
                        if let Some(frame) = &loaded.poster {
                            self.set_frame(ctx, frame);
                        }
                        self.clock = PlaybackClock::new();
                        self.clock.set_duration(loaded.meta.duration);
                        self.annotations = loaded.annotations;
                        self.selected_annotation = None;
                        self.session.clear();
                        self.set_status(format!(
                            "Loaded \"{}\" with {} annotations",
                            loaded.meta.title,
                            self.annotations.len()
                        ));
                        self.video = Some(loaded.meta);
                    }
                    Err(e) => self.set_error(format!("Failed to load video: {e}")),
                }
            }
        }

        if let Some(ref receiver) = self.save_task {
            if let Ok(result) = receiver.try_recv() {
                self.save_task = None;

                match result {
                    Ok(created) => {
                        log::info!("Saved annotation {} at {:.2}s", created.id, created.timestamp);
                        let id = apply_saved(
                            &mut self.annotations,
                            &mut self.session,
                            &mut self.note_input,
                            created,
                        );
                        self.selected_annotation = Some(id);
                        self.set_status("Annotation saved");
                    }
                    // Strokes stay in the session so the user can retry
                    // without redrawing.
                    Err(e) => self.set_error(format!("Failed to save annotation: {e}")),
                }
            }
        }

        if let Some((id, receiver)) = &self.delete_task {
            if let Ok(result) = receiver.try_recv() {
                let id = id.clone();
                self.delete_task = None;

                match result {
                    Ok(()) => {
                        self.annotations.retain(|a| a.id != id);
                        if self.selected_annotation.as_deref() == Some(id.as_str()) {
                            self.selected_annotation = None;
                        }
                        self.set_status("Annotation deleted");
                    }
                    Err(e) => self.set_error(format!("Failed to delete annotation: {e}")),
                }
            }
        }

        // Keep painting while background work is pending.
        if self.loading_message.is_some() || self.save_task.is_some() || self.delete_task.is_some()
        {
            ctx.request_repaint();
        }
    }

    /// Open a local still frame to annotate over (offline review).
    fn open_frame_image(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "tiff", "tif"])
            .pick_file()
        else {
            return;
        };
        match crate::io::media::load_frame(&path) {
            Ok(frame) => {
                self.set_frame(ctx, &frame);
                self.set_status(format!("Opened frame image {}", path.display()));
            }
            Err(e) => self.set_error(format!("Failed to open frame image: {e}")),
        }
    }

    fn export_annotations(&mut self, yaml: bool) {
        let dialog = if yaml {
            rfd::FileDialog::new()
                .add_filter("YAML", &["yaml", "yml"])
                .set_file_name("annotations.yaml")
        } else {
            rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .set_file_name("annotations.json")
        };
        let Some(path) = dialog.save_file() else {
            return;
        };

        let data = AnnotationExport {
            video_id: self.video.as_ref().map(|v| v.id.clone()),
            annotations: self.annotations.clone(),
        };
        let result = if yaml {
            serialization::export_yaml(&data, &path)
        } else {
            serialization::export_json(&data, &path)
        };
        match result {
            Ok(()) => self.set_status(format!("Exported annotations to {}", path.display())),
            Err(e) => self.set_error(format!("Failed to export annotations: {e}")),
        }
    }

    fn import_annotations(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Annotations", &["yaml", "yml", "json"])
            .pick_file()
        else {
            return;
        };

        let extension = path.extension().and_then(|s| s.to_str());
        let result = match extension {
            Some("yaml") | Some("yml") => serialization::import_yaml(&path),
            Some("json") => serialization::import_json(&path),
            _ => {
                self.set_error(format!("Unsupported file extension: {extension:?}"));
                return;
            }
        };
        match result {
            Ok(data) => {
                self.annotations = data.annotations;
                annotation::sort_for_display(&mut self.annotations);
                self.selected_annotation = None;
                self.set_status(format!(
                    "Imported {} annotations from {}",
                    self.annotations.len(),
                    path.display()
                ));
            }
            Err(e) => self.set_error(format!("Failed to import annotations: {e}")),
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        // Undo (Ctrl+Z)
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift)
        {
            if self.session.undo() {
                log::info!("Undo");
            }
        }

        // Redo (Ctrl+Shift+Z or Ctrl+Y)
        if ctx.input(|i| {
            (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
                || (i.modifiers.command && i.key_pressed(egui::Key::Y))
        }) {
            if self.session.redo() {
                log::info!("Redo");
            }
        }

        // Save (Ctrl+S)
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::S)) {
            self.save_annotation();
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.clock.toggle();
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.selected_annotation = None;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace))
        {
            if let Some(id) = self.selected_annotation.clone() {
                self.confirm = Some(ConfirmAction::DeleteAnnotation(id));
            }
        }

        // Tool shortcuts
        let shortcuts = [
            (egui::Key::V, Tool::Select),
            (egui::Key::P, Tool::Freehand),
            (egui::Key::R, Tool::Rectangle),
            (egui::Key::C, Tool::Circle),
            (egui::Key::A, Tool::Arrow),
            (egui::Key::E, Tool::Eraser),
        ];
        for (key, tool) in shortcuts {
            if ctx.input(|i| !i.modifiers.command && i.key_pressed(key)) {
                self.current_tool = tool;
            }
        }
    }

    /// Modal confirmation for destructive actions.
    fn show_confirm_dialog(&mut self, ctx: &egui::Context) {
        let Some(action) = &self.confirm else {
            return;
        };
        let message = match action {
            ConfirmAction::ClearDrawing => "Clear the current drawing? This cannot be undone.",
            ConfirmAction::DeleteAnnotation(_) => "Delete this annotation? This cannot be undone.",
        };

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                    if ui.button("Confirm").clicked() {
                        confirmed = true;
                    }
                });
            });

        if cancelled {
            self.confirm = None;
        } else if confirmed {
            match self.confirm.take() {
                Some(ConfirmAction::ClearDrawing) => {
                    self.session.clear();
                    log::info!("Cleared drawing session");
                }
                Some(ConfirmAction::DeleteAnnotation(id)) => self.delete_annotation(id),
                None => {}
            }
        }
    }
}

/// Merge a freshly saved annotation into the display list and reset
/// the session. The batch is persisted; drawing starts over. Returns
/// the new annotation's id so the caller can select it.
fn apply_saved(
    annotations: &mut Vec<Annotation>,
    session: &mut DrawingSession,
    note_input: &mut String,
    created: Annotation,
) -> String {
    let id = created.id.clone();
    annotations.push(created);
    annotation::sort_for_display(annotations);
    session.clear();
    note_input.clear();
    id
}

impl eframe::App for SwingmarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_background(ctx);

        self.clock.tick();
        if self.clock.is_playing() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Frame Image...").clicked() {
                        self.open_frame_image(ctx);
                        ui.close_menu();
                    }
                    if ui.button("Import Annotations...").clicked() {
                        self.import_annotations();
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.menu_button("Export Annotations", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            self.export_annotations(true);
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            self.export_annotations(false);
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui
                        .add_enabled(self.session.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                        .clicked()
                    {
                        self.session.undo();
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(
                            self.session.can_redo(),
                            egui::Button::new("Redo (Ctrl+Shift+Z)"),
                        )
                        .clicked()
                    {
                        self.session.redo();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(!self.session.is_empty(), egui::Button::new("Clear Drawing"))
                        .clicked()
                    {
                        self.confirm = Some(ConfirmAction::ClearDrawing);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        ui.close_menu();
                    }
                });

                // Video loading controls on the right.
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let load_clicked = ui.button("Load").clicked();
                    ui.add(
                        egui::TextEdit::singleline(&mut self.video_id_input)
                            .hint_text("video id")
                            .desired_width(160.0),
                    );
                    ui.label("Video:");
                    if load_clicked && !self.video_id_input.trim().is_empty() {
                        let video_id = self.video_id_input.trim().to_string();
                        self.load_video(video_id);
                    }
                });
            });
        });

        // Toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(
                    ui,
                    &mut self.current_tool,
                    &mut self.stroke_color,
                    &mut self.stroke_width,
                    &self.session,
                    self.save_task.is_some(),
                )
            })
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::Undo => {
                self.session.undo();
            }
            toolbar::ToolbarAction::Redo => {
                self.session.redo();
            }
            toolbar::ToolbarAction::RequestClear => {
                self.confirm = Some(ConfirmAction::ClearDrawing);
            }
            toolbar::ToolbarAction::Save => self.save_annotation(),
            toolbar::ToolbarAction::None => {}
        }

        // Annotation list panel (right side)
        let panel_action = egui::SidePanel::right("annotations")
            .default_width(260.0)
            .show(ctx, |ui| {
                panel::show(
                    ui,
                    &self.annotations,
                    self.selected_annotation.as_deref(),
                    &mut self.note_input,
                )
            })
            .inner;

        match panel_action {
            panel::PanelAction::Select(id) => self.select_annotation(id),
            panel::PanelAction::RequestDelete(id) => {
                self.confirm = Some(ConfirmAction::DeleteAnnotation(id));
            }
            panel::PanelAction::None => {}
        }

        self.handle_keyboard(ctx);

        // Transport, timeline, and status (bottom)
        let timeline_action = egui::TopBottomPanel::bottom("timeline")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let play_label = if self.clock.is_playing() { "⏸" } else { "▶" };
                    if ui
                        .add_enabled(self.clock.has_duration(), egui::Button::new(play_label))
                        .clicked()
                    {
                        self.clock.toggle();
                    }
                    ui.label(format!(
                        "{} / {}",
                        crate::util::time::format_timestamp(self.clock.position()),
                        crate::util::time::format_timestamp(self.clock.duration()),
                    ));
                    if let Some(video) = &self.video {
                        ui.separator();
                        ui.label(&video.title);
                        if let Some(player) = &video.player_name {
                            ui.label(egui::RichText::new(player).weak());
                        }
                    }
                });

                let action = timeline::show(
                    ui,
                    &self.annotations,
                    &self.clock,
                    self.selected_annotation.as_deref(),
                );

                if let Some(status) = &self.status {
                    let color = if status.is_error {
                        egui::Color32::LIGHT_RED
                    } else {
                        egui::Color32::from_gray(180)
                    };
                    ui.label(egui::RichText::new(&status.text).color(color));
                }
                ui.add_space(4.0);

                action
            })
            .inner;

        match timeline_action {
            timeline::TimelineAction::Seek(seconds) => {
                self.clock.seek(seconds);
                self.selected_annotation = None;
            }
            timeline::TimelineAction::Select(id) => self.select_annotation(id),
            timeline::TimelineAction::None => {}
        }

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                        });
                    });
                    canvas::CanvasAction::None
                } else {
                    let selected = self
                        .selected_annotation
                        .as_deref()
                        .and_then(|id| self.annotations.iter().find(|a| a.id == id));
                    canvas::show(
                        ui,
                        &self.frame_texture,
                        self.frame_size,
                        self.session.strokes(),
                        selected,
                        self.current_tool,
                    )
                }
            })
            .inner;

        match canvas_action {
            canvas::CanvasAction::PointerDown(point) => {
                // Drawing over a moving frame is disorienting.
                self.clock.pause();
                if self.session.pointer_down(
                    self.current_tool,
                    point,
                    &self.stroke_color,
                    self.stroke_width,
                ) {
                    log::info!(
                        "Started {:?} stroke at ({:.3}, {:.3})",
                        self.current_tool,
                        point.x,
                        point.y
                    );
                }
            }
            canvas::CanvasAction::Click(point) => {
                self.clock.pause();
                if self.session.pointer_down(
                    self.current_tool,
                    point,
                    &self.stroke_color,
                    self.stroke_width,
                ) {
                    self.session.pointer_up();
                    log::debug!("Committed zero-size {:?} stroke", self.current_tool);
                }
            }
            canvas::CanvasAction::PointerMove(point) => self.session.pointer_move(point),
            canvas::CanvasAction::PointerUp => {
                self.session.pointer_up();
                if let Some(stroke) = self.session.strokes().last() {
                    if stroke.is_degenerate() {
                        log::debug!("Committed zero-size {:?} stroke", stroke.kind);
                    }
                }
            }
            canvas::CanvasAction::None => {}
        }

        self.show_confirm_dialog(ctx);
    }
}
