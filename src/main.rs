// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Swingmark - coaching video review and annotation.
//!
//! A cross-platform desktop application for reviewing coaching videos:
//! draw timestamped annotations over a video frame, keep them in the
//! academy backend, and step through them on a timeline.

mod api;
mod app;
mod config;
mod io;
mod models;
mod playback;
mod ui;
mod util;

use anyhow::Result;
use app::SwingmarkApp;
use config::AppConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::load()?;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Swingmark - Coaching Video Review"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Swingmark",
        options,
        Box::new(move |_cc| Ok(Box::new(SwingmarkApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
