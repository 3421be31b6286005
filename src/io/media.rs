// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Poster frame loading.
//!
//! Decodes the still frame the canvas draws over, either fetched from
//! the backend or opened from a local file, into RGBA pixels ready for
//! an egui texture.

use anyhow::{Context, Result};
use std::path::Path;

/// A decoded frame in RGBA8 form.
pub struct DecodedFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode an in-memory image (e.g. a poster fetched from the backend).
pub fn decode_frame(bytes: &[u8]) -> Result<DecodedFrame> {
    let img = image::load_from_memory(bytes).context("failed to decode frame image")?;
    Ok(to_frame(img))
}

/// Load and decode a frame image from disk.
pub fn load_frame(path: &Path) -> Result<DecodedFrame> {
    let img = image::open(path)
        .with_context(|| format!("failed to open frame image {}", path.display()))?;
    Ok(to_frame(img))
}

fn to_frame(img: image::DynamicImage) -> DecodedFrame {
    let rgba = img.to_rgba8();
    DecodedFrame {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    }
}
