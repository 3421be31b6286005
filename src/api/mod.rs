// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Academy backend API: client, wire types, and the error taxonomy.
//!
//! Validation failures are caught before any network I/O; network
//! failures are surfaced to the user without automatic retry. A save
//! failure must leave the drawing session intact so the user can retry
//! without redrawing.

pub mod client;
pub mod types;

pub use client::AcademyClient;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("nothing to save: the drawing has no strokes")]
    EmptyDrawing,
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("server returned {code}: {message}")]
    Status { code: u16, message: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
