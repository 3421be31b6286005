// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Core data model: strokes, drawing sessions, and annotations.

pub mod annotation;
pub mod session;
pub mod stroke;
