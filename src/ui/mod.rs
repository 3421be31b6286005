// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Swingmark application.

pub mod canvas;
pub mod panel;
pub mod timeline;
pub mod toolbar;
