// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Shared utilities.

pub mod geometry;
pub mod time;
