// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for poster frames and exported annotation files.

pub mod media;
pub mod serialization;
