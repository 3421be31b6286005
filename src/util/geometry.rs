// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Coordinate transformations between surface and normalized frame
//! coordinates, and the proportional time-axis mapping used by the
//! annotation timeline.

use crate::models::stroke::Point;

/// Convert surface coordinates to normalized coordinates (0.0 to 1.0),
/// clamped so pointer positions just outside the frame stay on it.
pub fn normalize_coordinates(surface_x: f64, surface_y: f64, width: f64, height: f64) -> Point {
    Point {
        x: (surface_x / width).clamp(0.0, 1.0),
        y: (surface_y / height).clamp(0.0, 1.0),
    }
}

/// Convert normalized coordinates to surface coordinates.
pub fn denormalize_coordinates(point: &Point, width: f64, height: f64) -> (f64, f64) {
    (point.x * width, point.y * height)
}

/// Fraction of the timeline at which a timestamp sits, clamped to
/// [0, 1]. A zero or unknown duration collapses to 0; callers hide the
/// timeline entirely until the duration is known and positive.
pub fn timeline_fraction(seconds: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    (seconds / duration).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_denormalize_roundtrip() {
        let width = 1920.0;
        let height = 1080.0;
        let surface_x = 960.0;
        let surface_y = 540.0;

        let normalized = normalize_coordinates(surface_x, surface_y, width, height);
        let (denorm_x, denorm_y) = denormalize_coordinates(&normalized, width, height);

        assert!((denorm_x - surface_x).abs() < 0.0001);
        assert!((denorm_y - surface_y).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_corners_and_clamping() {
        let width = 1920.0;
        let height = 1080.0;

        // Top-left corner
        let tl = normalize_coordinates(0.0, 0.0, width, height);
        assert_eq!(tl.x, 0.0);
        assert_eq!(tl.y, 0.0);

        // Bottom-right corner
        let br = normalize_coordinates(1920.0, 1080.0, width, height);
        assert_eq!(br.x, 1.0);
        assert_eq!(br.y, 1.0);

        // A pointer dragged past the edge stays on the frame.
        let out = normalize_coordinates(2000.0, -10.0, width, height);
        assert_eq!(out.x, 1.0);
        assert_eq!(out.y, 0.0);
    }

    #[test]
    fn test_timeline_mapping_is_proportional() {
        // 30 seconds into a 120 second video sits exactly a quarter in.
        assert_eq!(timeline_fraction(30.0, 120.0) * 100.0, 25.0);
        assert_eq!(timeline_fraction(0.0, 120.0), 0.0);
        assert_eq!(timeline_fraction(120.0, 120.0), 1.0);
    }

    #[test]
    fn test_timeline_mapping_clamps_and_guards_zero_duration() {
        assert_eq!(timeline_fraction(500.0, 120.0), 1.0);
        assert_eq!(timeline_fraction(-5.0, 120.0), 0.0);
        assert_eq!(timeline_fraction(30.0, 0.0), 0.0);
    }
}
