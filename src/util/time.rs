// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Timestamp formatting for the timeline and annotation list.

/// Format seconds as `m:ss.t` (tenths), e.g. `1:05.3`.
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).floor() as u64;
    let rest = seconds - minutes as f64 * 60.0;
    format!("{}:{:04.1}", minutes, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_tenths() {
        assert_eq!(format_timestamp(0.0), "0:00.0");
        assert_eq!(format_timestamp(65.3), "1:05.3");
        assert_eq!(format_timestamp(600.0), "10:00.0");
    }

    #[test]
    fn negative_input_clamps_to_zero() {
        assert_eq!(format_timestamp(-3.0), "0:00.0");
    }
}
