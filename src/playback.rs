// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Playback clock for the reviewed video.
//!
//! The backend streams the actual footage to other clients; this tool
//! works against a poster frame plus an owned time source. The clock is
//! what the timeline, the save path, and the transport controls read
//! and drive. `advance` is pure so the clamping behavior is testable;
//! `tick` feeds it wall-clock time from the UI loop while playing.

use std::time::Instant;

#[derive(Debug)]
pub struct PlaybackClock {
    duration: f64,
    position: f64,
    playing: bool,
    last_tick: Option<Instant>,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self {
            duration: 0.0,
            position: 0.0,
            playing: false,
            last_tick: None,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the duration is known and positive. The timeline is not
    /// rendered until this holds.
    pub fn has_duration(&self) -> bool {
        self.duration > 0.0
    }

    /// Set the duration once video metadata arrives. The position is
    /// clamped in case a shorter video replaced a longer one.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration.max(0.0);
        self.position = self.position.clamp(0.0, self.duration);
    }

    pub fn play(&mut self) {
        if !self.has_duration() || self.playing {
            return;
        }
        // Replay from the start when the clock is parked at the end.
        if self.position >= self.duration {
            self.position = 0.0;
        }
        self.playing = true;
        self.last_tick = Some(Instant::now());
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.last_tick = None;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump to an absolute position, clamped to the known duration.
    pub fn seek(&mut self, seconds: f64) {
        self.position = seconds.clamp(0.0, self.duration);
    }

    /// Move the clock forward by `dt` seconds, stopping at the end.
    pub fn advance(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        self.position += dt;
        if self.position >= self.duration {
            self.position = self.duration;
            self.pause();
        }
    }

    /// Advance using elapsed wall-clock time. Called once per UI frame.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        let now = Instant::now();
        if let Some(last) = self.last_tick.replace(now) {
            self.advance(now.duration_since(last).as_secs_f64());
        }
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(duration: f64) -> PlaybackClock {
        let mut c = PlaybackClock::new();
        c.set_duration(duration);
        c
    }

    #[test]
    fn advance_clamps_at_the_end_and_pauses() {
        let mut c = clock(10.0);
        c.play();
        c.advance(4.0);
        assert_eq!(c.position(), 4.0);
        c.advance(100.0);
        assert_eq!(c.position(), 10.0);
        assert!(!c.is_playing());
    }

    #[test]
    fn seek_clamps_to_duration() {
        let mut c = clock(60.0);
        c.seek(30.0);
        assert_eq!(c.position(), 30.0);
        c.seek(-5.0);
        assert_eq!(c.position(), 0.0);
        c.seek(600.0);
        assert_eq!(c.position(), 60.0);
    }

    #[test]
    fn play_without_duration_is_a_no_op() {
        let mut c = PlaybackClock::new();
        c.play();
        assert!(!c.is_playing());
        assert!(!c.has_duration());
    }

    #[test]
    fn play_at_the_end_restarts_from_zero() {
        let mut c = clock(10.0);
        c.seek(10.0);
        c.play();
        assert_eq!(c.position(), 0.0);
        assert!(c.is_playing());
    }

    #[test]
    fn shrinking_duration_clamps_position() {
        let mut c = clock(120.0);
        c.seek(90.0);
        c.set_duration(60.0);
        assert_eq!(c.position(), 60.0);
    }
}
