// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing session state: stroke recording and undo/redo.
//!
//! The session owns the transient stroke list for the currently open
//! (unsaved) edit and records pointer input into it. Pointer capture is
//! an explicit two-state machine (Idle -> Drawing -> Idle); a
//! `pointer_move` while Idle is a no-op, never an error.
//!
//! Undo/redo is linear history over whole strokes. Because commit order
//! equals z-order and undo always removes the most recently committed
//! stroke, the undo stack is the tail of `strokes` itself; only the redo
//! stack needs separate storage. Redo re-appends at the current end
//! rather than restoring the original z-order position - that is the
//! documented contract, not an accident (see DESIGN.md).

use super::stroke::{Point, Stroke, Tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawState {
    Idle,
    Drawing,
}

/// Transient per-video drawing state.
#[derive(Debug)]
pub struct DrawingSession {
    /// Committed strokes, insertion order = z-order.
    strokes: Vec<Stroke>,
    /// Strokes removed by undo, most recent last.
    redo_stack: Vec<Stroke>,
    state: DrawState,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSession {
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
            redo_stack: Vec::new(),
            state: DrawState::Idle,
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn is_drawing(&self) -> bool {
        self.state == DrawState::Drawing
    }

    pub fn can_undo(&self) -> bool {
        self.state == DrawState::Idle && !self.strokes.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        self.state == DrawState::Idle && !self.redo_stack.is_empty()
    }

    /// Begin a new stroke at the pointer-down position. Returns `true`
    /// if a stroke was started; Select and Eraser record nothing.
    pub fn pointer_down(&mut self, tool: Tool, pos: Point, color: &str, width: f32) -> bool {
        if self.state == DrawState::Drawing {
            return false;
        }
        let Some(kind) = tool.stroke_kind() else {
            return false;
        };
        let stroke = match kind {
            super::stroke::StrokeKind::Freehand => Stroke::freehand(pos, color, width),
            shape => Stroke::shape(shape, pos, color, width),
        };
        self.strokes.push(stroke);
        self.state = DrawState::Drawing;
        true
    }

    /// Extend the in-progress stroke. No-op while Idle.
    pub fn pointer_move(&mut self, pos: Point) {
        if self.state != DrawState::Drawing {
            return;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.extend_to(pos);
        }
    }

    /// Commit the in-progress stroke. Committing invalidates redo
    /// history; a zero-size shape (click with no drag) is kept.
    pub fn pointer_up(&mut self) {
        if self.state == DrawState::Drawing {
            self.redo_stack.clear();
            self.state = DrawState::Idle;
        }
    }

    /// Remove the most recently committed stroke. Returns whether a
    /// stroke was undone.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        if let Some(stroke) = self.strokes.pop() {
            self.redo_stack.push(stroke);
            true
        } else {
            false
        }
    }

    /// Re-append the most recently undone stroke at the current end.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        if let Some(stroke) = self.redo_stack.pop() {
            self.strokes.push(stroke);
            true
        } else {
            false
        }
    }

    /// Empty the session: strokes and both history stacks together.
    /// Destructive; the caller confirms with the user first.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.redo_stack.clear();
        self.state = DrawState::Idle;
    }

    #[cfg(test)]
    fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stroke::StrokeKind;

    const RED: &str = "#FF0000";

    fn draw_freehand(session: &mut DrawingSession, points: &[(f64, f64)]) {
        let mut iter = points.iter();
        let (x, y) = iter.next().expect("at least one point");
        session.pointer_down(Tool::Freehand, Point::new(*x, *y), RED, 3.0);
        for (x, y) in iter {
            session.pointer_move(Point::new(*x, *y));
        }
        session.pointer_up();
    }

    #[test]
    fn undo_then_redo_restores_original_order() {
        let mut session = DrawingSession::new();
        draw_freehand(&mut session, &[(0.1, 0.1), (0.2, 0.2)]);
        draw_freehand(&mut session, &[(0.3, 0.3)]);
        draw_freehand(&mut session, &[(0.5, 0.5), (0.6, 0.6)]);
        let original = session.strokes().to_vec();

        for _ in 0..3 {
            assert!(session.undo());
        }
        assert!(session.is_empty());
        assert!(!session.undo());

        for _ in 0..3 {
            assert!(session.redo());
        }
        assert_eq!(session.strokes(), original.as_slice());
        assert!(!session.redo());
    }

    #[test]
    fn committing_a_new_stroke_invalidates_redo() {
        let mut session = DrawingSession::new();
        draw_freehand(&mut session, &[(0.1, 0.1)]);
        assert!(session.undo());
        assert!(session.can_redo());

        draw_freehand(&mut session, &[(0.9, 0.9)]);
        assert!(!session.can_redo());
        assert!(!session.redo());
        assert_eq!(session.strokes().len(), 1);
    }

    #[test]
    fn clear_empties_strokes_and_both_stacks() {
        let mut session = DrawingSession::new();
        draw_freehand(&mut session, &[(0.1, 0.1)]);
        draw_freehand(&mut session, &[(0.2, 0.2)]);
        session.undo();
        session.clear();

        assert!(session.is_empty());
        assert!(!session.undo());
        assert!(!session.redo());
        assert_eq!(session.redo_len(), 0);
    }

    #[test]
    fn click_without_drag_commits_degenerate_shape() {
        let mut session = DrawingSession::new();
        session.pointer_down(Tool::Rectangle, Point::new(0.4, 0.4), RED, 3.0);
        session.pointer_up();

        assert_eq!(session.strokes().len(), 1);
        let stroke = &session.strokes()[0];
        assert_eq!(stroke.kind, StrokeKind::Rectangle);
        assert_eq!(stroke.start, stroke.end);
        assert!(stroke.is_degenerate());
    }

    #[test]
    fn freehand_draw_then_undo_scenario() {
        let mut session = DrawingSession::new();
        draw_freehand(
            &mut session,
            &[(0.1, 0.1), (0.2, 0.2), (0.3, 0.3), (0.4, 0.4), (0.5, 0.5)],
        );

        assert_eq!(session.strokes().len(), 1);
        let stroke = &session.strokes()[0];
        assert_eq!(stroke.points.len(), 5);
        assert_eq!(stroke.color, RED);
        assert_eq!(stroke.width, 3.0);

        assert!(session.undo());
        assert!(session.is_empty());
        assert_eq!(session.redo_len(), 1);
    }

    #[test]
    fn pointer_move_while_idle_is_a_no_op() {
        let mut session = DrawingSession::new();
        session.pointer_move(Point::new(0.5, 0.5));
        assert!(session.is_empty());
        assert!(!session.is_drawing());
    }

    #[test]
    fn eraser_pointer_down_records_nothing() {
        let mut session = DrawingSession::new();
        assert!(!session.pointer_down(Tool::Eraser, Point::new(0.5, 0.5), RED, 3.0));
        assert!(session.is_empty());
        assert!(!session.is_drawing());
    }

    #[test]
    fn undo_is_blocked_while_a_drag_is_active() {
        let mut session = DrawingSession::new();
        draw_freehand(&mut session, &[(0.1, 0.1)]);
        session.pointer_down(Tool::Arrow, Point::new(0.2, 0.2), RED, 3.0);
        assert!(!session.undo());
        session.pointer_up();
        assert_eq!(session.strokes().len(), 2);
    }
}
