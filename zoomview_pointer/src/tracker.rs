// Copyright 2026 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan pointer tracker: follow one contact and report its movement deltas.
//!
//! ## Usage
//!
//! 1) Feed every [`PointerEvent`] into [`PointerTracker::on_event`].
//! 2) On `Move`, the tracker returns the delta of the *tracked* contact since
//!    the last observed position; all other contacts are ignored.
//! 3) When the tracked contact lifts while others stay down, tracking hands
//!    over to a remaining contact without producing a jump.
//!
//! ## States
//!
//! - **Idle**: no session. `Move` yields nothing.
//! - **Tracking**: a [`PointerSession`] holds the tracked id and its last
//!   position. `Up` and `Cancel` return to idle.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use zoomview_pointer::event::{PointerAction, PointerEvent, PointerId};
//! use zoomview_pointer::tracker::PointerTracker;
//!
//! let mut tracker = PointerTracker::new();
//! let id = PointerId(1);
//!
//! tracker.on_event(&PointerEvent::single(PointerAction::Down, id, Point::new(10.0, 20.0)));
//! assert!(tracker.is_tracking());
//!
//! let moved = PointerEvent::single(PointerAction::Move, id, Point::new(15.0, 18.0));
//! let delta = tracker.on_event(&moved);
//! assert_eq!(delta, Some(Vec2::new(5.0, -2.0)));
//! ```

use kurbo::{Point, Vec2};

use crate::event::{PointerAction, PointerEvent, PointerId};

/// The contact currently driving pan translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSession {
    /// Id of the tracked contact.
    pub id: PointerId,
    /// Last observed position of the tracked contact.
    pub last_pos: Point,
}

/// Tracks a single pan pointer across a multi-pointer gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    session: Option<PointerSession>,
}

impl PointerTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// The active session, if a contact is being tracked.
    #[must_use]
    pub fn session(&self) -> Option<PointerSession> {
        self.session
    }

    /// Id of the tracked contact, if any.
    #[must_use]
    pub fn tracked_id(&self) -> Option<PointerId> {
        self.session.map(|s| s.id)
    }

    /// Returns `true` while a contact is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// Processes one event and returns the pan delta it produces, if any.
    ///
    /// Only `Move` events produce a delta.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<Vec2> {
        match event.action() {
            PointerAction::Down => {
                if let Some(first) = event.pointer(0) {
                    self.start(first.id, first.position);
                }
                None
            }
            PointerAction::Move => self.on_move(event),
            PointerAction::Up | PointerAction::Cancel => {
                self.end();
                None
            }
            PointerAction::PointerUp { index } => {
                self.on_secondary_up(event, index);
                None
            }
            PointerAction::PointerDown { .. } => None,
        }
    }

    /// Begins tracking `id` at `pos`, replacing any previous session.
    pub fn start(&mut self, id: PointerId, pos: Point) {
        self.session = Some(PointerSession { id, last_pos: pos });
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        self.session = None;
    }

    fn on_move(&mut self, event: &PointerEvent) -> Option<Vec2> {
        let session = self.session.as_mut()?;
        let Some(pointer) = event
            .find_index(session.id)
            .and_then(|index| event.pointer(index))
        else {
            tracing::debug!(
                tracked = %session.id,
                "tracked pointer missing from move event; ignoring"
            );
            return None;
        };
        let delta = pointer.position - session.last_pos;
        session.last_pos = pointer.position;
        Some(delta)
    }

    fn on_secondary_up(&mut self, event: &PointerEvent, lifted_index: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(lifted) = event.pointer(lifted_index) else {
            tracing::debug!(lifted_index, "secondary pointer up with out-of-range index; ignoring");
            return;
        };
        if lifted.id != session.id {
            return;
        }
        let new_index = if lifted_index == 0 { 1 } else { 0 };
        let Some(next) = event.pointer(new_index) else {
            tracing::debug!(new_index, "no remaining pointer to re-anchor on; ignoring");
            return;
        };
        tracing::debug!(from = %session.id, to = %next.id, "re-anchoring pan pointer");
        session.id = next.id;
        session.last_pos = next.position;
    }
}
