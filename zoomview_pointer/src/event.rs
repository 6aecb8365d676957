// Copyright 2026 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-pointer event model.
//!
//! A [`PointerEvent`] carries an action plus a snapshot of *every* pointer that
//! is active while the event is dispatched, in index order. This mirrors the
//! motion events of touch toolkits, where a secondary finger lifting is
//! reported together with the positions of all fingers still down.
//!
//! Pointer *indices* are only meaningful within a single event; a contact is
//! followed across events by its [`PointerId`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use zoomview_pointer::event::{Pointer, PointerAction, PointerEvent, PointerId};
//!
//! let a = Pointer::new(PointerId(7), Point::new(10.0, 10.0));
//! let b = Pointer::new(PointerId(9), Point::new(50.0, 10.0));
//! let ev = PointerEvent::new(PointerAction::PointerUp { index: 1 }, [a, b]);
//!
//! assert_eq!(ev.find_index(PointerId(9)), Some(1));
//! assert_eq!(ev.lifted_index(), Some(1));
//! ```

use core::fmt;

use kurbo::Point;
use smallvec::SmallVec;

/// Stable, toolkit-assigned identifier of a contact for its whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PointerId({})", self.0)
    }
}

/// A single contact as observed by one event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Identifier of the contact.
    pub id: PointerId,
    /// Position in view coordinates.
    pub position: Point,
}

impl Pointer {
    /// Creates a pointer snapshot.
    #[must_use]
    pub const fn new(id: PointerId, position: Point) -> Self {
        Self { id, position }
    }
}

/// What happened to the pointer set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// The first pointer went down. The event carries exactly that pointer.
    Down,
    /// One or more pointers moved.
    Move,
    /// The last pointer went up.
    Up,
    /// The gesture was aborted by the host.
    Cancel,
    /// A secondary pointer went down; `index` locates it in the event.
    PointerDown {
        /// Index of the new pointer.
        index: usize,
    },
    /// A non-last pointer went up; `index` locates it in the event.
    ///
    /// The lifted pointer is still present in the event's pointer list.
    PointerUp {
        /// Index of the lifted pointer.
        index: usize,
    },
}

impl PointerAction {
    /// Returns `true` for actions that change the set of active pointers.
    #[must_use]
    pub fn changes_pointer_set(self) -> bool {
        !matches!(self, Self::Move)
    }
}

/// One dispatched pointer event.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    action: PointerAction,
    pointers: SmallVec<[Pointer; 4]>,
}

impl PointerEvent {
    /// Creates an event from an action and the active pointers in index order.
    pub fn new(action: PointerAction, pointers: impl IntoIterator<Item = Pointer>) -> Self {
        Self {
            action,
            pointers: pointers.into_iter().collect(),
        }
    }

    /// Convenience constructor for a single-pointer event.
    #[must_use]
    pub fn single(action: PointerAction, id: PointerId, position: Point) -> Self {
        Self::new(action, [Pointer::new(id, position)])
    }

    /// The action of this event.
    #[must_use]
    pub fn action(&self) -> PointerAction {
        self.action
    }

    /// All pointers active during this event, in index order.
    #[must_use]
    pub fn pointers(&self) -> &[Pointer] {
        &self.pointers
    }

    /// Number of pointers in this event.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` if the event carries no pointers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    /// Returns the pointer at `index`, if any.
    #[must_use]
    pub fn pointer(&self, index: usize) -> Option<&Pointer> {
        self.pointers.get(index)
    }

    /// Resolves a pointer id to its index within this event.
    #[must_use]
    pub fn find_index(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    /// Index of the pointer leaving the active set with this event, if any.
    ///
    /// `Up` reports index `0`, since only one pointer remains at that point.
    #[must_use]
    pub fn lifted_index(&self) -> Option<usize> {
        match self.action {
            PointerAction::Up => Some(0),
            PointerAction::PointerUp { index } => Some(index),
            _ => None,
        }
    }
}
