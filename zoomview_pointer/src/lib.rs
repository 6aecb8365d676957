// Copyright 2026 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoomview_pointer --heading-base-level=0

//! Zoomview Pointer: multi-pointer input interpretation for pan and pinch.
//!
//! This crate turns raw touch-style pointer events into the two signals a
//! zoomable viewport needs:
//!
//! - [`event`]: the pointer event model. Each event carries an action and a
//!   snapshot of every active contact, addressed by index within the event and
//!   by stable [`event::PointerId`] across events.
//! - [`tracker`]: a pan tracker that follows a single contact and reports its
//!   movement deltas, handing over to a remaining contact when it lifts.
//! - [`pinch`]: a pinch recognizer that reports incremental scale ratios from
//!   the spread of two or more contacts.
//!
//! Both state machines are fed the *same* event stream. They do not know about
//! each other, about transforms, or about any UI toolkit; the `zoomview` crate
//! combines them with a clamped viewport transform.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use zoomview_pointer::event::{PointerAction, PointerEvent, PointerId};
//! use zoomview_pointer::pinch::PinchRecognizer;
//! use zoomview_pointer::tracker::PointerTracker;
//!
//! let mut pan = PointerTracker::new();
//! let mut pinch = PinchRecognizer::new();
//!
//! let finger = PointerId(0);
//! for ev in [
//!     PointerEvent::single(PointerAction::Down, finger, Point::new(5.0, 5.0)),
//!     PointerEvent::single(PointerAction::Move, finger, Point::new(9.0, 2.0)),
//! ] {
//!     // One finger never pinches.
//!     assert!(pinch.on_event(&ev).is_none());
//!     if let Some(delta) = pan.on_event(&ev) {
//!         assert_eq!(delta, Vec2::new(4.0, -3.0));
//!     }
//! }
//! ```
//!
//! Diagnostics are emitted through `tracing` at `debug`/`trace` level.
//!
//! This crate is `no_std`.

#![no_std]

pub mod event;
pub mod pinch;
pub mod tracker;
