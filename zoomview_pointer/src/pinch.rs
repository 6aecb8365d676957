// Copyright 2026 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch recognizer: turn multi-pointer motion into scale ratios.
//!
//! The recognizer looks at the whole pointer set of each event. Its *focus* is
//! the mean position of the active contacts and its *span* is the diagonal of
//! twice their mean absolute deviation from the focus, so two fingers yield
//! roughly the distance between them. Each `Move` during a pinch reports
//! `span / previous_span`.
//!
//! Any change of the pointer set re-anchors the previous span, so adding or
//! lifting a finger never produces a ratio by itself.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use zoomview_pointer::event::{Pointer, PointerAction, PointerEvent, PointerId};
//! use zoomview_pointer::pinch::{PinchEvent, PinchRecognizer};
//!
//! let fingers = |action, dx: f64| {
//!     PointerEvent::new(
//!         action,
//!         [
//!             Pointer::new(PointerId(0), Point::new(100.0 - dx, 100.0)),
//!             Pointer::new(PointerId(1), Point::new(100.0 + dx, 100.0)),
//!         ],
//!     )
//! };
//!
//! let mut pinch = PinchRecognizer::new();
//! assert!(matches!(
//!     pinch.on_event(&fingers(PointerAction::PointerDown { index: 1 }, 50.0)),
//!     Some(PinchEvent::Begin { .. })
//! ));
//!
//! // Fingers spread from 100 to 200 apart.
//! let spread = fingers(PointerAction::Move, 100.0);
//! let Some(PinchEvent::Scale { factor, .. }) = pinch.on_event(&spread) else {
//!     panic!("expected a scale event");
//! };
//! assert!((factor - 2.0).abs() < 1e-9);
//! ```

use kurbo::{Point, Vec2};

use crate::event::{PointerAction, PointerEvent};

/// Output of [`PinchRecognizer::on_event`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchEvent {
    /// A pinch started.
    Begin {
        /// Mean position of the contacts.
        focus: Point,
        /// Span at the start of the pinch.
        span: f64,
    },
    /// The span changed by `factor` since the previous report.
    Scale {
        /// Ratio of the current span to the previous one. Always finite and positive.
        factor: f64,
        /// Mean position of the contacts.
        focus: Point,
    },
    /// The pinch ended.
    End,
}

/// Recognizes two-or-more finger pinch gestures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchRecognizer {
    min_span: f64,
    prev_span: f64,
    in_progress: bool,
}

impl Default for PinchRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PinchRecognizer {
    /// Creates a recognizer that starts a pinch at any positive span.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_span: 0.0,
            prev_span: 0.0,
            in_progress: false,
        }
    }

    /// Creates a recognizer that only starts a pinch once the span reaches `min_span`.
    ///
    /// Negative values are treated as `0.0`.
    #[must_use]
    pub fn with_min_span(min_span: f64) -> Self {
        Self {
            min_span: min_span.max(0.0),
            ..Self::new()
        }
    }

    /// Minimum span needed to start a pinch.
    #[must_use]
    pub fn min_span(&self) -> f64 {
        self.min_span
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Processes one event.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<PinchEvent> {
        let action = event.action();
        let (count, focus, span) = if action == PointerAction::Cancel {
            (0, Point::ZERO, 0.0)
        } else {
            measure(event)
        };
        let can_pinch = count >= 2 && span > 0.0 && span >= self.min_span;

        if action.changes_pointer_set() {
            self.prev_span = span;
            return match (self.in_progress, can_pinch) {
                (true, false) => self.finish(),
                (false, true) => self.begin(focus, span),
                _ => None,
            };
        }

        if !self.in_progress {
            return if can_pinch {
                self.prev_span = span;
                self.begin(focus, span)
            } else {
                None
            };
        }
        if !can_pinch {
            return self.finish();
        }

        let factor = span / self.prev_span;
        self.prev_span = span;
        if !factor.is_finite() || factor <= 0.0 {
            return None;
        }
        tracing::trace!(factor, span, "pinch scale");
        Some(PinchEvent::Scale { factor, focus })
    }

    fn begin(&mut self, focus: Point, span: f64) -> Option<PinchEvent> {
        tracing::debug!(span, "pinch begin");
        self.in_progress = true;
        Some(PinchEvent::Begin { focus, span })
    }

    fn finish(&mut self) -> Option<PinchEvent> {
        tracing::debug!("pinch end");
        self.in_progress = false;
        Some(PinchEvent::End)
    }
}

/// Counts the contacts that stay down and computes their focus and span.
fn measure(event: &PointerEvent) -> (usize, Point, f64) {
    let lifted = event.lifted_index();
    let active = || {
        event
            .pointers()
            .iter()
            .enumerate()
            .filter(move |(index, _)| Some(*index) != lifted)
            .map(|(_, p)| p.position)
    };

    let count = active().count();
    if count == 0 {
        return (0, Point::ZERO, 0.0);
    }
    let n = count as f64;

    let sum = active().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    let focus = (sum / n).to_point();

    let dev = active().fold(Vec2::ZERO, |acc, p| {
        acc + Vec2::new((p.x - focus.x).abs(), (p.y - focus.y).abs())
    });
    let span = (dev * (2.0 / n)).hypot();
    (count, focus, span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Pointer, PointerId};

    fn pair(action: PointerAction, a: (f64, f64), b: (f64, f64)) -> PointerEvent {
        PointerEvent::new(
            action,
            [
                Pointer::new(PointerId(0), Point::new(a.0, a.1)),
                Pointer::new(PointerId(1), Point::new(b.0, b.1)),
            ],
        )
    }

    fn start_pinch(pinch: &mut PinchRecognizer, distance: f64) {
        pinch.on_event(&PointerEvent::single(
            PointerAction::Down,
            PointerId(0),
            Point::new(0.0, 0.0),
        ));
        let ev = pinch.on_event(&pair(
            PointerAction::PointerDown { index: 1 },
            (0.0, 0.0),
            (distance, 0.0),
        ));
        assert!(
            matches!(ev, Some(PinchEvent::Begin { .. })),
            "second finger should start the pinch"
        );
    }

    fn factor_of(ev: Option<PinchEvent>) -> f64 {
        match ev {
            Some(PinchEvent::Scale { factor, .. }) => factor,
            other => panic!("expected scale, got {other:?}"),
        }
    }

    #[test]
    fn single_pointer_never_pinches() {
        let mut pinch = PinchRecognizer::new();
        let down = PointerEvent::single(PointerAction::Down, PointerId(0), Point::ZERO);
        assert_eq!(pinch.on_event(&down), None);
        let mv = PointerEvent::single(PointerAction::Move, PointerId(0), Point::new(40.0, 0.0));
        assert_eq!(pinch.on_event(&mv), None);
        assert!(!pinch.is_in_progress());
    }

    #[test]
    fn two_finger_span_is_their_distance() {
        let (count, focus, span) = measure(&pair(PointerAction::Move, (0.0, 0.0), (30.0, 40.0)));
        assert_eq!(count, 2);
        assert_eq!(focus, Point::new(15.0, 20.0));
        assert!((span - 50.0).abs() < 1e-9);
    }

    #[test]
    fn lifted_pointer_is_excluded_from_measure() {
        let (count, _, span) = measure(&pair(
            PointerAction::PointerUp { index: 1 },
            (0.0, 0.0),
            (30.0, 40.0),
        ));
        assert_eq!(count, 1);
        assert_eq!(span, 0.0);
    }

    #[test]
    fn spreading_reports_ratio_of_spans() {
        let mut pinch = PinchRecognizer::new();
        start_pinch(&mut pinch, 100.0);

        let f1 = factor_of(pinch.on_event(&pair(PointerAction::Move, (0.0, 0.0), (150.0, 0.0))));
        assert!((f1 - 1.5).abs() < 1e-9);

        // Ratios are incremental, not relative to the start.
        let f2 = factor_of(pinch.on_event(&pair(PointerAction::Move, (0.0, 0.0), (75.0, 0.0))));
        assert!((f2 - 0.5).abs() < 1e-9);
    }

    #[test]
    fn pointer_set_change_reanchors_without_ratio() {
        let mut pinch = PinchRecognizer::new();
        start_pinch(&mut pinch, 100.0);

        let third = PointerEvent::new(
            PointerAction::PointerDown { index: 2 },
            [
                Pointer::new(PointerId(0), Point::new(0.0, 0.0)),
                Pointer::new(PointerId(1), Point::new(100.0, 0.0)),
                Pointer::new(PointerId(2), Point::new(50.0, 300.0)),
            ],
        );
        assert_eq!(pinch.on_event(&third), None);
        assert!(pinch.is_in_progress());

        // Same positions on the next move: no zoom.
        let mv = PointerEvent::new(PointerAction::Move, third.pointers().iter().copied());
        let f = factor_of(pinch.on_event(&mv));
        assert!((f - 1.0).abs() < 1e-9);
    }

    #[test]
    fn lifting_to_one_finger_ends_pinch() {
        let mut pinch = PinchRecognizer::new();
        start_pinch(&mut pinch, 100.0);

        let ev = pinch.on_event(&pair(
            PointerAction::PointerUp { index: 0 },
            (0.0, 0.0),
            (100.0, 0.0),
        ));
        assert_eq!(ev, Some(PinchEvent::End));
        assert!(!pinch.is_in_progress());
    }

    #[test]
    fn cancel_ends_pinch() {
        let mut pinch = PinchRecognizer::new();
        start_pinch(&mut pinch, 100.0);

        let ev = pinch.on_event(&pair(PointerAction::Cancel, (0.0, 0.0), (100.0, 0.0)));
        assert_eq!(ev, Some(PinchEvent::End));
    }

    #[test]
    fn min_span_delays_begin_until_reached() {
        let mut pinch = PinchRecognizer::with_min_span(80.0);
        pinch.on_event(&PointerEvent::single(
            PointerAction::Down,
            PointerId(0),
            Point::ZERO,
        ));
        let ev = pinch.on_event(&pair(
            PointerAction::PointerDown { index: 1 },
            (0.0, 0.0),
            (40.0, 0.0),
        ));
        assert_eq!(ev, None);

        let ev = pinch.on_event(&pair(PointerAction::Move, (0.0, 0.0), (90.0, 0.0)));
        assert!(matches!(ev, Some(PinchEvent::Begin { span, .. }) if (span - 90.0).abs() < 1e-9));

        let f = factor_of(pinch.on_event(&pair(PointerAction::Move, (0.0, 0.0), (180.0, 0.0))));
        assert!((f - 2.0).abs() < 1e-9);
    }

    #[test]
    fn collapsed_fingers_end_instead_of_zero_factor() {
        let mut pinch = PinchRecognizer::new();
        start_pinch(&mut pinch, 100.0);

        let ev = pinch.on_event(&pair(PointerAction::Move, (10.0, 10.0), (10.0, 10.0)));
        assert_eq!(ev, Some(PinchEvent::End));
    }

    #[test]
    fn negative_min_span_is_zero() {
        assert_eq!(PinchRecognizer::with_min_span(-5.0).min_span(), 0.0);
    }
}
