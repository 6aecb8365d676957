// Copyright 2026 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoomview --heading-base-level=0

//! Zoomview: a headless pinch-zoom and pan controller for list viewports.
//!
//! [`ViewportController`] holds everything a zoomable list needs between
//! frames: the pan pointer being tracked, the pinch recognizer, the clamped
//! scale/offset transform, and the measured viewport bounds. It does **not**
//! own a widget, a list, or a renderer. A host widget:
//!
//! - forwards its measurement pass to [`ViewportController::on_measure`],
//! - forwards raw pointer events to [`ViewportController::on_pointer_event`],
//! - draws its list content inside [`ViewportController::wrap_draw`],
//! - polls [`ViewportController::take_redraw_request`] and schedules a frame
//!   when it returns `true`.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use zoomview::{AffineStack, ViewportController};
//! use zoomview::pointer::event::{Pointer, PointerAction, PointerEvent, PointerId};
//! use zoomview::transform::MeasureSpec;
//!
//! let mut vc = ViewportController::default();
//! vc.on_measure(MeasureSpec::exactly(300.0), MeasureSpec::exactly(500.0));
//!
//! let (a, b) = (PointerId(0), PointerId(1));
//! let two = |action, spread: f64| {
//!     PointerEvent::new(
//!         action,
//!         [
//!             Pointer::new(a, Point::new(150.0 - spread, 250.0)),
//!             Pointer::new(b, Point::new(150.0 + spread, 250.0)),
//!         ],
//!     )
//! };
//!
//! // Spread two fingers from 100 to 200 apart: 2x zoom.
//! vc.on_pointer_event(&PointerEvent::single(PointerAction::Down, a, Point::new(100.0, 250.0)));
//! vc.on_pointer_event(&two(PointerAction::PointerDown { index: 1 }, 50.0));
//! vc.on_pointer_event(&two(PointerAction::Move, 100.0));
//! assert!((vc.scale() - 2.0).abs() < 1e-9);
//!
//! // Draw through the transform.
//! let mut ctx = AffineStack::new();
//! vc.wrap_draw(&mut ctx, |ctx| {
//!     let _row_transform = ctx.transform();
//! });
//! assert!(vc.take_redraw_request());
//! ```
//!
//! ## Behavior notes
//!
//! - The scale stays within [`ControllerConfig::zoom_limits`] (`[1.0, 3.0]`
//!   by default) and the offset within `[extent - extent * scale, 0]` per axis.
//! - At an exact scale of `1.0` the offset is zeroed when drawing.
//! - By default each draw pass requests another redraw, so a visible viewport
//!   redraws continuously; see [`ControllerConfig::continuous_redraw`].
//! - A move event that no longer contains the tracked pointer is ignored.
//!
//! Diagnostics go through `tracing`; install a subscriber in the host to see
//! them.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod draw;

pub use zoomview_pointer as pointer;
pub use zoomview_transform as transform;

pub use config::ControllerConfig;
pub use controller::{ViewportController, ViewportControllerDebugInfo};
pub use draw::{AffineStack, DrawContext};
