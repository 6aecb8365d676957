// Copyright 2026 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoomview_transform --heading-base-level=0

//! Zoomview Transform: clamped pan/zoom state for a viewport.
//!
//! This crate provides a small, headless model of the transform a zoomable
//! viewport applies to its content:
//! - [`ViewportTransform`]: uniform scale plus a translation offset.
//! - [`ViewportBounds`]: the measured viewport size, resolved from
//!   [`MeasureSpec`]s.
//! - [`ZoomLimits`]: the allowed scale range, `[1.0, 3.0]` by default.
//!
//! The offset is always clamped so that scaled content covers the whole
//! viewport: on each axis it lies in `[extent - extent * scale, 0]`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use zoomview_transform::{ViewportBounds, ViewportTransform};
//!
//! let bounds = ViewportBounds::new(300.0, 500.0);
//! let mut t = ViewportTransform::default();
//!
//! // Pinch to 2x: the content may now move up to one viewport to the left/up.
//! t.apply_pinch(2.0, bounds);
//! assert_eq!(t.offset_limits(bounds), Vec2::new(-300.0, -500.0));
//!
//! // Panning past the edge clamps.
//! t.pan_by(Vec2::new(-400.0, 0.0), bounds);
//! assert_eq!(t.offset(), Vec2::new(-300.0, 0.0));
//! ```
//!
//! ## Design notes
//!
//! - Translation is applied before scale, so offsets are in view units.
//! - At an exact scale of `1.0`, [`ViewportTransform::settle_for_draw`]
//!   discards any residual offset.
//! - Input interpretation lives in `zoomview_pointer`; wiring the two together
//!   is the job of the `zoomview` controller.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod limits;
mod transform;

pub use bounds::{MeasureMode, MeasureSpec, ViewportBounds};
pub use limits::ZoomLimits;
pub use transform::{ViewportTransform, ViewportTransformDebugInfo, clamp_offset_axis};
