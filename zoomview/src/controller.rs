// Copyright 2026 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};
use zoomview_pointer::event::{PointerEvent, PointerId};
use zoomview_pointer::pinch::{PinchEvent, PinchRecognizer};
use zoomview_pointer::tracker::PointerTracker;
use zoomview_transform::{
    MeasureSpec, ViewportBounds, ViewportTransform, ViewportTransformDebugInfo,
};

use crate::config::ControllerConfig;
use crate::draw::DrawContext;

/// Pinch-zoom and pan controller for a list viewport.
///
/// The host widget owns one controller and forwards three callbacks to it:
/// measurement ([`Self::on_measure`]), pointer input
/// ([`Self::on_pointer_event`]), and drawing ([`Self::wrap_draw`]). Redraw
/// requests are collected in a flag the host drains with
/// [`Self::take_redraw_request`].
///
/// Each pointer event goes to the pinch recognizer first and then to the pan
/// tracker, so a two-finger gesture both zooms and pans by the movement of
/// the tracked finger.
#[derive(Clone, Debug)]
pub struct ViewportController {
    config: ControllerConfig,
    tracker: PointerTracker,
    pinch: PinchRecognizer,
    transform: ViewportTransform,
    bounds: ViewportBounds,
    redraw_requested: bool,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl ViewportController {
    /// Creates a controller at scale `1.0` with empty bounds.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            tracker: PointerTracker::new(),
            pinch: PinchRecognizer::with_min_span(config.min_pinch_span),
            transform: ViewportTransform::new(config.zoom_limits),
            bounds: ViewportBounds::default(),
            redraw_requested: false,
        }
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Bounds recorded by the last measurement pass.
    #[must_use]
    pub fn bounds(&self) -> ViewportBounds {
        self.bounds
    }

    /// The current content transform state.
    #[must_use]
    pub fn transform(&self) -> &ViewportTransform {
        &self.transform
    }

    /// Current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale()
    }

    /// Current translation in view units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.transform.offset()
    }

    /// Id of the pointer currently driving pan, if any.
    #[must_use]
    pub fn tracked_pointer(&self) -> Option<PointerId> {
        self.tracker.tracked_id()
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_in_progress()
    }

    /// Records the measured size and returns it for the host's own measurement.
    ///
    /// The offset is re-clamped against the new bounds.
    pub fn on_measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.bounds = ViewportBounds::from_specs(width, height);
        self.transform.clamp_to(self.bounds);
        tracing::trace!(width = self.bounds.width, height = self.bounds.height, "measured");
        self.bounds.size()
    }

    /// Handles one pointer event. Always reports the event as handled.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if let Some(PinchEvent::Scale { factor, .. }) = self.pinch.on_event(event) {
            if self.transform.apply_pinch(factor, self.bounds) {
                self.request_redraw();
            }
        }

        if let Some(delta) = self.tracker.on_event(event) {
            self.transform.pan_by(delta, self.bounds);
            tracing::trace!(dx = delta.x, dy = delta.y, "pan");
            self.request_redraw();
        }

        true
    }

    /// Draws content through the current transform.
    ///
    /// Saves `ctx`, applies the translation and then the scale, runs `inner`,
    /// and restores `ctx`. At an exact scale of `1.0` the offset is zeroed
    /// first. With [`ControllerConfig::continuous_redraw`] set, every pass
    /// ends with a new redraw request.
    pub fn wrap_draw<C, F>(&mut self, ctx: &mut C, inner: F)
    where
        C: DrawContext + ?Sized,
        F: FnOnce(&mut C),
    {
        ctx.save();
        let offset = self.transform.settle_for_draw();
        ctx.translate(offset);
        ctx.scale(self.transform.scale());
        inner(&mut *ctx);
        ctx.restore();

        if self.config.continuous_redraw {
            self.request_redraw();
        }
    }

    /// Content-to-view matrix, as [`Self::wrap_draw`] would apply it now.
    #[must_use]
    pub fn content_transform(&self) -> Affine {
        self.transform.to_affine()
    }

    /// Maps a view-space point (for example a tap) into list content coordinates.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        self.transform.view_to_content_point(pt)
    }

    /// Returns `true` if a redraw has been requested and not yet taken.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        core::mem::take(&mut self.redraw_requested)
    }

    /// Drops gesture state and returns to the identity transform.
    ///
    /// Bounds and configuration are kept.
    pub fn reset(&mut self) {
        self.tracker.end();
        self.pinch = PinchRecognizer::with_min_span(self.config.min_pinch_span);
        self.transform.reset();
        self.request_redraw();
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportControllerDebugInfo {
        ViewportControllerDebugInfo {
            transform: self.transform.debug_info(self.bounds),
            tracked_pointer: self.tracked_pointer(),
            pinching: self.is_pinching(),
            redraw_requested: self.redraw_requested,
        }
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

/// Debug snapshot of a [`ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportControllerDebugInfo {
    /// Transform state against the current bounds.
    pub transform: ViewportTransformDebugInfo,
    /// Pointer driving pan, if any.
    pub tracked_pointer: Option<PointerId>,
    /// Whether a pinch is in progress.
    pub pinching: bool,
    /// Whether a redraw is pending.
    pub redraw_requested: bool,
}
