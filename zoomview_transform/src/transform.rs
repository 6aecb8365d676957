// Copyright 2026 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::bounds::ViewportBounds;
use crate::limits::ZoomLimits;

/// Clamps one offset component into `[max_offset, 0.0]`.
///
/// `0.0` is the "no pan" edge; `max_offset` is the most negative offset that
/// still keeps scaled content covering the viewport.
#[must_use]
pub fn clamp_offset_axis(value: f64, max_offset: f64) -> f64 {
    if value > 0.0 {
        0.0
    } else if value < max_offset {
        max_offset
    } else {
        value
    }
}

/// Uniform scale plus translation applied to viewport content.
///
/// The transform maps content coordinates to view coordinates as
/// `view = offset + content * scale`: translation is applied first and is
/// expressed in view units, then content is scaled.
///
/// Offsets are kept inside `[max_offset, 0]` on each axis, where
/// `max_offset = extent - extent * scale` (see [`ViewportTransform::offset_limits`]),
/// so the scaled content always covers the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    scale: f64,
    offset: Vec2,
    limits: ZoomLimits,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl ViewportTransform {
    /// Creates an identity transform with the given zoom limits.
    ///
    /// The initial scale is clamped into `limits`, so it is `1.0` unless the
    /// limits exclude it.
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            scale: limits.clamp(1.0),
            offset: Vec2::ZERO,
            limits,
        }
    }

    /// Current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current translation in view units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Zoom limits applied to the scale.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Replaces the zoom limits and re-clamps scale and offset.
    pub fn set_limits(&mut self, limits: ZoomLimits, bounds: ViewportBounds) {
        self.limits = limits;
        self.scale = limits.clamp(self.scale);
        self.clamp_to(bounds);
    }

    /// Most negative allowed offset on each axis for the current scale.
    ///
    /// Both components are `<= 0` whenever `scale >= 1`.
    #[must_use]
    pub fn offset_limits(&self, bounds: ViewportBounds) -> Vec2 {
        offset_limits_for(bounds, self.scale)
    }

    /// Clamps `offset` into the allowed range for the current scale.
    #[must_use]
    pub fn clamp_offset(&self, offset: Vec2, bounds: ViewportBounds) -> Vec2 {
        let max = self.offset_limits(bounds);
        Vec2::new(
            clamp_offset_axis(offset.x, max.x),
            clamp_offset_axis(offset.y, max.y),
        )
    }

    /// Multiplies the scale by a pinch `factor` and clamps it into the limits.
    ///
    /// The offset is re-clamped against the limits of the new scale. Factors
    /// that are not finite and positive are ignored.
    ///
    /// Returns `true` if the factor was applied.
    pub fn apply_pinch(&mut self, factor: f64, bounds: ViewportBounds) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            tracing::debug!(factor, "ignoring invalid pinch factor");
            return false;
        }
        self.scale = self.limits.clamp(self.scale * factor);
        self.clamp_to(bounds);
        tracing::trace!(scale = self.scale, "scale updated");
        true
    }

    /// Adds `delta` to the offset and clamps the result.
    pub fn pan_by(&mut self, delta: Vec2, bounds: ViewportBounds) {
        self.offset = self.clamp_offset(self.offset + delta, bounds);
    }

    /// Re-clamps the current offset, for example after the bounds changed.
    pub fn clamp_to(&mut self, bounds: ViewportBounds) {
        self.offset = self.clamp_offset(self.offset, bounds);
    }

    /// Prepares the transform for a draw pass and returns the offset to draw with.
    ///
    /// When the scale is exactly `1.0` the offset is reset to zero, and the
    /// reset persists.
    pub fn settle_for_draw(&mut self) -> Vec2 {
        if self.scale == 1.0 {
            self.offset = Vec2::ZERO;
        }
        self.offset
    }

    /// Returns the content-to-view affine: translate, then scale.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Converts a content-space point into view coordinates.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        self.to_affine() * pt
    }

    /// Converts a view-space point into content coordinates.
    ///
    /// Useful for hit testing list rows under the current zoom.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        ((pt - self.offset).to_vec2() / self.scale).to_point()
    }

    /// Resets to the identity transform, keeping the limits.
    pub fn reset(&mut self) {
        *self = Self::new(self.limits);
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self, bounds: ViewportBounds) -> ViewportTransformDebugInfo {
        ViewportTransformDebugInfo {
            bounds,
            scale: self.scale,
            offset: self.offset,
            offset_limits: self.offset_limits(bounds),
            min_scale: self.limits.min(),
            max_scale: self.limits.max(),
        }
    }
}

/// `extent - extent * scale` per axis.
fn offset_limits_for(bounds: ViewportBounds, scale: f64) -> Vec2 {
    Vec2::new(
        bounds.width - bounds.width * scale,
        bounds.height - bounds.height * scale,
    )
}

/// Debug snapshot of a [`ViewportTransform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransformDebugInfo {
    /// Bounds the snapshot was taken against.
    pub bounds: ViewportBounds,
    /// Current scale.
    pub scale: f64,
    /// Current offset in view units.
    pub offset: Vec2,
    /// Most negative allowed offset per axis.
    pub offset_limits: Vec2,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{ViewportTransform, clamp_offset_axis};
    use crate::bounds::ViewportBounds;
    use crate::limits::ZoomLimits;

    const BOUNDS: ViewportBounds = ViewportBounds::new(300.0, 500.0);

    #[test]
    fn pinch_scale_is_clamped_product() {
        for (start, ratio) in [(1.0, 0.5), (1.0, 1.7), (2.0, 1.25), (2.5, 2.0), (3.0, 0.1)] {
            let mut t = ViewportTransform::default();
            t.apply_pinch(start, BOUNDS);
            let before = t.scale();
            t.apply_pinch(ratio, BOUNDS);
            assert_eq!(t.scale(), (before * ratio).clamp(1.0, 3.0));
        }
    }

    #[test]
    fn invalid_pinch_factor_is_ignored() {
        let mut t = ViewportTransform::default();
        t.apply_pinch(2.0, BOUNDS);
        let before = t;
        assert!(!t.apply_pinch(0.0, BOUNDS));
        assert!(!t.apply_pinch(-1.0, BOUNDS));
        assert!(!t.apply_pinch(f64::NAN, BOUNDS));
        assert!(!t.apply_pinch(f64::INFINITY, BOUNDS));
        assert_eq!(t, before);
    }

    #[test]
    fn offset_limits_follow_scale() {
        let mut t = ViewportTransform::default();
        assert_eq!(t.offset_limits(BOUNDS), Vec2::ZERO);

        t.apply_pinch(2.0, BOUNDS);
        assert_eq!(t.offset_limits(BOUNDS), Vec2::new(-300.0, -500.0));

        for s in [1.0, 1.3, 2.0, 2.9, 3.0] {
            let mut t = ViewportTransform::default();
            t.apply_pinch(s, BOUNDS);
            let max = t.offset_limits(BOUNDS);
            assert!(max.x <= 0.0 && max.y <= 0.0);
            assert_eq!(max.x, 300.0 - 300.0 * t.scale());
            assert_eq!(max.y, 500.0 - 500.0 * t.scale());
        }
    }

    #[test]
    fn pan_is_clamped_not_wrapped() {
        let mut t = ViewportTransform::default();
        t.apply_pinch(2.0, BOUNDS);

        t.pan_by(Vec2::new(-400.0, 0.0), BOUNDS);
        assert_eq!(t.offset(), Vec2::new(-300.0, 0.0));

        t.pan_by(Vec2::new(1_000.0, -120.0), BOUNDS);
        assert_eq!(t.offset(), Vec2::new(0.0, -120.0));
    }

    #[test]
    fn clamp_is_idempotent() {
        let mut t = ViewportTransform::default();
        t.apply_pinch(2.5, BOUNDS);
        for delta in [(-10.0, -10.0), (-9_999.0, 3.0), (7.0, -700.0)] {
            t.pan_by(delta.into(), BOUNDS);
            let once = t.offset();
            assert_eq!(t.clamp_offset(once, BOUNDS), once);
        }
    }

    #[test]
    fn axis_clamp_checks_positive_edge_first() {
        assert_eq!(clamp_offset_axis(5.0, -100.0), 0.0);
        assert_eq!(clamp_offset_axis(-150.0, -100.0), -100.0);
        assert_eq!(clamp_offset_axis(-50.0, -100.0), -50.0);
        assert_eq!(clamp_offset_axis(-0.0, 0.0), -0.0);
    }

    #[test]
    fn zooming_out_reclamps_offset() {
        let mut t = ViewportTransform::default();
        t.apply_pinch(3.0, BOUNDS);
        t.pan_by(Vec2::new(-600.0, -1_000.0), BOUNDS);
        assert_eq!(t.offset(), Vec2::new(-600.0, -1_000.0));

        t.apply_pinch(2.0 / 3.0, BOUNDS);
        let max = t.offset_limits(BOUNDS);
        assert!((t.offset().x - max.x).abs() < 1e-9);
        assert!((t.offset().y - max.y).abs() < 1e-9);
    }

    #[test]
    fn settle_for_draw_zeroes_offset_only_at_identity_scale() {
        let mut t = ViewportTransform::default();
        t.apply_pinch(2.0, BOUNDS);
        t.pan_by(Vec2::new(-50.0, -60.0), BOUNDS);
        assert_eq!(t.settle_for_draw(), Vec2::new(-50.0, -60.0));

        t.apply_pinch(0.5, BOUNDS);
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.settle_for_draw(), Vec2::ZERO);
        assert_eq!(t.offset(), Vec2::ZERO);
    }

    #[test]
    fn affine_translates_then_scales() {
        let mut t = ViewportTransform::default();
        t.apply_pinch(2.0, BOUNDS);
        t.pan_by(Vec2::new(-100.0, -40.0), BOUNDS);

        let content = Point::new(10.0, 20.0);
        let view = t.content_to_view_point(content);
        assert_eq!(view, Point::new(-100.0 + 20.0, -40.0 + 40.0));

        let back = t.view_to_content_point(view);
        assert!((back.x - content.x).abs() < 1e-9);
        assert!((back.y - content.y).abs() < 1e-9);
    }

    #[test]
    fn set_limits_and_reset() {
        let mut t = ViewportTransform::default();
        t.apply_pinch(3.0, BOUNDS);
        t.pan_by(Vec2::new(-600.0, 0.0), BOUNDS);

        t.set_limits(ZoomLimits::new(1.0, 2.0), BOUNDS);
        assert_eq!(t.scale(), 2.0);
        assert_eq!(t.offset().x, -300.0);

        t.reset();
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.offset(), Vec2::ZERO);
        assert_eq!(t.limits().max(), 2.0);

        let info = t.debug_info(BOUNDS);
        assert_eq!(info.offset_limits, Vec2::ZERO);
        assert!(info.min_scale <= info.max_scale);
    }
}
