// Copyright 2026 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use zoomview_transform::ZoomLimits;

/// Tuning knobs for a [`crate::ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Allowed scale range. Defaults to `[1.0, 3.0]`.
    pub zoom_limits: ZoomLimits,
    /// Minimum finger span, in view units, before a pinch starts. Defaults to `0.0`.
    pub min_pinch_span: f64,
    /// Whether every draw pass requests another redraw. Defaults to `true`.
    pub continuous_redraw: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            zoom_limits: ZoomLimits::DEFAULT,
            min_pinch_span: 0.0,
            continuous_redraw: true,
        }
    }
}

impl ControllerConfig {
    /// Sets the allowed scale range.
    #[must_use]
    pub fn with_zoom_limits(mut self, limits: ZoomLimits) -> Self {
        self.zoom_limits = limits;
        self
    }

    /// Sets the minimum span needed to start a pinch.
    #[must_use]
    pub fn with_min_pinch_span(mut self, span: f64) -> Self {
        self.min_pinch_span = span;
        self
    }

    /// Enables or disables redraw requests at the end of every draw pass.
    #[must_use]
    pub fn with_continuous_redraw(mut self, enabled: bool) -> Self {
        self.continuous_redraw = enabled;
        self
    }
}
