// Copyright 2026 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// How a parent constrains one dimension during measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MeasureMode {
    /// The parent imposes no constraint.
    #[default]
    Unspecified,
    /// The child must be exactly the given size.
    Exactly,
    /// The child can be as large as it wants up to the given size.
    AtMost,
}

/// A measurement constraint for one dimension.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MeasureSpec {
    /// Constraint kind.
    pub mode: MeasureMode,
    /// Size in view units; its meaning depends on `mode`.
    pub size: f64,
}

impl MeasureSpec {
    /// An exact size.
    #[must_use]
    pub const fn exactly(size: f64) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    /// An upper bound.
    #[must_use]
    pub const fn at_most(size: f64) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// No constraint; `size` is a hint.
    #[must_use]
    pub const fn unspecified(size: f64) -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size,
        }
    }

    /// The size carried by this spec, regardless of mode.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }
}

/// Measured on-screen size of the viewport.
///
/// Bounds are recorded verbatim from measurement; they are not validated.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewportBounds {
    /// Width in view units.
    pub width: f64,
    /// Height in view units.
    pub height: f64,
}

impl ViewportBounds {
    /// Creates bounds from a width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Resolves bounds from a pair of measurement specs.
    #[must_use]
    pub fn from_specs(width: MeasureSpec, height: MeasureSpec) -> Self {
        Self::new(width.size(), height.size())
    }

    /// The bounds as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl From<Size> for ViewportBounds {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}
