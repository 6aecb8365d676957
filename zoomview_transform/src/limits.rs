// Copyright 2026 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Allowed range for the uniform content scale.
///
/// The default range is `[1.0, 3.0]`: content can be magnified up to three
/// times. Limits never go below `1.0`, since shrinking content would expose
/// empty space and make the translation clamp limits positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ZoomLimits {
    /// `[1.0, 3.0]`.
    pub const DEFAULT: Self = Self { min: 1.0, max: 3.0 };

    /// Creates limits from a `min`/`max` pair.
    ///
    /// The pair is normalized so that `1.0 <= min <= max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let min = min.max(1.0);
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Smallest allowed scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }

    /// Returns `true` if `scale` lies within the limits.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}
