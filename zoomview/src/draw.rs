// Copyright 2026 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Vec2};
use smallvec::SmallVec;

/// The slice of a host canvas the controller needs to apply its transform.
///
/// Operations follow the usual canvas convention: each call concatenates onto
/// the current matrix, so later operations apply to content first.
pub trait DrawContext {
    /// Pushes the current matrix.
    fn save(&mut self);
    /// Concatenates a translation.
    fn translate(&mut self, offset: Vec2);
    /// Concatenates a uniform scale.
    fn scale(&mut self, factor: f64);
    /// Pops back to the last saved matrix.
    fn restore(&mut self);
}

/// A [`DrawContext`] that only tracks the matrix.
///
/// Useful for hosts that take a final [`Affine`] rather than canvas calls,
/// and for tests.
#[derive(Clone, Debug, Default)]
pub struct AffineStack {
    current: Affine,
    saved: SmallVec<[Affine; 4]>,
}

impl AffineStack {
    /// Creates a stack starting at the identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stack starting at `base`.
    #[must_use]
    pub fn with_base(base: Affine) -> Self {
        Self {
            current: base,
            saved: SmallVec::new(),
        }
    }

    /// Current matrix.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.current
    }

    /// Number of unmatched saves.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

impl DrawContext for AffineStack {
    fn save(&mut self) {
        self.saved.push(self.current);
    }

    fn translate(&mut self, offset: Vec2) {
        self.current = self.current * Affine::translate(offset);
    }

    fn scale(&mut self, factor: f64) {
        self.current = self.current * Affine::scale(factor);
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(affine) => self.current = affine,
            None => tracing::debug!("restore without matching save"),
        }
    }
}
