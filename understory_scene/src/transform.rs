// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer transforms: map the absolute pointer into the space a subtree was rendered in.

use alloc::rc::Rc;
use alloc::vec::Vec;
use kurbo::{Affine, Point, Vec2};

use crate::scene::Scene;

/// A pointer-coordinate mapping applied to every element rendered while it is pushed.
///
/// Cloning is cheap; elements keep a snapshot of the chain they rendered under.
#[derive(Clone)]
pub struct PointerTransform(Rc<dyn Fn(Point) -> Point>);

impl PointerTransform {
    /// Wrap an arbitrary mapping.
    pub fn new(f: impl Fn(Point) -> Point + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Map the pointer through an affine transform.
    ///
    /// `pointer_to_local` maps scene space into the subtree's space, so for content
    /// drawn with transform `T` pass `T.inverse()`.
    pub fn affine(pointer_to_local: Affine) -> Self {
        Self::new(move |p| pointer_to_local * p)
    }

    /// Shift the pointer by `offset` (for example a scroll offset).
    pub fn translate(offset: Vec2) -> Self {
        Self::new(move |p| p + offset)
    }

    /// Apply this mapping to `point`.
    #[inline]
    pub fn apply(&self, point: Point) -> Point {
        (self.0)(point)
    }
}

impl core::fmt::Debug for PointerTransform {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("PointerTransform").finish_non_exhaustive()
    }
}

/// Apply a chain of transforms, outermost (first pushed) first.
pub(crate) fn map_point(chain: &[PointerTransform], point: Point) -> Point {
    chain.iter().fold(point, |p, t| t.apply(p))
}

/// The push/pop chain active while rendering.
#[derive(Clone, Debug, Default)]
pub struct TransformStack {
    chain: Vec<PointerTransform>,
}

impl TransformStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { chain: Vec::new() }
    }

    /// Push a transform; it applies to everything rendered until the matching pop.
    pub fn push(&mut self, transform: PointerTransform) {
        self.chain.push(transform);
    }

    /// Pop the innermost transform.
    pub fn pop(&mut self) -> Option<PointerTransform> {
        self.chain.pop()
    }

    /// Number of pushed transforms.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns true if nothing is pushed.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// The pushed transforms, outermost first.
    pub fn as_slice(&self) -> &[PointerTransform] {
        &self.chain
    }

    /// Map `point` through the whole chain.
    pub fn apply(&self, point: Point) -> Point {
        map_point(&self.chain, point)
    }
}

impl Scene {
    /// Push a pointer transform for the elements rendered until the matching
    /// [`pop_transform`](Self::pop_transform).
    ///
    /// Every push must be popped before [`finish`](Self::finish).
    pub fn push_transform(&mut self, transform: PointerTransform) {
        self.transforms.push(transform);
    }

    /// Pop the innermost pointer transform.
    pub fn pop_transform(&mut self) -> Option<PointerTransform> {
        let popped = self.transforms.pop();
        if popped.is_none() {
            tracing::warn!("pop_transform without a matching push");
        }
        popped
    }

    /// Run `f` with `transform` pushed, popping it on return.
    pub fn with_transform<R>(
        &mut self,
        transform: PointerTransform,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let depth = self.transforms.len();
        self.transforms.push(transform);
        let out = f(self);
        // Also drops anything `f` left pushed.
        self.transforms.chain.truncate(depth);
        out
    }

    /// The transform stack currently active.
    pub fn transforms(&self) -> &TransformStack {
        &self.transforms
    }
}
