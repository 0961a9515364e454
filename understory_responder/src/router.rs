// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router implementation.
//!
//! ## Overview
//!
//! Picks the responders for a pointer event and walks them until one consumes it.
//!
//! ## Target Selection
//!
//! - Hits are supplied back-to-front: the last hit is the topmost.
//! - Button-like events go to the topmost hit and then [`bubble`] towards the root.
//! - Move-like events go to every hit, unless a node holds the pointer capture.
//! - Wheel-like events go to the [`first_consumer`] walking front to back.
//!
//! ## Pointer capture
//!
//! [`Router::capture`] records the node that accepted a press. While it is set,
//! [`Router::move_targets`] routes to the captured node regardless of fresh hits.
//!
//! ## See Also
//!
//! [`hover`](crate::hover) for enter/leave transitions between successive hit sets.

use alloc::vec;
use alloc::vec::Vec;

use crate::types::{Outcome, ParentLookup};

/// Pointer capture holder and target selection.
///
/// ## Usage
///
/// - Call [`Router::top`] to pick where a press starts, then [`bubble`] it.
/// - Store the consumer with [`Router::capture`]; clear it when the last button
///   goes up.
/// - Call [`Router::move_targets`] each pointer move to get the recipients.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Router<K> {
    capture: Option<K>,
}

impl<K> Default for Router<K> {
    fn default() -> Self {
        Self { capture: None }
    }
}

impl<K: Copy + Eq> Router<K> {
    /// Create a router without capture.
    pub const fn new() -> Self {
        Self { capture: None }
    }

    /// Set the captured node, returning the previous one.
    pub fn capture(&mut self, node: Option<K>) -> Option<K> {
        core::mem::replace(&mut self.capture, node)
    }

    /// Release capture if it is held by `node`.
    pub fn release(&mut self, node: K) -> bool {
        if self.capture == Some(node) {
            self.capture = None;
            true
        } else {
            false
        }
    }

    /// The node currently holding the pointer capture.
    pub fn captured(&self) -> Option<K> {
        self.capture
    }

    /// The topmost hit (hits are ordered back-to-front).
    pub fn top(hits: &[K]) -> Option<K> {
        hits.last().copied()
    }

    /// Recipients of a move-like event: the captured node alone, or every hit.
    pub fn move_targets(&self, hits: &[K]) -> Vec<K> {
        match self.capture {
            Some(cap) => vec![cap],
            None => hits.to_vec(),
        }
    }
}

/// Deliver to `start`, then to each ancestor in turn, until a delivery is consumed.
///
/// Returns the consuming node, or `None` when the walk ran off the root.
/// The parent is looked up on `cx` after each declined delivery, so handlers
/// see (and may use) the context mutably. Caller ensures acyclic ancestry.
pub fn bubble<C, K, F>(cx: &mut C, start: K, mut deliver: F) -> Option<K>
where
    C: ParentLookup<K> + ?Sized,
    K: Copy,
    F: FnMut(&mut C, K) -> Outcome,
{
    let mut current = start;
    loop {
        if deliver(cx, current).is_consumed() {
            return Some(current);
        }
        current = cx.parent_of(&current)?;
    }
}

/// Deliver to each candidate in order, stopping at the first that consumes.
///
/// No bubbling: candidates that decline are simply skipped.
pub fn first_consumer<C, K, I, F>(cx: &mut C, candidates: I, mut deliver: F) -> Option<K>
where
    C: ?Sized,
    I: IntoIterator<Item = K>,
    K: Copy,
    F: FnMut(&mut C, K) -> Outcome,
{
    candidates
        .into_iter()
        .find(|&k| deliver(cx, k).is_consumed())
}

/// Collect the responder chain from `start` up to its root (inclusive).
pub fn chain<K: Copy>(start: K, lookup: &impl ParentLookup<K>) -> Vec<K> {
    let mut out = Vec::new();
    let mut cur = start;
    loop {
        out.push(cur);
        match lookup.parent_of(&cur) {
            Some(p) => cur = p,
            None => break,
        }
    }
    out
}
