// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions between hit sets.
//!
//! ## Usage
//!
//! 1) Resolve the full set of nodes under the pointer, back-to-front.
//! 2) Call [`HoverState::update`] with that set to get `Leave(..)` / `Enter(..)` transitions.
//! 3) Deliver the transitions only after the set is complete, never mid-pass.
//!
//! ## Minimal example
//!
//! ```
//! use understory_responder::hover::{HoverState, HoverEvent};
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.update(&[1, 2]), vec![HoverEvent::Enter(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.update(&[1, 3]), vec![HoverEvent::Leave(2), HoverEvent::Enter(3)]);
//! ```

use alloc::vec::Vec;

/// A simple hover state machine over ordered hit sets.
///
/// Tracks the current hovered set (back-to-front) and, when updated with a new
/// set, computes the leave and enter transitions to move from the old state to
/// the new state.
///
/// Ordering semantics:
/// - All leave events come first, in the order the nodes had in the old set.
/// - Enter events follow, in the order the nodes have in the new set.
///
/// Nodes present in both sets produce no event, even if their position changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Vec<K>,
}

/// A hover transition event.
///
/// Returned by [`HoverState::update`] and [`HoverState::clear`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer enters the given node.
    Enter(K),
    /// Pointer leaves the given node.
    Leave(K),
}

impl<K: Copy + Eq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// Return the current hovered set, back-to-front.
    pub fn current(&self) -> &[K] {
        &self.current
    }

    /// Return the topmost hovered node, if any.
    pub fn top(&self) -> Option<K> {
        self.current.last().copied()
    }

    /// Returns true if `node` is in the current set.
    pub fn contains(&self, node: K) -> bool {
        self.current.contains(&node)
    }

    /// Clear the current set, returning the corresponding leave events.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        let out = self.current.iter().map(|&k| HoverEvent::Leave(k)).collect();
        self.current.clear();
        out
    }

    /// Drop nodes rejected by `keep` from the current set without reporting a leave.
    ///
    /// A later [`update`](Self::update) will not report them either.
    pub fn retain_silently(&mut self, keep: impl FnMut(&K) -> bool) {
        self.current.retain(keep);
    }

    /// Update the hovered set and return the leave/enter events required to
    /// transition from the previous set to `new_set`.
    pub fn update(&mut self, new_set: &[K]) -> Vec<HoverEvent<K>> {
        let mut out = Vec::new();
        for &k in &self.current {
            if !new_set.contains(&k) {
                out.push(HoverEvent::Leave(k));
            }
        }
        for &k in new_set {
            if !self.current.contains(&k) {
                out.push(HoverEvent::Enter(k));
            }
        }
        self.current.clear();
        self.current.extend_from_slice(new_set);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    // Fresh set: enters in set order.
    #[test]
    fn hover_enter_on_fresh_set() {
        let mut h: HoverState<u32> = HoverState::new();
        let ev = h.update(&[1, 2, 3]);
        assert_eq!(
            ev,
            vec![
                HoverEvent::Enter(1),
                HoverEvent::Enter(2),
                HoverEvent::Enter(3)
            ]
        );
        assert_eq!(h.current(), &[1, 2, 3]);
        assert_eq!(h.top(), Some(3));
    }

    #[test]
    fn hover_leave_to_empty() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update(&[1, 2]);
        let ev = h.clear();
        assert_eq!(ev, vec![HoverEvent::Leave(1), HoverEvent::Leave(2)]);
        assert!(h.current().is_empty());
        assert_eq!(h.top(), None);
    }

    // Leaves are all reported before any enter.
    #[test]
    fn hover_leaves_precede_enters() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update(&[1, 2, 3]);
        let ev = h.update(&[1, 4]);
        assert_eq!(
            ev,
            vec![
                HoverEvent::Leave(2),
                HoverEvent::Leave(3),
                HoverEvent::Enter(4)
            ]
        );
        assert_eq!(h.current(), &[1, 4]);
    }

    #[test]
    fn hover_disjoint_sets() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update(&[1, 2]);
        let ev = h.update(&[4, 5]);
        assert_eq!(
            ev,
            vec![
                HoverEvent::Leave(1),
                HoverEvent::Leave(2),
                HoverEvent::Enter(4),
                HoverEvent::Enter(5),
            ]
        );
    }

    #[test]
    fn silently_dropped_nodes_never_leave() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update(&[1, 2, 3]);
        h.retain_silently(|&k| k != 2);
        assert_eq!(h.current(), &[1, 3]);
        let ev = h.update(&[1]);
        assert_eq!(ev, vec![HoverEvent::Leave(3)], "2 was already gone");
    }

    // Reordering alone is not a transition.
    #[test]
    fn hover_reorder_no_events() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update(&[7, 8]);
        assert!(h.update(&[8, 7]).is_empty());
        assert_eq!(h.current(), &[8, 7]);
        assert!(h.contains(7));
        assert!(!h.contains(9));
    }
}
