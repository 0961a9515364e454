// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the responder: handler outcomes and parent lookups.
//!
//! ## Overview
//!
//! These types describe the responder protocol and its inputs/outputs.
//! They are referenced by the [`router`](crate::router) and used by downstream toolkits.

/// Handler outcome controlling propagation.
///
/// Returned (directly or via [`Into`]) by per-node handlers walked by
/// [`bubble`](crate::router::bubble) and [`first_consumer`](crate::router::first_consumer).
///
/// A handler that has nothing to say consumes the event: [`Outcome::default`] is
/// [`Consumed`](Outcome::Consumed), and `()` converts to it. Only an explicit
/// `false` lets the event continue to the next responder.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Outcome {
    /// The handler took the event; propagation stops here.
    #[default]
    Consumed,
    /// The handler declined the event; propagation continues.
    Continue,
}

impl Outcome {
    /// Returns true for [`Outcome::Consumed`].
    #[inline]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

impl From<()> for Outcome {
    #[inline]
    fn from((): ()) -> Self {
        Self::Consumed
    }
}

impl From<bool> for Outcome {
    #[inline]
    fn from(consumed: bool) -> Self {
        if consumed {
            Self::Consumed
        } else {
            Self::Continue
        }
    }
}

impl From<Option<bool>> for Outcome {
    /// `None` and `Some(true)` consume; `Some(false)` continues.
    #[inline]
    fn from(consumed: Option<bool>) -> Self {
        consumed.unwrap_or(true).into()
    }
}

/// Look up the parent of a node to walk the responder chain towards the root.
///
/// Implemented by whatever owns the hierarchy (for example a scene arena). The
/// walk in [`bubble`](crate::router::bubble) consults it after every declined
/// delivery, so the lookup always observes the current hierarchy.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_outcome_consumes() {
        assert_eq!(Outcome::default(), Outcome::Consumed);
        assert!(Outcome::default().is_consumed());
    }

    #[test]
    fn unit_return_consumes() {
        assert_eq!(Outcome::from(()), Outcome::Consumed);
    }

    #[test]
    fn bool_conversions() {
        assert_eq!(Outcome::from(true), Outcome::Consumed);
        assert_eq!(Outcome::from(false), Outcome::Continue);
        assert!(!Outcome::Continue.is_consumed());
    }

    #[test]
    fn absent_answer_consumes() {
        assert_eq!(Outcome::from(None::<bool>), Outcome::Consumed);
        assert_eq!(Outcome::from(Some(true)), Outcome::Consumed);
        assert_eq!(Outcome::from(Some(false)), Outcome::Continue);
    }
}
