// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_responder --heading-base-level=0

//! Understory Responder: a deterministic, `no_std` responder chain for pointer events.
//!
//! ## Overview
//!
//! This crate decides which nodes see a pointer event and in what order.
//! It does not perform hit testing and it does not own any handlers.
//! Instead, feed it the back-to-front set of nodes under the pointer (for example from a scene's overlap pass),
//! and drive delivery through small walks that stop as soon as a handler consumes the event.
//!
//! ## Consumption
//!
//! Handlers answer with an [`Outcome`](crate::types::Outcome).
//! Saying nothing consumes: [`Outcome::default`](crate::types::Outcome::default) is `Consumed`, and `()`,
//! `None` and `true` convert to it. Only an explicit `false` lets the event go on.
//!
//! ## Walks
//!
//! - [`bubble`](crate::router::bubble): start at a node and climb through [`ParentLookup`](crate::types::ParentLookup)
//!   until a handler consumes or the root declines.
//! - [`first_consumer`](crate::router::first_consumer): try candidates in order without climbing.
//!
//! ## Pointer capture
//!
//! [`Router`](crate::router::Router) remembers the node that accepted a press.
//! While it holds the capture, move events go to it alone regardless of fresh hits.
//!
//! ## Hover
//!
//! [`HoverState`](crate::hover::HoverState) diffs successive hit sets and emits every leave, then every enter.
//!
//! ## Example
//!
//! ```
//! use understory_responder::router::bubble;
//! use understory_responder::types::{Outcome, ParentLookup};
//!
//! struct Chain(Vec<u32>);
//! impl ParentLookup<u32> for Chain {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         (*node > 1).then(|| node - 1)
//!     }
//! }
//!
//! let mut seen = Chain(Vec::new());
//! // Node 3 declines, node 2 says nothing and therefore consumes.
//! let consumer = bubble(&mut seen, 3, |c, n| {
//!     c.0.push(n);
//!     if n == 3 { Outcome::Continue } else { Outcome::default() }
//! });
//! assert_eq!(consumer, Some(2));
//! assert_eq!(seen.0, vec![3, 2]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod hover;
pub mod router;
pub mod types;
