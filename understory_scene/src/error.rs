// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the scene.
//!
//! Every variant is an integration bug rather than a transient condition.
//! The scene is left exactly as it was before the failing call.

/// Usage errors surfaced by [`Scene`](crate::Scene).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// [`Scene::begin`](crate::Scene::begin) was called while a frame was already open.
    #[error("frame already begun; `finish` must be called before the next `begin`")]
    AlreadyBegun,
    /// [`Scene::finish`](crate::Scene::finish) was called without an open frame.
    #[error("no frame has begun")]
    NotBegun,
    /// [`Scene::finish`](crate::Scene::finish) found pointer transforms still pushed.
    #[error("unbalanced transform stack at finish: {depth} transform(s) still pushed")]
    UnbalancedTransforms {
        /// Number of transforms left on the stack.
        depth: usize,
    },
    /// A query needed a hook that the element's class does not provide.
    #[error("element class `{class}` has no `{hook}` hook")]
    MissingHook {
        /// Name of the element class.
        class: &'static str,
        /// Name of the missing hook.
        hook: &'static str,
    },
}
