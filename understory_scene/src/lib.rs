// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scene --heading-base-level=0

//! Understory Scene: immediate-mode declared, retained-state input routing.
//!
//! Understory Scene is the part of a UI that answers "what is under the pointer, and who gets this
//! event?" for elements that are declared every frame by rendering them.
//!
//! - Elements persist across frames in an arena owned by a [`Scene`] and are addressed by [`ElementId`].
//! - Each frame re-registers the elements that render, in render order, and records each element's
//!   parent as the element whose render hook was running at the time.
//! - Pointer input is hit tested against the last registered rectangles, in each element's own
//!   coordinate space, then routed through the element's [`ElementClass`] hooks.
//!
//! ## Not a renderer
//!
//! Render hooks draw with whatever backend you choose. The scene only records where each element
//! was declared. It does no layout either: pass the rectangle you computed to [`Scene::render`].
//!
//! ## Frame lifecycle
//!
//! - [`Scene::begin`] swaps the current render list into the previous one and starts a new list.
//! - [`Scene::render`] registers an element, sets its view, runs pre-render callbacks, fires
//!   `resized` when the size changed, then calls the render hook.
//! - [`Scene::finish`] checks the transform stack is balanced and, if the rendered set changed and
//!   the pointer is known, resolves hover again so queries are current.
//!
//! Misuse of the lifecycle returns a [`SceneError`] and leaves the scene untouched.
//!
//! ## Hit testing
//!
//! [`Scene::resolve_overlapping_elements`] walks the render list front to back. An element
//! qualifies when the pointer, mapped through the [`PointerTransform`]s active at its registration,
//! lies inside its view. Qualifying later elements evict earlier ones unless the earlier one is an
//! ancestor, so the result is the topmost element plus the ancestors it was rendered inside.
//! Elements flagged as containers clip the hover of their descendants. Exit hooks fire before
//! enter hooks, and all of them fire after the pass is complete.
//!
//! ## Dispatch
//!
//! - Moves go to every hovered element, or only to the pressed element while a button is held.
//! - Presses go to the topmost hovered element and bubble to its parents until one consumes.
//! - Release reaches every hovered element; a click fires when the pressed element is still hovered.
//! - The wheel goes to the frontmost hovered element that has a wheel hook.
//! - Named events are raised either as pointer events ([`Scene::raise_mouse_event`]) or as a
//!   broadcast to every rendered element ([`Scene::raise_event`]).
//!
//! Hooks that answer return anything convertible into [`Outcome`]; only `false` declines.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kurbo::{Point, Rect, Vec2};
//! use understory_scene::{ElementClass, MouseButton, Scene};
//!
//! let clicks = Rc::new(Cell::new(0));
//! let counter = clicks.clone();
//! let button = Rc::new(
//!     ElementClass::new("button", |_scene, _id, _view| {})
//!         .on_mouse_clicked(move |_scene, _id, _button| counter.set(counter.get() + 1)),
//! );
//!
//! let mut scene = Scene::new();
//! let ok = scene.create_element(&button);
//! scene
//!     .frame(|scene| scene.render(ok, Rect::new(0.0, 0.0, 80.0, 24.0)))
//!     .unwrap();
//!
//! scene.move_mouse(Point::new(10.0, 10.0), Vec2::ZERO);
//! assert!(scene.is_hovered(ok));
//! assert_eq!(scene.press_mouse(MouseButton::PRIMARY), Some(ok));
//! assert_eq!(scene.release_mouse(MouseButton::PRIMARY), Some(ok));
//! assert_eq!(clicks.get(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod class;
mod dispatch;
mod element;
mod error;
mod resolve;
mod scene;
#[cfg(test)]
mod testing;
mod transform;
mod types;

pub use class::ElementClass;
pub use error::SceneError;
pub use scene::Scene;
pub use transform::{PointerTransform, TransformStack};
pub use types::{ElementFlags, ElementId, MouseButton};
pub use understory_responder::types::Outcome;
