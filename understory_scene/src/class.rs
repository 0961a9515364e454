// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element classes: the hook table shared by every element of a kind.
//!
//! A class is a struct of optional handler slots. The scene checks a slot for
//! presence before calling it, and an empty slot is a silent no-op. Every hook
//! receives the scene and the element it fires for, so hooks can query state,
//! render children, or raise further events.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;

use kurbo::{Point, Rect, Size, Vec2};
use understory_responder::types::Outcome;

use crate::scene::Scene;
use crate::types::{ElementId, MouseButton};

pub(crate) type RenderHook = Box<dyn Fn(&mut Scene, ElementId, Rect)>;
pub(crate) type NotifyHook = Box<dyn Fn(&mut Scene, ElementId)>;
pub(crate) type ButtonHook = Box<dyn Fn(&mut Scene, ElementId, MouseButton)>;
pub(crate) type PressHook = Box<dyn Fn(&mut Scene, ElementId, MouseButton) -> Outcome>;
pub(crate) type MoveHook = Box<dyn Fn(&mut Scene, ElementId, Point, Vec2)>;
pub(crate) type WheelHook = Box<dyn Fn(&mut Scene, ElementId, Vec2)>;
pub(crate) type ResizeHook = Box<dyn Fn(&mut Scene, ElementId, Size, Size)>;
pub(crate) type MeasureHook = Box<dyn Fn(&Scene, ElementId) -> f64>;
pub(crate) type InitHook = Box<dyn Fn(&mut Scene, ElementId, &dyn Any)>;
pub(crate) type EventHook = Box<dyn Fn(&mut Scene, ElementId, &dyn Any) -> Outcome>;

/// The capability table for a kind of element.
///
/// Build one with [`ElementClass::new`] and the `on_*` methods, wrap it in an
/// [`Rc`](alloc::rc::Rc), and create elements from it with
/// [`Scene::create_element`].
///
/// Hooks that answer a press or a custom event return anything that converts into
/// [`Outcome`]: returning `()` (or `None`, or `true`) consumes the event, and only
/// `false` lets it bubble on to the parent.
///
/// ```
/// use std::rc::Rc;
/// use understory_scene::{ElementClass, MouseButton};
///
/// let button = Rc::new(
///     ElementClass::new("button", |_scene, _id, _rect| {
///         // Draw with your backend here.
///     })
///     .on_mouse_clicked(|_scene, _id, button| {
///         assert_eq!(button, MouseButton::PRIMARY);
///     }),
/// );
/// assert!(!button.has_event("activate"));
/// ```
pub struct ElementClass {
    name: &'static str,
    pub(crate) render: RenderHook,
    pub(crate) mouse_entered: Option<NotifyHook>,
    pub(crate) mouse_exited: Option<NotifyHook>,
    pub(crate) mouse_pressed: Option<PressHook>,
    pub(crate) mouse_released: Option<ButtonHook>,
    pub(crate) mouse_clicked: Option<ButtonHook>,
    pub(crate) mouse_moved: Option<MoveHook>,
    pub(crate) wheel_moved: Option<WheelHook>,
    pub(crate) resized: Option<ResizeHook>,
    pub(crate) desired_width: Option<MeasureHook>,
    pub(crate) desired_height: Option<MeasureHook>,
    pub(crate) init: Option<InitHook>,
    events: BTreeMap<String, EventHook>,
}

impl ElementClass {
    /// Create a class with the given render hook and no other hooks.
    ///
    /// `render` receives the element's view rectangle; any element rendered from
    /// inside it becomes a child of this element for the frame.
    pub fn new(name: &'static str, render: impl Fn(&mut Scene, ElementId, Rect) + 'static) -> Self {
        Self {
            name,
            render: Box::new(render),
            mouse_entered: None,
            mouse_exited: None,
            mouse_pressed: None,
            mouse_released: None,
            mouse_clicked: None,
            mouse_moved: None,
            wheel_moved: None,
            resized: None,
            desired_width: None,
            desired_height: None,
            init: None,
            events: BTreeMap::new(),
        }
    }

    /// Name of this class, used in logs and errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Called once the pointer starts hovering the element.
    pub fn on_mouse_entered(mut self, f: impl Fn(&mut Scene, ElementId) + 'static) -> Self {
        self.mouse_entered = Some(Box::new(f));
        self
    }

    /// Called once the pointer stops hovering the element.
    pub fn on_mouse_exited(mut self, f: impl Fn(&mut Scene, ElementId) + 'static) -> Self {
        self.mouse_exited = Some(Box::new(f));
        self
    }

    /// Called when a press reaches the element.
    ///
    /// Return `false` to decline; the press then moves on to the parent.
    pub fn on_mouse_pressed<R: Into<Outcome>>(
        mut self,
        f: impl Fn(&mut Scene, ElementId, MouseButton) -> R + 'static,
    ) -> Self {
        self.mouse_pressed = Some(Box::new(
            move |scene: &mut Scene, id: ElementId, button: MouseButton| -> Outcome {
                f(scene, id, button).into()
            },
        ));
        self
    }

    /// Called on release, for the pressed element and for every other hovered element.
    pub fn on_mouse_released(
        mut self,
        f: impl Fn(&mut Scene, ElementId, MouseButton) + 'static,
    ) -> Self {
        self.mouse_released = Some(Box::new(f));
        self
    }

    /// Called when a button is pressed and released on the element while it stays hovered.
    ///
    /// A class with a click hook and no press hook absorbs presses on its own.
    pub fn on_mouse_clicked(
        mut self,
        f: impl Fn(&mut Scene, ElementId, MouseButton) + 'static,
    ) -> Self {
        self.mouse_clicked = Some(Box::new(f));
        self
    }

    /// Called with the pointer in element-local coordinates and the raw delta.
    pub fn on_mouse_moved(
        mut self,
        f: impl Fn(&mut Scene, ElementId, Point, Vec2) + 'static,
    ) -> Self {
        self.mouse_moved = Some(Box::new(f));
        self
    }

    /// Called with the wheel delta, for the frontmost hovered implementer only.
    pub fn on_wheel_moved(mut self, f: impl Fn(&mut Scene, ElementId, Vec2) + 'static) -> Self {
        self.wheel_moved = Some(Box::new(f));
        self
    }

    /// Called from render when the size differs from the previous render, with
    /// the new size then the old one.
    pub fn on_resized(mut self, f: impl Fn(&mut Scene, ElementId, Size, Size) + 'static) -> Self {
        self.resized = Some(Box::new(f));
        self
    }

    /// Preferred width, see [`Scene::desired_width`].
    pub fn with_desired_width(mut self, f: impl Fn(&Scene, ElementId) -> f64 + 'static) -> Self {
        self.desired_width = Some(Box::new(f));
        self
    }

    /// Preferred height, see [`Scene::desired_height`].
    pub fn with_desired_height(mut self, f: impl Fn(&Scene, ElementId) -> f64 + 'static) -> Self {
        self.desired_height = Some(Box::new(f));
        self
    }

    /// Called once by [`Scene::create_element_with`] with the creation arguments.
    pub fn on_init(mut self, f: impl Fn(&mut Scene, ElementId, &dyn Any) + 'static) -> Self {
        self.init = Some(Box::new(f));
        self
    }

    /// Register a named hook reachable through [`Scene::raise_event`] and
    /// [`Scene::raise_mouse_event`].
    pub fn on_event<R: Into<Outcome>>(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&mut Scene, ElementId, &dyn Any) -> R + 'static,
    ) -> Self {
        self.events.insert(
            name.into(),
            Box::new(
                move |scene: &mut Scene, id: ElementId, args: &dyn Any| -> Outcome {
                    f(scene, id, args).into()
                },
            ),
        );
        self
    }

    /// Returns true if a named hook is registered under `name`.
    pub fn has_event(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    pub(crate) fn event(&self, name: &str) -> Option<&EventHook> {
        self.events.get(name)
    }
}

impl core::fmt::Debug for ElementClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut hooks: Vec<&str> = Vec::new();
        let slots = [
            ("mouse_entered", self.mouse_entered.is_some()),
            ("mouse_exited", self.mouse_exited.is_some()),
            ("mouse_pressed", self.mouse_pressed.is_some()),
            ("mouse_released", self.mouse_released.is_some()),
            ("mouse_clicked", self.mouse_clicked.is_some()),
            ("mouse_moved", self.mouse_moved.is_some()),
            ("wheel_moved", self.wheel_moved.is_some()),
            ("resized", self.resized.is_some()),
            ("desired_width", self.desired_width.is_some()),
            ("desired_height", self.desired_height.is_some()),
            ("init", self.init.is_some()),
        ];
        hooks.extend(slots.iter().filter(|(_, set)| *set).map(|(name, _)| *name));
        let events: Vec<&str> = self.events.keys().map(String::as_str).collect();
        f.debug_struct("ElementClass")
            .field("name", &self.name)
            .field("hooks", &hooks)
            .field("events", &events)
            .finish_non_exhaustive()
    }
}
