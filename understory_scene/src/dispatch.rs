// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and custom event dispatch.
//!
//! Every pointer entry point resolves overlap first, so hover transitions are
//! delivered before the event itself. Presses and custom mouse events bubble
//! from the topmost hovered element to its ancestors until a hook consumes
//! them. Moves go to every hovered element, or to the pressed element alone
//! while one holds the pointer.

use alloc::vec::Vec;
use core::any::Any;

use kurbo::{Point, Vec2};
use tracing::debug;
use understory_responder::router::{bubble, first_consumer};
use understory_responder::types::Outcome;

use crate::scene::Scene;
use crate::types::{ElementId, MouseButton};

impl Scene {
    /// The element that accepted the current press, if any button is still down on it.
    pub fn pressed_element(&self) -> Option<ElementId> {
        self.router.captured()
    }

    /// Move the pointer to `point` (scene space) and deliver `mouse_moved`.
    ///
    /// While an element is pressed it alone receives the move, hovered or not.
    /// Otherwise every hovered element receives it, each in its own coordinates.
    pub fn move_mouse(&mut self, point: Point, delta: Vec2) {
        self.pointer = Some(point);
        self.resolve_overlapping_elements();
        for id in self.router.move_targets(self.hover.current()) {
            let class = self.class_of(id).clone();
            if let Some(hook) = &class.mouse_moved
                && let Some(local) = self.relative_mouse(id)
            {
                hook(self, id, local, delta);
            }
        }
    }

    /// Press `button` over the topmost hovered element and bubble it to a consumer.
    ///
    /// Returns the element that consumed the press, which becomes the
    /// [`pressed_element`](Self::pressed_element).
    pub fn press_mouse(&mut self, button: MouseButton) -> Option<ElementId> {
        self.press_mouse_with(button, |_, _| {})
    }

    /// Like [`press_mouse`](Self::press_mouse), calling `before` with the press
    /// candidate after overlap is resolved and before any hook fires.
    pub fn press_mouse_with(
        &mut self,
        button: MouseButton,
        before: impl FnOnce(&mut Self, Option<ElementId>),
    ) -> Option<ElementId> {
        self.resolve_overlapping_elements();
        let candidate = self.hover.top();
        before(self, candidate);
        let consumer = candidate.and_then(|start| {
            bubble(self, start, |scene, id| scene.deliver_press(id, button))
        });
        let previous = self.router.capture(consumer);
        if let Some(prev) = previous
            && previous != consumer
        {
            // Keep "pressed buttons" and "pressed element" in step.
            self.element_mut(prev).pressed.clear();
        }
        debug!(?button, ?candidate, ?consumer, "mouse pressed");
        consumer
    }

    /// Release `button`.
    ///
    /// The pressed element gets `mouse_released`, then `mouse_clicked` if the
    /// button went down on it and it is still hovered. Every other hovered element
    /// gets `mouse_released` as a plain notification. Returns the clicked element.
    pub fn release_mouse(&mut self, button: MouseButton) -> Option<ElementId> {
        self.resolve_overlapping_elements();
        let pressed = self.router.captured();
        let mut clicked = None;
        if let Some(id) = pressed {
            let was_pressed = self.element_mut(id).release(button);
            let class = self.class_of(id).clone();
            if let Some(hook) = &class.mouse_released {
                hook(self, id, button);
            }
            if was_pressed
                && self.is_hovered(id)
                && let Some(hook) = &class.mouse_clicked
            {
                hook(self, id, button);
                clicked = Some(id);
            }
            if self.element(id).pressed.is_empty() {
                self.router.release(id);
            }
        }
        let others: Vec<ElementId> = self
            .hover
            .current()
            .iter()
            .copied()
            .filter(|&id| Some(id) != pressed)
            .collect();
        for id in others {
            let class = self.class_of(id).clone();
            if let Some(hook) = &class.mouse_released {
                hook(self, id, button);
            }
        }
        debug!(?button, ?pressed, ?clicked, "mouse released");
        clicked
    }

    /// Deliver a wheel delta to the frontmost hovered element implementing `wheel_moved`.
    pub fn wheel_moved(&mut self, delta: Vec2) -> Option<ElementId> {
        self.resolve_overlapping_elements();
        let front_to_back: Vec<ElementId> = self.hover.current().iter().rev().copied().collect();
        first_consumer(self, front_to_back, |scene, id| {
            let class = scene.class_of(id).clone();
            match &class.wheel_moved {
                Some(hook) => {
                    hook(scene, id, delta);
                    Outcome::Consumed
                }
                None => Outcome::Continue,
            }
        })
    }

    /// Bubble the named event from the topmost hovered element, like a press.
    ///
    /// Elements without a hook for `name` pass it to their parent. Returns the
    /// consuming element.
    pub fn raise_mouse_event(&mut self, name: &str, args: &dyn Any) -> Option<ElementId> {
        self.resolve_overlapping_elements();
        let start = self.hover.top()?;
        let consumer = bubble(self, start, |scene, id| {
            let class = scene.class_of(id).clone();
            match class.event(name) {
                Some(hook) => hook(scene, id, args),
                None => Outcome::Continue,
            }
        });
        debug!(name, ?start, ?consumer, "mouse event raised");
        consumer
    }

    /// Call the named event on every element rendered this frame, in render order.
    pub fn raise_event(&mut self, name: &str, args: &dyn Any) {
        let targets = self.rendered().to_vec();
        for id in targets {
            let class = self.class_of(id).clone();
            if let Some(hook) = class.event(name) {
                let _ = hook(self, id, args);
            }
        }
    }

    fn deliver_press(&mut self, id: ElementId, button: MouseButton) -> Outcome {
        self.element_mut(id).press(button);
        let class = self.class_of(id).clone();
        let outcome = match &class.mouse_pressed {
            Some(hook) => hook(self, id, button),
            // A click hook absorbs the press so the release can complete the click.
            None if class.mouse_clicked.is_some() => Outcome::Consumed,
            None => Outcome::Continue,
        };
        if !outcome.is_consumed() {
            self.element_mut(id).release(button);
        }
        outcome
    }
}
