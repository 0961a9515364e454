// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element queries, configuration, and scoped value injection.

use alloc::boxed::Box;
use alloc::string::String;
use core::any::Any;

use kurbo::{Point, Rect};

use crate::error::SceneError;
use crate::scene::Scene;
use crate::transform::map_point;
use crate::types::{ElementFlags, ElementId, MouseButton};

impl Scene {
    /// View rectangle from the element's most recent render.
    ///
    /// Only meaningful between that render and the next [`begin`](Self::begin).
    pub fn view(&self, id: ElementId) -> Option<Rect> {
        self.element(id).view
    }

    /// View rectangle from the render before the most recent one.
    pub fn previous_view(&self, id: ElementId) -> Option<Rect> {
        self.element(id).prev_view
    }

    /// The element that was rendering when `id` last rendered.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).parent
    }

    /// The outermost ancestor of `id` (or `id` itself if it has no parent).
    pub fn root(&self, id: ElementId) -> ElementId {
        let mut cur = id;
        while let Some(p) = self.element(cur).parent {
            cur = p;
        }
        cur
    }

    /// Returns true if `other` is `id` or one of its descendants.
    pub fn is_in_hierarchy(&self, id: ElementId, other: ElementId) -> bool {
        let mut cur = Some(other);
        while let Some(c) = cur {
            if c == id {
                return true;
            }
            cur = self.element(c).parent;
        }
        false
    }

    /// Returns true if `ancestor` is a strict ancestor of `id`.
    pub(crate) fn is_ancestor(&self, ancestor: ElementId, id: ElementId) -> bool {
        ancestor != id && self.is_in_hierarchy(ancestor, id)
    }

    /// Returns true if the last overlap resolution found the pointer over `id`.
    pub fn is_hovered(&self, id: ElementId) -> bool {
        self.element(id).flags.contains(ElementFlags::HOVERED)
    }

    /// Hover state before the last overlap resolution.
    pub fn was_hovered(&self, id: ElementId) -> bool {
        self.element(id).flags.contains(ElementFlags::WAS_HOVERED)
    }

    /// Raw containment of the pointer in the element's view, ignoring anything in front of it.
    ///
    /// The pointer is mapped through the transforms active when the element rendered.
    pub fn is_mouse_over(&self, id: ElementId) -> bool {
        let Some(pointer) = self.pointer else {
            return false;
        };
        let el = self.element(id);
        el.view
            .is_some_and(|v| v.contains(map_point(&el.transforms, pointer)))
    }

    /// Returns true if `button` is down on `id`, or any button when `button` is `None`.
    pub fn is_pressed(&self, id: ElementId, button: Option<MouseButton>) -> bool {
        let pressed = &self.element(id).pressed;
        match button {
            Some(b) => pressed.contains(&b),
            None => !pressed.is_empty(),
        }
    }

    /// Buttons currently down on `id`, in press order.
    pub fn pressed_buttons(&self, id: ElementId) -> &[MouseButton] {
        &self.element(id).pressed
    }

    /// Pointer position in scene space, once known.
    pub fn absolute_mouse(&self) -> Option<Point> {
        self.pointer
    }

    /// Pointer position relative to the element's view origin.
    ///
    /// The pointer is first mapped through the transforms active when the element
    /// rendered. `None` until both the pointer and the view are known.
    pub fn relative_mouse(&self, id: ElementId) -> Option<Point> {
        let pointer = self.pointer?;
        let el = self.element(id);
        let origin = el.view?.origin();
        Some((map_point(&el.transforms, pointer) - origin).to_point())
    }

    /// Preferred width from the class's `desired_width` hook.
    pub fn desired_width(&self, id: ElementId) -> Result<f64, SceneError> {
        let class = self.class_of(id);
        let hook = class.desired_width.as_ref().ok_or(SceneError::MissingHook {
            class: class.name(),
            hook: "desired_width",
        })?;
        Ok(hook(self, id))
    }

    /// Preferred height from the class's `desired_height` hook.
    pub fn desired_height(&self, id: ElementId) -> Result<f64, SceneError> {
        let class = self.class_of(id);
        let hook = class
            .desired_height
            .as_ref()
            .ok_or(SceneError::MissingHook {
                class: class.name(),
                hook: "desired_height",
            })?;
        Ok(hook(self, id))
    }

    /// Make the descendants of `id` hoverable only while `id` is hovered.
    pub fn set_container(&mut self, id: ElementId, container: bool) {
        self.element_mut(id)
            .flags
            .set(ElementFlags::CONTAINER, container);
    }

    /// Returns true if `id` gates the hover state of its descendants.
    pub fn is_container(&self, id: ElementId) -> bool {
        self.element(id).flags.contains(ElementFlags::CONTAINER)
    }

    /// Let `id` be hovered regardless of its container ancestors.
    pub fn set_ignore_container(&mut self, id: ElementId, ignore: bool) {
        self.element_mut(id)
            .flags
            .set(ElementFlags::IGNORE_CONTAINER, ignore);
    }

    /// Current flags of `id`.
    pub fn flags(&self, id: ElementId) -> ElementFlags {
        self.element(id).flags
    }

    /// Make `value` available to `id` and its descendants under `key`.
    ///
    /// Replaces any value `id` already provided under the same key.
    pub fn provide<T: Any>(&mut self, id: ElementId, key: impl Into<String>, value: T) {
        self.element_mut(id)
            .provided
            .insert(key.into(), Box::new(value));
    }

    /// Look `key` up on `id`, then on each ancestor; the nearest provider wins.
    ///
    /// Returns `None` if no element in the chain provides `key`, or if the
    /// nearest provider's value is not a `T`. Ancestry is the one recorded by the
    /// most recent render, so call this during or after the element's first render.
    pub fn inject<T: Any>(&self, id: ElementId, key: &str) -> Option<&T> {
        let mut cur = Some(id);
        while let Some(c) = cur {
            let el = self.element(c);
            if let Some(value) = el.provided.get(key) {
                return value.downcast_ref::<T>();
            }
            cur = el.parent;
        }
        None
    }

    /// Run `f` once, at the start of the element's next render.
    ///
    /// The view is already updated when `f` runs and no hook has fired yet.
    pub fn next_render(&mut self, id: ElementId, f: impl FnOnce(&mut Self, ElementId) + 'static) {
        self.element_mut(id).next_render.push(Box::new(f));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::ElementClass;
    use crate::testing::Fixture;
    use crate::transform::PointerTransform;
    use alloc::rc::Rc;
    use kurbo::{Affine, Vec2};

    #[test]
    fn hierarchy_queries() {
        let mut fx = Fixture::new();
        let class = fx.node("node");
        let root = fx.add(&class, None, Rect::new(0.0, 0.0, 100.0, 100.0));
        let a = fx.add(&class, Some(root), Rect::new(0.0, 0.0, 50.0, 50.0));
        let b = fx.add(&class, Some(a), Rect::new(0.0, 0.0, 10.0, 10.0));
        let c = fx.add(&class, Some(root), Rect::new(50.0, 0.0, 100.0, 50.0));
        fx.frame();

        assert!(fx.scene.is_in_hierarchy(root, b));
        assert!(fx.scene.is_in_hierarchy(a, b));
        assert!(fx.scene.is_in_hierarchy(b, b), "an element is in its own hierarchy");
        assert!(!fx.scene.is_in_hierarchy(b, a));
        assert!(!fx.scene.is_in_hierarchy(c, b));
        assert!(fx.scene.is_ancestor(root, b));
        assert!(!fx.scene.is_ancestor(b, b));
        assert_eq!(fx.scene.root(c), root);
        assert_eq!(fx.scene.root(root), root);
    }

    #[test]
    fn inject_walks_up_and_nearest_wins() {
        let mut fx = Fixture::new();
        let class = fx.node("node");
        let root = fx.add(&class, None, Rect::new(0.0, 0.0, 100.0, 100.0));
        let mid = fx.add(&class, Some(root), Rect::new(0.0, 0.0, 50.0, 50.0));
        let leaf = fx.add(&class, Some(mid), Rect::new(0.0, 0.0, 10.0, 10.0));
        fx.frame();

        fx.scene.provide(root, "theme", "dark");
        fx.scene.provide(root, "scale", 2.0_f64);
        fx.scene.provide(mid, "theme", "light");

        assert_eq!(fx.scene.inject::<&str>(leaf, "theme"), Some(&"light"));
        assert_eq!(fx.scene.inject::<&str>(root, "theme"), Some(&"dark"));
        assert_eq!(fx.scene.inject::<f64>(leaf, "scale"), Some(&2.0));
        assert_eq!(fx.scene.inject::<f64>(leaf, "missing"), None);
    }

    #[test]
    fn inject_type_mismatch_stops_at_nearest() {
        let mut fx = Fixture::new();
        let class = fx.node("node");
        let root = fx.add(&class, None, Rect::new(0.0, 0.0, 100.0, 100.0));
        let leaf = fx.add(&class, Some(root), Rect::new(0.0, 0.0, 10.0, 10.0));
        fx.frame();
        fx.scene.provide(root, "value", 1_u32);
        fx.scene.provide(leaf, "value", "text");
        assert_eq!(fx.scene.inject::<u32>(leaf, "value"), None);
    }

    #[test]
    fn relative_mouse_without_transforms() {
        let mut fx = Fixture::new();
        let class = fx.node("node");
        let e = fx.add(&class, None, Rect::new(10.0, 20.0, 60.0, 70.0));
        fx.frame();
        assert_eq!(fx.scene.relative_mouse(e), None, "pointer not known yet");
        fx.scene.move_mouse(Point::new(15.0, 30.0), Vec2::ZERO);
        assert_eq!(fx.scene.absolute_mouse(), Some(Point::new(15.0, 30.0)));
        assert_eq!(fx.scene.relative_mouse(e), Some(Point::new(5.0, 10.0)));
    }

    #[test]
    fn relative_mouse_after_push_pop_round_trip() {
        let inner = Rc::new(ElementClass::new("inner", |_, _, _| {}));
        let mut scene = Scene::new();
        let shifted = scene.create_element(&inner);
        let plain = scene.create_element(&inner);
        scene
            .frame(|s| {
                for i in 1..=3 {
                    s.push_transform(PointerTransform::translate(Vec2::new(f64::from(i), 0.0)));
                }
                s.render(shifted, Rect::new(0.0, 0.0, 100.0, 100.0));
                for _ in 1..=3 {
                    s.pop_transform();
                }
                s.render(plain, Rect::new(5.0, 5.0, 50.0, 50.0));
            })
            .unwrap();
        scene.move_mouse(Point::new(20.0, 10.0), Vec2::ZERO);
        assert_eq!(scene.relative_mouse(plain), Some(Point::new(15.0, 5.0)));
        // 1 + 2 + 3 added on x.
        assert_eq!(scene.relative_mouse(shifted), Some(Point::new(26.0, 10.0)));
    }

    #[test]
    fn is_mouse_over_uses_stored_chain() {
        let inner = Rc::new(ElementClass::new("inner", |_, _, _| {}));
        let mut scene = Scene::new();
        let e = scene.create_element(&inner);
        scene
            .frame(|s| {
                // Content drawn scaled by 2 around the origin.
                s.with_transform(PointerTransform::affine(Affine::scale(2.0).inverse()), |s| {
                    s.render(e, Rect::new(0.0, 0.0, 10.0, 10.0));
                });
            })
            .unwrap();
        scene.move_mouse(Point::new(15.0, 15.0), Vec2::ZERO);
        assert!(scene.is_mouse_over(e), "(15, 15) maps to (7.5, 7.5)");
        scene.move_mouse(Point::new(25.0, 5.0), Vec2::ZERO);
        assert!(!scene.is_mouse_over(e));
    }

    #[test]
    fn desired_size_requires_hook() {
        let sized = Rc::new(
            ElementClass::new("label", |_, _, _| {}).with_desired_width(|_, _| 42.0),
        );
        let mut scene = Scene::new();
        let e = scene.create_element(&sized);
        assert_eq!(scene.desired_width(e), Ok(42.0));
        assert_eq!(
            scene.desired_height(e),
            Err(SceneError::MissingHook {
                class: "label",
                hook: "desired_height"
            })
        );
    }

    #[test]
    fn container_flags_round_trip() {
        let mut fx = Fixture::new();
        let class = fx.node("node");
        let e = fx.add(&class, None, Rect::new(0.0, 0.0, 1.0, 1.0));
        fx.scene.set_container(e, true);
        fx.scene.set_ignore_container(e, true);
        assert!(fx.scene.is_container(e));
        assert!(fx.scene.flags(e).contains(ElementFlags::IGNORE_CONTAINER));
        fx.scene.set_container(e, false);
        assert!(!fx.scene.is_container(e));
    }
}
