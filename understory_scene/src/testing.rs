// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test fixture: a scene whose render hooks replay a declared layout.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Point, Rect, Size};

use crate::class::ElementClass;
use crate::scene::Scene;
use crate::types::{ElementId, MouseButton};

/// A hook invocation seen by a recording class.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Event {
    Entered,
    Exited,
    Pressed(MouseButton),
    Released(MouseButton),
    Clicked(MouseButton),
    Moved(Point),
    Wheel,
    Resized(Size, Size),
    Custom(u32),
}

pub(crate) type Log = Rc<RefCell<Vec<(ElementId, Event)>>>;

type Layout = Rc<RefCell<BTreeMap<Option<ElementId>, Vec<(ElementId, Rect)>>>>;

/// Children are keyed by parent; `None` holds the roots.
pub(crate) struct Fixture {
    pub(crate) scene: Scene,
    pub(crate) log: Log,
    layout: Layout,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self {
            scene: Scene::new(),
            log: Rc::default(),
            layout: Rc::default(),
        }
    }

    fn base(&self, name: &'static str) -> ElementClass {
        let layout = self.layout.clone();
        ElementClass::new(name, move |scene, id, _| {
            let children = layout.borrow().get(&Some(id)).cloned().unwrap_or_default();
            for (child, view) in children {
                scene.render(child, view);
            }
        })
    }

    /// A class that only renders its children.
    pub(crate) fn node(&self, name: &'static str) -> Rc<ElementClass> {
        Rc::new(self.base(name))
    }

    fn recording(&self, name: &'static str) -> ElementClass {
        let (enter, exit, release) = (self.log.clone(), self.log.clone(), self.log.clone());
        self.base(name)
            .on_mouse_entered(move |_, id| enter.borrow_mut().push((id, Event::Entered)))
            .on_mouse_exited(move |_, id| exit.borrow_mut().push((id, Event::Exited)))
            .on_mouse_released(move |_, id, b| release.borrow_mut().push((id, Event::Released(b))))
    }

    /// Renders children and logs enter, exit and release.
    pub(crate) fn recorded(&self, name: &'static str) -> Rc<ElementClass> {
        Rc::new(self.recording(name))
    }

    /// A recording class with extra hooks added by `f`.
    pub(crate) fn class(
        &self,
        name: &'static str,
        f: impl FnOnce(ElementClass) -> ElementClass,
    ) -> Rc<ElementClass> {
        Rc::new(f(self.recording(name)))
    }

    pub(crate) fn add(
        &mut self,
        class: &Rc<ElementClass>,
        parent: Option<ElementId>,
        view: Rect,
    ) -> ElementId {
        let id = self.scene.create_element(class);
        self.layout
            .borrow_mut()
            .entry(parent)
            .or_default()
            .push((id, view));
        id
    }

    fn take(&mut self, id: ElementId) -> Option<Rect> {
        let mut layout = self.layout.borrow_mut();
        for children in layout.values_mut() {
            if let Some(pos) = children.iter().position(|(c, _)| *c == id) {
                return Some(children.remove(pos).1);
            }
        }
        None
    }

    pub(crate) fn reparent(&mut self, id: ElementId, parent: Option<ElementId>) {
        let view = self.take(id).expect("element is laid out");
        self.layout
            .borrow_mut()
            .entry(parent)
            .or_default()
            .push((id, view));
    }

    pub(crate) fn set_view(&mut self, id: ElementId, view: Rect) {
        let mut layout = self.layout.borrow_mut();
        for children in layout.values_mut() {
            for entry in children.iter_mut().filter(|(c, _)| *c == id) {
                entry.1 = view;
            }
        }
    }

    /// Stop rendering `id` (and so its subtree).
    pub(crate) fn hide(&mut self, id: ElementId) {
        let _ = self.take(id);
    }

    /// Run one frame that renders every root.
    pub(crate) fn frame(&mut self) {
        let roots = self
            .layout
            .borrow()
            .get(&None)
            .cloned()
            .unwrap_or_default();
        self.scene
            .frame(|scene| {
                for (id, view) in roots {
                    scene.render(id, view);
                }
            })
            .unwrap();
    }

    pub(crate) fn take_log(&mut self) -> Vec<(ElementId, Event)> {
        core::mem::take(&mut *self.log.borrow_mut())
    }
}
