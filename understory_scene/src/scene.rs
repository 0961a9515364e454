// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core scene implementation: element arena, frame lifecycle, registration.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use core::hash::Hasher;

use kurbo::{Point, Rect};
use rustc_hash::FxHasher;
use tracing::{debug, warn};
use understory_responder::hover::HoverState;
use understory_responder::router::Router;
use understory_responder::types::ParentLookup;

use crate::class::ElementClass;
use crate::error::SceneError;
use crate::transform::{PointerTransform, TransformStack};
use crate::types::{ElementFlags, ElementId, MouseButton};

pub(crate) type PreRender = Box<dyn FnOnce(&mut Scene, ElementId)>;

/// Retained per-element state, re-registered every frame by [`Scene::render`].
pub(crate) struct Element {
    pub(crate) class: Rc<ElementClass>,
    pub(crate) view: Option<Rect>,
    pub(crate) prev_view: Option<Rect>,
    pub(crate) flags: ElementFlags,
    pub(crate) pressed: Vec<MouseButton>,
    pub(crate) parent: Option<ElementId>,
    pub(crate) transforms: Vec<PointerTransform>,
    pub(crate) provided: BTreeMap<String, Box<dyn Any>>,
    pub(crate) next_render: Vec<PreRender>,
    /// Frame this element last rendered in; 0 means never.
    pub(crate) frame: u64,
}

impl Element {
    fn new(class: Rc<ElementClass>) -> Self {
        Self {
            class,
            view: None,
            prev_view: None,
            flags: ElementFlags::empty(),
            pressed: Vec::new(),
            parent: None,
            transforms: Vec::new(),
            provided: BTreeMap::new(),
            next_render: Vec::new(),
            frame: 0,
        }
    }

    pub(crate) fn press(&mut self, button: MouseButton) {
        if !self.pressed.contains(&button) {
            self.pressed.push(button);
        }
    }

    /// Returns true if `button` was pressed.
    pub(crate) fn release(&mut self, button: MouseButton) -> bool {
        let before = self.pressed.len();
        self.pressed.retain(|b| *b != button);
        self.pressed.len() != before
    }
}

/// The per-frame coordinator: owns the elements, the render lists, and the pointer state.
///
/// ## Frame
///
/// Call [`begin`](Self::begin), render the root elements with
/// [`render`](Self::render) (their render hooks render the children), then call
/// [`finish`](Self::finish). Feed input with [`move_mouse`](Self::move_mouse),
/// [`press_mouse`](Self::press_mouse), [`release_mouse`](Self::release_mouse) and
/// [`wheel_moved`](Self::wheel_moved).
pub struct Scene {
    elements: Vec<Element>,
    render_list: Vec<ElementId>,
    prev_render_list: Vec<ElementId>,
    render_hash: u64,
    prev_render_hash: u64,
    frame: u64,
    begun: bool,
    render_stack: Vec<ElementId>,
    pub(crate) transforms: TransformStack,
    pub(crate) pointer: Option<Point>,
    pub(crate) router: Router<ElementId>,
    pub(crate) hover: HoverState<ElementId>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scene")
            .field("elements", &self.elements.len())
            .field("rendered", &self.render_list.len())
            .field("frame", &self.frame)
            .field("begun", &self.begun)
            .field("pointer", &self.pointer)
            .field("pressed", &self.router.captured())
            .field("overlapping", &self.hover.current())
            .finish_non_exhaustive()
    }
}

impl ParentLookup<ElementId> for Scene {
    fn parent_of(&self, node: &ElementId) -> Option<ElementId> {
        self.element(*node).parent
    }
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            render_list: Vec::new(),
            prev_render_list: Vec::new(),
            render_hash: 0,
            prev_render_hash: 0,
            frame: 0,
            begun: false,
            render_stack: Vec::new(),
            transforms: TransformStack::new(),
            pointer: None,
            router: Router::new(),
            hover: HoverState::new(),
        }
    }

    /// Create an element of `class`, bound to this scene.
    pub fn create_element(&mut self, class: &Rc<ElementClass>) -> ElementId {
        self.create_element_with(class, &())
    }

    /// Create an element of `class` and run its `init` hook with `args`.
    pub fn create_element_with(&mut self, class: &Rc<ElementClass>, args: &dyn Any) -> ElementId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElementId uses 32-bit indices by design."
        )]
        let id = ElementId::new(self.elements.len() as u32);
        self.elements.push(Element::new(class.clone()));
        if let Some(init) = &class.init {
            init(self, id, args);
        }
        id
    }

    /// The class an element was created from.
    pub fn class_of(&self, id: ElementId) -> &Rc<ElementClass> {
        &self.element(id).class
    }

    /// Open a frame.
    ///
    /// The current render list becomes the previous one and registration starts
    /// from an empty list.
    pub fn begin(&mut self) -> Result<(), SceneError> {
        if self.begun {
            return Err(SceneError::AlreadyBegun);
        }
        core::mem::swap(&mut self.render_list, &mut self.prev_render_list);
        self.render_list.clear();
        self.prev_render_hash = self.render_hash;
        self.render_hash = 0;
        self.render_stack.clear();
        self.frame += 1;
        self.begun = true;
        debug!(frame = self.frame, "begin frame");
        Ok(())
    }

    /// Close the frame.
    ///
    /// Elements that rendered last frame but not this one lose their hover state
    /// without a `mouse_exited` call, now or on any later resolution. If the set of rendered elements changed and
    /// the pointer position is known, overlap is resolved again right away so hover
    /// queries are current.
    pub fn finish(&mut self) -> Result<(), SceneError> {
        if !self.begun {
            return Err(SceneError::NotBegun);
        }
        if !self.transforms.is_empty() {
            return Err(SceneError::UnbalancedTransforms {
                depth: self.transforms.len(),
            });
        }
        self.begun = false;
        let frame = self.frame;
        for &id in &self.prev_render_list {
            let el = &mut self.elements[id.idx()];
            if el.frame != frame {
                el.flags.remove(ElementFlags::HOVERED);
            }
        }
        let elements = &self.elements;
        self.hover.retain_silently(|id| elements[id.idx()].frame == frame);
        let changed = self.render_hash != self.prev_render_hash;
        debug!(
            frame,
            rendered = self.render_list.len(),
            changed,
            "finish frame"
        );
        if changed && self.pointer.is_some() {
            self.resolve_overlapping_elements();
        }
        Ok(())
    }

    /// Run `f` between [`begin`](Self::begin) and [`finish`](Self::finish).
    pub fn frame<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> Result<R, SceneError> {
        self.begin()?;
        let out = f(self);
        self.finish()?;
        Ok(out)
    }

    /// Returns true between [`begin`](Self::begin) and [`finish`](Self::finish).
    pub fn is_begun(&self) -> bool {
        self.begun
    }

    /// Elements rendered in the current frame, in render order.
    pub fn rendered(&self) -> &[ElementId] {
        &self.render_list
    }

    /// Elements rendered in the previous frame, in render order.
    pub fn previous_rendered(&self) -> &[ElementId] {
        &self.prev_render_list
    }

    /// Register `id` for this frame with view rectangle `view`, then run its hooks.
    ///
    /// Its parent is whichever element is rendering when this is called (none for
    /// a root). Queued [`next_render`](Self::next_render) callbacks run first, then
    /// `resized` if the size changed since the previous render, then `render`.
    /// Elements rendered later are in front of elements rendered earlier.
    ///
    /// Outside a frame this logs a warning and does nothing.
    pub fn render(&mut self, id: ElementId, view: Rect) {
        if !self.begun {
            warn!(?id, "render called outside of begin/finish; ignored");
            return;
        }
        let parent = self.render_stack.last().copied();
        self.render_stack.push(id);
        self.render_list.push(id);
        self.render_hash = fold_hash(self.render_hash, id);

        let frame = self.frame;
        let chain = self.transforms.as_slice().to_vec();
        let el = self.element_mut(id);
        el.parent = parent;
        el.frame = frame;
        el.transforms = chain;
        let prev = el.view.replace(view);
        el.prev_view = prev;
        let queued = core::mem::take(&mut el.next_render);
        let class = el.class.clone();

        for f in queued {
            f(self, id);
        }
        if let Some(prev) = prev
            && prev.size() != view.size()
            && let Some(resized) = &class.resized
        {
            resized(self, id, view.size(), prev.size());
        }
        (class.render)(self, id, view);

        self.render_stack.pop();
    }

    /// Access an element; panics if `id` was not created by this scene.
    pub(crate) fn element(&self, id: ElementId) -> &Element {
        self.elements.get(id.idx()).expect("dangling ElementId")
    }

    /// Access an element mutably; panics if `id` was not created by this scene.
    pub(crate) fn element_mut(&mut self, id: ElementId) -> &mut Element {
        self.elements.get_mut(id.idx()).expect("dangling ElementId")
    }
}

fn fold_hash(hash: u64, id: ElementId) -> u64 {
    let mut h = FxHasher::default();
    h.write_u64(hash);
    // Offset so that element 0 still perturbs a zero hash.
    h.write_u64(u64::from(id.0) + 1);
    h.finish()
}
