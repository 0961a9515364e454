// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap resolution: which rendered elements are under the pointer.
//!
//! ## Ordering
//!
//! Render order is z-order: an element rendered later is in front of every
//! element rendered before it. The pass walks the current render list once,
//! front-to-back order being the reverse of the walk.
//!
//! ## Tie-break
//!
//! When several unrelated elements contain the pointer, only the last rendered
//! survives; evicted elements are no longer hovered. An element never evicts
//! its own ancestors, so a hovered child keeps its parent hovered.
//!
//! ## Containers
//!
//! An element below a container is hoverable only while its nearest container
//! ancestor is hovered, unless it is flagged to ignore containers. Parents
//! render before their children, so the container's flag for this pass is
//! already known when its descendants are visited.

use alloc::vec::Vec;

use kurbo::Point;
use tracing::trace;
use understory_responder::hover::HoverEvent;

use crate::scene::Scene;
use crate::transform::map_point;
use crate::types::{ElementFlags, ElementId};

impl Scene {
    /// Recompute the set of elements under the pointer and deliver hover transitions.
    ///
    /// Runs automatically before every pointer event and from
    /// [`finish`](Self::finish) when the rendered set changed. Every
    /// `mouse_exited` is delivered, then every `mouse_entered`, and only after
    /// the whole pass; hooks never observe a half-updated state.
    ///
    /// Does nothing until the pointer position is known.
    pub fn resolve_overlapping_elements(&mut self) {
        let Some(pointer) = self.pointer else {
            return;
        };
        let mut overlapping: Vec<ElementId> = Vec::new();
        for n in 0..self.rendered().len() {
            let id = self.rendered()[n];
            let el = self.element_mut(id);
            let was = el.flags.contains(ElementFlags::HOVERED);
            el.flags.set(ElementFlags::WAS_HOVERED, was);
            el.flags.remove(ElementFlags::HOVERED);

            if !self.contains_pointer(id, pointer) || !self.hover_eligible(id) {
                continue;
            }
            let mut i = 0;
            while i < overlapping.len() {
                let other = overlapping[i];
                if self.is_ancestor(other, id) {
                    i += 1;
                } else {
                    overlapping.remove(i);
                    self.element_mut(other).flags.remove(ElementFlags::HOVERED);
                }
            }
            self.element_mut(id).flags.insert(ElementFlags::HOVERED);
            overlapping.push(id);
        }
        trace!(?pointer, ?overlapping, "resolved overlap");

        for transition in self.hover.update(&overlapping) {
            match transition {
                HoverEvent::Leave(id) => {
                    let class = self.class_of(id).clone();
                    trace!(?id, class = class.name(), "mouse exited");
                    if let Some(hook) = &class.mouse_exited {
                        hook(self, id);
                    }
                }
                HoverEvent::Enter(id) => {
                    let class = self.class_of(id).clone();
                    trace!(?id, class = class.name(), "mouse entered");
                    if let Some(hook) = &class.mouse_entered {
                        hook(self, id);
                    }
                }
            }
        }
    }

    /// Elements under the pointer as of the last resolution, back to front.
    pub fn overlapping(&self) -> &[ElementId] {
        self.hover.current()
    }

    /// The frontmost element under the pointer as of the last resolution.
    pub fn topmost(&self) -> Option<ElementId> {
        self.hover.top()
    }

    fn contains_pointer(&self, id: ElementId, pointer: Point) -> bool {
        let el = self.element(id);
        el.view
            .is_some_and(|v| v.contains(map_point(&el.transforms, pointer)))
    }

    fn hover_eligible(&self, id: ElementId) -> bool {
        if self.element(id).flags.contains(ElementFlags::IGNORE_CONTAINER) {
            return true;
        }
        self.nearest_container(id)
            .is_none_or(|c| self.element(c).flags.contains(ElementFlags::HOVERED))
    }

    fn nearest_container(&self, id: ElementId) -> Option<ElementId> {
        let mut cur = self.element(id).parent;
        while let Some(p) = cur {
            let el = self.element(p);
            if el.flags.contains(ElementFlags::CONTAINER) {
                return Some(p);
            }
            cur = el.parent;
        }
        None
    }
}
