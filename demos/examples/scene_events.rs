// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named events, injection and measurement.
//!
//! A window provides a theme to its subtree, labels measure themselves from it,
//! and a context-menu event bubbles from a label to the first element that
//! handles it. A broadcast event reaches every rendered element.
//!
//! Run:
//! - `cargo run -p understory_demos --example scene_events`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Point, Rect, Vec2};
use understory_scene::{ElementClass, ElementId, Scene};

struct Theme {
    glyph_width: f64,
}

fn main() {
    let labels: Rc<RefCell<Vec<(ElementId, &'static str)>>> = Rc::default();
    let menus = Rc::new(Cell::new(0_u32));
    let ticks = Rc::new(Cell::new(0_u32));

    let t = ticks.clone();
    let label = Rc::new(
        ElementClass::new("label", |_, _, _| {})
            .on_init(|scene, id, args| {
                if let Some(text) = args.downcast_ref::<&'static str>() {
                    scene.provide(id, "text", *text);
                }
            })
            .with_desired_width(|scene, id| {
                let glyph = scene.inject::<Theme>(id, "theme").map_or(8.0, |t| t.glyph_width);
                let text = scene.inject::<&'static str>(id, "text").copied().unwrap_or("");
                glyph * text.len() as f64
            })
            // Labels ignore the menu request and let it bubble.
            .on_event("context_menu", |_, _, _| false)
            .on_event("tick", move |_, _, _| t.set(t.get() + 1)),
    );

    let (children, m, t) = (labels.clone(), menus.clone(), ticks.clone());
    let window = Rc::new(
        ElementClass::new("window", move |scene, _, view| {
            let mut x = view.x0;
            for (id, _) in children.borrow().iter().copied() {
                let w = scene.desired_width(id).unwrap_or(0.0);
                scene.render(id, Rect::new(x, view.y0, x + w, view.y0 + 20.0));
                x += w;
            }
        })
        .on_init(|scene, id, _| scene.provide(id, "theme", Theme { glyph_width: 7.0 }))
        .on_event("context_menu", move |_, _, args| {
            let at = args.downcast_ref::<Point>().copied();
            println!("context menu at {at:?}");
            m.set(m.get() + 1);
        })
        .on_event("tick", move |_, _, _| t.set(t.get() + 1)),
    );

    let mut scene = Scene::new();
    let win = scene.create_element(&window);
    for text in ["File", "Edit", "View"] {
        let id = scene.create_element_with(&label, &text);
        labels.borrow_mut().push((id, text));
    }

    // The first frame records parents, so injected values resolve from then on.
    for _ in 0..2 {
        scene
            .frame(|scene| scene.render(win, Rect::new(0.0, 0.0, 640.0, 480.0)))
            .unwrap();
    }
    let (file, _) = labels.borrow()[0];
    assert_eq!(scene.parent(file), Some(win));
    assert_eq!(scene.view(file), Some(Rect::new(0.0, 0.0, 28.0, 20.0)));

    scene.move_mouse(Point::new(5.0, 5.0), Vec2::ZERO);
    assert_eq!(scene.topmost(), Some(file));
    let at = Point::new(5.0, 5.0);
    assert_eq!(scene.raise_mouse_event("context_menu", &at), Some(win));
    assert_eq!(menus.get(), 1);

    scene.raise_event("tick", &());
    assert_eq!(ticks.get(), 4, "window and three labels");

    let missing = scene.desired_height(file);
    println!("desired height: {missing:?}");
    assert!(missing.is_err());
}
