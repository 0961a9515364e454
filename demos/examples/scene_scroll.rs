// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrolling list.
//!
//! A container clips hover to its viewport, the wheel scrolls it, and the rows
//! are hit tested through a pointer transform that undoes the scroll offset.
//!
//! Run:
//! - `cargo run -p understory_demos --example scene_scroll`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Point, Rect, Vec2};
use understory_scene::{ElementClass, ElementId, PointerTransform, Scene};

const ROW: f64 = 20.0;

fn main() {
    let offset = Rc::new(Cell::new(0.0_f64));
    let rows: Rc<RefCell<Vec<ElementId>>> = Rc::default();

    let row = Rc::new(ElementClass::new("row", |_, _, _| {}));

    let (scroll, content) = (offset.clone(), rows.clone());
    let wheel = offset.clone();
    let list = Rc::new(
        ElementClass::new("list", move |scene, _, view| {
            let dy = scroll.get();
            // Rows are laid out in content space; the pointer is shifted to match.
            scene.with_transform(PointerTransform::translate(Vec2::new(0.0, dy)), |scene| {
                for (i, id) in content.borrow().iter().copied().enumerate() {
                    let y = view.y0 + i as f64 * ROW;
                    scene.render(id, Rect::new(view.x0, y, view.x1, y + ROW));
                }
            });
        })
        .on_wheel_moved(move |_, _, delta| {
            wheel.set((wheel.get() + delta.y).max(0.0));
        }),
    );

    let mut scene = Scene::new();
    let viewport = scene.create_element(&list);
    scene.set_container(viewport, true);
    rows.borrow_mut().extend((0..50).map(|_| scene.create_element(&row)));

    let render = |scene: &mut Scene| {
        scene
            .frame(|scene| scene.render(viewport, Rect::new(0.0, 0.0, 200.0, 100.0)))
            .unwrap();
    };
    render(&mut scene);

    scene.move_mouse(Point::new(50.0, 30.0), Vec2::ZERO);
    let hovered = scene.topmost().unwrap();
    println!("row under pointer: {hovered:?}");
    assert_eq!(hovered, rows.borrow()[1]);

    // Outside the viewport the container blocks rows that overflow it.
    scene.move_mouse(Point::new(50.0, 150.0), Vec2::ZERO);
    assert!(scene.overlapping().is_empty());

    scene.move_mouse(Point::new(50.0, 30.0), Vec2::ZERO);
    assert_eq!(scene.wheel_moved(Vec2::new(0.0, 40.0)), Some(viewport));
    render(&mut scene);
    scene.move_mouse(Point::new(50.0, 30.0), Vec2::ZERO);
    let hovered = scene.topmost().unwrap();
    println!("after scrolling: {hovered:?}");
    assert_eq!(hovered, rows.borrow()[3]);
}
