// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene basics.
//!
//! Declare a toolbar with two buttons every frame, then hover, press and click.
//!
//! Run:
//! - `RUST_LOG=understory_scene=debug cargo run -p understory_demos --example scene_basics`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Vec2};
use tracing_subscriber::EnvFilter;
use understory_scene::{ElementClass, ElementId, MouseButton, Scene};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let log = Rc::new(RefCell::new(Vec::<String>::new()));

    let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());
    let button = Rc::new(
        ElementClass::new("button", |_, _, _| {})
            .on_mouse_entered(move |_, id| l1.borrow_mut().push(format!("enter {id:?}")))
            .on_mouse_exited(move |_, id| l2.borrow_mut().push(format!("exit {id:?}")))
            .on_mouse_clicked(move |_, id, b| l3.borrow_mut().push(format!("click {id:?} {b:?}"))),
    );

    // The toolbar renders its buttons, so they become its children.
    let buttons: Rc<RefCell<Vec<(ElementId, Rect)>>> = Rc::default();
    let children = buttons.clone();
    let toolbar = Rc::new(ElementClass::new("toolbar", move |scene, _, _| {
        for (id, view) in children.borrow().iter().copied() {
            scene.render(id, view);
        }
    }));

    let mut scene = Scene::new();
    let bar = scene.create_element(&toolbar);
    let open = scene.create_element(&button);
    let save = scene.create_element(&button);
    buttons.borrow_mut().extend([
        (open, Rect::new(4.0, 4.0, 64.0, 28.0)),
        (save, Rect::new(68.0, 4.0, 128.0, 28.0)),
    ]);

    scene
        .frame(|scene| scene.render(bar, Rect::new(0.0, 0.0, 400.0, 32.0)))
        .unwrap();
    assert_eq!(scene.rendered(), &[bar, open, save]);
    assert_eq!(scene.parent(save), Some(bar));

    // Hover the first button: the toolbar stays hovered as its ancestor.
    scene.move_mouse(Point::new(10.0, 10.0), Vec2::ZERO);
    assert_eq!(scene.overlapping(), &[bar, open]);
    println!("hovering: {:?}", scene.overlapping());

    // Slide onto the second one.
    scene.move_mouse(Point::new(80.0, 10.0), Vec2::new(70.0, 0.0));
    assert!(scene.was_hovered(open) && !scene.is_hovered(open));

    assert_eq!(scene.press_mouse(MouseButton::PRIMARY), Some(save));
    assert!(scene.is_pressed(save, Some(MouseButton::PRIMARY)));
    assert_eq!(scene.release_mouse(MouseButton::PRIMARY), Some(save));
    tracing::info!(?save, "clicked");

    for line in log.borrow().iter() {
        println!("{line}");
    }
    assert_eq!(log.borrow().len(), 4, "enter, exit, enter, click");
}
