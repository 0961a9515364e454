// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use understory_scene::{ElementClass, ElementId, MouseButton, Scene};

type Layout = Rc<RefCell<HashMap<ElementId, Vec<(ElementId, Rect)>>>>;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A class whose render hook renders whatever `layout` lists under the element.
fn panel(layout: &Layout) -> Rc<ElementClass> {
    let layout = layout.clone();
    Rc::new(
        ElementClass::new("panel", move |scene, id, _| {
            let children = layout.borrow().get(&id).cloned().unwrap_or_default();
            for (child, view) in children {
                scene.render(child, view);
            }
        })
        .on_mouse_pressed(|_, _, _| {})
        .on_mouse_moved(|_, _, local, _| {
            black_box(local);
        }),
    )
}

/// One root holding an `n` by `n` grid of cells.
fn grid_scene(n: usize, cell: f64) -> (Scene, ElementId) {
    let layout = Layout::default();
    let class = panel(&layout);
    let mut scene = Scene::new();
    let root = scene.create_element(&class);
    let mut cells = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let id = scene.create_element(&class);
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            cells.push((id, Rect::new(x0, y0, x0 + cell, y0 + cell)));
        }
    }
    layout.borrow_mut().insert(root, cells);
    (scene, root)
}

/// A chain of `depth` elements, each inset by one unit inside its parent.
fn nested_scene(depth: usize) -> (Scene, ElementId) {
    let layout = Layout::default();
    let class = panel(&layout);
    let mut scene = Scene::new();
    let root = scene.create_element(&class);
    let mut parent = root;
    for i in 1..depth {
        let id = scene.create_element(&class);
        let inset = i as f64;
        layout.borrow_mut().insert(
            parent,
            vec![(id, Rect::new(inset, inset, 4096.0 - inset, 4096.0 - inset))],
        );
        parent = id;
    }
    (scene, root)
}

fn render(scene: &mut Scene, root: ElementId, extent: f64) {
    scene
        .frame(|s| s.render(root, Rect::new(0.0, 0.0, extent, extent)))
        .unwrap();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    for &n in &[16usize, 32, 64] {
        let (mut scene, root) = grid_scene(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("register_grid_n{}", n), |b| {
            b.iter(|| render(&mut scene, root, n as f64 * 10.0));
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for &n in &[16usize, 32, 64] {
        let (mut scene, root) = grid_scene(n, 10.0);
        let extent = n as f64 * 10.0;
        render(&mut scene, root, extent);
        let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("move_grid_n{}", n), |b| {
            b.iter(|| {
                let p = Point::new(rng.next_f64() * extent, rng.next_f64() * extent);
                scene.move_mouse(p, Vec2::ZERO);
                black_box(scene.topmost());
            });
        });
    }
    for &depth in &[8usize, 64, 256] {
        let (mut scene, root) = nested_scene(depth);
        render(&mut scene, root, 4096.0);
        group.bench_function(format!("move_nested_d{}", depth), |b| {
            let mut x = 0.0;
            b.iter(|| {
                x = (x + 1.0) % 1024.0;
                scene.move_mouse(Point::new(1024.0 + x, 1024.0), Vec2::new(1.0, 0.0));
                black_box(scene.overlapping().len());
            });
        });
    }
    group.finish();
}

fn bench_press_bubble(c: &mut Criterion) {
    let mut group = c.benchmark_group("press");
    for &depth in &[8usize, 64, 256] {
        group.bench_function(format!("press_release_nested_d{}", depth), |b| {
            b.iter_batched(
                || {
                    let (mut scene, root) = nested_scene(depth);
                    render(&mut scene, root, 4096.0);
                    scene.move_mouse(Point::new(2048.0, 2048.0), Vec2::ZERO);
                    scene
                },
                |mut scene| {
                    black_box(scene.press_mouse(MouseButton::PRIMARY));
                    black_box(scene.release_mouse(MouseButton::PRIMARY));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_frame, bench_resolve, bench_press_bubble);
criterion_main!(benches);
