// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responder chain without a scene.
//!
//! Bubble a press up a hand-written parent table, hold capture, and derive
//! hover transitions from two successive hit sets.
//!
//! Run:
//! - `cargo run -p understory_demos --example responder_chain`

use understory_responder::hover::{HoverEvent, HoverState};
use understory_responder::router::{Router, bubble, chain};
use understory_responder::types::{Outcome, ParentLookup};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Node(u32);

/// 1 is the root; 2 and 4 are its children; 3 is a child of 2.
struct Parents;

impl ParentLookup<Node> for Parents {
    fn parent_of(&self, node: &Node) -> Option<Node> {
        match node.0 {
            3 => Some(Node(2)),
            2 | 4 => Some(Node(1)),
            _ => None,
        }
    }
}

fn main() {
    let mut router = Router::<Node>::new();
    let mut hover = HoverState::new();

    // Back-to-front hits under the pointer: the root, then the branch to 3.
    let hits = [Node(1), Node(2), Node(3)];
    let events = hover.update(&hits);
    println!("enter: {events:?}");
    assert_eq!(events.len(), 3);

    // Node 3 declines, node 2 accepts.
    let start = Router::top(&hits).unwrap();
    println!("path: {:?}", chain(start, &Parents));
    let consumer = bubble(&mut Parents, start, |_, node| {
        if node == Node(3) {
            Outcome::Continue
        } else {
            Outcome::Consumed
        }
    });
    assert_eq!(consumer, Some(Node(2)));
    let _ = router.capture(consumer);

    // While captured, moves go to node 2 only.
    assert_eq!(router.move_targets(&[Node(1), Node(4)]), vec![Node(2)]);

    // Pointer slides onto the sibling branch.
    let events = hover.update(&[Node(1), Node(4)]);
    println!("transition: {events:?}");
    assert_eq!(
        events,
        vec![
            HoverEvent::Leave(Node(2)),
            HoverEvent::Leave(Node(3)),
            HoverEvent::Enter(Node(4)),
        ]
    );

    assert!(router.release(Node(2)));
    assert_eq!(router.captured(), None);
}
