//! Do we clean up fragment anchors properly across nesting?

use pretty_assertions::assert_eq;
use std::{cell::RefCell, rc::Rc};
use vdom_core::prelude::*;

#[test]
fn nested_fragment_anchors_are_removed_before_the_outer_anchor() {
    // [Text, Fragment[Text, Text]]
    let tree = VNode::fragment(
        ElementId(10),
        [
            VNode::text("a", ElementId(1)),
            VNode::fragment(
                ElementId(20),
                [VNode::text("b", ElementId(2)), VNode::text("c", ElementId(3))],
            ),
        ],
    );

    let mut edits = Mutations::new();
    Runtime::default()
        .unmount(&mut edits, &tree, Some(ElementId(0)), &mut Lifecycle::new(), false, false)
        .unwrap();

    assert_eq!(
        edits.edits,
        [
            Mutation::RemoveNode { parent: ElementId(0), child: ElementId(20) },
            Mutation::RemoveNode { parent: ElementId(0), child: ElementId(10) },
        ]
    );
}

#[test]
fn children_are_torn_down_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let item = |name: &'static str, id: usize| {
        let log = log.clone();
        VNode::from(
            VElement::new("li", ElementId(id))
                .with_ref(move |_: Option<ElementId>| log.borrow_mut().push(name)),
        )
    };

    let tree = VNode::fragment(
        ElementId(100),
        [
            item("first", 1),
            VNode::fragment(ElementId(101), [item("second", 2), item("third", 3)]),
            item("fourth", 4),
        ],
    );

    let mut edits = Mutations::new();
    Runtime::default()
        .unmount(&mut edits, &tree, Some(ElementId(0)), &mut Lifecycle::new(), false, false)
        .unwrap();

    assert_eq!(*log.borrow(), ["first", "second", "third", "fourth"]);
    assert_eq!(edits.removed(), [ElementId(101), ElementId(100)]);
}

#[test]
fn without_a_parent_no_anchor_is_removed() {
    let tree = VNode::fragment(
        ElementId(10),
        [VNode::fragment(ElementId(11), [VNode::placeholder(ElementId(12))])],
    );

    let mut edits = Mutations::new();
    Runtime::default()
        .unmount(&mut edits, &tree, None, &mut Lifecycle::new(), false, false)
        .unwrap();

    assert!(edits.edits.is_empty());
}

#[test]
fn shallow_fragments_only_remove_their_anchor() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let tree = VNode::fragment(
        ElementId(10),
        [
            VNode::from(VElement::new("div", ElementId(1)).with_ref({
                let log = log.clone();
                move |_: Option<ElementId>| log.borrow_mut().push("div")
            })),
            VNode::fragment(ElementId(11), [VNode::text("x", ElementId(2))]),
        ],
    );

    let mut edits = Mutations::new();
    Runtime::default()
        .unmount(&mut edits, &tree, Some(ElementId(0)), &mut Lifecycle::new(), false, true)
        .unwrap();

    assert!(log.borrow().is_empty());
    assert_eq!(edits.removed(), [ElementId(10)]);
}

#[test]
fn empty_fragments_still_drop_their_anchor() {
    let tree = VNode::fragment(ElementId(5), []);

    let mut edits = Mutations::new();
    Runtime::default()
        .unmount(&mut edits, &tree, Some(ElementId(0)), &mut Lifecycle::new(), false, false)
        .unwrap();

    assert_eq!(edits.removed(), [ElementId(5)]);
}

#[test]
fn deeply_nested_fragments_remove_every_anchor_inside_out() {
    let mut tree = VNode::fragment(ElementId(1), [VNode::text("leaf", ElementId(100))]);
    for anchor in 2..=5 {
        tree = VNode::fragment(ElementId(anchor), [tree]);
    }

    let mut edits = Mutations::new();
    Runtime::default()
        .unmount(&mut edits, &tree, Some(ElementId(0)), &mut Lifecycle::new(), false, false)
        .unwrap();

    assert_eq!(
        edits.removed(),
        [ElementId(1), ElementId(2), ElementId(3), ElementId(4), ElementId(5)]
    );
}
