// Copyright 2025 the Intoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-into-view over nested frames: `intoview_tree` + `intoview_compute`.
//!
//! This example builds a page with a scrollable panel inside a scrollable
//! sidebar, then computes the scroll actions that reveal a row buried in the
//! panel under a few different alignment policies.
//!
//! Run:
//! - `cargo run -p intoview_demos --example nested_scroll`

use intoview_compute::{
    Boundary, Overflow, ScrollAction, ScrollAlign, ScrollIntoViewOptions, ScrollMetrics,
    ScrollMode, compute_scroll_into_view,
};
use intoview_tree::{ElementData, ElementTree, NodeId};
use kurbo::{Rect, Size, Vec2};

fn scroller(rect: Rect, scroll_size: Size) -> ElementData {
    ElementData {
        rect,
        scroll: ScrollMetrics {
            scroll_offset: Vec2::ZERO,
            scroll_size,
            client_size: rect.size(),
        },
        overflow_x: Overflow::Auto,
        overflow_y: Overflow::Auto,
        ..ElementData::default()
    }
}

fn print_actions(label: &str, actions: &[ScrollAction<NodeId>]) {
    println!("\n== {label} ==");
    if actions.is_empty() {
        println!("  (already visible, nothing to scroll)");
    }
    for action in actions {
        println!(
            "  scroll {:?} to top={:.1} left={:.1}",
            action.node, action.top, action.left
        );
    }
}

fn main() {
    let mut tree = ElementTree::new();

    // The document: 800x600 viewport over 3000px of content.
    let root = tree.insert(
        None,
        ElementData {
            rect: Rect::new(0.0, 0.0, 800.0, 3000.0),
            ..ElementData::default()
        },
    );
    tree.set_root_scroller(root);
    tree.set_viewport(Size::new(800.0, 600.0), Vec2::ZERO);

    // A sidebar that scrolls vertically, and a panel inside it that
    // scrolls its own long list of rows.
    let sidebar = tree.insert(
        Some(root),
        scroller(Rect::new(0.0, 0.0, 300.0, 600.0), Size::new(300.0, 1800.0)),
    );
    let panel = tree.insert(
        Some(sidebar),
        scroller(Rect::new(0.0, 40.0, 300.0, 440.0), Size::new(300.0, 2400.0)),
    );
    let row = tree.insert(
        Some(panel),
        ElementData {
            rect: Rect::new(0.0, 1250.0, 300.0, 1280.0),
            ..ElementData::default()
        },
    );

    // Default policy: center the block axis, nearest on the inline axis.
    let actions =
        compute_scroll_into_view(&tree, row, &ScrollIntoViewOptions::default()).unwrap();
    print_actions("block: Center (default)", &actions);

    // Pin the row to the top of each container instead.
    let start = ScrollIntoViewOptions {
        block: ScrollAlign::Start,
        ..Default::default()
    };
    let actions = compute_scroll_into_view(&tree, row, &start).unwrap();
    print_actions("block: Start", &actions);

    // Confine scrolling to the panel: the sidebar and document stay put.
    let bounded = ScrollIntoViewOptions {
        block: ScrollAlign::Start,
        boundary: Boundary::Node(panel),
        ..Default::default()
    };
    let actions = compute_scroll_into_view(&tree, row, &bounded).unwrap();
    print_actions("block: Start, boundary at the panel", &actions);

    // Once the panel is actually scrolled there, if-needed has nothing to do.
    if let Some(action) = actions.first() {
        tree.set_scroll_offset(panel, Vec2::new(action.left, action.top));
    }
    tree.set_rect(row, Rect::new(0.0, 40.0, 300.0, 70.0));
    let if_needed = ScrollIntoViewOptions {
        scroll_mode: ScrollMode::IfNeeded,
        ..Default::default()
    };
    let actions = compute_scroll_into_view(&tree, row, &if_needed).unwrap();
    print_actions("scroll mode: IfNeeded after applying the scroll", &actions);
}
