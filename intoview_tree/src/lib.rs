// Copyright 2025 the Intoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intoview Tree: a deterministic element-tree fixture for scroll geometry.
//!
//! `intoview_compute` works against any host that implements its
//! [`ScrollGeometry`](intoview_compute::ScrollGeometry) seam. This crate
//! provides a small authored implementation of that seam: a
//! generational-arena tree of element-like nodes whose rectangles, scroll
//! metrics, borders, and overflow are set directly by the caller, plus the
//! ambient viewport state and the designated root scrolling node.
//!
//! It exists so the alignment arithmetic can be exercised end to end in
//! unit tests and examples without a live layout engine, and doubles as a
//! reference for wiring the seam to a real document.
//!
//! - [`ElementTree`]: the arena; insert/remove nodes, author their geometry,
//!   set the viewport, designate the root scroller.
//! - [`ElementData`]: per-node authored geometry and style.
//! - [`NodeKind`]: element / document / shadow-root classification. Shadow
//!   roots attach to a host via [`ElementTree::insert_shadow_root`] and are
//!   left through that host during ancestor walks.
//! - [`NodeId`]: generational handle; ids of removed nodes go stale instead
//!   of aliasing reused slots.
//!
//! ## Example
//!
//! ```rust
//! use intoview_compute::{
//!     Overflow, ScrollAlign, ScrollIntoViewOptions, ScrollMetrics, compute_scroll_into_view,
//! };
//! use intoview_tree::{ElementData, ElementTree};
//! use kurbo::{Rect, Size, Vec2};
//!
//! let mut tree = ElementTree::new();
//! let root = tree.insert(
//!     None,
//!     ElementData {
//!         rect: Rect::new(0.0, 0.0, 800.0, 2000.0),
//!         ..ElementData::default()
//!     },
//! );
//! tree.set_root_scroller(root);
//! tree.set_viewport(Size::new(800.0, 600.0), Vec2::ZERO);
//!
//! // A scrollable frame with 900px of content in a 300px box.
//! let frame_rect = Rect::new(0.0, 0.0, 200.0, 300.0);
//! let frame = tree.insert(
//!     Some(root),
//!     ElementData {
//!         rect: frame_rect,
//!         scroll: ScrollMetrics {
//!             scroll_offset: Vec2::ZERO,
//!             scroll_size: Size::new(200.0, 900.0),
//!             client_size: frame_rect.size(),
//!         },
//!         overflow_y: Overflow::Auto,
//!         ..ElementData::default()
//!     },
//! );
//! let target = tree.insert(
//!     Some(frame),
//!     ElementData {
//!         rect: Rect::new(0.0, 500.0, 100.0, 550.0),
//!         ..ElementData::default()
//!     },
//! );
//!
//! let options = ScrollIntoViewOptions {
//!     block: ScrollAlign::Start,
//!     ..Default::default()
//! };
//! let actions = compute_scroll_into_view(&tree, target, &options).unwrap();
//! assert_eq!(actions[0].node, frame);
//! assert_eq!(actions[0].top, 500.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::ElementTree;
pub use types::{ElementData, NodeId, NodeKind};
