// Copyright 2025 the Intoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intoview Compute: scroll-into-view geometry.
//!
//! Given a target element nested inside zero or more scrollable containers,
//! this crate computes the exact scroll offsets each container must adopt so
//! the target becomes visible under a requested alignment policy. It is a
//! pure geometry computation: it consumes a snapshot of layout rectangles
//! and scroll state through the [`ScrollGeometry`] trait and returns an
//! ordered list of [`ScrollAction`]s, innermost container first, root
//! scrolling node last. It never mutates anything itself.
//!
//! - [`ScrollGeometry`]: the capability seam. Hosts implement it against a
//!   live document or layout tree; tests against a deterministic fixture
//!   (the `intoview_tree` crate ships one).
//! - [`compute_scroll_into_view`]: the entry point.
//! - [`ScrollIntoViewOptions`]: scroll mode ([`ScrollMode`]), per-axis
//!   alignment ([`ScrollAlign`]), walk boundary ([`Boundary`]), and
//!   overflow-hidden skipping.
//! - [`collect_scroll_frames`] / [`ScrollFrame`]: the ancestor chain as
//!   frozen snapshots, exposed for diagnostics.
//! - [`align_nearest`]: the single-axis minimal-motion edge resolver behind
//!   [`ScrollAlign::Nearest`].
//!
//! ## Not a layout engine
//!
//! This crate does not measure or arrange anything. It consumes
//! already-resolved border-box rectangles, scroll offsets, and border
//! widths, and leaves applying (and animating) the computed offsets to the
//! caller. Applying the actions for several containers is not atomic; a
//! host that needs that must sequence the writes itself. Writing modes are
//! not consulted: the block axis is vertical and the inline axis horizontal.
//!
//! ## Snapshot discipline
//!
//! All geometry for one computation is captured before any arithmetic runs,
//! and no query is repeated mid-pass: a later query could observe an
//! inconsistent state if something scrolled in between. Identical snapshots
//! always produce identical action lists.
//!
//! ## Minimal example
//!
//! A two-node world: the root scrolling node and a target 400 pixels down.
//!
//! ```rust
//! use intoview_compute::{
//!     Axis, Overflow, ScrollAlign, ScrollGeometry, ScrollIntoViewOptions, ScrollMetrics,
//!     compute_scroll_into_view,
//! };
//! use kurbo::{Insets, Rect, Size, Vec2};
//!
//! struct Page;
//!
//! impl ScrollGeometry for Page {
//!     type Node = u32;
//!
//!     fn is_element(&self, node: u32) -> bool {
//!         node == 1
//!     }
//!     fn logical_parent(&self, node: u32) -> Option<u32> {
//!         (node == 1).then_some(0)
//!     }
//!     fn rect_of(&self, node: u32) -> Rect {
//!         match node {
//!             1 => Rect::new(0.0, 400.0, 100.0, 450.0),
//!             _ => Rect::new(0.0, 0.0, 800.0, 2000.0),
//!         }
//!     }
//!     fn scroll_metrics_of(&self, _node: u32) -> ScrollMetrics {
//!         ScrollMetrics::default()
//!     }
//!     fn border_widths_of(&self, _node: u32) -> Insets {
//!         Insets::ZERO
//!     }
//!     fn overflow_of(&self, _node: u32, _axis: Axis) -> Overflow {
//!         Overflow::Visible
//!     }
//!     fn root_scroller(&self) -> u32 {
//!         0
//!     }
//!     fn viewport_size(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//!     fn viewport_offset(&self) -> Vec2 {
//!         Vec2::ZERO
//!     }
//! }
//!
//! let options = ScrollIntoViewOptions {
//!     block: ScrollAlign::Start,
//!     ..Default::default()
//! };
//! let actions = compute_scroll_into_view(&Page, 1, &options).unwrap();
//! assert_eq!(actions.len(), 1);
//! assert_eq!(actions[0].top, 400.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chain;
mod compute;
mod frame;
mod geometry;
mod nearest;
mod options;
mod visibility;

pub use chain::collect_scroll_frames;
pub use compute::{InvalidTarget, ScrollAction, compute_scroll_into_view};
pub use frame::ScrollFrame;
pub use geometry::{Axis, Overflow, ScrollGeometry, ScrollMetrics};
pub use nearest::align_nearest;
pub use options::{Boundary, ScrollAlign, ScrollIntoViewOptions, ScrollMode};
