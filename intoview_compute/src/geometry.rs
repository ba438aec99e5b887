// Copyright 2025 the Intoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The geometry seam: layout and style queries the computation consumes.

use core::fmt::Debug;

use kurbo::{Insets, Rect, Size, Vec2};

/// A scroll axis in the default writing mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The vertical axis (top/bottom edges, `scroll_offset.y`).
    Block,
    /// The horizontal axis (left/right edges, `scroll_offset.x`).
    Inline,
}

/// Resolved overflow behavior of a box on one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Content spills out of the box; never a scroll container.
    #[default]
    Visible,
    /// Content is clipped with no scrolling affordance, but the box still
    /// has a scrolling box that can be moved programmatically.
    Hidden,
    /// Content is clipped and the box cannot be scrolled at all.
    Clip,
    /// Always a scroll container.
    Scroll,
    /// A scroll container whenever content overflows.
    Auto,
}

/// Scroll state and extents of a single box.
///
/// Mirrors the usual host-environment triple of scroll position, scrollable
/// content extent, and client (content box) extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll position: `x` is the inline (left) offset, `y` the
    /// block (top) offset.
    pub scroll_offset: Vec2,
    /// Total extent of the scrollable content.
    pub scroll_size: Size,
    /// Extent of the content box, excluding borders and scrollbar gutters.
    pub client_size: Size,
}

impl Default for ScrollMetrics {
    fn default() -> Self {
        Self {
            scroll_offset: Vec2::ZERO,
            scroll_size: Size::ZERO,
            client_size: Size::ZERO,
        }
    }
}

/// Read-only layout and style queries over a tree of element-like nodes.
///
/// This is the capability boundary of the crate: the computation itself is
/// pure arithmetic over the values these queries return. Hosts implement it
/// against their live document or layout tree; tests implement it against a
/// deterministic fixture (see the `intoview_tree` crate).
///
/// `Node` is a small copyable handle. Implementations must answer every
/// query without side effects, and all queries made during a single
/// computation are expected to observe one consistent layout snapshot.
pub trait ScrollGeometry {
    /// Handle to a node in the host's tree.
    type Node: Copy + PartialEq + Debug;

    /// Whether `node` is element-like.
    ///
    /// Elements and shadow-root fragments qualify; document nodes do not.
    /// The ancestor walk ends at the first node that is not element-like,
    /// and the computation rejects non-element targets up front.
    fn is_element(&self, node: Self::Node) -> bool;

    /// The node the ancestor walk moves to next: the parent, or the shadow
    /// host when the parent link is exhausted at a fragment boundary.
    fn logical_parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Border-box rectangle of `node` in the shared coordinate space.
    fn rect_of(&self, node: Self::Node) -> Rect;

    /// Scroll offsets and extents of `node`.
    fn scroll_metrics_of(&self, node: Self::Node) -> ScrollMetrics;

    /// Resolved border widths of `node`, in pixels.
    fn border_widths_of(&self, node: Self::Node) -> Insets;

    /// Resolved overflow behavior of `node` on `axis`.
    fn overflow_of(&self, node: Self::Node, axis: Axis) -> Overflow;

    /// The designated document-level scrolling node.
    ///
    /// The walk terminates here unconditionally, and this node aligns
    /// against the viewport rather than its own rectangle.
    fn root_scroller(&self) -> Self::Node;

    /// Size of the (visual) viewport.
    fn viewport_size(&self) -> Size;

    /// Scroll offset of the viewport itself.
    fn viewport_offset(&self) -> Vec2;
}
