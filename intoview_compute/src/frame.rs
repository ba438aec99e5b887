// Copyright 2025 the Intoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frozen per-ancestor snapshots of scroll state and geometry.

use kurbo::{Insets, Rect, Size, Vec2};

use crate::geometry::{ScrollGeometry, ScrollMetrics};

/// Snapshot of one scrollable ancestor (or the root scrolling node).
///
/// Everything the alignment arithmetic needs is captured once, up front; the
/// computation never queries the geometry source again mid-pass, so a frame
/// chain always describes one consistent layout state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollFrame<N> {
    /// The scroll container this snapshot was captured from.
    pub node: N,
    /// Border-box rectangle in the shared coordinate space.
    pub rect: Rect,
    /// Scroll position at capture time.
    pub scroll_offset: Vec2,
    /// Total extent of the scrollable content.
    pub scroll_size: Size,
    /// Extent of the content box.
    pub client_size: Size,
    /// Border widths on each side.
    pub border: Insets,
    /// Scrollbar gutter sizes on the trailing edges: the outer box minus the
    /// client box minus borders, never negative.
    pub scrollbar: Size,
    /// Whether this is the designated root scrolling node. The root aligns
    /// against the viewport rather than its own rectangle.
    pub is_root: bool,
}

impl<N: Copy + PartialEq + core::fmt::Debug> ScrollFrame<N> {
    /// Captures a snapshot of `node` from the geometry source.
    #[must_use]
    pub fn capture<G>(geometry: &G, node: N, is_root: bool) -> Self
    where
        G: ScrollGeometry<Node = N>,
    {
        let rect = geometry.rect_of(node);
        let ScrollMetrics {
            scroll_offset,
            scroll_size,
            client_size,
        } = geometry.scroll_metrics_of(node);
        let border = geometry.border_widths_of(node);
        let scrollbar = Size::new(
            (rect.width() - client_size.width - border.x0 - border.x1).max(0.0),
            (rect.height() - client_size.height - border.y0 - border.y1).max(0.0),
        );
        Self {
            node,
            rect,
            scroll_offset,
            scroll_size,
            client_size,
            border,
            scrollbar,
            is_root,
        }
    }
}
