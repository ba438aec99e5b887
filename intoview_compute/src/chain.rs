// Copyright 2025 the Intoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestor chain collection: which containers can scroll the target.

use alloc::vec::Vec;

use crate::frame::ScrollFrame;
use crate::geometry::{Axis, Overflow, ScrollGeometry};
use crate::options::Boundary;

/// Collects the scroll frames between `target` and the root, innermost
/// first, as frozen [`ScrollFrame`] snapshots.
///
/// The walk moves through [`ScrollGeometry::logical_parent`] and ends at the
/// first node that is not element-like, at a node the boundary rejects, or
/// at the root scrolling node, which is always collected, regardless of its
/// own computed scrollability, and is always the last frame when present.
///
/// The boundary check applies to the node the walk is about to leave, so a
/// boundary node reached as a scrollable parent is itself still collected;
/// only its ancestors are cut off.
#[must_use]
pub fn collect_scroll_frames<G: ScrollGeometry>(
    geometry: &G,
    target: G::Node,
    boundary: &Boundary<'_, G::Node>,
    skip_overflow_hidden: bool,
) -> Vec<ScrollFrame<G::Node>> {
    let root = geometry.root_scroller();
    let mut frames = Vec::new();
    let mut cursor = target;
    while geometry.is_element(cursor) && boundary.allows(cursor) {
        cursor = match geometry.logical_parent(cursor) {
            Some(parent) => parent,
            None => break,
        };
        if cursor == root {
            frames.push(ScrollFrame::capture(geometry, cursor, true));
            break;
        }
        if is_scrollable(geometry, cursor, skip_overflow_hidden) {
            frames.push(ScrollFrame::capture(geometry, cursor, false));
        }
    }
    frames
}

/// Whether the overflow behavior keeps a scrolling box on this axis.
fn can_overflow<G: ScrollGeometry>(
    geometry: &G,
    node: G::Node,
    axis: Axis,
    skip_overflow_hidden: bool,
) -> bool {
    match geometry.overflow_of(node, axis) {
        Overflow::Visible | Overflow::Clip => false,
        Overflow::Hidden => !skip_overflow_hidden,
        Overflow::Scroll | Overflow::Auto => true,
    }
}

/// A box is scrollable when, on either axis, its content overruns the client
/// box and the overflow behavior keeps a scrolling box on that axis.
fn is_scrollable<G: ScrollGeometry>(
    geometry: &G,
    node: G::Node,
    skip_overflow_hidden: bool,
) -> bool {
    let metrics = geometry.scroll_metrics_of(node);
    (metrics.client_size.height < metrics.scroll_size.height
        && can_overflow(geometry, node, Axis::Block, skip_overflow_hidden))
        || (metrics.client_size.width < metrics.scroll_size.width
            && can_overflow(geometry, node, Axis::Inline, skip_overflow_hidden))
}
