// Copyright 2025 the Intoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the fixture tree: node identifiers and authored data.

use intoview_compute::{Overflow, ScrollMetrics};
use kurbo::{Insets, Rect};

/// Identifier for a node in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Classification of a node.
///
/// The ancestor walk in `intoview_compute` only continues through
/// element-like nodes: [`NodeKind::Element`] and [`NodeKind::ShadowRoot`]
/// qualify, [`NodeKind::Document`] does not.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// An ordinary element box.
    #[default]
    Element,
    /// The document node itself; not element-like, so it terminates walks.
    Document,
    /// A shadow-root fragment. Element-like; the walk leaves it through its
    /// host rather than a parent link.
    ShadowRoot,
}

/// Authored geometry and style for a node.
///
/// A fixture sets these values directly; nothing is derived. Rectangles are
/// border boxes in one shared coordinate space.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementData {
    /// Node classification.
    pub kind: NodeKind,
    /// Border-box rectangle in the shared coordinate space.
    pub rect: Rect,
    /// Scroll offsets and extents.
    pub scroll: ScrollMetrics,
    /// Border widths on each side.
    pub border: Insets,
    /// Overflow behavior on the inline (horizontal) axis.
    pub overflow_x: Overflow,
    /// Overflow behavior on the block (vertical) axis.
    pub overflow_y: Overflow,
}

impl Default for ElementData {
    fn default() -> Self {
        Self {
            kind: NodeKind::Element,
            rect: Rect::ZERO,
            scroll: ScrollMetrics::default(),
            border: Insets::ZERO,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
        }
    }
}
