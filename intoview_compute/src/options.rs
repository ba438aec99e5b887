// Copyright 2025 the Intoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-call options: scroll mode, per-axis alignment, and the walk boundary.

use core::fmt;

/// Whether the computation may bail out when no scrolling is required.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ScrollMode {
    /// Produce an action for every collected frame, even when the target is
    /// already visible.
    #[default]
    Always,
    /// Return an empty action list when the target is already visible in
    /// every frame of the chain and within the viewport.
    IfNeeded,
}

/// Alignment policy for one axis.
///
/// There is no single default: the block axis defaults to
/// [`ScrollAlign::Center`] and the inline axis to [`ScrollAlign::Nearest`]
/// (see [`ScrollIntoViewOptions::default`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the target's leading edge with the frame's leading content edge.
    Start,
    /// Center the target within the frame.
    Center,
    /// Align the target's trailing edge with the frame's trailing content edge.
    End,
    /// Move the minimum distance that makes the target fully visible; do
    /// nothing when it already is.
    Nearest,
}

/// Where the ancestor walk stops collecting scroll frames.
///
/// The check applies to a node before the walk steps past it to its parent.
/// A boundary node reached *as* a scrollable parent is therefore still
/// collected; only its ancestors are excluded.
#[derive(Copy, Clone)]
pub enum Boundary<'a, N> {
    /// No boundary: walk all the way to the root scrolling node.
    None,
    /// Stop the walk at this node.
    Node(N),
    /// Stop the walk at the first node the predicate rejects.
    Predicate(&'a dyn Fn(N) -> bool),
}

impl<N: Copy + PartialEq> Boundary<'_, N> {
    /// Whether the walk may continue past `node`.
    #[must_use]
    pub fn allows(&self, node: N) -> bool {
        match self {
            Self::None => true,
            Self::Node(boundary) => node != *boundary,
            Self::Predicate(pred) => pred(node),
        }
    }
}

impl<N> Default for Boundary<'_, N> {
    fn default() -> Self {
        Self::None
    }
}

impl<N: fmt::Debug> fmt::Debug for Boundary<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Options for [`compute_scroll_into_view`](crate::compute_scroll_into_view).
#[derive(Copy, Clone, Debug)]
pub struct ScrollIntoViewOptions<'a, N> {
    /// When the computation may return no actions at all.
    pub scroll_mode: ScrollMode,
    /// Alignment on the block (vertical) axis.
    pub block: ScrollAlign,
    /// Alignment on the inline (horizontal) axis.
    pub inline: ScrollAlign,
    /// Where the ancestor walk stops.
    pub boundary: Boundary<'a, N>,
    /// Treat `overflow: hidden` ancestors as non-scrollable and skip them.
    pub skip_overflow_hidden: bool,
}

impl<N> Default for ScrollIntoViewOptions<'_, N> {
    fn default() -> Self {
        Self {
            scroll_mode: ScrollMode::Always,
            block: ScrollAlign::Center,
            inline: ScrollAlign::Nearest,
            boundary: Boundary::None,
            skip_overflow_hidden: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Boundary, ScrollAlign, ScrollIntoViewOptions, ScrollMode};

    #[test]
    fn defaults_match_documented_values() {
        let options = ScrollIntoViewOptions::<u32>::default();
        assert_eq!(options.scroll_mode, ScrollMode::Always);
        assert_eq!(options.block, ScrollAlign::Center);
        assert_eq!(options.inline, ScrollAlign::Nearest);
        assert!(options.boundary.allows(7));
        assert!(!options.skip_overflow_hidden);
    }

    #[test]
    fn boundary_variants_normalize_to_a_single_check() {
        assert!(Boundary::<u32>::None.allows(1));

        let node = Boundary::Node(3_u32);
        assert!(node.allows(2));
        assert!(!node.allows(3));

        let below_five = |n: u32| n < 5;
        let pred = Boundary::Predicate(&below_five);
        assert!(pred.allows(4));
        assert!(!pred.allows(5));
    }
}
