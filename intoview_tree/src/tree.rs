// Copyright 2025 the Intoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixture tree: structure, mutation, and the geometry impl.

use alloc::vec::Vec;

use intoview_compute::{Axis, Overflow, ScrollGeometry, ScrollMetrics};
use kurbo::{Insets, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::types::{ElementData, NodeId, NodeKind};

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    /// Host of a shadow-root fragment; the walk leaves the fragment here.
    host: Option<NodeId>,
    /// Shadow root attached to this node, if any.
    shadow_root: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    data: ElementData,
}

impl Node {
    fn new(generation: u32, data: ElementData) -> Self {
        Self {
            generation,
            parent: None,
            host: None,
            shadow_root: None,
            children: SmallVec::new(),
            data,
        }
    }
}

/// A deterministic element tree with authored geometry.
///
/// Nodes are identified by generational [`NodeId`]s: removing a node frees
/// its slot, and identifiers from before the reuse go stale rather than
/// aliasing the new occupant. The tree also carries the ambient state the
/// scroll computation needs (viewport size and offset, and the designated
/// root scrolling node) and implements [`ScrollGeometry`] so it can stand in
/// for a live document.
///
/// ## Example
///
/// ```rust
/// use intoview_tree::{ElementData, ElementTree};
/// use kurbo::{Rect, Size, Vec2};
///
/// let mut tree = ElementTree::new();
/// let root = tree.insert(
///     None,
///     ElementData {
///         rect: Rect::new(0.0, 0.0, 800.0, 2000.0),
///         ..ElementData::default()
///     },
/// );
/// tree.set_root_scroller(root);
/// tree.set_viewport(Size::new(800.0, 600.0), Vec2::ZERO);
///
/// let target = tree.insert(
///     Some(root),
///     ElementData {
///         rect: Rect::new(0.0, 400.0, 100.0, 450.0),
///         ..ElementData::default()
///     },
/// );
/// assert_eq!(tree.parent_of(target), Some(root));
/// ```
#[derive(Debug, Default)]
pub struct ElementTree {
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    viewport_size: Size,
    viewport_offset: Vec2,
    root_scroller: Option<NodeId>,
}

impl ElementTree {
    /// Creates a new empty tree with a zero-sized, unscrolled viewport and
    /// no root scroller designated.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            viewport_size: Size::ZERO,
            viewport_offset: Vec2::ZERO,
            root_scroller: None,
        }
    }

    /// Inserts a new node as a child of `parent` (or detached if `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, data: ElementData) -> NodeId {
        let id = self.alloc(data);
        if let Some(p) = parent {
            self.node_mut(p).children.push(id);
            self.node_mut(id).parent = Some(p);
        }
        id
    }

    /// Attaches a shadow-root fragment to `host` and returns it.
    ///
    /// The fragment's kind is forced to [`NodeKind::ShadowRoot`]; its
    /// logical parent is the host. Content inside the fragment is inserted
    /// with ordinary [`ElementTree::insert`] calls under the returned id.
    pub fn insert_shadow_root(&mut self, host: NodeId, data: ElementData) -> NodeId {
        let data = ElementData {
            kind: NodeKind::ShadowRoot,
            ..data
        };
        let id = self.alloc(data);
        self.node_mut(id).host = Some(host);
        self.node_mut(host).shadow_root = Some(id);
        id
    }

    fn alloc(&mut self, data: ElementData) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, data));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, data)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        NodeId::new(idx, generation)
    }

    /// Removes a node and its subtree (light children and any shadow root).
    ///
    /// Their identifiers become stale and the slots are reused by later
    /// insertions.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.node_mut(parent).children.retain(|c| *c != id);
        }
        if let Some(host) = self.node(id).host {
            self.node_mut(host).shadow_root = None;
        }
        let children: SmallVec<[NodeId; 4]> = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        if let Some(shadow) = self.node(id).shadow_root {
            self.remove(shadow);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns `true` if `id` refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the parent of a live node, if it has one.
    #[must_use]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    /// Returns the shadow root attached to a live node, if any.
    #[must_use]
    pub fn shadow_root_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.shadow_root
    }

    /// Returns the children of a live node.
    #[must_use]
    pub fn children_of(&self, id: NodeId) -> Option<&[NodeId]> {
        self.get(id).map(|n| n.children.as_slice())
    }

    /// Returns the authored data of a live node.
    #[must_use]
    pub fn data(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).map(|n| &n.data)
    }

    /// Returns mutable access to the authored data of a live node.
    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).map(|n| &mut n.data)
    }

    /// Updates the border-box rectangle of a live node.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) {
        if let Some(n) = self.get_mut(id) {
            n.data.rect = rect;
        }
    }

    /// Updates the scroll offset of a live node.
    pub fn set_scroll_offset(&mut self, id: NodeId, offset: Vec2) {
        if let Some(n) = self.get_mut(id) {
            n.data.scroll.scroll_offset = offset;
        }
    }

    /// Updates the overflow behavior of a live node on one axis.
    pub fn set_overflow(&mut self, id: NodeId, axis: Axis, overflow: Overflow) {
        if let Some(n) = self.get_mut(id) {
            match axis {
                Axis::Block => n.data.overflow_y = overflow,
                Axis::Inline => n.data.overflow_x = overflow,
            }
        }
    }

    /// Sets the viewport size and scroll offset.
    pub fn set_viewport(&mut self, size: Size, offset: Vec2) {
        self.viewport_size = size;
        self.viewport_offset = offset;
    }

    /// Designates the document-level scrolling node.
    ///
    /// The geometry impl panics if a computation runs before this is set.
    pub fn set_root_scroller(&mut self, id: NodeId) {
        self.root_scroller = Some(id);
    }

    fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.idx())?
            .as_ref()
            .filter(|n| n.generation == id.1)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes
            .get_mut(id.idx())?
            .as_mut()
            .filter(|n| n.generation == id.1)
    }

    /// Access a node; panics if `id` is stale.
    fn node(&self, id: NodeId) -> &Node {
        self.get(id).expect("dangling NodeId")
    }

    /// Access a node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.get_mut(id).expect("dangling NodeId")
    }
}

impl ScrollGeometry for ElementTree {
    type Node = NodeId;

    fn is_element(&self, node: NodeId) -> bool {
        self.get(node)
            .is_some_and(|n| matches!(n.data.kind, NodeKind::Element | NodeKind::ShadowRoot))
    }

    fn logical_parent(&self, node: NodeId) -> Option<NodeId> {
        let n = self.get(node)?;
        n.parent.or(n.host)
    }

    fn rect_of(&self, node: NodeId) -> Rect {
        self.node(node).data.rect
    }

    fn scroll_metrics_of(&self, node: NodeId) -> ScrollMetrics {
        self.node(node).data.scroll
    }

    fn border_widths_of(&self, node: NodeId) -> Insets {
        self.node(node).data.border
    }

    fn overflow_of(&self, node: NodeId, axis: Axis) -> Overflow {
        let data = &self.node(node).data;
        match axis {
            Axis::Block => data.overflow_y,
            Axis::Inline => data.overflow_x,
        }
    }

    fn root_scroller(&self) -> NodeId {
        self.root_scroller.expect("root scroller not set")
    }

    fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    fn viewport_offset(&self) -> Vec2 {
        self.viewport_offset
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use intoview_compute::{
        Axis, Boundary, Overflow, ScrollAlign, ScrollGeometry, ScrollIntoViewOptions,
        ScrollMetrics, ScrollMode, compute_scroll_into_view,
    };
    use kurbo::{Rect, Size, Vec2};

    use super::ElementTree;
    use crate::types::{ElementData, NodeId, NodeKind};

    fn element(rect: Rect) -> ElementData {
        ElementData {
            rect,
            scroll: ScrollMetrics {
                scroll_offset: Vec2::ZERO,
                scroll_size: rect.size(),
                client_size: rect.size(),
            },
            ..ElementData::default()
        }
    }

    fn scroller(rect: Rect, scroll_size: Size) -> ElementData {
        ElementData {
            scroll: ScrollMetrics {
                scroll_offset: Vec2::ZERO,
                scroll_size,
                client_size: rect.size(),
            },
            overflow_x: Overflow::Auto,
            overflow_y: Overflow::Auto,
            ..element(rect)
        }
    }

    /// A page-like fixture: a root scroller covering an 800x600 viewport.
    fn page(content_height: f64) -> (ElementTree, NodeId) {
        let mut tree = ElementTree::new();
        let root = tree.insert(None, element(Rect::new(0.0, 0.0, 800.0, content_height)));
        tree.set_root_scroller(root);
        tree.set_viewport(Size::new(800.0, 600.0), Vec2::ZERO);
        (tree, root)
    }

    #[test]
    fn insert_links_parents_and_children() {
        let (mut tree, root) = page(600.0);
        let a = tree.insert(Some(root), element(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let b = tree.insert(Some(root), element(Rect::new(0.0, 100.0, 100.0, 200.0)));
        assert_eq!(tree.children_of(root), Some(&[a, b][..]));
        assert_eq!(tree.parent_of(a), Some(root));
        assert_eq!(tree.parent_of(root), None);
    }

    #[test]
    fn removed_ids_go_stale_and_slots_are_reused() {
        let (mut tree, root) = page(600.0);
        let a = tree.insert(Some(root), element(Rect::new(0.0, 0.0, 100.0, 100.0)));
        tree.remove(a);
        assert!(!tree.is_alive(a));
        assert_eq!(tree.children_of(root), Some(&[][..]));

        // The slot is reused with a fresh generation; the old id stays stale.
        let b = tree.insert(Some(root), element(Rect::new(0.0, 0.0, 50.0, 50.0)));
        assert!(tree.is_alive(b));
        assert!(!tree.is_alive(a));
        assert_ne!(a, b);
    }

    #[test]
    fn removing_a_host_takes_its_shadow_tree_along() {
        let (mut tree, root) = page(600.0);
        let host = tree.insert(Some(root), element(Rect::new(0.0, 0.0, 200.0, 200.0)));
        let shadow = tree.insert_shadow_root(host, ElementData::default());
        let inner = tree.insert(Some(shadow), element(Rect::new(0.0, 0.0, 50.0, 50.0)));

        assert_eq!(tree.shadow_root_of(host), Some(shadow));
        tree.remove(host);
        assert!(!tree.is_alive(shadow));
        assert!(!tree.is_alive(inner));
    }

    #[test]
    fn logical_parent_of_a_shadow_root_is_its_host() {
        let (mut tree, root) = page(600.0);
        let host = tree.insert(Some(root), element(Rect::new(0.0, 0.0, 200.0, 200.0)));
        let shadow = tree.insert_shadow_root(host, ElementData::default());
        assert_eq!(tree.parent_of(shadow), None);
        assert_eq!(tree.logical_parent(shadow), Some(host));
        assert!(tree.is_element(shadow));
        assert_eq!(tree.data(shadow).map(|d| d.kind), Some(NodeKind::ShadowRoot));
    }

    #[test]
    fn scroll_into_view_walks_out_of_a_shadow_tree() {
        // root <- scroller host <- #shadow-root <- target. The chain must
        // hop from the fragment to the host and collect the host's frame.
        let (mut tree, root) = page(2000.0);
        let host = tree.insert(
            Some(root),
            scroller(Rect::new(0.0, 0.0, 200.0, 300.0), Size::new(200.0, 900.0)),
        );
        let shadow = tree.insert_shadow_root(host, ElementData::default());
        let target = tree.insert(Some(shadow), element(Rect::new(0.0, 500.0, 100.0, 550.0)));

        let options = ScrollIntoViewOptions {
            block: ScrollAlign::Start,
            ..Default::default()
        };
        let actions = compute_scroll_into_view(&tree, target, &options).unwrap();
        let nodes: Vec<_> = actions.iter().map(|a| a.node).collect();
        assert_eq!(nodes, [host, root]);
        assert_eq!(actions[0].top, 500.0);
    }

    #[test]
    fn document_nodes_reject_scroll_targets() {
        let mut tree = ElementTree::new();
        let doc = tree.insert(
            None,
            ElementData {
                kind: NodeKind::Document,
                ..ElementData::default()
            },
        );
        let root = tree.insert(Some(doc), element(Rect::new(0.0, 0.0, 800.0, 600.0)));
        tree.set_root_scroller(root);
        tree.set_viewport(Size::new(800.0, 600.0), Vec2::ZERO);

        let err = compute_scroll_into_view(&tree, doc, &ScrollIntoViewOptions::default());
        assert!(err.is_err());
    }

    #[test]
    fn stale_targets_are_rejected_like_non_elements() {
        let (mut tree, root) = page(600.0);
        let target = tree.insert(Some(root), element(Rect::new(0.0, 0.0, 100.0, 100.0)));
        tree.remove(target);
        let err = compute_scroll_into_view(&tree, target, &ScrollIntoViewOptions::default());
        assert!(err.is_err());
    }

    #[test]
    fn default_alignment_centers_the_block_axis() {
        // Target at 400..450 in a 2000-tall page; Center against the
        // 600-tall viewport puts the document at 425 - 300 = 125.
        let (mut tree, root) = page(2000.0);
        let target = tree.insert(Some(root), element(Rect::new(0.0, 400.0, 100.0, 450.0)));
        let actions =
            compute_scroll_into_view(&tree, target, &ScrollIntoViewOptions::default()).unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].node, root);
        assert_eq!(actions[0].top, 125.0);
        assert_eq!(actions[0].left, 0.0);
    }

    #[test]
    fn if_needed_short_circuits_inside_a_scrolled_frame() {
        let (mut tree, root) = page(2000.0);
        let frame = tree.insert(
            Some(root),
            scroller(Rect::new(0.0, 0.0, 400.0, 500.0), Size::new(400.0, 1500.0)),
        );
        let target = tree.insert(Some(frame), element(Rect::new(10.0, 100.0, 110.0, 150.0)));

        let options = ScrollIntoViewOptions {
            scroll_mode: ScrollMode::IfNeeded,
            ..Default::default()
        };
        let actions = compute_scroll_into_view(&tree, target, &options).unwrap();
        assert!(actions.is_empty());

        // Push the target below the frame: the short-circuit no longer
        // applies and every frame in the chain gets an action.
        tree.set_rect(target, Rect::new(10.0, 700.0, 110.0, 750.0));
        let actions = compute_scroll_into_view(&tree, target, &options).unwrap();
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn boundary_confines_scrolling_to_an_inner_frame() {
        let (mut tree, root) = page(2000.0);
        let outer = tree.insert(
            Some(root),
            scroller(Rect::new(0.0, 0.0, 400.0, 600.0), Size::new(400.0, 3000.0)),
        );
        let inner = tree.insert(
            Some(outer),
            scroller(Rect::new(0.0, 0.0, 300.0, 300.0), Size::new(300.0, 1200.0)),
        );
        let target = tree.insert(Some(inner), element(Rect::new(0.0, 800.0, 100.0, 850.0)));

        let options = ScrollIntoViewOptions {
            block: ScrollAlign::Start,
            boundary: Boundary::Node(inner),
            ..Default::default()
        };
        let actions = compute_scroll_into_view(&tree, target, &options).unwrap();
        let nodes: Vec<_> = actions.iter().map(|a| a.node).collect();
        // The boundary frame itself still scrolls; outer and root do not.
        assert_eq!(nodes, [inner]);
        assert_eq!(actions[0].top, 800.0);
    }

    #[test]
    fn skip_overflow_hidden_bypasses_hidden_frames() {
        let (mut tree, root) = page(2000.0);
        let hidden = tree.insert(
            Some(root),
            ElementData {
                overflow_x: Overflow::Hidden,
                overflow_y: Overflow::Hidden,
                ..scroller(Rect::new(0.0, 0.0, 400.0, 300.0), Size::new(400.0, 900.0))
            },
        );
        let target = tree.insert(Some(hidden), element(Rect::new(0.0, 600.0, 100.0, 650.0)));

        let collected = compute_scroll_into_view(
            &tree,
            target,
            &ScrollIntoViewOptions {
                block: ScrollAlign::Start,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(collected.len(), 2);

        let skipped = compute_scroll_into_view(
            &tree,
            target,
            &ScrollIntoViewOptions {
                block: ScrollAlign::Start,
                skip_overflow_hidden: true,
                ..Default::default()
            },
        )
        .unwrap();
        let nodes: Vec<_> = skipped.iter().map(|a| a.node).collect();
        assert_eq!(nodes, [root]);
    }

    #[test]
    fn mutators_only_touch_live_nodes() {
        let (mut tree, root) = page(600.0);
        let a = tree.insert(Some(root), element(Rect::new(0.0, 0.0, 100.0, 100.0)));
        tree.remove(a);
        // No panic, no effect.
        tree.set_rect(a, Rect::new(0.0, 0.0, 10.0, 10.0));
        tree.set_scroll_offset(a, Vec2::new(1.0, 1.0));
        tree.set_overflow(a, Axis::Block, Overflow::Scroll);
        assert!(tree.data(a).is_none());
    }
}
