// Copyright 2025 the Intoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The alignment calculator: per-frame scroll deltas and the entry point.

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Rect, Size, Vec2};

use crate::chain::collect_scroll_frames;
use crate::frame::ScrollFrame;
use crate::geometry::ScrollGeometry;
use crate::nearest::align_nearest;
use crate::options::{ScrollAlign, ScrollIntoViewOptions, ScrollMode};
use crate::visibility::target_is_visible;

/// A scroll offset one container should adopt.
///
/// Applying `top`/`left` to `node` (in list order, innermost first) brings
/// the target into view under the requested alignment. The computation never
/// applies anything itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollAction<N> {
    /// The container to scroll.
    pub node: N,
    /// New block-axis (vertical) scroll offset.
    pub top: f64,
    /// New inline-axis (horizontal) scroll offset.
    pub left: f64,
}

/// The supplied target is not an element-like node.
///
/// This is the only failure the computation can produce; it is raised before
/// any geometry query runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidTarget;

impl fmt::Display for InvalidTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("scroll-into-view target must be an element-like node")
    }
}

impl core::error::Error for InvalidTarget {}

/// Running target coordinate pair: where on each axis the fold is trying to
/// place the target within successive frames.
///
/// Seeded once from the target rectangle, then re-derived after every frame
/// so outer frames align against the position the target will occupy once
/// the inner frames' scrolls are applied.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Anchor {
    block: f64,
    inline: f64,
}

impl Anchor {
    fn seed(target: Rect, block: ScrollAlign, inline: ScrollAlign) -> Self {
        Self {
            block: match block {
                ScrollAlign::Start | ScrollAlign::Nearest => target.y0,
                ScrollAlign::End => target.y1,
                ScrollAlign::Center => target.y0 + target.height() / 2.0,
            },
            inline: match inline {
                ScrollAlign::Start | ScrollAlign::Nearest => target.x0,
                ScrollAlign::End => target.x1,
                ScrollAlign::Center => target.x0 + target.width() / 2.0,
            },
        }
    }
}

/// Inputs shared by every fold step.
struct AlignContext {
    block: ScrollAlign,
    inline: ScrollAlign,
    target_size: Size,
    viewport_size: Size,
    viewport_offset: Vec2,
}

/// One step of the fold: the action for `frame` and the anchor the next
/// (outer) frame must align against.
fn align_frame<N: Copy>(
    frame: &ScrollFrame<N>,
    anchor: Anchor,
    ctx: &AlignContext,
) -> (ScrollAction<N>, Anchor) {
    let top = block_scroll(frame, anchor.block, ctx);
    let left = inline_scroll(frame, anchor.inline, ctx);
    let next = Anchor {
        block: anchor.block + frame.scroll_offset.y - top,
        inline: anchor.inline + frame.scroll_offset.x - left,
    };
    (
        ScrollAction {
            node: frame.node,
            top,
            left,
        },
        next,
    )
}

fn block_scroll<N>(frame: &ScrollFrame<N>, anchor: f64, ctx: &AlignContext) -> f64 {
    let viewport_y = ctx.viewport_offset.y;
    let viewport_height = ctx.viewport_size.height;
    let target_height = ctx.target_size.height;
    let scroll_top = frame.scroll_offset.y;
    let rect = frame.rect;
    let border_top = frame.border.y0;
    let border_bottom = frame.border.y1;

    match ctx.block {
        ScrollAlign::Start => {
            if frame.is_root {
                viewport_y + anchor
            } else {
                // The clamp keeps the offset within what the frame can
                // actually scroll to.
                (scroll_top - (rect.y0 - anchor)).min(frame.scroll_size.height - rect.height())
                    - border_top
            }
        }
        ScrollAlign::End => {
            if frame.is_root {
                viewport_y + (anchor - viewport_height)
            } else {
                scroll_top - (rect.y1 - anchor) + border_bottom + frame.scrollbar.height
            }
        }
        ScrollAlign::Center => {
            if frame.is_root {
                viewport_y + anchor - viewport_height / 2.0
            } else {
                scroll_top - (rect.y0 + rect.height() / 2.0 - anchor)
            }
        }
        ScrollAlign::Nearest => {
            if frame.is_root {
                viewport_y
                    + align_nearest(
                        viewport_y,
                        viewport_y + viewport_height,
                        viewport_height,
                        border_top,
                        border_bottom,
                        viewport_y + anchor,
                        viewport_y + anchor + target_height,
                        target_height,
                    )
            } else {
                scroll_top
                    + align_nearest(
                        rect.y0,
                        rect.y1,
                        rect.height(),
                        border_top,
                        border_bottom + frame.scrollbar.height,
                        anchor,
                        anchor + target_height,
                        target_height,
                    )
            }
        }
    }
}

fn inline_scroll<N>(frame: &ScrollFrame<N>, anchor: f64, ctx: &AlignContext) -> f64 {
    let viewport_x = ctx.viewport_offset.x;
    let viewport_width = ctx.viewport_size.width;
    let target_width = ctx.target_size.width;
    let scroll_left = frame.scroll_offset.x;
    let rect = frame.rect;
    let border_left = frame.border.x0;
    let border_right = frame.border.x1;

    match ctx.inline {
        ScrollAlign::Start => {
            if frame.is_root {
                viewport_x + anchor
            } else {
                (scroll_left - (rect.x0 - anchor)).min(frame.scroll_size.width - rect.width())
                    - border_left
            }
        }
        ScrollAlign::End => {
            if frame.is_root {
                viewport_x + (anchor - viewport_width)
            } else {
                scroll_left - (rect.x1 - anchor) + border_right + frame.scrollbar.width
            }
        }
        ScrollAlign::Center => {
            if frame.is_root {
                viewport_x + anchor - viewport_width / 2.0
            } else {
                scroll_left - (rect.x0 + rect.width() / 2.0 - anchor)
            }
        }
        ScrollAlign::Nearest => {
            if frame.is_root {
                viewport_x
                    + align_nearest(
                        viewport_x,
                        viewport_x + viewport_width,
                        viewport_width,
                        border_left,
                        border_right,
                        viewport_x + anchor,
                        viewport_x + anchor + target_width,
                        target_width,
                    )
            } else {
                scroll_left
                    + align_nearest(
                        rect.x0,
                        rect.x1,
                        rect.width(),
                        border_left,
                        border_right + frame.scrollbar.width,
                        anchor,
                        anchor + target_width,
                        target_width,
                    )
            }
        }
    }
}

/// Computes the ordered scroll actions that bring `target` into view.
///
/// Walks the scrollable ancestors of `target` (innermost first, root
/// scrolling node last), snapshots their geometry, and produces one
/// [`ScrollAction`] per frame according to the per-axis alignment in
/// `options`. With [`ScrollMode::IfNeeded`], an already-visible target
/// yields an empty list and no frame is touched.
///
/// The computation is pure: identical snapshots yield identical actions,
/// and applying them is entirely the caller's responsibility.
///
/// # Errors
///
/// Returns [`InvalidTarget`] when `target` is not element-like, before any
/// geometry query runs.
pub fn compute_scroll_into_view<G: ScrollGeometry>(
    geometry: &G,
    target: G::Node,
    options: &ScrollIntoViewOptions<'_, G::Node>,
) -> Result<Vec<ScrollAction<G::Node>>, InvalidTarget> {
    if !geometry.is_element(target) {
        return Err(InvalidTarget);
    }

    let target_rect = geometry.rect_of(target);
    let frames = collect_scroll_frames(
        geometry,
        target,
        &options.boundary,
        options.skip_overflow_hidden,
    );
    let viewport_size = geometry.viewport_size();
    let viewport_offset = geometry.viewport_offset();

    if options.scroll_mode == ScrollMode::IfNeeded
        && target_is_visible(&frames, target_rect, viewport_size)
    {
        return Ok(Vec::new());
    }

    let ctx = AlignContext {
        block: options.block,
        inline: options.inline,
        target_size: target_rect.size(),
        viewport_size,
        viewport_offset,
    };
    let mut actions = Vec::with_capacity(frames.len());
    let mut anchor = Anchor::seed(target_rect, options.block, options.inline);
    for frame in &frames {
        let (action, next) = align_frame(frame, anchor, &ctx);
        actions.push(action);
        anchor = next;
    }
    Ok(actions)
}
