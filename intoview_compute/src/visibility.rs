// Copyright 2025 the Intoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The "if needed" visibility short-circuit.

use kurbo::{Rect, Size};

use crate::frame::ScrollFrame;

/// Whether `target_rect` is already visible in every frame of the chain and,
/// for the root frame, within the viewport bounds.
///
/// Ordinary frames are tested on the block axis only; the inline axis is
/// tested solely against the root viewport. Inherited behavior, preserved
/// as observed.
pub(crate) fn target_is_visible<N: Copy>(
    frames: &[ScrollFrame<N>],
    target_rect: Rect,
    viewport_size: Size,
) -> bool {
    frames.iter().all(|frame| {
        if target_rect.y0 < frame.rect.y0 || target_rect.y1 > frame.rect.y1 {
            return false;
        }
        if frame.is_root {
            if target_rect.y1 > viewport_size.height || target_rect.y0 < 0.0 {
                return false;
            }
            if target_rect.x0 > viewport_size.width || target_rect.x1 < 0.0 {
                return false;
            }
        }
        true
    })
}
