// Copyright 2025 the Intoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge resolution for "nearest" alignment.

/// Resolves the minimal scroll delta that brings an element's 1D range fully
/// inside a scrolling box's visible range.
///
/// All coordinates live on one axis of the shared coordinate space:
/// `box_start..box_end` is the box's visible range (`box_size` its extent),
/// `elem_start..elem_end` the element's range (`elem_size` its extent), and
/// `border_start` / `border_end` the box's border widths on that axis, with
/// any scrollbar gutter folded into `border_end` by the caller.
///
/// The cases are evaluated in order; the first match wins:
///
/// 1. The element fully surrounds the box, or fits fully inside it. It is
///    already as visible as it can be, so no motion.
/// 2. The element's leading edge is out on the leading side and the element
///    is smaller than the box, or its trailing edge is out on the trailing
///    side and the element is larger: align the leading edges.
/// 3. The element's trailing edge is out on the trailing side and the
///    element is smaller than the box, or its leading edge is out on the
///    leading side and the element is larger: align the trailing edges.
/// 4. Otherwise, no motion.
///
/// The result is a delta to add to the box's current scroll offset. An
/// already-fully-visible element always resolves to `0.0`, and a partially
/// visible one moves by whichever single-edge alignment reveals it with the
/// least displacement.
#[must_use]
pub fn align_nearest(
    box_start: f64,
    box_end: f64,
    box_size: f64,
    border_start: f64,
    border_end: f64,
    elem_start: f64,
    elem_end: f64,
    elem_size: f64,
) -> f64 {
    if (elem_start < box_start && elem_end > box_end)
        || (elem_start > box_start && elem_end < box_end)
    {
        return 0.0;
    }

    if (elem_start < box_start && elem_size < box_size)
        || (elem_end > box_end && elem_size > box_size)
    {
        return elem_start - box_start - border_start;
    }

    if (elem_end > box_end && elem_size < box_size)
        || (elem_start < box_start && elem_size > box_size)
    {
        return elem_end - box_end + border_end;
    }

    0.0
}

#[cfg(test)]
mod tests {
    use super::align_nearest;

    #[test]
    fn fully_visible_element_does_not_move() {
        // Element 100..150 inside box 0..500.
        assert_eq!(
            align_nearest(0.0, 500.0, 500.0, 0.0, 0.0, 100.0, 150.0, 50.0),
            0.0
        );
    }

    #[test]
    fn element_surrounding_the_box_does_not_move() {
        // Element 0..900 around box 100..500: as visible as it can be.
        assert_eq!(
            align_nearest(100.0, 500.0, 400.0, 0.0, 0.0, 0.0, 900.0, 900.0),
            0.0
        );
    }

    #[test]
    fn small_element_above_aligns_its_leading_edge() {
        // Element 20..70 above box 100..500; delta pulls the start edges
        // together, minus the leading border.
        assert_eq!(
            align_nearest(100.0, 500.0, 400.0, 5.0, 0.0, 20.0, 70.0, 50.0),
            20.0 - 100.0 - 5.0
        );
    }

    #[test]
    fn small_element_below_aligns_its_trailing_edge() {
        // Element 600..650 below box 100..500; the trailing border (which
        // includes any scrollbar gutter) pushes the delta further.
        assert_eq!(
            align_nearest(100.0, 500.0, 400.0, 0.0, 7.0, 600.0, 650.0, 50.0),
            650.0 - 500.0 + 7.0
        );
    }

    #[test]
    fn large_element_poking_out_below_aligns_its_leading_edge() {
        // Element 200..900 is larger than box 100..500 and overflows past
        // the trailing edge: reveal it from its start.
        assert_eq!(
            align_nearest(100.0, 500.0, 400.0, 0.0, 0.0, 200.0, 900.0, 700.0),
            100.0
        );
    }

    #[test]
    fn large_element_poking_out_above_aligns_its_trailing_edge() {
        // Element -400..300 is larger than box 100..500 and overflows past
        // the leading edge: reveal it from its end.
        assert_eq!(
            align_nearest(100.0, 500.0, 400.0, 0.0, 0.0, -400.0, 300.0, 700.0),
            300.0 - 500.0
        );
    }

    #[test]
    fn edge_aligned_element_falls_through_to_no_motion() {
        // Element exactly coincides with the box: no case matches.
        assert_eq!(
            align_nearest(0.0, 400.0, 400.0, 0.0, 0.0, 0.0, 400.0, 400.0),
            0.0
        );
    }
}
