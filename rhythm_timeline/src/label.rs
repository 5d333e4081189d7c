// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label box geometry.
//!
//! Highlight badges are sized around measured text: the box is the text extent
//! plus padding, centered horizontally on the anchor and lifted a fixed distance
//! above it. The current-time message uses a fixed-size box instead.
//!
//! Placement is purely anchor-derived. Labels are not moved to avoid each other,
//! so two highlights at nearby times can overlap.

use kurbo::{Point, Rect};
use rhythm_text::{TextMeasurer, TextStyle};

/// Sizing rules for a measured label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Text style used for measuring and drawing.
    pub text: TextStyle,
    /// Horizontal padding on each side of the text.
    pub padding_x: f64,
    /// Vertical padding above and below the text.
    pub padding_y: f64,
    /// How far above the anchor the box center sits.
    pub offset_y: f64,
}

impl LabelStyle {
    /// Highlight badge defaults: 11px text, 6×4 padding, 12px above the anchor.
    pub fn highlight() -> Self {
        Self {
            text: TextStyle::new(11.0),
            padding_x: 6.0,
            padding_y: 4.0,
            offset_y: 12.0,
        }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self::highlight()
    }
}

/// A resolved label: its box and where its (middle/middle aligned) text goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedLabel {
    /// Background box.
    pub rect: Rect,
    /// Text position, at the box center.
    pub text_origin: Point,
}

/// Places labels using a text measurer.
#[derive(Clone, Copy)]
pub struct LabelPlacer<'a> {
    measurer: &'a dyn TextMeasurer,
}

impl core::fmt::Debug for LabelPlacer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LabelPlacer").finish_non_exhaustive()
    }
}

impl<'a> LabelPlacer<'a> {
    /// Creates a placer backed by `measurer`.
    pub fn new(measurer: &'a dyn TextMeasurer) -> Self {
        Self { measurer }
    }

    /// Sizes a box around `text` and centers it `style.offset_y` above `anchor`.
    pub fn place(&self, anchor: Point, text: &str, style: &LabelStyle) -> PlacedLabel {
        let (w, h) = self.measurer.measure_size(text, &style.text);
        let center = Point::new(anchor.x, anchor.y - style.offset_y);
        let size = (w + 2.0 * style.padding_x, h + 2.0 * style.padding_y);
        PlacedLabel {
            rect: Rect::from_center_size(center, size),
            text_origin: center,
        }
    }
}

/// Fixed geometry of the current-time message callout.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageStyle {
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
    /// Distance from the current-time line up to the box top.
    pub offset_above: f64,
    /// Title baseline offset from the box top.
    pub title_dy: f64,
    /// Description baseline offset from the box top.
    pub description_dy: f64,
    /// Title text style.
    pub title: TextStyle,
    /// Description text style.
    pub description: TextStyle,
}

impl Default for MessageStyle {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 60.0,
            offset_above: 70.0,
            title_dy: 20.0,
            description_dy: 40.0,
            title: TextStyle::new(12.0).bold(),
            description: TextStyle::new(11.0),
        }
    }
}

/// Resolved message callout geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MessageLayout {
    /// Background box.
    pub rect: Rect,
    /// Title position (middle anchored, alphabetic baseline).
    pub title_origin: Point,
    /// Description position (middle anchored, alphabetic baseline).
    pub description_origin: Point,
}

/// Centers the message box horizontally in the plot, `offset_above` over `y_now`.
pub fn place_message(inner_width: f64, y_now: f64, style: &MessageStyle) -> MessageLayout {
    let cx = inner_width * 0.5;
    let top = y_now - style.offset_above;
    MessageLayout {
        rect: Rect::new(
            cx - style.width * 0.5,
            top,
            cx + style.width * 0.5,
            top + style.height,
        ),
        title_origin: Point::new(cx, top + style.title_dy),
        description_origin: Point::new(cx, top + style.description_dy),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use rhythm_text::FixedAdvanceMeasurer;

    use super::*;

    #[test]
    fn box_is_text_plus_padding_above_anchor() {
        let m = FixedAdvanceMeasurer::new(5.0, 10.0);
        let placed = LabelPlacer::new(&m).place(
            Point::new(100.0, 200.0),
            "Coffee",
            &LabelStyle::highlight(),
        );
        // 6 chars * 5px = 30 wide, 10 tall; padding 6x4.
        assert_eq!(placed.rect, Rect::new(79.0, 179.0, 121.0, 197.0));
        assert_eq!(placed.text_origin, Point::new(100.0, 188.0));
    }

    #[test]
    fn placement_is_independent_of_other_labels() {
        let m = FixedAdvanceMeasurer::new(6.0, 12.0);
        let placer = LabelPlacer::new(&m);
        let style = LabelStyle::highlight();
        let labels = [
            (Point::new(200.0, 300.0), "Nap"),
            (Point::new(205.0, 302.0), "Walk the dog"),
            (Point::new(10.0, 40.0), "Wake"),
        ];

        let forward: Vec<PlacedLabel> = labels
            .iter()
            .map(|(a, t)| placer.place(*a, t, &style))
            .collect();
        let mut backward: Vec<PlacedLabel> = labels
            .iter()
            .rev()
            .map(|(a, t)| placer.place(*a, t, &style))
            .collect();
        backward.reverse();

        assert_eq!(forward, backward, "order does not matter");
        assert!(
            forward[0].rect.intersect(forward[1].rect).area() > 0.0,
            "nearby labels are allowed to overlap"
        );
    }

    #[test]
    fn message_box_is_centered_above_now_line() {
        let layout = place_message(440.0, 500.0, &MessageStyle::default());
        assert_eq!(layout.rect, Rect::new(20.0, 430.0, 420.0, 490.0));
        assert_eq!(layout.title_origin, Point::new(220.0, 450.0));
        assert_eq!(layout.description_origin, Point::new(220.0, 470.0));
    }
}
