// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order layers for timeline draw commands.
//!
//! Every [`crate::DrawCommand`] carries one of these values. The renderer emits
//! commands in non-decreasing z order, so a surface can draw them as they arrive;
//! surfaces that sort should use a stable sort to keep emission order within a layer.

/// Day-zone background rectangles.
pub const ZONE_FILLS: i32 = -100;
/// Day-zone names beside the plot.
pub const ZONE_LABELS: i32 = -90;

/// Trend curve segments.
pub const TREND_SEGMENTS: i32 = 10;

/// Time axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Time axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Current-time line and dot.
pub const NOW_MARKER: i32 = 50;
/// Current-time message box and its text.
pub const NOW_MESSAGE: i32 = 60;

/// Highlight badges, on top of everything else.
pub const HIGHLIGHTS: i32 = 70;
