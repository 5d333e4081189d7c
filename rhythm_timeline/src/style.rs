// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation defaults for every element the renderer draws.

use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::axis::TimeAxisStyle;
use crate::draw::StrokeStyle;
use crate::label::{LabelStyle, MessageStyle};
use crate::zone::DEFAULT_LABEL_OFFSET;

/// Zone name styling.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneLabelStyle {
    /// Font size.
    pub font_size: f64,
    /// Text paint.
    pub fill: Brush,
    /// Gap between the plot's right edge and the label.
    pub offset: f64,
}

impl Default for ZoneLabelStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            fill: Brush::Solid(Color::from_rgb8(0x33, 0x33, 0x33)),
            offset: DEFAULT_LABEL_OFFSET,
        }
    }
}

/// The current-time line and dot.
#[derive(Clone, Debug, PartialEq)]
pub struct NowMarkerStyle {
    /// Full-width horizontal line.
    pub line: StrokeStyle,
    /// Dot radius.
    pub dot_radius: f64,
    /// Dot paint.
    pub dot_fill: Brush,
}

impl Default for NowMarkerStyle {
    fn default() -> Self {
        Self {
            line: StrokeStyle::solid(css::WHITE, 4.0),
            dot_radius: 5.0,
            dot_fill: Brush::Solid(css::WHITE),
        }
    }
}

/// The current-time message callout.
#[derive(Clone, Debug, PartialEq)]
pub struct CalloutStyle {
    /// Box geometry and text styles.
    pub layout: MessageStyle,
    /// Box paint.
    pub fill: Brush,
    /// Box outline.
    pub stroke: StrokeStyle,
    /// Box corner radius.
    pub corner_radius: f64,
    /// Title paint.
    pub title_fill: Brush,
    /// Description paint.
    pub description_fill: Brush,
}

impl Default for CalloutStyle {
    fn default() -> Self {
        Self {
            layout: MessageStyle::default(),
            fill: Brush::Solid(css::WHITE),
            stroke: StrokeStyle::solid(Color::from_rgb8(0xCC, 0xCC, 0xCC), 1.5),
            corner_radius: 8.0,
            title_fill: Brush::Solid(Color::from_rgb8(0x22, 0x22, 0x22)),
            description_fill: Brush::Solid(Color::from_rgb8(0x55, 0x55, 0x55)),
        }
    }
}

/// Highlight badges. Outline and text take each highlight's own color.
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeStyle {
    /// Measured-box sizing.
    pub label: LabelStyle,
    /// Box paint.
    pub fill: Brush,
    /// Outline width.
    pub stroke_width: f64,
    /// Box corner radius.
    pub corner_radius: f64,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            label: LabelStyle::highlight(),
            fill: Brush::Solid(css::WHITE),
            stroke_width: 1.2,
            corner_radius: 4.0,
        }
    }
}

/// All presentation settings.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineStyles {
    /// Zone names.
    pub zone_label: ZoneLabelStyle,
    /// Trend curve stroke width.
    pub curve_width: f64,
    /// Left time axis.
    pub axis: TimeAxisStyle,
    /// Current-time line and dot.
    pub now_marker: NowMarkerStyle,
    /// Current-time message.
    pub callout: CalloutStyle,
    /// Highlight badges.
    pub badge: BadgeStyle,
}

impl Default for TimelineStyles {
    fn default() -> Self {
        Self {
            zone_label: ZoneLabelStyle::default(),
            curve_width: 6.0,
            axis: TimeAxisStyle::default(),
            now_marker: NowMarkerStyle::default(),
            callout: CalloutStyle::default(),
            badge: BadgeStyle::default(),
        }
    }
}
