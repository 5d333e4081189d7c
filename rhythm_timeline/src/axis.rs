// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis generation.
//!
//! The visible axis runs down the left edge of the plot with a tick and a clock
//! label at every whole hour. A horizontal level axis (0% to 100%) is also
//! computed so hosts can use its positions for layout, but it is never drawn.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point};
use peniko::Brush;
use peniko::color::palette::css;

use crate::draw::{DrawCommand, LinePayload, StrokeStyle, TextAnchor, TextPayload};
use crate::mapper::TimeAxisMapper;
use crate::model::Timestamp;
use crate::time::{format_clock, hourly_ticks};
use crate::z_order;

/// Styling for the left time axis.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeAxisStyle {
    /// Domain line and tick stroke.
    pub rule: StrokeStyle,
    /// Tick length, drawn leftward from the plot edge.
    pub tick_size: f64,
    /// Gap between tick end and label.
    pub tick_padding: f64,
    /// Label font size.
    pub label_font_size: f64,
    /// Label paint.
    pub label_fill: Brush,
}

impl Default for TimeAxisStyle {
    fn default() -> Self {
        Self {
            rule: StrokeStyle::default(),
            tick_size: 6.0,
            tick_padding: 3.0,
            label_font_size: 10.0,
            label_fill: Brush::Solid(css::BLACK),
        }
    }
}

/// One hour tick on the time axis.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeTick {
    /// Tick instant.
    pub time: Timestamp,
    /// Mapped vertical position.
    pub y: f64,
    /// Formatted label.
    pub label: String,
}

/// One tick on the hidden level axis.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelTick {
    /// Level value.
    pub level: f64,
    /// Mapped horizontal position.
    pub x: f64,
    /// Percent label, e.g. `40%`.
    pub label: String,
}

/// Hourly ticks across the mapper's time extent.
pub fn time_ticks(mapper: &TimeAxisMapper) -> Vec<TimeTick> {
    let (start, end) = mapper.time_extent();
    hourly_ticks(start, end)
        .into_iter()
        .map(|time| TimeTick {
            time,
            y: mapper.y_for(time),
            label: format_clock(time),
        })
        .collect()
}

/// `count` equal steps over `[0, 1]`, i.e. `count + 1` ticks.
pub fn level_ticks(mapper: &TimeAxisMapper, count: u32) -> Vec<LevelTick> {
    if count == 0 {
        return Vec::new();
    }
    (0..=count)
        .map(|i| {
            let level = f64::from(i) / f64::from(count);
            LevelTick {
                level,
                x: mapper.x_for(level),
                label: format!("{:.0}%", level * 100.0),
            }
        })
        .collect()
}

impl TimeAxisStyle {
    /// Draw commands for the domain line, ticks, and labels.
    pub fn commands(&self, mapper: &TimeAxisMapper) -> Vec<DrawCommand> {
        let ticks = time_ticks(mapper);
        let mut out = Vec::with_capacity(1 + 2 * ticks.len());

        out.push(DrawCommand::new(
            z_order::AXIS_RULES,
            LinePayload {
                line: Line::new((0.0, 0.0), (0.0, mapper.inner_height())),
                stroke: self.rule.clone(),
            },
        ));
        for tick in &ticks {
            out.push(DrawCommand::new(
                z_order::AXIS_RULES,
                LinePayload {
                    line: Line::new((-self.tick_size, tick.y), (0.0, tick.y)),
                    stroke: self.rule.clone(),
                },
            ));
        }

        let label_x = -(self.tick_size + self.tick_padding);
        for tick in ticks {
            out.push(DrawCommand::new(
                z_order::AXIS_LABELS,
                TextPayload::new(Point::new(label_x, tick.y), tick.label)
                    .with_font_size(self.label_font_size)
                    .with_anchor(TextAnchor::End)
                    .with_fill(self.label_fill.clone()),
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::draw::{DrawKind, DrawPayload};
    use crate::model::DrawingArea;

    fn mapper(h0: u32, h1: u32) -> TimeAxisMapper {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, h0, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 1, 1, h1, 0, 0).unwrap();
        TimeAxisMapper::new(&DrawingArea::default(), (t0, t1)).unwrap()
    }

    #[test]
    fn hour_ticks_span_plot_height() {
        let ticks = time_ticks(&mapper(6, 12));
        assert_eq!(ticks.len(), 7);
        assert_eq!(ticks[0].y, 0.0);
        assert!((ticks[6].y - 1320.0).abs() < 1e-9);
        assert_eq!(ticks[0].label, "6:00 AM");
        assert_eq!(ticks[6].label, "12:00 PM");
    }

    #[test]
    fn level_axis_is_percent_of_width() {
        let ticks = level_ticks(&mapper(0, 1), 5);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0%", "20%", "40%", "60%", "80%", "100%"]);
        assert_eq!(ticks[5].x, 440.0);
        assert!(level_ticks(&mapper(0, 1), 0).is_empty());
    }

    #[test]
    fn rules_come_before_labels() {
        let cmds = TimeAxisStyle::default().commands(&mapper(0, 2));
        let kinds: Vec<DrawKind> = cmds.iter().map(DrawCommand::kind).collect();
        assert_eq!(
            kinds,
            [
                DrawKind::Line,
                DrawKind::Line,
                DrawKind::Line,
                DrawKind::Line,
                DrawKind::Text,
                DrawKind::Text,
                DrawKind::Text,
            ]
        );
        let DrawPayload::Text(label) = &cmds[4].payload else {
            panic!("expected a label");
        };
        assert_eq!(label.pos, Point::new(-9.0, 0.0));
        assert_eq!(label.anchor, TextAnchor::End);
    }
}
