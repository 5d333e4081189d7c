// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input data for a single render pass.
//!
//! Everything here is plain data: constructed by the host, validated once on entry
//! to the pipeline, and never mutated afterwards.

extern crate alloc;

use alloc::string::String;

use chrono::{DateTime, Utc};
use kurbo::{Point, Rect};
use peniko::Color;

use crate::error::TimelineError;

/// Instants on the timeline.
pub type Timestamp = DateTime<Utc>;

/// Level used for horizontal placement when a time has no exactly matching sample.
pub const FALLBACK_LEVEL: f64 = 0.5;

/// One observation of the charted metric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// When the level was observed.
    pub time: Timestamp,
    /// Normalized level in `[0, 1]`.
    pub level: f64,
}

impl Sample {
    /// Creates a sample.
    pub fn new(time: Timestamp, level: f64) -> Self {
        Self { time, level }
    }
}

/// A user-supplied point annotation, drawn as a labeled badge.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    /// Time of the annotation; ideally equal to a sample's time.
    pub time: Timestamp,
    /// Badge text.
    pub label: String,
    /// Badge outline and text color.
    pub color: Color,
}

impl Highlight {
    /// Creates a highlight.
    pub fn new(time: Timestamp, label: impl Into<String>, color: Color) -> Self {
        Self {
            time,
            label: label.into(),
            color,
        }
    }
}

/// A named, colored background interval `[start, end)` of the day.
#[derive(Clone, Debug, PartialEq)]
pub struct DayZone {
    /// Zone name, drawn beside the plot.
    pub label: String,
    /// Inclusive start.
    pub start: Timestamp,
    /// Exclusive end.
    pub end: Timestamp,
    /// Background fill.
    pub fill: Color,
}

impl DayZone {
    /// Creates a zone.
    pub fn new(label: impl Into<String>, start: Timestamp, end: Timestamp, fill: Color) -> Self {
        Self {
            label: label.into(),
            start,
            end,
            fill,
        }
    }
}

/// Callout text shown next to the current-time marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    /// Bold first line.
    pub title: String,
    /// Second line.
    pub description: String,
}

impl Message {
    /// Creates a message.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The "now" indicator: a horizontal line, a dot, and a message callout.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentTimeMarker {
    /// The current time.
    pub time: Timestamp,
    /// The callout text.
    pub message: Message,
}

impl CurrentTimeMarker {
    /// Creates a marker.
    pub fn new(time: Timestamp, message: Message) -> Self {
        Self { time, message }
    }
}

/// Margins between the drawing surface edge and the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Margins {
    /// Creates margins in CSS order (top, right, bottom, left).
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(40.0, 80.0, 40.0, 80.0)
    }
}

/// The fixed-size drawing surface.
///
/// All generated geometry is in plot coordinates, whose origin is the top-left
/// corner of the inner area (see [`DrawingArea::plot_origin`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawingArea {
    /// Outer width.
    pub width: f64,
    /// Outer height.
    pub height: f64,
    /// Space reserved around the plot.
    pub margins: Margins,
}

impl DrawingArea {
    /// Creates a drawing area.
    pub fn new(width: f64, height: f64, margins: Margins) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    /// Width of the plot area.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    /// Height of the plot area.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    /// Where plot coordinates `(0, 0)` land on the surface.
    pub fn plot_origin(&self) -> Point {
        Point::new(self.margins.left, self.margins.top)
    }

    /// The plot area in plot coordinates.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.inner_width(), self.inner_height())
    }
}

impl Default for DrawingArea {
    fn default() -> Self {
        Self::new(600.0, 1400.0, Margins::default())
    }
}

/// Checks that a series is usable: non-empty, levels in `[0, 1]`, strictly increasing times.
pub fn validate_samples(samples: &[Sample]) -> Result<(), TimelineError> {
    if samples.is_empty() {
        return Err(TimelineError::InsufficientSamples { count: 0 });
    }
    for (index, s) in samples.iter().enumerate() {
        if !(s.level.is_finite() && (0.0..=1.0).contains(&s.level)) {
            return Err(TimelineError::InvalidLevel {
                index,
                level: s.level,
            });
        }
    }
    if let Some(index) = samples
        .windows(2)
        .position(|w| w[1].time <= w[0].time)
        .map(|i| i + 1)
    {
        return Err(TimelineError::NonIncreasingTime { index });
    }
    Ok(())
}

/// Returns the level of the sample taken exactly at `time`, if any.
///
/// `samples` must be sorted by time (see [`validate_samples`]).
pub fn level_at(samples: &[Sample], time: Timestamp) -> Option<f64> {
    samples
        .binary_search_by_key(&time, |s| s.time)
        .ok()
        .map(|i| samples[i].level)
}

/// Level used to place something at `time`: the exact sample's level, or
/// [`FALLBACK_LEVEL`] when no sample matches.
pub fn placement_level(samples: &[Sample], time: Timestamp) -> f64 {
    level_at(samples, time).unwrap_or(FALLBACK_LEVEL)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use chrono::TimeZone;

    use super::*;

    fn at(h: u32, m: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, 0).unwrap()
    }

    #[test]
    fn default_area_matches_reference_layout() {
        let area = DrawingArea::default();
        assert_eq!(area.inner_width(), 440.0, "600 - 80 - 80");
        assert_eq!(area.inner_height(), 1320.0, "1400 - 40 - 40");
        assert_eq!(area.plot_origin(), Point::new(80.0, 40.0));
    }

    #[test]
    fn validation_rejects_empty_and_out_of_range() {
        assert_eq!(
            validate_samples(&[]),
            Err(TimelineError::InsufficientSamples { count: 0 })
        );

        let samples = vec![Sample::new(at(0, 0), 0.4), Sample::new(at(1, 0), 1.2)];
        assert_eq!(
            validate_samples(&samples),
            Err(TimelineError::InvalidLevel {
                index: 1,
                level: 1.2
            })
        );

        let samples = vec![Sample::new(at(0, 0), f64::NAN)];
        assert!(matches!(
            validate_samples(&samples),
            Err(TimelineError::InvalidLevel { index: 0, .. })
        ));
    }

    #[test]
    fn validation_rejects_repeated_times() {
        let samples = vec![
            Sample::new(at(0, 0), 0.4),
            Sample::new(at(1, 0), 0.5),
            Sample::new(at(1, 0), 0.6),
        ];
        assert_eq!(
            validate_samples(&samples),
            Err(TimelineError::NonIncreasingTime { index: 2 })
        );
    }

    #[test]
    fn single_sample_is_valid_input() {
        assert_eq!(validate_samples(&[Sample::new(at(9, 0), 0.0)]), Ok(()));
    }

    #[test]
    fn placement_level_uses_exact_match_or_center() {
        let samples = vec![Sample::new(at(6, 0), 0.0), Sample::new(at(7, 0), 0.9)];
        assert_eq!(placement_level(&samples, at(7, 0)), 0.9);
        assert_eq!(
            placement_level(&samples, at(6, 0)),
            0.0,
            "a zero level is a real match, not a miss"
        );
        assert_eq!(placement_level(&samples, at(6, 30)), FALLBACK_LEVEL);
    }
}
