// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color-coded trend curve.
//!
//! The curve is drawn as one independent piece per adjacent sample pair, so the
//! color can change sharply at every sample. A piece takes the color of the tier
//! its *first* sample falls in: it shows the regime the curve is leaving, not a
//! blend toward the next one.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Color;

use crate::mapper::TimeAxisMapper;
use crate::model::Sample;

/// Tier boundaries. Each boundary belongs to the tier above it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelThresholds {
    /// Lowest level of the mid tier.
    pub low: f64,
    /// Lowest level of the high tier.
    pub high: f64,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            low: 0.3,
            high: 0.6,
        }
    }
}

impl LevelThresholds {
    /// Classifies a level.
    pub fn tier(&self, level: f64) -> LevelTier {
        if level >= self.high {
            LevelTier::High
        } else if level >= self.low {
            LevelTier::Mid
        } else {
            LevelTier::Low
        }
    }
}

/// Which band of the level range a value falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LevelTier {
    /// Below `low`.
    Low,
    /// In `[low, high)`.
    Mid,
    /// At or above `high`.
    High,
}

/// Stroke color per tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelPalette {
    /// Color of the low tier.
    pub low: Color,
    /// Color of the mid tier.
    pub mid: Color,
    /// Color of the high tier.
    pub high: Color,
}

impl Default for LevelPalette {
    fn default() -> Self {
        Self {
            low: Color::from_rgb8(0xB7, 0x14, 0x8E),
            mid: Color::from_rgb8(0xDC, 0x8F, 0x69),
            high: Color::from_rgb8(0x25, 0x6E, 0xFF),
        }
    }
}

impl LevelPalette {
    /// Color for `tier`.
    pub fn color(&self, tier: LevelTier) -> Color {
        match tier {
            LevelTier::Low => self.low,
            LevelTier::Mid => self.mid,
            LevelTier::High => self.high,
        }
    }
}

/// The curve piece between two consecutive samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Start and end sample.
    pub points: [Sample; 2],
    /// Tier of the start sample.
    pub tier: LevelTier,
    /// Stroke color.
    pub color: Color,
}

impl Segment {
    /// The smoothed path of this piece in plot coordinates.
    pub fn path(&self, mapper: &TimeAxisMapper) -> BezPath {
        let [a, b] = &self.points;
        monotone_y_curve(mapper.point_for(a), mapper.point_for(b))
    }
}

/// Builds curve segments from a series.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrendCurveBuilder {
    /// Tier boundaries.
    pub thresholds: LevelThresholds,
    /// Tier colors.
    pub palette: LevelPalette,
}

impl TrendCurveBuilder {
    /// Creates a builder.
    pub fn new(thresholds: LevelThresholds, palette: LevelPalette) -> Self {
        Self {
            thresholds,
            palette,
        }
    }

    /// One segment per adjacent pair; empty for fewer than two samples.
    pub fn build_segments(&self, samples: &[Sample]) -> Vec<Segment> {
        samples
            .windows(2)
            .map(|w| {
                let tier = self.thresholds.tier(w[0].level);
                Segment {
                    points: [w[0], w[1]],
                    tier,
                    color: self.palette.color(tier),
                }
            })
            .collect()
    }
}

/// A cubic from `p0` to `p1` with monotone-in-`y` Hermite tangents.
///
/// With only two knots the monotone tangent at both ends is the secant, so the
/// control points sit at one and two thirds along it and `y` never reverses.
fn monotone_y_curve(p0: Point, p1: Point) -> BezPath {
    let d = p1 - p0;
    let mut path = BezPath::new();
    path.move_to(p0);
    path.curve_to(p0 + d * (1.0 / 3.0), p0 + d * (2.0 / 3.0), p1);
    path
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use chrono::{TimeDelta, TimeZone, Utc};
    use kurbo::{ParamCurve, PathSeg, Shape};

    use super::*;
    use crate::model::{DrawingArea, Timestamp};

    fn midnight() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn series(levels: &[f64]) -> Vec<Sample> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &l)| Sample::new(midnight() + TimeDelta::hours(i as i64), l))
            .collect()
    }

    #[test]
    fn segment_count_is_pairs() {
        let b = TrendCurveBuilder::default();
        assert_eq!(b.build_segments(&series(&[0.1, 0.5, 0.9, 0.2])).len(), 3);
        assert!(b.build_segments(&series(&[0.4])).is_empty());
        assert!(b.build_segments(&[]).is_empty());
    }

    #[test]
    fn tier_boundaries_are_inclusive_on_the_high_side() {
        let t = LevelThresholds::default();
        assert_eq!(t.tier(0.6), LevelTier::High);
        assert_eq!(t.tier(0.599_999), LevelTier::Mid);
        assert_eq!(t.tier(0.3), LevelTier::Mid);
        assert_eq!(t.tier(0.299_999), LevelTier::Low);
    }

    #[test]
    fn color_follows_start_sample_only() {
        let b = TrendCurveBuilder::default();
        let p = LevelPalette::default();
        let segs = b.build_segments(&series(&[0.8, 0.1, 0.45, 0.95]));
        let colors: Vec<Color> = segs.iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![p.high, p.low, p.mid]);
    }

    #[test]
    fn path_runs_between_mapped_endpoints_without_reversing_in_y() {
        let samples = series(&[0.9, 0.1, 0.7]);
        let mapper = TimeAxisMapper::from_samples(&DrawingArea::default(), &samples).unwrap();
        let segs = TrendCurveBuilder::default().build_segments(&samples);
        let path = segs[0].path(&mapper);

        let seg = path.segments().next().unwrap();
        let PathSeg::Cubic(c) = seg else {
            panic!("expected a cubic, got {seg:?}");
        };
        assert_eq!(c.p0, mapper.point_for(&samples[0]));
        assert_eq!(c.p3, mapper.point_for(&samples[1]));

        let ys: Vec<f64> = (0..=20).map(|i| c.eval(f64::from(i) / 20.0).y).collect();
        assert!(ys.windows(2).all(|w| w[0] <= w[1] + 1e-9), "{ys:?}");
        assert!(path.bounding_box().y1 <= mapper.y_for(samples[1].time) + 1e-9);
    }
}
