// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-to-plot coordinate transform.
//!
//! Time runs top to bottom: the earliest sample sits at `y = 0` and the latest at
//! the plot's inner height. Levels run left to right across the inner width.

use kurbo::Point;

use crate::error::TimelineError;
use crate::model::{DrawingArea, Sample, Timestamp};
use crate::scale::{ScaleLinear, ScaleTime};

/// Maps timestamps to `y` and normalized levels to `x`, in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeAxisMapper {
    x: ScaleLinear,
    y: ScaleTime,
    extent: (Timestamp, Timestamp),
    inner_width: f64,
    inner_height: f64,
}

impl TimeAxisMapper {
    /// Creates a mapper for an explicit time extent.
    ///
    /// Fails with [`TimelineError::DegenerateDomain`] unless `extent.0 < extent.1`.
    pub fn new(area: &DrawingArea, extent: (Timestamp, Timestamp)) -> Result<Self, TimelineError> {
        if extent.1 <= extent.0 {
            return Err(TimelineError::DegenerateDomain { at: extent.0 });
        }
        let inner_width = area.inner_width();
        let inner_height = area.inner_height();
        Ok(Self {
            x: ScaleLinear::new((0.0, 1.0), (0.0, inner_width)),
            y: ScaleTime::new(extent, (0.0, inner_height)),
            extent,
            inner_width,
            inner_height,
        })
    }

    /// Creates a mapper whose time extent is `[min(time), max(time)]` of `samples`.
    pub fn from_samples(area: &DrawingArea, samples: &[Sample]) -> Result<Self, TimelineError> {
        let mut times = samples.iter().map(|s| s.time);
        let Some(first) = times.next() else {
            return Err(TimelineError::InsufficientSamples { count: 0 });
        };
        let extent = times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
        Self::new(area, extent)
    }

    /// Vertical position of `t`.
    pub fn y_for(&self, t: Timestamp) -> f64 {
        self.y.map(t)
    }

    /// Horizontal position of `level`. Out-of-range levels are not clamped.
    pub fn x_for(&self, level: f64) -> f64 {
        self.x.map(level)
    }

    /// Plot position of a sample.
    pub fn point_for(&self, sample: &Sample) -> Point {
        Point::new(self.x_for(sample.level), self.y_for(sample.time))
    }

    /// The `(earliest, latest)` instants mapped to `0` and the inner height.
    pub fn time_extent(&self) -> (Timestamp, Timestamp) {
        self.extent
    }

    /// Width of the plot area.
    pub fn inner_width(&self) -> f64 {
        self.inner_width
    }

    /// Height of the plot area.
    pub fn inner_height(&self) -> f64 {
        self.inner_height
    }
}
