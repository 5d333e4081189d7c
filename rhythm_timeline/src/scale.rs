// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous scales underlying [`crate::TimeAxisMapper`].

use crate::model::Timestamp;

/// A linear mapping from a continuous domain to a continuous range.
///
/// Inputs outside the domain extrapolate; nothing is clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-length domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a range value back into the domain.
    pub fn invert(&self, y: f64) -> f64 {
        Self::new(self.range, self.domain).map(y)
    }

    /// The configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// A linear scale over timestamps, modeled as fractional seconds since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTime {
    inner: ScaleLinear,
}

impl ScaleTime {
    /// Creates a time scale over `[start, end]`.
    pub fn new(domain: (Timestamp, Timestamp), range: (f64, f64)) -> Self {
        Self {
            inner: ScaleLinear::new((seconds(domain.0), seconds(domain.1)), range),
        }
    }

    /// Maps a timestamp into range space.
    pub fn map(&self, t: Timestamp) -> f64 {
        self.inner.map(seconds(t))
    }

    /// Domain length in seconds.
    pub fn span_seconds(&self) -> f64 {
        let (d0, d1) = self.inner.domain();
        d1 - d0
    }
}

/// Millisecond-resolution seconds since the Unix epoch.
pub(crate) fn seconds(t: Timestamp) -> f64 {
    t.timestamp_millis() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    extern crate std;

    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn linear_scale_extrapolates_and_inverts() {
        let s = ScaleLinear::new((0.0, 1.0), (0.0, 440.0));
        assert!((s.map(0.25) - 110.0).abs() < 1e-9);
        assert!((s.map(1.5) - 660.0).abs() < 1e-9, "values past the domain are not clamped");
        assert!((s.invert(220.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn time_scale_maps_quarter_day() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let six = Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();
        let s = ScaleTime::new((start, end), (0.0, 1320.0));
        assert!((s.map(six) - 330.0).abs() < 1e-9);
        assert_eq!(s.span_seconds(), 86_400.0);
    }
}
