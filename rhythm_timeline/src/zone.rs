// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Day-zone background bands.
//!
//! Each [`DayZone`] becomes a full-width rectangle spanning its mapped time range,
//! plus a label anchor just right of the plot at the band's vertical midpoint.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use kurbo::{Point, Rect};
use peniko::Color;

use crate::error::{TimelineError, ZoneOrderingReason};
use crate::mapper::TimeAxisMapper;
use crate::model::DayZone;

/// Horizontal gap between the plot's right edge and zone labels.
pub const DEFAULT_LABEL_OFFSET: f64 = 10.0;

/// A zone resolved into plot coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneBand {
    /// Zone name.
    pub label: String,
    /// Background rectangle.
    pub rect: Rect,
    /// Where the zone name is drawn.
    pub label_anchor: Point,
    /// Background fill.
    pub fill: Color,
}

impl ZoneBand {
    /// Height of the band.
    pub fn height(&self) -> f64 {
        self.rect.height()
    }
}

/// Lays out day zones against a [`TimeAxisMapper`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneLayer {
    /// Gap between the plot's right edge and the labels.
    pub label_offset: f64,
}

impl Default for ZoneLayer {
    fn default() -> Self {
        Self {
            label_offset: DEFAULT_LABEL_OFFSET,
        }
    }
}

impl ZoneLayer {
    /// Resolves `zones` into bands, in input order.
    ///
    /// Fails with [`TimelineError::ZoneOrdering`] if a zone ends before it starts or
    /// starts before the zone listed ahead of it. Contiguity is not checked.
    pub fn layout(
        &self,
        zones: &[DayZone],
        mapper: &TimeAxisMapper,
    ) -> Result<Vec<ZoneBand>, TimelineError> {
        let width = mapper.inner_width();
        let mut out = Vec::with_capacity(zones.len());
        let mut previous: Option<&DayZone> = None;

        for zone in zones {
            if previous.is_some_and(|p| zone.start < p.start) {
                return Err(ordering_error(zone, ZoneOrderingReason::StartsBeforePrevious));
            }
            let y0 = mapper.y_for(zone.start);
            let y1 = mapper.y_for(zone.end);
            if y1 < y0 {
                return Err(ordering_error(zone, ZoneOrderingReason::EndBeforeStart));
            }
            tracing::trace!(label = %zone.label, y0, y1, "zone band");

            out.push(ZoneBand {
                label: zone.label.clone(),
                rect: Rect::new(0.0, y0, width, y1),
                label_anchor: Point::new(width + self.label_offset, (y0 + y1) * 0.5),
                fill: zone.fill,
            });
            previous = Some(zone);
        }
        Ok(out)
    }
}

fn ordering_error(zone: &DayZone, reason: ZoneOrderingReason) -> TimelineError {
    TimelineError::ZoneOrdering {
        label: zone.label.clone(),
        reason,
    }
}

/// The standard five periods of `day` (UTC), from midnight to `23:59:59`.
pub fn default_day_zones(day: NaiveDate) -> Vec<DayZone> {
    const H: i64 = 3600;
    let midnight = day.and_time(NaiveTime::MIN).and_utc();
    let at = |secs: i64| midnight + TimeDelta::seconds(secs);

    let periods: [(&str, i64, i64, Color); 5] = [
        ("Late Night", 0, 6 * H, Color::from_rgb8(1, 0, 72)),
        ("Morning", 6 * H, 12 * H, Color::from_rgb8(101, 67, 33)),
        ("Afternoon", 12 * H, 18 * H, Color::from_rgb8(75, 0, 130)),
        ("Evening", 18 * H, 21 * H, Color::from_rgb8(139, 0, 70)),
        ("Night", 21 * H, 24 * H - 1, Color::from_rgb8(60, 0, 80)),
    ];
    periods
        .into_iter()
        .map(|(label, start, end, rgb)| {
            DayZone::new(label, at(start), at(end), rgb.with_alpha(0.25))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::{DrawingArea, Timestamp};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn at(h: u32, m: u32, s: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, s).unwrap()
    }

    fn full_day_mapper() -> TimeAxisMapper {
        TimeAxisMapper::new(&DrawingArea::default(), (at(0, 0, 0), at(23, 59, 59))).unwrap()
    }

    #[test]
    fn default_zones_cover_the_day_in_order() {
        let zones = default_day_zones(day());
        let labels: Vec<&str> = zones.iter().map(|z| z.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Late Night", "Morning", "Afternoon", "Evening", "Night"]
        );
        assert_eq!(zones[0].start, at(0, 0, 0));
        assert_eq!(zones[4].end, at(23, 59, 59));
        assert!(
            zones.windows(2).all(|w| w[0].end == w[1].start),
            "zones are contiguous"
        );
    }

    #[test]
    fn contiguous_zones_fill_the_plot_height() {
        let bands = ZoneLayer::default()
            .layout(&default_day_zones(day()), &full_day_mapper())
            .unwrap();
        let total: f64 = bands.iter().map(ZoneBand::height).sum();
        assert!((total - 1320.0).abs() <= 1.0, "total {total}");
        assert!(
            bands.windows(2).all(|w| (w[0].rect.y1 - w[1].rect.y0).abs() < 1e-9),
            "no gaps or overlaps"
        );
    }

    #[test]
    fn labels_sit_right_of_plot_at_band_midpoint() {
        let mapper = full_day_mapper();
        let bands = ZoneLayer::default()
            .layout(&default_day_zones(day()), &mapper)
            .unwrap();
        let morning = &bands[1];
        assert_eq!(morning.rect.x0, 0.0);
        assert_eq!(morning.rect.width(), 440.0);
        assert_eq!(morning.label_anchor.x, 450.0);
        let mid = (mapper.y_for(at(6, 0, 0)) + mapper.y_for(at(12, 0, 0))) * 0.5;
        assert!((morning.label_anchor.y - mid).abs() < 1e-9);
    }

    #[test]
    fn inverted_zone_is_rejected() {
        let zones = vec![DayZone::new(
            "Backwards",
            at(12, 0, 0),
            at(6, 0, 0),
            Color::from_rgb8(0, 0, 0),
        )];
        let err = ZoneLayer::default()
            .layout(&zones, &full_day_mapper())
            .unwrap_err();
        assert_eq!(
            err,
            TimelineError::ZoneOrdering {
                label: "Backwards".into(),
                reason: ZoneOrderingReason::EndBeforeStart,
            }
        );
    }

    #[test]
    fn out_of_order_zones_are_rejected() {
        let mut zones = default_day_zones(day());
        zones.swap(1, 2);
        let err = ZoneLayer::default()
            .layout(&zones, &full_day_mapper())
            .unwrap_err();
        assert_eq!(
            err,
            TimelineError::ZoneOrdering {
                label: "Morning".into(),
                reason: ZoneOrderingReason::StartsBeforePrevious,
            }
        );
    }
}
