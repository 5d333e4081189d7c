// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hour ticks and clock-style tick labels.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use chrono::DateTime;

use crate::model::Timestamp;

const HOUR_MS: i64 = 3_600_000;
const MAX_TICKS: usize = 10_000;

/// Every whole UTC hour in `[start, end]`, inclusive at both ends.
///
/// Returns an empty vector when `end < start`.
pub fn hourly_ticks(start: Timestamp, end: Timestamp) -> Vec<Timestamp> {
    let start_ms = start.timestamp_millis();
    let end_ms = end.timestamp_millis();
    let mut t = start_ms.div_euclid(HOUR_MS) * HOUR_MS;
    if t < start_ms {
        t += HOUR_MS;
    }

    let mut out = Vec::new();
    while t <= end_ms && out.len() < MAX_TICKS {
        let Some(tick) = DateTime::from_timestamp_millis(t) else {
            break;
        };
        out.push(tick);
        t += HOUR_MS;
    }
    out
}

/// Formats a tick as a 12-hour clock time without a leading zero, e.g. `9:00 AM`.
pub fn format_clock(t: Timestamp) -> String {
    t.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use chrono::{TimeDelta, TimeZone, Utc};

    use super::*;

    fn at(h: u32, m: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, 0).unwrap()
    }

    #[test]
    fn ticks_start_at_next_whole_hour_and_include_end() {
        let ticks = hourly_ticks(at(6, 15), at(9, 0));
        assert_eq!(ticks, [at(7, 0), at(8, 0), at(9, 0)]);
    }

    #[test]
    fn full_day_has_twenty_five_ticks() {
        let start = at(0, 0);
        let ticks = hourly_ticks(start, start + TimeDelta::hours(24));
        assert_eq!(ticks.len(), 25);
        assert_eq!(ticks[0], start);
    }

    #[test]
    fn reversed_range_is_empty() {
        assert!(hourly_ticks(at(9, 0), at(8, 0)).is_empty());
    }

    #[test]
    fn clock_labels_use_twelve_hour_format() {
        assert_eq!(format_clock(at(0, 0)), "12:00 AM");
        assert_eq!(format_clock(at(9, 0)), "9:00 AM");
        assert_eq!(format_clock(at(12, 0)), "12:00 PM");
        assert_eq!(format_clock(at(13, 30)), "1:30 PM");
    }
}
