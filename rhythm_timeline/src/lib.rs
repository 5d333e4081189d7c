// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-day energy rhythm timeline.
//!
//! Renders one day as a vertical timeline: time runs top to bottom, an energy
//! level in `[0, 1]` runs left to right. The scene is built from:
//! - **Zones**: tinted background bands for named parts of the day.
//! - **Trend curve**: a smoothed line through the samples, colored per piece by level tier.
//! - **Time axis**: hourly ticks and clock labels down the left edge.
//! - **Current time**: a full-width line, a dot on the curve, and a message callout.
//! - **Highlights**: labeled badges at notable moments.
//!
//! Output is a list of [`DrawCommand`]s in plot coordinates; translate by
//! [`DrawingArea::plot_origin`] to reach surface coordinates. Text is measured
//! through [`TextMeasurer`] so hosts can bring their own shaping.

#![no_std]

extern crate alloc;

mod axis;
mod draw;
mod error;
mod label;
mod mapper;
mod model;
mod renderer;
mod scale;
mod style;
mod time;
mod trend;
pub mod z_order;
mod zone;

pub use axis::{LevelTick, TimeAxisStyle, TimeTick, level_ticks, time_ticks};
pub use draw::{
    CirclePayload, DrawCommand, DrawKind, DrawPayload, DrawSurface, LinePayload, PathPayload,
    RectPayload, StrokeStyle, TextAnchor, TextBaseline, TextPayload,
};
pub use error::{TimelineError, ZoneOrderingReason};
pub use label::{LabelPlacer, LabelStyle, MessageLayout, MessageStyle, PlacedLabel, place_message};
pub use mapper::TimeAxisMapper;
pub use model::{
    CurrentTimeMarker, DayZone, DrawingArea, FALLBACK_LEVEL, Highlight, Margins, Message, Sample,
    Timestamp, level_at, placement_level, validate_samples,
};
pub use renderer::{Scene, TimelineConfig, TimelineInput, TimelineRenderer};
pub use rhythm_text::{
    FixedAdvanceMeasurer, FontFamily, FontWeight, HeuristicTextMeasurer, TextMeasurer,
    TextMetrics, TextStyle,
};
pub use scale::{ScaleLinear, ScaleTime};
pub use style::{BadgeStyle, CalloutStyle, NowMarkerStyle, TimelineStyles, ZoneLabelStyle};
pub use time::{format_clock, hourly_ticks};
pub use trend::{LevelPalette, LevelThresholds, LevelTier, Segment, TrendCurveBuilder};
pub use zone::{DEFAULT_LABEL_OFFSET, ZoneBand, ZoneLayer, default_day_zones};
