// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON scenario files.
//!
//! Timestamps are RFC 3339 strings and colors are CSS color strings. Both are kept
//! as text during deserialization and converted afterwards so a bad value can be
//! reported with the field it came from.

use chrono::{DateTime, Utc};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use rhythm_timeline::{
    CurrentTimeMarker, DayZone, Highlight, Message, Sample, TimelineInput, Timestamp,
};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ScenarioError {
    #[error("{field}: invalid timestamp {value:?}")]
    Timestamp {
        field: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("{field}: invalid color {value:?}: {reason}")]
    Color {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Scenario {
    samples: Vec<SampleEntry>,
    #[serde(default)]
    highlights: Vec<HighlightEntry>,
    current_time: String,
    #[serde(default)]
    message: MessageEntry,
    #[serde(default)]
    zones: Option<Vec<ZoneEntry>>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SampleEntry {
    time: String,
    level: f64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HighlightEntry {
    time: String,
    label: String,
    color: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MessageEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ZoneEntry {
    label: String,
    start: String,
    end: String,
    color: String,
}

impl Scenario {
    pub(crate) fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Converts to renderer input. Level and ordering checks are left to the renderer.
    pub(crate) fn into_input(self) -> Result<TimelineInput, ScenarioError> {
        let samples = self
            .samples
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                let time = timestamp(&format!("samples[{i}].time"), &s.time)?;
                Ok(Sample::new(time, s.level))
            })
            .collect::<Result<Vec<_>, ScenarioError>>()?;

        let highlights = self
            .highlights
            .into_iter()
            .enumerate()
            .map(|(i, h)| {
                let time = timestamp(&format!("highlights[{i}].time"), &h.time)?;
                let color = color(&format!("highlights[{i}].color"), &h.color)?;
                Ok(Highlight::new(time, h.label, color))
            })
            .collect::<Result<Vec<_>, ScenarioError>>()?;

        let zones = self
            .zones
            .map(|zones| {
                zones
                    .into_iter()
                    .enumerate()
                    .map(|(i, z)| {
                        Ok(DayZone::new(
                            z.label,
                            timestamp(&format!("zones[{i}].start"), &z.start)?,
                            timestamp(&format!("zones[{i}].end"), &z.end)?,
                            color(&format!("zones[{i}].color"), &z.color)?,
                        ))
                    })
                    .collect::<Result<Vec<_>, ScenarioError>>()
            })
            .transpose()?;

        let now = CurrentTimeMarker::new(
            timestamp("current_time", &self.current_time)?,
            Message::new(self.message.title, self.message.description),
        );

        let mut input = TimelineInput::new(samples, now).with_highlights(highlights);
        input.zones = zones;
        Ok(input)
    }
}

fn timestamp(field: &str, value: &str) -> Result<Timestamp, ScenarioError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|source| ScenarioError::Timestamp {
            field: field.to_owned(),
            value: value.to_owned(),
            source,
        })
}

pub(crate) fn color(field: &str, value: &str) -> Result<Color, ScenarioError> {
    parse_color(value)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|e| ScenarioError::Color {
            field: field.to_owned(),
            value: value.to_owned(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "samples": [
            {"time": "2024-03-01T06:00:00Z", "level": 0.4},
            {"time": "2024-03-01T09:00:00+01:00", "level": 0.7}
        ],
        "current_time": "2024-03-01T07:00:00Z"
    }"#;

    #[test]
    fn bundled_scenario_parses() {
        let input = Scenario::from_json(crate::DEFAULT_SCENARIO)
            .unwrap()
            .into_input()
            .unwrap();
        assert!(input.samples.len() >= 2);
        assert!(!input.highlights.is_empty());
        assert!(!input.now.message.title.is_empty());
    }

    #[test]
    fn optional_sections_default() {
        let input = Scenario::from_json(MINIMAL).unwrap().into_input().unwrap();
        assert!(input.highlights.is_empty());
        assert!(input.zones.is_none());
        assert_eq!(input.now.message, Message::default());
        // Offsets are normalized to UTC.
        assert_eq!(input.samples[1].time.to_rfc3339(), "2024-03-01T08:00:00+00:00");
    }

    #[test]
    fn css_colors_keep_alpha() {
        let c = color("zones[0].color", "rgba(1, 0, 72, 0.25)").unwrap();
        let rgba = c.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (1, 0, 72));
        assert_eq!(rgba.a, 64);
    }

    #[test]
    fn bad_values_name_their_field() {
        let json = MINIMAL.replace("2024-03-01T07:00:00Z", "seven o'clock");
        let err = Scenario::from_json(&json).unwrap().into_input().unwrap_err();
        assert!(matches!(&err, ScenarioError::Timestamp { field, .. } if field == "current_time"));

        let err = color("highlights[2].color", "not-a-color").unwrap_err();
        assert!(err.to_string().starts_with("highlights[2].color: invalid color"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = MINIMAL.replace("\"current_time\"", "\"now\": 1, \"current_time\"");
        assert!(Scenario::from_json(&json).is_err());
    }
}
