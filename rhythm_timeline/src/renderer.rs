// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render pass.
//!
//! [`TimelineRenderer::render`] is a pure function of configuration, input, and a
//! text measurer. It validates everything up front, so an error never leaves a
//! half-built scene behind, and then emits draw commands in a fixed z order:
//!
//! 1. zone rectangles
//! 2. zone labels
//! 3. trend segments
//! 4. time axis
//! 5. current-time line and dot
//! 6. current-time message
//! 7. highlight badges

extern crate alloc;

use alloc::borrow::Cow;
use alloc::vec::Vec;

use kurbo::{Circle, Line, Point};
use rhythm_text::TextMeasurer;

use crate::axis::{LevelTick, level_ticks};
use crate::draw::{
    CirclePayload, DrawCommand, DrawSurface, LinePayload, PathPayload, RectPayload, StrokeStyle,
    TextAnchor, TextBaseline, TextPayload, solid,
};
use crate::error::TimelineError;
use crate::label::{LabelPlacer, place_message};
use crate::mapper::TimeAxisMapper;
use crate::model::{
    CurrentTimeMarker, DayZone, DrawingArea, FALLBACK_LEVEL, Highlight, Sample, level_at,
    placement_level, validate_samples,
};
use crate::style::TimelineStyles;
use crate::trend::{LevelPalette, LevelThresholds, Segment, TrendCurveBuilder};
use crate::z_order;
use crate::zone::{ZoneBand, ZoneLayer, default_day_zones};

/// Number of steps on the hidden level axis.
const LEVEL_AXIS_STEPS: u32 = 5;

/// Everything that shapes a render besides the data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineConfig {
    /// Drawing surface size and margins.
    pub area: DrawingArea,
    /// Trend tier boundaries.
    pub thresholds: LevelThresholds,
    /// Trend tier colors.
    pub palette: LevelPalette,
    /// Zones used when the input carries none; `None` means the default day periods.
    pub zones: Option<Vec<DayZone>>,
    /// Presentation settings.
    pub styles: TimelineStyles,
}

impl TimelineConfig {
    /// Sets the drawing area.
    pub fn with_area(mut self, area: DrawingArea) -> Self {
        self.area = area;
        self
    }

    /// Sets the trend tier boundaries.
    pub fn with_thresholds(mut self, thresholds: LevelThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Sets the trend tier colors.
    pub fn with_palette(mut self, palette: LevelPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the fallback zones.
    pub fn with_zones(mut self, zones: Vec<DayZone>) -> Self {
        self.zones = Some(zones);
        self
    }

    /// Sets the presentation settings.
    pub fn with_styles(mut self, styles: TimelineStyles) -> Self {
        self.styles = styles;
        self
    }
}

/// The data for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineInput {
    /// The day's series, in chronological order.
    pub samples: Vec<Sample>,
    /// Zones for this day; overrides [`TimelineConfig::zones`].
    pub zones: Option<Vec<DayZone>>,
    /// Point annotations, drawn in this order.
    pub highlights: Vec<Highlight>,
    /// The current-time marker.
    pub now: CurrentTimeMarker,
}

impl TimelineInput {
    /// Creates an input with no highlights and default zones.
    pub fn new(samples: Vec<Sample>, now: CurrentTimeMarker) -> Self {
        Self {
            samples,
            zones: None,
            highlights: Vec::new(),
            now,
        }
    }

    /// Sets the highlights.
    pub fn with_highlights(mut self, highlights: Vec<Highlight>) -> Self {
        self.highlights = highlights;
        self
    }

    /// Sets this day's zones.
    pub fn with_zones(mut self, zones: Vec<DayZone>) -> Self {
        self.zones = Some(zones);
        self
    }
}

/// The output of one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// The area the geometry was laid out for.
    pub area: DrawingArea,
    /// The coordinate transform used.
    pub mapper: TimeAxisMapper,
    /// Resolved zone bands.
    pub zones: Vec<ZoneBand>,
    /// Trend segments.
    pub segments: Vec<Segment>,
    /// Draw commands in paint order, in plot coordinates.
    pub commands: Vec<DrawCommand>,
    /// Hidden level axis, for layout only.
    pub level_axis: Vec<LevelTick>,
}

impl Scene {
    /// Clears `surface` and draws every command onto it.
    pub fn replay(&self, surface: &mut dyn DrawSurface) {
        surface.clear();
        for command in &self.commands {
            surface.draw(command);
        }
    }
}

/// Builds timeline scenes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineRenderer {
    config: TimelineConfig,
}

impl TimelineRenderer {
    /// Creates a renderer.
    pub fn new(config: TimelineConfig) -> Self {
        Self { config }
    }

    /// The renderer's configuration.
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Lays out and emits the full scene for `input`.
    ///
    /// Samples are validated before the mapper is built, so a series whose times
    /// repeat fails with [`TimelineError::NonIncreasingTime`] rather than
    /// [`TimelineError::DegenerateDomain`]. Only a single sample reaches the
    /// mapper with a zero-length extent.
    pub fn render(
        &self,
        input: &TimelineInput,
        measurer: &dyn TextMeasurer,
    ) -> Result<Scene, TimelineError> {
        validate_samples(&input.samples)?;
        let mapper = TimeAxisMapper::from_samples(&self.config.area, &input.samples)?;
        let zones = self.resolve_zones(input);
        let layer = ZoneLayer {
            label_offset: self.config.styles.zone_label.offset,
        };
        let bands = layer.layout(&zones, &mapper)?;
        let segments = TrendCurveBuilder::new(self.config.thresholds, self.config.palette)
            .build_segments(&input.samples);

        let mut commands = Vec::new();
        self.push_zones(&bands, &mut commands);
        self.push_segments(&segments, &mapper, &mut commands);
        commands.extend(self.config.styles.axis.commands(&mapper));
        self.push_now(&input.now, &input.samples, &mapper, &mut commands);
        self.push_highlights(input, &mapper, measurer, &mut commands);

        tracing::debug!(
            samples = input.samples.len(),
            zones = bands.len(),
            segments = segments.len(),
            highlights = input.highlights.len(),
            commands = commands.len(),
            "rendered timeline scene"
        );

        Ok(Scene {
            area: self.config.area,
            mapper,
            zones: bands,
            segments,
            commands,
            level_axis: level_ticks(&mapper, LEVEL_AXIS_STEPS),
        })
    }

    /// Clears `surface`, renders, and draws the scene onto it.
    ///
    /// On error the surface is left empty.
    pub fn render_into(
        &self,
        input: &TimelineInput,
        measurer: &dyn TextMeasurer,
        surface: &mut dyn DrawSurface,
    ) -> Result<Scene, TimelineError> {
        surface.clear();
        let scene = self.render(input, measurer)?;
        scene.replay(surface);
        Ok(scene)
    }

    fn resolve_zones<'a>(&'a self, input: &'a TimelineInput) -> Cow<'a, [DayZone]> {
        if let Some(zones) = input.zones.as_deref().or(self.config.zones.as_deref()) {
            return Cow::Borrowed(zones);
        }
        match input.samples.first() {
            Some(first) => Cow::Owned(default_day_zones(first.time.date_naive())),
            None => Cow::Borrowed(&[]),
        }
    }

    fn push_zones(&self, bands: &[ZoneBand], out: &mut Vec<DrawCommand>) {
        for band in bands {
            out.push(DrawCommand::new(
                z_order::ZONE_FILLS,
                RectPayload::new(band.rect).with_fill(band.fill),
            ));
        }
        let style = &self.config.styles.zone_label;
        for band in bands {
            out.push(DrawCommand::new(
                z_order::ZONE_LABELS,
                TextPayload::new(band.label_anchor, band.label.clone())
                    .with_font_size(style.font_size)
                    .with_fill(style.fill.clone()),
            ));
        }
    }

    fn push_segments(
        &self,
        segments: &[Segment],
        mapper: &TimeAxisMapper,
        out: &mut Vec<DrawCommand>,
    ) {
        let width = self.config.styles.curve_width;
        for segment in segments {
            out.push(DrawCommand::new(
                z_order::TREND_SEGMENTS,
                PathPayload {
                    path: segment.path(mapper),
                    stroke: StrokeStyle::solid(segment.color, width),
                },
            ));
        }
    }

    fn push_now(
        &self,
        now: &CurrentTimeMarker,
        samples: &[Sample],
        mapper: &TimeAxisMapper,
        out: &mut Vec<DrawCommand>,
    ) {
        let marker = &self.config.styles.now_marker;
        let y = mapper.y_for(now.time);
        let x = mapper.x_for(placement_level(samples, now.time));

        out.push(DrawCommand::new(
            z_order::NOW_MARKER,
            LinePayload {
                line: Line::new((0.0, y), (mapper.inner_width(), y)),
                stroke: marker.line.clone(),
            },
        ));
        out.push(DrawCommand::new(
            z_order::NOW_MARKER,
            CirclePayload {
                circle: Circle::new((x, y), marker.dot_radius),
                fill: marker.dot_fill.clone(),
            },
        ));

        let callout = &self.config.styles.callout;
        let layout = place_message(mapper.inner_width(), y, &callout.layout);
        out.push(DrawCommand::new(
            z_order::NOW_MESSAGE,
            RectPayload::new(layout.rect)
                .with_fill(callout.fill.clone())
                .with_stroke(callout.stroke.clone())
                .with_corner_radius(callout.corner_radius),
        ));
        out.push(DrawCommand::new(
            z_order::NOW_MESSAGE,
            TextPayload::new(layout.title_origin, now.message.title.clone())
                .with_font_size(callout.layout.title.font_size)
                .with_font_weight(callout.layout.title.font_weight)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Alphabetic)
                .with_fill(callout.title_fill.clone()),
        ));
        out.push(DrawCommand::new(
            z_order::NOW_MESSAGE,
            TextPayload::new(layout.description_origin, now.message.description.clone())
                .with_font_size(callout.layout.description.font_size)
                .with_font_weight(callout.layout.description.font_weight)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Alphabetic)
                .with_fill(callout.description_fill.clone()),
        ));
    }

    fn push_highlights(
        &self,
        input: &TimelineInput,
        mapper: &TimeAxisMapper,
        measurer: &dyn TextMeasurer,
        out: &mut Vec<DrawCommand>,
    ) {
        let badge = &self.config.styles.badge;
        let placer = LabelPlacer::new(measurer);
        for h in &input.highlights {
            let level = level_at(&input.samples, h.time).unwrap_or_else(|| {
                tracing::debug!(
                    label = %h.label,
                    time = %h.time,
                    "highlight matches no sample, placing at fallback level"
                );
                FALLBACK_LEVEL
            });
            let anchor = Point::new(mapper.x_for(level), mapper.y_for(h.time));
            let placed = placer.place(anchor, &h.label, &badge.label);

            out.push(DrawCommand::new(
                z_order::HIGHLIGHTS,
                RectPayload::new(placed.rect)
                    .with_fill(badge.fill.clone())
                    .with_stroke(StrokeStyle::solid(h.color, badge.stroke_width))
                    .with_corner_radius(badge.corner_radius),
            ));
            out.push(DrawCommand::new(
                z_order::HIGHLIGHTS,
                TextPayload::new(placed.text_origin, h.label.clone())
                    .with_font_size(badge.label.text.font_size)
                    .with_font_weight(badge.label.text.font_weight)
                    .with_anchor(TextAnchor::Middle)
                    .with_fill(solid(h.color)),
            ));
        }
    }
}
