// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface-agnostic draw commands.
//!
//! The renderer's only output is an ordered list of [`DrawCommand`]s with resolved
//! geometry (in plot coordinates) and paint. A host replays them onto whatever it
//! draws with: SVG, a canvas, a GPU scene.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Line, Point, Rect, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use rhythm_text::FontWeight;

/// Horizontal text alignment relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the position.
    Start,
    /// Text is centered on the position.
    Middle,
    /// Text ends at the position.
    End,
}

/// Vertical text alignment relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The position is the vertical middle of the line.
    Middle,
    /// The position is on the alphabetic baseline.
    Alphabetic,
}

/// A paint + width pair for stroked geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// A filled, optionally outlined and rounded rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Rectangle geometry.
    pub rect: Rect,
    /// Corner radius; `0.0` for square corners.
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Outline, if any.
    pub stroke: Option<StrokeStyle>,
}

impl RectPayload {
    /// A rectangle with the default fill and no outline.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            corner_radius: 0.0,
            fill: Brush::default(),
            stroke: None,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }
}

/// A stroked, unfilled path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Path geometry.
    pub path: BezPath,
    /// Stroke style.
    pub stroke: StrokeStyle,
}

/// A single line of unshaped text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

impl TextPayload {
    /// Creates start-anchored, middle-baseline text at 12px.
    pub fn new(pos: Point, text: impl Into<String>) -> Self {
        Self {
            pos,
            text: text.into(),
            font_size: 12.0,
            font_weight: FontWeight::NORMAL,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: Brush::default(),
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the font weight.
    pub fn with_font_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the horizontal alignment.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical alignment.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }
}

/// A straight stroked line.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePayload {
    /// Line geometry.
    pub line: Line,
    /// Stroke style.
    pub stroke: StrokeStyle,
}

/// A filled circle.
#[derive(Clone, Debug, PartialEq)]
pub struct CirclePayload {
    /// Circle geometry.
    pub circle: Circle,
    /// Fill paint.
    pub fill: Brush,
}

/// The geometry and paint of one draw command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPayload {
    /// `drawRect`.
    Rect(RectPayload),
    /// `drawPath`.
    Path(PathPayload),
    /// `drawText`.
    Text(TextPayload),
    /// `drawLine`.
    Line(LinePayload),
    /// `drawCircle`.
    Circle(CirclePayload),
}

impl DrawPayload {
    /// Geometric bounds, ignoring stroke width. Text has no bounds without shaping.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
            Self::Line(l) => Some(l.line.bounding_box()),
            Self::Circle(c) => Some(c.circle.bounding_box()),
        }
    }

    /// The command vocabulary entry this payload belongs to.
    pub fn kind(&self) -> DrawKind {
        match self {
            Self::Rect(_) => DrawKind::Rect,
            Self::Path(_) => DrawKind::Path,
            Self::Text(_) => DrawKind::Text,
            Self::Line(_) => DrawKind::Line,
            Self::Circle(_) => DrawKind::Circle,
        }
    }
}

impl From<RectPayload> for DrawPayload {
    fn from(value: RectPayload) -> Self {
        Self::Rect(value)
    }
}

impl From<PathPayload> for DrawPayload {
    fn from(value: PathPayload) -> Self {
        Self::Path(value)
    }
}

impl From<TextPayload> for DrawPayload {
    fn from(value: TextPayload) -> Self {
        Self::Text(value)
    }
}

impl From<LinePayload> for DrawPayload {
    fn from(value: LinePayload) -> Self {
        Self::Line(value)
    }
}

impl From<CirclePayload> for DrawPayload {
    fn from(value: CirclePayload) -> Self {
        Self::Circle(value)
    }
}

/// Fieldless mirror of [`DrawPayload`], handy for asserting draw sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawKind {
    /// A rectangle.
    Rect,
    /// A path.
    Path,
    /// A text run.
    Text,
    /// A line.
    Line,
    /// A circle.
    Circle,
}

/// One instruction for a drawing surface.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    /// Paint order (see [`crate::z_order`]).
    pub z_index: i32,
    /// Geometry and paint.
    pub payload: DrawPayload,
}

impl DrawCommand {
    /// Creates a command at `z_index`.
    pub fn new(z_index: i32, payload: impl Into<DrawPayload>) -> Self {
        Self {
            z_index,
            payload: payload.into(),
        }
    }

    /// Shorthand for `self.payload.kind()`.
    pub fn kind(&self) -> DrawKind {
        self.payload.kind()
    }
}

/// A destination for draw commands.
pub trait DrawSurface {
    /// Discards everything drawn so far.
    fn clear(&mut self);
    /// Draws one command on top of what is already there.
    fn draw(&mut self, command: &DrawCommand);
}

impl DrawSurface for Vec<DrawCommand> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.push(command.clone());
    }
}

/// Solid brush shorthand.
pub(crate) fn solid(color: Color) -> Brush {
    Brush::Solid(color)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn text_has_no_bounds_shapes_do() {
        let text = DrawPayload::from(TextPayload::new(Point::new(1.0, 2.0), "x"));
        assert_eq!(text.bounds(), None);

        let circle = DrawPayload::from(CirclePayload {
            circle: Circle::new((10.0, 10.0), 5.0),
            fill: solid(css::WHITE),
        });
        assert_eq!(circle.bounds(), Some(Rect::new(5.0, 5.0, 15.0, 15.0)));
        assert_eq!(circle.kind(), DrawKind::Circle);
    }

    #[test]
    fn vec_surface_clears_before_redraw() {
        let mut surface: Vec<DrawCommand> = Vec::new();
        let cmd = DrawCommand::new(0, RectPayload::new(Rect::new(0.0, 0.0, 1.0, 1.0)));
        surface.draw(&cmd);
        surface.draw(&cmd);
        DrawSurface::clear(&mut surface);
        surface.draw(&cmd);
        assert_eq!(surface.len(), 1, "clear discards earlier commands");
    }
}
