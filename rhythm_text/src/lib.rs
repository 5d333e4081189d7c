// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement capability for timeline label layout.
//!
//! Badge and callout boxes are sized around *measured* text, and text metrics depend
//! on font rendering rather than string length. The timeline pipeline therefore
//! depends only on the small [`TextMeasurer`] trait defined here:
//! - production hosts bind it to a shaping engine or a canvas,
//! - tests bind it to one of the deterministic measurers in this crate.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// Measures the rendered extent of a single line of text.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers split on `\n` themselves.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Returns `(width, height)` of the measured line.
    fn measure_size(&self, text: &str, style: &TextStyle) -> (f64, f64) {
        let m = self.measure(text, style);
        (m.advance_width, m.line_height())
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a regular sans-serif style with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Returns this style with a bold weight.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.font_weight = FontWeight::BOLD;
        self
    }

    /// Returns this style with the given family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// CSS `serif`.
    Serif,
    /// CSS `sans-serif`.
    SansSerif,
    /// CSS `monospace`.
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);

    /// Whether this weight renders as bold (`>= 600`).
    #[must_use]
    pub fn is_bold(self) -> bool {
        self.0 >= 600
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A heuristic measurer: ~0.6em per glyph, 1em line height, baseline at 0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        TextMetrics {
            advance_width,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}

/// A measurer with a constant advance per character and a constant line height.
///
/// Ignores the style entirely, which makes box sizes easy to predict in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasurer {
    /// Advance width of every character.
    pub advance: f64,
    /// Height of every line.
    pub line_height: f64,
}

impl FixedAdvanceMeasurer {
    /// Creates a measurer with the given per-character advance and line height.
    #[must_use]
    pub fn new(advance: f64, line_height: f64) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, _style: &TextStyle) -> TextMetrics {
        TextMetrics {
            advance_width: self.advance * text.chars().count() as f64,
            ascent: self.line_height,
            descent: 0.0,
            leading: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_measure_scales_with_font_size() {
        let m = HeuristicTextMeasurer;
        let (w, h) = m.measure_size("abcd", &TextStyle::new(10.0));
        assert!((w - 24.0).abs() < 1e-9, "width {w}");
        assert!((h - 10.0).abs() < 1e-9, "height {h}");
    }

    #[test]
    fn fixed_advance_counts_chars_not_bytes() {
        let m = FixedAdvanceMeasurer::new(5.0, 11.0);
        let (w, h) = m.measure_size("café", &TextStyle::new(40.0).bold());
        assert_eq!(w, 20.0, "four chars at 5px");
        assert_eq!(h, 11.0, "style is ignored");
    }

    #[test]
    fn measurer_is_usable_through_references() {
        fn width_of(m: impl TextMeasurer) -> f64 {
            m.measure_size("xy", &TextStyle::default()).0
        }
        let m = FixedAdvanceMeasurer::new(3.0, 1.0);
        assert_eq!(width_of(&m), 6.0, "blanket impl for &T");
    }
}
