// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for timeline scenes.

use std::fmt::Write as _;

use peniko::{Brush, Color};
use rhythm_timeline::{DrawCommand, DrawPayload, Scene, TextAnchor, TextBaseline};

/// Serializes `scene` as a standalone SVG document.
///
/// Commands are in plot coordinates, so they are wrapped in a group translated
/// by the plot origin. `background`, when set, fills the whole surface first.
pub(crate) fn scene_to_svg(scene: &Scene, background: Option<Color>) -> String {
    let area = scene.area;
    let origin = area.plot_origin();
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = area.width,
        h = area.height,
    );
    if let Some(bg) = background {
        let _ = write!(out, r#"<rect width="{}" height="{}""#, area.width, area.height);
        write_paint_attr(&mut out, "fill", &Brush::Solid(bg));
        out.push_str("/>\n");
    }
    let _ = writeln!(out, r#"<g transform="translate({} {})">"#, origin.x, origin.y);

    let mut commands: Vec<&DrawCommand> = scene.commands.iter().collect();
    commands.sort_by_key(|c| c.z_index);
    for command in commands {
        write_command(&mut out, command);
    }

    out.push_str("</g>\n</svg>\n");
    out
}

fn write_command(out: &mut String, command: &DrawCommand) {
    match &command.payload {
        DrawPayload::Rect(r) => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                r.rect.x0,
                r.rect.y0,
                r.rect.width(),
                r.rect.height(),
            );
            if r.corner_radius > 0.0 {
                let _ = write!(out, r#" rx="{}""#, r.corner_radius);
            }
            write_paint_attr(out, "fill", &r.fill);
            if let Some(stroke) = &r.stroke {
                write_paint_attr(out, "stroke", &stroke.brush);
                let _ = write!(out, r#" stroke-width="{}""#, stroke.stroke_width);
            }
            out.push_str("/>\n");
        }
        DrawPayload::Path(p) => {
            let _ = write!(out, r#"<path d="{}" fill="none""#, p.path.to_svg());
            write_paint_attr(out, "stroke", &p.stroke.brush);
            let _ = writeln!(
                out,
                r#" stroke-width="{}" stroke-linecap="round"/>"#,
                p.stroke.stroke_width
            );
        }
        DrawPayload::Line(l) => {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                l.line.p0.x, l.line.p0.y, l.line.p1.x, l.line.p1.y
            );
            write_paint_attr(out, "stroke", &l.stroke.brush);
            let _ = writeln!(out, r#" stroke-width="{}"/>"#, l.stroke.stroke_width);
        }
        DrawPayload::Circle(c) => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}""#,
                c.circle.center.x, c.circle.center.y, c.circle.radius
            );
            write_paint_attr(out, "fill", &c.fill);
            out.push_str("/>\n");
        }
        DrawPayload::Text(t) => {
            let baseline = match t.baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
            };
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" dominant-baseline="{}""#,
                t.pos.x, t.pos.y, t.font_size, baseline
            );
            if t.font_weight.is_bold() {
                let _ = write!(out, r#" font-weight="{}""#, t.font_weight.0);
            }
            out.push_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            write_paint_attr(out, "fill", &t.fill);
            out.push('>');
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
        }
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        _ => ("none".to_owned(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use peniko::color::palette::css;
    use rhythm_timeline::{
        CurrentTimeMarker, FixedAdvanceMeasurer, Highlight, Message, Sample, TimelineInput,
        TimelineRenderer,
    };

    use super::*;

    fn scene() -> Scene {
        let at = |h| Utc.with_ymd_and_hms(2024, 1, 1, h, 0, 0).unwrap();
        let input = TimelineInput::new(
            vec![Sample::new(at(0), 0.8), Sample::new(at(12), 0.2)],
            CurrentTimeMarker::new(at(6), Message::new("Rest & reset", "<10 min>")),
        )
        .with_highlights(vec![Highlight::new(at(3), "Tea", css::ORANGE)]);
        TimelineRenderer::default()
            .render(&input, &FixedAdvanceMeasurer::new(5.0, 10.0))
            .unwrap()
    }

    #[test]
    fn document_is_translated_into_the_plot() {
        let svg = scene_to_svg(&scene(), None);
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 600 1400""#));
        assert!(svg.contains(r#"<g transform="translate(80 40)">"#));
        assert!(svg.trim_end().ends_with("</g>\n</svg>"));
        assert_eq!(svg.matches("<path ").count(), 1);
        assert_eq!(svg.matches("<circle ").count(), 1);
    }

    #[test]
    fn text_is_escaped_and_styled() {
        let svg = scene_to_svg(&scene(), None);
        assert!(svg.contains(">Rest &amp; reset</text>"));
        assert!(svg.contains(">&lt;10 min&gt;</text>"));
        assert!(svg.contains(r#"font-weight="700""#));
        assert!(svg.contains(">12:00 AM</text>"));
    }

    #[test]
    fn translucent_fills_carry_opacity() {
        let svg = scene_to_svg(&scene(), Some(css::BLACK));
        assert!(svg.contains(r##"<rect width="600" height="1400" fill="#000000"/>"##));
        // Zone bands are 25% alpha.
        assert!(svg.contains(r##"fill="#010048" fill-opacity=""##));
    }
}
