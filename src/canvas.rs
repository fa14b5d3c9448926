//! Drawing surface and its SVG implementation

use std::fmt::Write;

use crate::colors::Rgb;

/// Location on the canvas, in pixels
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Line end style
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LineCap {
    Butt,
    Round,
    /// Square cap projecting half the line width past the end point
    Square,
}

/// Cubic bezier segment continuing from the previous point of a path
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct CubicBezier {
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

/// Horizontal text anchor
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text anchor
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// Primitive drawing operations that the maze is rendered with
pub trait Canvas {
    /// Fill the whole surface
    fn background(&mut self, color: Rgb);

    fn fill_rect(&mut self, top_left: Point, width: f64, height: f64, color: Rgb);

    fn line(&mut self, start: Point, end: Point, width: f64, cap: LineCap, color: Rgb);

    /// Fill the closed path starting at `start` and following `curves`
    fn fill_bezier_path(&mut self, start: Point, curves: &[CubicBezier], color: Rgb);

    fn text(&mut self, text: &str, anchor: Point, size: f64, align: (HAlign, VAlign), color: Rgb);
}

/// Canvas that records primitives into an SVG document
pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Complete SVG document of everything drawn so far
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
"#,
            w = self.width,
            h = self.height
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        log::trace!("SVG document of {} bytes", svg.len());
        svg
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Canvas for SvgCanvas {
    fn background(&mut self, color: Rgb) {
        // Everything drawn earlier is covered
        self.body.clear();
        let _ = writeln!(
            self.body,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            self.width,
            self.height,
            color.to_hex()
        );
    }

    fn fill_rect(&mut self, top_left: Point, width: f64, height: f64, color: Rgb) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            top_left.x,
            top_left.y,
            width,
            height,
            color.to_hex()
        );
    }

    fn line(&mut self, start: Point, end: Point, width: f64, cap: LineCap, color: Rgb) {
        let cap = match cap {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        };
        let _ = writeln!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="{}"/>"#,
            start.x,
            start.y,
            end.x,
            end.y,
            color.to_hex(),
            width,
            cap
        );
    }

    fn fill_bezier_path(&mut self, start: Point, curves: &[CubicBezier], color: Rgb) {
        let mut d = format!("M {} {}", start.x, start.y);
        for curve in curves {
            let _ = write!(
                d,
                " C {} {}, {} {}, {} {}",
                curve.control1.x,
                curve.control1.y,
                curve.control2.x,
                curve.control2.y,
                curve.end.x,
                curve.end.y
            );
        }
        d.push_str(" Z");
        let _ = writeln!(
            self.body,
            r#"<path d="{}" fill="{c}" stroke="{c}" stroke-width="1"/>"#,
            d,
            c = color.to_hex()
        );
    }

    fn text(&mut self, text: &str, anchor: Point, size: f64, align: (HAlign, VAlign), color: Rgb) {
        let text_anchor = match align.0 {
            HAlign::Left => "start",
            HAlign::Center => "middle",
            HAlign::Right => "end",
        };
        let baseline = match align.1 {
            VAlign::Top => "text-before-edge",
            VAlign::Middle => "central",
            VAlign::Bottom => "text-after-edge",
        };
        let _ = writeln!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="{}" dominant-baseline="{}" fill="{}">{}</text>"#,
            anchor.x,
            anchor.y,
            size,
            text_anchor,
            baseline,
            color.to_hex(),
            escape(text)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{Canvas, CubicBezier, HAlign, LineCap, Point, SvgCanvas, VAlign};
    use crate::colors::Rgb;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    #[test]
    fn background_covers_previous_drawing() {
        let mut canvas = SvgCanvas::new(10.0, 10.0);
        canvas.fill_rect(Point::new(1.0, 1.0), 2.0, 2.0, RED);
        canvas.background(Rgb { r: 0, g: 0, b: 0 });

        let svg = canvas.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert_eq!(svg.matches("<rect").count(), 1);
        assert!(svg.contains(r##"fill="#000000""##));
    }

    #[test]
    fn primitives_are_written_in_order() {
        let mut canvas = SvgCanvas::new(100.0, 50.0);
        canvas.line(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            2.5,
            LineCap::Square,
            RED,
        );
        canvas.fill_bezier_path(
            Point::new(5.0, 5.0),
            &[CubicBezier {
                control1: Point::new(0.0, 0.0),
                control2: Point::new(0.0, 10.0),
                end: Point::new(5.0, 15.0),
            }],
            RED,
        );
        canvas.text(
            "A & B",
            Point::new(100.0, 50.0),
            10.0,
            (HAlign::Right, VAlign::Bottom),
            RED,
        );

        let svg = canvas.to_svg();
        let line = svg.find("<line").unwrap();
        let path = svg.find("<path").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(line < path && path < text);
        assert!(svg.contains(r#"stroke-linecap="square""#));
        assert!(svg.contains(r#"d="M 5 5 C 0 0, 0 10, 5 15 Z""#));
        assert!(svg.contains(r#"text-anchor="end""#));
        assert!(svg.contains("A &amp; B"));
    }
}
