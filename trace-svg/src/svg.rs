//! Just enough SVG to draw a traced scene.

use std::fmt::Display;

use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Tag>,
}

impl Tag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, key: &'static str, value: impl Display) -> Self {
        self.attrs.push((key, value.to_string()));
        self
    }

    pub fn add_child(&mut self, child: Tag) {
        self.children.push(child);
    }

    pub fn svg(width: u32, height: u32) -> Self {
        Tag::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", width)
            .attr("height", height)
            .attr("viewBox", format!("0 0 {} {}", width, height))
    }

    pub fn group(stroke: &str, stroke_width: f32) -> Self {
        Tag::new("g")
            .attr("fill", "none")
            .attr("stroke", stroke)
            .attr("stroke-width", stroke_width)
    }

    pub fn circle(centre: Vec2, r: f32, fill: &str) -> Self {
        Tag::new("circle")
            .attr("cx", centre.x)
            .attr("cy", centre.y)
            .attr("r", r)
            .attr("fill", fill)
    }

    pub fn line(a: Vec2, b: Vec2, stroke: &str, stroke_width: f32) -> Self {
        Tag::new("line")
            .attr("x1", a.x)
            .attr("y1", a.y)
            .attr("x2", b.x)
            .attr("y2", b.y)
            .attr("stroke", stroke)
            .attr("stroke-width", stroke_width)
            .attr("stroke-linecap", "round")
    }

    /// Inherits its stroke from the enclosing group.
    pub fn polyline(points: &[Vec2]) -> Self {
        let mut coords = String::with_capacity(points.len() * 12);
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                coords.push(' ');
            }
            coords.push_str(&format!("{:.1},{:.1}", p.x, p.y));
        }
        Tag::new("polyline").attr("points", coords)
    }

    fn render(&self, buf: &mut String) {
        buf.push('<');
        buf.push_str(self.name);
        for (k, v) in &self.attrs {
            buf.push_str(&format!(" {}=\"{}\"", k, v));
        }
        if self.children.is_empty() {
            buf.push_str(" />\n");
            return;
        }
        buf.push_str(">\n");
        for c in &self.children {
            c.render(buf);
        }
        buf.push_str(&format!("</{}>\n", self.name));
    }
}

/// A standalone document with `root` as its only element.
pub fn render(root: &Tag) -> String {
    let mut buf = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    root.render(&mut buf);
    buf
}
