//! Vector drawing surfaces that the renderer appends shape groups to.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathElement {
    pub d: String,
}

/// Elements drawn together, translated to `(x, y)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeGroup {
    pub x: f64,
    pub y: f64,
    pub elements: Vec<PathElement>,
}

impl ShapeGroup {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            elements: vec![],
        }
    }

    pub fn push(&mut self, element: PathElement) {
        self.elements.push(element);
    }
}

pub trait VectorSurface {
    fn set_viewport(&mut self, view_box: ViewBox);
    fn append_group(&mut self, group: ShapeGroup);
}

/// Presentation attributes applied to every path on a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: "#ccc".to_string(),
            stroke_width: 0.5,
            fill: "none".to_string(),
        }
    }
}

/// In-memory SVG canvas. Formatting it with `{}` yields a standalone `<svg>` document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgSurface {
    view_box: Option<ViewBox>,
    groups: Vec<ShapeGroup>,
    style: Style,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn view_box(&self) -> Option<ViewBox> {
        self.view_box
    }

    pub fn groups(&self) -> &[ShapeGroup] {
        &self.groups
    }

    pub fn num_elements(&self) -> usize {
        self.groups.iter().map(|group| group.elements.len()).sum()
    }
}

impl VectorSurface for SvgSurface {
    fn set_viewport(&mut self, view_box: ViewBox) {
        self.view_box = Some(view_box);
    }

    fn append_group(&mut self, group: ShapeGroup) {
        self.groups.push(group);
    }
}

impl fmt::Display for SvgSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<svg xmlns=\"http://www.w3.org/2000/svg\"")?;
        if let Some(view_box) = self.view_box {
            write!(f, " viewBox=\"{}\"", view_box)?;
        }
        writeln!(
            f,
            " fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\">",
            self.style.fill, self.style.stroke, self.style.stroke_width
        )?;
        for group in &self.groups {
            writeln!(f, "  <g transform=\"translate({} {})\">", group.x, group.y)?;
            for element in &group.elements {
                writeln!(f, "    <path d=\"{}\"/>", element.d)?;
            }
            writeln!(f, "  </g>")?;
        }
        write!(f, "</svg>")
    }
}

/// Surfaces addressed by id, like elements picked out of a page.
#[derive(Clone, Debug, Default)]
pub struct SvgDocument {
    surfaces: BTreeMap<String, SvgSurface>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, surface: SvgSurface) {
        self.surfaces.insert(id.into(), surface);
    }

    pub fn surface(&self, id: &str) -> Option<&SvgSurface> {
        self.surfaces.get(id)
    }

    pub fn surface_mut(&mut self, id: &str) -> Result<&mut SvgSurface> {
        self.surfaces
            .get_mut(id)
            .ok_or_else(|| Error::MissingSurface(id.to_string()))
    }
}
