use std::fmt;

/// Decorative glyphs. Each one fills a 10x10 cell whose top-left corner is
/// passed to [`Shape::path_data`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Cross,
    Circle,
    Triangle,
    Plus,
    Lines,
    Zigzag,
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::Cross,
        Shape::Circle,
        Shape::Triangle,
        Shape::Plus,
        Shape::Lines,
        Shape::Zigzag,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Cross => "cross",
            Shape::Circle => "circle",
            Shape::Triangle => "triangle",
            Shape::Plus => "plus",
            Shape::Lines => "lines",
            Shape::Zigzag => "zigzag",
        }
    }

    /// SVG path data for this glyph with its cell's top-left corner at `(x, y)`.
    pub fn path_data(self, x: f64, y: f64) -> String {
        match self {
            Shape::Cross => format!(
                "M {} {} L {} {} M {} {} L {} {}",
                x,
                y,
                x + 10.0,
                y + 10.0,
                x + 10.0,
                y,
                x,
                y + 10.0
            ),
            Shape::Circle => format!(
                "M {} {} A 5 5 0 1 0 {} {} A 5 5 0 1 0 {} {} Z",
                x,
                y + 5.0,
                x + 10.0,
                y + 5.0,
                x,
                y + 5.0
            ),
            Shape::Triangle => format!(
                "M {} {} L {} {} L {} {} Z",
                x,
                y,
                x + 10.0,
                y,
                x + 5.0,
                y + 10.0
            ),
            Shape::Plus => format!(
                "M {} {} L {} {} M {} {} L {} {}",
                x + 5.0,
                y,
                x + 5.0,
                y + 10.0,
                x,
                y + 5.0,
                x + 10.0,
                y + 5.0
            ),
            Shape::Lines => format!(
                "M {} {} L {} {} M {} {} L {} {}",
                x,
                y + 5.0,
                x + 5.0,
                y,
                x + 5.0,
                y + 10.0,
                x + 10.0,
                y + 5.0
            ),
            Shape::Zigzag => {
                let mut path = format!("M {} {}", x, y + 10.0);
                for step in 1..=5 {
                    let px = x + 2.0 * step as f64;
                    let py = if step % 2 == 1 { y } else { y + 10.0 };
                    path.push_str(&format!(" L {} {}", px, py));
                }
                path
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
