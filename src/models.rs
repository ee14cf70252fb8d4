use image::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, color.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Color { r, g, b, a }
    }
}

/// Inclusive pixel bounds of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        (self.max_x - self.min_x + 1) as u32
    }

    pub fn height(&self) -> u32 {
        (self.max_y - self.min_y + 1) as u32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// A single flat-filled primitive applied to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Axis-aligned filled ellipse
    Ellipse {
        center: Point,
        width_radius: i32,
        height_radius: i32,
        color: Color,
    },
    /// Filled rectangle; both corners are part of the rectangle
    Rect {
        top_left: Point,
        bottom_right: Point,
        color: Color,
    },
}

impl Shape {
    pub const fn circle(center: Point, radius: i32, color: Color) -> Self {
        Shape::Ellipse {
            center,
            width_radius: radius,
            height_radius: radius,
            color,
        }
    }

    pub const fn rect(top_left: Point, bottom_right: Point, color: Color) -> Self {
        Shape::Rect {
            top_left,
            bottom_right,
            color,
        }
    }

    /// Short label used in verbose output
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Ellipse { .. } => "ellipse",
            Shape::Rect { .. } => "rect",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Ellipse { color, .. } | Shape::Rect { color, .. } => *color,
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        match *self {
            Shape::Ellipse {
                center,
                width_radius,
                height_radius,
                ..
            } => BoundingBox {
                min_x: center.x - width_radius,
                min_y: center.y - height_radius,
                max_x: center.x + width_radius,
                max_y: center.y + height_radius,
            },
            Shape::Rect {
                top_left,
                bottom_right,
                ..
            } => BoundingBox {
                min_x: top_left.x.min(bottom_right.x),
                min_y: top_left.y.min(bottom_right.y),
                max_x: top_left.x.max(bottom_right.x),
                max_y: top_left.y.max(bottom_right.y),
            },
        }
    }
}
