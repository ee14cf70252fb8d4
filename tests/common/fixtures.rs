use image::{DynamicImage, RgbaImage};
use spider_sprite::{BoundingBox, Color};
use std::path::Path;

/// Color of a single canvas pixel
pub fn pixel(img: &RgbaImage, x: u32, y: u32) -> Color {
    Color::from(*img.get_pixel(x, y))
}

/// Decode a PNG written by the generator
pub fn load_png(path: &Path) -> DynamicImage {
    image::open(path).expect("Failed to decode written sprite")
}

/// True if the pixel lies inside any of the given boxes
pub fn covered_by_any(boxes: &[BoundingBox], x: u32, y: u32) -> bool {
    boxes.iter().any(|b| b.contains(x as i32, y as i32))
}

pub const BODY: Color = Color::rgba(60, 40, 30, 255);
pub const LEG: Color = Color::rgba(40, 20, 10, 255);
pub const EYE: Color = Color::rgba(255, 100, 100, 255);
