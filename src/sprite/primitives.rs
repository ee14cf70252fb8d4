use image::{ImageFormat, RgbaImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use std::path::Path;

use crate::models::Shape;

/// Flat-fill a shape onto the canvas, replacing whatever was underneath.
/// Parts outside the canvas are clipped.
pub fn fill_shape(canvas: &mut RgbaImage, shape: &Shape) {
    match *shape {
        Shape::Ellipse {
            center,
            width_radius,
            height_radius,
            color,
        } => draw_filled_ellipse_mut(
            canvas,
            (center.x, center.y),
            width_radius,
            height_radius,
            color.into(),
        ),
        Shape::Rect { color, .. } => {
            let bounds = shape.bounds();
            let rect = Rect::at(bounds.min_x, bounds.min_y)
                .of_size(bounds.width(), bounds.height());
            draw_filled_rect_mut(canvas, rect, color.into());
        }
    }
}

/// Encode as PNG regardless of the file extension. The parent directory must exist.
pub fn write_png(canvas: &RgbaImage, path: &Path) -> image::ImageResult<()> {
    canvas.save_with_format(path, ImageFormat::Png)
}
