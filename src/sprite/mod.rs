pub mod primitives;
pub mod steps;

use anyhow::Result;
use image::RgbaImage;
use std::path::{Path, PathBuf};

use crate::models::{Color, Point, Shape};
use crate::pipeline::Pipeline;
use steps::{BodyStep, EyesStep, HeadStep, LegPair, LegsStep, Side};

/// Width and height of the sprite in pixels
pub const SPRITE_SIZE: u32 = 64;

/// Where the game client picks the sprite up, relative to the working directory
pub const OUTPUT_PATH: &str = "vampire-raiders-client/assets/enemies/spider.png";

pub const BODY_COLOR: Color = Color::rgba(60, 40, 30, 255);
pub const LEG_COLOR: Color = Color::rgba(40, 20, 10, 255);
pub const EYE_COLOR: Color = Color::rgba(255, 100, 100, 255);

// Anchor shared by body and legs. The body itself is drawn 3px lower.
pub const BODY_X: i32 = 32;
pub const BODY_Y: i32 = 32;
pub const BODY_RADIUS: i32 = 10;

pub const HEAD_CENTER: Point = Point::new(32, 22);
pub const HEAD_RADIUS: i32 = 6;

pub const LEG_LENGTH: i32 = 12;
pub const LEG_THICKNESS: i32 = 2;
/// Gap between the anchor column and the inner end of each leg
pub const LEG_INSET: i32 = 2;

pub const EYE_CENTERS: [Point; 2] = [Point::new(28, 23), Point::new(36, 23)];
pub const EYE_RADIUS: i32 = 2;

/// The fixed draw sequence: body, head, four leg groups, eyes
pub fn spider_pipeline() -> Pipeline {
    Pipeline::new()
        .add_step(Box::new(BodyStep))
        .add_step(Box::new(HeadStep))
        .add_step(Box::new(LegsStep::new(Side::Left, LegPair::Front)))
        .add_step(Box::new(LegsStep::new(Side::Left, LegPair::Back)))
        .add_step(Box::new(LegsStep::new(Side::Right, LegPair::Front)))
        .add_step(Box::new(LegsStep::new(Side::Right, LegPair::Back)))
        .add_step(Box::new(EyesStep))
}

/// All primitives of the sprite in draw order
pub fn spider_shapes() -> Vec<Shape> {
    spider_pipeline().shapes()
}

/// Rasterize the sprite onto a fresh transparent canvas
pub fn render() -> Result<RgbaImage> {
    spider_pipeline().run(SPRITE_SIZE, SPRITE_SIZE)
}

/// Write the sprite as PNG, overwriting any existing file.
/// Missing parent directories are an error, not created.
pub fn save_png(sprite: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    primitives::write_png(sprite, path)
        .map_err(|e| anyhow::anyhow!("Failed to save sprite to {}: {}", path.display(), e))
}

/// Render the sprite and write it to [`OUTPUT_PATH`]
pub fn generate() -> Result<PathBuf> {
    generate_with(&spider_pipeline())
}

/// Like [`generate`], with a pipeline that already carries verbose/debug settings
pub fn generate_with(pipeline: &Pipeline) -> Result<PathBuf> {
    let sprite = pipeline.run(SPRITE_SIZE, SPRITE_SIZE)?;
    let path = PathBuf::from(OUTPUT_PATH);
    save_png(&sprite, &path)?;
    Ok(path)
}
