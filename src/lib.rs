pub mod models;
pub mod pipeline;
pub mod sprite;

pub use models::{BoundingBox, Color, Point, Shape};
pub use pipeline::{DebugConfig, DrawContext, DrawStep, Pipeline};
pub use sprite::{
    generate, generate_with, render, save_png, spider_pipeline, spider_shapes, OUTPUT_PATH,
    SPRITE_SIZE,
};
