mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from spider_sprite for tests
pub use spider_sprite::{
    render, save_png, spider_pipeline, spider_shapes, BoundingBox, Color, Pipeline, Point, Shape,
    SPRITE_SIZE,
};
