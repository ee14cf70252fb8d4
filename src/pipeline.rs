use image::RgbaImage;
use std::path::{Path, PathBuf};
use anyhow::Result;

use crate::models::{Color, Shape};
use crate::sprite::primitives;

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Directory receiving one snapshot per step
    pub output_dir: PathBuf,
}

/// Context available to all draw steps
#[derive(Clone, Debug, Default)]
pub struct DrawContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

impl DrawContext {
    /// Save a snapshot of the canvas if debug mode is enabled
    fn save_snapshot(&self, canvas: &RgbaImage, index: usize, name: &str) -> Result<()> {
        let Some(debug_config) = &self.debug else {
            return Ok(());
        };

        let filename = snapshot_filename(index, name);
        let output_path = debug_config.output_dir.join(&filename);
        primitives::write_png(canvas, &output_path)
            .map_err(|e| anyhow::anyhow!("Failed to save debug snapshot: {}", e))?;

        if self.verbose {
            println!("  Debug: saved {}", filename);
        }

        Ok(())
    }
}

/// Snapshot name for a step, e.g. "03_left_front_legs.png"
pub fn snapshot_filename(index: usize, name: &str) -> String {
    format!("{:02}_{}.png", index, name.to_lowercase().replace(' ', "_"))
}

/// One stage of the fixed draw sequence
pub trait DrawStep {
    /// Human-readable name for this step (used in verbose output and snapshot names)
    fn name(&self) -> &str;

    /// Primitives drawn by this step, in order
    fn shapes(&self) -> Vec<Shape>;

    /// Paint this step onto the canvas. Later shapes cover earlier ones.
    fn draw(&self, canvas: &mut RgbaImage, context: &DrawContext) -> Result<()> {
        for shape in self.shapes() {
            if context.verbose {
                let b = shape.bounds();
                println!(
                    "  {} ({}, {})..=({}, {})",
                    shape.kind(),
                    b.min_x,
                    b.min_y,
                    b.max_x,
                    b.max_y
                );
            }
            primitives::fill_shape(canvas, &shape);
        }
        Ok(())
    }
}

/// Composable draw pipeline
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn DrawStep>>,
    context: DrawContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.context.debug = Some(DebugConfig { output_dir });

        Ok(self)
    }

    /// Add a draw step to the pipeline
    pub fn add_step(mut self, step: Box<dyn DrawStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[Box<dyn DrawStep>] {
        &self.steps
    }

    pub fn is_verbose(&self) -> bool {
        self.context.verbose
    }

    /// Every primitive of every step, in draw order
    pub fn shapes(&self) -> Vec<Shape> {
        self.steps.iter().flat_map(|step| step.shapes()).collect()
    }

    /// Draw every step onto a fresh transparent canvas
    pub fn run(&self, width: u32, height: u32) -> Result<RgbaImage> {
        self.run_partial(width, height, self.steps.len())
    }

    /// Draw only the first `num_steps` steps (useful for debugging)
    pub fn run_partial(&self, width: u32, height: u32, num_steps: usize) -> Result<RgbaImage> {
        let mut canvas = RgbaImage::from_pixel(width, height, Color::TRANSPARENT.into());
        self.context.save_snapshot(&canvas, 0, "canvas")?;

        for (step_idx, step) in self.steps.iter().take(num_steps).enumerate() {
            if self.context.verbose {
                println!("Running step: {} ({} shapes)", step.name(), step.shapes().len());
            }

            step.draw(&mut canvas, &self.context)?;
            self.context.save_snapshot(&canvas, step_idx + 1, step.name())?;
        }

        Ok(canvas)
    }

    /// Debug output directory, if debug mode is on
    pub fn debug_dir(&self) -> Option<&Path> {
        self.context
            .debug
            .as_ref()
            .map(|config| config.output_dir.as_path())
    }
}
