use clap::Parser;
use std::path::PathBuf;

use spider_sprite::{generate_with, spider_pipeline, SPRITE_SIZE};

#[derive(Parser)]
#[command(name = "spider_sprite")]
#[command(about = "Draw the 64x64 spider enemy sprite")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save a snapshot after every draw step to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut pipeline = spider_pipeline().with_verbose(args.verbose);
    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    if pipeline.is_verbose() {
        println!(
            "Drawing {}x{} sprite ({} steps)...",
            SPRITE_SIZE,
            SPRITE_SIZE,
            pipeline.steps().len()
        );
    }

    let path = generate_with(&pipeline)?;
    println!("Spider sprite created: {}", path.display());

    if let (Some(debug_dir), true) = (pipeline.debug_dir(), pipeline.is_verbose()) {
        println!("Debug snapshots saved to: {}/", debug_dir.display());
    }

    Ok(())
}
