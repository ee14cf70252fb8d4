//! `generate` writes to a path relative to the working directory, so this
//! binary holds a single test to keep the directory change race-free.

use spider_sprite::{generate, generate_with, render, spider_pipeline, OUTPUT_PATH};
use std::path::Path;

#[test]
fn test_generate_writes_fixed_path() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let previous = std::env::current_dir()?;
    std::env::set_current_dir(dir.path())?;

    let outcome = (|| -> anyhow::Result<()> {
        // Directory tree is not created for us
        assert!(generate().is_err());
        assert!(!Path::new("vampire-raiders-client").exists());

        std::fs::create_dir_all("vampire-raiders-client/assets/enemies")?;
        let path = generate()?;
        assert_eq!(path, Path::new(OUTPUT_PATH));
        let first = std::fs::read(&path)?;

        generate()?;
        let second = std::fs::read(&path)?;
        assert_eq!(first, second);

        let entries = std::fs::read_dir("vampire-raiders-client/assets/enemies")?.count();
        assert_eq!(entries, 1);

        // A pipeline carrying debug settings writes the same sprite to the same place
        let pipeline = spider_pipeline()
            .with_verbose(true)
            .with_debug("snapshots".into())?;
        assert_eq!(generate_with(&pipeline)?, path);
        assert_eq!(std::fs::read(&path)?, first);
        assert_eq!(image::open(&path)?.to_rgba8(), render()?);
        assert!(Path::new("snapshots/07_eyes.png").exists());
        Ok(())
    })();

    std::env::set_current_dir(previous)?;
    outcome
}
