use anyhow::{Context, Result};
use tracing::info;

use crate::cli::Config;
use crate::filter::filter_by_extension;
use crate::fs_walk::traverse;
use crate::output::{WriteOutcome, write_list};

pub fn run(cfg: &Config) -> Result<()> {
    println!("\nReading from: {}\n", cfg.dir.display());
    println!("Working...");

    let mut files = traverse(&cfg.dir, cfg.recursive)
        .with_context(|| format!("failed to list files in {}", cfg.dir.display()))?;
    info!(found = files.len(), recursive = cfg.recursive, "traversal finished");

    if let Some(exts) = &cfg.extensions {
        println!("Extensions to look for:");
        println!("{exts}");
        files = filter_by_extension(exts, files);
        info!(kept = files.len(), extensions = exts.len(), "filtered by extension");
    }

    let destination = cfg.out.display();
    write_list(&cfg.out, &files, |outcome| match outcome {
        WriteOutcome::Replaced => {
            println!("\n{destination} was found. Replacing with a new version...")
        }
        WriteOutcome::Created => println!("\n{destination} couldn't be found. Creating..."),
    })
    .context("failed to save the file list")?;

    println!("\nAll found files are listed in: {}", cfg.out.display());
    Ok(())
}
