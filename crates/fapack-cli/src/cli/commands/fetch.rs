//! `fapack fetch` – run one batch of downloads.

use anyhow::{Context, Result};
use fapack_core::batch::{self, DirSink, DownloadOutcome};
use fapack_core::config::FapackConfig;
use fapack_core::filename::NameOptions;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub async fn run_fetch(
    cfg: &FapackConfig,
    file: Option<&Path>,
    out: Option<&Path>,
    prepend: Option<String>,
    with_style_prefix: bool,
) -> Result<()> {
    let raw = read_input(file)?;

    // Flags override config for this invocation only.
    let options = NameOptions {
        include_style_prefix: with_style_prefix || cfg.include_style_prefix,
        prepend: prepend.unwrap_or_else(|| cfg.prepend.clone()),
    };
    let dir: PathBuf = match out.map(Path::to_path_buf).or_else(|| cfg.download_dir.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir().context("resolve current directory")?,
    };

    let sink = Arc::new(DirSink::new(dir.clone()));
    let report = batch::run_batch(&raw, &options, sink).await;

    for outcome in &report.outcomes {
        if let DownloadOutcome::Saved(name) = outcome {
            println!("saved {}", dir.join(name).display());
        }
    }

    let failures = report.failures();
    if !failures.is_empty() {
        println!("Could not find the following icons:");
        for name in &failures {
            println!("  {}", name);
        }
        anyhow::bail!(
            "{} of {} icon(s) failed",
            failures.len(),
            report.outcomes.len()
        );
    }

    println!("{} icon(s) saved to {}", report.saved().len(), dir.display());
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("read input file: {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("read stdin")?;
            Ok(raw)
        }
    }
}
