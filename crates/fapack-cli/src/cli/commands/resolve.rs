//! `fapack resolve` – print CDN URLs without fetching.

use anyhow::Result;
use fapack_core::resolver;

pub fn run_resolve(icons: &[String]) -> Result<()> {
    let mut invalid = 0usize;
    for icon in icons {
        match resolver::resolve(icon) {
            Ok(resolved) => println!("{}", resolved.url),
            Err(err) => {
                tracing::warn!("{}", err);
                eprintln!("{}", err);
                invalid += 1;
            }
        }
    }
    if invalid > 0 {
        anyhow::bail!("{} identifier(s) could not be resolved", invalid);
    }
    Ok(())
}
