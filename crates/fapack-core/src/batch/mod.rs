//! Staggered batch runner.
//!
//! One task per valid identifier, fired at `STAGGER × position` offsets as a
//! crude rate-limit avoidance measure. No retry, no cancellation, no cap on
//! total elapsed time: N icons take N × stagger to even start. Outcomes
//! arrive over a channel in completion order, so the failure list reflects
//! arrival order rather than input order. One failure never aborts the rest.
//!
//! There is no state beyond one run: the report is rebuilt from scratch every
//! call, and nothing guards against overlapping runs on the same sink.

mod sink;

pub use sink::{DirSink, SaveSink};

use std::sync::Arc;
use std::time::Duration;

use crate::fetch;
use crate::filename::{output_filename, NameOptions};
use crate::resolver::{self, ResolvedIcon};

/// Fixed per-position delay between scheduled fetches.
pub const STAGGER: Duration = Duration::from_millis(300);

/// Per-identifier result.
///
/// `Failed` carries the original line text for invalid input and the
/// trailing URL segment for fetch failures; the two kinds are surfaced
/// identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(String),
    Failed(String),
}

/// Result of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Outcomes in arrival order: invalid lines first (recorded during
    /// resolution), then fetches as their staggered tasks complete.
    pub outcomes: Vec<DownloadOutcome>,
}

impl BatchReport {
    /// Labels of everything that could not be resolved or fetched.
    pub fn failures(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                DownloadOutcome::Failed(label) => Some(label.as_str()),
                DownloadOutcome::Saved(_) => None,
            })
            .collect()
    }

    /// Filenames of every saved asset.
    pub fn saved(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                DownloadOutcome::Saved(name) => Some(name.as_str()),
                DownloadOutcome::Failed(_) => None,
            })
            .collect()
    }
}

/// Splits raw input into identifier lines.
///
/// Handles both `\n` and `\r\n` endings. Whitespace-only lines are skipped
/// entirely, so empty input yields an empty batch.
pub fn split_lines(raw: &str) -> Vec<&str> {
    raw.lines().filter(|l| !l.trim().is_empty()).collect()
}

/// Runs one batch: resolve every line, then fetch-and-save each valid
/// identifier on its own staggered task.
///
/// Lines that fail resolution are recorded as `Failed` immediately and never
/// reach the network.
pub async fn run_batch(raw: &str, options: &NameOptions, sink: Arc<dyn SaveSink>) -> BatchReport {
    let mut report = BatchReport::default();

    let mut valid: Vec<ResolvedIcon> = Vec::new();
    for line in split_lines(raw) {
        match resolver::resolve(line) {
            Ok(icon) => valid.push(icon),
            Err(err) => {
                tracing::warn!("{}", err);
                report.outcomes.push(DownloadOutcome::Failed(err.line));
            }
        }
    }

    report
        .outcomes
        .extend(fetch_all(valid, options, sink).await);
    report
}

/// Schedules one fetch-and-save task per icon at `STAGGER × position` and
/// collects outcomes in completion order.
///
/// Exposed separately from [`run_batch`] so the scheduling path can be driven
/// against arbitrary URLs (the resolver pins the production CDN).
pub async fn fetch_all(
    icons: Vec<ResolvedIcon>,
    options: &NameOptions,
    sink: Arc<dyn SaveSink>,
) -> Vec<DownloadOutcome> {
    if icons.is_empty() {
        return Vec::new();
    }

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<DownloadOutcome>();
    for (position, icon) in icons.into_iter().enumerate() {
        let tx = tx.clone();
        let sink = Arc::clone(&sink);
        let options = options.clone();
        tokio::spawn(async move {
            tokio::time::sleep(STAGGER * position as u32).await;
            let outcome = fetch_and_save(icon, &options, sink.as_ref()).await;
            let _ = tx.send(outcome);
        });
    }
    drop(tx);

    let mut outcomes = Vec::new();
    while let Some(outcome) = rx.recv().await {
        outcomes.push(outcome);
    }
    outcomes
}

async fn fetch_and_save(
    icon: ResolvedIcon,
    options: &NameOptions,
    sink: &dyn SaveSink,
) -> DownloadOutcome {
    let url = icon.url.clone();
    let fetched = tokio::task::spawn_blocking(move || fetch::fetch_svg(&url)).await;
    let body = match fetched {
        Ok(Ok(body)) => body,
        Ok(Err(err)) => {
            tracing::warn!("fetch {} failed: {}", icon.url, err);
            return DownloadOutcome::Failed(icon.trailing_segment());
        }
        Err(err) => {
            tracing::warn!("fetch task for {} did not complete: {}", icon.url, err);
            return DownloadOutcome::Failed(icon.trailing_segment());
        }
    };

    let name = output_filename(&icon, options);
    match sink.save(&name, &body) {
        Ok(()) => {
            tracing::debug!("saved {} ({} bytes)", name, body.len());
            DownloadOutcome::Saved(name)
        }
        Err(err) => {
            tracing::warn!("save {} failed: {}", name, err);
            DownloadOutcome::Failed(icon.trailing_segment())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_handles_crlf_and_blanks() {
        let raw = "fab fa-facebook-square\r\nfar fa-star\n\n   \nfas fa-user";
        assert_eq!(
            split_lines(raw),
            vec!["fab fa-facebook-square", "far fa-star", "fas fa-user"]
        );
    }

    #[test]
    fn split_lines_empty_input() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n\r\n  \n").is_empty());
    }

    #[test]
    fn report_partitions_outcomes() {
        let report = BatchReport {
            outcomes: vec![
                DownloadOutcome::Failed("fa-star".to_string()),
                DownloadOutcome::Saved("fa-star.svg".to_string()),
                DownloadOutcome::Failed("user.svg".to_string()),
            ],
        };
        assert_eq!(report.failures(), vec!["fa-star", "user.svg"]);
        assert_eq!(report.saved(), vec!["fa-star.svg"]);
    }
}
