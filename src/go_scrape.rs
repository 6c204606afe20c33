//! The request/parse/filter/accumulate loop.
//!
//! For every primary term, for every modifier term: search, extract, filter, label, append,
//! then pause. A rate-limited answer ends the current primary term; any other failure ends
//! the whole loop and whatever was accumulated so far is still written.
use crate::{
    extract_with_timeout, filter_results, join_query, output_path, CResult, OutputTable, Params,
    ResultItem, ScrapeError, SearchBackend,
};
use chrono::Local;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

/// column holding the modifier term of each row
pub const QUERY_COLUMN: &str = "query";

/// What a single (primary, modifier) step produced.
#[derive(Debug)]
pub enum StepOutcome {
    Accepted(Vec<ResultItem>),
    RateLimited { status: u16, reason: String },
    Fatal(ScrapeError),
}

/// Random pause between requests, reproducible when seeded.
pub struct Pacer {
    rng: StdRng,
    delay: RangeInclusive<u64>,
    pauses: usize,
}

impl Pacer {
    pub fn new(delay: RangeInclusive<u64>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Pacer {
            rng,
            delay,
            pauses: 0,
        }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(params.delay.clone(), params.seed)
    }

    pub fn next_delay(&mut self) -> Duration {
        Duration::from_secs(self.rng.gen_range(self.delay.clone()))
    }

    /// number of pauses taken so far
    pub fn pauses(&self) -> usize {
        self.pauses
    }

    pub async fn pause(&mut self) {
        let delay = self.next_delay();
        self.pauses += 1;
        info!("Waiting for {} seconds before the next search", delay.as_secs());
        tokio::time::sleep(delay).await;
    }
}

async fn run_step<B: SearchBackend + ?Sized>(
    params: &Params,
    backend: &B,
    primary: &str,
    modifier: &str,
) -> CResult<StepOutcome> {
    let response = backend.search(&join_query(primary, modifier)).await?;
    if response.is_rate_limited() {
        return Ok(StepOutcome::RateLimited {
            status: response.status,
            reason: response.reason,
        });
    }

    let items = extract_with_timeout(response.html, params.selectors.clone(), params.timeout).await?;
    let mut kept = filter_results(&params.filter, params.filter_url, items);
    for item in kept.iter_mut() {
        item.set(&params.colname, primary);
        item.set(QUERY_COLUMN, modifier);
        info!("{} {}", response.status, response.reason);
        info!("{item:?}");
    }
    Ok(StepOutcome::Accepted(kept))
}

/// SEARCH -> EXTRACT -> FILTER -> label for one term pair. Never returns an error, failures
/// are folded into [`StepOutcome::Fatal`].
pub async fn scrape_step<B: SearchBackend + ?Sized>(
    params: &Params,
    backend: &B,
    primary: &str,
    modifier: &str,
) -> StepOutcome {
    run_step(params, backend, primary, modifier)
        .await
        .unwrap_or_else(StepOutcome::Fatal)
}

/// Runs the nested loop over `terms` x `params.terms` and returns everything retained.
pub async fn scrape_terms<B: SearchBackend + ?Sized>(
    params: &Params,
    terms: &[String],
    backend: &B,
    pacer: &mut Pacer,
) -> OutputTable {
    let mut table = OutputTable::new();
    'primary: for primary in terms {
        for modifier in &params.terms {
            match scrape_step(params, backend, primary, modifier).await {
                StepOutcome::Accepted(items) => {
                    items.into_iter().for_each(|item| table.push(item));
                    pacer.pause().await;
                }
                StepOutcome::RateLimited { status, reason } => {
                    warn!("Search returned error: {status} {reason} for {primary} {modifier}. Terminating loop.");
                    break;
                }
                StepOutcome::Fatal(e) => {
                    error!("Stopping the scrape at {primary} {modifier}: {e}");
                    break 'primary;
                }
            }
        }
    }
    table
}

/// Scrapes every term pair then writes the table next to the input file.
pub async fn start_process<B: SearchBackend + ?Sized>(
    params: &Params,
    terms: &[String],
    backend: &B,
) -> CResult<(OutputTable, PathBuf)> {
    info!(
        "Initializing gscraper for {} rows in {} and searching for {:?}, keeping results matching {:?}",
        terms.len(),
        params.filename.display(),
        params.terms,
        params.pattern
    );
    let mut pacer = Pacer::from_params(params);
    let table = scrape_terms(params, terms, backend, &mut pacer).await;

    let path = output_path(&params.filename, Local::now());
    table.write_csv(&path)?;
    info!("Wrote {} rows to {}", table.len(), path.display());
    Ok((table, path))
}
