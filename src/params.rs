//! Loading of the JSON parameter file that drives a scraping run.
//!
//! ```json
//! {
//!     "filename": "terms.csv",
//!     "colname": "company",
//!     "regex": "^https://example\\.com",
//!     "terms": ["careers"],
//!     "base-class": ".g",
//!     "title": ".title",
//!     "details": ".desc"
//! }
//! ```
//!
//! `filename` is resolved against the directory holding the parameter file, which is the
//! working directory when the default `params.json` is used.
use crate::{CResult, ResultSelectors, ScrapeError};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://www.google.com/search";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/100.0.4896.127 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_DELAY_SECS: [u64; 2] = [30, 45];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawParams {
    filename: String,
    colname: String,
    regex: String,
    terms: Vec<String>,
    base_class: String,
    title: String,
    details: Option<String>,
    #[serde(default = "default_filter_url")]
    filter_url: bool,
    endpoint: Option<String>,
    timeout: Option<u64>,
    delay: Option<[u64; 2]>,
    seed: Option<u64>,
    user_agent: Option<String>,
}

fn default_filter_url() -> bool {
    true
}

/// Everything a run needs, validated once and then only borrowed.
#[derive(Debug, Clone)]
pub struct Params {
    pub filename: PathBuf,
    pub colname: String,
    pub pattern: String,
    pub filter: Regex,
    /// `true` tests the link against the filter, `false` tests the title
    pub filter_url: bool,
    pub terms: Vec<String>,
    pub selectors: ResultSelectors,
    pub endpoint: String,
    pub timeout: Duration,
    pub delay: RangeInclusive<u64>,
    pub seed: Option<u64>,
    pub user_agent: String,
}

impl Params {
    pub fn get_timeout_secs(&self) -> u64 {
        self.timeout.as_secs()
    }
}

/// compiles `pattern` so that it only matches from the start of the haystack.
pub fn compile_filter(pattern: &str) -> CResult<Regex> {
    Regex::new(pattern).map_err(|e| ScrapeError::Config(format!("invalid regex: {e}")))?;
    Regex::new(&format!(r"\A(?:{pattern})"))
        .map_err(|e| ScrapeError::Config(format!("invalid regex: {e}")))
}

/// Reads and validates the parameter file at `path`.
pub fn load_params<P: AsRef<Path>>(path: P) -> CResult<Params> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| ScrapeError::Config(format!("cannot read {}: {e}", path.display())))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    parse_params(&text, base_dir)
}

/// Parses parameters from JSON text; relative input paths are joined onto `base_dir`.
pub fn parse_params(text: &str, base_dir: &Path) -> CResult<Params> {
    let raw: RawParams = serde_json::from_str(text)
        .map_err(|e| ScrapeError::Config(format!("malformed parameters: {e}")))?;

    let filter = compile_filter(&raw.regex)?;
    let selectors = ResultSelectors::new(&raw.base_class, &raw.title, raw.details.as_deref())?;

    let [min_delay, max_delay] = raw.delay.unwrap_or(DEFAULT_DELAY_SECS);
    if min_delay > max_delay {
        return Err(ScrapeError::Config(format!(
            "delay range [{min_delay}, {max_delay}] is empty"
        )));
    }

    let filename = base_dir.join(&raw.filename);
    if !filename.exists() {
        return Err(ScrapeError::InputFileNotFound(filename));
    }

    Ok(Params {
        filename,
        colname: raw.colname,
        pattern: raw.regex,
        filter,
        filter_url: raw.filter_url,
        terms: raw.terms,
        selectors,
        endpoint: raw.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        timeout: Duration::from_secs(raw.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        delay: min_delay..=max_delay,
        seed: raw.seed,
        user_agent: raw
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_is_prefix_anchored() {
        let re = compile_filter("https://example").unwrap();
        assert!(re.is_match("https://example.com/jobs"));
        assert!(!re.is_match("see https://example.com"));
        // alternation stays inside the anchor
        let re = compile_filter("a|b").unwrap();
        assert!(re.is_match("bcd"));
        assert!(!re.is_match("xb"));
    }

    #[test]
    fn bad_regex_is_a_config_error() {
        assert!(matches!(compile_filter("(unclosed"), Err(ScrapeError::Config(_))));
    }
}
