//! # Search Engine Batch Scraper
//!
//! This project is a command-line application that searches a web search engine for every
//! term of a csv column crossed with a list of modifier terms, extracts the results of each
//! page with css selectors, keeps the ones matching a regular expression and writes them to
//! a csv file.
//!
//! ## Features
//!
//! - Read the primary terms from one column of a csv file.
//! - Query the search engine once per (term, modifier) pair with a browser user agent.
//! - Extract title, link and an optional snippet from every result block.
//! - Keep only the results whose link (or title) matches a regex from its start.
//! - Pause a random 30 to 45 seconds between requests, stop a term on `429 Too Many Requests`.
//!
//! ## Usage
//!
//! ### Command-Line Options
//!
//! | Option                | Description                                   | Default Value |
//! |-----------------------|-----------------------------------------------|---------------|
//! | `-c, --config <PATH>` | JSON parameter file describing the run.       | `params.json` |
//!
//! ### Parameter file
//!
//! | Key          | Description                                                  | Required |
//! |--------------|--------------------------------------------------------------|----------|
//! | `filename`   | csv file holding the primary terms                           | yes      |
//! | `colname`    | column of `filename` to read                                 | yes      |
//! | `regex`      | filter, matched from the start of the link (or title)        | yes      |
//! | `terms`      | modifier terms appended to every primary term                | yes      |
//! | `base-class` | selector of one result block                                 | yes      |
//! | `title`      | selector of the title inside a block, holding the link       | yes      |
//! | `details`    | selector of the snippet inside a block                       | no       |
//! | `filter-url` | `false` to filter on the title instead of the link           | no       |
//! | `endpoint`   | search url, defaults to `https://www.google.com/search`      | no       |
//! | `timeout`    | seconds allowed for one search and for one extraction (20)   | no       |
//! | `delay`      | `[min, max]` seconds to pause between searches (`[30, 45]`)  | no       |
//! | `seed`       | seed of the pause generator                                  | no       |
//! | `user-agent` | overrides the browser user agent                             | no       |
//!
//! ### Example
//!
//! ```bash
//! ./gscraper -c params.json
//! ```
//!
//! With `terms.csv` holding a `company` column this writes
//! `terms-output_<timestamp>.csv` with the columns `link, title, extra, company, query`.
mod interface;
pub use interface::{get_args, run, Config, DEFAULT_PARAMS_FILE};
mod errors;
pub use errors::{CResult, ScrapeError};
mod params;
pub use params::*;
mod table;
pub use table::*;
mod page_utils;
pub use page_utils::*;
mod go_scrape;
pub use go_scrape::*;
mod log_creation;
pub use log_creation::*;
