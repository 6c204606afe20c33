use crate::{load_params, load_terms, start_process, CResult, GoogleClient, OutputTable};
use clap::{command, Arg};
use std::path::PathBuf;

const HELP: &str = r#"
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading}
    {usage}

{all-args}{after-help}
"#;

pub const DEFAULT_PARAMS_FILE: &str = "params.json";

#[derive(Debug)]
pub struct Config {
    pub params_file: PathBuf, // json file describing the run
}
impl Config {
    pub fn get_params_file(&self) -> &PathBuf {
        &self.params_file
    }
}

pub fn get_args() -> Config {
    let matches = command!()
        .about("Batch search-engine scraper").help_template(HELP)
        .next_line_help(true)
        .arg(
            Arg::new("config").short('c')
                .long("config")
                .value_name("PATH")
                .num_args(1)
                .required(false)
                .default_value(DEFAULT_PARAMS_FILE)
                .long_help("json file holding the input file, column, filter regex, modifier terms and result selectors"),
        )
        .get_matches();
    Config {
        params_file: matches
            .get_one::<String>("config")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PARAMS_FILE)),
    }
}

/// Loads the parameters and terms, scrapes, and writes the output table.
pub async fn run(config: Config) -> CResult<OutputTable> {
    let params = load_params(config.get_params_file())?;
    let terms = load_terms(&params.filename, &params.colname)?;
    let client = GoogleClient::from_params(&params)?;
    let (table, _) = start_process(&params, &terms, &client).await?;
    Ok(table)
}
