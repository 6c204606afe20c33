use gscraper::{get_args, init_logger, run};
use log::error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();
    let config = get_args();
    match run(config).await {
        Ok(table) => {
            for row in table.rows().iter().take(5) {
                println!("{row:?}");
            }
            ExitCode::SUCCESS
        }
        Err(e) if e.is_startup() => {
            error!("{e}");
            eprintln!("Execution failed. Kindly rerun the script with the correct parameters.");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
