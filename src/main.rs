use clap::Parser;
use rotaeno_rating::{app, args::Args, utils::tracing_utils::init_tracing};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let args = Args::parse();

    if let Err(e) = init_tracing(&args.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match app::run(&args) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
