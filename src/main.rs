// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use filecmdr::{app, cli::Args, config::Config};

fn program_name() -> String {
    std::env::args().next().unwrap_or_else(|| "filecmdr".to_string())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = match Config::try_from(Args::parse()) {
        Ok(config) => config,
        Err(err) => {
            log::debug!("{err}");
            println!("Usage: {} <pathname>", program_name());
            return ExitCode::FAILURE;
        }
    };

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e:#}", program_name());
            ExitCode::FAILURE
        }
    }
}
