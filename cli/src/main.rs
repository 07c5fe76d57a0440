mod config;
mod report;

use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use salary_analyzer::{build_report, Report};
use thiserror::Error;
use vacancy_scraper::build_client;

use crate::config::{Cli, Config, Format};
use crate::report::{render_json, render_table};

const CONFIG_ERROR: u8 = 1;
const DATA_ERROR: u8 = 2;

#[derive(Debug, Error)]
pub enum Error {
    #[error("SUPERJOB_API_KEY not set, it is required for the superjob source")]
    MissingApiKey,
    #[error("Failed to create http client: '{0}'")]
    Client(#[from] vacancy_scraper::Error),
    #[error("Failed to serialize reports: '{0}'")]
    Serialize(#[from] serde_json::Error),
    #[error("No vacancy with a usable salary was found for any language")]
    NoData,
}

impl Error {
    fn exit_code(&self) -> u8 {
        match self {
            Error::MissingApiKey | Error::Client(_) | Error::Serialize(_) => CONFIG_ERROR,
            Error::NoData => DATA_ERROR,
        }
    }
}

fn print_reports(reports: &[Report], format: Format) -> Result<(), Error> {
    match format {
        Format::Table => reports
            .iter()
            .for_each(|report| println!("{}", render_table(report))),
        Format::Json => println!("{}", render_json(reports)?),
    }
    Ok(())
}

async fn run(config: Config) -> Result<(), Error> {
    let client = build_client(config.timeout)?;
    let mut reports = Vec::new();
    for source in config.sources(client) {
        reports.push(build_report(source.as_ref(), &config.languages).await);
    }
    print_reports(&reports, config.format)?;
    check_data(&reports)
}

/// A run without a single processed vacancy is an error, even though every report is printed
fn check_data(reports: &[Report]) -> Result<(), Error> {
    let has_data = reports
        .iter()
        .flat_map(|report| &report.rows)
        .any(|row| row.has_data());
    if !has_data {
        return Err(Error::NoData);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(CONFIG_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let result = match Config::from_cli(args) {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
