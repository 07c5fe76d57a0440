use std::time::Duration;

use clap::{Parser, ValueEnum};
use reqwest::Client;
use vacancy_scraper::hh::HeadHunter;
use vacancy_scraper::superjob::SuperJob;
use vacancy_scraper::VacancySource;

use crate::Error;

const DEFAULT_LANGUAGES: [&str; 10] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
    "Go",
    "Shell",
];

#[derive(Parser, Debug)]
#[command(author, version, about = "Average salaries of programming languages in Moscow", long_about = None)]
pub struct Cli {
    /// List of recruitment sites to collect vacancies from
    #[arg(long = "source", value_enum, default_values = ["hh", "superjob"])]
    sources: Vec<Source>,

    /// Programming languages to search vacancies for, reports keep this order
    #[arg(long = "language", default_values = DEFAULT_LANGUAGES)]
    languages: Vec<String>,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Timeout of a single request, in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[arg(long, env = "SUPERJOB_API_KEY", hide_env_values = true)]
    superjob_api_key: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Hh,
    Superjob,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
}

#[derive(Debug, PartialEq)]
enum SourceConfig {
    HeadHunter,
    SuperJob { api_key: String },
}

/// Validated run configuration, building it never touches the network
#[derive(Debug)]
pub struct Config {
    sources: Vec<SourceConfig>,
    pub languages: Vec<String>,
    pub format: Format,
    pub timeout: Duration,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, Error> {
        let api_key = cli.superjob_api_key.filter(|key| !key.trim().is_empty());
        let mut sources = Vec::with_capacity(cli.sources.len());
        for source in cli.sources {
            let source_config = match source {
                Source::Hh => SourceConfig::HeadHunter,
                Source::Superjob => SourceConfig::SuperJob {
                    api_key: api_key.clone().ok_or(Error::MissingApiKey)?,
                },
            };
            sources.push(source_config);
        }
        Ok(Self {
            sources,
            languages: cli.languages,
            format: cli.format,
            timeout: Duration::from_secs(cli.timeout),
        })
    }

    pub fn sources(&self, client: Client) -> Vec<Box<dyn VacancySource>> {
        self.sources
            .iter()
            .map(|source| -> Box<dyn VacancySource> {
                match source {
                    SourceConfig::HeadHunter => Box::new(HeadHunter::new(client.clone())),
                    SourceConfig::SuperJob { api_key } => {
                        Box::new(SuperJob::new(client.clone(), api_key.clone()))
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("salary-stats").chain(args.iter().copied()))
            .expect("Failed to parse args")
    }

    #[test]
    fn test_defaults() {
        let mut cli = parse(&[]);
        cli.superjob_api_key = Some("key".to_owned());
        let config = Config::from_cli(cli).expect("Invalid config");
        assert_eq!(
            config.sources,
            vec![
                SourceConfig::HeadHunter,
                SourceConfig::SuperJob {
                    api_key: "key".to_owned()
                }
            ]
        );
        assert_eq!(config.languages, DEFAULT_LANGUAGES.map(String::from).to_vec());
        assert_eq!(config.format, Format::Table);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_superjob_requires_api_key() {
        let mut cli = parse(&["--source", "superjob"]);
        cli.superjob_api_key = Some("  ".to_owned());
        assert!(matches!(Config::from_cli(cli), Err(Error::MissingApiKey)));
    }

    #[test]
    fn test_hh_alone_needs_no_api_key() {
        let mut cli = parse(&["--source", "hh", "--language", "Rust", "--format", "json"]);
        cli.superjob_api_key = None;
        let config = Config::from_cli(cli).expect("Invalid config");
        assert_eq!(config.sources, vec![SourceConfig::HeadHunter]);
        assert_eq!(config.languages, vec!["Rust".to_owned()]);
        assert_eq!(config.format, Format::Json);
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let result = Cli::try_parse_from(["salary-stats", "--source", "linkedin"]);
        assert!(result.is_err());
    }
}
