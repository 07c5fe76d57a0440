pub mod api;
pub mod hh;
mod pages;
pub mod superjob;
pub mod types;

pub use api::{build_client, VacancySource};
pub use pages::pages;
pub use types::{Page, VacancyRecord};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' not successful, status code: {status}")]
    RequestNotOk {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Failed to parse response body: '{0}'")]
    Json(#[from] serde_json::Error),
}
