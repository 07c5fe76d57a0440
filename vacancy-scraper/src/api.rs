use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{Error, Page, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A recruitment api that can be searched page by page for vacancies of a programming language
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Caption of the report built from this source
    fn title(&self) -> &str;
    /// Currency a salary has to be quoted in to be taken into account
    fn expected_currency(&self) -> &str;
    fn max_pages(&self) -> u32;
    fn per_page(&self) -> u32;
    async fn fetch_page(&self, language: &str, page: u32) -> Result<Page>;
}

/// Shared http client for all sources, every request is bound by `timeout`
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

pub(crate) fn search_text(language: &str) -> String {
    format!("Программист {}", language)
}

pub(crate) async fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let resp = request.send().await?;
    let url = resp.url().to_string();
    let status = resp.status();
    if !status.is_success() {
        let error_body = resp.text().await;
        log::error!(
            "request to {} not successful, status code: {}, error resp body: {:?}",
            url,
            status,
            error_body,
        );
        return Err(Error::RequestNotOk { url, status });
    }
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}
