use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::api::{get_json, search_text, VacancySource};
use crate::{Page, Result, VacancyRecord};

const BASE_URL: &str = "https://api.superjob.ru";
const API_KEY_HEADER: &str = "X-Api-App-Id";
const MOSCOW: &str = "Москва";
const MAX_PAGES: u32 = 10;
const PER_PAGE: u32 = 20;

#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    keyword: String,
    town: &'a str,
    page: u32,
    count: u32,
}

/// SuperJob reports a missing bound as 0 and keeps the range flat on the vacancy
#[derive(Debug, Deserialize)]
struct Vacancy {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
    currency: Option<String>,
}

impl From<Vacancy> for VacancyRecord {
    fn from(vacancy: Vacancy) -> Self {
        VacancyRecord::new(vacancy.payment_from, vacancy.payment_to, vacancy.currency)
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    objects: Vec<serde_json::Value>,
    total: Option<u64>,
}

/// SuperJob vacancy search, restricted to Moscow
pub struct SuperJob {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SuperJob {
    pub fn new(client: Client, api_key: String) -> Self {
        Self::with_base_url(client, api_key, BASE_URL)
    }

    pub fn with_base_url(client: Client, api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/2.0/vacancies/", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    fn title(&self) -> &str {
        "SuperJob Moscow"
    }

    fn expected_currency(&self) -> &str {
        "rub"
    }

    fn max_pages(&self) -> u32 {
        MAX_PAGES
    }

    fn per_page(&self) -> u32 {
        PER_PAGE
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<Page> {
        let params = SearchParams {
            keyword: search_text(language),
            town: MOSCOW,
            page,
            count: PER_PAGE,
        };
        log::debug!(
            "requesting vacancies from superjob, page: {}, language: {}",
            page,
            language
        );
        let request = self
            .client
            .get(self.search_url())
            .header(API_KEY_HEADER, &self.api_key)
            .query(&params);
        let resp: ApiResponse = get_json(request).await?;
        log::debug!(
            "retrieved {} vacancies from superjob, page: {}, language: {}",
            resp.objects.len(),
            page,
            language
        );
        Ok(Page::from_items(resp.objects, resp.total, |vacancy: Vacancy| {
            vacancy.into()
        }))
    }
}
