use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::api::{get_json, search_text, VacancySource};
use crate::{Page, Result, VacancyRecord};

const BASE_URL: &str = "https://api.hh.ru";
const MOSCOW_AREA: u32 = 1;
/// Only vacancies published within this many days
const PERIOD_DAYS: u32 = 30;
const MAX_PAGES: u32 = 20;
const PER_PAGE: u32 = 100;

#[derive(Debug, Serialize)]
struct SearchParams {
    text: String,
    area: u32,
    only_with_salary: bool,
    period: u32,
    page: u32,
    per_page: u32,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    salary: Option<Salary>,
}

impl From<Vacancy> for VacancyRecord {
    fn from(vacancy: Vacancy) -> Self {
        match vacancy.salary {
            Some(salary) => VacancyRecord::new(salary.from, salary.to, salary.currency),
            None => VacancyRecord::without_salary(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Vec<serde_json::Value>,
    found: Option<u64>,
}

/// HeadHunter vacancy search, restricted to Moscow
pub struct HeadHunter {
    client: Client,
    base_url: String,
}

impl HeadHunter {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/vacancies", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    fn title(&self) -> &str {
        "HeadHunter Moscow"
    }

    fn expected_currency(&self) -> &str {
        "RUR"
    }

    fn max_pages(&self) -> u32 {
        MAX_PAGES
    }

    fn per_page(&self) -> u32 {
        PER_PAGE
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<Page> {
        let params = SearchParams {
            text: search_text(language),
            area: MOSCOW_AREA,
            only_with_salary: true,
            period: PERIOD_DAYS,
            page,
            per_page: PER_PAGE,
        };
        log::debug!(
            "requesting vacancies from hh, page: {}, language: {}",
            page,
            language
        );
        let request = self.client.get(self.search_url()).query(&params);
        let resp: ApiResponse = get_json(request).await?;
        log::debug!(
            "retrieved {} vacancies from hh, page: {}, language: {}",
            resp.items.len(),
            page,
            language
        );
        Ok(Page::from_items(resp.items, resp.found, |vacancy: Vacancy| {
            vacancy.into()
        }))
    }
}
