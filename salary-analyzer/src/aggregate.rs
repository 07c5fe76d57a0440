use futures::{pin_mut, StreamExt};
use vacancy_scraper::{pages, Page, VacancyRecord, VacancySource};

use crate::estimator::predict_salary;
use crate::models::{LanguageStatistics, Report};

/// Counts and salary sum of a single page, or of several pages merged together
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageSummary {
    pub items_seen: u64,
    pub salary_sum: f64,
    pub processed: u64,
}

impl PageSummary {
    pub fn from_page(page: &Page, expected_currency: &str) -> Self {
        let mut summary = Self {
            items_seen: page.items_seen() as u64,
            ..Self::default()
        };
        page.records
            .iter()
            .filter_map(|record| usable_estimate(record, expected_currency))
            .for_each(|estimate| {
                summary.salary_sum += estimate;
                summary.processed += 1;
            });
        summary
    }

    pub fn merge(&mut self, other: PageSummary) {
        self.items_seen += other.items_seen;
        self.salary_sum += other.salary_sum;
        self.processed += other.processed;
    }
}

/// Consecutive failed pages after which the operator is warned
const FAILURE_STREAK_WARNING: u32 = 3;

#[derive(Debug, Default)]
struct FailureStreak {
    count: u32,
}

impl FailureStreak {
    /// True once per streak, when it reaches `FAILURE_STREAK_WARNING`
    fn record_failure(&mut self) -> bool {
        self.count += 1;
        self.count == FAILURE_STREAK_WARNING
    }

    fn reset(&mut self) {
        self.count = 0;
    }
}

fn usable_estimate(record: &VacancyRecord, expected_currency: &str) -> Option<f64> {
    if record.currency_code.as_deref() != Some(expected_currency) {
        return None;
    }
    predict_salary(record.salary_lower_bound, record.salary_upper_bound)
}

/// Walks all pages of `language` on `source`, failed pages are logged and count as empty
pub async fn collect_language<S>(source: &S, language: &str) -> LanguageStatistics
where
    S: VacancySource + ?Sized,
{
    let expected_currency = source.expected_currency();
    let page_stream = pages(source, language);
    pin_mut!(page_stream);
    let mut total = PageSummary::default();
    let mut failures = FailureStreak::default();
    while let Some(page) = page_stream.next().await {
        match page {
            Ok(page) => {
                failures.reset();
                if let Some(reported_total) = page.reported_total {
                    log::debug!(
                        "{} reports {} vacancies for language: {}",
                        source.title(),
                        reported_total,
                        language
                    );
                }
                total.merge(PageSummary::from_page(&page, expected_currency));
            }
            Err(e) => {
                log::error!(
                    "skipping page of {} for language: {}, error: {}",
                    source.title(),
                    language,
                    e
                );
                if failures.record_failure() {
                    log::warn!(
                        "{} pages of {} failed in a row for language: {}, the api may be down or rejecting requests",
                        FAILURE_STREAK_WARNING,
                        source.title(),
                        language
                    );
                }
            }
        }
    }
    let stats = LanguageStatistics::new(
        language.to_owned(),
        total.items_seen,
        total.processed,
        total.salary_sum,
    );
    log::info!(
        "{}: {} found, {} processed, average salary: {:?}",
        language,
        stats.vacancies_found,
        stats.vacancies_processed,
        stats.average_salary
    );
    stats
}

/// One row per language, in the order given
pub async fn build_report<S>(source: &S, languages: &[String]) -> Report
where
    S: VacancySource + ?Sized,
{
    log::info!("collecting salary statistics from {}", source.title());
    let mut rows = Vec::with_capacity(languages.len());
    for language in languages {
        rows.push(collect_language(source, language).await);
    }
    Report::new(source.title().to_owned(), rows)
}
