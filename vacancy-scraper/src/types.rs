use serde::de::DeserializeOwned;
use serde::Serialize;

/// A single vacancy reduced to the salary fields every source exposes
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct VacancyRecord {
    pub salary_lower_bound: Option<f64>,
    pub salary_upper_bound: Option<f64>,
    pub currency_code: Option<String>,
}

impl VacancyRecord {
    pub fn new(
        salary_lower_bound: Option<f64>,
        salary_upper_bound: Option<f64>,
        currency_code: Option<String>,
    ) -> Self {
        Self {
            salary_lower_bound,
            salary_upper_bound,
            currency_code,
        }
    }

    /// A posting that carries no salary object at all
    pub fn without_salary() -> Self {
        Self::default()
    }
}

/// One response of a paginated vacancy search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub records: Vec<VacancyRecord>,
    /// Items that did not match the vacancy shape of the source
    pub malformed: usize,
    /// Total count as reported by the api, not what the pages actually yield
    pub reported_total: Option<u64>,
}

impl Page {
    pub fn items_seen(&self) -> usize {
        self.records.len() + self.malformed
    }

    /// Every item is deserialized on its own, a broken item must not take the page down with it
    pub(crate) fn from_items<T, F>(
        items: Vec<serde_json::Value>,
        reported_total: Option<u64>,
        convert: F,
    ) -> Self
    where
        T: DeserializeOwned,
        F: Fn(T) -> VacancyRecord,
    {
        let mut records = Vec::with_capacity(items.len());
        let mut malformed = 0;
        for item in items {
            match serde_json::from_value::<T>(item) {
                Ok(vacancy) => records.push(convert(vacancy)),
                Err(e) => {
                    log::warn!("skipping malformed vacancy: {}", e);
                    malformed += 1;
                }
            }
        }
        Self {
            records,
            malformed,
            reported_total,
        }
    }
}
