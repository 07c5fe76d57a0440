use serde::Serialize;

/// Salary statistics of one programming language on one source
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LanguageStatistics {
    pub language: String,
    pub vacancies_found: u64,
    /// Vacancies that had a usable salary in the expected currency
    pub vacancies_processed: u64,
    /// `None` if no vacancy could be processed
    pub average_salary: Option<u64>,
}

impl LanguageStatistics {
    pub fn new(
        language: String,
        vacancies_found: u64,
        vacancies_processed: u64,
        salary_sum: f64,
    ) -> Self {
        let average_salary = if vacancies_processed == 0 {
            None
        } else {
            Some((salary_sum / vacancies_processed as f64).floor() as u64)
        };
        Self {
            language,
            vacancies_found,
            vacancies_processed,
            average_salary,
        }
    }

    pub fn has_data(&self) -> bool {
        self.average_salary.is_some()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub rows: Vec<LanguageStatistics>,
}

impl Report {
    pub fn new(title: String, rows: Vec<LanguageStatistics>) -> Self {
        Self { title, rows }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_average_is_truncated() {
        let stats = LanguageStatistics::new("C".to_owned(), 5, 3, 100000.0);
        assert_eq!(stats.average_salary, Some(33333));
    }

    #[test]
    fn test_no_processed_vacancies_means_no_data() {
        let stats = LanguageStatistics::new("Shell".to_owned(), 4, 0, 0.0);
        assert_eq!(stats.average_salary, None);
        assert!(!stats.has_data());
    }
}
