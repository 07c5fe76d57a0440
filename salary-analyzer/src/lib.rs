pub mod aggregate;
pub mod estimator;
pub mod models;

pub use aggregate::{build_report, collect_language, PageSummary};
pub use estimator::{predict_salary, SalaryRange};
pub use models::{LanguageStatistics, Report};
