use prettytable::{format, row, Table};
use salary_analyzer::Report;

const NO_DATA: &str = "no data";

/// Title line followed by an ascii table, one row per language
pub fn render_table(report: &Report) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["Language", "Found", "Processed", "Average salary"]);
    for stats in &report.rows {
        let average_salary = stats
            .average_salary
            .map(|salary| salary.to_string())
            .unwrap_or_else(|| NO_DATA.to_owned());
        table.add_row(row![
            stats.language,
            stats.vacancies_found,
            stats.vacancies_processed,
            average_salary
        ]);
    }
    format!("{}\n{}", report.title, table)
}

pub fn render_json(reports: &[Report]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
