use tabled::{settings::Style, Table};

use super::performance::PerformanceRow;

pub fn render_table(rows: &[PerformanceRow]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

pub(crate) fn display_option(value: &Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.6}", value),
        None => "n/a".to_string(),
    }
}

pub(crate) fn display_seconds(seconds: &f64) -> String {
    format!("{:.6}", seconds)
}
