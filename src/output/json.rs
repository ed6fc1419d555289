//! JSON output for analysis reports.

use crate::models::Report;
use serde::Serialize;
use std::error::Error;

/// A report plus the fields a reader of the JSON gets for free in the table.
#[derive(Serialize)]
struct ReportJson<'a> {
    #[serde(flatten)]
    report: &'a Report,
    ip_type_description: Option<&'static str>,
}

/// Pretty-printed JSON for one or more reports.
pub fn report_json(reports: &[Report]) -> Result<String, Box<dyn Error>> {
    let rows: Vec<ReportJson> = reports
        .iter()
        .map(|report| ReportJson {
            report,
            ip_type_description: report.ip_type_description(),
        })
        .collect();
    let json = serde_json::to_string_pretty(&rows)
        .map_err(|e| format!("Error serializing report JSON: {e}"))?;
    Ok(json)
}
