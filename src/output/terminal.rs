//! Terminal output utilities.
//!
//! Renders a report as a two-column table of label and value.

use crate::models::{Octets, Report};
use colored::Colorize;

/// Shown for addresses and types that do not exist for the input.
const ABSENT: &str = "-";

/// Width of the label column.
const LABEL_WIDTH: usize = 26;

fn or_absent(addr: Option<Octets>) -> String {
    addr.map(|a| a.to_string())
        .unwrap_or_else(|| ABSENT.to_string())
}

/// Report rows in display order: (label, value).
pub fn report_rows(report: &Report) -> Vec<(&'static str, String)> {
    vec![
        ("IP address", report.ip_address.to_string()),
        ("Version", report.version.to_string()),
        ("Network address", or_absent(report.network_address)),
        ("Netmask", report.netmask.to_string()),
        ("Binary netmask", report.netmask_binary()),
        ("Wildcard", report.wildcard_address.to_string()),
        ("Broadcast address", or_absent(report.broadcast_address)),
        (
            "First available address",
            or_absent(report.first_available_address),
        ),
        (
            "Last available address",
            or_absent(report.last_available_address),
        ),
        ("IP class", report.ip_class.to_string()),
        (
            "IP type",
            report
                .ip_type
                .map(|t| t.to_string())
                .unwrap_or_else(|| ABSENT.to_string()),
        ),
        (
            "IP type description",
            report.ip_type_description().unwrap_or(ABSENT).to_string(),
        ),
    ]
}

/// Print the report table to stdout.
pub fn print_report(report: &Report) {
    log::info!("#Start print_report() {}", report.cidr());
    println!("{}", report.cidr().bold());
    for (label, value) in report_rows(report) {
        let label = format!("{label:<width$}", width = LABEL_WIDTH);
        if value == ABSENT {
            println!("{}{}", label.bright_black(), value.bright_black());
        } else {
            println!("{}{}", label.bright_black(), value.blue().bold());
        }
    }
}
