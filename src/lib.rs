//! IPv4 address/prefix calculator.
//!
//! Validates `A.B.C.D/P` literals and derives network, broadcast, host range,
//! wildcard, classful range and reserved-range type for them.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod validate;

use std::error::Error;

pub use error::{CalcError, RangeComponent};
pub use models::{NetmaskSpec, Octets, Report};
pub use processing::{analyze, analyze_literal, AddressCalculator};
pub use validate::{is_valid_cidr_literal, parse_cidr_literal, validate_cidr_literal};

/// Analyze a dotted address against a dotted subnet mask, e.g. `10.0.0.1` and `255.255.0.0`.
pub fn analyze_with_mask(address: &str, mask: &str) -> Result<Report, CalcError> {
    let address: Octets = address.parse()?;
    let mask: Octets = mask.parse()?;
    analyze(address.octets(), NetmaskSpec::Mask(mask.octets()))
}

/// Analyze every `A.B.C.D/P` input, logging and collecting failures instead of stopping.
///
/// # Returns
/// The reports of inputs that succeeded, and (input, error) for those that did not.
pub fn analyze_all<'a, I>(inputs: I) -> (Vec<Report>, Vec<(String, CalcError)>)
where
    I: IntoIterator<Item = &'a str>,
{
    collect_reports(inputs, analyze_literal)
}

/// Analyze every dotted address against the same dotted `mask`, like [`analyze_all`].
pub fn analyze_all_with_mask<'a, I>(inputs: I, mask: &str) -> (Vec<Report>, Vec<(String, CalcError)>)
where
    I: IntoIterator<Item = &'a str>,
{
    collect_reports(inputs, |input| analyze_with_mask(input, mask))
}

fn collect_reports<'a, I, F>(inputs: I, analyze_one: F) -> (Vec<Report>, Vec<(String, CalcError)>)
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(&str) -> Result<Report, CalcError>,
{
    let mut reports = Vec::new();
    let mut failures = Vec::new();

    for input in inputs {
        match analyze_one(input) {
            Ok(report) => reports.push(report),
            Err(e) => {
                log::warn!("Rejected '{input}': {e}");
                failures.push((input.to_string(), e));
            }
        }
    }

    log::info!(
        "analyzed {} ok, {} rejected",
        reports.len(),
        failures.len()
    );
    (reports, failures)
}

/// Join failures into one error message for `main`.
pub fn failures_to_error(failures: &[(String, CalcError)]) -> Result<(), Box<dyn Error>> {
    if failures.is_empty() {
        return Ok(());
    }
    let msg = failures
        .iter()
        .map(|(input, e)| format!("{input}: {e}"))
        .collect::<Vec<String>>()
        .join("; ");
    Err(msg.into())
}
