//! Address calculation logic.
//!
//! This module contains the computations over one address/netmask pair:
//! - [`calculator`] - network, broadcast, host range and wildcard
//! - [`classify`] - classful range and reserved-range lookup

mod calculator;
mod classify;

// Re-export public functions
pub use calculator::{analyze, analyze_literal, AddressCalculator, IP_VERSION};
pub use classify::{ip_class, ip_type, ReservedRange, RESERVED_RANGES};
