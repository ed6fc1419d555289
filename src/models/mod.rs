//! Domain models for the IPv4 calculator.
//!
//! This module contains the value types used throughout the crate:
//! - [`Octets`] - IPv4 address as four octets
//! - [`Netmask`] and [`NetmaskSpec`] - canonical subnet masks
//! - [`IpClass`] and [`IpType`] - address designations
//! - [`Report`] - every derived property of one analysis

mod ip_type;
mod ipv4;
mod netmask;
mod report;

// Re-export public types
pub use ip_type::{IpClass, IpType};
pub use ipv4::{Octets, MAX_LENGTH};
pub use netmask::{
    mask_from_prefix, netmask_binary, prefix_from_mask, Netmask, NetmaskSpec, SUBNET_MASKS,
};
pub use report::Report;
