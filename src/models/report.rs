//! Snapshot of every property derived for one address/prefix pair.

use super::ip_type::{IpClass, IpType};
use super::ipv4::Octets;
use super::netmask::netmask_binary;
use serde::{Deserialize, Serialize};

/// Result of analyzing one address. Absent addresses serialize as `null`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub ip_address: Octets,
    pub version: u8,
    pub network_address: Option<Octets>,
    pub netmask: Octets,
    pub prefix_length: u8,
    pub wildcard_address: Octets,
    pub broadcast_address: Option<Octets>,
    pub first_available_address: Option<Octets>,
    pub last_available_address: Option<Octets>,
    pub ip_class: IpClass,
    pub ip_type: Option<IpType>,
}

impl Report {
    pub fn netmask_binary(&self) -> String {
        netmask_binary(self.netmask)
    }

    /// Scope and purpose of the reserved range, e.g. `subnet - link local address`.
    pub fn ip_type_description(&self) -> Option<&'static str> {
        self.ip_type.map(|t| t.description())
    }

    /// `address/prefix` of the analyzed input.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.ip_address, self.prefix_length)
    }
}
