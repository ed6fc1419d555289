//! Address/prefix calculator.
//!
//! [`AddressCalculator`] holds one address and one canonical netmask. Every
//! other property is derived from those two on access.

use super::classify;
use crate::error::CalcError;
use crate::models::{IpClass, IpType, Netmask, NetmaskSpec, Octets, Report};
use crate::validate::parse_cidr_literal;

/// Only IPv4 is supported.
pub const IP_VERSION: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressCalculator {
    address: Octets,
    netmask: Netmask,
}

impl AddressCalculator {
    /// Build from an address and either a prefix length or mask octets.
    ///
    /// # Examples
    /// ```
    /// use ipv4_calculator::models::{NetmaskSpec, Octets};
    /// use ipv4_calculator::processing::AddressCalculator;
    ///
    /// let calc = AddressCalculator::new(Octets::new(192, 168, 0, 5), NetmaskSpec::Prefix(24)).unwrap();
    /// assert_eq!(calc.broadcast_address().unwrap().to_string(), "192.168.0.255");
    /// ```
    pub fn new(address: Octets, spec: NetmaskSpec) -> Result<AddressCalculator, CalcError> {
        let netmask = Netmask::from_spec(spec)?;
        log::debug!(
            "AddressCalculator::new({address}, {spec:?}) -> /{}",
            netmask.prefix()
        );
        Ok(AddressCalculator { address, netmask })
    }

    pub fn from_prefix(address: Octets, prefix: u8) -> Result<AddressCalculator, CalcError> {
        AddressCalculator::new(address, NetmaskSpec::Prefix(prefix))
    }

    pub fn from_mask(address: Octets, mask: [u8; 4]) -> Result<AddressCalculator, CalcError> {
        AddressCalculator::new(address, NetmaskSpec::Mask(mask))
    }

    /// Build from unchecked integers; every octet must be in 0..=255.
    pub fn from_raw(raw: [i64; 4], spec: NetmaskSpec) -> Result<AddressCalculator, CalcError> {
        let address = Octets::from_raw(raw)?;
        AddressCalculator::new(address, spec)
    }

    /// Validate a `A.B.C.D/P` literal and build from it.
    pub fn from_cidr_literal(text: &str) -> Result<AddressCalculator, CalcError> {
        let (octets, prefix) = parse_cidr_literal(text)?;
        AddressCalculator::from_prefix(Octets(octets), prefix)
    }

    pub fn ip_address(&self) -> Octets {
        self.address
    }

    pub fn version(&self) -> u8 {
        IP_VERSION
    }

    pub fn prefix_length(&self) -> u8 {
        self.netmask.prefix()
    }

    pub fn netmask(&self) -> Octets {
        self.netmask.octets()
    }

    pub fn wildcard_address(&self) -> Octets {
        self.netmask.wildcard()
    }

    /// True for /31 and /32, which have no separate network/broadcast identity.
    fn is_degenerate(&self) -> bool {
        self.prefix_length() >= 31
    }

    fn masked_network(&self) -> Octets {
        self.address.and(self.netmask())
    }

    fn masked_broadcast(&self) -> Octets {
        self.address.or(self.wildcard_address())
    }

    pub fn network_address(&self) -> Option<Octets> {
        if self.is_degenerate() {
            return None;
        }
        Some(self.masked_network())
    }

    pub fn broadcast_address(&self) -> Option<Octets> {
        if self.is_degenerate() {
            return None;
        }
        Some(self.masked_broadcast())
    }

    /// Network address + 1; for /31 the lower address of the pair (RFC 3021).
    pub fn first_available_address(&self) -> Option<Octets> {
        match self.prefix_length() {
            32 => None,
            31 => Some(self.masked_network()),
            _ => {
                let mut first = self.masked_network().octets();
                first[3] |= 1;
                Some(Octets(first))
            }
        }
    }

    /// Broadcast address - 1; for /31 the upper address of the pair.
    pub fn last_available_address(&self) -> Option<Octets> {
        match self.prefix_length() {
            32 => None,
            31 => Some(self.masked_broadcast()),
            _ => {
                // low bit of the broadcast is always set here
                let mut last = self.masked_broadcast().octets();
                last[3] -= 1;
                Some(Octets(last))
            }
        }
    }

    pub fn ip_class(&self) -> IpClass {
        classify::ip_class(self.address)
    }

    pub fn ip_type(&self) -> Option<IpType> {
        classify::ip_type(self.address)
    }

    pub fn report(&self) -> Report {
        Report {
            ip_address: self.address,
            version: self.version(),
            network_address: self.network_address(),
            netmask: self.netmask(),
            prefix_length: self.prefix_length(),
            wildcard_address: self.wildcard_address(),
            broadcast_address: self.broadcast_address(),
            first_available_address: self.first_available_address(),
            last_available_address: self.last_available_address(),
            ip_class: self.ip_class(),
            ip_type: self.ip_type(),
        }
    }
}

/// Analyze an address and netmask spec.
pub fn analyze(address: [u8; 4], spec: NetmaskSpec) -> Result<Report, CalcError> {
    Ok(AddressCalculator::new(Octets(address), spec)?.report())
}

/// Validate and analyze a `A.B.C.D/P` literal.
pub fn analyze_literal(text: &str) -> Result<Report, CalcError> {
    Ok(AddressCalculator::from_cidr_literal(text)?.report())
}
