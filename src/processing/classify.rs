//! Classful range and reserved-range lookup.
//!
//! See <https://en.wikipedia.org/wiki/Reserved_IP_addresses>.

use crate::models::{IpClass, IpType, Octets, SUBNET_MASKS};

/// One reserved block: base address, prefix length and its designation.
#[derive(Debug, Clone, Copy)]
pub struct ReservedRange {
    pub base: Octets,
    pub prefix: u8,
    pub ip_type: IpType,
}

impl ReservedRange {
    const fn new(base: [u8; 4], prefix: u8, ip_type: IpType) -> Self {
        ReservedRange {
            base: Octets(base),
            prefix,
            ip_type,
        }
    }

    /// True when `addr` masked with this range's mask equals the base.
    pub fn contains(&self, addr: Octets) -> bool {
        addr.and(Octets(SUBNET_MASKS[self.prefix as usize])) == self.base
    }
}

/// Evaluated in order; the first match wins.
pub const RESERVED_RANGES: [ReservedRange; 17] = [
    ReservedRange::new([0, 0, 0, 0], 8, IpType::CurrentNetwork),
    ReservedRange::new([10, 0, 0, 0], 8, IpType::PrivateNetwork),
    ReservedRange::new([100, 64, 0, 0], 10, IpType::PrivateNetwork),
    ReservedRange::new([172, 16, 0, 0], 12, IpType::PrivateNetwork),
    ReservedRange::new([192, 0, 0, 0], 24, IpType::PrivateNetwork),
    ReservedRange::new([192, 168, 0, 0], 16, IpType::PrivateNetwork),
    ReservedRange::new([198, 18, 0, 0], 15, IpType::PrivateNetwork),
    ReservedRange::new([127, 0, 0, 0], 8, IpType::Loopback),
    ReservedRange::new([169, 254, 0, 0], 16, IpType::LinkLocal),
    ReservedRange::new([192, 0, 2, 0], 24, IpType::Documentation),
    ReservedRange::new([198, 51, 100, 0], 24, IpType::Documentation),
    ReservedRange::new([203, 0, 113, 0], 24, IpType::Documentation),
    ReservedRange::new([233, 252, 0, 0], 24, IpType::Documentation),
    ReservedRange::new([192, 88, 99, 0], 24, IpType::SixToFourRelay),
    ReservedRange::new([224, 0, 0, 0], 4, IpType::Multicast),
    // Must precede 240.0.0.0/4, which also contains it.
    ReservedRange::new([255, 255, 255, 255], 32, IpType::LimitedBroadcast),
    ReservedRange::new([240, 0, 0, 0], 4, IpType::ReservedFutureUse),
];

/// Classful designation by first octet.
pub fn ip_class(addr: Octets) -> IpClass {
    match addr.first() {
        0..=127 => IpClass::A,
        128..=191 => IpClass::B,
        192..=223 => IpClass::C,
        224..=239 => IpClass::D,
        240..=255 => IpClass::E,
    }
}

/// First reserved range containing `addr`, if any.
pub fn ip_type(addr: Octets) -> Option<IpType> {
    let found = RESERVED_RANGES.iter().find(|r| r.contains(addr));
    log::trace!(
        "ip_type({addr}) -> {:?}",
        found.map(|r| format!("{}/{} {}", r.base, r.prefix, r.ip_type))
    );
    found.map(|r| r.ip_type)
}
