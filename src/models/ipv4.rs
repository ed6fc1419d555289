//! IPv4 address as four octets.
//!
//! Provides [`Octets`], an immutable 4-octet address, most significant first,
//! along with conversions to and from `u32` and [`Ipv4Addr`].

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::{CalcError, RangeComponent};

/// Maximum prefix length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// IPv4 address stored as four octets.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Octets(pub [u8; 4]);

impl Octets {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Octets {
        Octets([a, b, c, d])
    }

    /// Build from wider integers, rejecting any value outside 0..=255.
    ///
    /// The error names the first offending octet.
    pub fn from_raw(raw: [i64; 4]) -> Result<Octets, CalcError> {
        let mut octets = [0u8; 4];
        for (index, value) in raw.into_iter().enumerate() {
            octets[index] = u8::try_from(value)
                .map_err(|_| CalcError::from(RangeComponent::Octet { index, value }))?;
        }
        Ok(Octets(octets))
    }

    pub fn octets(&self) -> [u8; 4] {
        self.0
    }

    pub fn first(&self) -> u8 {
        self.0[0]
    }

    pub fn to_bits(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub fn from_bits(bits: u32) -> Octets {
        Octets(bits.to_be_bytes())
    }

    /// Octet-wise AND.
    pub fn and(self, other: Octets) -> Octets {
        Octets::from_bits(self.to_bits() & other.to_bits())
    }

    /// Octet-wise OR.
    pub fn or(self, other: Octets) -> Octets {
        Octets::from_bits(self.to_bits() | other.to_bits())
    }

    /// `255 - octet` for each octet.
    pub fn complement(self) -> Octets {
        Octets(self.0.map(|o| 255 - o))
    }
}

impl From<Ipv4Addr> for Octets {
    fn from(addr: Ipv4Addr) -> Self {
        Octets(addr.octets())
    }
}

impl From<Octets> for Ipv4Addr {
    fn from(o: Octets) -> Self {
        Ipv4Addr::from(o.0)
    }
}

impl From<[u8; 4]> for Octets {
    fn from(o: [u8; 4]) -> Self {
        Octets(o)
    }
}

impl FromStr for Octets {
    type Err = CalcError;

    /// Parse a dotted quad such as `192.168.0.1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr = Ipv4Addr::from_str(s).map_err(|_| CalcError::format(s))?;
        Ok(Octets::from(addr))
    }
}

impl std::fmt::Display for Octets {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}.{}.{}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

impl Serialize for Octets {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Octets {
    fn deserialize<D>(deserializer: D) -> Result<Octets, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Octets::from_str(&s).map_err(|_| de::Error::custom(format!("invalid IP address: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(
            Octets::from_raw([192, 168, 0, 5]).unwrap(),
            Octets::new(192, 168, 0, 5)
        );
        assert_eq!(
            Octets::from_raw([1, 256, 0, 0]).unwrap_err(),
            CalcError::Range(RangeComponent::Octet {
                index: 1,
                value: 256
            })
        );
        assert_eq!(
            Octets::from_raw([1, 2, 3, -1]).unwrap_err(),
            CalcError::Range(RangeComponent::Octet {
                index: 3,
                value: -1
            })
        );
    }

    #[test]
    fn test_bits() {
        let o = Octets::new(10, 1, 2, 3);
        assert_eq!(o.to_bits(), 0x0A010203);
        assert_eq!(Octets::from_bits(0x0A010203), o);
        assert_eq!(Ipv4Addr::from(o), Ipv4Addr::new(10, 1, 2, 3));
    }

    #[test]
    fn test_and_or_complement() {
        let ip = Octets::new(192, 168, 1, 42);
        let mask = Octets::new(255, 255, 255, 0);
        assert_eq!(ip.and(mask), Octets::new(192, 168, 1, 0));
        assert_eq!(mask.complement(), Octets::new(0, 0, 0, 255));
        assert_eq!(ip.or(mask.complement()), Octets::new(192, 168, 1, 255));
    }

    #[test]
    fn test_parse_and_display() {
        let o: Octets = "172.16.4.1".parse().unwrap();
        assert_eq!(o.to_string(), "172.16.4.1");
        assert!("172.16.4".parse::<Octets>().is_err());
        assert!("256.1.1.1".parse::<Octets>().is_err());
        assert!(" 172.16.4.1".parse::<Octets>().is_err());
        assert!("172.16.4.1 ".parse::<Octets>().is_err());
    }

    #[test]
    fn test_serde_dotted_string() {
        let o = Octets::new(10, 0, 0, 1);
        let json = serde_json::to_string(&o).unwrap();
        assert_eq!(json, "\"10.0.0.1\"");
        let back: Octets = serde_json::from_str(&json).unwrap();
        assert_eq!(back, o);
        assert!(serde_json::from_str::<Octets>("\"10.0.0\"").is_err());
    }
}
