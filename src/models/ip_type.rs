//! Classful and reserved-range designations of an address.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

/// Legacy classful range, decided by the first octet.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpClass {
    A,
    B,
    C,
    D,
    E,
}

impl std::fmt::Display for IpClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D",
            IpClass::E => "E",
        };
        write!(f, "{s}")
    }
}

/// Well-known reserved range an address falls into.
///
/// Serialized as its [`label`](IpType::label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpType {
    CurrentNetwork,
    PrivateNetwork,
    Loopback,
    LinkLocal,
    Documentation,
    SixToFourRelay,
    Multicast,
    ReservedFutureUse,
    LimitedBroadcast,
}

impl IpType {
    pub const ALL: [IpType; 9] = [
        IpType::CurrentNetwork,
        IpType::PrivateNetwork,
        IpType::Loopback,
        IpType::LinkLocal,
        IpType::Documentation,
        IpType::SixToFourRelay,
        IpType::Multicast,
        IpType::ReservedFutureUse,
        IpType::LimitedBroadcast,
    ];

    /// Short label, as shown in the report.
    pub fn label(&self) -> &'static str {
        match self {
            IpType::CurrentNetwork => "current network",
            IpType::PrivateNetwork => "private network",
            IpType::Loopback => "loopback",
            IpType::LinkLocal => "link-local",
            IpType::Documentation => "documentation",
            IpType::SixToFourRelay => "6to4 relay",
            IpType::Multicast => "multicast",
            IpType::ReservedFutureUse => "reserved for future use",
            IpType::LimitedBroadcast => "limited broadcast",
        }
    }

    /// Scope and purpose of the range, in the form `scope - purpose`.
    pub fn description(&self) -> &'static str {
        match self {
            IpType::CurrentNetwork => "software - current network",
            IpType::PrivateNetwork => "private network",
            IpType::Loopback => "host - loopback address to the local host",
            IpType::LinkLocal => "subnet - link local address",
            IpType::Documentation => "documentation",
            IpType::SixToFourRelay => "internet - IPv6 to IPv4 relay (2002::/16)",
            IpType::Multicast => "internet - multicast",
            IpType::ReservedFutureUse => "internet - future use",
            IpType::LimitedBroadcast => "subnet - limited broadcast",
        }
    }
}

impl std::fmt::Display for IpType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for IpType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| format!("unknown IP type: {s}"))
    }
}

impl Serialize for IpType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for IpType {
    fn deserialize<D>(deserializer: D) -> Result<IpType, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
