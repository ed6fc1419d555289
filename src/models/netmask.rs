//! Canonical subnet masks.
//!
//! A prefix length and its dotted mask are two encodings of the same thing.
//! [`Netmask`] always holds both and can only be built from a canonical value.

use super::ipv4::{Octets, MAX_LENGTH};
use crate::error::{CalcError, RangeComponent};

/// Index is the prefix length, value is the dotted mask.
pub const SUBNET_MASKS: [[u8; 4]; 33] = [
    [0, 0, 0, 0],
    [128, 0, 0, 0],
    [192, 0, 0, 0],
    [224, 0, 0, 0],
    [240, 0, 0, 0],
    [248, 0, 0, 0],
    [252, 0, 0, 0],
    [254, 0, 0, 0],
    [255, 0, 0, 0],
    [255, 128, 0, 0],
    [255, 192, 0, 0],
    [255, 224, 0, 0],
    [255, 240, 0, 0],
    [255, 248, 0, 0],
    [255, 252, 0, 0],
    [255, 254, 0, 0],
    [255, 255, 0, 0],
    [255, 255, 128, 0],
    [255, 255, 192, 0],
    [255, 255, 224, 0],
    [255, 255, 240, 0],
    [255, 255, 248, 0],
    [255, 255, 252, 0],
    [255, 255, 254, 0],
    [255, 255, 255, 0],
    [255, 255, 255, 128],
    [255, 255, 255, 192],
    [255, 255, 255, 224],
    [255, 255, 255, 240],
    [255, 255, 255, 248],
    [255, 255, 255, 252],
    [255, 255, 255, 254],
    [255, 255, 255, 255],
];

/// How the caller specifies the netmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetmaskSpec {
    Prefix(u8),
    Mask([u8; 4]),
}

impl From<u8> for NetmaskSpec {
    fn from(prefix: u8) -> Self {
        NetmaskSpec::Prefix(prefix)
    }
}

impl From<[u8; 4]> for NetmaskSpec {
    fn from(mask: [u8; 4]) -> Self {
        NetmaskSpec::Mask(mask)
    }
}

/// Dotted mask for a prefix length.
///
/// # Examples
/// ```
/// use ipv4_calculator::models::mask_from_prefix;
/// assert_eq!(mask_from_prefix(24).unwrap(), [255, 255, 255, 0]);
/// ```
pub fn mask_from_prefix(prefix: u8) -> Result<[u8; 4], CalcError> {
    SUBNET_MASKS
        .get(prefix as usize)
        .copied()
        .ok_or_else(|| RangeComponent::Prefix(prefix as i64).into())
}

/// Prefix length for a dotted mask; only exact canonical masks match.
pub fn prefix_from_mask(mask: [u8; 4]) -> Result<u8, CalcError> {
    SUBNET_MASKS
        .iter()
        .position(|m| *m == mask)
        .map(|i| i as u8)
        .ok_or_else(|| RangeComponent::Mask(mask).into())
}

/// Format mask octets as binary groups, e.g. `11111111.11111111.11111111.00000000`.
pub fn netmask_binary(mask: Octets) -> String {
    use itertools::Itertools;
    mask.octets().iter().map(|o| format!("{o:08b}")).join(".")
}

/// A canonical netmask: prefix length and mask octets that always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Netmask {
    prefix: u8,
}

impl Netmask {
    pub fn from_prefix(prefix: u8) -> Result<Netmask, CalcError> {
        if prefix > MAX_LENGTH {
            return Err(RangeComponent::Prefix(prefix as i64).into());
        }
        Ok(Netmask { prefix })
    }

    pub fn from_mask(mask: [u8; 4]) -> Result<Netmask, CalcError> {
        let prefix = prefix_from_mask(mask)?;
        Ok(Netmask { prefix })
    }

    pub fn from_spec(spec: NetmaskSpec) -> Result<Netmask, CalcError> {
        match spec {
            NetmaskSpec::Prefix(prefix) => Netmask::from_prefix(prefix),
            NetmaskSpec::Mask(mask) => Netmask::from_mask(mask),
        }
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn octets(&self) -> Octets {
        Octets(SUBNET_MASKS[self.prefix as usize])
    }

    pub fn wildcard(&self) -> Octets {
        self.octets().complement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contiguous(bits: u32) -> bool {
        bits.leading_ones() + bits.trailing_zeros() == 32
    }

    #[test]
    fn test_table_is_contiguous_and_matches_shift() {
        for (prefix, mask) in SUBNET_MASKS.iter().enumerate() {
            let bits = u32::from_be_bytes(*mask);
            assert!(contiguous(bits), "hole in mask /{prefix}");
            assert_eq!(bits.leading_ones() as usize, prefix);
        }
    }

    #[test]
    fn test_prefix_mask_round_trip() {
        for prefix in 0..=MAX_LENGTH {
            let mask = mask_from_prefix(prefix).unwrap();
            assert_eq!(prefix_from_mask(mask).unwrap(), prefix);
        }
    }

    #[test]
    fn test_out_of_range_prefix() {
        assert_eq!(
            mask_from_prefix(33).unwrap_err(),
            CalcError::Range(RangeComponent::Prefix(33))
        );
        assert!(Netmask::from_prefix(33).is_err());
    }

    #[test]
    fn test_non_canonical_mask_rejected() {
        for mask in [[255, 0, 255, 0], [255, 255, 255, 1], [0, 255, 0, 0]] {
            assert_eq!(
                Netmask::from_mask(mask).unwrap_err(),
                CalcError::Range(RangeComponent::Mask(mask))
            );
        }
    }

    #[test]
    fn test_spec_normalizes_to_both() {
        let a = Netmask::from_spec(NetmaskSpec::Prefix(20)).unwrap();
        let b = Netmask::from_spec(NetmaskSpec::Mask([255, 255, 240, 0])).unwrap();
        assert_eq!(a, b);
        assert_eq!(b.prefix(), 20);
        assert_eq!(a.octets(), Octets::new(255, 255, 240, 0));
    }

    #[test]
    fn test_wildcard_is_complement() {
        for prefix in 0..=MAX_LENGTH {
            let n = Netmask::from_prefix(prefix).unwrap();
            assert_eq!(n.wildcard().to_bits(), !n.octets().to_bits());
        }
    }

    #[test]
    fn test_netmask_binary() {
        assert_eq!(
            netmask_binary(Octets::new(255, 255, 255, 0)),
            "11111111.11111111.11111111.00000000"
        );
        assert_eq!(
            netmask_binary(Octets::new(255, 255, 192, 0)),
            "11111111.11111111.11000000.00000000"
        );
    }
}
