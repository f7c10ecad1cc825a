use crate::errors::DomainError;
use std::fmt;

/// A fully resolved 6-octet hardware address.
///
/// Parses the notations switches print in ARP tables:
/// - Cisco dotted quads of four hex digits: `aabb.ccdd.eeff`
/// - six octets joined by a single separator: `aa:bb:cc:dd:ee:ff`,
///   `aa-bb-cc-dd-ee-ff`, `aa.bb.cc.dd.ee.ff`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// All-zero address some platforms print for unresolved entries
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 6]
    }

    pub fn parse(token: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidMacAddress(token.to_string());

        let separator = token
            .chars()
            .find(|c| matches!(c, ':' | '-' | '.'))
            .ok_or_else(invalid)?;
        let groups: Vec<&str> = token.split(separator).collect();

        let mut octets = [0u8; 6];
        match groups.len() {
            // aabb.ccdd.eeff
            3 if separator == '.' => {
                for (i, group) in groups.iter().enumerate() {
                    let word = parse_hex_group(group, 4).ok_or_else(invalid)?;
                    octets[i * 2] = (word >> 8) as u8;
                    octets[i * 2 + 1] = (word & 0xff) as u8;
                }
            }
            6 => {
                for (i, group) in groups.iter().enumerate() {
                    octets[i] = parse_hex_group(group, 2).ok_or_else(invalid)? as u8;
                }
            }
            _ => return Err(invalid()),
        }

        Ok(Self(octets))
    }
}

fn parse_hex_group(group: &str, width: usize) -> Option<u16> {
    if group.len() != width || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(group, 16).ok()
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.0;
        write!(
            f,
            "{:02x}{:02x}.{:02x}{:02x}.{:02x}{:02x}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}
