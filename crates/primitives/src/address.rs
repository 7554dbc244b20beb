//! Implementation of `Address`, the 160-bit identifier of a deployed contract.

use crate::constants::{
    ADDRESS_BASE58_DECODED_SIZE, ADDRESS_CHECKSUM_SIZE, ADDRESS_SIZE, ADDRESS_VERSION,
};
use crate::error::{PrimitiveError, PrimitiveResult};
use ripemd::Ripemd160;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// A contract address: 20 raw bytes, stored in wire (little-endian) order.
///
/// The address is opaque to the invocation codecs. They only rely on its
/// fixed width.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// Alias for the wire width of an address.
    pub const LENGTH: usize = ADDRESS_SIZE;

    /// Returns the all-zero address.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; ADDRESS_SIZE])
    }

    /// Wraps raw bytes without copying them through a slice check.
    #[inline]
    #[must_use]
    pub const fn from_array(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Creates an address from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidLength` if the input is not exactly 20 bytes.
    #[inline]
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; ADDRESS_SIZE] =
            value
                .try_into()
                .map_err(|_| PrimitiveError::InvalidLength {
                    expected: ADDRESS_SIZE,
                    actual: value.len(),
                })?;
        Ok(Self(bytes))
    }

    /// Returns a copy of the raw wire bytes.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u8; ADDRESS_SIZE] {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Parses an address from its display form: 40 hex digits, most significant
    /// byte first, with an optional `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the input is not a valid
    /// 40-character hexadecimal string.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.len() != ADDRESS_SIZE * 2 {
            return Err(PrimitiveError::invalid_format(format!(
                "expected {} hex digits, got {}",
                ADDRESS_SIZE * 2,
                s.len()
            )));
        }

        let mut bytes = hex::decode(s).map_err(|e| PrimitiveError::invalid_format(e.to_string()))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Converts the address to its display form (`0x` + big-endian hex).
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }

    /// Computes the address of a deployed script: RIPEMD160(SHA256(script)).
    #[must_use]
    pub fn from_script(script: &[u8]) -> Self {
        let sha256_hash = Sha256::digest(script);
        let hash160 = Ripemd160::digest(sha256_hash);

        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes.copy_from_slice(&hash160);
        Self(bytes)
    }

    /// Encodes the address as a Base58Check string.
    #[must_use]
    pub fn to_base58(&self) -> String {
        let mut data = Vec::with_capacity(ADDRESS_BASE58_DECODED_SIZE);
        data.push(ADDRESS_VERSION);
        data.extend_from_slice(&self.0);

        let checksum = checksum(&data);
        data.extend_from_slice(&checksum);

        bs58::encode(data).into_string()
    }

    /// Decodes a Base58Check address string.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the string is not valid Base58,
    /// has an incorrect length, version byte or checksum.
    pub fn from_base58(address: &str) -> PrimitiveResult<Self> {
        let decoded = bs58::decode(address)
            .into_vec()
            .map_err(|_| PrimitiveError::invalid_format("Invalid Base58 address"))?;

        if decoded.len() != ADDRESS_BASE58_DECODED_SIZE {
            return Err(PrimitiveError::invalid_format("Invalid address length"));
        }

        if decoded[0] != ADDRESS_VERSION {
            return Err(PrimitiveError::invalid_format("Invalid address version"));
        }

        let (data, expected) = decoded.split_at(1 + ADDRESS_SIZE);
        if checksum(data) != expected {
            return Err(PrimitiveError::invalid_format("Invalid address checksum"));
        }

        Self::from_bytes(&data[1..])
    }
}

fn checksum(data: &[u8]) -> [u8; ADDRESS_CHECKSUM_SIZE] {
    let hash = Sha256::digest(Sha256::digest(data));
    let mut out = [0u8; ADDRESS_CHECKSUM_SIZE];
    out.copy_from_slice(&hash[..ADDRESS_CHECKSUM_SIZE]);
    out
}

impl FromStr for Address {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex_string())
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(data: [u8; ADDRESS_SIZE]) -> Self {
        Self(data)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = PrimitiveError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for Address {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
