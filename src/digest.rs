//! Implements `Hash160` and the `hash160` entry points

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::{ripemd160sum, sha256sum, sha256sum_slices};
use crate::{Hash160Error, Hash160Input, Hash160Result};

/// Length in bytes of a hash160 digest.
pub const HASH160_LEN: usize = 20;
/// Length in bytes of a digest fingerprint.
pub const FINGERPRINT_LEN: usize = 5;

/// RIPEMD-160 of the SHA-256 of some data.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash160([u8; HASH160_LEN]);

impl Hash160 {
    /// Hashes a byte sequence once with SHA-256 and again with RIPEMD-160.
    pub fn digest(bytes: &[u8]) -> Self {
        trace!("computing hash160 of {} bytes", bytes.len());
        Self(ripemd160sum(&sha256sum(bytes)))
    }

    /// Hashes the concatenation of `slices` without copying them together.
    pub fn digest_slices(slices: &[&[u8]]) -> Self {
        trace!("computing hash160 of {} slices", slices.len());
        Self(ripemd160sum(&sha256sum_slices(slices)))
    }

    /// Normalizes `input` and hashes it.
    pub fn from_input<'a>(input: impl Into<Hash160Input<'a>>) -> Hash160Result<Self> {
        let input = input.into();
        trace!("normalizing {} input", input.describe());
        let bytes = input.to_bytes()?;

        Ok(Self::digest(&bytes))
    }

    pub const fn from_byte_array(bytes: [u8; HASH160_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn to_byte_array(self) -> [u8; HASH160_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The first five bytes of the digest.
    pub fn fingerprint(&self) -> [u8; FINGERPRINT_LEN] {
        let mut fingerprint = [0; FINGERPRINT_LEN];
        fingerprint.copy_from_slice(&self.0[..FINGERPRINT_LEN]);
        fingerprint
    }
}

impl AsRef<[u8]> for Hash160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH160_LEN]> for Hash160 {
    fn from(bytes: [u8; HASH160_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Hash160> for [u8; HASH160_LEN] {
    fn from(hash: Hash160) -> Self {
        hash.0
    }
}

impl fmt::LowerHex for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            f.pad(&format!("0x{}", hex::encode(self.0)))
        } else {
            f.pad(&hex::encode(self.0))
        }
    }
}

impl fmt::Display for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&hex::encode(self.0))
    }
}

impl fmt::Debug for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Hash160({self:x})")
    }
}

impl FromStr for Hash160 {
    type Err = Hash160Error;

    /// Parses a digest rendered as 40 hex characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != HASH160_LEN * 2 {
            return Err(Hash160Error::InvalidLength(s.len()));
        }

        let mut bytes = [0; HASH160_LEN];
        hex::decode_to_slice(s, &mut bytes)?;

        Ok(Self(bytes))
    }
}

impl Serialize for Hash160 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash160 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// Computes the hex-encoded hash160 of raw bytes or of a hex string.
///
/// Text is decoded from hex before hashing; a string that is not valid hex
/// fails with [`Hash160Error::InvalidEncoding`].
///
/// ```rust
/// assert_eq!(
///     hash160::hash160("00").unwrap(),
///     "9f7fd096d37ed2c0e3f7f0cfc924beef4ffceb68"
/// );
/// assert_eq!(
///     hash160::hash160(b"").unwrap(),
///     "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
/// );
/// ```
pub fn hash160<'a>(input: impl Into<Hash160Input<'a>>) -> Hash160Result<String> {
    Hash160::from_input(input).map(|hash| hash.to_string())
}

/// Computes the hex-encoded hash160 of raw bytes.
pub fn hash160_bytes(bytes: &[u8]) -> String {
    Hash160::digest(bytes).to_string()
}

/// Computes the hex-encoded hash160 of the bytes encoded by `hex`.
pub fn hash160_hex(hex: &str) -> Hash160Result<String> {
    hash160(Hash160Input::Hex(hex))
}
