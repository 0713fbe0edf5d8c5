//! Implements `Hash160Input`

use std::borrow::Cow;

use crate::Hash160Result;

/// Input accepted by [`crate::hash160`].
///
/// Text is always interpreted as a hex encoding of the bytes to hash; raw
/// bytes are hashed as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hash160Input<'a> {
    Bytes(&'a [u8]),
    Hex(&'a str),
}

impl<'a> Hash160Input<'a> {
    /// Normalizes the input into the byte sequence to be hashed.
    pub fn to_bytes(&self) -> Hash160Result<Cow<'a, [u8]>> {
        match *self {
            Self::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
            Self::Hex(hex) => match hex::decode(hex) {
                Ok(bytes) => Ok(Cow::Owned(bytes)),
                Err(err) => {
                    debug!("rejected hex input of length {}: {err}", hex.len());
                    Err(err.into())
                }
            },
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Bytes(_) => "bytes",
            Self::Hex(_) => "hex",
        }
    }

    pub(crate) fn describe(&self) -> String {
        let len = match self {
            Self::Bytes(bytes) => bytes.len(),
            Self::Hex(hex) => hex.len(),
        };
        format!("{} ({len})", self.kind())
    }
}

impl<'a> From<&'a [u8]> for Hash160Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Hash160Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for Hash160Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a str> for Hash160Input<'a> {
    fn from(hex: &'a str) -> Self {
        Self::Hex(hex)
    }
}

impl<'a> From<&'a String> for Hash160Input<'a> {
    fn from(hex: &'a String) -> Self {
        Self::Hex(hex.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hash160Error;

    #[test]
    fn test_should_borrow_bytes() {
        let bytes = [1u8, 2, 3];
        let normalized = Hash160Input::from(&bytes).to_bytes().unwrap();
        assert!(matches!(normalized, Cow::Borrowed(_)));
        assert_eq!(normalized.as_ref(), &[1, 2, 3]);
    }

    #[test]
    fn test_should_decode_hex() {
        let normalized = Hash160Input::from("00fFaB").to_bytes().unwrap();
        assert_eq!(normalized.as_ref(), &[0x00, 0xff, 0xab]);
    }

    #[test]
    fn test_should_accept_empty_inputs() {
        assert!(Hash160Input::from("").to_bytes().unwrap().is_empty());
        assert!(Hash160Input::from(&[0u8; 0]).to_bytes().unwrap().is_empty());
    }

    #[test]
    fn test_should_reject_odd_length_hex() {
        assert_eq!(
            Hash160Input::from("abc").to_bytes(),
            Err(Hash160Error::InvalidEncoding(hex::FromHexError::OddLength))
        );
    }

    #[test]
    fn test_should_reject_non_hex_characters() {
        assert_eq!(
            Hash160Input::from("zz").to_bytes(),
            Err(Hash160Error::InvalidEncoding(
                hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 }
            ))
        );
    }

    #[test]
    fn test_should_treat_owned_string_as_hex() {
        let hex = String::from("0a");
        assert_eq!(Hash160Input::from(&hex), Hash160Input::Hex("0a"));
        assert_eq!(
            Hash160Input::from(&vec![0x0a]),
            Hash160Input::Bytes(&[0x0a])
        );
    }
}
