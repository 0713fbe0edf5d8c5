//! # hash160
//!
//! Computes hash160, the RIPEMD-160 digest of the SHA-256 digest of some data,
//! as used to shorten public-key derived data into a 20-byte identifier.
//!
//! # Get started
//!
//! Input is either raw bytes or a hex string. Strings are always decoded
//! from hex before hashing, so `"00"` hashes the single byte `0x00`.
//!
//! ## Example
//!
//! ```rust
//! use hash160::{hash160, Hash160, Hash160Error};
//!
//! fn main() -> Result<(), Hash160Error> {
//!     assert_eq!(hash160(b"hello")?, "b6a9c8c230722b7c748331a8b450f05566dc7d0f");
//!     assert_eq!(hash160("68656c6c6f")?, "b6a9c8c230722b7c748331a8b450f05566dc7d0f");
//!     assert!(hash160("zz").is_err());
//!
//!     let digest = Hash160::digest(b"hello");
//!     assert_eq!(digest.fingerprint(), [0xb6, 0xa9, 0xc8, 0xc2, 0x30]);
//!     Ok(())
//! }
//! ```
//!

#[macro_use]
extern crate log;

mod digest;
mod error;
mod input;
mod result;
pub mod utils;

pub use digest::{hash160, hash160_bytes, hash160_hex, Hash160, FINGERPRINT_LEN, HASH160_LEN};
pub use error::Hash160Error;
pub use input::Hash160Input;
pub use result::Hash160Result;
