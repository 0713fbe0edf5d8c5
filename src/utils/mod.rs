//! One-shot hash primitives

mod ripemd160;
mod sha256;

pub use ripemd160::ripemd160sum;
pub use sha256::{sha256sum, sha256sum_slices};
