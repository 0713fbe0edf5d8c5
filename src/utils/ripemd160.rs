use bitcoin::hashes::{ripemd160, Hash};

/// Compute ripemd160 hash of bytes
pub fn ripemd160sum(bytes: &[u8]) -> [u8; 20] {
    ripemd160::Hash::hash(bytes).to_byte_array()
}
