use bitcoin::hashes::{sha256, Hash, HashEngine};

/// Compute sha256 hash of bytes
pub fn sha256sum(bytes: &[u8]) -> [u8; 32] {
    sha256::Hash::hash(bytes).to_byte_array()
}

/// Compute sha256 hash of the concatenation of `slices`
pub fn sha256sum_slices(slices: &[&[u8]]) -> [u8; 32] {
    let mut engine = sha256::Hash::engine();
    for slice in slices {
        engine.input(slice);
    }

    sha256::Hash::from_engine(engine).to_byte_array()
}

#[cfg(test)]
mod test {

    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_should_compute_sha256sum() {
        assert_eq!(
            hex!("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"),
            sha256sum("hello world".as_bytes())
        );
    }

    #[test]
    fn test_should_compute_sha256sum_of_empty_input() {
        assert_eq!(
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
            sha256sum(&[])
        );
    }

    #[test]
    fn test_should_compute_sha256sum_of_slices() {
        assert_eq!(
            sha256sum("hello world".as_bytes()),
            sha256sum_slices(&[b"hello", b" ", b"world"])
        );
        assert_eq!(sha256sum(&[]), sha256sum_slices(&[]));
    }
}
