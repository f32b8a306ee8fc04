//! Hashing primitives for hashledger

use sha2::{Digest, Sha256};

/// A SHA-256 digest. Every block hash in the ledger has this shape.
pub type Sha256Hash = [u8; 32];

/// Hashes the concatenation of `parts` in order, with no separator.
pub fn sha256_concat<I, P>(parts: I) -> Sha256Hash
where
    I: IntoIterator<Item = P>,
    P: AsRef<[u8]>,
{
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_ref());
    }
    hasher.finalize().into()
}

/// Convert a hash (or any byte string) to a hex string for display.
pub fn hash_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_matches_single_update() {
        let joined = sha256_concat([b"ab".as_slice(), b"".as_slice(), b"cd".as_slice()]);
        let whole: Sha256Hash = Sha256::digest(b"abcd").into();
        assert_eq!(joined, whole);
    }

    #[test]
    fn test_known_empty_digest() {
        let empty = sha256_concat(std::iter::empty::<&[u8]>());
        assert_eq!(
            hash_to_hex(&empty),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(hash_to_hex(&[0x00, 0xab, 0xff]), "00abff");
        assert_eq!(hash_to_hex(&[]), "");
    }
}
