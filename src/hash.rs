//! String digests for dispatching on names.
//!
//! An FNV-1a style fold: seed 2166136261, prime 16777619, xor then
//! multiply, wrapping at 64 bits. Bytes are consumed from the end of the
//! string towards the start, after a terminating NUL, and are sign-extended
//! before the xor. `const_hash` and `hash` produce the same digest, so
//! compile-time constants can be matched against run-time input.

use std::ffi::CStr;

pub const SEED: u64 = 2166136261;
pub const PRIME: u64 = 16777619;

#[inline]
const fn fold(hash: u64, byte: u8) -> u64 {
    (hash ^ (byte as i8 as i64 as u64)).wrapping_mul(PRIME)
}

/// Digest usable in constant position, e.g. as a `match` arm pattern.
pub const fn const_hash(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash = fold(SEED, 0);
    let mut i = bytes.len();

    while i > 0 {
        i -= 1;
        hash = fold(hash, bytes[i]);
    }

    hash
}

pub fn hash(s: &str) -> u64 {
    hash_bytes(s.as_bytes())
}

/// Digest of a NUL-terminated string, up to its terminator.
pub fn hash_cstr(s: &CStr) -> u64 {
    hash_bytes(s.to_bytes())
}

fn hash_bytes(bytes: &[u8]) -> u64 {
    bytes.iter()
        .rev()
        .fold(fold(SEED, 0), |hash, &byte| fold(hash, byte))
}

#[cfg(test)]
mod tests {
    use crate::hash::*;
    use std::ffi::CString;

    const FRUSTUM: u64 = const_hash("frustum");
    const EMPTY: u64 = const_hash("");

    #[test]
    fn const_matches_runtime() {
        let names = [
            "", "a", "frustum", "ortho", "perspective",
            "translation", "rotation", "rotation_quat",
            "with spaces\tand\nescapes", "caf\u{e9}", "\u{1f980}",
        ];

        for name in names.iter() {
            eprintln!("{:?}: {:#x}", name, hash(name));
            assert!(const_hash(name) == hash(name));

            let cstr = CString::new(*name).unwrap();
            assert!(hash_cstr(&cstr) == hash(name));
        }
    }

    #[test]
    fn empty_string() {
        // Only the terminator is folded in
        assert!(EMPTY == SEED.wrapping_mul(PRIME));
        assert!(hash("") == EMPTY);
    }

    #[test]
    fn reference_digest() {
        // "ab": seed, then '\0', then 'b', then 'a'
        let mut expected = SEED;
        for &byte in [0u8, b'b', b'a'].iter() {
            expected = (expected ^ byte as u64).wrapping_mul(PRIME);
        }

        assert!(hash("ab") == expected);
    }

    #[test]
    fn order_sensitive() {
        assert!(hash("ab") != hash("ba"));
        assert!(hash("ortho") != hash("orth"));
    }

    #[test]
    fn high_bytes_sign_extend() {
        // 0xe9 folds in as a negative char would
        let expected = fold(fold(SEED, 0), 0xe9);
        let extended = (fold(SEED, 0) ^ 0xffff_ffff_ffff_ffe9).wrapping_mul(PRIME);

        assert!(expected == extended);
    }

    #[test]
    fn dispatch_on_constant() {
        let selected = match hash("frustum") {
            FRUSTUM => true,
            _ => false,
        };

        assert!(selected);
    }
}
