// SPDX-License-Identifier: MIT OR Apache-2.0
//! Random suffixes for Put-generated resource names.

use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random lowercase-alphanumeric string of length `len`.
pub fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_requested_length() {
        assert_eq!(random_suffix(8).len(), 8);
        assert_eq!(random_suffix(0).len(), 0);
    }

    #[test]
    fn only_uses_the_declared_alphabet() {
        let s = random_suffix(64);
        assert!(s.bytes().all(|b| ALPHABET.contains(&b)));
    }
}
