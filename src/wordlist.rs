// This file is part of VaultPass.
//
// Copyright (c) 2025  VaultPass contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::sync::OnceLock;

const WORDLIST_DATA: &str = include_str!("../assets/wordlist.txt");

#[cfg(test)]
const EXPECTED_SHA256: &str = "3a71a09333c32ed9bfce2f22388227ec4219e28eb4652470f1f0d9ef02c3426b";

static WORDLIST: OnceLock<Vec<&'static str>> = OnceLock::new();

pub fn get_wordlist() -> &'static [&'static str] {
    WORDLIST.get_or_init(|| {
        WORDLIST_DATA
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    })
}

pub fn wordlist_size() -> usize {
    get_wordlist().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    #[test]
    fn test_wordlist_loaded() {
        assert_eq!(get_wordlist().len(), 104);
        assert!(wordlist_size() >= 100);
    }

    #[test]
    fn test_wordlist_no_duplicates() {
        use std::collections::HashSet;
        let words = get_wordlist();
        let unique: HashSet<_> = words.iter().collect();
        assert_eq!(unique.len(), words.len(), "Wordlist contains duplicates");
    }

    #[test]
    fn test_wordlist_integrity() {
        let words = get_wordlist();

        assert_eq!(words[0], "apple", "First word should be \"apple\"");
        assert_eq!(words[103], "drift", "Last word should be \"drift\"");

        for (i, word) in words.iter().enumerate() {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word at index {} (\"{}\") contains invalid characters",
                i,
                word
            );
            assert!(
                word.len() >= 4 && word.len() <= 8,
                "Word at index {} (\"{}\") has invalid length {}",
                i,
                word,
                word.len()
            )
        }
    }

    #[test]
    fn test_wordlist_sha256() {
        let mut hasher = Sha256::new();
        hasher.update(WORDLIST_DATA.as_bytes());
        let result = format!("{:x}", hasher.finalize());

        assert_eq!(
            result, EXPECTED_SHA256,
            "Wordlist SHA-256 mismatch; file may be corrupted"
        );
    }
}
