use std::fmt;

use serde::{Deserialize, Serialize};

/// Which ISBN standard a validated identifier conforms to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsbnVariant {
    Isbn10,
    Isbn13,
}

/// A checksum-validated International Standard Book Number
///
/// Instances are only produced by [`Isbn::parse`], so holding an `Isbn`
/// guarantees the digits and check digit are consistent. Invalid input is
/// reported as `None`, never as an error; callers treat it as "no
/// identifier available".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Isbn {
    value: String,
    variant: IsbnVariant,
}

impl Isbn {
    /// Canonicalize raw user/API input: trim, drop hyphens, uppercase.
    ///
    /// Total - arbitrary input yields a (possibly still invalid) candidate.
    pub fn normalize(raw: &str) -> String {
        raw.trim()
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_uppercase()
    }

    /// Validate a normalized candidate and wrap it on success.
    pub fn parse(raw: &str) -> Option<Self> {
        let candidate = Self::normalize(raw);
        if Self::is_valid_isbn13(&candidate) {
            Some(Self {
                value: candidate,
                variant: IsbnVariant::Isbn13,
            })
        } else if Self::is_valid_isbn10(&candidate) {
            Some(Self {
                value: candidate,
                variant: IsbnVariant::Isbn10,
            })
        } else {
            None
        }
    }

    /// True iff the input normalizes to a valid ISBN-10 or ISBN-13.
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_some()
    }

    /// ISBN-13 check: 13 ASCII digits, "978"/"979" prefix, and the
    /// alternating 1/3-weighted digit sum divisible by 10.
    pub fn is_valid_isbn13(candidate: &str) -> bool {
        let bytes = candidate.as_bytes();
        if bytes.len() != 13 || !bytes.iter().all(|b| b.is_ascii_digit()) {
            return false;
        }
        if !(candidate.starts_with("978") || candidate.starts_with("979")) {
            return false;
        }

        let sum: u32 = bytes
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let digit = u32::from(b - b'0');
                if i % 2 == 0 {
                    digit
                } else {
                    digit * 3
                }
            })
            .sum();

        sum % 10 == 0
    }

    /// ISBN-10 check: positions 0-8 must be digits, position 9 may be "X"
    /// (value 10); the position-weighted sum must be divisible by 11.
    pub fn is_valid_isbn10(candidate: &str) -> bool {
        let bytes = candidate.as_bytes();
        if bytes.len() != 10 {
            return false;
        }

        let mut sum: u32 = 0;
        for (i, b) in bytes.iter().enumerate() {
            let value = if b.is_ascii_digit() {
                u32::from(b - b'0')
            } else if *b == b'X' && i == 9 {
                10
            } else {
                return false;
            };
            sum += value * (10 - i as u32);
        }

        sum % 11 == 0
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn variant(&self) -> IsbnVariant {
        self.variant
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
