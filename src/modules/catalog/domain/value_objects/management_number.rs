use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::services::search_processor::text_normalizer::fold_width_char;

/// Composite sort key derived from an opaque management number
///
/// A management number is an organization-assigned catalog tag, typically
/// one leading kana character followed by digits ("あ001"). The key orders
/// by the raw leading character first, then by numeric magnitude with
/// full-width digits folded to half-width, so "あ001", "あ０１０" and
/// "あ１００" interleave by value.
///
/// `Missing` is declared last so the derived `Ord` makes records without a
/// management number sort after every record that has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ManagementSortKey {
    Key { lead: char, magnitude: u64 },
    Missing,
}

impl ManagementSortKey {
    /// Derive the sort key. Total: absent, empty, or non-numeric input
    /// never fails, it just degrades (`Missing`, or magnitude 0).
    pub fn from_number(number: Option<&str>) -> Self {
        let number = match number {
            Some(n) => n.trim(),
            None => return ManagementSortKey::Missing,
        };

        let mut chars = number.chars();
        let lead = match chars.next() {
            Some(c) => c,
            None => return ManagementSortKey::Missing,
        };

        let digits: String = chars
            .as_str()
            .chars()
            .map(fold_width_char)
            .take_while(|c| c.is_ascii_digit())
            .collect();

        let magnitude = if digits.is_empty() {
            0
        } else {
            // All-digit input can only fail to parse by overflowing u64
            digits.parse::<u64>().unwrap_or(u64::MAX)
        };

        ManagementSortKey::Key { lead, magnitude }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ManagementSortKey::Missing)
    }
}
