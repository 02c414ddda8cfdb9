use serde::{Deserialize, Serialize};

/// Phonetic shelf section for sectioned title browsing
///
/// One bucket per consonant row of the Japanese syllabary plus a catch-all.
/// The derived `Ord` follows declaration order, which is exactly the fixed
/// display rank (A=0 .. Wa=9, Other=10), so sections sort for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KanaGroup {
    A,
    Ka,
    Sa,
    Ta,
    Na,
    Ha,
    Ma,
    Ya,
    Ra,
    Wa,
    Other,
}

impl KanaGroup {
    /// Every group, in display-rank order.
    pub const ALL: [KanaGroup; 11] = [
        KanaGroup::A,
        KanaGroup::Ka,
        KanaGroup::Sa,
        KanaGroup::Ta,
        KanaGroup::Na,
        KanaGroup::Ha,
        KanaGroup::Ma,
        KanaGroup::Ya,
        KanaGroup::Ra,
        KanaGroup::Wa,
        KanaGroup::Other,
    ];

    /// Section header shown in the shelf list.
    pub fn label(&self) -> &'static str {
        match self {
            KanaGroup::A => "あ",
            KanaGroup::Ka => "か",
            KanaGroup::Sa => "さ",
            KanaGroup::Ta => "た",
            KanaGroup::Na => "な",
            KanaGroup::Ha => "は",
            KanaGroup::Ma => "ま",
            KanaGroup::Ya => "や",
            KanaGroup::Ra => "ら",
            KanaGroup::Wa => "わ",
            KanaGroup::Other => "その他",
        }
    }

    /// Fixed total-order rank used for section ordering.
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_dense_and_ordered() {
        for (expected, group) in KanaGroup::ALL.iter().enumerate() {
            assert_eq!(group.rank() as usize, expected);
        }
    }

    #[test]
    fn test_derived_ord_matches_rank() {
        assert!(KanaGroup::A < KanaGroup::Ka);
        assert!(KanaGroup::Wa < KanaGroup::Other);

        let mut shuffled = vec![KanaGroup::Other, KanaGroup::Ta, KanaGroup::A, KanaGroup::Ha];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![KanaGroup::A, KanaGroup::Ta, KanaGroup::Ha, KanaGroup::Other]
        );
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: std::collections::HashSet<&str> =
            KanaGroup::ALL.iter().map(KanaGroup::label).collect();
        assert_eq!(labels.len(), KanaGroup::ALL.len());
    }
}
