use wana_kana::ConvertJapanese;

use crate::modules::catalog::domain::services::search_processor::{NormalizeMode, TextNormalizer};
use crate::modules::catalog::domain::value_objects::KanaGroup;

/// Membership sets for the ten kana rows, each including the row's voiced,
/// semi-voiced and small variants. Disjoint by construction; first match
/// wins.
const GROUP_ROWS: &[(KanaGroup, &[char])] = &[
    (
        KanaGroup::A,
        &['あ', 'い', 'う', 'え', 'お', 'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ'],
    ),
    (
        KanaGroup::Ka,
        &['か', 'き', 'く', 'け', 'こ', 'が', 'ぎ', 'ぐ', 'げ', 'ご', 'ゕ', 'ゖ'],
    ),
    (
        KanaGroup::Sa,
        &['さ', 'し', 'す', 'せ', 'そ', 'ざ', 'じ', 'ず', 'ぜ', 'ぞ'],
    ),
    (
        KanaGroup::Ta,
        &['た', 'ち', 'つ', 'て', 'と', 'だ', 'ぢ', 'づ', 'で', 'ど', 'っ'],
    ),
    (KanaGroup::Na, &['な', 'に', 'ぬ', 'ね', 'の']),
    (
        KanaGroup::Ha,
        &[
            'は', 'ひ', 'ふ', 'へ', 'ほ', 'ば', 'び', 'ぶ', 'べ', 'ぼ', 'ぱ', 'ぴ', 'ぷ', 'ぺ',
            'ぽ',
        ],
    ),
    (KanaGroup::Ma, &['ま', 'み', 'む', 'め', 'も']),
    (KanaGroup::Ya, &['や', 'ゆ', 'よ', 'ゃ', 'ゅ', 'ょ']),
    (KanaGroup::Ra, &['ら', 'り', 'る', 'れ', 'ろ']),
    (KanaGroup::Wa, &['わ', 'を', 'ん', 'ゎ']),
];

/// Maps a title to its phonetic shelf section
///
/// The input is normalized, converted to hiragana (romaji and katakana
/// convert; kanji has no reading support in the conversion facility and
/// passes through), and bucketed by its first character. Total: every
/// string, including the empty one, lands in exactly one group.
///
/// Which normalization mode feeds the conversion is an explicit parameter.
/// The default is title mode so leading brackets and quotes collapse away
/// instead of shadowing the first phonetic character.
pub struct KanaClassifier {
    normalizer: TextNormalizer,
}

impl KanaClassifier {
    pub fn new() -> Self {
        Self::with_mode(NormalizeMode::Title)
    }

    pub fn with_mode(mode: NormalizeMode) -> Self {
        Self {
            normalizer: TextNormalizer::new(mode),
        }
    }

    pub fn mode(&self) -> NormalizeMode {
        self.normalizer.mode()
    }

    pub fn classify(&self, text: &str) -> KanaGroup {
        let normalized = self.normalizer.normalize(text);
        if normalized.is_empty() {
            return KanaGroup::Other;
        }

        let hiragana = normalized.to_hiragana();
        match hiragana.chars().next() {
            Some(first) => Self::group_of(first),
            None => KanaGroup::Other,
        }
    }

    fn group_of(c: char) -> KanaGroup {
        GROUP_ROWS
            .iter()
            .find(|(_, members)| members.contains(&c))
            .map(|(group, _)| *group)
            .unwrap_or(KanaGroup::Other)
    }
}

impl Default for KanaClassifier {
    fn default() -> Self {
        Self::new()
    }
}
