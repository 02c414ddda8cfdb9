use serde::{Deserialize, Serialize};

/// How a bibliographic string is being canonicalized
///
/// The three modes share one pipeline and one set of character tables; they
/// diverge only in symbol handling and in the finishing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormalizeMode {
    /// Conservative form for display and generic comparison: symbol
    /// variants collapse to a readable canonical character, single spaces
    /// are preserved.
    Generic,
    /// Search-optimized title form: symbols become spaces for recall, then
    /// every space is stripped so inter-character spacing never affects
    /// title matching.
    Title,
    /// Search-optimized author form: symbols become spaces, single spaces
    /// are preserved, and one trailing role-word credit ("作", "（さく）",
    /// "作・絵" and friends) is removed.
    Author,
}

impl NormalizeMode {
    /// Title and author matching trade readability for recall.
    pub fn is_search_optimized(&self) -> bool {
        matches!(self, NormalizeMode::Title | NormalizeMode::Author)
    }
}

/// Fold a full-width Latin letter or decimal digit to its ASCII
/// counterpart. Every other character passes through unchanged.
///
/// Shared by the normalizer and by management-number key derivation so the
/// two can never drift apart.
pub fn fold_width_char(c: char) -> char {
    match c {
        '０'..='９' | 'Ａ'..='Ｚ' | 'ａ'..='ｚ' => {
            char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
        }
        _ => c,
    }
}

/// Symbol variants and the canonical character each maps to in generic
/// mode. Search-optimized modes map every listed variant to a single space
/// instead. The table is closed: every canonical form maps to itself, so
/// applying it twice changes nothing.
const SYMBOL_VARIANTS: &[(char, char)] = &[
    // middle dots
    ('・', '・'),
    ('･', '・'),
    ('·', '・'),
    // dash / hyphen variants
    ('-', '-'),
    ('‐', '-'),
    ('‑', '-'),
    ('–', '-'),
    ('—', '-'),
    ('―', '-'),
    ('−', '-'),
    // wave dashes
    ('~', '~'),
    ('〜', '~'),
    ('～', '~'),
    // brackets
    ('(', '('),
    (')', ')'),
    ('（', '('),
    ('）', ')'),
    ('「', '「'),
    ('」', '」'),
    ('『', '『'),
    ('』', '』'),
    ('【', '【'),
    ('】', '】'),
    // punctuation
    (':', ':'),
    ('：', ':'),
    (';', ';'),
    ('；', ';'),
    ('!', '!'),
    ('！', '!'),
    ('?', '?'),
    ('？', '?'),
];

/// Old-form and variant characters folded to their modern equivalents.
const VARIANT_CHARS: &[(char, char)] = &[
    ('髙', '高'),
    ('﨑', '崎'),
    ('濵', '浜'),
    ('邊', '辺'),
    ('邉', '辺'),
    ('齋', '斎'),
    ('國', '国'),
    ('櫻', '桜'),
    ('ゐ', 'い'),
    ('ゑ', 'え'),
    ('ヰ', 'イ'),
    ('ヱ', 'エ'),
];

/// Trailing credit annotations stripped in author mode, checked in order as
/// exact trailing matches. Compound credits come first so "作 絵" (the
/// normalized form of "作・絵") is removed whole instead of leaving "作"
/// behind. At most one entry is ever removed.
///
/// The bare kana え is deliberately absent: it would truncate ordinary
/// names ending in え.
const ROLE_SUFFIXES: &[&str] = &[
    // compound credits
    "作 絵",
    "さく え",
    "文 絵",
    "ぶん え",
    "作 画",
    "文 写真",
    // single role words
    "原作",
    "作",
    "著",
    "文",
    "訳",
    "絵",
    "画",
    "さく",
    "ぶん",
    "やく",
];

/// Transformation that can be applied to a bibliographic string
///
/// Each transformation is composable and testable in isolation.
pub trait Transformation: Send + Sync {
    fn transform(&self, text: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Folds full-width Latin letters and digits to half-width ASCII
#[derive(Debug, Clone)]
pub struct WidthFoldTransform;

impl Transformation for WidthFoldTransform {
    fn transform(&self, text: &str) -> String {
        text.chars().map(fold_width_char).collect()
    }

    fn name(&self) -> &'static str {
        "WidthFold"
    }
}

/// Lower-cases Latin script so ASCII case never affects comparison
#[derive(Debug, Clone)]
pub struct LowercaseTransform;

impl Transformation for LowercaseTransform {
    fn transform(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "Lowercase"
    }
}

/// Normalizes punctuation/symbol variants per the shared table
#[derive(Debug, Clone)]
pub struct SymbolVariantTransform {
    search_optimized: bool,
}

impl SymbolVariantTransform {
    pub fn new(search_optimized: bool) -> Self {
        Self { search_optimized }
    }
}

impl Transformation for SymbolVariantTransform {
    fn transform(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                match SYMBOL_VARIANTS.iter().find(|(variant, _)| *variant == c) {
                    Some((_, canonical)) => {
                        if self.search_optimized {
                            ' '
                        } else {
                            *canonical
                        }
                    }
                    None => c,
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "SymbolVariant"
    }
}

/// Replaces old-form/variant characters with their modern equivalents
#[derive(Debug, Clone)]
pub struct VariantCharTransform;

impl Transformation for VariantCharTransform {
    fn transform(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                VARIANT_CHARS
                    .iter()
                    .find(|(variant, _)| *variant == c)
                    .map(|(_, modern)| *modern)
                    .unwrap_or(c)
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "VariantChar"
    }
}

/// Normalizes whitespace (collapses runs, trims, folds Unicode whitespace
/// including the full-width space to a single ASCII space)
#[derive(Debug, Clone)]
pub struct NormalizeWhitespaceTransform;

impl Transformation for NormalizeWhitespaceTransform {
    fn transform(&self, text: &str) -> String {
        text.split_whitespace().collect::<Vec<&str>>().join(" ")
    }

    fn name(&self) -> &'static str {
        "NormalizeWhitespace"
    }
}

/// Removes every remaining space (title-mode finishing step)
#[derive(Debug, Clone)]
pub struct StripSpacesTransform;

impl Transformation for StripSpacesTransform {
    fn transform(&self, text: &str) -> String {
        text.chars().filter(|c| *c != ' ').collect()
    }

    fn name(&self) -> &'static str {
        "StripSpaces"
    }
}

/// Removes at most one trailing role-word credit (author-mode finishing
/// step)
#[derive(Debug, Clone)]
pub struct StripRoleSuffixTransform;

impl Transformation for StripRoleSuffixTransform {
    fn transform(&self, text: &str) -> String {
        for suffix in ROLE_SUFFIXES {
            if let Some(stripped) = text.strip_suffix(suffix) {
                return stripped.trim_end().to_string();
            }
        }
        text.to_string()
    }

    fn name(&self) -> &'static str {
        "StripRoleSuffix"
    }
}

/// Canonicalizes raw bibliographic strings into a comparable form
///
/// One pipeline of composable transformations, parameterized by
/// [`NormalizeMode`]. All character tables are shared between modes, so the
/// modes cannot drift apart. Normalization is deterministic, idempotent per
/// mode, and total - arbitrary input yields a string, never an error.
pub struct TextNormalizer {
    mode: NormalizeMode,
    transformations: Vec<Box<dyn Transformation>>,
}

impl TextNormalizer {
    pub fn new(mode: NormalizeMode) -> Self {
        let mut transformations: Vec<Box<dyn Transformation>> = vec![
            Box::new(WidthFoldTransform),
            Box::new(LowercaseTransform),
            Box::new(SymbolVariantTransform::new(mode.is_search_optimized())),
            Box::new(VariantCharTransform),
            Box::new(NormalizeWhitespaceTransform),
        ];

        match mode {
            NormalizeMode::Title => transformations.push(Box::new(StripSpacesTransform)),
            NormalizeMode::Author => transformations.push(Box::new(StripRoleSuffixTransform)),
            NormalizeMode::Generic => {}
        }

        Self {
            mode,
            transformations,
        }
    }

    /// Conservative display/comparison form.
    pub fn generic() -> Self {
        Self::new(NormalizeMode::Generic)
    }

    /// Search-optimized title form.
    pub fn title() -> Self {
        Self::new(NormalizeMode::Title)
    }

    /// Search-optimized author form.
    pub fn author() -> Self {
        Self::new(NormalizeMode::Author)
    }

    pub fn mode(&self) -> NormalizeMode {
        self.mode
    }

    /// Apply the full pipeline to the input.
    pub fn normalize(&self, text: &str) -> String {
        let mut result = text.trim().to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("after {}: '{}'", transformation.name(), result);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Individual transformation tests

    #[test]
    fn test_width_fold_transform() {
        let transform = WidthFoldTransform;
        assert_eq!(transform.transform("ＡＢＣ０１２ａｂｃ"), "ABC012abc");
        // Kana and kanji are untouched
        assert_eq!(transform.transform("ぐりとぐら"), "ぐりとぐら");
    }

    #[test]
    fn test_symbol_variant_transform_generic() {
        let transform = SymbolVariantTransform::new(false);
        assert_eq!(transform.transform("ぐり！？"), "ぐり!?");
        assert_eq!(transform.transform("（作）"), "(作)");
        // Middle dots and dashes keep a readable form
        assert_eq!(transform.transform("なかがわ・りえこ"), "なかがわ・りえこ");
        assert_eq!(transform.transform("モー〜ン"), "モー~ン");
    }

    #[test]
    fn test_symbol_variant_transform_search() {
        let transform = SymbolVariantTransform::new(true);
        assert_eq!(transform.transform("ぐり・ぐら"), "ぐり ぐら");
        assert_eq!(transform.transform("（作）"), " 作 ");
        assert_eq!(transform.transform("14ひきのあさごはん！"), "14ひきのあさごはん ");
    }

    #[test]
    fn test_variant_char_transform() {
        let transform = VariantCharTransform;
        assert_eq!(transform.transform("髙橋﨑"), "高橋崎");
        assert_eq!(transform.transform("ゐゑ"), "いえ");
    }

    #[test]
    fn test_normalize_whitespace_transform() {
        let transform = NormalizeWhitespaceTransform;
        assert_eq!(transform.transform("  ぐり    ぐら  "), "ぐり ぐら");
        // Full-width space is Unicode whitespace
        assert_eq!(transform.transform("ぐり\u{3000}ぐら"), "ぐり ぐら");
        assert_eq!(transform.transform("ぐり\t\nぐら"), "ぐり ぐら");
    }

    #[test]
    fn test_strip_spaces_transform() {
        let transform = StripSpacesTransform;
        assert_eq!(transform.transform("ぐり と ぐら"), "ぐりとぐら");
    }

    #[test]
    fn test_strip_role_suffix_transform() {
        let transform = StripRoleSuffixTransform;
        assert_eq!(transform.transform("宮沢賢治 作"), "宮沢賢治");
        assert_eq!(transform.transform("宮沢賢治作"), "宮沢賢治");
        assert_eq!(transform.transform("おおむらゆりこ 作 絵"), "おおむらゆりこ");
        // Only one suffix is removed
        assert_eq!(transform.transform("だれか 絵 作"), "だれか 絵");
        // Names without a credit pass through
        assert_eq!(transform.transform("なかがわりえこ"), "なかがわりえこ");
    }

    #[test]
    fn test_compound_suffix_wins_over_single() {
        let transform = StripRoleSuffixTransform;
        // "原作" must strip whole, not leave "原"
        assert_eq!(transform.transform("五味太郎 原作"), "五味太郎");
    }

    // Pipeline tests

    #[test]
    fn test_title_mode_strips_all_spaces() {
        let normalizer = TextNormalizer::title();
        assert_eq!(
            normalizer.normalize("ぐり と ぐら"),
            normalizer.normalize("ぐりとぐら")
        );
        assert_eq!(normalizer.normalize("ぐり と ぐら"), "ぐりとぐら");
    }

    #[test]
    fn test_title_mode_symbols_become_joinable() {
        let normalizer = TextNormalizer::title();
        // Search-optimized: symbols collapse away entirely in title mode
        assert_eq!(normalizer.normalize("ぐり・ぐら"), "ぐりぐら");
        assert_eq!(normalizer.normalize("１４ひきのあさごはん！"), "14ひきのあさごはん");
    }

    #[test]
    fn test_author_mode_strips_bracketed_credit() {
        let normalizer = TextNormalizer::author();
        assert_eq!(
            normalizer.normalize("宮沢賢治（作）"),
            normalizer.normalize("宮沢賢治")
        );
        assert_eq!(normalizer.normalize("宮沢賢治（作）"), "宮沢賢治");
    }

    #[test]
    fn test_author_mode_strips_compound_credit() {
        let normalizer = TextNormalizer::author();
        assert_eq!(normalizer.normalize("おおむらゆりこ（作・絵）"), "おおむらゆりこ");
        assert_eq!(normalizer.normalize("かこさとし 文 絵"), "かこさとし");
    }

    #[test]
    fn test_author_mode_preserves_inner_spaces() {
        let normalizer = TextNormalizer::author();
        assert_eq!(normalizer.normalize("なかがわ　りえこ"), "なかがわ りえこ");
    }

    #[test]
    fn test_generic_mode_preserves_readable_symbols() {
        let normalizer = TextNormalizer::generic();
        assert_eq!(normalizer.normalize("ディック・ブルーナ"), "ディック・ブルーナ");
        assert_eq!(normalizer.normalize("ミッフィー！"), "ミッフィー!");
    }

    #[test]
    fn test_width_folding_and_lowercasing() {
        let normalizer = TextNormalizer::title();
        assert_eq!(normalizer.normalize("ＧＵＲＩ ｔｏ ＧＵＲＡ"), "guritogura");

        let generic = TextNormalizer::generic();
        assert_eq!(generic.normalize("Ｅric Ｃarle"), "eric carle");
    }

    #[test]
    fn test_variant_kanji_folding_in_pipeline() {
        let normalizer = TextNormalizer::author();
        assert_eq!(normalizer.normalize("髙橋まゆみ"), "高橋まゆみ");
    }

    // Edge cases

    #[test]
    fn test_empty_and_whitespace_only_input() {
        for normalizer in [
            TextNormalizer::generic(),
            TextNormalizer::title(),
            TextNormalizer::author(),
        ] {
            assert_eq!(normalizer.normalize(""), "");
            assert_eq!(normalizer.normalize("   \u{3000}\t"), "");
        }
    }

    #[test]
    fn test_symbols_only_input() {
        let normalizer = TextNormalizer::title();
        assert_eq!(normalizer.normalize("・！？（）"), "");
    }

    #[test]
    fn test_credit_only_author_normalizes_to_empty() {
        let normalizer = TextNormalizer::author();
        assert_eq!(normalizer.normalize("（作）"), "");
    }

    #[test]
    fn test_unsupported_scripts_pass_through() {
        let normalizer = TextNormalizer::generic();
        assert_eq!(normalizer.normalize("한국어 제목"), "한국어 제목");
    }

    // Property tests

    #[test]
    fn test_normalization_is_idempotent_in_all_modes() {
        let inputs = vec![
            "ぐり と ぐら",
            "宮沢賢治（作）",
            "ＧＵＲＩ・ＧＵＲＡ！",
            "おおむらゆりこ（作・絵）",
            "「１４ひきのあさごはん」",
            "髙橋　まゆみ〜",
            "",
            "Eric Carle",
        ];

        for normalizer in [
            TextNormalizer::generic(),
            TextNormalizer::title(),
            TextNormalizer::author(),
        ] {
            for input in &inputs {
                let once = normalizer.normalize(input);
                let twice = normalizer.normalize(&once);
                assert_eq!(
                    once, twice,
                    "normalization not idempotent in {:?} mode for '{}'",
                    normalizer.mode(),
                    input
                );
            }
        }
    }

    #[test]
    fn test_modes_report_search_optimization() {
        assert!(!NormalizeMode::Generic.is_search_optimized());
        assert!(NormalizeMode::Title.is_search_optimized());
        assert!(NormalizeMode::Author.is_search_optimized());
    }

    #[test]
    fn test_fold_width_char_is_bijective_on_ranges() {
        assert_eq!(fold_width_char('０'), '0');
        assert_eq!(fold_width_char('９'), '9');
        assert_eq!(fold_width_char('Ａ'), 'A');
        assert_eq!(fold_width_char('ｚ'), 'z');
        assert_eq!(fold_width_char('あ'), 'あ');
        assert_eq!(fold_width_char('5'), '5');
    }

    #[test]
    fn test_symbol_table_is_closed() {
        // Every canonical form must map to itself so generic mode is
        // idempotent by construction.
        for (_, canonical) in SYMBOL_VARIANTS {
            let mapped = SYMBOL_VARIANTS
                .iter()
                .find(|(variant, _)| variant == canonical)
                .map(|(_, c)| *c)
                .unwrap_or(*canonical);
            assert_eq!(mapped, *canonical);
        }
    }
}
