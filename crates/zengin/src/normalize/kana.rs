//! Kana field normalization.
//!
//! Pipeline, applied in this order:
//!
//! 1. compose to NFC, so `カ` + U+3099 behaves exactly like `ガ`
//! 2. fold full-width forms to half-width ([`fold_width`])
//! 3. upper-case
//! 4. resolve characters with no single half-width form through [`SUBSTITUTIONS`]
//! 5. validate against [`KANA_PATTERN`]

use unicode_normalization::UnicodeNormalization;

use super::{CharsetViolation, fold_width};

/// Pattern reported when a kana value is rejected.
pub const KANA_PATTERN: &str = r"[ｦ-ﾟ()\-.¥\s/]*";

/// Characters with no single-character half-width form.
///
/// Small kana lose their size; voiced and semi-voiced kana become the
/// unvoiced base followed by ﾞ or ﾟ. Kana whose reading depends on context
/// (ヶ, ヵ, ヮ, ヷ, ヺ) are left out and fail validation. Sorted by the input
/// character.
const SUBSTITUTIONS: [(char, &str); 44] = [
    ('ァ', "ｱ"),
    ('ィ', "ｲ"),
    ('ゥ', "ｳ"),
    ('ェ', "ｴ"),
    ('ォ', "ｵ"),
    ('ガ', "ｶﾞ"),
    ('ギ', "ｷﾞ"),
    ('グ', "ｸﾞ"),
    ('ゲ', "ｹﾞ"),
    ('ゴ', "ｺﾞ"),
    ('ザ', "ｻﾞ"),
    ('ジ', "ｼﾞ"),
    ('ズ', "ｽﾞ"),
    ('ゼ', "ｾﾞ"),
    ('ゾ', "ｿﾞ"),
    ('ダ', "ﾀﾞ"),
    ('ヂ', "ﾁﾞ"),
    ('ッ', "ﾂ"),
    ('ヅ', "ﾂﾞ"),
    ('デ', "ﾃﾞ"),
    ('ド', "ﾄﾞ"),
    ('バ', "ﾊﾞ"),
    ('パ', "ﾊﾟ"),
    ('ビ', "ﾋﾞ"),
    ('ピ', "ﾋﾟ"),
    ('ブ', "ﾌﾞ"),
    ('プ', "ﾌﾟ"),
    ('ベ', "ﾍﾞ"),
    ('ペ', "ﾍﾟ"),
    ('ボ', "ﾎﾞ"),
    ('ポ', "ﾎﾟ"),
    ('ャ', "ﾔ"),
    ('ュ', "ﾕ"),
    ('ョ', "ﾖ"),
    ('ヴ', "ｳﾞ"),
    ('ｧ', "ｱ"),
    ('ｨ', "ｲ"),
    ('ｩ', "ｳ"),
    ('ｪ', "ｴ"),
    ('ｫ', "ｵ"),
    ('ｬ', "ﾔ"),
    ('ｭ', "ﾕ"),
    ('ｮ', "ﾖ"),
    ('ｯ', "ﾂ"),
];

/// Looks up the substitution for a single character.
///
/// Returns `None` when the character passes through unchanged.
#[must_use]
pub fn substitute(c: char) -> Option<&'static str> {
    SUBSTITUTIONS.binary_search_by_key(&c, |&(from, _)| from).ok().map(|idx| SUBSTITUTIONS[idx].1)
}

// Any ASCII whitespace is accepted, CR and LF included. Callers that write
// records line by line must reject control whitespace themselves.
fn is_allowed(c: char) -> bool {
    matches!(c, 'ｦ'..='ﾟ' | '(' | ')' | '-' | '.' | '¥' | '/') || c.is_ascii_whitespace()
}

/// Normalizes a name field to half-width katakana.
///
/// The result may be longer than the input: every voiced kana expands to
/// two characters. Measure field width on the returned value.
///
/// # Example
///
/// ```
/// use zengin::normalize::normalize_kana;
///
/// assert_eq!(normalize_kana("ジッケン（カ").unwrap(), "ｼﾞﾂｹﾝ(ｶ");
/// assert!(normalize_kana("漢字").is_err());
/// ```
pub fn normalize_kana(s: &str) -> Result<String, CharsetViolation> {
    let narrow: String = s.nfc().map(fold_width).flat_map(char::to_uppercase).collect();

    let mut out = String::with_capacity(narrow.len() * 2);
    for c in narrow.chars() {
        match substitute(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }

    if out.chars().all(is_allowed) {
        Ok(out)
    } else {
        Err(CharsetViolation { value: out, allowed: KANA_PATTERN })
    }
}
