//! Width folding: full-width forms to their half-width counterparts.

/// Full-width characters outside the ASCII block with a single half-width form.
///
/// Sorted by the full-width character for binary search. Voiced kana (ガ, パ, …)
/// have no single half-width form and are handled by the substitution table.
const KATAKANA_NARROW: [(char, char); 68] = [
    ('\u{3000}', ' '),
    ('、', '､'),
    ('。', '｡'),
    ('「', '｢'),
    ('」', '｣'),
    ('\u{3099}', 'ﾞ'),
    ('\u{309A}', 'ﾟ'),
    ('゛', 'ﾞ'),
    ('゜', 'ﾟ'),
    ('ァ', 'ｧ'),
    ('ア', 'ｱ'),
    ('ィ', 'ｨ'),
    ('イ', 'ｲ'),
    ('ゥ', 'ｩ'),
    ('ウ', 'ｳ'),
    ('ェ', 'ｪ'),
    ('エ', 'ｴ'),
    ('ォ', 'ｫ'),
    ('オ', 'ｵ'),
    ('カ', 'ｶ'),
    ('キ', 'ｷ'),
    ('ク', 'ｸ'),
    ('ケ', 'ｹ'),
    ('コ', 'ｺ'),
    ('サ', 'ｻ'),
    ('シ', 'ｼ'),
    ('ス', 'ｽ'),
    ('セ', 'ｾ'),
    ('ソ', 'ｿ'),
    ('タ', 'ﾀ'),
    ('チ', 'ﾁ'),
    ('ッ', 'ｯ'),
    ('ツ', 'ﾂ'),
    ('テ', 'ﾃ'),
    ('ト', 'ﾄ'),
    ('ナ', 'ﾅ'),
    ('ニ', 'ﾆ'),
    ('ヌ', 'ﾇ'),
    ('ネ', 'ﾈ'),
    ('ノ', 'ﾉ'),
    ('ハ', 'ﾊ'),
    ('ヒ', 'ﾋ'),
    ('フ', 'ﾌ'),
    ('ヘ', 'ﾍ'),
    ('ホ', 'ﾎ'),
    ('マ', 'ﾏ'),
    ('ミ', 'ﾐ'),
    ('ム', 'ﾑ'),
    ('メ', 'ﾒ'),
    ('モ', 'ﾓ'),
    ('ャ', 'ｬ'),
    ('ヤ', 'ﾔ'),
    ('ュ', 'ｭ'),
    ('ユ', 'ﾕ'),
    ('ョ', 'ｮ'),
    ('ヨ', 'ﾖ'),
    ('ラ', 'ﾗ'),
    ('リ', 'ﾘ'),
    ('ル', 'ﾙ'),
    ('レ', 'ﾚ'),
    ('ロ', 'ﾛ'),
    ('ワ', 'ﾜ'),
    ('ヲ', 'ｦ'),
    ('ン', 'ﾝ'),
    ('・', '･'),
    ('ー', 'ｰ'),
    ('\u{FFE5}', '¥'),
    ('\u{FFE6}', '₩'),
];

/// Folds a single character to its half-width form.
///
/// Characters without a narrow counterpart are returned unchanged.
#[must_use]
pub fn fold_width(c: char) -> char {
    match c {
        // Full-width ASCII block ！..～
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        '\u{FF5F}' => '⦅',
        '\u{FF60}' => '⦆',
        '\u{FFE0}' => '¢',
        '\u{FFE1}' => '£',
        '\u{FFE2}' => '¬',
        '\u{FFE3}' => '¯',
        '\u{FFE4}' => '¦',
        _ => KATAKANA_NARROW
            .binary_search_by_key(&c, |&(wide, _)| wide)
            .map_or(c, |idx| KATAKANA_NARROW[idx].1),
    }
}
