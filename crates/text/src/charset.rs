//! Character classes used by the normalizer
//!
//! Ranges are inclusive Unicode scalar value ranges.

use std::ops::RangeInclusive;

/// Arabic block
pub const ARABIC: RangeInclusive<char> = '\u{0600}'..='\u{06FF}';
/// Arabic Supplement block
pub const ARABIC_SUPPLEMENT: RangeInclusive<char> = '\u{0750}'..='\u{077F}';
/// Arabic Extended-A block
pub const ARABIC_EXTENDED_A: RangeInclusive<char> = '\u{08A0}'..='\u{08FF}';

/// Emoji ranges kept by the allow-list filter.
pub const EMOJI_RANGES: [RangeInclusive<char>; 11] = [
    '\u{1F600}'..='\u{1F64F}', // emoticons
    '\u{1F300}'..='\u{1F5FF}', // misc symbols and pictographs
    '\u{1F680}'..='\u{1F6FF}', // transport and map
    '\u{1F700}'..='\u{1F77F}', // alchemical
    '\u{1F780}'..='\u{1F7FF}', // geometric shapes extended
    '\u{1F800}'..='\u{1F8FF}', // supplemental arrows-C
    '\u{1F900}'..='\u{1F9FF}', // supplemental symbols and pictographs
    '\u{1FA00}'..='\u{1FA6F}', // chess symbols
    '\u{1FA70}'..='\u{1FAFF}', // symbols and pictographs extended-A
    '\u{2600}'..='\u{26FF}',   // misc symbols
    '\u{2700}'..='\u{27BF}',   // dingbats
];

/// Tatweel / kashida
pub const KASHIDA: char = '\u{0640}';

/// Arabic-Indic digits
pub const ARABIC_INDIC_DIGITS: RangeInclusive<char> = '\u{0660}'..='\u{0669}';
/// Extended (Persian) Arabic-Indic digits
pub const EXTENDED_ARABIC_INDIC_DIGITS: RangeInclusive<char> = '\u{06F0}'..='\u{06F9}';

/// Basic Latin letters
#[inline]
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII, Arabic-Indic or Extended Arabic-Indic decimal digit
#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || ARABIC_INDIC_DIGITS.contains(&c) || EXTENDED_ARABIC_INDIC_DIGITS.contains(&c)
}

/// Tashkeel: fathatan through sukun, plus superscript alef
#[inline]
pub fn is_tashkeel(c: char) -> bool {
    ('\u{064B}'..='\u{0652}').contains(&c) || c == '\u{0670}'
}

/// Any of the three Arabic blocks
#[inline]
pub fn is_arabic(c: char) -> bool {
    ARABIC.contains(&c) || ARABIC_SUPPLEMENT.contains(&c) || ARABIC_EXTENDED_A.contains(&c)
}

/// One of the emoji ranges kept by the allow-list filter
#[inline]
pub fn is_emoji(c: char) -> bool {
    EMOJI_RANGES.iter().any(|r| r.contains(&c))
}

/// Characters that survive the allow-list filter.
///
/// ASCII digits, the Arabic blocks (which contain Arabic letters, punctuation
/// and diacritics), the emoji ranges, space and underscore.
#[inline]
pub fn is_allowed(c: char) -> bool {
    c == ' ' || c == '_' || c.is_ascii_digit() || is_arabic(c) || is_emoji(c)
}
