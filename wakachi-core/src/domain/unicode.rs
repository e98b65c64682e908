//! Character classification used by chunk metadata
//!
//! Two questions are asked of chunk words:
//! - does the word contain any CJK character (decides wrapping and breaklines)
//! - does a punctuation chunk open a bracket or quote (decides its dependency)

use unicode_general_category::{get_general_category, GeneralCategory};

/// Inclusive code point ranges treated as CJK.
///
/// Covers Hangul Jamo, CJK radicals through Yi, Phags-pa, Hangul syllables,
/// compatibility ideographs, CJK compatibility forms, halfwidth forms and the
/// supplementary ideographic planes.
pub const CJK_RANGES: [(u32, u32); 8] = [
    (0x1100, 0x11FF),
    (0x2E80, 0xA4CF),
    (0xA840, 0xA87F),
    (0xAC00, 0xD7AF),
    (0xF900, 0xFAFF),
    (0xFE30, 0xFE4F),
    (0xFF65, 0xFFDC),
    (0x20000, 0x2FFFF),
];

/// Check whether a single character falls in one of the CJK ranges
#[inline]
pub fn is_cjk_char(ch: char) -> bool {
    let code = ch as u32;
    CJK_RANGES
        .iter()
        .any(|&(start, end)| start <= code && code <= end)
}

/// True if any character of `text` is CJK.
///
/// Mixed-script words such as "東京Tower" count as CJK.
pub fn has_cjk(text: &str) -> bool {
    text.chars().any(is_cjk_char)
}

/// Check whether a character is open punctuation (Ps) or an initial quote (Pi)
pub fn is_open_punctuation_char(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::OpenPunctuation | GeneralCategory::InitialPunctuation
    )
}

/// Classify a punctuation word by its first character
pub fn is_open_punctuation(word: &str) -> bool {
    word.chars().next().is_some_and(is_open_punctuation_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHINESE_TEXT: &str = "能記安全償与属護月孫支人受。";
    const JAPANESE_TEXT: &str = "はっぬるあつ無ャシコヘタさゃひょ。";
    const KOREAN_TEXT: &str = "모든 국민은 사생활의 비밀과 자유를 침해받지 아니한다.";
    const LATIN_TEXT: &str = "Lorem ipsum dolor sit amet, mazim simul percipit an nam.";
    const MIXED_TEXT: &str = "Lorem ipsum 食べる　모든 국민은　mazim simul 人受 an nam.";

    #[test]
    fn test_has_cjk_per_script() {
        assert!(has_cjk(CHINESE_TEXT));
        assert!(has_cjk(JAPANESE_TEXT));
        assert!(has_cjk(KOREAN_TEXT));
        assert!(has_cjk(MIXED_TEXT));
        assert!(!has_cjk(LATIN_TEXT));
    }

    #[test]
    fn test_has_cjk_is_existence_based() {
        assert!(has_cjk("東京Tower"));
        assert!(has_cjk("abcdefghij字"));
        assert!(!has_cjk(""));
    }

    #[test]
    fn test_supplementary_plane_ideograph() {
        // U+20BB7, outside the BMP
        assert!(is_cjk_char('𠮷'));
    }

    #[test]
    fn test_open_punctuation_chars() {
        let cases = [
            ('「', true),
            ('」', false),
            ('（', true),
            ('）', false),
            ('<', false),
            ('>', false),
            ('a', false),
            ('z', false),
            ('‘', true),
            ('’', false),
            ('[', true),
            (']', false),
        ];

        for (ch, expected) in cases {
            assert_eq!(is_open_punctuation_char(ch), expected, "char {ch:?}");
        }
    }

    #[test]
    fn test_open_punctuation_word_uses_first_char() {
        assert!(is_open_punctuation("「ご飯"));
        assert!(!is_open_punctuation("ご飯」"));
        assert!(!is_open_punctuation(""));
    }
}
