//! Answer normalization
//!
//! Answers are compared after uppercasing and removing whitespace and
//! punctuation. Arabic text additionally loses its short-vowel marks and
//! tatweel, and letter variants fold to a base form:
//!
//! | Variant          | Base |
//! |------------------|------|
//! | أ إ آ ٱ          | ا    |
//! | ة                | ه    |
//! | ى                | ي    |
//! | ؤ                | و    |
//! | ئ                | ي    |

const TATWEEL: char = '\u{0640}';
const SUPERSCRIPT_ALEF: char = '\u{0670}';

fn is_arabic_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}') || c == SUPERSCRIPT_ALEF || c == TATWEEL
}

fn fold_arabic(c: char) -> char {
    match c {
        'أ' | 'إ' | 'آ' | 'ٱ' => 'ا',
        'ة' => 'ه',
        'ى' => 'ي',
        'ؤ' => 'و',
        'ئ' => 'ي',
        other => other,
    }
}

/// Canonical form used for placement and answer checking
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|&c| !is_arabic_diacritic(c) && c.is_alphanumeric())
        .map(fold_arabic)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Length in characters, not bytes
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_uppercase_and_strip() {
        assert_eq!(normalize("  ice-cream! "), "ICECREAM");
        assert_eq!(normalize("Rock 'n' Roll"), "ROCKNROLL");
    }

    #[test]
    fn test_arabic_diacritics_removed() {
        // كَتَبَ with fatha on every letter
        assert_eq!(normalize("كَتَبَ"), "كتب");
        assert_eq!(normalize("كـــتاب"), "كتاب", "Tatweel is dropped");
    }

    #[test]
    fn test_arabic_letter_folding() {
        assert_eq!(normalize("أحمد"), "احمد");
        assert_eq!(normalize("إسلام"), "اسلام");
        assert_eq!(normalize("مدرسة"), "مدرسه");
        assert_eq!(normalize("مستشفى"), "مستشفي");
        assert_eq!(normalize("مؤمن"), "مومن");
        assert_eq!(normalize("رئيس"), "رييس");
    }

    #[test]
    fn test_letter_count_uses_chars() {
        assert_eq!(letter_count("كتب"), 3);
        assert_eq!(letter_count("ABC"), 3);
    }
}
