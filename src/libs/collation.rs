//! Arabic-aware name ordering for roster listings.
//!
//! Student names are predominantly Arabic and must list in natural
//! alphabetical order. Raw code-point comparison almost gets there (the
//! Arabic block is laid out alphabetically) but misorders hamza-carrying
//! alef forms and treats vowel marks and kashida as significant. Names are
//! therefore compared through a normalized key: presentation marks are
//! stripped, letter variants fold to their base letter, and Latin names mix
//! in case-insensitively.

use std::cmp::Ordering;

/// Compares two names in natural alphabetical order.
///
/// Equal keys fall back to raw string order so the comparison stays total
/// and deterministic for names differing only in diacritics.
pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

fn sort_key(name: &str) -> Vec<char> {
    name.chars().filter_map(normalize).collect()
}

fn normalize(c: char) -> Option<char> {
    match c {
        // Kashida and short vowel marks carry no alphabetical weight.
        '\u{0640}' => None,
        '\u{064B}'..='\u{0652}' | '\u{0670}' => None,
        // Hamza-carrying and wasla alef forms sort with plain alef.
        'آ' | 'أ' | 'إ' | 'ٱ' => Some('ا'),
        'ؤ' => Some('و'),
        'ئ' | 'ى' => Some('ي'),
        _ => c.to_lowercase().next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alef_variants_sort_together() {
        // Plain code-point order would put hamza-on-alef names after all
        // plain-alef names; collation keeps them interleaved alphabetically.
        let mut names = vec!["ايمن", "أحمد", "بسمة", "إسلام"];
        names.sort_by(|a, b| compare(a, b));
        assert_eq!(names, vec!["أحمد", "إسلام", "ايمن", "بسمة"]);
    }

    #[test]
    fn diacritics_are_ignored() {
        assert_eq!(compare("مُحَمَّد", "محمد أمين"), Ordering::Less);
        assert_ne!(compare("مُحَمَّد", "محمد"), Ordering::Equal);
    }

    #[test]
    fn latin_names_sort_case_insensitively() {
        let mut names = vec!["yara", "Adam", "lina"];
        names.sort_by(|a, b| compare(a, b));
        assert_eq!(names, vec!["Adam", "lina", "yara"]);
    }
}
