//! Arabic text normalization.
//!
//! Every component that touches text goes through [`normalize`]: the
//! frequency index at build time, the ranker on both sides of a
//! comparison, and the engine before any prefix lookup. Two code paths
//! disagreeing on the normalized form would silently break prefix and
//! index consistency, so there is exactly one pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

/// Combining diacritic marks (tashkeel) in the two ranges used by
/// Arabic script: U+0617..U+061A and U+064B..U+0652.
static DIACRITICS: Lazy<Regex> =
    Lazy::new(|| Regex::new("[\u{0617}-\u{061A}\u{064B}-\u{0652}]").unwrap());

/// Anything that is neither a word character nor whitespace.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes a piece of Arabic (or mixed) text for matching.
///
/// Steps, in order: strip diacritics, fold the hamza-bearing alef
/// variants to bare alef, rewrite the irregular spelling التى to التي,
/// fold alef maksura to yaa and taa marbuta to haa (lossy on purpose,
/// to widen matching), drop punctuation, collapse whitespace, and
/// lowercase. Total function; never fails.
pub fn normalize(text: &str) -> String {
    let stripped = DIACRITICS.replace_all(text, "");

    let folded = stripped
        .replace(['أ', 'إ', 'آ'], "ا")
        .replace("التى", "التي")
        .replace('ى', "ي")
        .replace('ة', "ه");

    let cleaned = NON_WORD.replace_all(&folded, "");
    let collapsed = WHITESPACE.replace_all(&cleaned, " ");

    collapsed.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        // الصَّلَاةُ with shadda, fatha and damma marks
        assert_eq!(normalize("الصَّلَاةُ"), normalize("الصلاة"));
        assert_eq!(normalize("الصَّلَاةُ"), "الصلاه");
    }

    #[test]
    fn folds_alef_variants() {
        assert_eq!(normalize("أحمد"), "احمد");
        assert_eq!(normalize("إلى"), "الي");
        assert_eq!(normalize("آمن"), "امن");
    }

    #[test]
    fn rewrites_irregular_relative_pronoun() {
        assert_eq!(normalize("التى"), "التي");
    }

    #[test]
    fn folds_maksura_and_taa_marbuta() {
        assert_eq!(normalize("معنى"), "معني");
        assert_eq!(normalize("الزكاة"), "الزكاه");
    }

    #[test]
    fn drops_punctuation() {
        assert_eq!(normalize("ما هي الصلاة؟"), "ما هي الصلاه");
        assert_eq!(normalize("hello, world!"), "hello world");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  ما \t هي\n الصلاة  "), "ما هي الصلاه");
    }

    #[test]
    fn lowercases_latin() {
        assert_eq!(normalize("Salah TIME"), "salah time");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("؟!،"), "");
    }

    #[test]
    fn idempotent() {
        for text in [
            "ما معنى الصلاة؟",
            "الصَّلَاةُ وَالزَّكَاةُ",
            "أهلاً وسهلاً",
            "Mixed عربي and English!",
            "",
        ] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "not idempotent for {text:?}");
        }
    }

    #[test]
    fn invariant_to_injected_diacritics() {
        let plain = "من اركان الاسلام";
        let marked = "مِنْ أَرْكَانِ الإِسْلَامِ";
        assert_eq!(normalize(marked), normalize(plain));
    }
}
