//! Typo-tolerant answer matching.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Allowed edit distance by normalized answer length, as
/// `(max_length, tolerance)` pairs. Longer answers allow [`LONG_TOLERANCE`].
const TOLERANCE_TABLE: &[(usize, usize)] = &[(3, 0), (7, 1)];
const LONG_TOLERANCE: usize = 2;

/// Check a typed answer against the expected text.
///
/// The expected text may list comma-separated alternatives; matching the
/// whole text or any one alternative is enough.
pub fn matches(expected: &str, given: &str) -> bool {
    let given = normalize(given);

    std::iter::once(expected)
        .chain(expected.split(',').filter(|_| expected.contains(',')))
        .map(normalize)
        .enumerate()
        .filter(|(idx, alt)| *idx == 0 || !alt.is_empty())
        .any(|(_, alt)| within_tolerance(&alt, &given))
}

fn within_tolerance(expected: &str, given: &str) -> bool {
    if expected == given {
        return true;
    }
    levenshtein_distance(expected, given) <= tolerance(expected.chars().count())
}

/// Edits tolerated for an expected answer of `len` characters.
pub fn tolerance(len: usize) -> usize {
    TOLERANCE_TABLE
        .iter()
        .find(|(max_len, _)| len <= *max_len)
        .map(|(_, tol)| *tol)
        .unwrap_or(LONG_TOLERANCE)
}

/// Trim, lowercase, strip diacritics and collapse whitespace.
pub fn normalize(s: &str) -> String {
    let folded: String = s
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn edit_distances() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
        assert_eq!(levenshtein_distance("chat", "chatt"), 1);
    }

    #[test]
    fn tolerance_grows_with_length() {
        assert_eq!(tolerance(0), 0);
        assert_eq!(tolerance(3), 0);
        assert_eq!(tolerance(4), 1);
        assert_eq!(tolerance(7), 1);
        assert_eq!(tolerance(8), 2);
        assert_eq!(tolerance(40), 2);
    }

    #[test]
    fn normalization_folds_case_space_and_accents() {
        assert_eq!(normalize("  Le   Chat\tNoir "), "le chat noir");
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("ÉLÈVE"), "eleve");
    }

    #[test]
    fn exact_and_case_insensitive() {
        assert!(matches("chat", "chat"));
        assert!(matches("Chat", "  CHAT "));
        assert!(matches("pomme de terre", "pomme  de terre"));
    }

    #[test]
    fn one_typo_in_short_word() {
        assert!(matches("chat", "chatt"));
        assert!(matches("chat", "cht"));
        assert!(!matches("chat", "dog"));
    }

    #[test]
    fn very_short_words_need_exact_match() {
        assert!(!matches("cat", "cut"));
        assert!(matches("cat", "CAT"));
    }

    #[test]
    fn long_words_allow_two_typos() {
        assert!(matches("bibliothèque", "biblioteque"));
        assert!(matches("bibliothèque", "bibliotequ"));
        assert!(!matches("bibliothèque", "biblio"));
    }

    #[test]
    fn accents_are_optional() {
        assert!(matches("été", "ete"));
        assert!(matches("ete", "été"));
    }

    #[test]
    fn empty_answer() {
        assert!(!matches("chat", ""));
        assert!(!matches("a", ""));
        assert!(matches("", ""));
        assert!(matches("", "   "));
    }

    #[test]
    fn comma_alternatives() {
        assert!(matches("chat, minou", "minou"));
        assert!(matches("chat, minou", "chat"));
        assert!(matches("chat, minou", "chat, minou"));
        assert!(!matches("chat, minou", "chien"));
        assert!(!matches("chat,", ""));
    }

    proptest! {
        #[test]
        fn reflexive(s in "[a-zA-Zéè ]{1,20}") {
            prop_assert!(matches(&s, &s));
        }

        #[test]
        fn distance_is_symmetric(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
            prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        }

        #[test]
        fn closer_answers_stay_accepted(
            expected in "[ab]{1,9}",
            far in "[ab]{0,10}",
            near in "[ab]{0,10}",
        ) {
            let far_distance = levenshtein_distance(&expected, &far);
            let near_distance = levenshtein_distance(&expected, &near);
            if near_distance <= far_distance && matches(&expected, &far) {
                prop_assert!(matches(&expected, &near));
            }
        }
    }
}
