use itertools::Itertools;

/// Distinct Latin letters occurring in `a` or `b`, case-insensitive, lowercase and in alphabetical order.
/// Everything that is not an ASCII letter is ignored.
pub fn merge_latin_letters(a: &str, b: &str) -> String {
    a.chars()
        .chain(b.chars())
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .sorted_unstable()
        .dedup()
        .collect()
}

/// Copy of `input` with every occurrence of `old` replaced by `new`.
pub fn replace_chars(input: &str, old: char, new: char) -> String {
    input
        .chars()
        .map(|c| if c == old { new } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("abc", "def_ghk", "abcdefghk"; "disjoint")]
    #[test_case("Hello", "WORLD", "dehlorw"; "mixed case")]
    #[test_case("a1b2_c!", "", "abc"; "non letters ignored")]
    #[test_case("", "", ""; "empty")]
    #[test_case("zzz", "aZ", "az"; "duplicates")]
    #[test_case("héllo", "", "hlo"; "non ascii ignored")]
    fn merge(a: &str, b: &str, expected: &str) {
        assert_eq!(merge_latin_letters(a, b), expected);
    }

    #[test_case("coconut", 'c', 'b', "bobonut"; "all occurrences")]
    #[test_case("Cc", 'c', 'b', "Cb"; "case sensitive")]
    #[test_case("xyz", 'c', 'b', "xyz"; "no occurrence")]
    #[test_case("", 'c', 'b', ""; "empty")]
    fn replace(input: &str, old: char, new: char, expected: &str) {
        let replaced = replace_chars(input, old, new);
        assert_eq!(replaced, expected);
        assert_eq!(replaced.chars().count(), input.chars().count());
    }
}
