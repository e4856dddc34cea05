//! Lower-cased text matching primitives shared by every criterion scorer.

use regex::Regex;

/// Produce the lower-cased copy all scorers match against. Case-insensitivity
/// is mandatory for every keyword and pattern comparison in the engine.
pub(crate) fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// A compiled set of patterns evaluated against normalized text.
///
/// Patterns that fail to compile are skipped rather than aborting catalog
/// construction; the rubric tables are literals, so a miss here is a typo in
/// one pattern, not a reason to take the whole engine down.
#[derive(Debug)]
pub(crate) struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    pub(crate) fn compile(patterns: &[&str]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect();
        Self { patterns }
    }

    /// How many of the patterns occur at least once. This gauges how many of
    /// the listed concepts are present, not their total frequency.
    pub(crate) fn count_present(&self, text: &str) -> usize {
        self.patterns
            .iter()
            .filter(|pattern| pattern.is_match(text))
            .count()
    }

    /// Presence test for criteria with binary semantics.
    pub(crate) fn matches_any(&self, text: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_present_counts_patterns_not_occurrences() {
        let set = PatternSet::compile(&[r"\btema\b", r"\bparadigma\b"]);
        assert_eq!(set.count_present("tema tema tema"), 1);
        assert_eq!(set.count_present("el tema y el paradigma"), 2);
        assert_eq!(set.count_present("nada relevante"), 0);
    }

    #[test]
    fn matches_any_is_a_presence_test() {
        let set = PatternSet::compile(&[r"\bhip[oó]tesis\b"]);
        assert!(set.matches_any("la hipótesis del estudio"));
        assert!(set.matches_any("la hipotesis del estudio"));
        assert!(!set.matches_any("sin conjeturas"));
    }

    #[test]
    fn invalid_patterns_are_skipped() {
        let set = PatternSet::compile(&[r"\btema\b", r"(["]);
        assert!(set.matches_any("el tema"));
        assert_eq!(set.count_present("el tema"), 1);
    }
}
