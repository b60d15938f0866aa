//! Include/exclude filtering of option names
//!
//! A pattern is a glob where `*` matches any run of characters; every other
//! character matches itself, case-sensitively. Patterns and option names are
//! normalized from dash-case to camel-case, so `header-filter-*` and
//! `headerFilter*` behave the same.

use crate::naming::dash_to_camel;

/// Whole-string wildcard match.
pub fn matches_pattern(name: &str, pattern: &str) -> bool {
    if !pattern.contains('*') {
        return name == pattern;
    }

    let mut tokens = pattern.split('*');
    // split always yields at least one item
    let first = tokens.next().unwrap_or_default();
    let Some(mut rest) = name.strip_prefix(first) else {
        return false;
    };

    let mut tokens: Vec<&str> = tokens.collect();
    let last = tokens.pop().unwrap_or_default();

    for token in tokens.into_iter().filter(|t| !t.is_empty()) {
        match rest.find(token) {
            Some(idx) => rest = &rest[idx + token.len()..],
            None => return false,
        }
    }

    rest.len() >= last.len() && rest.ends_with(last)
}

/// Decide whether an option is eligible for autowiring.
///
/// Evaluated in order:
///
/// 1. the option name is normalized to camel-case
/// 2. an exclude matching the owner, the name or `<prefix>.<owner>.<name>`
///    rejects the option
/// 3. a non-empty include list accepts only options matched the same way
/// 4. otherwise the option is accepted
pub fn is_eligible(
    key_prefix: &str,
    owner: &str,
    property: &str,
    exclude: &[String],
    include: &[String],
) -> bool {
    let name = dash_to_camel(property);
    let qualified = format!("{key_prefix}.{owner}.{name}");

    let hits = |pattern: &str| {
        let pattern = dash_to_camel(pattern.trim());
        matches_pattern(owner, &pattern)
            || matches_pattern(&name, &pattern)
            || matches_pattern(&qualified, &pattern)
    };

    if exclude.iter().any(|p| hits(p.as_str())) {
        return false;
    }
    if !include.is_empty() {
        return include.iter().any(|p| hits(p.as_str()));
    }
    true
}

/// Name filter bound to a key prefix and a set of patterns.
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    key_prefix: String,
    exclude: Vec<String>,
    include: Vec<String>,
}

impl NameFilter {
    /// Create a filter. Blank patterns are dropped.
    pub fn new(key_prefix: impl Into<String>, exclude: &[String], include: &[String]) -> Self {
        let clean = |patterns: &[String]| -> Vec<String> {
            patterns
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect()
        };
        Self {
            key_prefix: key_prefix.into(),
            exclude: clean(exclude),
            include: clean(include),
        }
    }

    pub fn is_eligible(&self, owner: &str, property: &str) -> bool {
        is_eligible(
            &self.key_prefix,
            owner,
            property,
            &self.exclude,
            &self.include,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("fooBar", "foo*", true)]
    #[case("fooBar", "*Bar", true)]
    #[case("fooBar", "*oB*", true)]
    #[case("fooBar", "f*B*r", true)]
    #[case("fooBar", "*", true)]
    #[case("fooBar", "fooBar", true)]
    #[case("fooBar", "foo", false)]
    #[case("fooBar", "Foo*", false)]
    #[case("fooBar", "*Baz", false)]
    #[case("ab", "a*b*b", false)]
    #[case("aXbXc", "a*c", true)]
    #[case("", "*", true)]
    fn matches_pattern_cases(#[case] name: &str, #[case] pattern: &str, #[case] expected: bool) {
        assert_eq!(matches_pattern(name, pattern), expected);
    }

    #[test]
    fn overlapping_prefix_and_suffix_do_not_share_characters() {
        assert!(!matches_pattern("aba", "ab*ba"));
        assert!(matches_pattern("ababa", "ab*ba"));
    }
}
