//! Conversions between camel-case and dash-case option names

/// Convert `dash-case` to `camelCase`; names without dashes are unchanged.
pub fn dash_to_camel(text: &str) -> String {
    if !text.contains('-') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut upper_next = false;
    for c in text.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert `camelCase` to `dash-case`.
///
/// A dash goes before an upper-case letter that follows a non-upper-case one,
/// or that starts a new word after an acronym (`useSSLContext` ->
/// `use-ssl-context`). Underscores become dashes.
pub fn camel_to_dash(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        if c == '-' || c == '_' {
            out.push('-');
            continue;
        }
        if c.is_uppercase() {
            if let Some(p) = prev {
                let word_start =
                    !p.is_uppercase() || next.is_some_and(|n| n.is_lowercase());
                if word_start && p != '-' && p != '_' {
                    out.push('-');
                }
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("header-filter-strategy", "headerFilterStrategy")]
    #[case("headerFilterStrategy", "headerFilterStrategy")]
    #[case("foo-*", "foo*")]
    #[case("a--b", "aB")]
    fn dash_to_camel_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(dash_to_camel(input), expected);
    }

    #[rstest]
    #[case("headerFilterStrategy", "header-filter-strategy")]
    #[case("useSSLContext", "use-ssl-context")]
    #[case("sslContextParameters", "ssl-context-parameters")]
    #[case("URL", "url")]
    #[case("brokers", "brokers")]
    #[case("max_poll", "max-poll")]
    fn camel_to_dash_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(camel_to_dash(input), expected);
    }

    proptest! {
        #[test]
        fn lower_camel_words_round_trip(words in prop::collection::vec("[a-z]{2,6}", 1..5)) {
            let dashed = words.join("-");
            let camel = dash_to_camel(&dashed);
            prop_assert_eq!(camel_to_dash(&camel), dashed);
        }
    }
}
