use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Address-like token: local part, `@`, domain, dot, 2+ letter TLD.
pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// One address found in a text blob.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailMatch(String);

impl EmailMatch {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collects every address in `text`, dropping exact repeats.
///
/// Order of first appearance is kept.
pub fn extract_emails(text: &str) -> Vec<EmailMatch> {
    let mut seen = HashSet::new();
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|candidate| seen.insert(*candidate))
        .map(|candidate| EmailMatch(candidate.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::extract_emails;

    fn strings(text: &str) -> Vec<String> {
        extract_emails(text)
            .into_iter()
            .map(|m| m.into_string())
            .collect()
    }

    #[test]
    fn finds_plus_and_percent_local_parts() {
        assert_eq!(
            strings("a+tag@x.io, b%c@sub.example.org"),
            vec!["a+tag@x.io", "b%c@sub.example.org"]
        );
    }

    #[test]
    fn multi_label_domain_is_one_match() {
        assert_eq!(strings("contact@business.co.uk"), vec!["contact@business.co.uk"]);
    }

    #[test]
    fn single_letter_tld_is_rejected() {
        assert!(strings("someone@host.x").is_empty());
    }

    #[test]
    fn bare_at_sign_is_ignored() {
        assert!(strings("@ foo@ @bar.com").is_empty());
    }

    #[test]
    fn duplicates_are_case_sensitive() {
        assert_eq!(
            strings("Ann@Example.com ann@example.com Ann@Example.com"),
            vec!["Ann@Example.com", "ann@example.com"]
        );
    }
}
