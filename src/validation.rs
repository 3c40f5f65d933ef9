/// Format rules for the site name and URL fields
use crate::error::ValidationError;
use regex::Regex;
use std::sync::OnceLock;

/// 3 to 50 letters, digits, whitespace, hyphens or underscores
const SITE_NAME_PATTERN: &str = r"^[a-zA-Z0-9\s\-_]{3,50}$";

/// Optional http(s) scheme, dotted labels, alphabetic TLD, optional port and path
const SITE_URL_PATTERN: &str =
    r"^(https?://)?([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}(:[0-9]{1,5})?(/[^\s]*)?$";

fn site_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SITE_NAME_PATTERN).expect("site name pattern is valid"))
}

fn site_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SITE_URL_PATTERN).expect("site url pattern is valid"))
}

/// Check a site name against the whole-string name rule
pub fn is_valid_name(text: &str) -> bool {
    site_name_regex().is_match(text)
}

/// Check a site URL against the whole-string URL rule
///
/// The scheme is optional, so bare domains such as `example.com` pass.
pub fn is_valid_url(text: &str) -> bool {
    site_url_regex().is_match(text)
}

/// Validate both fields, reporting the most specific failure
///
/// Priority: both invalid, then name, then url.
pub fn validate(name: &str, url: &str) -> Result<(), ValidationError> {
    match (is_valid_name(name), is_valid_url(url)) {
        (false, false) => Err(ValidationError::Both),
        (false, true) => Err(ValidationError::Name),
        (true, false) => Err(ValidationError::Url),
        (true, true) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("abc"));
        assert!(is_valid_name("My Site"));
        assert!(is_valid_name("rust-lang_docs 2"));
        assert!(is_valid_name(&"a".repeat(50)));
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("ab"));
        assert!(!is_valid_name(&"a".repeat(51)));
    }

    #[test]
    fn test_name_rejects_punctuation() {
        assert!(!is_valid_name("my.site"));
        assert!(!is_valid_name("site!"));
        assert!(!is_valid_name("a/b/c"));
        assert!(!is_valid_name("<script>"));
    }

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("example.com"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://sub.example.co.uk:8080/path"));
        assert!(is_valid_url("my-site.io/a/b?q=1"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("http://"));
        assert!(!is_valid_url("localhost"));
        assert!(!is_valid_url("example.c"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("example.com:123456"));
        assert!(!is_valid_url("example.com/with space"));
    }

    #[test]
    fn test_validate_priority() {
        assert_eq!(validate("ab", "nope"), Err(ValidationError::Both));
        assert_eq!(validate("ab", "example.com"), Err(ValidationError::Name));
        assert_eq!(validate("My Site", "nope"), Err(ValidationError::Url));
        assert_eq!(validate("My Site", "example.com"), Ok(()));
    }
}
