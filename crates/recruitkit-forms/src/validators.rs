//! Regex predicates shared by the field rules

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld` with no embedded whitespace and at least one dot in
/// the domain. Deliberately loose; deliverability is not checked here.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Bare domain: alphanumeric/hyphen label, a dot, and a 2+ letter TLD.
/// No scheme, no path — the form shows the field next to a `https://` affix.
static WEBSITE_RE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]*\.[a-zA-Z]{2,}$")
		.expect("website pattern is valid")
});

/// Check whether `value` has the `local@domain.tld` shape.
///
/// # Examples
///
/// ```
/// use recruitkit_forms::validators::is_valid_email;
///
/// assert!(is_valid_email("contact@sisyphusventures.com"));
/// assert!(!is_valid_email("not-an-email"));
/// assert!(!is_valid_email("space in@local.part"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
	EMAIL_RE.is_match(value)
}

/// Check whether `value` is a bare domain such as `example.com`.
///
/// # Examples
///
/// ```
/// use recruitkit_forms::validators::is_valid_website;
///
/// assert!(is_valid_website("example.com"));
/// assert!(is_valid_website("untitledui.com"));
/// assert!(!is_valid_website("not a domain"));
/// assert!(!is_valid_website("https://example.com"));
/// ```
pub fn is_valid_website(value: &str) -> bool {
	WEBSITE_RE.is_match(value)
}
