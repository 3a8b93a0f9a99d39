//! Per-field validation rules
//!
//! `validate_field` maps a field name and candidate value to an optional
//! [`FieldError`]. Field names the form does not recognize produce no error,
//! so callers can route every keystroke through the same entry point.

use crate::validators::{is_valid_email, is_valid_website};

/// A single field's validation failure. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{label} is required")]
	Required { label: &'static str },
	#[error("{label} must be at least {min} characters")]
	TooShort { label: &'static str, min: usize },
	#[error("{label} must be less than {max} characters")]
	TooLong { label: &'static str, max: usize },
	#[error("Please enter a valid email address")]
	InvalidEmail,
	#[error("Please enter a valid website (e.g., example.com)")]
	InvalidWebsite,
}

/// Fields checked by a full-record validation pass, in display order.
pub const VALIDATED_FIELDS: [&str; 4] = ["company_name", "email", "website", "description"];

const COMPANY_NAME_MIN: usize = 2;
const COMPANY_NAME_MAX: usize = 100;
const DESCRIPTION_MAX: usize = 500;

/// Validate a single field's candidate value.
///
/// Lengths are character counts, not byte counts, so multi-byte input
/// (CJK, emoji) is measured the way the user perceives it.
///
/// # Examples
///
/// ```
/// use recruitkit_forms::field::{FieldError, validate_field};
///
/// assert_eq!(
///     validate_field("company_name", ""),
///     Some(FieldError::Required { label: "Company name" })
/// );
/// assert_eq!(validate_field("company_name", "Acme"), None);
/// assert_eq!(validate_field("email", "not-an-email"), Some(FieldError::InvalidEmail));
/// assert_eq!(validate_field("website", ""), None);
/// assert_eq!(validate_field("favorite_color", "anything"), None);
/// ```
pub fn validate_field(field: &str, value: &str) -> Option<FieldError> {
	match field {
		"company_name" => {
			if value.trim().is_empty() {
				return Some(FieldError::Required { label: "Company name" });
			}
			let len = value.chars().count();
			if len < COMPANY_NAME_MIN {
				return Some(FieldError::TooShort {
					label: "Company name",
					min: COMPANY_NAME_MIN,
				});
			}
			if len > COMPANY_NAME_MAX {
				return Some(FieldError::TooLong {
					label: "Company name",
					max: COMPANY_NAME_MAX,
				});
			}
			None
		}
		"email" => {
			if value.trim().is_empty() {
				return Some(FieldError::Required { label: "Email" });
			}
			if !is_valid_email(value) {
				return Some(FieldError::InvalidEmail);
			}
			None
		}
		"website" => {
			// Optional field: only a non-empty value is checked.
			if !value.is_empty() && !is_valid_website(value) {
				return Some(FieldError::InvalidWebsite);
			}
			None
		}
		"description" => {
			if value.chars().count() > DESCRIPTION_MAX {
				return Some(FieldError::TooLong {
					label: "Description",
					max: DESCRIPTION_MAX,
				});
			}
			None
		}
		// Unrecognized fields are permissive.
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_company_name_required() {
		// Arrange & Act
		let empty = validate_field("company_name", "");
		let whitespace = validate_field("company_name", "   ");

		// Assert
		assert_eq!(empty, Some(FieldError::Required { label: "Company name" }));
		assert_eq!(
			whitespace,
			Some(FieldError::Required { label: "Company name" })
		);
	}

	#[rstest]
	fn test_company_name_length_bounds() {
		// Arrange
		let too_short = "A";
		let at_min = "Ab";
		let at_max = "x".repeat(100);
		let too_long = "x".repeat(101);

		// Act & Assert
		assert!(matches!(
			validate_field("company_name", too_short),
			Some(FieldError::TooShort { .. })
		));
		assert_eq!(validate_field("company_name", at_min), None);
		assert_eq!(validate_field("company_name", &at_max), None);
		assert!(matches!(
			validate_field("company_name", &too_long),
			Some(FieldError::TooLong { .. })
		));
	}

	#[rstest]
	fn test_company_name_length_uses_char_count_not_bytes() {
		// Arrange: 2 CJK characters are 6 bytes but 2 characters
		let name = "会社";

		// Act & Assert
		assert_eq!(validate_field("company_name", name), None);
	}

	#[rstest]
	#[case("", Some(FieldError::Required { label: "Email" }))]
	#[case("a@b.com", None)]
	#[case("not-an-email", Some(FieldError::InvalidEmail))]
	#[case("a b@c.com", Some(FieldError::InvalidEmail))]
	#[case("a@nodot", Some(FieldError::InvalidEmail))]
	fn test_email_rules(#[case] value: &str, #[case] expected: Option<FieldError>) {
		assert_eq!(validate_field("email", value), expected);
	}

	#[rstest]
	fn test_website_optional() {
		// Arrange & Act & Assert
		assert_eq!(validate_field("website", ""), None);
		assert_eq!(validate_field("website", "example.com"), None);
		assert_eq!(
			validate_field("website", "not a domain"),
			Some(FieldError::InvalidWebsite)
		);
	}

	#[rstest]
	fn test_description_length_boundary() {
		// Arrange
		let at_limit = "d".repeat(500);
		let over_limit = "d".repeat(501);

		// Act & Assert
		assert_eq!(validate_field("description", &at_limit), None);
		assert_eq!(
			validate_field("description", &over_limit),
			Some(FieldError::TooLong { label: "Description", max: 500 })
		);
	}

	#[rstest]
	fn test_unrecognized_field_is_permissive() {
		// Act & Assert
		assert_eq!(validate_field("twitter", "@whatever"), None);
		assert_eq!(validate_field("logo", ""), None);
	}

	#[rstest]
	fn test_messages_are_user_facing() {
		// Assert: Display output is what the form shows verbatim
		assert_eq!(
			validate_field("company_name", "").unwrap().to_string(),
			"Company name is required"
		);
		assert_eq!(
			validate_field("company_name", "A").unwrap().to_string(),
			"Company name must be at least 2 characters"
		);
		assert_eq!(
			validate_field("email", "nope").unwrap().to_string(),
			"Please enter a valid email address"
		);
		assert_eq!(
			validate_field("website", "nope").unwrap().to_string(),
			"Please enter a valid website (e.g., example.com)"
		);
	}
}
