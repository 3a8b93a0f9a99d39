//! The company profile record under edit

use serde::{Deserialize, Serialize};

/// Branding placement flags: where the company logo should appear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
	pub reports: bool,
	pub emails: bool,
}

/// Social handles for the three supported platforms. Values never begin
/// with `@`; one leading `@` is stripped before storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProfiles {
	pub twitter: String,
	pub facebook: String,
	pub linkedin: String,
}

/// The single company-profile entity being edited in memory.
///
/// Created with seed values when the form opens, mutated field-by-field on
/// every keystroke, and discarded on navigation away. `logo` holds an
/// embeddable data-URL reference once an upload has been decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
	pub id: String,
	pub recruiter_id: String,
	pub company_name: String,
	pub website: String,
	pub email: String,
	pub logo: Option<String>,
	pub description: String,
	pub branding: Branding,
	pub social_profiles: SocialProfiles,
}

impl CompanyProfile {
	/// Create an empty record for the given company and owner.
	///
	/// # Examples
	///
	/// ```
	/// use recruitkit_profile::CompanyProfile;
	///
	/// let profile = CompanyProfile::new("comp_123", "rec_456");
	/// assert_eq!(profile.id, "comp_123");
	/// assert!(profile.company_name.is_empty());
	/// assert!(profile.logo.is_none());
	/// ```
	pub fn new(id: impl Into<String>, recruiter_id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			recruiter_id: recruiter_id.into(),
			company_name: String::new(),
			website: String::new(),
			email: String::new(),
			logo: None,
			description: String::new(),
			branding: Branding::default(),
			social_profiles: SocialProfiles::default(),
		}
	}

	/// Look up a validated field's current value by name. Used by the
	/// full-record validation pass; unknown names read as empty.
	pub fn field_value(&self, field: &str) -> &str {
		match field {
			"company_name" => &self.company_name,
			"email" => &self.email,
			"website" => &self.website,
			"description" => &self.description,
			_ => "",
		}
	}
}

/// The validated top-level string fields of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
	CompanyName,
	Email,
	Website,
	Description,
}

impl ProfileField {
	/// The wire/display name shared with the validation engine.
	///
	/// # Examples
	///
	/// ```
	/// use recruitkit_profile::ProfileField;
	///
	/// assert_eq!(ProfileField::CompanyName.name(), "company_name");
	/// ```
	pub fn name(self) -> &'static str {
		match self {
			Self::CompanyName => "company_name",
			Self::Email => "email",
			Self::Website => "website",
			Self::Description => "description",
		}
	}
}

/// The fixed set of social platforms on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
	Twitter,
	Facebook,
	LinkedIn,
}

impl SocialPlatform {
	pub fn name(self) -> &'static str {
		match self {
			Self::Twitter => "twitter",
			Self::Facebook => "facebook",
			Self::LinkedIn => "linkedin",
		}
	}
}

/// The two independent branding toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandingFlag {
	Reports,
	Emails,
}

/// Strip one leading `@` from a social handle. Idempotent: a handle
/// without the prefix passes through unchanged.
///
/// # Examples
///
/// ```
/// use recruitkit_profile::profile::normalize_handle;
///
/// assert_eq!(normalize_handle("@sisyphusvc"), "sisyphusvc");
/// assert_eq!(normalize_handle("sisyphusvc"), "sisyphusvc");
/// assert_eq!(normalize_handle("@@double"), "@double");
/// ```
pub fn normalize_handle(value: &str) -> &str {
	value.strip_prefix('@').unwrap_or(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_field_value_lookup() {
		// Arrange
		let mut profile = CompanyProfile::new("comp_123", "rec_456");
		profile.company_name = "Acme".to_string();
		profile.email = "a@b.com".to_string();

		// Act & Assert
		assert_eq!(profile.field_value("company_name"), "Acme");
		assert_eq!(profile.field_value("email"), "a@b.com");
		assert_eq!(profile.field_value("website"), "");
		assert_eq!(profile.field_value("nonsense"), "");
	}

	#[rstest]
	#[case("@handle", "handle")]
	#[case("handle", "handle")]
	#[case("", "")]
	#[case("@", "")]
	fn test_normalize_handle(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(normalize_handle(input), expected);
	}

	#[rstest]
	fn test_serde_shape_matches_the_wire_format() {
		// Arrange
		let mut profile = CompanyProfile::new("comp_123", "rec_456");
		profile.branding.reports = true;
		profile.social_profiles.twitter = "sisyphusvc".to_string();

		// Act
		let json = serde_json::to_value(&profile).expect("profile serializes");

		// Assert
		assert_eq!(json["id"], "comp_123");
		assert_eq!(json["recruiter_id"], "rec_456");
		assert_eq!(json["logo"], serde_json::Value::Null);
		assert_eq!(json["branding"]["reports"], true);
		assert_eq!(json["social_profiles"]["twitter"], "sisyphusvc");
	}
}
