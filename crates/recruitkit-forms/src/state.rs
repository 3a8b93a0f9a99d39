//! Error and touched-state bookkeeping
//!
//! [`ValidationState`] tracks two maps across a form session: field name to
//! error message, and the set of fields the user has interacted with. Error
//! visibility is gated on touched state so a pristine form never opens
//! covered in red.

use std::collections::{HashMap, HashSet};

use crate::field::{VALIDATED_FIELDS, validate_field};

/// Per-session validation bookkeeping for one form.
#[derive(Debug, Default, Clone)]
pub struct ValidationState {
	/// Field name → user-facing message. Absent key means no error.
	errors: HashMap<String, String>,
	/// Fields interacted with this session. Monotone: never revoked.
	touched: HashSet<String>,
}

impl ValidationState {
	/// Create empty bookkeeping for a fresh form session.
	///
	/// # Examples
	///
	/// ```
	/// use recruitkit_forms::ValidationState;
	///
	/// let state = ValidationState::new();
	/// assert!(state.field_error("email").is_none());
	/// assert!(!state.is_touched("email"));
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Recompute a single field's error and merge it into the map.
	///
	/// Other fields' entries are left alone; a clean result removes only
	/// this field's key.
	///
	/// # Examples
	///
	/// ```
	/// use recruitkit_forms::ValidationState;
	///
	/// let mut state = ValidationState::new();
	/// state.update_field_error("email", "nope");
	/// assert!(state.error_message("email").is_some());
	///
	/// state.update_field_error("email", "a@b.com");
	/// assert!(state.error_message("email").is_none());
	/// ```
	pub fn update_field_error(&mut self, field: &str, value: &str) {
		match validate_field(field, value) {
			Some(error) => {
				self.errors.insert(field.to_string(), error.to_string());
			}
			None => {
				self.errors.remove(field);
			}
		}
	}

	/// Mark a field as interacted with. Idempotent.
	///
	/// # Examples
	///
	/// ```
	/// use recruitkit_forms::ValidationState;
	///
	/// let mut state = ValidationState::new();
	/// state.mark_touched("email");
	/// state.mark_touched("email");
	/// assert_eq!(state.touched_count(), 1);
	/// ```
	pub fn mark_touched(&mut self, field: &str) {
		self.touched.insert(field.to_string());
	}

	/// Validate the whole record and replace the error map with the result.
	///
	/// Applies the per-field rules to the fixed [`VALIDATED_FIELDS`] list,
	/// pulling current values through `lookup`. Entries for any other field
	/// (e.g. a logo intake error) are cleared as a side effect. Touched
	/// state is neither consulted nor changed.
	///
	/// Returns `true` iff no field produced a message.
	///
	/// # Examples
	///
	/// ```
	/// use recruitkit_forms::ValidationState;
	///
	/// let mut state = ValidationState::new();
	/// let clean = state.validate_all(|field| match field {
	///     "company_name" => "Acme",
	///     "email" => "a@b.com",
	///     _ => "",
	/// });
	/// assert!(clean);
	/// ```
	pub fn validate_all<'a>(&mut self, lookup: impl Fn(&str) -> &'a str) -> bool {
		let mut fresh = HashMap::new();
		for field in VALIDATED_FIELDS {
			if let Some(error) = validate_field(field, lookup(field)) {
				fresh.insert(field.to_string(), error.to_string());
			}
		}
		let clean = fresh.is_empty();
		self.errors = fresh;
		clean
	}

	/// Record an out-of-band error for a field the rules don't cover
	/// (logo intake rejections).
	pub fn set_error(&mut self, field: &str, message: impl Into<String>) {
		self.errors.insert(field.to_string(), message.into());
	}

	/// Drop a field's error unconditionally.
	pub fn clear_error(&mut self, field: &str) {
		self.errors.remove(field);
	}

	/// The error to display: present only once the field has been touched.
	///
	/// # Examples
	///
	/// ```
	/// use recruitkit_forms::ValidationState;
	///
	/// let mut state = ValidationState::new();
	/// state.update_field_error("email", "nope");
	///
	/// // Error exists but the field was never interacted with.
	/// assert!(state.field_error("email").is_none());
	///
	/// state.mark_touched("email");
	/// assert_eq!(state.field_error("email"), Some("Please enter a valid email address"));
	/// ```
	pub fn field_error(&self, field: &str) -> Option<&str> {
		if !self.is_touched(field) {
			return None;
		}
		self.error_message(field)
	}

	/// The computed error regardless of touched state.
	pub fn error_message(&self, field: &str) -> Option<&str> {
		self.errors.get(field).map(String::as_str)
	}

	/// Whether the valid-indicator should show: touched, clean, and the
	/// current value is non-empty.
	///
	/// # Examples
	///
	/// ```
	/// use recruitkit_forms::ValidationState;
	///
	/// let mut state = ValidationState::new();
	/// assert!(!state.is_field_valid("email", "a@b.com"));
	///
	/// state.mark_touched("email");
	/// state.update_field_error("email", "a@b.com");
	/// assert!(state.is_field_valid("email", "a@b.com"));
	/// assert!(!state.is_field_valid("email", ""));
	/// ```
	pub fn is_field_valid(&self, field: &str, value: &str) -> bool {
		self.is_touched(field) && self.error_message(field).is_none() && !value.is_empty()
	}

	pub fn is_touched(&self, field: &str) -> bool {
		self.touched.contains(field)
	}

	pub fn touched_count(&self) -> usize {
		self.touched.len()
	}

	/// Number of fields currently carrying an error.
	pub fn error_count(&self) -> usize {
		self.errors.len()
	}
}
