//! The profile form controller
//!
//! [`ProfileEditor`] owns the record under edit, routes every change through
//! the validation engine, and drives the simulated-latency transitions (logo
//! decode, save progression) as tokio tasks. The tasks are keyed to the
//! editor's lifetime: dropping the editor aborts anything still in flight,
//! so a torn-down form can never be mutated by a stale timer.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use recruitkit_forms::{VALIDATED_FIELDS, ValidationState};

use crate::config::EditorConfig;
use crate::logo::{LogoError, LogoUpload, check_upload};
use crate::profile::{
	BrandingFlag, CompanyProfile, ProfileField, SocialPlatform, normalize_handle,
};
use crate::sink::{LogSink, SaveSink};
use crate::status::SaveStatus;

/// Everything the controller mutates, shared with its timer tasks.
#[derive(Debug)]
struct EditorState {
	profile: CompanyProfile,
	validation: ValidationState,
	uploading: bool,
	status: SaveStatus,
}

/// Presentation-agnostic controller for the company-profile form.
///
/// One instance per form session. All mutation goes through `&mut self`;
/// the view layer binds to the observer methods (`profile`, `save_status`,
/// `field_error`, ...) and re-reads after each event.
pub struct ProfileEditor {
	state: Arc<Mutex<EditorState>>,
	sink: Arc<dyn SaveSink>,
	config: EditorConfig,
	save_task: Option<JoinHandle<()>>,
	logo_task: Option<JoinHandle<()>>,
}

impl ProfileEditor {
	/// Open a form session over `profile` with the default log sink.
	///
	/// # Examples
	///
	/// ```
	/// use recruitkit_profile::{CompanyProfile, ProfileEditor, SaveStatus};
	///
	/// let editor = ProfileEditor::new(CompanyProfile::new("comp_123", "rec_456"));
	/// assert_eq!(editor.save_status(), SaveStatus::Idle);
	/// assert!(!editor.is_uploading());
	/// ```
	pub fn new(profile: CompanyProfile) -> Self {
		Self::with_sink(profile, Arc::new(LogSink))
	}

	/// Open a form session with an injected persistence collaborator.
	pub fn with_sink(profile: CompanyProfile, sink: Arc<dyn SaveSink>) -> Self {
		Self {
			state: Arc::new(Mutex::new(EditorState {
				profile,
				validation: ValidationState::new(),
				uploading: false,
				status: SaveStatus::Idle,
			})),
			sink,
			config: EditorConfig::default(),
			save_task: None,
			logo_task: None,
		}
	}

	/// Replace the configuration (delays, size cap, save-touch behavior).
	pub fn with_config(mut self, config: EditorConfig) -> Self {
		self.config = config;
		self
	}

	/// Apply a keystroke to a validated top-level field: store the value,
	/// recompute that field's error, and mark it touched.
	///
	/// # Examples
	///
	/// ```
	/// use recruitkit_profile::{CompanyProfile, ProfileEditor, ProfileField};
	///
	/// let mut editor = ProfileEditor::new(CompanyProfile::new("comp_123", "rec_456"));
	/// editor.update_field(ProfileField::Email, "nope");
	/// assert_eq!(
	///     editor.field_error("email").as_deref(),
	///     Some("Please enter a valid email address")
	/// );
	/// ```
	pub fn update_field(&mut self, field: ProfileField, value: impl Into<String>) {
		let value = value.into();
		let name = field.name();
		let mut state = self.state.lock();
		match field {
			ProfileField::CompanyName => state.profile.company_name = value.clone(),
			ProfileField::Email => state.profile.email = value.clone(),
			ProfileField::Website => state.profile.website = value.clone(),
			ProfileField::Description => state.profile.description = value.clone(),
		}
		state.validation.update_field_error(name, &value);
		state.validation.mark_touched(name);
	}

	/// Update one social handle, stripping a single leading `@` before
	/// storage. Sibling handles are untouched.
	///
	/// # Examples
	///
	/// ```
	/// use recruitkit_profile::{CompanyProfile, ProfileEditor, SocialPlatform};
	///
	/// let mut editor = ProfileEditor::new(CompanyProfile::new("comp_123", "rec_456"));
	/// editor.update_social(SocialPlatform::Twitter, "@sisyphusvc");
	/// assert_eq!(editor.profile().social_profiles.twitter, "sisyphusvc");
	/// ```
	pub fn update_social(&mut self, platform: SocialPlatform, value: impl Into<String>) {
		let value = value.into();
		let handle = normalize_handle(&value).to_string();
		let mut state = self.state.lock();
		match platform {
			SocialPlatform::Twitter => state.profile.social_profiles.twitter = handle.clone(),
			SocialPlatform::Facebook => state.profile.social_profiles.facebook = handle.clone(),
			SocialPlatform::LinkedIn => state.profile.social_profiles.linkedin = handle.clone(),
		}
		// Social handles have no rule of their own; this still clears any
		// stale entry and records the interaction.
		state.validation.update_field_error(platform.name(), &handle);
		state.validation.mark_touched(platform.name());
	}

	/// Flip one branding toggle, preserving its sibling.
	pub fn update_branding(&mut self, flag: BrandingFlag, checked: bool) {
		let mut state = self.state.lock();
		match flag {
			BrandingFlag::Reports => state.profile.branding.reports = checked,
			BrandingFlag::Emails => state.profile.branding.emails = checked,
		}
	}

	/// Offer a candidate logo.
	///
	/// Rejected uploads (wrong media kind, over the size cap) set the logo
	/// field's error and leave the stored logo untouched. Accepted uploads
	/// clear that error, enter the uploading state, and resolve after the
	/// configured decode delay by storing an embeddable data-URL reference.
	/// A new attach supersedes an in-flight decode.
	pub fn attach_logo(&mut self, upload: LogoUpload) -> Result<(), LogoError> {
		{
			let mut state = self.state.lock();
			// Attaching counts as interacting with the logo field either way.
			state.validation.mark_touched("logo");
			if let Err(error) = check_upload(&upload, self.config.max_logo_bytes) {
				state.validation.set_error("logo", error.to_string());
				return Err(error);
			}
			state.validation.clear_error("logo");
			state.uploading = true;
		}

		if let Some(task) = self.logo_task.take() {
			task.abort();
		}
		let shared = Arc::clone(&self.state);
		let delay = self.config.logo_decode_delay;
		self.logo_task = Some(tokio::spawn(async move {
			tokio::time::sleep(delay).await;
			let data_url = upload.to_data_url();
			let mut state = shared.lock();
			state.profile.logo = Some(data_url);
			state.uploading = false;
		}));
		Ok(())
	}

	/// Remove the stored logo. Synchronous and unconditional; an in-flight
	/// decode is not interrupted, matching the original form.
	pub fn remove_logo(&mut self) {
		self.state.lock().profile.logo = None;
	}

	/// Attempt a save. Returns `true` if a save was started.
	///
	/// A request while a save is already in flight is ignored. Otherwise the
	/// whole record is re-validated; on failure the status stays untouched
	/// and the per-field errors carry the reasons (visible per the touched
	/// rules). On success the status walks `Saving → Saved → Idle`, with the
	/// sink called between the two timed transitions; a sink failure parks
	/// the form in [`SaveStatus::Error`], from which a new save may be
	/// attempted.
	pub fn save(&mut self) -> bool {
		let record = {
			let mut state = self.state.lock();
			if state.status.is_saving() {
				tracing::debug!("Save request ignored; a save is already in flight");
				return false;
			}
			if self.config.touch_all_on_save {
				for field in VALIDATED_FIELDS {
					state.validation.mark_touched(field);
				}
			}
			let EditorState {
				profile, validation, ..
			} = &mut *state;
			if !validation.validate_all(|field| profile.field_value(field)) {
				return false;
			}
			state.status = SaveStatus::Saving;
			state.profile.clone()
		};

		// A save started from the saved-confirmation window supersedes the
		// pending reset timer.
		if let Some(task) = self.save_task.take() {
			task.abort();
		}

		let shared = Arc::clone(&self.state);
		let sink = Arc::clone(&self.sink);
		let save_delay = self.config.save_delay;
		let reset_delay = self.config.saved_reset_delay;
		self.save_task = Some(tokio::spawn(async move {
			tokio::time::sleep(save_delay).await;
			match sink.save(&record).await {
				Ok(()) => {
					shared.lock().status = SaveStatus::Saved;
				}
				Err(error) => {
					tracing::error!(error = %error, "Profile save failed");
					shared.lock().status = SaveStatus::Error;
					return;
				}
			}
			tokio::time::sleep(reset_delay).await;
			let mut state = shared.lock();
			if state.status == SaveStatus::Saved {
				state.status = SaveStatus::Idle;
			}
		}));
		true
	}

	/// Discard intent. The record itself is left alone; navigation away is
	/// the view layer's concern.
	pub fn cancel(&self) {
		tracing::info!("Cancelled changes");
	}

	/// A snapshot of the record under edit.
	pub fn profile(&self) -> CompanyProfile {
		self.state.lock().profile.clone()
	}

	pub fn save_status(&self) -> SaveStatus {
		self.state.lock().status
	}

	pub fn is_uploading(&self) -> bool {
		self.state.lock().uploading
	}

	/// The error to display for a field, gated on touched state.
	pub fn field_error(&self, field: &str) -> Option<String> {
		self.state
			.lock()
			.validation
			.field_error(field)
			.map(str::to_string)
	}

	/// Whether the valid-indicator should show for a field.
	pub fn is_field_valid(&self, field: ProfileField) -> bool {
		let state = self.state.lock();
		let value = state.profile.field_value(field.name());
		state.validation.is_field_valid(field.name(), value)
	}
}

impl Drop for ProfileEditor {
	fn drop(&mut self) {
		// Timer tasks hold a clone of the shared state; abort them so a
		// torn-down form cannot be mutated after the fact.
		if let Some(task) = self.save_task.take() {
			task.abort();
		}
		if let Some(task) = self.logo_task.take() {
			task.abort();
		}
	}
}
