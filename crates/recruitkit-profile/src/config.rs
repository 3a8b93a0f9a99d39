//! Editor configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::logo::MAX_LOGO_BYTES;

/// Tunables for one editor instance. [`Default`] reproduces the shipped
/// form's behavior exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
	/// Simulated persistence latency before `Saving → Saved`.
	pub save_delay: Duration,
	/// How long the saved confirmation lingers before `Saved → Idle`.
	pub saved_reset_delay: Duration,
	/// Simulated decode latency for an accepted logo upload.
	pub logo_decode_delay: Duration,
	/// Upper bound on accepted logo uploads, in bytes.
	pub max_logo_bytes: usize,
	/// When `true`, `save()` marks every validated field touched before the
	/// full-record check, so a blocked save always shows its reasons. The
	/// default `false` matches the original form, where an untouched invalid
	/// field blocks the save without a visible message.
	pub touch_all_on_save: bool,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			save_delay: Duration::from_millis(2000),
			saved_reset_delay: Duration::from_millis(3000),
			logo_decode_delay: Duration::from_millis(1500),
			max_logo_bytes: MAX_LOGO_BYTES,
			touch_all_on_save: false,
		}
	}
}
