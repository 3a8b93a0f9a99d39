//! The save-progress state machine

use serde::{Deserialize, Serialize};

/// Save progress for the profile form.
///
/// A successful save walks `Idle → Saving → Saved → Idle` with no skipped
/// states; the last two transitions fire on timers. `Error` is entered only
/// when the injected [`SaveSink`](crate::SaveSink) fails — the built-in
/// sink never does, so the state is reserved rather than routine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
	#[default]
	Idle,
	Saving,
	Saved,
	Error,
}

impl SaveStatus {
	/// Whether a save is currently in flight.
	pub fn is_saving(self) -> bool {
		matches!(self, Self::Saving)
	}
}
