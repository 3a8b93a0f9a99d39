//! Logo intake: the file-picker contract and acceptance rules

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Hard cap on accepted logo uploads: 5 MiB.
pub const MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;

/// A candidate logo as handed over by the file picker or drag-drop target:
/// an opaque blob with its declared media type. Only the media-type prefix
/// and the byte length are inspected before acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoUpload {
	pub content_type: String,
	pub bytes: Vec<u8>,
}

impl LogoUpload {
	pub fn new(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
		Self {
			content_type: content_type.into(),
			bytes,
		}
	}

	/// Whether the declared media type is an image type at all.
	pub fn is_image(&self) -> bool {
		self.content_type.starts_with("image/")
	}

	/// Encode the blob as an embeddable `data:` URL.
	///
	/// # Examples
	///
	/// ```
	/// use recruitkit_profile::logo::LogoUpload;
	///
	/// let upload = LogoUpload::new("image/png", vec![0x89, 0x50]);
	/// assert!(upload.to_data_url().starts_with("data:image/png;base64,"));
	/// ```
	pub fn to_data_url(&self) -> String {
		format!(
			"data:{};base64,{}",
			self.content_type,
			STANDARD.encode(&self.bytes)
		)
	}
}

/// Why a candidate logo was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LogoError {
	#[error("Please select an image file")]
	NotAnImage,
	#[error("Image size must be less than 5MB")]
	TooLarge,
}

/// Acceptance check run before any state changes: media-type prefix first,
/// then byte size against `max_bytes`.
pub fn check_upload(upload: &LogoUpload, max_bytes: usize) -> Result<(), LogoError> {
	if !upload.is_image() {
		return Err(LogoError::NotAnImage);
	}
	if upload.bytes.len() > max_bytes {
		return Err(LogoError::TooLarge);
	}
	Ok(())
}
