//! Company profile editing controller
//!
//! The headless core of the company-profile form:
//! - The [`CompanyProfile`] record and its typed field keys
//! - [`ProfileEditor`], which routes field updates through the validation
//!   engine (`recruitkit-forms`), handles logo intake, and drives the save
//!   state machine over simulated latencies
//! - The [`SaveSink`] seam where a real persistence client plugs in
//!
//! Everything here is presentation-agnostic: bind a view layer to the
//! editor's update operations and observers.

pub mod config;
pub mod editor;
pub mod logo;
pub mod profile;
pub mod sink;
pub mod status;

pub use config::EditorConfig;
pub use editor::ProfileEditor;
pub use logo::{LogoError, LogoUpload, MAX_LOGO_BYTES};
pub use profile::{
	Branding, BrandingFlag, CompanyProfile, ProfileField, SocialPlatform, SocialProfiles,
};
pub use sink::{LogSink, SaveSink};
pub use status::SaveStatus;
