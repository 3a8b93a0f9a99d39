//! Form validation for the company profile editor
//!
//! This crate is the headless validation engine behind the profile form:
//! - Per-field rules mapping a field name and candidate value to an optional
//!   user-facing error message
//! - Session bookkeeping for error and touched state, with the display
//!   contract (errors surface only after interaction) the view layer
//!   consumes
//!
//! The controller side (record mutation, logo intake, save state machine)
//! lives in `recruitkit-profile`.

pub mod field;
pub mod state;
pub mod validators;

pub use field::{FieldError, VALIDATED_FIELDS, validate_field};
pub use state::ValidationState;
