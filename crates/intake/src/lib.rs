//! Upload intake for the styling flow.
//!
//! A picked file becomes a [`Candidate`] (name, detected content type,
//! size, bytes). [`validate`] checks it against an [`IntakePolicy`] and
//! returns a [`SelectedFile`] that is safe to stage, or the first
//! [`Rejection`] that applies.

pub mod file;
pub mod policy;

pub use file::{Candidate, IntakeError, SelectedFile, detect_content_type, load_candidate};
pub use policy::{IntakePolicy, Rejection, validate};
