//! Client for the styling backend.
//!
//! Uploads the staged photo plus style choices to `POST /api/generate`
//! and returns the URL of the generated image.

pub mod client;
pub mod types;

pub use client::{Client, GenerationError};
pub use types::{CLOTHING, SCENARIOS, StyleField, StyleOptions};
