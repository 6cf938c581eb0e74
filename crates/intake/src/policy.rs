//! Accepted types and size limit.

use std::collections::BTreeSet;

use crate::file::{Candidate, SelectedFile};

/// Default upload limit: 10 MB.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Why a candidate was refused. Only the first failing check is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("unsupported file type")]
    InvalidType,

    #[error("file too large")]
    TooLarge,
}

/// Accepted MIME types and the maximum size in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakePolicy {
    pub allowed_types: BTreeSet<String>,
    pub max_bytes: u64,
}

impl IntakePolicy {
    pub fn new<I, S>(allowed_types: I, max_bytes: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_types: allowed_types.into_iter().map(Into::into).collect(),
            max_bytes,
        }
    }

    /// Short names of the accepted formats, PNG and JPEG first.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .allowed_types
            .iter()
            .map(|mime| {
                let subtype = mime.rsplit('/').next().unwrap_or(mime);
                subtype.to_ascii_uppercase()
            })
            .collect();
        names.sort_by_key(|n| (n != "PNG", n != "JPEG", n.clone()));
        names.dedup();
        names
    }

    /// Text shown to the user for a rejection under this policy.
    pub fn message(&self, rejection: Rejection) -> String {
        match rejection {
            Rejection::InvalidType => match self.type_names().as_slice() {
                [] => "No file types are accepted.".into(),
                [only] => format!("Only {only} files are allowed."),
                [init @ .., last] => format!("Only {} and {last} files are allowed.", init.join(", ")),
            },
            Rejection::TooLarge => format!(
                "Image size must be less than {}MB.",
                self.max_bytes / (1024 * 1024)
            ),
        }
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(["image/png", "image/jpeg"], DEFAULT_MAX_BYTES)
    }
}

/// Checks a candidate against the policy. Type is checked before size.
pub fn validate(candidate: Candidate, policy: &IntakePolicy) -> Result<SelectedFile, Rejection> {
    if !policy.allowed_types.contains(&candidate.content_type) {
        return Err(Rejection::InvalidType);
    }
    if candidate.size > policy.max_bytes {
        return Err(Rejection::TooLarge);
    }
    Ok(SelectedFile::new(candidate))
}
