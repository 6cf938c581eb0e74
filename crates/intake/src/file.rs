//! Candidate files read from disk.

use std::path::Path;
use std::sync::Arc;

/// Fallback content type for unknown extensions.
const OCTET_STREAM: &str = "application/octet-stream";

/// Errors while reading a picked file.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file the user picked, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub content_type: String,
    pub size: u64,
    pub bytes: Arc<[u8]>,
}

impl Candidate {
    /// Builds a candidate from in-memory bytes; the size is the byte length.
    pub fn from_bytes(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        let bytes = bytes.into();
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size: bytes.len() as u64,
            bytes,
        }
    }
}

/// A candidate that passed validation and may be staged.
///
/// Only [`crate::validate`] constructs this, so holding one means the
/// file matched the policy it was checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    candidate: Candidate,
}

impl SelectedFile {
    pub(crate) fn new(candidate: Candidate) -> Self {
        Self { candidate }
    }

    pub fn name(&self) -> &str {
        &self.candidate.name
    }

    pub fn content_type(&self) -> &str {
        &self.candidate.content_type
    }

    pub fn size(&self) -> u64 {
        self.candidate.size
    }

    /// Shared handle to the file contents.
    pub fn bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.candidate.bytes)
    }
}

/// Detects the MIME type of a file from its extension (case-insensitive).
pub fn detect_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => OCTET_STREAM,
    }
}

/// Reads a picked file into a [`Candidate`].
pub async fn load_candidate(path: &Path) -> Result<Candidate, IntakeError> {
    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = detect_content_type(path);

    tracing::debug!(
        path = %path.display(),
        content_type,
        size = bytes.len(),
        "candidate loaded"
    );

    Ok(Candidate::from_bytes(name, content_type, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_content_type_known() {
        assert_eq!(detect_content_type(Path::new("dog.png")), "image/png");
        assert_eq!(detect_content_type(Path::new("dog.jpg")), "image/jpeg");
        assert_eq!(detect_content_type(Path::new("dog.jpeg")), "image/jpeg");
        assert_eq!(detect_content_type(Path::new("dog.webp")), "image/webp");
        assert_eq!(detect_content_type(Path::new("dog.gif")), "image/gif");
    }

    #[test]
    fn detect_content_type_case_insensitive() {
        assert_eq!(detect_content_type(Path::new("DOG.PNG")), "image/png");
        assert_eq!(detect_content_type(Path::new("Dog.JpEg")), "image/jpeg");
    }

    #[test]
    fn detect_content_type_unknown() {
        assert_eq!(detect_content_type(Path::new("bad.txt")), OCTET_STREAM);
        assert_eq!(detect_content_type(Path::new("noext")), OCTET_STREAM);
    }

    #[test]
    fn from_bytes_uses_length_as_size() {
        let c = Candidate::from_bytes("dog.png", "image/png", vec![0u8; 42]);
        assert_eq!(c.size, 42);
        assert_eq!(c.name, "dog.png");
    }

    #[tokio::test]
    async fn load_candidate_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("rex.JPG");
        std::fs::write(&path, b"not-really-a-jpeg").unwrap();

        let c = load_candidate(&path).await.unwrap();
        assert_eq!(c.name, "rex.JPG");
        assert_eq!(c.content_type, "image/jpeg");
        assert_eq!(c.size, 17);
        assert_eq!(&*c.bytes, b"not-really-a-jpeg");
    }

    #[tokio::test]
    async fn load_candidate_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_candidate(&tmp.path().join("gone.png")).await.unwrap_err();
        assert!(matches!(err, IntakeError::Io(_)));
    }
}
