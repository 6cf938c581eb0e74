//! Studio message types for the iced/cosmic runtime.

use std::path::PathBuf;
use std::sync::Arc;

use pupstyle_generation::{GenerationError, StyleField};
use pupstyle_intake::Candidate;
use pupstyle_session::RequestId;
use pupstyle_share::{DownloadOutcome, Platform};
use pupstyle_widgets::SliderEvent;

/// Top-level message enum for the studio application.
#[derive(Debug, Clone)]
pub enum Message {
    // -- Upload --
    /// User clicked the upload area.
    PickFile,
    /// File picker closed; `None` when dismissed.
    FilePicked(Option<PathBuf>),
    /// Picked file read from disk.
    FileLoaded(Result<Candidate, String>),
    /// Dropdown selection for a style field; index 0 is "no preference".
    StyleSelected(StyleField, usize),
    /// User clicked Generate.
    Generate,
    /// Backend answered (or failed) for a request.
    GenerationFinished(RequestId, Result<String, Arc<GenerationError>>),

    // -- Example carousel --
    CarouselStep(isize),
    CarouselSelect(usize),
    CarouselTick,

    // -- Loading --
    PhraseTick,

    // -- Result --
    /// Generated image bytes fetched for display.
    ArtifactLoaded(String, Result<Vec<u8>, String>),
    /// Pointer activity on the comparison overlay.
    Slider(SliderEvent),
    ShowBefore,
    ShowAfter,
    Download,
    DownloadFinished(Result<DownloadOutcome, String>),
    Share(Platform),
    StartOver,

    // -- Toasts --
    /// Manual close of a toast.
    CloseToast(u64),
    /// Edit attempt in a copyable toast; the text stays unchanged.
    ToastTextEdited,
    /// Periodic expiry check.
    ToastTick,

    // -- System --
    /// Main window is closing.
    Teardown,
}

/// Dropdown entry that clears a style choice.
pub const NO_PREFERENCE: &str = "No preference";

/// Dropdown labels for a field: [`NO_PREFERENCE`] followed by the presets.
pub fn style_labels(field: StyleField) -> Vec<String> {
    std::iter::once(NO_PREFERENCE)
        .chain(field.options().iter().copied())
        .map(str::to_string)
        .collect()
}

/// Value to store for a dropdown index; empty clears the choice.
pub fn style_value(field: StyleField, index: usize) -> String {
    index
        .checked_sub(1)
        .and_then(|i| field.options().get(i))
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Dropdown index for the current value of a field.
pub fn style_index(field: StyleField, value: Option<&str>) -> Option<usize> {
    match value {
        None => Some(0),
        Some(v) => field.options().iter().position(|o| *o == v).map(|i| i + 1),
    }
}
