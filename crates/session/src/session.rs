//! Upload → Loading → Result reducer.

use std::sync::Arc;

use pupstyle_comparison::Split;
use pupstyle_generation::{GenerationError, StyleField, StyleOptions};
use pupstyle_intake::{Candidate, IntakePolicy, Rejection, SelectedFile, validate};

use crate::toast::ToastKind;

/// Title of the notice shown when a generation fails.
const GENERATION_FAILED: &str = "Generation failed";

/// Body of that notice when the server gave no message.
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Title of the notice shown when a picked file is rejected.
const FILE_REJECTED: &str = "File not accepted";

/// Which view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Upload,
    Loading,
    Result,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Loading => "Loading",
            Self::Result => "Result",
        }
    }
}

/// Identifies a local preview handle owned by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(pub u64);

/// Identifies one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

/// Inputs to the reducer.
#[derive(Debug, Clone)]
pub enum Event {
    /// The user picked a file; it is validated before staging.
    FileChosen(Candidate),
    /// The picked file could not be read.
    FileUnreadable(String),
    /// Sets a style choice; an empty value clears it.
    SetStyle(StyleField, String),
    Generate,
    GenerationFinished {
        request: RequestId,
        result: Result<String, Arc<GenerationError>>,
    },
    SplitChanged(Split),
    ShowBefore,
    ShowAfter,
    StartOver,
}

/// Side effects the app must perform, in order.
#[derive(Debug, Clone)]
pub enum Effect {
    CreatePreview { id: PreviewId, file: SelectedFile },
    ReleasePreview(PreviewId),
    RequestGeneration {
        request: RequestId,
        file: SelectedFile,
        style: StyleOptions,
    },
    /// Stop any slider drag and release pointer capture.
    EndDrag,
    Notify {
        kind: ToastKind,
        title: String,
        message: Option<String>,
    },
}

/// The single mutable unit of client state.
///
/// Only [`Session::handle`] and [`Session::teardown`] mutate it; both
/// return the effects the caller must run.
#[derive(Debug)]
pub struct Session {
    policy: IntakePolicy,
    phase: Phase,
    selected: Option<SelectedFile>,
    preview: Option<PreviewId>,
    artifact_url: Option<String>,
    style: StyleOptions,
    split: Split,
    in_flight: Option<RequestId>,
    next_preview: u64,
    next_request: u64,
}

impl Session {
    pub fn new(policy: IntakePolicy) -> Self {
        Self {
            policy,
            phase: Phase::Upload,
            selected: None,
            preview: None,
            artifact_url: None,
            style: StyleOptions::new(),
            split: Split::CENTER,
            in_flight: None,
            next_preview: 0,
            next_request: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<PreviewId> {
        self.preview
    }

    pub fn artifact_url(&self) -> Option<&str> {
        self.artifact_url.as_deref()
    }

    pub fn style(&self) -> &StyleOptions {
        &self.style
    }

    pub fn split(&self) -> Split {
        self.split
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Applies one event and returns the effects to run.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::FileChosen(candidate) => self.choose_file(candidate),
            Event::FileUnreadable(reason) => {
                if self.phase != Phase::Upload {
                    return Vec::new();
                }
                tracing::warn!(reason = %reason, "picked file could not be read");
                vec![Effect::Notify {
                    kind: ToastKind::Error,
                    title: FILE_REJECTED.into(),
                    message: Some(reason),
                }]
            }
            Event::SetStyle(field, value) => {
                if self.phase == Phase::Upload {
                    self.style.set(field, value);
                }
                Vec::new()
            }
            Event::Generate => self.generate(),
            Event::GenerationFinished { request, result } => self.finish(request, result),
            Event::SplitChanged(split) => {
                if self.phase == Phase::Result {
                    self.split = split;
                }
                Vec::new()
            }
            Event::ShowBefore => self.set_split(Split::BEFORE),
            Event::ShowAfter => self.set_split(Split::AFTER),
            Event::StartOver => {
                if self.phase != Phase::Result {
                    return Vec::new();
                }
                self.phase = Phase::Upload;
                self.artifact_url = None;
                self.split = Split::CENTER;
                tracing::info!("starting over");
                vec![Effect::EndDrag]
            }
        }
    }

    /// Releases the live preview and invalidates any in-flight request.
    pub fn teardown(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::EndDrag];
        if let Some(id) = self.preview.take() {
            effects.push(Effect::ReleasePreview(id));
        }
        if let Some(request) = self.in_flight.take() {
            tracing::debug!(request = request.0, "dropping in-flight generation");
        }
        effects
    }

    fn choose_file(&mut self, candidate: Candidate) -> Vec<Effect> {
        if self.phase != Phase::Upload {
            tracing::debug!(phase = self.phase.label(), "ignoring file choice");
            return Vec::new();
        }

        let name = candidate.name.clone();
        match validate(candidate, &self.policy) {
            Ok(file) => {
                tracing::info!(name = %name, size = file.size(), "file staged");
                let mut effects = Vec::with_capacity(2);
                if let Some(old) = self.preview.take() {
                    effects.push(Effect::ReleasePreview(old));
                }
                let id = PreviewId(self.next_preview);
                self.next_preview += 1;
                self.preview = Some(id);
                self.selected = Some(file.clone());
                effects.push(Effect::CreatePreview { id, file });
                effects
            }
            Err(rejection) => {
                tracing::info!(name = %name, ?rejection, "file rejected");
                vec![self.rejection_notice(rejection)]
            }
        }
    }

    fn rejection_notice(&self, rejection: Rejection) -> Effect {
        Effect::Notify {
            kind: ToastKind::Error,
            title: FILE_REJECTED.into(),
            message: Some(self.policy.message(rejection)),
        }
    }

    fn generate(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Upload {
            return Vec::new();
        }
        let Some(file) = self.selected.clone() else {
            return Vec::new();
        };

        let request = RequestId(self.next_request);
        self.next_request += 1;
        self.in_flight = Some(request);
        self.phase = Phase::Loading;
        tracing::info!(request = request.0, file = %file.name(), "generation requested");

        vec![Effect::RequestGeneration {
            request,
            file,
            style: self.style.clone(),
        }]
    }

    fn finish(
        &mut self,
        request: RequestId,
        result: Result<String, Arc<GenerationError>>,
    ) -> Vec<Effect> {
        if self.phase != Phase::Loading || self.in_flight != Some(request) {
            tracing::debug!(request = request.0, "dropping stale generation result");
            return Vec::new();
        }
        self.in_flight = None;

        match result {
            Ok(url) => {
                tracing::info!(request = request.0, url = %url, "generation finished");
                self.artifact_url = Some(url);
                self.split = Split::CENTER;
                self.phase = Phase::Result;
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(request = request.0, error = %e, "generation failed");
                self.phase = Phase::Upload;
                let message = e
                    .server_message()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(GENERIC_FAILURE)
                    .to_string();
                vec![Effect::Notify {
                    kind: ToastKind::Error,
                    title: GENERATION_FAILED.into(),
                    message: Some(message),
                }]
            }
        }
    }

    fn set_split(&mut self, split: Split) -> Vec<Effect> {
        if self.phase == Phase::Result {
            self.split = split;
            vec![Effect::EndDrag]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: usize = 1024 * 1024;

    fn png(name: &str, len: usize) -> Candidate {
        Candidate::from_bytes(name, "image/png", vec![0u8; len])
    }

    fn request_of(effects: &[Effect]) -> RequestId {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::RequestGeneration { request, .. } => Some(*request),
                _ => None,
            })
            .expect("expected a generation request")
    }

    fn notice_of(effects: &[Effect]) -> Option<(ToastKind, &str, Option<&str>)> {
        effects.iter().find_map(|e| match e {
            Effect::Notify {
                kind,
                title,
                message,
            } => Some((*kind, title.as_str(), message.as_deref())),
            _ => None,
        })
    }

    /// Session in Loading with dog.png staged.
    fn loading() -> (Session, RequestId) {
        let mut s = Session::new(IntakePolicy::default());
        s.handle(Event::FileChosen(png("dog.png", 2 * MB)));
        let effects = s.handle(Event::Generate);
        (s, request_of(&effects))
    }

    fn result() -> Session {
        let (mut s, request) = loading();
        s.handle(Event::GenerationFinished {
            request,
            result: Ok("https://x/y.png".into()),
        });
        s
    }

    #[test]
    fn dog_png_reaches_result_centered() {
        let mut s = Session::new(IntakePolicy::default());
        let effects = s.handle(Event::FileChosen(png("dog.png", 2 * MB)));
        assert!(matches!(effects.as_slice(), [Effect::CreatePreview { .. }]));
        assert_eq!(s.phase(), Phase::Upload);

        let effects = s.handle(Event::Generate);
        assert_eq!(s.phase(), Phase::Loading);
        let request = request_of(&effects);

        s.handle(Event::GenerationFinished {
            request,
            result: Ok("https://x/y.png".into()),
        });
        assert_eq!(s.phase(), Phase::Result);
        assert_eq!(s.artifact_url(), Some("https://x/y.png"));
        assert_eq!(s.split(), Split::CENTER);
        assert_eq!(s.selected_file().map(|f| f.name()), Some("dog.png"));
    }

    #[test]
    fn text_file_is_rejected_and_nothing_staged() {
        let mut s = Session::new(IntakePolicy::default());
        let effects = s.handle(Event::FileChosen(Candidate::from_bytes(
            "bad.txt",
            "text/plain",
            vec![0u8; 1024],
        )));

        assert_eq!(
            notice_of(&effects),
            Some((
                ToastKind::Error,
                FILE_REJECTED,
                Some("Only PNG and JPEG files are allowed.")
            ))
        );
        assert!(s.selected_file().is_none());
        assert!(s.preview().is_none());
        assert_eq!(s.phase(), Phase::Upload);
    }

    #[test]
    fn oversized_jpeg_is_rejected() {
        let mut s = Session::new(IntakePolicy::default());
        let effects = s.handle(Event::FileChosen(Candidate::from_bytes(
            "big.jpg",
            "image/jpeg",
            vec![0u8; 11 * MB],
        )));

        assert_eq!(
            notice_of(&effects).and_then(|(_, _, m)| m),
            Some("Image size must be less than 10MB.")
        );
        assert!(s.selected_file().is_none());
    }

    #[test]
    fn rejection_keeps_previous_file() {
        let mut s = Session::new(IntakePolicy::default());
        s.handle(Event::FileChosen(png("dog.png", 10)));
        let preview = s.preview();

        s.handle(Event::FileChosen(Candidate::from_bytes(
            "bad.txt",
            "text/plain",
            vec![1u8],
        )));
        assert_eq!(s.selected_file().map(|f| f.name()), Some("dog.png"));
        assert_eq!(s.preview(), preview);
    }

    #[test]
    fn new_file_releases_previous_preview_first() {
        let mut s = Session::new(IntakePolicy::default());
        s.handle(Event::FileChosen(png("a.png", 10)));
        let first = s.preview().unwrap();

        let effects = s.handle(Event::FileChosen(png("b.png", 10)));
        match effects.as_slice() {
            [Effect::ReleasePreview(old), Effect::CreatePreview { id, file }] => {
                assert_eq!(*old, first);
                assert_ne!(*id, first);
                assert_eq!(file.name(), "b.png");
            }
            other => panic!("unexpected effects: {other:?}"),
        }
        assert_eq!(s.selected_file().map(|f| f.name()), Some("b.png"));
    }

    #[test]
    fn server_error_without_message_uses_generic_notice() {
        let (mut s, request) = loading();
        let effects = s.handle(Event::GenerationFinished {
            request,
            result: Err(Arc::new(GenerationError::Server {
                status: 500,
                message: None,
            })),
        });

        assert_eq!(
            notice_of(&effects),
            Some((ToastKind::Error, GENERATION_FAILED, Some(GENERIC_FAILURE)))
        );
        assert_eq!(effects.len(), 1);
        assert_eq!(s.phase(), Phase::Upload);
        assert_eq!(s.selected_file().map(|f| f.name()), Some("dog.png"));
        assert!(s.artifact_url().is_none());
    }

    #[test]
    fn server_message_is_shown() {
        let (mut s, request) = loading();
        let effects = s.handle(Event::GenerationFinished {
            request,
            result: Err(Arc::new(GenerationError::MissingArtifact {
                message: Some("quota exceeded".into()),
            })),
        });
        assert_eq!(
            notice_of(&effects).and_then(|(_, _, m)| m),
            Some("quota exceeded")
        );
    }

    #[test]
    fn invalid_json_uses_generic_notice() {
        let (mut s, request) = loading();
        let effects = s.handle(Event::GenerationFinished {
            request,
            result: Err(Arc::new(GenerationError::InvalidResponseFormat)),
        });
        assert_eq!(
            notice_of(&effects).and_then(|(_, _, m)| m),
            Some(GENERIC_FAILURE)
        );
        assert_eq!(s.phase(), Phase::Upload);
    }

    #[test]
    fn before_and_after_toggles() {
        let mut s = result();
        s.handle(Event::ShowBefore);
        assert_eq!(s.split().value(), 100);
        s.handle(Event::ShowAfter);
        assert_eq!(s.split().value(), 0);
    }

    #[test]
    fn toggles_override_a_dragged_split_and_end_the_drag() {
        let mut s = result();
        s.handle(Event::SplitChanged(Split::new(73)));
        assert_eq!(s.split().value(), 73);

        let effects = s.handle(Event::ShowBefore);
        assert!(matches!(effects.as_slice(), [Effect::EndDrag]));
        assert_eq!(s.split(), Split::BEFORE);

        let effects = s.handle(Event::ShowAfter);
        assert!(matches!(effects.as_slice(), [Effect::EndDrag]));
        assert_eq!(s.split(), Split::AFTER);
    }

    #[test]
    fn split_changes_only_in_result() {
        let mut s = Session::new(IntakePolicy::default());
        s.handle(Event::SplitChanged(Split::new(10)));
        s.handle(Event::ShowBefore);
        assert_eq!(s.split(), Split::CENTER);

        let mut s = result();
        s.handle(Event::SplitChanged(Split::new(73)));
        assert_eq!(s.split().value(), 73);
    }

    #[test]
    fn generate_without_file_is_noop() {
        let mut s = Session::new(IntakePolicy::default());
        assert!(s.handle(Event::Generate).is_empty());
        assert_eq!(s.phase(), Phase::Upload);
        assert!(s.in_flight().is_none());
    }

    #[test]
    fn generate_while_loading_is_noop() {
        let (mut s, request) = loading();
        assert!(s.handle(Event::Generate).is_empty());
        assert_eq!(s.in_flight(), Some(request));
    }

    #[test]
    fn stale_completion_is_dropped() {
        let (mut s, request) = loading();
        let stale = RequestId(request.0 + 41);
        let effects = s.handle(Event::GenerationFinished {
            request: stale,
            result: Ok("https://x/stale.png".into()),
        });
        assert!(effects.is_empty());
        assert_eq!(s.phase(), Phase::Loading);
        assert!(s.artifact_url().is_none());
    }

    #[test]
    fn completion_after_teardown_is_dropped() {
        let (mut s, request) = loading();
        let effects = s.teardown();
        assert!(
            effects
                .iter()
                .any(|e| matches!(e, Effect::ReleasePreview(_)))
        );
        assert!(s.preview().is_none());

        s.handle(Event::GenerationFinished {
            request,
            result: Ok("https://x/late.png".into()),
        });
        assert_ne!(s.phase(), Phase::Result);
    }

    #[test]
    fn file_choice_ignored_while_loading() {
        let (mut s, _) = loading();
        assert!(s.handle(Event::FileChosen(png("other.png", 10))).is_empty());
        assert_eq!(s.selected_file().map(|f| f.name()), Some("dog.png"));
    }

    #[test]
    fn start_over_keeps_file_and_resets_split() {
        let mut s = result();
        s.handle(Event::ShowBefore);

        let effects = s.handle(Event::StartOver);
        assert!(matches!(effects.as_slice(), [Effect::EndDrag]));
        assert_eq!(s.phase(), Phase::Upload);
        assert!(s.artifact_url().is_none());
        assert_eq!(s.split(), Split::CENTER);
        assert!(s.selected_file().is_some());
    }

    #[test]
    fn style_is_sent_and_locked_outside_upload() {
        let mut s = Session::new(IntakePolicy::default());
        s.handle(Event::FileChosen(png("dog.png", 10)));
        s.handle(Event::SetStyle(StyleField::Scenario, "Grapefruit Getaway".into()));
        s.handle(Event::SetStyle(StyleField::Clothing, "Scarf".into()));
        s.handle(Event::SetStyle(StyleField::Clothing, String::new()));

        let effects = s.handle(Event::Generate);
        match effects.as_slice() {
            [Effect::RequestGeneration { style, .. }] => {
                assert_eq!(style.get(StyleField::Scenario), Some("Grapefruit Getaway"));
                assert_eq!(style.get(StyleField::Clothing), None);
            }
            other => panic!("unexpected effects: {other:?}"),
        }

        s.handle(Event::SetStyle(StyleField::Clothing, "Poncho".into()));
        assert_eq!(s.style().get(StyleField::Clothing), None);
    }

    #[test]
    fn unreadable_file_notifies() {
        let mut s = Session::new(IntakePolicy::default());
        let effects = s.handle(Event::FileUnreadable("permission denied".into()));
        assert_eq!(
            notice_of(&effects).and_then(|(_, _, m)| m),
            Some("permission denied")
        );
    }
}
