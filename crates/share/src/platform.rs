//! Social sharing through platform hooks.

use crate::caption::{CAPTION, clipboard_text, facebook_share_url};

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/";

/// Requested size of the Facebook sharer window.
pub const FACEBOOK_WINDOW: (u32, u32) = (600, 400);

/// Clipboard write failure.
#[derive(Debug, thiserror::Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Failure to hand a URL to the system.
#[derive(Debug, thiserror::Error)]
#[error("could not open {url}: {source}")]
pub struct OpenError {
    pub url: String,
    #[source]
    pub source: std::io::Error,
}

/// System clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A URL to open, optionally in a window of the given size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub url: String,
    pub window_size: Option<(u32, u32)>,
}

impl OpenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            window_size: None,
        }
    }

    pub fn sized(mut self, width: u32, height: u32) -> Self {
        self.window_size = Some((width, height));
        self
    }
}

/// System browser / URL handler.
pub trait Opener {
    fn open(&self, request: &OpenRequest) -> Result<(), OpenError>;
}

/// Share targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Self::Instagram, Self::Facebook];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Instagram => "Post to Instagram",
            Self::Facebook => "Post to Facebook",
        }
    }
}

/// What the user should be told after sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Caption is on the clipboard, ready to paste.
    CaptionCopied,
    /// The clipboard failed; the user must copy this caption by hand.
    CopyManually(String),
    /// The sharer page was opened.
    Opened,
}

/// Shares the image on `platform`.
///
/// Instagram has no prefill link, so the caption goes to the clipboard and
/// the site is opened either way. An opener failure is returned as an error.
pub fn share(
    platform: Platform,
    image_url: &str,
    clipboard: &mut dyn Clipboard,
    opener: &dyn Opener,
) -> Result<ShareOutcome, OpenError> {
    match platform {
        Platform::Instagram => {
            let outcome = match clipboard.set_text(&clipboard_text(image_url)) {
                Ok(()) => ShareOutcome::CaptionCopied,
                Err(e) => {
                    tracing::warn!(error = %e, "caption copy failed");
                    ShareOutcome::CopyManually(CAPTION.to_string())
                }
            };
            opener.open(&OpenRequest::new(INSTAGRAM_URL))?;
            tracing::info!(?outcome, "shared to instagram");
            Ok(outcome)
        }
        Platform::Facebook => {
            let (w, h) = FACEBOOK_WINDOW;
            opener.open(&OpenRequest::new(facebook_share_url(image_url)).sized(w, h))?;
            tracing::info!("opened facebook sharer");
            Ok(ShareOutcome::Opened)
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    #[derive(Debug, Default)]
    pub struct RecordingOpener {
        pub opened: RefCell<Vec<OpenRequest>>,
        pub fail: bool,
    }

    impl Opener for RecordingOpener {
        fn open(&self, request: &OpenRequest) -> Result<(), OpenError> {
            self.opened.borrow_mut().push(request.clone());
            if self.fail {
                return Err(OpenError {
                    url: request.url.clone(),
                    source: std::io::Error::other("no browser"),
                });
            }
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    pub struct MemoryClipboard {
        pub text: Option<String>,
        pub fail: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError("denied".into()));
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }
}
