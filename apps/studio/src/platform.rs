//! Desktop implementations of the platform hooks: URL opener, clipboard,
//! and slider pointer capture.

use pupstyle_comparison::PointerCapture;
use pupstyle_share::{Clipboard, ClipboardError, OpenError, OpenRequest, Opener};

/// Opens URLs with the system handler.
///
/// The desktop browser decides the window size; a requested size is only
/// logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, request: &OpenRequest) -> Result<(), OpenError> {
        if let Some((w, h)) = request.window_size {
            tracing::debug!(url = %request.url, width = w, height = h, "opening sized window");
        }
        open::that_detached(&request.url).map_err(|source| OpenError {
            url: request.url.clone(),
            source,
        })?;
        tracing::info!(url = %request.url, "opened in browser");
        Ok(())
    }
}

/// System clipboard, connected on first use.
///
/// The connection is kept for the app's lifetime since some platforms
/// drop clipboard contents when their owner goes away.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match &mut self.inner {
            Some(c) => c,
            slot => slot.insert(arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?),
        };
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError(e.to_string()))
    }
}

/// Pointer capture for the comparison slider.
///
/// The canvas overlay already receives window-wide pointer events, so
/// capturing means telling the overlay to report moves and releases
/// outside the viewport and showing the resize cursor.
#[derive(Debug, Default)]
pub struct WindowCapture {
    active: bool,
}

impl WindowCapture {
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl PointerCapture for WindowCapture {
    fn acquire(&mut self) {
        self.active = true;
        tracing::trace!("pointer captured");
    }

    fn release(&mut self) {
        self.active = false;
        tracing::trace!("pointer released");
    }
}
