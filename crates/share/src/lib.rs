//! Actions available on a generated image.
//!
//! - [`download`]: fetch the artifact and save it, or open it in the
//!   browser when that fails
//! - [`share`]: Instagram caption via clipboard, Facebook sharer link
//!
//! Clipboard and URL opening are traits so the app supplies the platform
//! implementations.

pub mod caption;
pub mod download;
pub mod platform;

pub use caption::{CAPTION, HASHTAGS, MENTION, clipboard_text, facebook_share_url};
pub use download::{DEFAULT_FILE_NAME, DownloadError, DownloadOutcome, download, save_artifact};
pub use platform::{
    Clipboard, ClipboardError, FACEBOOK_WINDOW, INSTAGRAM_URL, OpenError, OpenRequest, Opener,
    Platform, ShareOutcome, share,
};
