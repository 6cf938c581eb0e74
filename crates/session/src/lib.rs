//! Styling session state.
//!
//! This crate holds the **state machine** of the styling flow with no UI
//! or transport dependencies. The app feeds [`Event`]s into
//! [`Session::handle`] and performs the returned [`Effect`]s (previews,
//! generation requests, toasts).
//!
//! # Phases
//!
//! 1. **Upload**: pick a photo and style choices
//! 2. **Loading**: the generation request is in flight
//! 3. **Result**: before/after comparison of the generated image

pub mod rotation;
pub mod session;
pub mod toast;

pub use rotation::{CAROUSEL_INTERVAL, LOADING_PHRASES, PHRASE_INTERVAL, Rotation};
pub use session::{Effect, Event, Phase, PreviewId, RequestId, Session};
pub use toast::{Toast, ToastKind, ToastQueue};
