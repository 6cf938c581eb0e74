//! Toast notifications with timed expiry.

use std::time::{Duration, Instant};

/// How long success and info toasts stay up.
const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

/// Errors stay longer so they can be read.
const ERROR_DURATION: Duration = Duration::from_millis(6000);

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn duration(&self) -> Duration {
        match self {
            Self::Error => ERROR_DURATION,
            Self::Success | Self::Info => DEFAULT_DURATION,
        }
    }
}

/// A toast currently on screen.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    pub shown_at: Instant,
    /// Stays until closed by the user; `message` is meant to be copied.
    pub sticky: bool,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        !self.sticky && now.saturating_duration_since(self.shown_at) >= self.kind.duration()
    }
}

/// On-screen toasts in insertion order with monotonic ids.
///
/// The app calls [`ToastQueue::expire`] from a periodic tick.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast starting now and returns its id.
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, message: Option<String>) -> u64 {
        self.push_at(kind, title, message, Instant::now())
    }

    /// Shows a toast with an explicit start time.
    pub fn push_at(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        message: Option<String>,
        shown_at: Instant,
    ) -> u64 {
        self.insert(kind, title.into(), message, shown_at, false)
    }

    /// Shows a toast that only [`ToastQueue::dismiss`] removes.
    pub fn push_sticky(&mut self, kind: ToastKind, title: impl Into<String>, message: String) -> u64 {
        self.insert(kind, title.into(), Some(message), Instant::now(), true)
    }

    fn insert(
        &mut self,
        kind: ToastKind,
        title: String,
        message: Option<String>,
        shown_at: Instant,
        sticky: bool,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            title,
            message,
            shown_at,
            sticky,
        });
        id
    }

    /// Removes a toast by id. Returns `true` if it was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drops every toast whose display time has elapsed; returns how many.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        before - self.toasts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_and_ordered() {
        let mut q = ToastQueue::new();
        let a = q.push(ToastKind::Info, "first", None);
        let b = q.push(ToastKind::Error, "second", Some("details".into()));

        assert_eq!((a, b), (0, 1));
        let titles: Vec<&str> = q.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn dismiss_by_id() {
        let mut q = ToastQueue::new();
        let keep = q.push(ToastKind::Success, "keep", None);
        let gone = q.push(ToastKind::Error, "gone", None);

        assert!(q.dismiss(gone));
        assert!(!q.dismiss(gone));
        assert_eq!(q.len(), 1);
        assert_eq!(q.iter().next().map(|t| t.id), Some(keep));
    }

    #[test]
    fn errors_outlive_info() {
        let start = Instant::now();
        let mut q = ToastQueue::new();
        q.push_at(ToastKind::Info, "fyi", None, start);
        q.push_at(ToastKind::Error, "oops", None, start);

        assert_eq!(q.expire(start + Duration::from_millis(3999)), 0);
        assert_eq!(q.expire(start + Duration::from_millis(4000)), 1);
        assert_eq!(q.iter().next().map(|t| t.kind), Some(ToastKind::Error));
        assert_eq!(q.expire(start + Duration::from_millis(6000)), 1);
        assert!(q.is_empty());
    }

    #[test]
    fn sticky_toast_survives_expiry_until_dismissed() {
        let mut q = ToastQueue::new();
        let start = Instant::now();
        let caption = q.push_sticky(ToastKind::Info, "Copy this caption", "caption text".into());
        q.push_at(ToastKind::Info, "fyi", None, start);

        assert_eq!(q.expire(start + Duration::from_secs(4)), 1);
        assert_eq!(q.expire(start + Duration::from_secs(3600)), 0);
        let left = q.iter().next().expect("sticky toast kept");
        assert_eq!(left.id, caption);
        assert_eq!(left.message.as_deref(), Some("caption text"));

        assert!(q.dismiss(caption));
        assert!(q.is_empty());
    }

    #[test]
    fn expire_before_shown_keeps_toast() {
        let start = Instant::now();
        let mut q = ToastQueue::new();
        q.push_at(ToastKind::Success, "later", None, start + Duration::from_secs(10));
        assert_eq!(q.expire(start), 0);
        assert_eq!(q.len(), 1);
    }
}
