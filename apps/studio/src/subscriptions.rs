//! Timer subscriptions.
//!
//! Each timer exists only while the view that needs it is shown, so
//! leaving the view cancels it.

use std::time::Duration;

use cosmic::iced::Subscription;
use cosmic::iced::time;

use pupstyle_session::{CAROUSEL_INTERVAL, PHRASE_INTERVAL, Phase};

use crate::message::Message;

/// How often expired toasts are swept.
const TOAST_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// What the current state needs ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timers {
    pub phrases: bool,
    pub carousel: bool,
    pub toasts: bool,
}

impl Timers {
    pub fn for_state(phase: Phase, example_count: usize, toast_count: usize) -> Self {
        Self {
            phrases: phase == Phase::Loading,
            carousel: phase == Phase::Upload && example_count > 1,
            toasts: toast_count > 0,
        }
    }
}

/// Builds the subscription for the active timers.
pub fn timers(active: Timers) -> Subscription<Message> {
    let mut subs = Vec::with_capacity(3);
    if active.phrases {
        subs.push(time::every(PHRASE_INTERVAL).map(|_| Message::PhraseTick));
    }
    if active.carousel {
        subs.push(time::every(CAROUSEL_INTERVAL).map(|_| Message::CarouselTick));
    }
    if active.toasts {
        subs.push(time::every(TOAST_SWEEP_INTERVAL).map(|_| Message::ToastTick));
    }
    Subscription::batch(subs)
}
