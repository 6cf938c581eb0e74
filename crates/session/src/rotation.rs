//! Wrapping index for timed rotations (loading phrases, example carousel).

use std::time::Duration;

/// Phrases cycled while a generation is in flight.
pub const LOADING_PHRASES: [&str; 5] = [
    "Mixing natural colors…",
    "Brushing your pup's fur…",
    "Picking the comfiest sweater…",
    "Adding a splash of charm…",
    "GNB magic in progress…",
];

/// Interval between loading phrases.
pub const PHRASE_INTERVAL: Duration = Duration::from_secs(2);

/// Interval between carousel slides.
pub const CAROUSEL_INTERVAL: Duration = Duration::from_secs(4);

/// Position in a fixed-length cycle. An empty cycle stays at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    index: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves one step forward (`1`) or back (`-1`), wrapping.
    pub fn step(&mut self, dir: isize) {
        if self.len == 0 {
            return;
        }
        let len = self.len as isize;
        self.index = (self.index as isize + dir).rem_euclid(len) as usize;
    }

    pub fn advance(&mut self) {
        self.step(1);
    }

    /// Jumps to `index`; out-of-range values are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
