//! Pointer-to-percentage mapping.

/// Share of the viewport width showing the original photo, from the left.
///
/// `0` shows only the generated image, `100` only the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Split(u8);

impl Split {
    /// Original photo only.
    pub const BEFORE: Split = Split(100);
    /// Generated image only.
    pub const AFTER: Split = Split(0);
    /// Half and half; the value after every new result.
    pub const CENTER: Split = Split(50);

    /// Clamps any integer into `0..=100`.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// The split as a fraction in `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl Default for Split {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Screen rectangle of the comparison viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether a point lies inside the rectangle (edges included).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }
}

/// A pointer sample in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Pointer {
    /// Mouse-style event with a single point.
    Mouse { x: f32 },
    /// Touch-style event; only the first touch point is used.
    Touch { xs: Vec<f32> },
}

impl Pointer {
    /// Horizontal coordinate that drives the slider, if the event has one.
    pub fn client_x(&self) -> Option<f32> {
        match self {
            Self::Mouse { x } => Some(*x),
            Self::Touch { xs } => xs.first().copied(),
        }
    }
}

/// `clamp(0, 100, (client_x - left) / width * 100)`, rounded.
///
/// Returns `None` for a degenerate viewport or a non-finite coordinate.
pub fn percent_from_pointer(client_x: f32, viewport: &Viewport) -> Option<Split> {
    if viewport.width.is_nan() || viewport.width <= 0.0 || !client_x.is_finite() {
        return None;
    }
    let percent = (client_x - viewport.left) / viewport.width * 100.0;
    Some(Split::new(percent.round() as i64))
}
