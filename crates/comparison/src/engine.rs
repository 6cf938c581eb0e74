//! Drag tracking with scoped pointer capture.

use crate::geometry::{Pointer, Split, Viewport, percent_from_pointer};

/// Platform hook that routes pointer events to the slider while dragging.
///
/// `acquire` starts delivering move/release events even when the pointer
/// leaves the viewport and suppresses text selection; `release` undoes
/// both. The engine pairs every `acquire` with exactly one `release`.
pub trait PointerCapture {
    fn acquire(&mut self);
    fn release(&mut self);
}

/// Drag state machine for the comparison slider.
///
/// Dropping the engine mid-drag releases the capture.
#[derive(Debug)]
pub struct SliderEngine<C: PointerCapture> {
    capture: C,
    dragging: bool,
}

impl<C: PointerCapture> SliderEngine<C> {
    pub fn new(capture: C) -> Self {
        Self {
            capture,
            dragging: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn capture(&self) -> &C {
        &self.capture
    }

    /// Starts a drag and returns the split under the initiating pointer,
    /// so a click without movement still moves the slider.
    pub fn begin_drag(&mut self, pointer: &Pointer, viewport: &Viewport) -> Option<Split> {
        if !self.dragging {
            self.capture.acquire();
            self.dragging = true;
            tracing::trace!("slider drag started");
        }
        split_for(pointer, viewport)
    }

    /// Recomputes the split; `None` when no drag is active.
    pub fn update_drag(&mut self, pointer: &Pointer, viewport: &Viewport) -> Option<Split> {
        if !self.dragging {
            return None;
        }
        split_for(pointer, viewport)
    }

    /// Ends the drag. Calling it again is a no-op.
    pub fn end_drag(&mut self) {
        if self.dragging {
            self.dragging = false;
            self.capture.release();
            tracing::trace!("slider drag ended");
        }
    }
}

impl<C: PointerCapture> Drop for SliderEngine<C> {
    fn drop(&mut self) {
        self.end_drag();
    }
}

fn split_for(pointer: &Pointer, viewport: &Viewport) -> Option<Split> {
    pointer
        .client_x()
        .and_then(|x| percent_from_pointer(x, viewport))
}
