use cosmic::iced::widget::canvas::{self, Frame, Path, Stroke};
use cosmic::iced::widget::image;
use cosmic::iced::{Point, Rectangle, Size, mouse, touch};

use pupstyle_comparison::{Pointer, Split, Viewport};

use crate::colors::{DIVIDER, HANDLE_FILL, HANDLE_GLYPH, PLACEHOLDER, with_alpha};

const HANDLE_RADIUS: f32 = 18.0;
const ARROW_HALF_HEIGHT: f32 = 5.0;
const ARROW_WIDTH: f32 = 5.0;
const DIVIDER_WIDTH: f32 = 2.0;

/// Pointer activity on the comparison viewport.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderEvent {
    /// A press inside the viewport.
    Press { pointer: Pointer, viewport: Viewport },
    /// Movement while a drag is active, anywhere in the window.
    Move { pointer: Pointer, viewport: Viewport },
    /// The dragging pointer went up or was lost.
    Release,
}

/// Per-widget state: the finger that started a touch drag.
#[derive(Debug, Default)]
pub struct OverlayState {
    finger: Option<touch::Finger>,
}

/// Before/after comparison canvas.
///
/// Draws the generated image across the whole viewport, the original
/// clipped to the left `split` percent, then the divider and handle.
/// Pointer activity is reported as [`SliderEvent`]s. The canvas sees every
/// window pointer event, so while `dragging` is set moves and releases
/// outside the viewport are reported too.
pub struct ComparisonOverlay<F> {
    before: Option<image::Handle>,
    after: Option<image::Handle>,
    split: Split,
    dragging: bool,
    on_slide: F,
}

impl<F> ComparisonOverlay<F> {
    pub fn new(split: Split, dragging: bool, on_slide: F) -> Self {
        Self {
            before: None,
            after: None,
            split,
            dragging,
            on_slide,
        }
    }

    /// Original photo, shown left of the divider.
    pub fn before(mut self, handle: Option<image::Handle>) -> Self {
        self.before = handle;
        self
    }

    /// Generated image, shown right of the divider.
    pub fn after(mut self, handle: Option<image::Handle>) -> Self {
        self.after = handle;
        self
    }
}

/// Horizontal position of the divider inside a viewport of `width`.
pub fn divider_x(width: f32, split: Split) -> f32 {
    width.max(0.0) * split.fraction()
}

fn viewport_of(bounds: Rectangle) -> Viewport {
    Viewport::new(bounds.x, bounds.y, bounds.width, bounds.height)
}

/// Maps a raw canvas event to slider activity.
fn translate(
    state: &mut OverlayState,
    event: &canvas::Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    dragging: bool,
) -> Option<SliderEvent> {
    let viewport = viewport_of(bounds);
    match event {
        canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            let position = cursor.position_over(bounds)?;
            Some(SliderEvent::Press {
                pointer: Pointer::Mouse { x: position.x },
                viewport,
            })
        }
        canvas::Event::Mouse(mouse::Event::CursorMoved { position }) if dragging => {
            Some(SliderEvent::Move {
                pointer: Pointer::Mouse { x: position.x },
                viewport,
            })
        }
        canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if dragging => {
            Some(SliderEvent::Release)
        }
        canvas::Event::Touch(touch::Event::FingerPressed { id, position }) => {
            if state.finger.is_some() || !bounds.contains(*position) {
                return None;
            }
            state.finger = Some(*id);
            Some(SliderEvent::Press {
                pointer: Pointer::Touch {
                    xs: vec![position.x],
                },
                viewport,
            })
        }
        canvas::Event::Touch(touch::Event::FingerMoved { id, position })
            if dragging && state.finger == Some(*id) =>
        {
            Some(SliderEvent::Move {
                pointer: Pointer::Touch {
                    xs: vec![position.x],
                },
                viewport,
            })
        }
        canvas::Event::Touch(
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
        ) if state.finger == Some(*id) => {
            state.finger = None;
            dragging.then_some(SliderEvent::Release)
        }
        _ => None,
    }
}

impl<Message, F> canvas::Program<Message, cosmic::Theme, cosmic::Renderer> for ComparisonOverlay<F>
where
    F: Fn(SliderEvent) -> Message,
{
    type State = OverlayState;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match translate(state, &event, bounds, cursor, self.dragging) {
            Some(slide) => (canvas::event::Status::Captured, Some((self.on_slide)(slide))),
            None => (canvas::event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &cosmic::Renderer,
        _theme: &cosmic::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let full = Rectangle::new(Point::ORIGIN, bounds.size());
        let x = divider_x(bounds.width, self.split);
        let mid_y = bounds.height / 2.0;

        match &self.after {
            Some(handle) => frame.draw_image(full, handle.clone()),
            None => frame.fill_rectangle(Point::ORIGIN, bounds.size(), PLACEHOLDER),
        }
        if let Some(handle) = &self.before {
            let left = Rectangle::new(Point::ORIGIN, Size::new(x, bounds.height));
            frame.with_clip(left, |clipped| clipped.draw_image(full, handle.clone()));
        }

        frame.stroke(
            &Path::line(Point::new(x, 0.0), Point::new(x, bounds.height)),
            Stroke::default()
                .with_color(DIVIDER)
                .with_width(DIVIDER_WIDTH),
        );

        let center = Point::new(x, mid_y);
        frame.fill(
            &Path::circle(center, HANDLE_RADIUS + 2.0),
            with_alpha(HANDLE_GLYPH, 0.25),
        );
        frame.fill(&Path::circle(center, HANDLE_RADIUS), HANDLE_FILL);

        for dir in [-1.0_f32, 1.0] {
            let tip = x + dir * (ARROW_WIDTH + 6.0);
            let base = x + dir * 4.0;
            let arrow = Path::new(|b| {
                b.move_to(Point::new(tip, mid_y));
                b.line_to(Point::new(base, mid_y - ARROW_HALF_HEIGHT));
                b.line_to(Point::new(base, mid_y + ARROW_HALF_HEIGHT));
                b.close();
            });
            frame.fill(&arrow, HANDLE_GLYPH);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging || cursor.is_over(bounds) {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle {
            x: 100.0,
            y: 50.0,
            width: 480.0,
            height: 480.0,
        }
    }

    fn at(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(x, y))
    }

    fn press() -> canvas::Event {
        canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    #[test]
    fn divider_follows_split() {
        assert_eq!(divider_x(480.0, Split::AFTER), 0.0);
        assert_eq!(divider_x(480.0, Split::CENTER), 240.0);
        assert_eq!(divider_x(480.0, Split::BEFORE), 480.0);
        assert_eq!(divider_x(-10.0, Split::BEFORE), 0.0);
    }

    #[test]
    fn press_inside_starts_slide() {
        let mut state = OverlayState::default();
        let slide = translate(&mut state, &press(), bounds(), at(220.0, 100.0), false);
        assert_eq!(
            slide,
            Some(SliderEvent::Press {
                pointer: Pointer::Mouse { x: 220.0 },
                viewport: Viewport::new(100.0, 50.0, 480.0, 480.0),
            })
        );
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut state = OverlayState::default();
        assert_eq!(
            translate(&mut state, &press(), bounds(), at(20.0, 100.0), false),
            None
        );
        assert_eq!(
            translate(&mut state, &press(), bounds(), mouse::Cursor::Unavailable, false),
            None
        );
    }

    #[test]
    fn moves_only_while_dragging() {
        let mut state = OverlayState::default();
        let moved = canvas::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(900.0, 10.0),
        });

        assert_eq!(translate(&mut state, &moved, bounds(), at(900.0, 10.0), false), None);
        assert!(matches!(
            translate(&mut state, &moved, bounds(), at(900.0, 10.0), true),
            Some(SliderEvent::Move {
                pointer: Pointer::Mouse { x },
                ..
            }) if x == 900.0
        ));
    }

    #[test]
    fn release_outside_ends_drag() {
        let mut state = OverlayState::default();
        let up = canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert_eq!(translate(&mut state, &up, bounds(), at(0.0, 0.0), false), None);
        assert_eq!(
            translate(&mut state, &up, bounds(), at(0.0, 0.0), true),
            Some(SliderEvent::Release)
        );
    }

    #[test]
    fn touch_tracks_first_finger_only() {
        let mut state = OverlayState::default();
        let first = touch::Finger(1);
        let second = touch::Finger(2);
        let cursor = mouse::Cursor::Unavailable;

        let down = canvas::Event::Touch(touch::Event::FingerPressed {
            id: first,
            position: Point::new(300.0, 200.0),
        });
        assert!(matches!(
            translate(&mut state, &down, bounds(), cursor, false),
            Some(SliderEvent::Press { .. })
        ));

        let other = canvas::Event::Touch(touch::Event::FingerPressed {
            id: second,
            position: Point::new(310.0, 200.0),
        });
        assert_eq!(translate(&mut state, &other, bounds(), cursor, true), None);

        let other_move = canvas::Event::Touch(touch::Event::FingerMoved {
            id: second,
            position: Point::new(50.0, 200.0),
        });
        assert_eq!(translate(&mut state, &other_move, bounds(), cursor, true), None);

        let lift = canvas::Event::Touch(touch::Event::FingerLifted {
            id: first,
            position: Point::new(0.0, 0.0),
        });
        assert_eq!(
            translate(&mut state, &lift, bounds(), cursor, true),
            Some(SliderEvent::Release)
        );
        assert!(state.finger.is_none());
    }
}
