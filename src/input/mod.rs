use egui::{Context, PointerButton, Pos2, Rect, Vec2};

mod gestures;
pub use gestures::{stage_release, ReleaseOutcome};

/// A pointer position as the canvas sees it.
///
/// `offset` is the position within the canvas when the pointer is over it.
/// `page` is the absolute position in the window and is always known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub offset: Option<Vec2>,
    pub page: Pos2,
}

impl PointerSample {
    /// Sample taken over the canvas
    pub fn within(offset: Vec2, page: Pos2) -> Self {
        Self {
            offset: Some(offset),
            page,
        }
    }

    /// Sample with only a window position
    pub fn page_only(page: Pos2) -> Self {
        Self { offset: None, page }
    }

    /// Position relative to the canvas origin.
    ///
    /// Prefers the offset within the canvas; otherwise subtracts the canvas
    /// origin from the window position. Rounded to whole pixels.
    pub fn surface_position(&self, surface_origin: Pos2) -> Pos2 {
        let pos = match self.offset {
            Some(offset) => offset.to_pos2(),
            None => Pos2::ZERO + (self.page - surface_origin),
        };
        pos.round()
    }
}

/// Pointer events on the drawing canvas
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown(PointerSample),
    /// Primary button released, anywhere
    PointerUp(PointerSample),
    /// Pointer moved; `None` when it left the window
    PointerMove(Option<PointerSample>),
}

/// Handles converting raw egui input into canvas `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last pointer position seen, in window coordinates
    pub fn last_pointer_pos(&self) -> Option<Pos2> {
        self.last_pointer_pos
    }

    fn make_sample(pos: Pos2, canvas_rect: Rect) -> PointerSample {
        if canvas_rect.contains(pos) {
            PointerSample::within(pos - canvas_rect.min, pos)
        } else {
            PointerSample::page_only(pos)
        }
    }

    /// Process raw egui input for one frame.
    ///
    /// `canvas_hovered` is false when another widget or window covers the
    /// canvas; presses there do not start a gesture.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect, canvas_hovered: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pos = input.pointer.latest_pos();
            if pos != self.last_pointer_pos {
                events.push(InputEvent::PointerMove(
                    pos.map(|pos| Self::make_sample(pos, canvas_rect)),
                ));
            }
            if pos.is_some() {
                self.last_pointer_pos = pos;
            }

            let Some(pos) = pos.or(self.last_pointer_pos) else {
                return;
            };
            if input.pointer.button_pressed(PointerButton::Primary)
                && canvas_hovered
                && canvas_rect.contains(pos)
            {
                events.push(InputEvent::PointerDown(Self::make_sample(pos, canvas_rect)));
            }
            if input.pointer.button_released(PointerButton::Primary) {
                events.push(InputEvent::PointerUp(Self::make_sample(pos, canvas_rect)));
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_preferred() {
        let sample = PointerSample::within(Vec2::new(10.0, 12.0), Pos2::new(500.0, 500.0));
        assert_eq!(sample.surface_position(Pos2::new(100.0, 50.0)), Pos2::new(10.0, 12.0));
    }

    #[test]
    fn page_fallback_subtracts_origin() {
        let sample = PointerSample::page_only(Pos2::new(150.4, 80.6));
        assert_eq!(sample.surface_position(Pos2::new(100.0, 50.0)), Pos2::new(50.0, 31.0));
    }
}
