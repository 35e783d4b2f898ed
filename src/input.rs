use egui::{Context, Key, Pos2, Rect};

use crate::geometry::Point;

/// Discrete events delivered to the draw session.
///
/// Pointer coordinates are surface-local pixels, already clamped to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown(Point),
    /// Pointer moved, with or without the button held
    PointerMove(Point),
    /// Primary button was released
    PointerUp(Point),
    /// Key was pressed
    Key(Key),
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer: Option<Point>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process the frame's egui input for a surface of `surface_size` shown 1:1 at `canvas_rect`.
    ///
    /// Presses only count when they land on the canvas; moves and releases are
    /// clamped onto it. Keys are skipped while a widget has keyboard focus.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_rect: Rect,
        surface_size: (u32, u32),
    ) -> Vec<InputEvent> {
        let (width, height) = surface_size;
        let to_surface = |pos: Pos2| Point::from_screen(pos, canvas_rect).clamp_to(width, height);
        let keyboard_free = !ctx.wants_keyboard_input();

        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer_pos = input.pointer.interact_pos();

            if input.pointer.primary_pressed() {
                if let Some(pos) = pointer_pos.filter(|pos| canvas_rect.contains(*pos)) {
                    let point = to_surface(pos);
                    events.push(InputEvent::PointerDown(point));
                    self.last_pointer = Some(point);
                }
            }

            if let Some(pos) = pointer_pos {
                let point = to_surface(pos);
                if self.last_pointer != Some(point) {
                    events.push(InputEvent::PointerMove(point));
                    self.last_pointer = Some(point);
                }
            }

            if input.pointer.primary_released() {
                if let Some(pos) = pointer_pos {
                    events.push(InputEvent::PointerUp(to_surface(pos)));
                }
            }

            if keyboard_free {
                for event in &input.events {
                    if let egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } = event
                    {
                        events.push(InputEvent::Key(*key));
                    }
                }
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2, Modifiers, PointerButton, RawInput};

    fn run_frame(
        ctx: &Context,
        handler: &mut InputHandler,
        rect: Rect,
        events: Vec<egui::Event>,
    ) -> Vec<InputEvent> {
        let raw = RawInput {
            events,
            ..Default::default()
        };
        let mut out = Vec::new();
        let _ = ctx.run(raw, |ctx| {
            out = handler.process_input(ctx, rect, (100, 100));
        });
        out
    }

    fn button(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_press_and_release_map_to_surface_coordinates() {
        let ctx = Context::default();
        let mut handler = InputHandler::new();
        let rect = Rect::from_min_size(pos2(200.0, 100.0), vec2(100.0, 100.0));

        let events = run_frame(
            &ctx,
            &mut handler,
            rect,
            vec![egui::Event::PointerMoved(pos2(210.0, 110.0)), button(pos2(210.0, 110.0), true)],
        );
        assert_eq!(events, vec![InputEvent::PointerDown(Point::new(10, 10))]);

        let events = run_frame(
            &ctx,
            &mut handler,
            rect,
            vec![egui::Event::PointerMoved(pos2(450.0, 160.0)), button(pos2(450.0, 160.0), false)],
        );
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMove(Point::new(99, 60)),
                InputEvent::PointerUp(Point::new(99, 60)),
            ]
        );
    }

    #[test]
    fn test_key_presses_are_forwarded() {
        let ctx = Context::default();
        let mut handler = InputHandler::new();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));

        let key = |key, pressed| egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: Modifiers::NONE,
        };

        let events = run_frame(&ctx, &mut handler, rect, vec![key(Key::Z, true), key(Key::Z, false)]);
        assert_eq!(events, vec![InputEvent::Key(Key::Z)]);
    }
}
