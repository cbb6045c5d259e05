//! Buttons and static labels
//!
//! Buttons consume raw pointer events from the host's dispatch loop; the
//! hover flag only changes draw-time colors.

use crate::core::types::{Color, Rect, Vec2};
use crate::ui::context::{DrawSurface, FontRole, UiContext};

const BORDER_WIDTH: f32 = 2.0;
/// Backing rect inflation behind a caption on a transparent button
const CAPTION_PADDING: f32 = 4.0;

/// Pointer buttons the UI distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Raw input events forwarded by the host's event dispatch
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    PointerMoved { pos: Vec2 },
    PointerPressed { button: PointerButton, pos: Vec2 },
}

/// Clickable rectangle with an optional attached action
pub struct Button {
    rect: Rect,
    label: String,
    action: Option<Box<dyn FnMut()>>,
    hovered: bool,
    border_color: Color,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
            action: None,
            hovered: false,
            border_color: Color::WHITE,
        }
    }

    pub fn with_action(mut self, action: impl FnMut() + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    pub fn with_border(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Hit-test pointer events. Motion refreshes the hover flag; a primary
    /// press inside the rect invokes the attached action (no-op if none).
    pub fn handle_event(&mut self, event: &UiEvent) {
        match event {
            UiEvent::PointerMoved { pos } => {
                self.hovered = self.rect.contains(*pos);
            }
            UiEvent::PointerPressed {
                button: PointerButton::Primary,
                pos,
            } if self.rect.contains(*pos) => {
                if let Some(action) = self.action.as_mut() {
                    action();
                }
            }
            _ => {}
        }
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface, ctx: &UiContext) {
        let fill = if self.hovered {
            Color::WHITE
        } else {
            Color::TRANSPARENT_BLACK
        };
        let caption_color = if self.hovered {
            Color::BLACK
        } else {
            Color::WHITE
        };

        surface.fill_rect(self.rect, fill);
        surface.stroke_rect(self.rect, self.border_color, BORDER_WIDTH);

        let font = ctx.font(FontRole::Button);
        let caption_width = font.text_width(&self.label);
        let caption_height = font.line_height();
        let pos = Vec2::new(
            self.rect.x + (self.rect.width - caption_width) / 2.0,
            self.rect.y + (self.rect.height - caption_height) / 2.0,
        );

        // A transparent resting fill gets a small solid backing so the
        // caption stays readable over the scene behind it.
        if !self.hovered && fill.a < 255 {
            surface.fill_rect(
                Rect::new(
                    pos.x - CAPTION_PADDING / 2.0,
                    pos.y - CAPTION_PADDING / 2.0,
                    caption_width + CAPTION_PADDING,
                    caption_height + CAPTION_PADDING,
                ),
                Color::BLACK,
            );
        }

        surface.draw_text(pos, &self.label, FontRole::Button, caption_color);
    }
}

/// Static centered text
pub struct Label {
    rect: Rect,
    text: String,
    font: FontRole,
    color: Color,
}

impl Label {
    pub fn new(rect: Rect, text: impl Into<String>, font: FontRole, color: Color) -> Self {
        Self {
            rect,
            text: text.into(),
            font,
            color,
        }
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface, ctx: &UiContext) {
        let font = ctx.font(self.font);
        let pos = Vec2::new(
            self.rect.x + (self.rect.width - font.text_width(&self.text)) / 2.0,
            self.rect.y + (self.rect.height - font.line_height()) / 2.0,
        );
        surface.draw_text(pos, &self.text, self.font, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn button() -> Button {
        Button::new(Rect::new(10.0, 10.0, 100.0, 40.0), "Attack")
    }

    #[test]
    fn test_hover_follows_motion() {
        let mut button = button();
        button.handle_event(&UiEvent::PointerMoved {
            pos: Vec2::new(50.0, 20.0),
        });
        assert!(button.is_hovered());

        button.handle_event(&UiEvent::PointerMoved {
            pos: Vec2::new(500.0, 20.0),
        });
        assert!(!button.is_hovered());
    }

    #[test]
    fn test_primary_press_inside_fires_action() {
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);
        let mut button = button().with_action(move || counter.set(counter.get() + 1));

        button.handle_event(&UiEvent::PointerPressed {
            button: PointerButton::Primary,
            pos: Vec2::new(50.0, 20.0),
        });
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_press_outside_or_secondary_ignored() {
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);
        let mut button = button().with_action(move || counter.set(counter.get() + 1));

        button.handle_event(&UiEvent::PointerPressed {
            button: PointerButton::Primary,
            pos: Vec2::new(500.0, 20.0),
        });
        button.handle_event(&UiEvent::PointerPressed {
            button: PointerButton::Secondary,
            pos: Vec2::new(50.0, 20.0),
        });
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_press_without_action_is_noop() {
        let mut button = button();
        button.handle_event(&UiEvent::PointerPressed {
            button: PointerButton::Primary,
            pos: Vec2::new(50.0, 20.0),
        });
    }
}
