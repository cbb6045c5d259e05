//! Explicit rendering context for the UI layer
//!
//! Fonts are measured, never owned, by this crate: the host constructs a
//! [`UiContext`] with whatever font objects its renderer uses and keeps it
//! alive for the application lifetime. No module-scope font state.

use serde::{Deserialize, Serialize};

use crate::core::types::{Color, Rect, Vec2};

/// Which configured font face a draw call refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontRole {
    /// Body text (dialogue, labels)
    Text,
    /// Button captions
    Button,
}

/// Text measurement provided by the host's font stack
pub trait FontMetrics {
    /// Rendered width of `text` in surface units
    fn text_width(&self, text: &str) -> f32;
    /// Vertical advance between lines
    fn line_height(&self) -> f32;
}

/// The canvas handle supplied by the external renderer each frame
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);
    /// Draw `text` with its top-left corner at `pos`
    fn draw_text(&mut self, pos: Vec2, text: &str, font: FontRole, color: Color);
}

/// Font metrics for the UI components, constructed once by the host
pub struct UiContext {
    text_font: Box<dyn FontMetrics>,
    button_font: Box<dyn FontMetrics>,
}

impl UiContext {
    pub fn new(text_font: Box<dyn FontMetrics>, button_font: Box<dyn FontMetrics>) -> Self {
        Self {
            text_font,
            button_font,
        }
    }

    pub fn font(&self, role: FontRole) -> &dyn FontMetrics {
        match role {
            FontRole::Text => self.text_font.as_ref(),
            FontRole::Button => self.button_font.as_ref(),
        }
    }
}

/// Fixed-advance metrics; enough for tests and terminal-style hosts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonospaceMetrics {
    pub char_width: f32,
    pub line_height: f32,
}

impl FontMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
