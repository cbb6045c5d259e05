//! Typewriter-animated dialogue box
//!
//! Two states: revealing (revealed < total) and finished. Each update tick
//! accumulates elapsed time; crossing the per-character interval reveals
//! exactly one more character. Word-wrap is precomputed greedily whenever
//! the text changes, and drawing truncates at the bottom margin rather
//! than overflow.

use crate::core::types::{Color, Rect, Vec2};
use crate::ui::context::{DrawSurface, FontRole, UiContext};

/// Inner padding between the box edge and its text
const MARGIN: f32 = 10.0;
/// Seconds per revealed character
const DEFAULT_REVEAL_INTERVAL: f32 = 0.2;
const BORDER_WIDTH: f32 = 2.0;

/// Stateful multi-line text renderer with typewriter reveal
#[derive(Debug, Clone)]
pub struct TextBox {
    rect: Rect,
    /// Full target text, by character
    text: Vec<char>,
    /// How many characters are revealed so far
    revealed: usize,
    timer: f32,
    reveal_interval: f32,
    /// Precomputed wrapped lines of the full text
    lines: Vec<String>,
    finished: bool,
    bg_color: Color,
}

impl TextBox {
    pub fn new(ctx: &UiContext, rect: Rect, text: &str) -> Self {
        let mut textbox = Self {
            rect,
            text: Vec::new(),
            revealed: 0,
            timer: 0.0,
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            lines: Vec::new(),
            finished: false,
            bg_color: Color::TRANSLUCENT_BLACK,
        };
        textbox.set_text(ctx, text);
        textbox
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.bg_color = color;
        self
    }

    pub fn with_reveal_interval(mut self, seconds_per_char: f32) -> Self {
        self.reveal_interval = seconds_per_char;
        self
    }

    /// Replace the text and restart the reveal from empty.
    pub fn set_text(&mut self, ctx: &UiContext, text: &str) {
        self.text = text.chars().collect();
        self.revealed = 0;
        self.timer = 0.0;
        self.finished = false;
        self.lines = wrap_text(ctx, text, self.rect.width - 2.0 * MARGIN);
    }

    /// Advance the reveal by `dt` seconds. At most one character appears
    /// per call; sub-interval remainders accumulate across calls.
    pub fn update(&mut self, dt: f32) {
        if self.revealed < self.text.len() {
            self.timer += dt;
            if self.timer >= self.reveal_interval {
                self.revealed += 1;
                self.timer = 0.0;
            }
        }
        if self.revealed == self.text.len() {
            self.finished = true;
        }
    }

    pub fn is_typing(&self) -> bool {
        !self.finished
    }

    /// Force the reveal to completion, from any state.
    pub fn skip_typing(&mut self) {
        self.revealed = self.text.len();
        self.timer = 0.0;
        self.finished = true;
    }

    /// The revealed prefix of the text
    pub fn revealed_text(&self) -> String {
        self.text[..self.revealed].iter().collect()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the box and the revealed prefix, top-down across the wrapped
    /// lines, stopping before the bottom margin is crossed.
    pub fn draw(&self, surface: &mut dyn DrawSurface, ctx: &UiContext) {
        surface.fill_rect(self.rect, self.bg_color);
        surface.stroke_rect(self.rect, self.bg_color.inverted(), BORDER_WIDTH);

        let line_height = ctx.font(FontRole::Text).line_height();
        let mut y = self.rect.y + MARGIN;
        let mut visible: &[char] = &self.text[..self.revealed];

        for line in &self.lines {
            if visible.is_empty() {
                break;
            }
            // A fully covered line renders as precomputed; the last,
            // partially revealed line renders whatever has been typed.
            let line_len = line.chars().count();
            let shown: String = if visible.len() > line_len {
                visible = &visible[line_len..];
                line.clone()
            } else {
                let head = visible;
                visible = &[];
                head.iter().collect()
            };
            surface.draw_text(
                Vec2::new(self.rect.x + MARGIN, y),
                &shown,
                FontRole::Text,
                Color::LIGHT_GRAY,
            );
            y += line_height;
            if y + line_height > self.rect.bottom() - MARGIN {
                break;
            }
        }
    }
}

/// Greedy word-wrap: a word (with its trailing space) joins the current
/// line iff the accumulated rendered width stays within `max_width`.
fn wrap_text(ctx: &UiContext, text: &str, max_width: f32) -> Vec<String> {
    let font = ctx.font(FontRole::Text);
    let mut lines = Vec::new();
    let mut current_line: Vec<&str> = Vec::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = font.text_width(&format!("{word} "));
        if current_width + word_width <= max_width {
            current_line.push(word);
            current_width += word_width;
        } else {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_width = word_width;
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }
    lines
}
