//! Dialogue and menu UI primitives
//!
//! The rendering backend and event loop live outside the crate. Hosts hand
//! the components a [`UiContext`] (font metrics with application lifetime),
//! a [`DrawSurface`] each frame, and raw [`UiEvent`]s as they arrive.

pub mod context;
pub mod textbox;
pub mod widgets;

pub use context::{DrawSurface, FontMetrics, FontRole, MonospaceMetrics, UiContext};
pub use textbox::TextBox;
pub use widgets::{Button, Label, PointerButton, UiEvent};
