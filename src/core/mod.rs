pub mod error;
pub mod types;

pub use error::{HollowError, Result};
pub use types::{Color, Rect, Size, Vec2};
