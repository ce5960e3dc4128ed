//! Play button and scoreboard overlays.

pub mod button;
pub mod scoreboard;

use alien_invasion_common::color::Color;

pub use button::Button;

/// Integer scale applied to the 4x5 font for all HUD text.
pub const TEXT_SCALE: u32 = 6;
pub const TEXT_COLOR: Color = Color::new_rgb(30, 30, 30);
