use std::time::Duration;

pub mod app;
pub mod entity;
pub mod fleet;
pub mod game;
pub mod hud;
pub mod rect;
pub mod render;
pub mod settings;
pub mod stats;

pub use app::AlienInvasionApp;
pub use game::{Game, RoundState};
pub use settings::Settings;
pub use stats::GameStats;

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: usize = 1200;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 800;
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 1;

/// How long the simulation stays frozen after a ship is lost.
pub const STUN_DURATION: Duration = Duration::from_millis(500);
