use alien_invasion_common::color::Color;
use typed_builder::TypedBuilder;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Ship speed at the start of every game, in pixels per tick.
pub const BASE_SHIP_SPEED: f32 = 1.5;
/// Bullet speed at the start of every game, in pixels per tick.
pub const BASE_BULLET_SPEED: f32 = 3.0;
/// Horizontal alien speed at the start of every game, in pixels per tick.
pub const BASE_ALIEN_SPEED: f32 = 1.0;
/// Points per alien at the start of every game.
pub const BASE_ALIEN_POINTS: u64 = 50;

/// Horizontal direction the whole fleet is travelling in.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FleetDirection {
    #[default]
    Right,
    Left,
}

impl FleetDirection {
    /// +1.0 for right, -1.0 for left.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

/// Tunable game parameters.
///
/// The builder only exposes the static part: values that hold for the whole
/// session. The dynamic part (speeds, fleet direction, point value) always
/// starts from the `BASE_*` constants and is escalated by `increase_speed`.
///
/// ```ignore
/// let settings = Settings::builder().ship_limit(1).bullets_allowed(5).build();
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct Settings {
    #[builder(default = SCREEN_WIDTH as u32)]
    pub screen_width: u32,
    #[builder(default = SCREEN_HEIGHT as u32)]
    pub screen_height: u32,
    #[builder(default = Color::new_rgb(230, 230, 230))]
    pub bg_color: Color,

    /// Number of ships the player starts each game with.
    #[builder(default = 3)]
    pub ship_limit: u32,
    #[builder(default = 60)]
    pub ship_width: u32,
    #[builder(default = 48)]
    pub ship_height: u32,
    #[builder(default = Color::new_rgb(40, 40, 90))]
    pub ship_color: Color,

    #[builder(default = 3)]
    pub bullet_width: u32,
    #[builder(default = 15)]
    pub bullet_height: u32,
    #[builder(default = Color::new_rgb(60, 60, 60))]
    pub bullet_color: Color,
    /// Maximum number of live bullets on screen.
    #[builder(default = 3)]
    pub bullets_allowed: usize,

    #[builder(default = 60)]
    pub alien_width: u32,
    #[builder(default = 58)]
    pub alien_height: u32,
    #[builder(default = Color::new_rgb(20, 140, 60))]
    pub alien_color: Color,
    /// Pixels the fleet drops each time it hits a screen edge.
    #[builder(default = 20)]
    pub fleet_drop_speed: i32,

    /// How quickly the game speeds up after each cleared fleet.
    #[builder(default = 1.1)]
    pub speedup_scale: f32,
    /// How quickly alien point values grow after each cleared fleet.
    #[builder(default = 1.5)]
    pub score_scale: f32,

    #[builder(setter(skip), default = BASE_SHIP_SPEED)]
    pub ship_speed: f32,
    #[builder(setter(skip), default = BASE_BULLET_SPEED)]
    pub bullet_speed: f32,
    #[builder(setter(skip), default = BASE_ALIEN_SPEED)]
    pub alien_speed: f32,
    #[builder(setter(skip), default)]
    pub fleet_direction: FleetDirection,
    #[builder(setter(skip), default = BASE_ALIEN_POINTS)]
    pub alien_points: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::builder().build()
    }
}

impl Settings {
    /// Reset the settings that change throughout a game.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = BASE_SHIP_SPEED;
        self.bullet_speed = BASE_BULLET_SPEED;
        self.alien_speed = BASE_ALIEN_SPEED;
        self.fleet_direction = FleetDirection::Right;
        self.alien_points = BASE_ALIEN_POINTS;
    }

    /// Escalate speeds and alien point values after a fleet is cleared.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;

        // Truncates toward zero.
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u64;
    }
}
