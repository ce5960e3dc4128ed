mod engine;

use std::time::Instant;

use alien_invasion_common::key::Key;

use crate::entity::{Alien, Bullet, Ship};
use crate::fleet;
use crate::hud::Button;
use crate::settings::Settings;
use crate::stats::GameStats;
use crate::STUN_DURATION;

pub use engine::{LifeLoss, TickOutcome};

/// Where the current round is in its lifecycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RoundState {
    /// Waiting for the play button.
    Inactive,
    Active,
    /// A ship was just lost; the board is frozen until `until`.
    Stunned { until: Instant },
}

/// Owner of the whole game: settings, statistics, the ship and the live
/// bullet and alien collections.
pub struct Game {
    settings: Settings,
    stats: GameStats,
    ship: Ship,
    bullets: Vec<Bullet>,
    aliens: Vec<Alien>,
    play_button: Button,
    stunned_until: Option<Instant>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Game {
    /// A game sitting on the attract screen with a full fleet on display.
    pub fn new(settings: Settings) -> Self {
        let stats = GameStats::new(&settings);
        let ship = Ship::new(&settings);
        let play_button = Button::play(settings.screen_width, settings.screen_height);
        let mut aliens = Vec::new();
        fleet::populate(&settings, &mut aliens);

        Self {
            settings,
            stats,
            ship,
            bullets: Vec::new(),
            aliens,
            play_button,
            stunned_until: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn play_button(&self) -> &Button {
        &self.play_button
    }

    pub fn round_state(&self) -> RoundState {
        match (self.stats.game_active, self.stunned_until) {
            (false, _) => RoundState::Inactive,
            (true, Some(until)) => RoundState::Stunned { until },
            (true, None) => RoundState::Active,
        }
    }

    /// The pointer is only needed to press the play button.
    pub fn cursor_visible(&self) -> bool {
        !self.stats.game_active
    }

    /// Apply a key press or release.
    ///
    /// Movement flags always follow the physical key state so nothing sticks
    /// after a stun; firing only happens in an active, unstunned round.
    pub fn handle_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Right => self.ship.moving_right = pressed,
            Key::Left => self.ship.moving_left = pressed,
            Key::Space if pressed && self.round_state() == RoundState::Active => {
                self.fire_bullet();
            }
            _ => {}
        }
    }

    /// Start a new round if the click lands on the play button while idle.
    ///
    /// Returns whether a round was started.
    pub fn handle_click(&mut self, x: i32, y: i32) -> bool {
        if self.stats.game_active || !self.play_button.rect.contains(x, y) {
            return false;
        }
        self.start_round();
        true
    }

    /// Reset everything but the high score and begin playing.
    pub fn start_round(&mut self) {
        self.settings.initialize_dynamic_settings();
        self.stats.reset_stats(&self.settings);
        self.stats.game_active = true;
        self.stunned_until = None;

        self.bullets.clear();
        fleet::populate(&self.settings, &mut self.aliens);
        self.ship.center_ship();
        self.ship.stop();

        log::info!(
            "Round started with {} ships (high score {})",
            self.stats.ships_left,
            self.stats.high_score
        );
    }

    /// Fire a bullet unless the on-screen cap is reached.
    ///
    /// Returns whether a bullet was added.
    pub fn fire_bullet(&mut self) -> bool {
        if self.bullets.len() >= self.settings.bullets_allowed {
            return false;
        }
        self.bullets.push(Bullet::new(&self.settings, &self.ship));
        true
    }

    /// Advance the game by one frame at wall-clock time `now`.
    pub fn update(&mut self, now: Instant) {
        if !self.stats.game_active {
            return;
        }
        if let Some(until) = self.stunned_until {
            if now < until {
                return;
            }
            log::debug!("Stun over, resuming");
            self.stunned_until = None;
        }
        self.tick(now);
    }

    /// One simulation step: move the ship, then run the collision and
    /// progression rules.
    fn tick(&mut self, now: Instant) {
        self.ship.update(&self.settings);

        let outcome = engine::step(
            &mut self.settings,
            &mut self.stats,
            &self.ship,
            &mut self.bullets,
            &mut self.aliens,
        );

        if outcome == TickOutcome::ShipHit {
            self.ship_hit(now);
        }
    }

    fn ship_hit(&mut self, now: Instant) {
        let loss = engine::lose_life(
            &self.settings,
            &mut self.stats,
            &mut self.ship,
            &mut self.bullets,
            &mut self.aliens,
        );
        match loss {
            LifeLoss::NextShip => {
                log::debug!("Ship lost, {} left", self.stats.ships_left);
                self.stunned_until = Some(now + STUN_DURATION);
            }
            LifeLoss::GameOver => {
                log::info!(
                    "Game over at level {} with score {} (high score {})",
                    self.stats.level,
                    self.stats.score,
                    self.stats.high_score
                );
            }
        }
    }
}
