use crate::settings::Settings;

/// Statistics tracked for a running game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u64,
    pub level: u32,
    /// Best score seen during this process; never reset.
    pub high_score: u64,
    /// False until the play button is clicked, false again after the last ship.
    pub game_active: bool,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        let mut stats = Self {
            ships_left: 0,
            score: 0,
            level: 1,
            high_score: 0,
            game_active: false,
        };
        stats.reset_stats(settings);
        stats
    }

    /// Reset the per-game counters, leaving `high_score` and `game_active` alone.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Raise the high score to the current score if it has been beaten.
    pub fn check_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}
