use crate::settings::Settings;

/// Statistics for one session.  Everything except `high_score` is reset
/// when a new game starts.
#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    pub game_active: bool,
}

impl GameStats {
    pub fn new(settings: &Settings, high_score: u32) -> Self {
        let mut stats = GameStats {
            ships_left: 0,
            score: 0,
            level: 1,
            high_score,
            game_active: false,
        };
        stats.reset_stats(settings);
        stats
    }

    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Promote the current score to the high score if it beats it.
    /// Returns `true` when the high score changed and should be persisted.
    pub fn record_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
