/// HUD text derived from the game statistics.

use crate::stats::GameStats;

/// Prepared HUD strings for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scoreboard {
    pub score: String,
    pub high_score: String,
    pub level: String,
    pub ships_left: u32,
}

impl Scoreboard {
    pub fn new(stats: &GameStats) -> Self {
        Scoreboard {
            score: format_score(stats.score),
            high_score: format_score(stats.high_score),
            level: stats.level.to_string(),
            ships_left: stats.ships_left,
        }
    }

    /// Column where the centred high score starts on a screen `width` wide.
    pub fn high_score_column(&self, width: i32) -> i32 {
        width / 2 - self.high_score.chars().count() as i32 / 2
    }

    /// Ship icons sit two columns apart starting at column 1.  Only those
    /// that end at least one blank column before the high score are shown.
    pub fn ship_icons_shown(&self, width: i32) -> u32 {
        let fit = (self.high_score_column(width) - 1).max(0) / 2;
        self.ships_left.min(fit as u32)
    }
}

/// Round to the nearest ten (ties to the even ten) and group thousands with
/// commas: 1234 → "1,230".
pub fn format_score(score: u32) -> String {
    group_thousands(round_to_ten(score))
}

fn round_to_ten(value: u32) -> u64 {
    let value = value as u64;
    let tens = value / 10;
    let rem = value % 10;
    let tens = match rem {
        0..=4 => tens,
        6..=9 => tens + 1,
        _ if tens % 2 == 0 => tens,
        _ => tens + 1,
    };
    tens * 10
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
