//! Game tunables.
//!
//! Static values are fixed for the session; dynamic values are reset by
//! `initialize_dynamic_settings` at the start of every game and scaled up on
//! every level.  Distances are in terminal cells, speeds in cells per frame.

/// An RGB triple; the renderer maps it onto a terminal colour.
pub type Rgb = (u8, u8, u8);

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    // ── Screen ────────────────────────────────────────────────────────────────
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Rgb,

    // ── Ship ──────────────────────────────────────────────────────────────────
    pub ship_limit: u32,
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_color: Rgb,

    // ── Bullets ───────────────────────────────────────────────────────────────
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Rgb,
    pub bullets_allowed: usize,

    // ── Aliens ────────────────────────────────────────────────────────────────
    pub alien_width: i32,
    pub alien_height: i32,
    pub alien_color: Rgb,
    pub fleet_drop_speed: i32,

    // ── Play button ───────────────────────────────────────────────────────────
    pub button_width: i32,
    pub button_height: i32,
    pub button_color: Rgb,
    pub button_text_color: Rgb,

    // ── Level-up scaling ──────────────────────────────────────────────────────
    /// How quickly the game speeds up.
    pub speedup_scale: f32,
    /// How quickly alien point values increase.
    pub score_scale: f32,

    // ── Dynamic ───────────────────────────────────────────────────────────────
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// 1 moves the fleet right, -1 moves it left.
    pub fleet_direction: i32,
    pub alien_points: u32,
}

impl Settings {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        let mut settings = Settings {
            screen_width,
            screen_height,
            bg_color: (12, 12, 28),

            ship_limit: 3,
            ship_width: 3,
            ship_height: 2,
            ship_color: (230, 230, 230),

            bullet_width: 1,
            bullet_height: 1,
            bullet_color: (255, 214, 0),
            bullets_allowed: 3,

            alien_width: 3,
            alien_height: 2,
            alien_color: (80, 220, 100),
            fleet_drop_speed: 1,

            button_width: 12,
            button_height: 3,
            button_color: (0, 135, 0),
            button_text_color: (255, 255, 255),

            speedup_scale: 1.1,
            score_scale: 1.5,

            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            fleet_direction: 1,
            alien_points: 0,
        };
        settings.initialize_dynamic_settings();
        settings
    }

    /// Reset the settings that change throughout the game.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = 0.75;
        self.bullet_speed = 0.5;
        self.alien_speed = 0.2;
        self.fleet_direction = 1;
        self.alien_points = 50;
    }

    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
    }

    /// Float-to-int `as` saturates, so this tops out at `u32::MAX`.
    pub fn increase_point_values(&mut self) {
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }
}
