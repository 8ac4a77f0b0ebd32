use alien_invasion::settings::Settings;
use alien_invasion::stats::GameStats;

// ── Settings ──────────────────────────────────────────────────────────────────

#[test]
fn new_settings_use_screen_size_and_defaults() {
    let s = Settings::new(120, 40);
    assert_eq!(s.screen_width, 120);
    assert_eq!(s.screen_height, 40);
    assert_eq!(s.ship_limit, 3);
    assert_eq!(s.bullets_allowed, 3);
    assert_eq!(s.fleet_direction, 1);
    assert_eq!(s.alien_points, 50);
    assert_eq!(s.ship_speed, 0.75);
    assert_eq!(s.bullet_speed, 0.5);
    assert_eq!(s.alien_speed, 0.2);
}

#[test]
fn increase_speed_scales_all_speeds() {
    let mut s = Settings::new(80, 24);
    s.speedup_scale = 2.0;
    s.increase_speed();
    assert_eq!(s.ship_speed, 1.5);
    assert_eq!(s.bullet_speed, 1.0);
    assert_eq!(s.alien_speed, 0.4);
    // Point values are scaled separately
    assert_eq!(s.alien_points, 50);
}

#[test]
fn increase_point_values_truncates() {
    let mut s = Settings::new(80, 24);
    let mut seen = Vec::new();
    for _ in 0..4 {
        s.increase_point_values();
        seen.push(s.alien_points);
    }
    assert_eq!(seen, vec![75, 112, 168, 252]);
}

#[test]
fn point_values_top_out_at_maximum() {
    let mut s = Settings::new(80, 24);
    for _ in 0..100 {
        s.increase_point_values();
    }
    assert_eq!(s.alien_points, u32::MAX);
}

#[test]
fn initialize_dynamic_settings_undoes_level_ups() {
    let mut s = Settings::new(80, 24);
    let fresh = s.clone();
    for _ in 0..5 {
        s.increase_speed();
        s.increase_point_values();
    }
    s.fleet_direction = -1;
    s.initialize_dynamic_settings();
    assert_eq!(s, fresh);
}

// ── GameStats ─────────────────────────────────────────────────────────────────

#[test]
fn new_stats_are_inactive_and_keep_high_score() {
    let settings = Settings::new(80, 24);
    let stats = GameStats::new(&settings, 4200);
    assert!(!stats.game_active);
    assert_eq!(stats.ships_left, 3);
    assert_eq!(stats.score, 0);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.high_score, 4200);
}

#[test]
fn reset_stats_leaves_high_score_alone() {
    let mut settings = Settings::new(80, 24);
    settings.ship_limit = 5;
    let mut stats = GameStats::new(&settings, 10);
    stats.score = 900;
    stats.level = 7;
    stats.ships_left = 0;
    stats.high_score = 900;
    stats.reset_stats(&settings);
    assert_eq!(stats.ships_left, 5);
    assert_eq!(stats.score, 0);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.high_score, 900);
}

#[test]
fn record_high_score_only_on_improvement() {
    let settings = Settings::new(80, 24);
    let mut stats = GameStats::new(&settings, 500);

    stats.score = 500;
    assert!(!stats.record_high_score());
    assert_eq!(stats.high_score, 500);

    stats.score = 650;
    assert!(stats.record_high_score());
    assert_eq!(stats.high_score, 650);

    // Already recorded
    assert!(!stats.record_high_score());
}
