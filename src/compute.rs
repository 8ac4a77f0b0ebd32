/// Game rules.
///
/// Every public function takes an immutable reference to the current
/// `GameState` and returns a brand-new `GameState`.  Anything the outer loop
/// must react to (the pause after losing a ship, persisting a high score) is
/// reported as a `GameEvent` instead of being done here.

use crate::entities::{Alien, Bullet, Button, GameEvent, GameState, Ship};
use crate::settings::Settings;
use crate::stats::GameStats;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the session state.  The game starts inactive, waiting for Play.
pub fn init_state(settings: Settings, high_score: u32) -> GameState {
    GameState {
        stats: GameStats::new(&settings, high_score),
        ship: Ship::new(&settings),
        bullets: Vec::new(),
        aliens: create_fleet(&settings),
        play_button: Button::new(&settings, "Play"),
        frame: 0,
        settings,
    }
}

/// Lay out a fleet: one alien width/height of margin, one alien of spacing
/// between columns and rows, and room left above the ship.
pub fn create_fleet(settings: &Settings) -> Vec<Alien> {
    let w = settings.alien_width;
    let h = settings.alien_height;
    let mut aliens = Vec::new();
    if w <= 0 || h <= 0 {
        return aliens;
    }

    let mut y = h;
    while y < settings.screen_height - 6 * h {
        let mut x = w;
        while x < settings.screen_width - 2 * w {
            aliens.push(Alien::new(settings, x, y));
            x += 2 * w;
        }
        y += 2 * h;
    }
    aliens
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Set the ship's movement flags from the currently held keys.
pub fn steer_ship(state: &GameState, left: bool, right: bool) -> GameState {
    GameState {
        ship: Ship {
            moving_left: left,
            moving_right: right,
            ..state.ship.clone()
        },
        ..state.clone()
    }
}

/// Fire a bullet from the ship, capped at `bullets_allowed` on screen.
pub fn fire_bullet(state: &GameState) -> GameState {
    if !state.stats.game_active || state.bullets.len() >= state.settings.bullets_allowed {
        return state.clone();
    }
    let mut bullets = state.bullets.clone();
    bullets.push(Bullet::new(&state.settings, &state.ship));
    GameState {
        bullets,
        ..state.clone()
    }
}

/// Start a new game.  Ignored while a game is already running.
pub fn start_game(state: &GameState) -> GameState {
    if state.stats.game_active {
        return state.clone();
    }
    let mut next = state.clone();
    next.settings.initialize_dynamic_settings();
    next.stats.reset_stats(&next.settings);
    next.stats.game_active = true;
    reset_objects(&mut next);
    next
}

/// Start a new game if the click at `(column, row)` landed on Play.
pub fn check_play_button(state: &GameState, column: i32, row: i32) -> GameState {
    if state.play_button.rect.collidepoint(column, row) {
        start_game(state)
    } else {
        state.clone()
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
pub fn tick(state: &GameState) -> (GameState, Vec<GameEvent>) {
    let mut next = state.clone();
    let mut events = Vec::new();
    next.frame += 1;

    if next.stats.game_active {
        update_ship(&mut next);
        update_bullets(&mut next, &mut events);
        update_aliens(&mut next, &mut events);
    } else {
        next.aliens.clear();
        next.bullets.clear();
    }

    (next, events)
}

fn update_ship(state: &mut GameState) {
    let settings = &state.settings;
    let ship = &mut state.ship;

    if ship.moving_right && ship.rect.right() < settings.screen_width {
        ship.x += settings.ship_speed;
    }
    if ship.moving_left && ship.rect.left() > 0 {
        ship.x -= settings.ship_speed;
    }
    ship.rect.x = ship.x.floor() as i32;
}

fn update_bullets(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let speed = state.settings.bullet_speed;
    for bullet in &mut state.bullets {
        bullet.y -= speed;
        bullet.rect.y = bullet.y.floor() as i32;
    }

    // Bullets that have left the top of the screen
    state.bullets.retain(|b| b.rect.bottom() > 0);

    check_bullet_alien_collisions(state, events);
}

fn check_bullet_alien_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    // A bullet takes out every alien it overlaps and is spent; an alien
    // removed by an earlier bullet cannot be counted again.
    let bullets = std::mem::take(&mut state.bullets);
    let mut survivors = Vec::with_capacity(bullets.len());
    let mut destroyed: u32 = 0;

    for bullet in bullets {
        let before = state.aliens.len();
        state.aliens.retain(|alien| !alien.rect.colliderect(&bullet.rect));
        let hit = (before - state.aliens.len()) as u32;
        if hit == 0 {
            survivors.push(bullet);
        } else {
            destroyed += hit;
        }
    }
    state.bullets = survivors;

    if destroyed > 0 {
        // Point values grow 1.5x per level; pin at the top rather than wrap.
        let points = state.settings.alien_points.saturating_mul(destroyed);
        state.stats.score = state.stats.score.saturating_add(points);
        events.push(GameEvent::AliensDestroyed {
            count: destroyed,
            points,
        });
    }

    if state.aliens.is_empty() {
        state.bullets.clear();
        state.aliens = create_fleet(&state.settings);
        state.settings.increase_speed();
        state.settings.increase_point_values();
        state.stats.level += 1;
        events.push(GameEvent::FleetCleared {
            level: state.stats.level,
        });
    }
}

fn update_aliens(state: &mut GameState, events: &mut Vec<GameEvent>) {
    check_fleet_edges(state);

    let dx = state.settings.alien_speed * state.settings.fleet_direction as f32;
    for alien in &mut state.aliens {
        alien.x += dx;
        alien.rect.x = alien.x.floor() as i32;
    }

    let ship_rect = state.ship.rect;
    if state.aliens.iter().any(|a| a.rect.colliderect(&ship_rect)) {
        ship_hit(state, events);
        return;
    }

    let bottom = state.settings.screen_height;
    if state.aliens.iter().any(|a| a.rect.bottom() >= bottom) {
        ship_hit(state, events);
    }
}

/// Drop the fleet and reverse it if any alien touches a side.
fn check_fleet_edges(state: &mut GameState) {
    let settings = &state.settings;
    if !state.aliens.iter().any(|a| a.check_edges(settings)) {
        return;
    }
    let drop = settings.fleet_drop_speed;
    for alien in &mut state.aliens {
        alien.rect.y += drop;
    }
    state.settings.fleet_direction *= -1;
}

fn ship_hit(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.stats.ships_left > 0 {
        state.stats.ships_left -= 1;
        reset_objects(state);
        events.push(GameEvent::ShipLost {
            ships_left: state.stats.ships_left,
        });
    } else {
        let new_high_score = state.stats.record_high_score();
        state.stats.game_active = false;
        events.push(GameEvent::GameOver {
            score: state.stats.score,
            new_high_score,
        });
    }
}

/// Fresh fleet, no bullets, ship back in the middle.
fn reset_objects(state: &mut GameState) {
    state.aliens = create_fleet(&state.settings);
    state.bullets.clear();
    state.ship.center_ship(&state.settings);
}
