use alien_invasion::entities::*;
use alien_invasion::settings::Settings;

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_edges_and_centre() {
    let r = Rect::new(10, 4, 3, 2);
    assert_eq!(r.left(), 10);
    assert_eq!(r.right(), 13);
    assert_eq!(r.top(), 4);
    assert_eq!(r.bottom(), 6);
    assert_eq!(r.centerx(), 11);
    assert_eq!(r.centery(), 5);
}

#[test]
fn colliderect_requires_overlap() {
    let a = Rect::new(0, 0, 3, 2);
    assert!(a.colliderect(&Rect::new(2, 1, 3, 2)));
    assert!(a.colliderect(&Rect::new(1, 0, 1, 1))); // fully inside
    // Touching edges do not collide
    assert!(!a.colliderect(&Rect::new(3, 0, 3, 2)));
    assert!(!a.colliderect(&Rect::new(0, 2, 3, 2)));
    // Empty rect never collides
    assert!(!a.colliderect(&Rect::new(1, 1, 0, 0)));
}

#[test]
fn collidepoint_excludes_right_and_bottom() {
    let r = Rect::new(5, 5, 4, 2);
    assert!(r.collidepoint(5, 5));
    assert!(r.collidepoint(8, 6));
    assert!(!r.collidepoint(9, 5));
    assert!(!r.collidepoint(5, 7));
    assert!(!r.collidepoint(4, 5));
}

// ── Sprites ───────────────────────────────────────────────────────────────────

#[test]
fn ship_starts_at_mid_bottom() {
    let settings = Settings::new(81, 30);
    let ship = Ship::new(&settings);
    assert_eq!(ship.rect, Rect::new(39, 28, 3, 2));
    assert_eq!(ship.x, 39.0);
    assert!(!ship.moving_left && !ship.moving_right);
}

#[test]
fn center_ship_restores_position() {
    let settings = Settings::new(80, 24);
    let mut ship = Ship::new(&settings);
    ship.x = 3.5;
    ship.rect.x = 3;
    ship.center_ship(&settings);
    assert_eq!(ship.rect.x, 39);
    assert_eq!(ship.x, 39.0);
}

#[test]
fn bullet_starts_at_ship_midtop() {
    let mut settings = Settings::new(80, 24);
    settings.bullet_width = 3;
    settings.bullet_height = 2;
    let ship = Ship::new(&settings);
    let bullet = Bullet::new(&settings, &ship);
    assert_eq!(bullet.rect, Rect::new(39, 22, 3, 2));
    assert_eq!(bullet.rect.centerx(), ship.rect.centerx());
    assert_eq!(bullet.y, 22.0);
}

#[test]
fn alien_edges() {
    let settings = Settings::new(80, 24);
    assert!(Alien::new(&settings, 0, 5).check_edges(&settings));
    assert!(Alien::new(&settings, 77, 5).check_edges(&settings));
    assert!(!Alien::new(&settings, 1, 5).check_edges(&settings));
    assert!(!Alien::new(&settings, 76, 5).check_edges(&settings));
}

#[test]
fn button_is_centred() {
    let settings = Settings::new(80, 24);
    let button = Button::new(&settings, "Play");
    assert_eq!(button.rect, Rect::new(34, 11, 12, 3));
    assert_eq!(button.rect.centerx(), 40);
    assert_eq!(button.msg, "Play");
}

// ── GameState ─────────────────────────────────────────────────────────────────

#[test]
fn game_state_clone_is_independent() {
    let settings = Settings::new(80, 24);
    let original = GameState {
        stats: alien_invasion::stats::GameStats::new(&settings, 0),
        ship: Ship::new(&settings),
        bullets: Vec::new(),
        aliens: Vec::new(),
        play_button: Button::new(&settings, "Play"),
        frame: 0,
        settings,
    };
    let mut cloned = original.clone();

    cloned.ship.x = 99.0;
    cloned.stats.score = 999;
    cloned.settings.fleet_direction = -1;
    cloned.aliens.push(Alien::new(&cloned.settings, 5, 5));

    assert_eq!(original.ship.x, 39.0);
    assert_eq!(original.stats.score, 0);
    assert_eq!(original.settings.fleet_direction, 1);
    assert!(original.aliens.is_empty());
}

#[test]
fn only_ship_loss_pauses_play() {
    assert!(GameEvent::ShipLost { ships_left: 2 }.pauses_play());
    assert!(!GameEvent::AliensDestroyed { count: 1, points: 50 }.pauses_play());
    assert!(!GameEvent::FleetCleared { level: 2 }.pauses_play());
    assert!(!GameEvent::GameOver { score: 0, new_high_score: false }.pauses_play());
}
