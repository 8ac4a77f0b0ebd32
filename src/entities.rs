/// All game entity types.  Plain data plus the geometry needed to place
/// them; the rules that move them live in `compute`.

use crate::settings::Settings;
use crate::stats::GameStats;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in screen cells.  `x`/`y` are the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn centerx(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn centery(&self) -> i32 {
        self.y + self.h / 2
    }

    /// True when the two rectangles share at least one cell.  Touching edges
    /// do not count, and an empty rectangle collides with nothing.
    pub fn colliderect(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True when the cell `(x, y)` lies inside the rectangle.  The right and
    /// bottom edges are exclusive.
    pub fn collidepoint(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub rect: Rect,
    /// Exact horizontal position; `rect.x` is its truncation.
    pub x: f32,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            rect: Rect::new(0, 0, settings.ship_width, settings.ship_height),
            x: 0.0,
            moving_right: false,
            moving_left: false,
        };
        ship.center_ship(settings);
        ship
    }

    /// Put the ship's mid-bottom on the screen's mid-bottom.
    pub fn center_ship(&mut self, settings: &Settings) {
        self.rect.x = settings.screen_width / 2 - self.rect.w / 2;
        self.rect.y = settings.screen_height - self.rect.h;
        self.x = self.rect.x as f32;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
    /// Exact vertical position; `rect.y` is its truncation.
    pub y: f32,
}

impl Bullet {
    /// A bullet whose mid-top sits on the ship's mid-top.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let rect = Rect::new(
            ship.rect.centerx() - settings.bullet_width / 2,
            ship.rect.top(),
            settings.bullet_width,
            settings.bullet_height,
        );
        Bullet { rect, y: rect.y as f32 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub rect: Rect,
    /// Exact horizontal position; `rect.x` is its truncation.
    pub x: f32,
}

impl Alien {
    pub fn new(settings: &Settings, x: i32, y: i32) -> Self {
        Alien {
            rect: Rect::new(x, y, settings.alien_width, settings.alien_height),
            x: x as f32,
        }
    }

    /// True if the alien touches either side of the screen.
    pub fn check_edges(&self, settings: &Settings) -> bool {
        self.rect.right() >= settings.screen_width || self.rect.left() <= 0
    }
}

// ── Play button ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub msg: String,
}

impl Button {
    /// A button centred on the screen.
    pub fn new(settings: &Settings, msg: &str) -> Self {
        let w = settings.button_width;
        let h = settings.button_height;
        Button {
            rect: Rect::new(
                settings.screen_width / 2 - w / 2,
                settings.screen_height / 2 - h / 2,
                w,
                h,
            ),
            msg: msg.to_string(),
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything a frame needs.  Cloneable so the rules in `compute` can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub play_button: Button,
    pub frame: u64,
}

/// Things that happened during a frame that the loop outside the rules
/// needs to react to (pausing, persisting, logging).
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    AliensDestroyed { count: u32, points: u32 },
    FleetCleared { level: u32 },
    ShipLost { ships_left: u32 },
    GameOver { score: u32, new_high_score: bool },
}

impl GameEvent {
    /// Events after which the loop holds the current picture for a moment
    /// before drawing the next frame.
    pub fn pauses_play(&self) -> bool {
        matches!(self, GameEvent::ShipLost { .. })
    }
}
