/// Rendering layer — all terminal output lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use alien_invasion::entities::{Alien, Bullet, Button, GameState, Rect, Ship};
use alien_invasion::scoreboard::Scoreboard;
use alien_invasion::settings::Rgb;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SCORE: Color = Color::White;
const C_HIGH_SCORE: Color = Color::Yellow;
const C_LEVEL: Color = Color::Cyan;
const C_SHIPS_LEFT: Color = Color::Red;

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let screen = Rect::new(
        0,
        0,
        state.settings.screen_width,
        state.settings.screen_height,
    );

    out.queue(style::SetBackgroundColor(rgb(state.settings.bg_color)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    out.queue(style::SetForegroundColor(rgb(state.settings.bullet_color)))?;
    for bullet in &state.bullets {
        draw_bullet(out, &screen, bullet)?;
    }

    draw_ship(out, &screen, &state.ship, rgb(state.settings.ship_color))?;

    out.queue(style::SetForegroundColor(rgb(state.settings.alien_color)))?;
    for alien in &state.aliens {
        draw_alien(out, &screen, alien)?;
    }

    draw_scoreboard(out, &screen, &Scoreboard::new(&state.stats))?;

    if !state.stats.game_active {
        draw_button(
            out,
            &state.play_button,
            rgb(state.settings.button_color),
            rgb(state.settings.button_text_color),
        )?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

/// Print `text` at `(x, y)`, skipping it if the row or column is off screen.
fn put<W: Write>(out: &mut W, screen: &Rect, x: i32, y: i32, text: &str) -> std::io::Result<()> {
    if !screen.collidepoint(x, y) {
        return Ok(());
    }
    out.queue(cursor::MoveTo(x as u16, y as u16))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Sprites ───────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(
    out: &mut W,
    screen: &Rect,
    ship: &Ship,
    color: Color,
) -> std::io::Result<()> {
    //   ▲      ← nose, centre column
    //  /█\     ← hull
    out.queue(style::SetForegroundColor(color))?;
    put(out, screen, ship.rect.centerx(), ship.rect.top(), "▲")?;
    put(out, screen, ship.rect.left(), ship.rect.top() + 1, "/█\\")?;
    Ok(())
}

fn draw_alien<W: Write>(out: &mut W, screen: &Rect, alien: &Alien) -> std::io::Result<()> {
    //  ▛▀▜
    //  ▘ ▝
    put(out, screen, alien.rect.left(), alien.rect.top(), "▛▀▜")?;
    put(out, screen, alien.rect.left(), alien.rect.top() + 1, "▘ ▝")?;
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, screen: &Rect, bullet: &Bullet) -> std::io::Result<()> {
    for row in bullet.rect.top()..bullet.rect.bottom() {
        for col in bullet.rect.left()..bullet.rect.right() {
            put(out, screen, col, row, "┃")?;
        }
    }
    Ok(())
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

fn draw_scoreboard<W: Write>(
    out: &mut W,
    screen: &Rect,
    board: &Scoreboard,
) -> std::io::Result<()> {
    // Score — top right, level underneath
    out.queue(style::SetForegroundColor(C_SCORE))?;
    let x = screen.right() - 1 - board.score.chars().count() as i32;
    put(out, screen, x, 0, &board.score)?;

    out.queue(style::SetForegroundColor(C_LEVEL))?;
    let x = screen.right() - 1 - board.level.chars().count() as i32;
    put(out, screen, x, 1, &board.level)?;

    // High score — top centre
    out.queue(style::SetForegroundColor(C_HIGH_SCORE))?;
    let x = board.high_score_column(screen.w);
    put(out, screen, x, 0, &board.high_score)?;

    // Ships left — top left
    out.queue(style::SetForegroundColor(C_SHIPS_LEFT))?;
    for i in 0..board.ship_icons_shown(screen.w) as i32 {
        put(out, screen, 1 + i * 2, 0, "▲")?;
    }
    Ok(())
}

// ── Play button ───────────────────────────────────────────────────────────────

fn draw_button<W: Write>(
    out: &mut W,
    button: &Button,
    fill: Color,
    text: Color,
) -> std::io::Result<()> {
    let r = &button.rect;
    let blank = " ".repeat(r.w.max(0) as usize);

    out.queue(style::SetBackgroundColor(fill))?;
    for row in r.top()..r.bottom() {
        if row < 0 || r.left() < 0 {
            continue;
        }
        out.queue(cursor::MoveTo(r.left() as u16, row as u16))?;
        out.queue(Print(&blank))?;
    }

    let col = r.centerx() - button.msg.chars().count() as i32 / 2;
    if col >= 0 && r.centery() >= 0 {
        out.queue(cursor::MoveTo(col as u16, r.centery() as u16))?;
        out.queue(style::SetForegroundColor(text))?;
        out.queue(Print(&button.msg))?;
    }
    Ok(())
}
