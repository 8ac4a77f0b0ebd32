mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{debug, error, info, warn};

use alien_invasion::compute::{
    check_play_button, fire_bullet, init_state, start_game, steer_ship, tick,
};
use alien_invasion::config::Args;
use alien_invasion::entities::{GameEvent, GameState};
use alien_invasion::high_score::HighScoreFile;
use alien_invasion::input::{command_for, hold_window_frames, Command, KeyState};
use alien_invasion::settings::Settings;

/// Pause after the ship is lost, before the next fleet appears.
const SHIP_HIT_PAUSE: Duration = Duration::from_millis(500);

/// Smallest terminal that fits at least one row of aliens above the ship.
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 16;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The game owns the terminal, so logs only go to a file when asked for.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── High-score persistence ────────────────────────────────────────────────────

/// Promote the current score if it beats the high score, and write it out.
fn store_high_score(state: &mut GameState, store: &HighScoreFile) {
    match store.store(&mut state.stats) {
        Ok(true) => info!(
            "saved high score {} to {}",
            state.stats.high_score,
            store.path().display()
        ),
        Ok(false) => {}
        Err(e) => error!("failed to save high score: {:#}", e),
    }
}

fn save_high_score(store: &HighScoreFile, score: u32) {
    match store.save(score) {
        Ok(()) => info!("saved high score {} to {}", score, store.path().display()),
        Err(e) => error!("failed to save high score: {:#}", e),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    args: &Args,
    store: &HighScoreFile,
) -> Result<()> {
    let frame_time = Duration::from_secs(1) / args.fps;
    let mut keys = KeyState::new(hold_window_frames(args.fps));

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = &ev {
                keys.record(key, state.frame);
            }
            match command_for(&ev) {
                Some(Command::Quit) => {
                    info!("quit requested");
                    store_high_score(state, store);
                    return Ok(());
                }
                Some(Command::Fire) => *state = fire_bullet(state),
                Some(Command::Start) => *state = start_game(state),
                Some(Command::Click { column, row }) => {
                    *state = check_play_button(state, column, row);
                }
                None => {}
            }
        }

        let frame = state.frame;
        *state = steer_ship(state, keys.left(frame), keys.right(frame));

        let was_active = state.stats.game_active;
        let (next, events) = tick(state);
        *state = next;
        if !was_active && state.stats.game_active {
            info!("new game started");
        }

        let pause = events.iter().any(GameEvent::pauses_play);
        for event in events {
            match event {
                GameEvent::AliensDestroyed { count, points } => {
                    debug!("{} aliens down, +{}", count, points);
                }
                GameEvent::FleetCleared { level } => info!("fleet cleared, level {}", level),
                GameEvent::ShipLost { ships_left } => {
                    info!("ship lost, {} left", ships_left);
                }
                GameEvent::GameOver {
                    score,
                    new_high_score,
                } => {
                    info!("game over, score {}", score);
                    if new_high_score {
                        save_high_score(store, state.stats.high_score);
                    }
                }
            }
        }

        // Hold the frame the ship was hit on before showing the new fleet
        if pause {
            thread::sleep(SHIP_HIT_PAUSE);
        }

        display::render(out, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let store = HighScoreFile::new(args.high_score_path());
    let high_score = store.load().unwrap_or_else(|e| {
        warn!("could not load high score, starting from 0: {:#}", e);
        0
    });
    info!("high score {} from {}", high_score, store.path().display());

    let (width, height) = terminal::size().context("querying terminal size")?;
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        bail!(
            "terminal is {}x{}, need at least {}x{}",
            width,
            height,
            MIN_WIDTH,
            MIN_HEIGHT
        );
    }

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread to blocking event reads so the game loop never
    // blocks on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &args, &store, high_score, width, height);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    args: &Args,
    store: &HighScoreFile,
    high_score: u32,
    width: u16,
    height: u16,
) -> Result<()> {
    let mut settings = Settings::new(width as i32, height as i32);
    args.apply(&mut settings);
    info!("screen {}x{}, {} fps", width, height, args.fps);

    let mut state = init_state(settings, high_score);
    game_loop(out, &mut state, rx, args, store)
}
