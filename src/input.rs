/// Terminal input → game commands.
///
/// Steering is level-triggered: instead of acting on each key event, the
/// loop records the frame each key was last seen and asks every frame which
/// keys are still "fresh".  Fire, start and quit are edge-triggered and come
/// out of `command_for`.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper
///   `Press` / `Repeat` / `Release` events, so keys drop out on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows up as
///   repeated presses).  Keys expire after the hold window, which is shorter
///   than the OS repeat interval, so a key stays live while it repeats.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// How long a key counts as held after its last press or repeat.  The OS
/// repeat rate is at least 15 Hz, so this is refreshed before it expires.
const HOLD_WINDOW_MS: u64 = 133;

/// The hold window expressed in frames at `fps`, rounded up.
pub fn hold_window_frames(fps: u32) -> u64 {
    ((fps as u64 * HOLD_WINDOW_MS + 999) / 1000).max(1)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Fire,
    Start,
    Quit,
    /// Left mouse button pressed on a screen cell.
    Click { column: i32, row: i32 },
}

/// The one-shot command an event triggers, if any.  Key repeats never fire.
pub fn command_for(event: &Event) -> Option<Command> {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) => match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
            KeyCode::Char(' ') => Some(Command::Fire),
            KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Start),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(Command::Click {
                column: mouse.column as i32,
                row: mouse.row as i32,
            })
        }
        _ => None,
    }
}

/// Tracks which keys are currently held.
#[derive(Debug, Default)]
pub struct KeyState {
    /// Each held key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    hold_window: u64,
}

impl KeyState {
    pub fn new(hold_window: u64) -> Self {
        KeyState {
            key_frame: HashMap::new(),
            hold_window,
        }
    }

    pub fn record(&mut self, key: &KeyEvent, frame: u64) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_frame.insert(key.code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&key.code);
            }
        }
    }

    /// True if `key` was seen within the hold window before `frame`.
    pub fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    pub fn left(&self, frame: u64) -> bool {
        self.is_held(KeyCode::Left, frame)
            || self.is_held(KeyCode::Char('a'), frame)
            || self.is_held(KeyCode::Char('A'), frame)
    }

    pub fn right(&self, frame: u64) -> bool {
        self.is_held(KeyCode::Right, frame)
            || self.is_held(KeyCode::Char('d'), frame)
            || self.is_held(KeyCode::Char('D'), frame)
    }
}
