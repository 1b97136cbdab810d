// Key repeat and debounce
//
// Terminals differ in whether they report key release and how fast they
// auto-repeat. Scroll keys should repeat smoothly while held; action keys
// (Enter, nav shortcuts, q) should fire once per press even on terminals
// that never send a release.

use crossterm::event::KeyCode;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Gap after which a held action key may fire again
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// How a key behaves when pressed or held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Fire once per press
    StateChange,
    /// Fire on press, then repeat after an initial delay
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Line scrolling
    pub const SCROLL: KeyBehavior = KeyBehavior::Repeatable {
        initial_delay: Duration::from_millis(300),
        repeat_interval: Duration::from_millis(30),
    };

    /// Page scrolling and the nav cursor
    pub const PAGE: KeyBehavior = KeyBehavior::Repeatable {
        initial_delay: Duration::from_millis(400),
        repeat_interval: Duration::from_millis(120),
    };

    /// Default behavior for a key on the page
    pub fn for_key(key: KeyCode) -> Self {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => Self::SCROLL,
            KeyCode::PageUp | KeyCode::PageDown | KeyCode::Left | KeyCode::Right => Self::PAGE,
            _ => Self::StateChange,
        }
    }
}

/// Timing of a key that is currently held
#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
    last_seen: Instant,
}

impl Held {
    fn new(now: Instant) -> Self {
        Self {
            since: now,
            last_fired: now,
            last_seen: now,
        }
    }
}

/// Per-key press tracking
#[derive(Debug, Default)]
pub struct InputHandler {
    held: HashMap<KeyCode, Held>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press; returns true if the action should fire
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let held = match self.held.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                entry.insert(Held::new(now));
                return true;
            }
        };

        // Terminals without release events: a long gap means a new press
        let gap = now.saturating_duration_since(held.last_seen);
        held.last_seen = now;
        if gap >= ACTION_DEBOUNCE {
            *held = Held::new(now);
            return true;
        }

        let fire = match KeyBehavior::for_key(key) {
            KeyBehavior::StateChange => false,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.saturating_duration_since(held.since) >= initial_delay
                    && now.saturating_duration_since(held.last_fired) >= repeat_interval
            }
        };

        if fire {
            held.last_fired = now;
        }
        fire
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Forget every held key (focus changes, modal close)
    pub fn reset(&mut self) {
        self.held.clear();
    }
}
