//! Typed-text looper for the hero role line.
//!
//! A self-rescheduling animation driven by the main loop's fixed 100 ms
//! tick: one character per tick, hold the full string, clear, rest,
//! repeat for the lifetime of the application.

/// The string revealed by the animation.
pub const TYPED_TEXT: &str = "Full Stack Developer.";

/// Ticks from startup to the first character (800 ms).
const START_DELAY_TICKS: u16 = 8;
/// Ticks the completed string is held before clearing (3000 ms).
const HOLD_TICKS: u16 = 30;
/// Ticks from the clear to the next pass's first character (500 ms).
const REST_TICKS: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Initial delay before the first pass.
    Waiting { remaining: u16 },
    /// Revealing one character per tick.
    Typing,
    /// Full string shown, counting down to the clear.
    Holding { remaining: u16 },
    /// Cleared, counting down to the restart.
    Resting { remaining: u16 },
}

/// Tick-driven typed-text state.
#[derive(Debug)]
pub struct TypedTextState {
    /// Characters currently shown.
    shown: usize,
    phase: Phase,
}

impl TypedTextState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shown: 0,
            phase: Phase::Waiting {
                remaining: START_DELAY_TICKS,
            },
        }
    }

    /// The currently visible prefix of [`TYPED_TEXT`].
    #[must_use]
    pub fn visible(&self) -> &'static str {
        TYPED_TEXT
            .char_indices()
            .nth(self.shown)
            .map_or(TYPED_TEXT, |(byte, _)| &TYPED_TEXT[..byte])
    }

    /// Whether a typing pass is mid-flight (used to draw the cursor).
    #[must_use]
    pub fn is_typing(&self) -> bool {
        matches!(self.phase, Phase::Typing)
    }

    /// Advances the animation by one 100 ms tick.
    pub fn tick(&mut self) {
        match self.phase {
            // The tick that ends a delay also types the first character,
            // so the delays are measured to the character, not past it.
            Phase::Waiting { remaining } | Phase::Resting { remaining } => {
                if remaining <= 1 {
                    self.phase = Phase::Typing;
                    self.type_one();
                } else {
                    let next = remaining - 1;
                    self.phase = match self.phase {
                        Phase::Waiting { .. } => Phase::Waiting { remaining: next },
                        _ => Phase::Resting { remaining: next },
                    };
                }
            }
            Phase::Typing => self.type_one(),
            Phase::Holding { remaining } => {
                if remaining <= 1 {
                    self.shown = 0;
                    self.phase = Phase::Resting {
                        remaining: REST_TICKS,
                    };
                } else {
                    self.phase = Phase::Holding {
                        remaining: remaining - 1,
                    };
                }
            }
        }
    }

    fn type_one(&mut self) {
        self.shown += 1;
        if self.shown >= TYPED_TEXT.chars().count() {
            self.phase = Phase::Holding {
                remaining: HOLD_TICKS,
            };
        }
    }
}

impl Default for TypedTextState {
    fn default() -> Self {
        Self::new()
    }
}
