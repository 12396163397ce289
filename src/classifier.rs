//! Symbol classifier finite state machine.
//!
//! Pure logic, no hardware dependencies. Consumes timed press/release
//! edges, produces dots, dashes, and silence boundaries. Fully testable
//! on host.
//!
//! # Timing rules
//!
//! - Press shorter than the dot threshold → [`Symbol::Dot`]
//! - Any longer press → [`Symbol::Dash`]
//! - Silence past the character pause → [`Boundary::Character`], once
//! - Silence past the word pause → [`Boundary::Word`], once, always after
//!   the character boundary
//!
//! Silence is measured between a release and the next press; a held key
//! never fires a boundary.

use crate::config::MorseConfig;

/// An atomic Morse symbol, distinguished by press duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    /// Pattern character for table lookup (`'.'` or `'-'`).
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }
}

/// Silence boundary kinds emitted by the idle check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// The accumulated sequence should be resolved now.
    Character,
    /// A word gap: a space follows the already-resolved character.
    Word,
}

/// Press/release timing classifier.
///
/// Converts raw timed key edges into a stream of symbols and boundary
/// signals. Owns only its transient timing state; symbol storage belongs
/// to the sequence decoder.
///
/// # Example
///
/// ```
/// use rust_morse_decoder::classifier::{SymbolClassifier, Symbol, Boundary};
/// use rust_morse_decoder::config::MorseConfig;
///
/// let mut classifier = SymbolClassifier::new(MorseConfig::default());
///
/// classifier.on_press(0);
/// assert_eq!(classifier.on_release(150_000), Some(Symbol::Dot));
///
/// // Silence past the character pause resolves the sequence
/// assert_eq!(classifier.on_idle_tick(1_000_000), Some(Boundary::Character));
/// ```
pub struct SymbolClassifier {
    config: MorseConfig,

    /// Start of the press in progress, if the key is down.
    press_start_us: Option<i64>,

    /// Timestamp of the last completed symbol (key-up edge).
    last_release_us: Option<i64>,

    /// A symbol was emitted since the last character boundary.
    ///
    /// Doubles as the boundary latch: cleared when the character boundary
    /// fires, so the signal cannot re-fire while the idle period persists,
    /// and re-armed by the next release.
    symbol_pending: bool,
}

impl SymbolClassifier {
    /// Create a new classifier with the given timing configuration.
    pub const fn new(config: MorseConfig) -> Self {
        Self {
            config,
            press_start_us: None,
            last_release_us: None,
            symbol_pending: false,
        }
    }

    /// Update configuration (e.g., retune thresholds).
    pub fn set_config(&mut self, config: MorseConfig) {
        self.config = config;
    }

    /// Get current configuration.
    pub fn config(&self) -> &MorseConfig {
        &self.config
    }

    /// Record the start of a press. No symbol is emitted.
    ///
    /// A second press without an intervening release redefines the press
    /// start: the upstream contract promises alternating edges, and when a
    /// bouncy source breaks it, the most recent down-edge is the one whose
    /// release will be measured.
    #[inline]
    pub fn on_press(&mut self, now_us: i64) {
        self.press_start_us = Some(now_us);
    }

    /// Record a release and classify the completed press.
    ///
    /// Duration below the dot threshold yields [`Symbol::Dot`]; anything
    /// longer yields [`Symbol::Dash`]. Near-zero presses fall into the dot
    /// arm by the same rule. A release without a matching press is ignored.
    #[inline]
    pub fn on_release(&mut self, now_us: i64) -> Option<Symbol> {
        let start = self.press_start_us.take()?;
        let duration = now_us - start;

        self.last_release_us = Some(now_us);
        self.symbol_pending = true;

        if duration < self.config.dot_threshold_us {
            Some(Symbol::Dot)
        } else {
            Some(Symbol::Dash)
        }
    }

    /// Measure elapsed silence and emit at most one boundary signal.
    ///
    /// Call from the main loop, repeatedly until `None`, with a period
    /// finer than the dot threshold. A slow poll that jumps past both
    /// pauses still observes [`Boundary::Character`] first and
    /// [`Boundary::Word`] on the next call.
    ///
    /// The word boundary resets the timing state, so one word gap emits
    /// exactly one signal no matter how long the silence stretches.
    #[inline]
    pub fn on_idle_tick(&mut self, now_us: i64) -> Option<Boundary> {
        // Silence runs between a release and the next press. Key held
        // down: the current symbol is still forming, no boundary.
        if self.press_start_us.is_some() {
            return None;
        }

        let last = self.last_release_us?;
        let elapsed = now_us - last;

        if self.symbol_pending && elapsed >= self.config.char_pause_us {
            self.symbol_pending = false;
            return Some(Boundary::Character);
        }

        if elapsed >= self.config.word_pause_us {
            self.last_release_us = None;
            return Some(Boundary::Word);
        }

        None
    }

    /// Check if a press is currently in progress.
    #[inline]
    pub fn is_key_down(&self) -> bool {
        self.press_start_us.is_some()
    }

    /// Check if a symbol awaits a character boundary.
    #[inline]
    pub fn symbol_pending(&self) -> bool {
        self.symbol_pending
    }

    /// Reset all timing state (explicit clear command).
    pub fn reset(&mut self) {
        self.press_start_us = None;
        self.last_release_us = None;
        self.symbol_pending = false;
    }
}
