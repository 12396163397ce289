//! Timing configuration for the Morse input decoder.
//!
//! The four thresholds are the entire external configuration surface of the
//! core. They are plain overridable fields rather than constants baked into
//! the classifier, so tests and calibration UIs can tune them freely.
//!
//! All values are microseconds on the same monotonic `i64` timebase as the
//! event timestamps.

/// Timing thresholds for press classification and boundary detection.
///
/// Classification rule:
/// - press duration `< dot_threshold_us` → dot
/// - press duration `>= dot_threshold_us` → dash
///
/// Silence rule (measured from the last release, while the key is up):
/// - silence `>= char_pause_us` → character-complete boundary
/// - silence `>= word_pause_us` → word-complete boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MorseConfig {
    /// Presses shorter than this are dots.
    pub dot_threshold_us: i64,

    /// Upper bound of the dash band. Presses at or beyond `dot_threshold_us`
    /// are dashes; over-long presses past this value still classify as dash.
    pub dash_threshold_us: i64,

    /// Silence after which the accumulated sequence is resolved.
    pub char_pause_us: i64,

    /// Silence after which a word gap is declared. Must exceed the
    /// character pause so the character boundary always fires first.
    pub word_pause_us: i64,
}

impl Default for MorseConfig {
    fn default() -> Self {
        Self {
            dot_threshold_us: 200_000,
            dash_threshold_us: 600_000,
            char_pause_us: 800_000,
            word_pause_us: 2_000_000,
        }
    }
}

impl MorseConfig {
    /// Create a config from millisecond thresholds.
    pub const fn from_millis(dot: i64, dash: i64, char_pause: i64, word_pause: i64) -> Self {
        Self {
            dot_threshold_us: dot * 1_000,
            dash_threshold_us: dash * 1_000,
            char_pause_us: char_pause * 1_000,
            word_pause_us: word_pause * 1_000,
        }
    }

    /// Check the threshold ordering invariant:
    /// `0 < dot < dash < char_pause < word_pause`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        0 < self.dot_threshold_us
            && self.dot_threshold_us < self.dash_threshold_us
            && self.dash_threshold_us < self.char_pause_us
            && self.char_pause_us < self.word_pause_us
    }
}
