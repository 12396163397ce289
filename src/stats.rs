//! Decode accounting for the Morse engine.
//!
//! The decoder's failure policy is deliberately quiet: unrecognized input
//! shows a `'?'`, overflowed symbols vanish. These counters make the quiet
//! cases observable without changing the policy — a diagnostics consumer
//! can report them while the user-visible behavior stays untouched.

use core::sync::atomic::{AtomicU32, Ordering};

/// Thread-safe decode counters.
///
/// Shared between the engine and whatever reports diagnostics. All access
/// via atomics, no locks; counters only accumulate and are never cleared
/// by the engine itself.
///
/// # Usage
///
/// ```
/// use rust_morse_decoder::stats::DecoderStats;
///
/// static STATS: DecoderStats = DecoderStats::new();
///
/// STATS.record_decoded();
/// assert_eq!(STATS.decoded(), 1);
/// ```
pub struct DecoderStats {
    /// Sequences resolved to a character.
    decoded: AtomicU32,

    /// Sequences that matched no table entry (includes empty decodes).
    unrecognized: AtomicU32,

    /// Symbols dropped because the sequence was full.
    overflow_dropped: AtomicU32,

    /// Word boundaries declared.
    words: AtomicU32,

    /// Explicit clear commands handled.
    clears: AtomicU32,
}

impl DecoderStats {
    /// Create zeroed counters.
    pub const fn new() -> Self {
        Self {
            decoded: AtomicU32::new(0),
            unrecognized: AtomicU32::new(0),
            overflow_dropped: AtomicU32::new(0),
            words: AtomicU32::new(0),
            clears: AtomicU32::new(0),
        }
    }

    #[inline]
    pub fn record_decoded(&self) {
        self.decoded.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_unrecognized(&self) {
        self.unrecognized.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_overflow(&self) {
        self.overflow_dropped.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_word(&self) {
        self.words.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_clear(&self) {
        self.clears.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn decoded(&self) -> u32 {
        self.decoded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn unrecognized(&self) -> u32 {
        self.unrecognized.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn overflow_dropped(&self) -> u32 {
        self.overflow_dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn words(&self) -> u32 {
        self.words.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn clears(&self) -> u32 {
        self.clears.load(Ordering::Relaxed)
    }

    /// Get a consistent-enough snapshot for reporting.
    #[inline]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            decoded: self.decoded(),
            unrecognized: self.unrecognized(),
            overflow_dropped: self.overflow_dropped(),
            words: self.words(),
            clears: self.clears(),
        }
    }
}

impl Default for DecoderStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter values at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub decoded: u32,
    pub unrecognized: u32,
    pub overflow_dropped: u32,
    pub words: u32,
    pub clears: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_accumulate() {
        let stats = DecoderStats::new();

        stats.record_decoded();
        stats.record_decoded();
        stats.record_unrecognized();
        stats.record_overflow();
        stats.record_word();
        stats.record_clear();

        assert_eq!(stats.decoded(), 2);
        assert_eq!(stats.unrecognized(), 1);
        assert_eq!(stats.overflow_dropped(), 1);
        assert_eq!(stats.words(), 1);
        assert_eq!(stats.clears(), 1);
    }

    #[test]
    fn test_snapshot() {
        let stats = DecoderStats::new();
        stats.record_decoded();
        stats.record_word();

        let snap = stats.snapshot();
        assert_eq!(snap.decoded, 1);
        assert_eq!(snap.words, 1);
        assert_eq!(snap.unrecognized, 0);
        assert_eq!(snap.overflow_dropped, 0);
        assert_eq!(snap.clears, 0);
    }
}
