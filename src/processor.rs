//! The composed Morse input engine.
//!
//! Wires the pieces together: drains timed key events from the stream,
//! classifies them into symbols, accumulates the bounded sequence, and
//! resolves boundaries into display writes. Runs to completion on every
//! poll; never blocks, never allocates.
//!
//! ```text
//! EventStream ──▶ SymbolClassifier ──▶ SequenceDecoder ──▶ DisplayOutput
//!    (drain)          (dot/dash)          (code table)        (chars)
//! ```
//!
//! Call [`poll`](MorseProcessor::poll) from the main loop with a period
//! finer than the dot threshold; the silence boundaries are edge-triggered
//! by elapsed-time comparison, so polling too slowly only delays them,
//! never loses them.

use crate::classifier::{Boundary, SymbolClassifier};
use crate::config::MorseConfig;
use crate::consumer::EventConsumer;
use crate::display::DisplayOutput;
use crate::event::{KeyEdge, KeyEvent};
use crate::logging::LogStream;
use crate::sequence::{DecodeResult, SequenceDecoder};
use crate::stats::DecoderStats;
use crate::stream::EventStream;
use crate::{rt_debug, rt_info, rt_warn};

/// Morse input engine.
///
/// Owns the classifier, the sequence, and the display; borrows the event
/// stream, the counters, and the log stream, which the surrounding
/// firmware typically keeps in statics.
///
/// # Example
///
/// ```
/// use rust_morse_decoder::processor::MorseProcessor;
/// use rust_morse_decoder::config::MorseConfig;
/// use rust_morse_decoder::display::BufferDisplay;
/// use rust_morse_decoder::event::KeyEvent;
/// use rust_morse_decoder::logging::LogStream;
/// use rust_morse_decoder::stats::DecoderStats;
/// use rust_morse_decoder::stream::EventStream;
///
/// let stream = EventStream::<64>::new();
/// let stats = DecoderStats::new();
/// let log = LogStream::new();
/// let mut engine = MorseProcessor::new(
///     &stream,
///     MorseConfig::default(),
///     BufferDisplay::new(),
///     &stats,
///     &log,
/// );
///
/// // ". -" keyed by the input collaborator
/// stream.push(KeyEvent::press(0));
/// stream.push(KeyEvent::release(100_000));
/// stream.push(KeyEvent::press(300_000));
/// stream.push(KeyEvent::release(600_000));
///
/// engine.poll(700_000);            // events drained, no boundary yet
/// engine.poll(1_500_000);          // silence past the pause: resolve
/// assert_eq!(engine.display().as_str(), "A");
/// ```
pub struct MorseProcessor<'a, D: DisplayOutput, const N: usize = { crate::stream::DEFAULT_STREAM_SIZE }>
{
    consumer: EventConsumer<'a, N>,
    classifier: SymbolClassifier,
    sequence: SequenceDecoder,
    display: D,
    stats: &'a DecoderStats,
    log: &'a LogStream,
}

impl<'a, D: DisplayOutput, const N: usize> MorseProcessor<'a, D, N> {
    /// Create an engine reading from the given stream.
    pub fn new(
        stream: &'a EventStream<N>,
        config: MorseConfig,
        display: D,
        stats: &'a DecoderStats,
        log: &'a LogStream,
    ) -> Self {
        Self {
            consumer: EventConsumer::new(stream),
            classifier: SymbolClassifier::new(config),
            sequence: SequenceDecoder::new(),
            display,
            stats,
            log,
        }
    }

    /// Drain pending events, then run the silence boundary checks.
    ///
    /// `now_us` is the caller's current monotonic timestamp; event
    /// timestamps drive the press classification, `now_us` drives the
    /// boundary detection.
    pub fn poll(&mut self, now_us: i64) {
        while let Some(event) = self.consumer.tick() {
            self.handle_event(event);
        }

        while let Some(boundary) = self.classifier.on_idle_tick(now_us) {
            self.handle_boundary(boundary, now_us);
        }
    }

    /// Explicit user-initiated reset (the dedicated clear button).
    ///
    /// Empties the sequence without resolution, resets the silence clocks,
    /// and clears the display. Idempotent.
    pub fn clear(&mut self, now_us: i64) {
        self.sequence.clear();
        self.classifier.reset();
        self.display.clear();
        self.stats.record_clear();
        rt_info!(self.log, now_us, "input cleared");
    }

    /// Get the display collaborator.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get the display collaborator mutably.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Number of symbols accumulated toward the current character.
    pub fn pending_symbols(&self) -> usize {
        self.sequence.len()
    }

    /// Events lost to stream overrun so far.
    pub fn events_dropped(&self) -> u32 {
        self.consumer.dropped()
    }

    /// Check if a press is currently in progress.
    pub fn is_key_down(&self) -> bool {
        self.classifier.is_key_down()
    }

    /// Get current timing configuration.
    pub fn config(&self) -> &MorseConfig {
        self.classifier.config()
    }

    /// Update timing configuration (e.g., retune thresholds).
    pub fn set_config(&mut self, config: MorseConfig) {
        self.classifier.set_config(config);
    }

    fn handle_event(&mut self, event: KeyEvent) {
        match event.edge {
            KeyEdge::Press => self.classifier.on_press(event.timestamp_us),
            KeyEdge::Release => {
                if let Some(symbol) = self.classifier.on_release(event.timestamp_us) {
                    if !self.sequence.append(symbol) {
                        self.stats.record_overflow();
                        rt_warn!(
                            self.log,
                            event.timestamp_us,
                            "sequence full, {:?} dropped",
                            symbol
                        );
                    }
                }
            }
        }
    }

    fn handle_boundary(&mut self, boundary: Boundary, now_us: i64) {
        match boundary {
            Boundary::Character => {
                let pattern = self.sequence.pattern();
                let result = self.sequence.decode();

                match result {
                    DecodeResult::Resolved(c) => {
                        self.stats.record_decoded();
                        rt_info!(self.log, now_us, "decoded '{}' from {}", c, pattern.as_str());
                    }
                    DecodeResult::Unrecognized => {
                        self.stats.record_unrecognized();
                        rt_warn!(self.log, now_us, "unrecognized pattern {}", pattern.as_str());
                    }
                    DecodeResult::Empty => {
                        self.stats.record_unrecognized();
                    }
                }

                self.display.display_character(result.as_char());
            }
            Boundary::Word => {
                self.stats.record_word();
                self.display.display_character(' ');
                rt_debug!(self.log, now_us, "word gap");
            }
        }
    }
}
