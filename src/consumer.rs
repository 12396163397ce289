//! Event stream consumer for the decoder side.
//!
//! The decoder is a best-effort reader: timing correctness lives in the
//! event timestamps, not in when the events are drained, so falling behind
//! is survivable. If the consumer is lapped by the producer it skips
//! forward and accounts the loss instead of faulting.
//!
//! # Contract
//!
//! "I process when I can. I skip if I fall behind."

use crate::event::KeyEvent;
use crate::stream::EventStream;

/// Best-effort reader over an [`EventStream`].
///
/// Never fails. If too far behind, skips forward to catch up and tracks
/// dropped events for diagnostics.
///
/// # Example
///
/// ```
/// use rust_morse_decoder::stream::EventStream;
/// use rust_morse_decoder::consumer::EventConsumer;
/// use rust_morse_decoder::event::KeyEvent;
///
/// let stream = EventStream::<64>::new();
/// let mut consumer = EventConsumer::new(&stream);
///
/// stream.push(KeyEvent::press(0));
/// assert_eq!(consumer.tick(), Some(KeyEvent::press(0)));
/// assert_eq!(consumer.tick(), None);
/// ```
pub struct EventConsumer<'a, const N: usize = { crate::stream::DEFAULT_STREAM_SIZE }> {
    stream: &'a EventStream<N>,
    read_idx: u32,
    dropped: u32,
}

impl<'a, const N: usize> EventConsumer<'a, N> {
    /// Create a new consumer starting at the stream's current head.
    pub fn new(stream: &'a EventStream<N>) -> Self {
        Self {
            stream,
            read_idx: stream.write_head(),
            dropped: 0,
        }
    }

    /// Tick the consumer: read next event if available.
    ///
    /// If the consumer has fallen too far behind, skips forward (drops
    /// events) and continues. Never returns an error.
    ///
    /// # Returns
    ///
    /// - `Some(event)` - Next event (may have skipped some)
    /// - `None` - No new data (caught up with producer)
    #[inline]
    pub fn tick(&mut self) -> Option<KeyEvent> {
        // Check if we're too far behind (overrun)
        if self.stream.is_overrun(self.read_idx) {
            let write = self.stream.write_head();
            let skipped = write.wrapping_sub(self.read_idx);

            // Skip to half-buffer behind (leave room for catchup)
            self.read_idx = write.wrapping_sub((N / 2) as u32);
            self.dropped = self.dropped.saturating_add(skipped);
        }

        match self.stream.read(self.read_idx) {
            Some(event) => {
                self.read_idx = self.read_idx.wrapping_add(1);
                Some(event)
            }
            None => None,
        }
    }

    /// Drain all available events.
    ///
    /// Returns an iterator that yields all events from the current read
    /// position to the write head. Useful for batch processing.
    #[inline]
    pub fn drain(&mut self) -> DrainIterator<'_, 'a, N> {
        DrainIterator { consumer: self }
    }

    /// Get count of dropped events (due to falling behind).
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Get current lag (events behind producer).
    #[inline]
    pub fn lag(&self) -> u32 {
        self.stream.lag(self.read_idx)
    }

    /// Get current read index.
    #[inline]
    pub fn read_idx(&self) -> u32 {
        self.read_idx
    }

    /// Reset dropped counter (e.g., after reporting).
    #[inline]
    pub fn reset_dropped(&mut self) {
        self.dropped = 0;
    }
}

/// Iterator for draining all available events.
pub struct DrainIterator<'c, 'a, const N: usize> {
    consumer: &'c mut EventConsumer<'a, N>,
}

impl<'c, 'a, const N: usize> Iterator for DrainIterator<'c, 'a, N> {
    type Item = KeyEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.consumer.tick()
    }
}
