// src/driver/mock.rs

//! Scripted sensor used by the driver tests.
//!
//! Replies are queued per command and released into the receive buffer when a
//! complete frame (ending in `\n`) has been written. Stream lines are released
//! one per input discard, the way a streaming sensor keeps producing lines
//! after the host flushes its buffer.

use core::ops::{Add, Sub};
use core::time::Duration;
use std::collections::VecDeque;

use crate::common::hal_traits::{LoxSerial, LoxTimer};

// --- Mock Instant ---
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct MockInstant(pub u64);

impl Add<Duration> for MockInstant {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        MockInstant(self.0.saturating_add(rhs.as_micros() as u64))
    }
}

impl Sub<MockInstant> for MockInstant {
    type Output = Duration;
    fn sub(self, rhs: MockInstant) -> Duration {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

// --- Mock Comm Error ---
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct MockCommError;

// --- Mock Interface ---
#[derive(Debug, Default)]
pub(crate) struct MockInterface {
    pub current_time_us: u64,
    pub write_log: Vec<u8>,
    pub discard_count: usize,
    pub fail_reads: bool,
    pub fail_writes: bool,
    rx: VecDeque<u8>,
    replies: VecDeque<Vec<u8>>,
    stream: VecDeque<Vec<u8>>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the bytes sent back after the next complete command frame.
    pub fn reply(mut self, line: &str) -> Self {
        self.replies.push_back(line.as_bytes().to_vec());
        self
    }

    /// The next command frame gets no answer at all.
    pub fn no_reply(mut self) -> Self {
        self.replies.push_back(Vec::new());
        self
    }

    /// Queues a stream line released after the next input discard.
    pub fn stream_line(mut self, line: &str) -> Self {
        self.stream.push_back(line.as_bytes().to_vec());
        self
    }

    /// Bytes already waiting in the receive buffer.
    pub fn pending(mut self, bytes: &[u8]) -> Self {
        self.rx.extend(bytes.iter().copied());
        self
    }

    pub fn pending_len(&self) -> usize {
        self.rx.len()
    }

    /// Command frames written so far, without terminators.
    pub fn frames(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.write_log)
            .split_terminator("\r\n")
            .map(String::from)
            .collect()
    }
}

impl LoxTimer for MockInterface {
    type Instant = MockInstant;

    fn delay_us(&mut self, us: u32) {
        self.current_time_us = self.current_time_us.saturating_add(u64::from(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.current_time_us = self.current_time_us.saturating_add(u64::from(ms) * 1000);
    }

    fn now(&self) -> Self::Instant {
        MockInstant(self.current_time_us)
    }
}

impl LoxSerial for MockInterface {
    type Error = MockCommError;

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
        if self.fail_reads {
            return Err(nb::Error::Other(MockCommError));
        }
        self.rx.pop_front().ok_or(nb::Error::WouldBlock)
    }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        if self.fail_writes {
            return Err(nb::Error::Other(MockCommError));
        }
        self.write_log.push(byte);
        if byte == b'\n' {
            if let Some(reply) = self.replies.pop_front() {
                self.rx.extend(reply);
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        Ok(())
    }

    fn discard_input(&mut self) -> Result<(), Self::Error> {
        self.rx.clear();
        self.discard_count += 1;
        if let Some(line) = self.stream.pop_front() {
            self.rx.extend(line);
        }
        Ok(())
    }
}
