// src/common/config.rs

use core::time::Duration;

use super::timing;

/// Runtime parameters of a [`Luminox`](crate::driver::Luminox) driver.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LoxConfig {
    /// Time allowed for one complete line (command reply or stream line).
    pub read_timeout: Duration,
    /// Slack added to the nominal transmit time of each frame.
    pub write_margin: Duration,
    /// Delay between attempts while the serial interface would block.
    pub poll_interval: Duration,
}

impl LoxConfig {
    pub const fn new() -> Self {
        LoxConfig {
            read_timeout: timing::DEFAULT_READ_TIMEOUT,
            write_margin: timing::DEFAULT_WRITE_MARGIN,
            poll_interval: timing::DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn with_write_margin(mut self, margin: Duration) -> Self {
        self.write_margin = margin;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Time allowed to transmit a frame of `len` bytes.
    pub fn write_timeout(&self, len: usize) -> Duration {
        timing::BYTE_DURATION * len as u32 + self.write_margin
    }
}

impl Default for LoxConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoxConfig::default();
        assert_eq!(config.read_timeout, Duration::from_secs(1));
        assert_eq!(config.write_margin, Duration::from_millis(20));
        assert_eq!(config.poll_interval, Duration::from_micros(100));
    }

    #[test]
    fn test_builder() {
        let config = LoxConfig::new()
            .with_read_timeout(Duration::from_millis(250))
            .with_write_margin(Duration::from_millis(5))
            .with_poll_interval(Duration::from_micros(500));
        assert_eq!(config.read_timeout, Duration::from_millis(250));
        assert_eq!(config.write_margin, Duration::from_millis(5));
        assert_eq!(config.poll_interval, Duration::from_micros(500));
    }

    #[test]
    fn test_write_timeout_scales_with_length() {
        let config = LoxConfig::new().with_write_margin(Duration::ZERO);
        assert_eq!(config.write_timeout(0), Duration::ZERO);
        assert_eq!(config.write_timeout(5), timing::BYTE_DURATION * 5);
    }
}
