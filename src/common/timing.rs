// src/common/timing.rs

use core::time::Duration;

// === Serial Link ===
// The sensor's UART runs at 9600 baud, 8 data bits, no parity, 1 stop bit.
// Opening the port with these settings is left to the caller.

/// Baud rate of the sensor's UART.
pub const BAUD_RATE: u32 = 9600;

/// Nominal duration of a single byte (10 bits total) at 9600 baud (8N1).
pub const BYTE_DURATION: Duration = Duration::from_micros(1042);

// === Defaults ===

/// Time allowed for a complete response line to arrive.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Slack added on top of the nominal transmit time of a frame.
pub const DEFAULT_WRITE_MARGIN: Duration = Duration::from_millis(20);

/// Delay between attempts while a non-blocking operation would block.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_micros(100);
