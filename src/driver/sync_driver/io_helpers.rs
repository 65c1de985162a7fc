// src/driver/sync_driver/io_helpers.rs

use super::Luminox;
use crate::common::{
    error::LoxError,
    frame::{LineBuffer, TERMINATOR},
    hal_traits::{LoxSerial, LoxTimer},
};
use core::time::Duration;
use log::trace;
use nb::Result as NbResult;

// Implementation block for I/O related helpers
impl<IF> Luminox<IF>
where
    IF: LoxSerial + LoxTimer,
{
    /// Executes a non-blocking I/O operation (`f`) repeatedly until it
    /// stops returning `WouldBlock`, returning the final result or a timeout error.
    pub(super) fn execute_blocking_io_with_timeout<FN, T>(
        &mut self,
        timeout: Duration,
        mut f: FN,
    ) -> Result<T, LoxError<IF::Error>>
    where
        FN: FnMut(&mut IF) -> NbResult<T, IF::Error>,
    {
        let deadline = self.interface.now() + timeout;
        let poll_us = self.config.poll_interval.as_micros().clamp(1, u128::from(u32::MAX)) as u32;

        loop {
            match f(&mut self.interface) {
                Ok(result) => return Ok(result),
                Err(nb::Error::WouldBlock) => {
                    if self.interface.now() >= deadline {
                        return Err(LoxError::Timeout);
                    }
                    self.interface.delay_us(poll_us);
                }
                Err(nb::Error::Other(e)) => return Err(LoxError::Io(e)),
            }
        }
    }

    /// Writes an encoded frame byte by byte, then flushes.
    pub(super) fn send_frame(&mut self, frame: &[u8]) -> Result<(), LoxError<IF::Error>> {
        let write_timeout = self.config.write_timeout(frame.len());
        for byte in frame {
            self.execute_blocking_io_with_timeout(write_timeout, |iface| iface.write_byte(*byte))?;
        }

        let flush_timeout = self.config.write_margin;
        self.execute_blocking_io_with_timeout(flush_timeout, |iface| iface.flush())
    }

    /// Reads bytes until `<CR><LF>` or until the read timeout runs out.
    ///
    /// On timeout the bytes received so far are returned, possibly none, and
    /// the caller decides whether a partial line is an error.
    pub(super) fn read_line(&mut self) -> Result<LineBuffer, LoxError<IF::Error>> {
        let deadline = self.interface.now() + self.config.read_timeout;
        let mut line = LineBuffer::new();

        loop {
            let now = self.interface.now();
            if now >= deadline {
                trace!("read timed out after {} bytes", line.len());
                return Ok(line);
            }

            match self.execute_blocking_io_with_timeout(deadline - now, |iface| iface.read_byte()) {
                Ok(byte) => {
                    line.try_push(byte).map_err(|_| LoxError::BufferOverflow {
                        needed: line.len() + 1,
                        got: line.capacity(),
                    })?;
                    if line.ends_with(TERMINATOR) {
                        return Ok(line);
                    }
                }
                Err(LoxError::Timeout) => {
                    trace!("read timed out after {} bytes", line.len());
                    return Ok(line);
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub(super) fn discard_input(&mut self) -> Result<(), LoxError<IF::Error>> {
        self.interface.discard_input().map_err(LoxError::Io)
    }
}
