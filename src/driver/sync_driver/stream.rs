// src/driver/sync_driver/stream.rs

use super::Luminox;
use crate::common::{
    error::LoxError,
    frame::{decode_stream_line, LineBuffer, TERMINATOR},
    hal_traits::{LoxSerial, LoxTimer},
    reading::ReadingSet,
    types::OutputMode,
};
use log::debug;

impl<IF> Luminox<IF>
where
    IF: LoxSerial + LoxTimer,
{
    /// Reads one stream line exactly as received, terminator included.
    ///
    /// A sensor not already streaming is switched to stream mode first.
    /// Pending input is discarded so the line returned is a fresh one. If no
    /// complete line arrives within the read timeout the partial (possibly
    /// empty) line is returned.
    pub fn read_stream_raw(&mut self) -> Result<LineBuffer, LoxError<IF::Error>> {
        self.ensure_streaming()?;
        self.discard_input()?;
        self.read_line()
    }

    /// Reads and decodes one stream line.
    ///
    /// If nothing arrives within the read timeout the result is an empty
    /// [`ReadingSet`]. A line cut off before its terminator is never decoded
    /// and fails with [`LoxError::Timeout`].
    pub fn read_stream_reading_set(&mut self) -> Result<ReadingSet, LoxError<IF::Error>> {
        let line = self.read_stream_raw()?;
        if !line.is_empty() && !line.ends_with(TERMINATOR) {
            debug!("stream line cut off after {} bytes", line.len());
            return Err(LoxError::Timeout);
        }
        Ok(decode_stream_line(&line)?)
    }

    fn ensure_streaming(&mut self) -> Result<(), LoxError<IF::Error>> {
        if self.current_mode != OutputMode::Stream {
            debug!("switching from {} to stream mode for a stream read", self.current_mode);
            self.set_output_mode(OutputMode::Stream)?;
        }
        Ok(())
    }
}
