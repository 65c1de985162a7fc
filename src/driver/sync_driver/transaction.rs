// src/driver/sync_driver/transaction.rs

use super::Luminox;
use crate::common::{
    command::Command,
    error::{DecodeError, FrameError, LoxError},
    frame::{decode_response, TERMINATOR},
    hal_traits::{LoxSerial, LoxTimer},
    types::OutputMode,
};
use log::{debug, trace, warn};

impl<IF> Luminox<IF>
where
    IF: LoxSerial + LoxTimer,
{
    /// Sends one command, reads its reply and hands the decoded text to `parse`.
    ///
    /// While the sensor streams, pending input is discarded first so a queued
    /// stream line is not taken for the reply. A reply that is empty or lacks
    /// its terminator when the read timeout expires is a [`LoxError::Timeout`].
    /// Error frames become [`LoxError::Device`], and a reply that does not
    /// answer `command` is [`DecodeError::UnexpectedReply`]. Nothing is retried.
    pub(super) fn transact<T, F>(
        &mut self,
        command: &Command,
        parse: F,
    ) -> Result<T, LoxError<IF::Error>>
    where
        F: FnOnce(&str) -> Result<T, DecodeError>,
    {
        let frame = command.format_into()?;
        if self.current_mode == OutputMode::Stream {
            self.discard_input()?;
        }
        debug!("-> {}", command);
        self.send_frame(&frame)?;

        let line = self.read_line()?;
        if !line.ends_with(TERMINATOR) {
            debug!("no complete reply to {} ({} bytes)", command, line.len());
            return Err(LoxError::Timeout);
        }

        let text = match decode_response(&line) {
            Ok(text) => text,
            Err(FrameError::Device(err)) => {
                warn!("{} rejected: {}", command, err);
                return Err(LoxError::Device(err));
            }
            Err(e) => return Err(e.into()),
        };
        trace!("<- {}", text);
        if !command.accepts_reply(text) {
            warn!("unexpected reply to {}: {}", command, text);
            return Err(DecodeError::UnexpectedReply.into());
        }

        Ok(parse(text)?)
    }
}
