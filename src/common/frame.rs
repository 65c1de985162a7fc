// src/common/frame.rs

//! Wire framing for the Luminox UART protocol.
//!
//! Every frame in either direction is one line of ASCII text terminated by
//! `<CR><LF>`. Responses starting with `E` are error frames; stream lines are
//! space-separated `tag value` pairs such as `O 0213.1 T +21.5 P 1019 % 020.92 e 0000`.

use arrayvec::ArrayVec;
use core::str;

use super::error::{DecodeError, FrameError, ProtocolError};
use super::reading::ReadingSet;
use super::types::{Field, OutputMode, Reading};

/// Line terminator appended to commands and expected on every response.
pub const TERMINATOR: &[u8] = b"\r\n";

/// First character of an error frame.
pub const ERROR_SENTINEL: char = 'E';

/// Capacity of an outgoing frame, terminator included.
pub const MAX_FRAME_LEN: usize = 16;

/// Capacity of a received line, terminator included.
pub const MAX_LINE_LEN: usize = 96;

/// An encoded command ready for transmission.
pub type FrameBuffer = ArrayVec<u8, MAX_FRAME_LEN>;

/// One received line, as read from the wire.
pub type LineBuffer = ArrayVec<u8, MAX_LINE_LEN>;

/// Appends the line terminator to `text`.
pub fn encode_command(text: &str) -> Result<FrameBuffer, FrameError> {
    let mut frame = FrameBuffer::new();
    frame
        .try_extend_from_slice(text.as_bytes())
        .and_then(|_| frame.try_extend_from_slice(TERMINATOR))
        .map_err(|_| FrameError::CommandTooLong { max: MAX_FRAME_LEN })?;
    Ok(frame)
}

fn trimmed_text(raw: &[u8]) -> Result<&str, DecodeError> {
    str::from_utf8(raw)
        .map(str::trim)
        .map_err(|_| DecodeError::InvalidUtf8)
}

/// Strips the terminator and surrounding whitespace from a response line.
///
/// An empty line or one starting with `E` is an error frame and is returned
/// as [`FrameError::Device`].
pub fn decode_response(raw: &[u8]) -> Result<&str, FrameError> {
    let text = trimmed_text(raw)?;
    if text.is_empty() || text.starts_with(ERROR_SENTINEL) {
        return Err(FrameError::Device(ProtocolError::from_frame(text)));
    }
    Ok(text)
}

/// Decodes a stream line (or the reply to `A`) into a [`ReadingSet`].
///
/// Tokens are read as alternating tag/value pairs. A final tag without a value
/// is dropped, and an empty line yields an empty set. Any token in tag position
/// that is not a known single-character tag fails with
/// [`DecodeError::UnknownTag`], which is how a line that lost its head
/// (values shifted into tag positions) is detected.
pub fn decode_stream_line(raw: &[u8]) -> Result<ReadingSet, DecodeError> {
    let line = trimmed_text(raw)?;
    let mut readings = ReadingSet::new();
    if line.is_empty() {
        return Ok(readings);
    }

    let mut tokens = line.split(' ');
    while let Some(tag) = tokens.next() {
        let Some(value) = tokens.next() else {
            break;
        };
        let field = Field::from_token(tag).ok_or(DecodeError::UnknownTag)?;
        readings.insert_parsed(field, value)?;
    }

    Ok(readings)
}

/// Parses the trailing token of a poll-mode reply (e.g. `"O 0213.1"`) as `field`.
pub fn parse_scalar(field: Field, line: &str) -> Result<Reading, DecodeError> {
    let token = line.split_whitespace().last().ok_or(DecodeError::MissingValue)?;
    Reading::parse(field, token)
}

/// Parses the reply to the `M` query (e.g. `"M 01"`).
pub fn parse_mode(line: &str) -> Result<OutputMode, DecodeError> {
    let token = line.split_whitespace().last().ok_or(DecodeError::MissingValue)?;
    let code: u8 = token.parse().map_err(|_| DecodeError::InvalidInteger)?;
    OutputMode::from_wire_code(code).ok_or(DecodeError::InvalidMode(code))
}
