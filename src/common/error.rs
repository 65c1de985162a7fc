// src/common/error.rs

use core::fmt::{self, Debug};

use super::types::Field;

/// Classification of an error frame reported by the sensor.
///
/// The sensor answers a rejected command with a line starting with `E`, whose
/// last character is a digit identifying the failure.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DeviceErrorKind {
    /// Code 0: the sensor's USART receiver overflowed.
    ReceiverOverflow,
    /// Code 1: the command is not part of the sensor's command set.
    InvalidCommand,
    /// Code 2: the command frame was malformed.
    InvalidFrame,
    /// Code 3: the command argument was out of range.
    InvalidArgument,
    /// Any other code, or a frame without a trailing digit.
    Unknown,
}

impl DeviceErrorKind {
    /// Maps a trailing error digit onto its documented meaning.
    pub const fn from_code(code: Option<u8>) -> Self {
        match code {
            Some(0) => DeviceErrorKind::ReceiverOverflow,
            Some(1) => DeviceErrorKind::InvalidCommand,
            Some(2) => DeviceErrorKind::InvalidFrame,
            Some(3) => DeviceErrorKind::InvalidArgument,
            _ => DeviceErrorKind::Unknown,
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            DeviceErrorKind::ReceiverOverflow => "USART receiver overflow",
            DeviceErrorKind::InvalidCommand => "invalid command",
            DeviceErrorKind::InvalidFrame => "invalid frame",
            DeviceErrorKind::InvalidArgument => "invalid argument",
            DeviceErrorKind::Unknown => "unknown error",
        }
    }
}

impl fmt::Display for DeviceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// An error frame returned by the sensor, with its code and classification.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProtocolError {
    /// Trailing digit of the error frame, if it had one.
    pub code: Option<u8>,
    pub kind: DeviceErrorKind,
}

impl ProtocolError {
    /// Classifies an already trimmed error frame such as `"E 01"`.
    pub fn from_frame(text: &str) -> Self {
        let code = text
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .map(|digit| digit as u8);

        ProtocolError {
            code,
            kind: DeviceErrorKind::from_code(code),
        }
    }

    pub const fn description(&self) -> &'static str {
        self.kind.description()
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "Device error {}: {}", code, self.kind),
            None => write!(f, "Device error: {}", self.kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}

/// A response or stream line could not be parsed into the expected shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// Received bytes were not valid UTF-8.
    #[error("Response is not valid UTF-8")]
    InvalidUtf8,

    /// A numeric field held text that is not a finite decimal number.
    #[error("Invalid numeric value")]
    InvalidNumber,

    /// An integer field (mode, identity register) could not be parsed.
    #[error("Invalid integer value")]
    InvalidInteger,

    /// A token in tag position is not a recognized field tag.
    #[error("Unrecognized field tag")]
    UnknownTag,

    /// The response ended before the expected value token.
    #[error("Response is missing its value")]
    MissingValue,

    /// A textual value did not fit its fixed-capacity buffer.
    #[error("Value too long")]
    ValueTooLong,

    /// The sensor reported an output mode outside the known set.
    #[error("Invalid output mode code: {0}")]
    InvalidMode(u8),

    /// The reply does not start with the token of the command that was sent,
    /// e.g. a stream line read in place of a command reply.
    #[error("Reply does not match the command sent")]
    UnexpectedReply,

    /// A serial-number register exceeded 16 bits.
    #[error("Register value out of range: {0}")]
    RegisterOutOfRange(u32),
}

/// Failure of the frame codec: either the sensor sent an error frame or the
/// frame could not be built or parsed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum FrameError {
    #[error("{0}")]
    Device(ProtocolError),

    #[error("{0}")]
    Decode(#[from] DecodeError),

    /// Command text plus terminator exceeds the frame buffer.
    #[error("Command exceeds {max} byte frame")]
    CommandTooLong { max: usize },
}

impl From<ProtocolError> for FrameError {
    fn from(e: ProtocolError) -> Self {
        FrameError::Device(e)
    }
}

/// Errors surfaced by the Luminox driver.
///
/// `E` is the error type of the underlying serial interface.
#[derive(Debug, thiserror::Error)]
pub enum LoxError<E = ()>
where
    E: Debug,
{
    /// Underlying I/O error from the serial interface.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// No complete response arrived within the read timeout.
    #[error("Operation timed out")]
    Timeout,

    /// A received line did not fit the line buffer.
    #[error("Buffer overflow: needed {needed}, got {got}")]
    BufferOverflow { needed: usize, got: usize },

    /// The sensor answered with an error frame.
    #[error("{0}")]
    Device(ProtocolError),

    /// The response could not be decoded.
    #[error("Decode error: {0}")]
    Decode(DecodeError),

    /// The requested field was absent from the current stream line.
    #[error("Field '{0}' missing from stream line")]
    MissingField(Field),

    /// Command text plus terminator exceeds the frame buffer.
    #[error("Command exceeds {max} byte frame")]
    CommandTooLong { max: usize },
}

impl<E: Debug> From<ProtocolError> for LoxError<E> {
    fn from(e: ProtocolError) -> Self {
        LoxError::Device(e)
    }
}

impl<E: Debug> From<DecodeError> for LoxError<E> {
    fn from(e: DecodeError) -> Self {
        LoxError::Decode(e)
    }
}

impl<E: Debug> From<FrameError> for LoxError<E> {
    fn from(e: FrameError) -> Self {
        match e {
            FrameError::Device(err) => LoxError::Device(err),
            FrameError::Decode(err) => LoxError::Decode(err),
            FrameError::CommandTooLong { max } => LoxError::CommandTooLong { max },
        }
    }
}
