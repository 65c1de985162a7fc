// src/common/command.rs

//! Luminox UART command definitions.
//!
//! Commands are short ASCII tokens, optionally followed by a space and a
//! numeric argument. The `Display` implementation produces the command text
//! without the terminator; [`Command::format_into`] produces the wire frame.

use arrayvec::ArrayString;
use core::fmt::{self, Write};

use super::error::FrameError;
use super::frame::{encode_command, FrameBuffer, MAX_FRAME_LEN};
use super::identity::IdentityField;
use super::types::{Field, OutputMode};

/// Represents a command understood by the sensor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    /// `M` - Reports the current output mode.
    QueryMode,

    /// `M n` - Switches the output mode (0 = stream, 1 = poll, 2 = off).
    SetMode(OutputMode),

    /// `O`, `%`, `T`, `P` or `e` - Reports a single field.
    Query(Field),

    /// `A` - Reports all fields in stream-line layout.
    QueryAll,

    /// `# n` - Reports one identity field.
    Identity(IdentityField),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::QueryMode => f.write_str("M"),
            Command::SetMode(mode) => write!(f, "M {}", mode.wire_code()),
            Command::Query(field) => write!(f, "{}", field.tag()),
            Command::QueryAll => f.write_str("A"),
            Command::Identity(field) => write!(f, "# {}", field.selector()),
        }
    }
}

impl Command {
    /// Formats the command and appends the line terminator.
    pub fn format_into(&self) -> Result<FrameBuffer, FrameError> {
        let mut text = ArrayString::<MAX_FRAME_LEN>::new();
        write!(text, "{}", self).map_err(|_| FrameError::CommandTooLong { max: MAX_FRAME_LEN })?;
        encode_command(&text)
    }

    /// Whether `reply` (trimmed, not an error frame) answers this command.
    ///
    /// Mode and identity replies echo the command letter, field queries echo
    /// the field tag. The reply to `A` has stream-line layout, so it starts
    /// with any field tag.
    pub fn accepts_reply(&self, reply: &str) -> bool {
        let Some(token) = reply.split(' ').next() else {
            return false;
        };
        match self {
            Command::QueryMode | Command::SetMode(_) => token == "M",
            Command::Query(field) => Field::from_token(token) == Some(*field),
            Command::QueryAll => Field::from_token(token).is_some(),
            Command::Identity(_) => token == "#",
        }
    }
}
