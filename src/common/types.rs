// src/common/types.rs

use core::fmt;
use core::str::FromStr;

use super::error::DecodeError;

/// Capacity of the textual sensor status (`e`) value.
pub const STATUS_CAPACITY: usize = 16;

/// Sensor status code as reported by the `e` field (e.g. `"0000"`).
pub type StatusCode = heapless::String<STATUS_CAPACITY>;

// --- Output Mode ---

/// The sensor's output mode.
///
/// The wire ordinals (`M 0`, `M 1`, `M 2`) are part of the protocol and are
/// mapped explicitly by [`OutputMode::wire_code`] and [`OutputMode::from_wire_code`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OutputMode {
    /// Sensor emits a reading line continuously.
    Stream,
    /// Sensor answers explicit queries only.
    Poll,
    /// Sensor output is switched off.
    Off,
}

impl OutputMode {
    /// Returns the ordinal used on the wire for this mode.
    pub const fn wire_code(self) -> u8 {
        match self {
            OutputMode::Stream => 0,
            OutputMode::Poll => 1,
            OutputMode::Off => 2,
        }
    }

    /// Tries to convert a wire ordinal into an `OutputMode`.
    pub const fn from_wire_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(OutputMode::Stream),
            1 => Some(OutputMode::Poll),
            2 => Some(OutputMode::Off),
            _ => None,
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Stream => f.write_str("stream"),
            OutputMode::Poll => f.write_str("poll"),
            OutputMode::Off => f.write_str("off"),
        }
    }
}

// --- Fields ---

/// Declared value type of a field.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FieldKind {
    Numeric,
    Text,
}

/// A telemetry field, identified on the wire by a single-character tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Field {
    /// `O`: partial pressure of oxygen (mbar).
    PartialPressure,
    /// `%`: oxygen concentration (percent).
    Percent,
    /// `T`: sensor temperature (°C).
    Temperature,
    /// `P`: barometric pressure (mbar).
    Pressure,
    /// `e`: sensor status code.
    Status,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::PartialPressure,
        Field::Percent,
        Field::Temperature,
        Field::Pressure,
        Field::Status,
    ];

    /// The wire tag of this field; also the command that queries it in poll mode.
    pub const fn tag(self) -> char {
        match self {
            Field::PartialPressure => 'O',
            Field::Percent => '%',
            Field::Temperature => 'T',
            Field::Pressure => 'P',
            Field::Status => 'e',
        }
    }

    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'O' => Some(Field::PartialPressure),
            '%' => Some(Field::Percent),
            'T' => Some(Field::Temperature),
            'P' => Some(Field::Pressure),
            'e' => Some(Field::Status),
            _ => None,
        }
    }

    /// Parses a whole token as a tag. Tokens longer than one character never match.
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(tag), None) => Self::from_tag(tag),
            _ => None,
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Field::Status => FieldKind::Text,
            _ => FieldKind::Numeric,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Field::PartialPressure => 0,
            Field::Percent => 1,
            Field::Temperature => 2,
            Field::Pressure => 3,
            Field::Status => 4,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// --- Readings ---

/// A single typed value read from the sensor.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Number(f32),
    Text(StatusCode),
}

impl Reading {
    /// Parses `text` according to the declared kind of `field`.
    ///
    /// Numeric values must be finite decimals; `"inf"` and `"NaN"` are rejected.
    pub fn parse(field: Field, text: &str) -> Result<Self, DecodeError> {
        match field.kind() {
            FieldKind::Numeric => {
                let value = f32::from_str(text).map_err(|_| DecodeError::InvalidNumber)?;
                if !value.is_finite() {
                    return Err(DecodeError::InvalidNumber);
                }
                Ok(Reading::Number(value))
            }
            FieldKind::Text => {
                let mut status = StatusCode::new();
                status
                    .push_str(text)
                    .map_err(|_| DecodeError::ValueTooLong)?;
                Ok(Reading::Text(status))
            }
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Reading::Number(_) => FieldKind::Numeric,
            Reading::Text(_) => FieldKind::Text,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            Reading::Number(value) => Some(*value),
            Reading::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reading::Text(status) => Some(status.as_str()),
            Reading::Number(_) => None,
        }
    }

    pub fn into_text(self) -> Option<StatusCode> {
        match self {
            Reading::Text(status) => Some(status),
            Reading::Number(_) => None,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Number(value) => write!(f, "{}", value),
            Reading::Text(status) => f.write_str(status),
        }
    }
}
