// src/common/identity.rs

use core::fmt;
use core::str::FromStr;

use super::error::DecodeError;

/// Selector for the `# n` identity commands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum IdentityField {
    /// `# 0`: date of manufacture.
    ManufactureDate,
    /// `# 1`: serial number, returned as two 16-bit registers.
    SerialNumber,
    /// `# 2`: software revision.
    SoftwareRevision,
}

impl IdentityField {
    /// The argument sent with the `#` command.
    pub const fn selector(self) -> u8 {
        match self {
            IdentityField::ManufactureDate => 0,
            IdentityField::SerialNumber => 1,
            IdentityField::SoftwareRevision => 2,
        }
    }
}

/// Date of manufacture as reported by `# 0`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ManufactureDate {
    pub year: u16,
    pub day_of_year: u16,
}

impl fmt::Display for ManufactureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.day_of_year)
    }
}

/// Result of a single identity query.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum IdentityValue {
    ManufactureDate(ManufactureDate),
    SerialNumber(u32),
    SoftwareRevision(u32),
}

impl IdentityValue {
    /// Parses the reply to the identity command for `field`.
    pub fn parse(field: IdentityField, line: &str) -> Result<Self, DecodeError> {
        match field {
            IdentityField::ManufactureDate => {
                parse_manufacture_date(line).map(IdentityValue::ManufactureDate)
            }
            IdentityField::SerialNumber => {
                parse_serial_number(line).map(IdentityValue::SerialNumber)
            }
            IdentityField::SoftwareRevision => {
                parse_software_revision(line).map(IdentityValue::SoftwareRevision)
            }
        }
    }
}

/// Identity of a sensor, read on demand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DeviceIdentity {
    pub date_of_manufacture: ManufactureDate,
    pub serial_number: u32,
    pub software_revision: u32,
}

// --- Reply Parsing ---
// Values are always taken from the end of the reply, so both `# 02015 00123`
// and an echoed selector such as `# 0 2015 123` decode the same way.

fn parse_integer<T: FromStr>(token: &str) -> Result<T, DecodeError> {
    T::from_str(token).map_err(|_| DecodeError::InvalidInteger)
}

/// Returns the last two whitespace-separated tokens, in line order.
fn trailing_pair(line: &str) -> Result<(&str, &str), DecodeError> {
    let mut tokens = line.split_whitespace().rev();
    let last = tokens.next().ok_or(DecodeError::MissingValue)?;
    let first = tokens.next().ok_or(DecodeError::MissingValue)?;
    Ok((first, last))
}

fn register(token: &str) -> Result<u32, DecodeError> {
    let value: u32 = parse_integer(token)?;
    if value > u32::from(u16::MAX) {
        return Err(DecodeError::RegisterOutOfRange(value));
    }
    Ok(value)
}

pub fn parse_manufacture_date(line: &str) -> Result<ManufactureDate, DecodeError> {
    let (year, day) = trailing_pair(line)?;
    Ok(ManufactureDate {
        year: parse_integer(year)?,
        day_of_year: parse_integer(day)?,
    })
}

/// Assembles the serial number from its two registers, high register first.
pub fn parse_serial_number(line: &str) -> Result<u32, DecodeError> {
    let (high, low) = trailing_pair(line)?;
    Ok((register(high)? << 16) + register(low)?)
}

pub fn parse_software_revision(line: &str) -> Result<u32, DecodeError> {
    let token = line.split_whitespace().last().ok_or(DecodeError::MissingValue)?;
    parse_integer(token)
}
