// src/driver/sync_driver/query.rs

use super::Luminox;
use crate::common::{
    command::Command,
    error::{DecodeError, LoxError},
    frame::{decode_stream_line, parse_scalar},
    hal_traits::{LoxSerial, LoxTimer},
    identity::{
        parse_manufacture_date, parse_serial_number, parse_software_revision, DeviceIdentity,
        IdentityField, IdentityValue, ManufactureDate,
    },
    reading::ReadingSet,
    types::{Field, OutputMode, Reading, StatusCode},
};

impl<IF> Luminox<IF>
where
    IF: LoxSerial + LoxTimer,
{
    /// Reads a single field.
    ///
    /// In poll and off mode this sends the field's query command. In stream
    /// mode it takes the field from the next stream line and fails with
    /// [`LoxError::MissingField`] if that line does not carry it.
    pub fn query_scalar(&mut self, field: Field) -> Result<Reading, LoxError<IF::Error>> {
        match self.current_mode {
            OutputMode::Stream => self
                .read_stream_reading_set()?
                .take(field)
                .ok_or(LoxError::MissingField(field)),
            OutputMode::Poll | OutputMode::Off => {
                self.transact(&Command::Query(field), |text| parse_scalar(field, text))
            }
        }
    }

    fn query_number(&mut self, field: Field) -> Result<f32, LoxError<IF::Error>> {
        self.query_scalar(field)?
            .as_number()
            .ok_or(LoxError::Decode(DecodeError::InvalidNumber))
    }

    /// Partial pressure of oxygen in mbar.
    pub fn ppo2(&mut self) -> Result<f32, LoxError<IF::Error>> {
        self.query_number(Field::PartialPressure)
    }

    /// Oxygen concentration in percent.
    pub fn o2_percent(&mut self) -> Result<f32, LoxError<IF::Error>> {
        self.query_number(Field::Percent)
    }

    /// Sensor temperature in degrees Celsius.
    pub fn temperature(&mut self) -> Result<f32, LoxError<IF::Error>> {
        self.query_number(Field::Temperature)
    }

    /// Barometric pressure in mbar.
    pub fn pressure(&mut self) -> Result<f32, LoxError<IF::Error>> {
        self.query_number(Field::Pressure)
    }

    /// The sensor's status code, kept as received.
    pub fn sensor_status(&mut self) -> Result<StatusCode, LoxError<IF::Error>> {
        self.query_scalar(Field::Status)?
            .into_text()
            .ok_or(LoxError::Decode(DecodeError::MissingValue))
    }

    /// Reads every field at once without changing the output mode.
    ///
    /// In stream mode this is one stream line; otherwise the `A` command,
    /// whose reply uses the stream-line layout.
    pub fn read_all(&mut self) -> Result<ReadingSet, LoxError<IF::Error>> {
        match self.current_mode {
            OutputMode::Stream => self.read_stream_reading_set(),
            OutputMode::Poll | OutputMode::Off => {
                self.transact(&Command::QueryAll, |text| decode_stream_line(text.as_bytes()))
            }
        }
    }

    /// Reads one identity field with the `# n` command.
    pub fn read_identity_field(
        &mut self,
        field: IdentityField,
    ) -> Result<IdentityValue, LoxError<IF::Error>> {
        self.transact(&Command::Identity(field), |text| IdentityValue::parse(field, text))
    }

    pub fn date_of_manufacture(&mut self) -> Result<ManufactureDate, LoxError<IF::Error>> {
        self.transact(&Command::Identity(IdentityField::ManufactureDate), parse_manufacture_date)
    }

    pub fn serial_number(&mut self) -> Result<u32, LoxError<IF::Error>> {
        self.transact(&Command::Identity(IdentityField::SerialNumber), parse_serial_number)
    }

    pub fn software_revision(&mut self) -> Result<u32, LoxError<IF::Error>> {
        self.transact(&Command::Identity(IdentityField::SoftwareRevision), parse_software_revision)
    }

    /// Reads date of manufacture, serial number and software revision in turn.
    pub fn read_identity(&mut self) -> Result<DeviceIdentity, LoxError<IF::Error>> {
        Ok(DeviceIdentity {
            date_of_manufacture: self.date_of_manufacture()?,
            serial_number: self.serial_number()?,
            software_revision: self.software_revision()?,
        })
    }
}
