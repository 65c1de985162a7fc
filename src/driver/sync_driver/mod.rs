// src/driver/sync_driver/mod.rs

mod io_helpers;
mod query;
mod stream;
mod transaction;

use log::debug;

use crate::common::{
    command::Command,
    config::LoxConfig,
    error::LoxError,
    frame::parse_mode,
    hal_traits::{LoxSerial, LoxTimer},
    types::OutputMode,
};

/// A Luminox sensor on a blocking, synchronous serial interface.
///
/// The driver remembers the output mode it last set or observed and uses it
/// to decide how each reading is obtained: in poll and off mode it sends the
/// matching query, in stream mode it takes the next stream line. Reading a
/// stream switches a polled sensor into stream mode; nothing switches it back
/// except [`set_output_mode`](Luminox::set_output_mode).
///
/// Every call performs at most one command exchange or stream read at a time
/// and never retries. Callers sharing a sensor between threads must serialize
/// access themselves.
#[derive(Debug)]
pub struct Luminox<IF>
where
    IF: LoxSerial + LoxTimer,
{
    interface: IF,
    config: LoxConfig,
    current_mode: OutputMode,
}

impl<IF> Luminox<IF>
where
    IF: LoxSerial + LoxTimer,
{
    /// Binds to an open interface with the default configuration and reads
    /// the sensor's current output mode.
    pub fn new(interface: IF) -> Result<Self, LoxError<IF::Error>> {
        Self::with_config(interface, LoxConfig::default())
    }

    /// Binds to an open interface and reads the sensor's current output mode.
    ///
    /// Fails with [`LoxError::Device`] if the sensor rejects the query and with
    /// [`LoxError::Timeout`] if it does not answer within the read timeout.
    pub fn with_config(interface: IF, config: LoxConfig) -> Result<Self, LoxError<IF::Error>> {
        // Placeholder until the sensor has answered the mode query.
        let mut sensor = Luminox {
            interface,
            config,
            current_mode: OutputMode::Poll,
        };
        sensor.current_mode = sensor.transact(&Command::QueryMode, parse_mode)?;
        debug!("sensor reports {} mode", sensor.current_mode);
        Ok(sensor)
    }

    /// The output mode last set or observed. Does not touch the interface.
    pub fn output_mode(&self) -> OutputMode {
        self.current_mode
    }

    /// Switches the sensor's output mode.
    ///
    /// The cached mode only changes once the sensor has acknowledged the command.
    pub fn set_output_mode(&mut self, mode: OutputMode) -> Result<(), LoxError<IF::Error>> {
        self.transact(&Command::SetMode(mode), |_| Ok(()))?;
        debug!("output mode {} -> {}", self.current_mode, mode);
        self.current_mode = mode;
        Ok(())
    }

    pub fn config(&self) -> &LoxConfig {
        &self.config
    }

    pub fn interface(&self) -> &IF {
        &self.interface
    }

    pub fn interface_mut(&mut self) -> &mut IF {
        &mut self.interface
    }

    /// Gives back the interface. No command is sent to the sensor.
    pub fn release(self) -> IF {
        self.interface
    }

    #[cfg(test)]
    fn with_cached_mode(interface: IF, current_mode: OutputMode) -> Self {
        Luminox {
            interface,
            config: LoxConfig::default(),
            current_mode,
        }
    }
}
