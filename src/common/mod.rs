// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod command;
pub mod config;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod identity;
pub mod reading;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From command.rs
pub use command::Command;

// From config.rs
pub use config::LoxConfig;

// From error.rs
pub use error::{DecodeError, DeviceErrorKind, FrameError, LoxError, ProtocolError};

// From frame.rs
pub use frame::{
    decode_response, decode_stream_line, encode_command, FrameBuffer, LineBuffer,
};

// From hal_traits.rs
pub use hal_traits::{LoxInstant, LoxSerial, LoxTimer, SplitInterface};

// From identity.rs
pub use identity::{DeviceIdentity, IdentityField, IdentityValue, ManufactureDate};

// From reading.rs
pub use reading::ReadingSet;

// From types.rs
pub use types::{Field, FieldKind, OutputMode, Reading, StatusCode};

// --- Feature-gated re-exports ---

#[cfg(feature = "std")]
pub use hal_traits::StdTimer;

#[cfg(feature = "impl-generic-hal")]
pub use hal_traits::HalTimer;
