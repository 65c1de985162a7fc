// src/lib.rs

//! Driver for the Luminox optical oxygen sensor's UART protocol.
//!
//! The sensor speaks a line-oriented ASCII protocol and runs in one of three
//! output modes: poll (answers queries), stream (emits a reading line about
//! once per second) or off. [`Luminox`] hides the difference: each accessor
//! either sends a query or takes the next stream line, depending on the mode
//! it last set or observed.
//!
//! The crate is `no_std` by default. Supply the serial port and a timer by
//! implementing [`LoxSerial`] and [`LoxTimer`], or combine separate ones with
//! [`SplitInterface`].

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::{
    Field, LoxConfig, LoxError, LoxSerial, LoxTimer, OutputMode, Reading, ReadingSet,
    SplitInterface,
};
pub use driver::Luminox;
