//! Debounced momentary-button library.
//!
//! The [`button`] module holds the pure state machine; it is fed a raw pin
//! reading and a millisecond timestamp each poll cycle and never touches
//! hardware. [`drivers::input`] and [`adapters::time`] connect it to an
//! `embedded-hal` pin and a clock. ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod button;
pub mod config;
pub mod drivers;
pub mod error;
pub mod handler;
pub mod pins;

pub use button::{Button, ButtonState};
pub use config::{ButtonConfig, Polarity};
pub use error::{Error, Result};
