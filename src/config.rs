//! Button configuration parameters
//!
//! Tunable timing and wiring for one button. Values can be provisioned as
//! JSON or as a compact postcard blob (e.g. stored in NVS).

use serde::{Deserialize, Serialize};

use crate::button::{DEFAULT_DEBOUNCE_MS, DEFAULT_HOLD_MS};
use crate::error::{Error, Result};

/// Electrical level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Polarity {
    /// Switch pulls the line to GND against a pull-up.
    #[default]
    ActiveLow,
    /// Switch drives the line high against a pull-down.
    ActiveHigh,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Confirm window before a trigger becomes a press (milliseconds).
    /// The settle gate ahead of it is five times this value.
    pub debounce_ms: u32,
    /// Time a press must last before it counts as a hold (milliseconds).
    pub hold_ms: u32,
    /// Which pin level reads as pressed.
    pub polarity: Polarity,
    /// Interval between polls of the pin (milliseconds).
    pub poll_interval_ms: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            hold_ms: DEFAULT_HOLD_MS,
            polarity: Polarity::ActiveLow,
            poll_interval_ms: 5,
        }
    }
}

impl ButtonConfig {
    /// Reject values the poll loop cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            return Err(Error::Config("debounce_ms must be > 0"));
        }
        if self.hold_ms == 0 {
            return Err(Error::Config("hold_ms must be > 0"));
        }
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be > 0"));
        }
        // A poll slower than the confirm window cannot resolve it.
        if self.poll_interval_ms > self.debounce_ms {
            return Err(Error::Config("poll_interval_ms must not exceed debounce_ms"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Encode as a postcard blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(postcard::to_allocvec(self)?)
    }

    /// Decode and validate a postcard blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let config: Self = postcard::from_bytes(bytes)?;
        config.validate()?;
        Ok(config)
    }
}
