//! Polled GPIO input for a [`Button`].
//!
//! [`PinSampler`] turns an `embedded-hal` [`InputPin`] into the "is pressed"
//! boolean the button expects, honouring the wiring polarity.
//! [`PolledButton`] runs one full poll cycle: sample, record, update.
//!
//! A failed pin read skips the update step for that cycle. The button keeps
//! its previous raw reading and timestamps, and the error goes back to the
//! caller.

use embedded_hal::digital::{Error as _, InputPin};
use log::warn;

use crate::adapters::time::Clock;
use crate::button::{Button, ButtonState};
use crate::config::{ButtonConfig, Polarity};
use crate::error::{Error, Result};

pub struct PinSampler<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin> PinSampler<P> {
    /// Wrap a pin. The caller configures pull resistors beforehand.
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Read the pin and return `true` if the switch is actuated.
    pub fn sample(&mut self) -> Result<bool> {
        let reading = match self.polarity {
            Polarity::ActiveLow => self.pin.is_low(),
            Polarity::ActiveHigh => self.pin.is_high(),
        };
        reading.map_err(|e| Error::Sample(e.kind()))
    }

    /// Give the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}

pub struct PolledButton<P, C> {
    sampler: PinSampler<P>,
    clock: C,
    button: Button,
}

impl<P: InputPin, C: Clock> PolledButton<P, C> {
    /// Button on `pin_id`, sampled from `pin` with timing from `config`.
    pub fn new(pin: P, clock: C, config: &ButtonConfig, pin_id: u8) -> Self {
        Self {
            sampler: PinSampler::new(pin, config.polarity),
            clock,
            button: Button::with_config(pin_id, config),
        }
    }

    /// One poll cycle. Returns the state after the update step.
    pub fn poll(&mut self) -> Result<ButtonState> {
        let pressed = self.sampler.sample().inspect_err(|e| {
            warn!("button {:?}: {}", self.button.pin(), e);
        })?;
        self.button.set_raw_state(pressed);
        self.button.update(self.clock.now_ms());
        Ok(self.button.state())
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut Button {
        &mut self.button
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Tear down into the pin and the button.
    pub fn into_parts(self) -> (P, Button) {
        (self.sampler.release(), self.button)
    }
}
