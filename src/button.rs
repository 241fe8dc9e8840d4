//! Debounced momentary button with press, hold, and release edges.
//!
//! ## Polling contract
//!
//! Once per poll cycle the caller writes the raw pin reading with
//! [`Button::set_raw_state`] and then calls [`Button::update`] with the
//! current monotonic time in milliseconds. The button never samples hardware
//! or reads a clock on its own.
//!
//! ## State machine
//!
//! ```text
//!             raw && Δ > 5·debounce          Δ > debounce && raw
//!  Unpressed ─────────────────────▶ Triggered ───────────────────▶ Pressed
//!      ▲                                                (on_press)   │
//!      │                       !raw                                  │ raw && Δ > hold
//!      ├─────────────────────────────────────────────────────────────┤ (on_hold)
//!      │                       !raw                                  ▼
//!      ├──────────────────────────────────────────────────────────  Held
//!      │                       !raw
//!      └──────────────────────────────────────────────────────────  Disabled
//! ```
//!
//! `Δ` is the time since the last transition stamp, computed with wrapping
//! subtraction so a single wrap of the `u32` millisecond counter is harmless.
//!
//! The settle gate (5× debounce, measured from the last transition) rejects
//! spikes and contact bounce right after a release; the shorter confirm window
//! then commits the press. A `Triggered` button whose signal vanished during
//! the confirm window stays `Triggered` until the signal returns.
//!
//! `Disabled` is never entered by [`Button::update`]. It is a lockout set from
//! outside with [`Button::disable`]: press and hold reactions stop, but the
//! release is still reported once the raw signal drops.

use log::{debug, trace};

use crate::config::ButtonConfig;
use crate::handler::Handler;

/// Default minimum time between qualifying raw changes.
pub const DEFAULT_DEBOUNCE_MS: u32 = 10;
/// Default time a press must be held before it becomes [`ButtonState::Held`].
pub const DEFAULT_HOLD_MS: u32 = 400;
/// The settle gate before `Triggered` is this many debounce periods long.
pub const SETTLE_FACTOR: u32 = 5;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Debounced logical state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    #[default]
    Unpressed,
    /// Raw signal seen after the settle gate; waiting for confirmation.
    Triggered,
    Pressed,
    Held,
    /// Externally imposed lockout.
    Disabled,
}

impl ButtonState {
    /// Whether this state counts as actuated for edge detection.
    ///
    /// `Pressed`, `Held` and `Disabled` are actuated; `Unpressed` and
    /// `Triggered` are not.
    pub const fn is_actuated(self) -> bool {
        match self {
            Self::Unpressed | Self::Triggered => false,
            Self::Pressed | Self::Held | Self::Disabled => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Button {
    pin: Option<u8>,
    raw_state: bool,
    state: ButtonState,
    previous_state: ButtonState,
    last_transition_ms: u32,
    debounce_ms: u32,
    hold_ms: u32,
    on_press: Handler,
    on_hold: Handler,
}

impl Default for Button {
    fn default() -> Self {
        Self::unbound()
    }
}

impl Button {
    /// Button attached to `pin`. The pin id is informational only.
    pub fn new(pin: u8) -> Self {
        Self {
            pin: Some(pin),
            ..Self::unbound()
        }
    }

    /// Button with no associated hardware line.
    pub fn unbound() -> Self {
        Self {
            pin: None,
            raw_state: false,
            state: ButtonState::Unpressed,
            previous_state: ButtonState::Unpressed,
            last_transition_ms: 0,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            hold_ms: DEFAULT_HOLD_MS,
            on_press: Handler::default(),
            on_hold: Handler::default(),
        }
    }

    /// Button on `pin` with durations taken from `config`.
    ///
    /// Zero durations in `config` are ignored the same way the setters
    /// ignore them, leaving the defaults in place.
    pub fn with_config(pin: u8, config: &ButtonConfig) -> Self {
        let mut button = Self::new(pin);
        button.set_debounce_duration(config.debounce_ms);
        button.set_hold_duration(config.hold_ms);
        button
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn pin(&self) -> Option<u8> {
        self.pin
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn previous_state(&self) -> ButtonState {
        self.previous_state
    }

    pub fn raw_state(&self) -> bool {
        self.raw_state
    }

    pub fn last_transition_ms(&self) -> u32 {
        self.last_transition_ms
    }

    pub fn debounce_duration(&self) -> u32 {
        self.debounce_ms
    }

    pub fn hold_duration(&self) -> u32 {
        self.hold_ms
    }

    /// `true` while the button is `Pressed` or `Held`.
    pub fn is_pressed(&self) -> bool {
        matches!(self.state, ButtonState::Pressed | ButtonState::Held)
    }

    // ── Configuration ─────────────────────────────────────────

    /// Set the debounce duration. Zero is ignored.
    pub fn set_debounce_duration(&mut self, ms: u32) {
        if ms > 0 {
            self.debounce_ms = ms;
        }
    }

    /// Set the hold duration. Zero is ignored.
    pub fn set_hold_duration(&mut self, ms: u32) {
        if ms > 0 {
            self.hold_ms = ms;
        }
    }

    /// Replace the press callback. A previously registered callback that has
    /// not fired yet is dropped without running.
    pub fn register_on_press<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_press = Handler::new(f);
    }

    /// Replace the hold callback. Same replacement rule as
    /// [`register_on_press`](Self::register_on_press).
    pub fn register_on_hold<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_hold = Handler::new(f);
    }

    // ── Polling ───────────────────────────────────────────────

    /// Record the unfiltered hardware reading for this cycle.
    pub fn set_raw_state(&mut self, pressed: bool) {
        self.raw_state = pressed;
    }

    /// Lock the button out of press and hold reactions.
    ///
    /// The lockout ends with the next release: once the raw signal is low,
    /// [`update`](Self::update) moves the button back to `Unpressed`.
    pub fn disable(&mut self, now_ms: u32) {
        if self.state != ButtonState::Disabled {
            self.transition(ButtonState::Disabled, now_ms);
        }
    }

    /// Advance the state machine by one step.
    ///
    /// Must be called once per poll cycle after [`set_raw_state`](Self::set_raw_state).
    pub fn update(&mut self, now_ms: u32) {
        let elapsed = now_ms.wrapping_sub(self.last_transition_ms);

        match self.state {
            ButtonState::Unpressed => {
                if self.raw_state && elapsed > self.debounce_ms.saturating_mul(SETTLE_FACTOR) {
                    self.transition(ButtonState::Triggered, now_ms);
                }
            }

            ButtonState::Triggered => {
                if elapsed > self.debounce_ms && self.raw_state {
                    self.transition(ButtonState::Pressed, now_ms);
                    trace!("button {:?}: firing on_press", self.pin);
                    self.on_press.fire();
                }
            }

            ButtonState::Pressed | ButtonState::Held | ButtonState::Disabled if !self.raw_state => {
                self.transition(ButtonState::Unpressed, now_ms);
            }

            ButtonState::Pressed => {
                if elapsed > self.hold_ms {
                    self.transition(ButtonState::Held, now_ms);
                    trace!("button {:?}: firing on_hold", self.pin);
                    self.on_hold.fire();
                }
            }

            ButtonState::Held | ButtonState::Disabled => {}
        }
    }

    // ── Edge queries ──────────────────────────────────────────

    /// `true` once per press edge: the button moved from an idle state into
    /// an actuated one since the last consumed edge.
    pub fn just_pressed(&mut self) -> bool {
        if !self.previous_state.is_actuated() && self.state.is_actuated() {
            self.previous_state = self.state;
            true
        } else {
            false
        }
    }

    /// `true` once per release edge: the button moved from an actuated state
    /// back to `Unpressed` since the last consumed edge.
    pub fn just_released(&mut self) -> bool {
        if self.previous_state.is_actuated() && self.state == ButtonState::Unpressed {
            self.previous_state = self.state;
            true
        } else {
            false
        }
    }

    /// The only place `state` is written.
    fn transition(&mut self, next: ButtonState, now_ms: u32) {
        debug!("button {:?}: {:?} -> {:?} @ {}ms", self.pin, self.state, next, now_ms);
        self.previous_state = self.state;
        self.state = next;
        self.last_transition_ms = now_ms;
    }
}
