//! Button demo — Main Entry Point
//!
//! Polls the BOOT button on an ESP32-S3 dev kit and logs press, hold and
//! release edges.
//!
//! ```text
//! ┌──────────────┐   bool   ┌───────────┐  now_ms  ┌─────────────┐
//! │ PinDriver    │────────▶│  Button   │◀─────────│ SystemClock │
//! │ (GPIO0, PU)  │          │  (FSM)    │          │ (esp_timer) │
//! └──────────────┘          └───────────┘          └─────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::{info, warn};

use momentary::adapters::time::SystemClock;
use momentary::drivers::input::PolledButton;
use momentary::{ButtonConfig, pins};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("momentary demo v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Button input ───────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let mut pin = PinDriver::input(peripherals.pins.gpio0)?;
    pin.set_pull(Pull::Up)?;

    let config = ButtonConfig::default();
    config.validate()?;

    let mut button = PolledButton::new(pin, SystemClock::new(), &config, pins::BUTTON_GPIO);
    button
        .button_mut()
        .register_on_press(|| info!("on_press: first press since boot"));
    button
        .button_mut()
        .register_on_hold(|| info!("on_hold: first hold since boot"));

    info!(
        "polling GPIO{} every {}ms (debounce={}ms hold={}ms)",
        pins::BUTTON_GPIO,
        config.poll_interval_ms,
        config.debounce_ms,
        config.hold_ms,
    );

    // ── 3. Poll loop ──────────────────────────────────────────
    loop {
        match button.poll() {
            Ok(state) => {
                let btn = button.button_mut();
                if btn.just_pressed() {
                    info!("PRESS   | state={:?}", state);
                }
                if btn.just_released() {
                    info!("RELEASE | state={:?}", state);
                }
            }
            Err(e) => warn!("poll failed: {}", e),
        }
        FreeRtos::delay_ms(config.poll_interval_ms);
    }
}
