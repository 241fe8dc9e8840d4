//! `PolledButton` driven by a mock pin and a manual clock.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use embedded_hal::digital::ErrorKind;
use momentary::adapters::time::ManualClock;
use momentary::drivers::input::{PinSampler, PolledButton};
use momentary::{ButtonConfig, ButtonState, Error, Polarity};

use crate::mock_hw::{LineHandle, MockPin};

fn active_high() -> ButtonConfig {
    ButtonConfig {
        polarity: Polarity::ActiveHigh,
        ..ButtonConfig::default()
    }
}

/// Poll once per millisecond for `ms` milliseconds.
fn run(btn: &mut PolledButton<MockPin, &ManualClock>, clock: &ManualClock, ms: u32) {
    for _ in 0..ms {
        clock.advance(1);
        btn.poll().unwrap();
    }
}

#[test]
fn sampler_honours_polarity() {
    let line = LineHandle::default();

    let mut low = PinSampler::new(line.pin(), Polarity::ActiveLow);
    let mut high = PinSampler::new(line.pin(), Polarity::ActiveHigh);

    line.set_high(false);
    assert_eq!(low.sample(), Ok(true));
    assert_eq!(high.sample(), Ok(false));

    line.set_high(true);
    assert_eq!(low.sample(), Ok(false));
    assert_eq!(high.sample(), Ok(true));
}

#[test]
fn sampler_maps_pin_errors() {
    let line = LineHandle::default();
    let mut sampler = PinSampler::new(line.pin(), Polarity::ActiveLow);
    line.set_fail(true);
    assert_eq!(sampler.sample(), Err(Error::Sample(ErrorKind::Other)));
}

#[test]
fn full_press_hold_release_cycle() {
    let line = LineHandle::default();
    let clock = ManualClock::new(0);
    let mut btn = PolledButton::new(line.pin(), &clock, &active_high(), 3);

    let presses = Arc::new(AtomicU32::new(0));
    let holds = Arc::new(AtomicU32::new(0));
    let p = Arc::clone(&presses);
    let h = Arc::clone(&holds);
    btn.button_mut().register_on_press(move || {
        p.fetch_add(1, Ordering::SeqCst);
    });
    btn.button_mut().register_on_hold(move || {
        h.fetch_add(1, Ordering::SeqCst);
    });

    line.set_high(true);
    run(&mut btn, &clock, 70);
    assert_eq!(btn.button().state(), ButtonState::Pressed);
    assert_eq!(presses.load(Ordering::SeqCst), 1);
    assert!(btn.button_mut().just_pressed());

    run(&mut btn, &clock, 430);
    assert_eq!(btn.button().state(), ButtonState::Held);
    assert_eq!(holds.load(Ordering::SeqCst), 1);

    line.set_high(false);
    run(&mut btn, &clock, 1);
    assert_eq!(btn.button().state(), ButtonState::Unpressed);
    assert!(btn.button_mut().just_released());
    assert!(!btn.button_mut().just_released());
    assert_eq!(btn.button().pin(), Some(3));
}

#[test]
fn active_low_button_idles_released() {
    let line = LineHandle::default();
    line.set_high(true); // pull-up, not pressed
    let clock = ManualClock::new(0);
    let mut btn = PolledButton::new(line.pin(), &clock, &ButtonConfig::default(), 0);

    run(&mut btn, &clock, 200);
    assert_eq!(btn.button().state(), ButtonState::Unpressed);

    line.set_high(false);
    run(&mut btn, &clock, 70);
    assert!(btn.button().is_pressed());
}

#[test]
fn failed_sample_skips_update() {
    let line = LineHandle::default();
    let clock = ManualClock::new(0);
    let mut btn = PolledButton::new(line.pin(), &clock, &active_high(), 0);

    line.set_high(true);
    run(&mut btn, &clock, 55);
    assert_eq!(btn.button().state(), ButtonState::Triggered);
    let stamp = btn.button().last_transition_ms();

    line.set_fail(true);
    clock.advance(100);
    assert_eq!(btn.poll(), Err(Error::Sample(ErrorKind::Other)));
    assert_eq!(btn.button().state(), ButtonState::Triggered);
    assert_eq!(btn.button().last_transition_ms(), stamp);

    line.set_fail(false);
    clock.advance(1);
    assert_eq!(btn.poll(), Ok(ButtonState::Pressed));
}

#[test]
fn custom_timing_from_config() {
    let line = LineHandle::default();
    let clock = ManualClock::new(0);
    let config = ButtonConfig {
        debounce_ms: 20,
        hold_ms: 1000,
        polarity: Polarity::ActiveHigh,
        poll_interval_ms: 5,
    };
    let mut btn = PolledButton::new(line.pin(), &clock, &config, 0);

    line.set_high(true);
    run(&mut btn, &clock, 100);
    assert_eq!(btn.button().state(), ButtonState::Unpressed);
    run(&mut btn, &clock, 1);
    assert_eq!(btn.button().state(), ButtonState::Triggered);
    run(&mut btn, &clock, 21);
    assert_eq!(btn.button().state(), ButtonState::Pressed);
    run(&mut btn, &clock, 900);
    assert_eq!(btn.button().state(), ButtonState::Pressed);
    run(&mut btn, &clock, 200);
    assert_eq!(btn.button().state(), ButtonState::Held);
}

#[test]
fn into_parts_returns_pin_and_button() {
    let line = LineHandle::default();
    let clock = ManualClock::new(0);
    let mut btn = PolledButton::new(line.pin(), &clock, &active_high(), 9);
    btn.poll().unwrap();

    let (_pin, button) = btn.into_parts();
    assert_eq!(button.pin(), Some(9));
    assert_eq!(line.reads(), 1);
}
