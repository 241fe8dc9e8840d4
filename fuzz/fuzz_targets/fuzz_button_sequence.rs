//! Fuzz target: `Button` state machine
//!
//! Drives the button with arbitrary raw readings, time steps, lockouts and
//! edge queries, verifying:
//! - No panics, including across `u32` timer wrap
//! - Every state change follows the transition table
//! - `previous_state` always records the state that was left
//!
//! cargo fuzz run fuzz_button_sequence

#![no_main]

use libfuzzer_sys::fuzz_target;
use momentary::{Button, ButtonState};

fn allowed(from: ButtonState, to: ButtonState) -> bool {
    use ButtonState::*;
    matches!(
        (from, to),
        (Unpressed, Triggered)
            | (Triggered, Pressed)
            | (Pressed, Held)
            | (Pressed | Held | Disabled, Unpressed)
    )
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }

    let mut btn = Button::new(data[0]);
    btn.set_debounce_duration(u32::from(data[1]));
    btn.set_hold_duration(u32::from(u16::from_le_bytes([data[2], data[3]])));
    let mut now = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);

    // Each byte: bit 0 = raw, bit 1 = lockout, bits 2..8 = time step.
    for &b in &data[8..] {
        now = now.wrapping_add(u32::from(b >> 2));

        if b & 0b10 != 0 && b & 0b1 != 0 {
            btn.disable(now);
            assert_eq!(btn.state(), ButtonState::Disabled);
            continue;
        }

        let before = btn.state();
        btn.set_raw_state(b & 0b1 != 0);
        btn.update(now);
        let after = btn.state();

        if before != after {
            assert!(allowed(before, after), "illegal {:?} -> {:?}", before, after);
            assert_eq!(btn.previous_state(), before);
        }

        if btn.just_pressed() {
            assert!(!btn.just_pressed());
        }
        if btn.just_released() {
            assert!(!btn.just_released());
        }
    }
});
