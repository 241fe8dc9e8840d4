//! GPIO pin assignments for the demo board.
//!
//! Single source of truth for the demo binary; the library itself never
//! hard-codes a pin.

/// Momentary push button, active-low against the internal pull-up.
/// GPIO 0 is the BOOT button on most ESP32-S3 dev kits.
pub const BUTTON_GPIO: u8 = 0;
