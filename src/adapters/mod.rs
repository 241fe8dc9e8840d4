//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter | Implements | Connects to                                  |
//! |---------|------------|----------------------------------------------|
//! | `time`  | Clock      | ESP32 system timer / host `Instant` / manual |

pub mod time;
