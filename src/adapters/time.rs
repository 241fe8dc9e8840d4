//! Millisecond time sources.
//!
//! The button core takes `now_ms` as a parameter; the [`Clock`] port is how
//! the polling adapter obtains it.
//!
//! - **`target_os = "espidf"`** — [`SystemClock`] wraps `esp_timer_get_time()`
//!   from the ESP-IDF high-resolution timer.
//! - **`not(target_os = "espidf")`** — [`SystemClock`] uses
//!   `std::time::Instant` for host-side runs.
//!
//! [`ManualClock`] is driven by hand for tests and simulation.

use core::cell::Cell;

/// Monotonically non-decreasing millisecond counter.
///
/// The value is allowed to wrap at `u32::MAX`; consumers compute elapsed
/// time with `wrapping_sub`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

// ── System clock ──────────────────────────────────────────────

/// Milliseconds since boot (ESP-IDF) or since construction (host).
pub struct SystemClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    #[cfg(target_os = "espidf")]
    fn now_ms(&self) -> u32 {
        // SAFETY: esp_timer_get_time only reads the RTC counter.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() } / 1_000) as u32
    }

    #[cfg(not(target_os = "espidf"))]
    fn now_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}

// ── Manual clock ──────────────────────────────────────────────

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    pub fn new(start_ms: u32) -> Self {
        Self { now: Cell::new(start_ms) }
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    /// Move forward by `ms`, wrapping at `u32::MAX`.
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
