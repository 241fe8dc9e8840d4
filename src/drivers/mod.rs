//! Hardware-facing drivers.

pub mod input;
