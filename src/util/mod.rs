//! Shared utilities.

/// Frame clock producing per-update `dt` values.
pub mod frame_timing;

pub use frame_timing::FrameClock;
