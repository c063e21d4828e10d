//! Radio tuning limits and reference correction limits.

use crate::range::Range;

/// Frequency in Hz.
pub type Frequency = i64;

/// Reference oscillator correction in parts per billion.
pub type Ppb = i32;

/// Tunable range of the RF front end.
pub const TUNING_RANGE: Range<Frequency> = Range::new(1_000_000, 6_000_000_000);

/// Frequency restored when the stored one is unusable.
pub const TUNED_FREQUENCY_DEFAULT: Frequency = 100_000_000;

pub const PPB_RANGE: Range<Ppb> = Range::new(-99_000, 99_000);
pub const PPB_DEFAULT: Ppb = 0;
