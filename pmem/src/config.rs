//! Store configuration.

use crate::range::Range;
use crate::rf::{Frequency, TUNED_FREQUENCY_DEFAULT, TUNING_RANGE};

/// Parameters injected into [`PersistentMemory`](crate::PersistentMemory).
///
/// # Example
///
/// ```ignore
/// use pmem::{Range, StoreConfig};
/// let config = StoreConfig::new().tuning_range(Range::new(10_000_000, 6_000_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub(crate) tuning_range: Range<Frequency>,
}

impl StoreConfig {
    pub const fn new() -> Self {
        Self {
            tuning_range: TUNING_RANGE,
        }
    }

    /// Legal tuning range of the radio front end.
    ///
    /// # Panics
    ///
    /// Panics if the range does not contain
    /// [`TUNED_FREQUENCY_DEFAULT`](crate::rf::TUNED_FREQUENCY_DEFAULT); in a
    /// `const` context this is a build error.
    pub const fn tuning_range(mut self, range: Range<Frequency>) -> Self {
        assert!(
            range.lo <= TUNED_FREQUENCY_DEFAULT && TUNED_FREQUENCY_DEFAULT <= range.hi,
            "tuning range must contain the reset frequency"
        );
        self.tuning_range = range;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NARROW: StoreConfig =
        StoreConfig::new().tuning_range(Range::new(50_000_000, 1_000_000_000));

    #[test]
    fn range_containing_reset_frequency_is_accepted() {
        assert_eq!(NARROW.tuning_range, Range::new(50_000_000, 1_000_000_000));
        assert_eq!(StoreConfig::default().tuning_range, TUNING_RANGE);
    }

    #[test]
    #[should_panic(expected = "tuning range must contain the reset frequency")]
    fn range_excluding_reset_frequency_is_rejected() {
        let range = Range::new(400_000_000, 470_000_000);
        let _ = StoreConfig::new().tuning_range(range);
    }
}
