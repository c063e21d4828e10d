//! Closed-interval range guard.

/// A closed interval `[lo, hi]` over an ordered numeric type.
///
/// Used both to coerce incoming values (`clip`) and to repair stored values
/// in place before they are handed out (`reset_if_outside`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Range<T> {
    pub(crate) lo: T,
    pub(crate) hi: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    /// `lo` must not be greater than `hi`.
    pub const fn new(lo: T, hi: T) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub fn lo(&self) -> T {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> T {
        self.hi
    }

    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value >= self.lo && value <= self.hi
    }

    /// Saturate `value` at the nearer bound.
    #[inline]
    pub fn clip(&self, value: T) -> T {
        if value < self.lo {
            self.lo
        } else if value > self.hi {
            self.hi
        } else {
            value
        }
    }

    /// `value` if it is inside the range, `default` otherwise.
    #[inline]
    pub fn or_default(&self, value: T, default: T) -> T {
        if self.contains(value) {
            value
        } else {
            default
        }
    }

    /// Overwrite `*value` with `default` if it lies outside the range.
    ///
    /// Returns `true` when the value was replaced.
    #[inline]
    pub fn reset_if_outside(&self, value: &mut T, default: T) -> bool {
        if self.contains(*value) {
            false
        } else {
            *value = default;
            true
        }
    }
}
