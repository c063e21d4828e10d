//! Magic-number validity markers.
//!
//! A sentinel-guarded field is stored next to a 32-bit marker. The field is
//! only meaningful when the marker holds the expected constant; anything else
//! (zeroed RAM after a cold boot, random garbage, a different firmware's data)
//! means the field must be replaced with its default before use.
//!
//! Everything here is a pure function of the stored words. Applying the
//! resulting write-back to memory is left to the accessor.

/// A stored value tagged with whether its sentinel matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MaybeValid<T> {
    /// Sentinel matched; the stored value may be used.
    Valid(T),
    /// Sentinel mismatched; carries the raw marker that was found.
    Invalid { found: u32 },
}

impl<T> MaybeValid<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, MaybeValid::Valid(_))
    }

    /// The stored value, if valid.
    pub fn valid(self) -> Option<T> {
        match self {
            MaybeValid::Valid(value) => Some(value),
            MaybeValid::Invalid { .. } => None,
        }
    }
}

/// Outcome of a self-healing read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Healed<T> {
    /// Value to report to the caller.
    pub value: T,
    /// `Some((magic, value))` when storage must be rewritten before returning.
    pub write_back: Option<(u32, T)>,
}

/// An expected marker value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sentinel(u32);

impl Sentinel {
    /// Zero and all-ones are rejected at compile time: erased or cleared
    /// memory must never look initialized.
    pub const fn new(magic: u32) -> Self {
        assert!(magic != 0 && magic != u32::MAX, "sentinel must not match blank memory");
        Self(magic)
    }

    #[inline]
    pub const fn magic(&self) -> u32 {
        self.0
    }

    #[inline]
    pub fn matches(&self, stored: u32) -> bool {
        stored == self.0
    }

    pub fn classify<T>(&self, stored_magic: u32, stored: T) -> MaybeValid<T> {
        if self.matches(stored_magic) {
            MaybeValid::Valid(stored)
        } else {
            MaybeValid::Invalid {
                found: stored_magic,
            }
        }
    }

    /// Resolve a stored `(magic, value)` pair into the value to report.
    ///
    /// `default` is only evaluated when the sentinel mismatches.
    pub fn heal<T: Copy>(
        &self,
        stored_magic: u32,
        stored: T,
        default: impl FnOnce() -> T,
    ) -> Healed<T> {
        match self.classify(stored_magic, stored) {
            MaybeValid::Valid(value) => Healed {
                value,
                write_back: None,
            },
            MaybeValid::Invalid { .. } => {
                let value = default();
                Healed {
                    value,
                    write_back: Some((self.0, value)),
                }
            }
        }
    }
}
