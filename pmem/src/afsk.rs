//! AFSK modem profile: tone, rate and filter limits plus the packed config word.

use crate::bitfield::BitField;
use crate::range::Range;

/// Mark/space tone offset limits (shared by both tones).
pub const FREQ_RANGE: Range<i32> = Range::new(1, 400);
pub const MARK_DEFAULT: i32 = 48;
pub const SPACE_DEFAULT: i32 = 88;

pub const BITRATE_RANGE: Range<i32> = Range::new(600, 9600);
pub const BITRATE_DEFAULT: i32 = 1200;

pub const BW_RANGE: Range<i32> = Range::new(1, 50);
pub const BW_DEFAULT: i32 = 15;

/// Packed AFSK options word.
///
/// ```text
///  31      24 23    18 17 16 15            0
/// +----------+--------+-----+---------------+
/// | repeats  |   --   | fmt |      --       |
/// +----------+--------+-----+---------------+
/// ```
///
/// Bits outside the named fields belong to the caller and are carried through
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct AfskConfig(pub u32);

impl AfskConfig {
    pub const FORMAT: BitField = BitField::new(16, 2);
    pub const REPEATS: BitField = BitField::new(24, 8);

    pub const fn format(self) -> u8 {
        Self::FORMAT.extract(self.0) as u8
    }

    pub const fn with_format(self, format: u8) -> Self {
        Self(Self::FORMAT.insert(self.0, format as u32))
    }

    pub const fn repeats(self) -> u8 {
        Self::REPEATS.extract(self.0) as u8
    }

    pub const fn with_repeats(self, repeats: u8) -> Self {
        Self(Self::REPEATS.insert(self.0, repeats as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_in_range() {
        assert!(FREQ_RANGE.contains(MARK_DEFAULT));
        assert!(FREQ_RANGE.contains(SPACE_DEFAULT));
        assert!(BITRATE_RANGE.contains(BITRATE_DEFAULT));
        assert!(BW_RANGE.contains(BW_DEFAULT));
    }

    #[test]
    fn sub_fields_decode_from_raw_word() {
        let cfg = AfskConfig(0x0A03_00FF);
        assert_eq!(cfg.format(), 3);
        assert_eq!(cfg.repeats(), 0x0A);
    }

    #[test]
    fn sub_field_updates_keep_other_bits() {
        let cfg = AfskConfig(0x00FC_FFFF).with_format(2).with_repeats(5);
        assert_eq!(cfg.0, 0x05FE_FFFF);
        assert_eq!(cfg.with_format(0).0, 0x05FC_FFFF);
    }
}
