//! Packed UI preferences word.

use crate::bitfield::BitField;

/// Backlight-off delays selectable by index, in seconds.
pub const BACKLIGHT_TIMEOUTS_S: [u16; 5] = [5, 15, 60, 300, 600];

/// Index substituted when the stored index is past the end of the table (15 s).
pub const BACKLIGHT_INDEX_DEFAULT: u8 = 1;

/// Text-entry method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TextEntry {
    /// On-screen keyboard.
    Keyboard = 0,
    /// Handwriting (unistroke) recognizer.
    Handwriting = 1,
}

/// Packed UI configuration.
///
/// ```text
///  7   5   4    3       2        1      0
/// +-----+----+-------+--------+-------+----+
/// | idx | -- | stlth | txtent | bloff | -- |
/// +-----+----+-------+--------+-------+----+
/// ```
///
/// `idx` selects an entry of [`BACKLIGHT_TIMEOUTS_S`]; only 0..=4 are valid.
/// Bits outside the named fields are carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct UiConfig(pub u32);

impl UiConfig {
    pub const BACKLIGHT_OFF: BitField = BitField::bit(1);
    pub const TEXT_ENTRY: BitField = BitField::bit(2);
    pub const STEALTH: BitField = BitField::bit(3);
    pub const BACKLIGHT_INDEX: BitField = BitField::new(5, 3);

    pub const fn stealth_mode(self) -> bool {
        Self::STEALTH.extract(self.0) != 0
    }

    pub const fn with_stealth_mode(self, enabled: bool) -> Self {
        Self(Self::STEALTH.insert(self.0, enabled as u32))
    }

    pub const fn backlight_off_enabled(self) -> bool {
        Self::BACKLIGHT_OFF.extract(self.0) != 0
    }

    pub const fn with_backlight_off_enabled(self, enabled: bool) -> Self {
        Self(Self::BACKLIGHT_OFF.insert(self.0, enabled as u32))
    }

    pub const fn text_entry(self) -> TextEntry {
        match Self::TEXT_ENTRY.extract(self.0) {
            0 => TextEntry::Keyboard,
            _ => TextEntry::Handwriting,
        }
    }

    pub const fn with_text_entry(self, mode: TextEntry) -> Self {
        Self(Self::TEXT_ENTRY.insert(self.0, mode as u32))
    }

    /// Stored index, possibly out of table bounds.
    pub const fn raw_backlight_index(self) -> u8 {
        Self::BACKLIGHT_INDEX.extract(self.0) as u8
    }

    /// Index with out-of-table values replaced by [`BACKLIGHT_INDEX_DEFAULT`].
    pub const fn backlight_index(self) -> u8 {
        let index = self.raw_backlight_index();
        if (index as usize) < BACKLIGHT_TIMEOUTS_S.len() {
            index
        } else {
            BACKLIGHT_INDEX_DEFAULT
        }
    }

    /// Set the index. Values past the table store [`BACKLIGHT_INDEX_DEFAULT`],
    /// the same substitution a read makes.
    pub const fn with_backlight_index(self, index: u8) -> Self {
        let index = if (index as usize) < BACKLIGHT_TIMEOUTS_S.len() {
            index
        } else {
            BACKLIGHT_INDEX_DEFAULT
        };
        Self(Self::BACKLIGHT_INDEX.insert(self.0, index as u32))
    }

    /// Backlight-off delay in seconds, `None` when the feature is disabled.
    pub const fn backlight_timeout_s(self) -> Option<u16> {
        if self.backlight_off_enabled() {
            Some(BACKLIGHT_TIMEOUTS_S[self.backlight_index() as usize])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_decode_from_documented_bits() {
        let cfg = UiConfig(0b0000_1110);
        assert!(cfg.backlight_off_enabled());
        assert_eq!(cfg.text_entry(), TextEntry::Handwriting);
        assert!(cfg.stealth_mode());
        assert_eq!(UiConfig(0).text_entry(), TextEntry::Keyboard);
    }

    #[test]
    fn index_past_table_reads_as_fifteen_seconds() {
        for raw in 5..=7u32 {
            let cfg = UiConfig(raw << 5).with_backlight_off_enabled(true);
            assert_eq!(cfg.raw_backlight_index(), raw as u8);
            assert_eq!(cfg.backlight_index(), 1);
            assert_eq!(cfg.backlight_timeout_s(), Some(15));
        }
    }

    #[test]
    fn timeout_table_lookup() {
        let expected = [5, 15, 60, 300, 600];
        for (index, seconds) in expected.iter().enumerate() {
            let cfg = UiConfig::default()
                .with_backlight_off_enabled(true)
                .with_backlight_index(index as u8);
            assert_eq!(cfg.backlight_timeout_s(), Some(*seconds));
        }
        assert_eq!(UiConfig(4 << 5).backlight_timeout_s(), None);
    }

    #[test]
    fn index_past_table_writes_as_fifteen_seconds() {
        for index in [5u8, 7, 8, 200] {
            let cfg = UiConfig(0xFFFF_FF1F).with_backlight_index(index);
            assert_eq!(cfg.raw_backlight_index(), BACKLIGHT_INDEX_DEFAULT);
            assert_eq!(cfg.backlight_index(), cfg.raw_backlight_index());
            assert_eq!(cfg.0 & !UiConfig::BACKLIGHT_INDEX.mask(), 0xFFFF_FF1F);
        }
        assert_eq!(UiConfig::default().with_backlight_index(4).raw_backlight_index(), 4);
    }

    #[test]
    fn stealth_toggle_leaves_other_bits() {
        let base = UiConfig(0xFFFF_FFF7);
        assert_eq!(base.with_stealth_mode(true).0, 0xFFFF_FFFF);
        assert_eq!(base.with_stealth_mode(true).with_stealth_mode(false), base);
    }
}
