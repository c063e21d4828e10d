//! Sub-field descriptors for bit-packed 32-bit words.

/// A contiguous run of `width` bits starting at bit `shift`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    shift: u32,
    width: u32,
}

impl BitField {
    pub const fn new(shift: u32, width: u32) -> Self {
        assert!(width > 0 && shift + width <= 32, "bit field out of word");
        Self { shift, width }
    }

    pub const fn bit(shift: u32) -> Self {
        Self::new(shift, 1)
    }

    /// Largest value the field can hold.
    #[inline]
    pub const fn max(&self) -> u32 {
        u32::MAX >> (32 - self.width)
    }

    /// Mask of the field's bits in place.
    #[inline]
    pub const fn mask(&self) -> u32 {
        self.max() << self.shift
    }

    #[inline]
    pub const fn extract(&self, word: u32) -> u32 {
        (word >> self.shift) & self.max()
    }

    /// Replace the field's bits in `word`, leaving every other bit unchanged.
    /// Excess high bits of `value` are discarded.
    #[inline]
    pub const fn insert(&self, word: u32, value: u32) -> u32 {
        (word & !self.mask()) | ((value & self.max()) << self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_byte_field() {
        let repeats = BitField::new(24, 8);
        assert_eq!(repeats.max(), 0xFF);
        assert_eq!(repeats.mask(), 0xFF00_0000);
        assert_eq!(repeats.extract(0xAB12_3456), 0xAB);
        assert_eq!(repeats.insert(0xAB12_3456, 0x05), 0x0512_3456);
    }

    #[test]
    fn insert_truncates_and_preserves_neighbours() {
        let field = BitField::new(5, 3);
        let word = 0xFFFF_FF1F;
        assert_eq!(field.insert(word, 0b1111), 0xFFFF_FFFF);
        assert_eq!(field.insert(0xFFFF_FFFF, 0), word);
    }

    #[test]
    fn single_bit() {
        let flag = BitField::bit(3);
        assert_eq!(flag.mask(), 0b1000);
        assert_eq!(flag.extract(0b1000), 1);
        assert_eq!(flag.insert(0b0111, 1), 0b1111);
    }

    #[test]
    fn full_word_field() {
        let all = BitField::new(0, 32);
        assert_eq!(all.max(), u32::MAX);
        assert_eq!(all.insert(0, 0x1234_5678), 0x1234_5678);
    }
}
