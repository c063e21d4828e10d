//! Play-dead unlock sequence encoding.
//!
//! The sequence word accumulates key presses three bits at a time: each press
//! shifts the word left by three and ORs in the key code, so the first key of
//! the sequence ends up in the most significant group.

use crate::sentinel::Sentinel;

pub const MAGIC: Sentinel = Sentinel::new(0x88D3_BB57);

/// Up, Down, Left, Right.
pub const SEQUENCE_DEFAULT: PlayDeadSequence = PlayDeadSequence(0x8D1);

/// Keys that can take part in the unlock sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Key {
    Right = 1,
    Left = 2,
    Down = 3,
    Up = 4,
    Select = 5,
}

impl Key {
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Key::Right),
            2 => Some(Key::Left),
            3 => Some(Key::Down),
            4 => Some(Key::Up),
            5 => Some(Key::Select),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn symbol(self) -> char {
        match self {
            Key::Right => 'R',
            Key::Left => 'L',
            Key::Down => 'D',
            Key::Up => 'U',
            Key::Select => 'S',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'R' => Some(Key::Right),
            'L' => Some(Key::Left),
            'D' => Some(Key::Down),
            'U' => Some(Key::Up),
            'S' => Some(Key::Select),
            _ => None,
        }
    }
}

/// Encoded unlock sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct PlayDeadSequence(pub u32);

impl PlayDeadSequence {
    const KEY_BITS: u32 = 3;
    const KEY_MASK: u32 = 0b111;

    /// Longest sequence that fits in the word.
    pub const MAX_KEYS: usize = (u32::BITS / Self::KEY_BITS) as usize;

    /// Append a key press. Presses beyond [`MAX_KEYS`](Self::MAX_KEYS) shift
    /// the oldest key out.
    pub const fn push(self, key: Key) -> Self {
        Self((self.0 << Self::KEY_BITS) | key.code() as u32)
    }

    /// Encode a sequence; `None` if it is empty or longer than `MAX_KEYS`.
    pub fn from_keys(keys: &[Key]) -> Option<Self> {
        if keys.is_empty() || keys.len() > Self::MAX_KEYS {
            return None;
        }
        Some(keys.iter().fold(Self(0), |seq, key| seq.push(*key)))
    }

    /// Parse a string of key symbols such as `"UDLR"`.
    pub fn from_symbols(symbols: &str) -> Option<Self> {
        let mut keys = [Key::Select; Self::MAX_KEYS];
        let mut len = 0;
        for symbol in symbols.chars() {
            if len == Self::MAX_KEYS {
                return None;
            }
            keys[len] = Key::from_symbol(symbol)?;
            len += 1;
        }
        Self::from_keys(&keys[..len])
    }

    /// Number of three-bit groups up to the most significant non-zero one.
    pub const fn len(self) -> usize {
        let used = u32::BITS - self.0.leading_zeros();
        used.div_ceil(Self::KEY_BITS) as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Decode the key codes, first press first. Groups that are not a valid
    /// key code decode as `None`.
    pub fn keys(self) -> impl Iterator<Item = Option<Key>> {
        (0..self.len()).rev().map(move |group| {
            let code = (self.0 >> (group as u32 * Self::KEY_BITS)) & Self::KEY_MASK;
            Key::from_code(code as u8)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sequence_is_up_down_left_right() {
        let keys: Vec<_> = SEQUENCE_DEFAULT.keys().collect();
        assert_eq!(
            keys,
            [Some(Key::Up), Some(Key::Down), Some(Key::Left), Some(Key::Right)]
        );
        assert_eq!(PlayDeadSequence::from_symbols("udlr"), Some(SEQUENCE_DEFAULT));
    }

    #[test]
    fn push_accumulates_like_key_handler() {
        let seq = PlayDeadSequence(0)
            .push(Key::Up)
            .push(Key::Down)
            .push(Key::Left)
            .push(Key::Right);
        assert_eq!(seq, SEQUENCE_DEFAULT);
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn rejects_overlong_and_unknown_sequences() {
        assert_eq!(PlayDeadSequence::MAX_KEYS, 10);
        assert!(PlayDeadSequence::from_symbols("UUUUUUUUUU").is_some());
        assert!(PlayDeadSequence::from_symbols("UUUUUUUUUUU").is_none());
        assert!(PlayDeadSequence::from_symbols("UX").is_none());
        assert!(PlayDeadSequence::from_symbols("").is_none());
    }

    #[test]
    fn invalid_groups_decode_as_none() {
        let keys: Vec<_> = PlayDeadSequence(0b111_001).keys().collect();
        assert_eq!(keys, [None, Some(Key::Right)]);
        assert!(PlayDeadSequence(0).is_empty());
        assert_eq!(PlayDeadSequence(0).keys().count(), 0);
    }
}
