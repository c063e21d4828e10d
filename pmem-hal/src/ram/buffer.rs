//! In-memory region for tests and image tooling.

use bytemuck::Pod;

use super::{Error, Region};

/// A retained-RAM stand-in backed by a plain `[u8; N]`.
///
/// Values are stored in native byte order at arbitrary (unaligned) offsets,
/// so a buffer captured from hardware can be loaded and inspected as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferRegion<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> BufferRegion<N> {
    /// A region with every byte zero, as after a cold power-up on most parts.
    pub const fn new() -> Self {
        Self { bytes: [0; N] }
    }

    /// A region with every byte set to `byte`.
    pub const fn filled(byte: u8) -> Self {
        Self { bytes: [byte; N] }
    }

    /// Load a captured image. Images shorter than `N` are zero-extended.
    pub fn from_image(image: &[u8]) -> Result<Self, Error> {
        if image.len() > N {
            error!(
                "retained image too large: {} bytes (max {} bytes)",
                image.len(),
                N
            );
            return Err(Error::ImageTooLarge {
                size_bytes: image.len(),
                max_bytes: N,
            });
        }
        let mut region = Self::new();
        region.bytes[..image.len()].copy_from_slice(image);
        Ok(region)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Raw access, e.g. to corrupt a field in a test.
    pub fn as_bytes_mut(&mut self) -> &mut [u8; N] {
        &mut self.bytes
    }
}

impl<const N: usize> Default for BufferRegion<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Region for BufferRegion<N> {
    const CAPACITY: usize = N;

    fn load<T: Pod>(&self, offset: usize) -> T {
        let size = core::mem::size_of::<T>();
        bytemuck::pod_read_unaligned(&self.bytes[offset..offset + size])
    }

    fn store<T: Pod>(&mut self, offset: usize, value: T) {
        let size = core::mem::size_of::<T>();
        self.bytes[offset..offset + size].copy_from_slice(bytemuck::bytes_of(&value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_load_uses_native_byte_order() {
        let mut region = BufferRegion::<16>::new();
        region.store(4, 0x1122_3344u32);

        assert_eq!(region.load::<u32>(4), 0x1122_3344);
        assert_eq!(&region.as_bytes()[4..8], &0x1122_3344u32.to_ne_bytes());
        assert_eq!(region.load::<u32>(0), 0);
    }

    #[test]
    fn unaligned_offsets_are_allowed() {
        let mut region = BufferRegion::<16>::filled(0xFF);
        region.store(3, -2i64);
        assert_eq!(region.load::<i64>(3), -2);
        assert_eq!(region.as_bytes()[2], 0xFF);
        assert_eq!(region.as_bytes()[11], 0xFF);
    }

    #[test]
    fn short_image_is_zero_extended() {
        let region = BufferRegion::<8>::from_image(&[1, 2, 3]).unwrap();
        assert_eq!(region.as_bytes(), &[1, 2, 3, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn oversized_image_is_rejected() {
        assert_eq!(
            BufferRegion::<4>::from_image(&[0; 5]),
            Err(Error::ImageTooLarge {
                size_bytes: 5,
                max_bytes: 4
            })
        );
    }

    #[test]
    fn mutable_reference_forwards_to_region() {
        fn poke<R: Region>(mut region: R) -> usize {
            region.store(0, 7u16);
            R::CAPACITY
        }

        let mut region = BufferRegion::<8>::new();
        assert_eq!(poke(&mut region), 8);
        assert_eq!(region.load::<u16>(0), 7);
    }

    #[test]
    #[should_panic]
    fn store_past_end_panics() {
        let mut region = BufferRegion::<4>::new();
        region.store(2, 0u32);
    }
}
