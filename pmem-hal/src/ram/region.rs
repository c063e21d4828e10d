//! Storage abstraction the persisted record is overlaid on.

use bytemuck::Pod;

/// A byte-addressed memory region with a capacity fixed at build time.
///
/// Implemented by [`BackupRam`](super::BackupRam) for the real VBAT-retained
/// block and by [`BufferRegion`](super::BufferRegion) for tests and host
/// tooling. `CAPACITY` is an associated constant so that layout overflow can be
/// rejected during compilation rather than at runtime.
///
/// Loads and stores panic when the access runs past `CAPACITY`.
pub trait Region {
    /// Region size in bytes.
    const CAPACITY: usize;

    /// Read a `T` at byte `offset`.
    fn load<T: Pod>(&self, offset: usize) -> T;

    /// Write a `T` at byte `offset`.
    fn store<T: Pod>(&mut self, offset: usize, value: T);
}

impl<R: Region> Region for &mut R {
    const CAPACITY: usize = R::CAPACITY;

    #[inline]
    fn load<T: Pod>(&self, offset: usize) -> T {
        (**self).load(offset)
    }

    #[inline]
    fn store<T: Pod>(&mut self, offset: usize, value: T) {
        (**self).store(offset, value)
    }
}
