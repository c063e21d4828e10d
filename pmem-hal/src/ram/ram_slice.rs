//! Volatile accessor over a fixed physical address range.
//!
//! All `unsafe` pointer access to retained RAM is confined to this type.
//! Every access is a single `read_volatile` / `write_volatile` at the value's
//! natural alignment, so word-sized fields are written in one bus transaction.

use bytemuck::Pod;

/// A span of physical memory defined by base address and length in bytes.
///
/// # Usage
///
/// ```ignore
/// use pmem_hal::ram::RamSlice;
///
/// let bkp = RamSlice::new(0x4004_1000, 0x100);
/// bkp.write(8, -1200i32);
/// let ppb: i32 = bkp.read(8);
/// ```
#[derive(Debug)]
pub struct RamSlice {
    addr: usize,
    len: usize,
}

impl RamSlice {
    /// Create a new RAM slice.
    ///
    /// # Safety contract
    ///
    /// Caller must ensure `addr..addr+len` is valid, readable and writable
    /// memory for as long as the slice is used (e.g. the VBAT backup block).
    #[inline]
    pub const fn new(addr: usize, len: usize) -> Self {
        Self { addr, len }
    }

    /// Base address.
    #[inline]
    pub const fn addr(&self) -> usize {
        self.addr
    }

    /// Length in bytes.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Volatile read of a `T` at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the access runs past the end of the slice, or (in debug
    /// builds) if the address is not aligned for `T`.
    #[inline]
    pub fn read<T: Pod>(&self, offset: usize) -> T {
        let addr = self.checked_addr::<T>(offset);
        unsafe { core::ptr::read_volatile(addr as *const T) }
    }

    /// Volatile write of a `T` at `offset`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`read`](Self::read).
    #[inline]
    pub fn write<T: Pod>(&self, offset: usize, value: T) {
        let addr = self.checked_addr::<T>(offset);
        unsafe { core::ptr::write_volatile(addr as *mut T, value) }
    }

    fn checked_addr<T>(&self, offset: usize) -> usize {
        let size = core::mem::size_of::<T>();
        assert!(
            offset + size <= self.len,
            "RamSlice access overflow: offset {} + {} bytes > len {}",
            offset,
            size,
            self.len,
        );
        let addr = self.addr + offset;
        debug_assert!(
            addr % core::mem::align_of::<T>() == 0,
            "RamSlice: unaligned access at {:#x} (required alignment: {})",
            addr,
            core::mem::align_of::<T>(),
        );
        addr
    }
}
