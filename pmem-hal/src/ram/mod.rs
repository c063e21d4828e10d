//! Retained RAM accessors and memory map constants.
//!
//! - [`Region`]: typed load/store at byte offsets, with a capacity known at build time
//! - [`BackupRam`]: the hardware region, accessed through [`RamSlice`]
//! - [`BufferRegion`]: an in-memory region for tests and image tooling
//! - [`memory_map`]: address constants generated from `backup_ram_layout.toml`
pub mod backup_ram;
pub mod buffer;
pub mod memory_map;
pub mod ram_slice;
pub mod region;

pub use backup_ram::BackupRam;
pub use buffer::BufferRegion;
pub use ram_slice::RamSlice;
pub use region::Region;

/// Retained RAM errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// Image does not fit in the region.
    ImageTooLarge { size_bytes: usize, max_bytes: usize },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ImageTooLarge {
                size_bytes,
                max_bytes,
            } => write!(
                f,
                "image too large: {} bytes (region holds {} bytes)",
                size_bytes, max_bytes
            ),
        }
    }
}
