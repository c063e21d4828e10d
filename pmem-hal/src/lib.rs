#![cfg_attr(not(test), no_std)]
#![doc = "Retained RAM access for PortaPack-class radio firmware."]
#![doc = ""]
#![doc = "Provides the VBAT-backed backup RAM binding, an in-memory substitute for"]
#![doc = "tests and host tools, and the memory map generated from `backup_ram_layout.toml`."]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod ram;

pub use ram::{BackupRam, BufferRegion, RamSlice, Region};
