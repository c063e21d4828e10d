//! Memory map constants.
//!
//! Re-exports the retained RAM layout generated by `pmem-hal`.

pub use pmem_hal::ram::memory_map::backup_ram;
