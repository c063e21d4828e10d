//! VBAT-retained backup RAM binding.

use bytemuck::Pod;

use super::memory_map::backup_ram;
use super::{RamSlice, Region};

/// The hardware backup RAM block.
///
/// Contents survive warm resets while VBAT is present and are undefined after
/// a full power loss. The block is mapped at the same address by both cores,
/// and nothing here arbitrates between them.
#[derive(Debug)]
pub struct BackupRam {
    region: RamSlice,
}

impl BackupRam {
    /// Bind the backup RAM block.
    ///
    /// # Safety
    ///
    /// Only one `BackupRam` may be live per core, and the application must
    /// serialize accesses between cores (and between thread and interrupt
    /// context) that can overlap in time. Call once during startup and hand
    /// the value to its single owner.
    pub unsafe fn steal() -> Self {
        let region = RamSlice::new(backup_ram::BASE, backup_ram::SIZE);
        debug!("backup RAM bound at {:#x} ({} bytes)", region.addr(), region.len());
        Self { region }
    }
}

impl Region for BackupRam {
    const CAPACITY: usize = backup_ram::SIZE;

    #[inline]
    fn load<T: Pod>(&self, offset: usize) -> T {
        self.region.read(offset)
    }

    #[inline]
    fn store<T: Pod>(&mut self, offset: usize, value: T) {
        self.region.write(offset, value)
    }
}
