//! Retained-RAM images held in host memory.

use anyhow::{anyhow, Result};
use pmem::memory_map::backup_ram;
use pmem::{FactoryCalibration, Faults, NoReferenceClock, PersistentMemory, Settings, StoreConfig};
use pmem_hal::BufferRegion;
use serde::Serialize;

use crate::settings_file::SettingsFile;

pub const IMAGE_SIZE: usize = backup_ram::SIZE;

pub type Image = BufferRegion<IMAGE_SIZE>;

type HostMemory = PersistentMemory<Image, NoReferenceClock, FactoryCalibration>;

fn open(image: Image) -> HostMemory {
    PersistentMemory::new(image, NoReferenceClock, FactoryCalibration, StoreConfig::new())
}

/// Build a full region image from a zeroed region, pushing every setting
/// through the validating setters.
pub fn build(file: &SettingsFile) -> Result<Image> {
    let settings = file.resolve(Settings::defaults(&FactoryCalibration))?;
    let mut memory = open(Image::new());
    memory.apply(&settings);
    let (image, _, _) = memory.into_parts();
    Ok(image)
}

/// Result of inspecting a captured image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Fields that were invalid as captured, before healing.
    pub faults: Vec<&'static str>,
    /// Settings as the firmware would read them.
    pub settings: SettingsFile,
    /// The healed region, byte for byte.
    #[serde(skip)]
    pub healed: Image,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

pub fn load(bytes: &[u8]) -> Result<Image> {
    Image::from_image(bytes)
        .map_err(|e| anyhow!("captured image does not fit the backup RAM: {}", e))
}

pub fn inspect(image: Image) -> Report {
    let mut memory = open(image);
    let faults: Faults = memory.diagnose();
    for name in faults.names() {
        log::warn!("{} invalid in captured image", name);
    }
    let settings = memory.snapshot();
    let (healed, _, _) = memory.into_parts();
    Report {
        faults: faults.names().collect(),
        settings: SettingsFile::from(&settings),
        healed,
    }
}
