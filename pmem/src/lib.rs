#![cfg_attr(not(test), no_std)]
#![doc = "Persistent settings for PortaPack-class radio firmware."]
#![doc = ""]
#![doc = "Overlays a fixed-layout settings record on VBAT-retained RAM and exposes"]
#![doc = "typed accessors that clip, validate and repair each field in place."]
#![doc = "Built on top of `pmem-hal` for region access."]
//!
//! # Example
//!
//! ```ignore
//! use pmem::{FactoryCalibration, PersistentMemory, StoreConfig};
//!
//! // Once, during startup, on each core:
//! let mut pmem = unsafe {
//!     PersistentMemory::backup_ram(clock_manager, FactoryCalibration, StoreConfig::new())
//! };
//! let hz = pmem.tuned_frequency();
//! pmem.set_correction_ppb(-1_500);
//! ```

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod afsk;
pub mod bitfield;
pub mod clock;
pub mod config;
pub mod layout;
pub mod memory_map;
pub mod playdead;
pub mod range;
pub mod rf;
pub mod sentinel;
pub mod settings;
pub mod store;
pub mod touch;
pub mod ui;

pub use afsk::AfskConfig;
pub use clock::{NoReferenceClock, ReferenceClock};
pub use config::StoreConfig;
pub use layout::Record;
pub use playdead::{Key, PlayDeadSequence};
pub use range::Range;
pub use rf::{Frequency, Ppb};
pub use sentinel::{Healed, MaybeValid, Sentinel};
pub use settings::{Faults, Settings};
pub use store::PersistentMemory;
pub use touch::{Calibration, FactoryCalibration, TouchDefaults};
pub use ui::{TextEntry, UiConfig};
