//! Byte layout of the persisted record.
//!
//! The record is shared by reference between the M4 and M0 firmware images,
//! so field order, width and padding are an ABI. The offsets below are pinned
//! at compile time; reordering a field is a build error.
//!
//! ```text
//! 0x00  tuned_frequency          i64
//! 0x08  correction_ppb           i32
//! 0x0C  touch_calibration_magic  u32
//! 0x10  touch_calibration        7 x i32
//! 0x2C  afsk_mark_freq           i32
//! 0x30  afsk_space_freq          i32
//! 0x34  afsk_bitrate             i32
//! 0x38  afsk_bw                  i32
//! 0x3C  afsk_config              u32
//! 0x40  playdead_magic           u32
//! 0x44  playing_dead             u32
//! 0x48  playdead_sequence        u32
//! 0x4C  ui_config                u32
//! 0x50  pocsag_address           u32
//! 0x54  reserved                 u32
//! ```

use core::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::memory_map::backup_ram;
use crate::touch::Calibration;

/// Bumped whenever the layout below changes. Informational only: a firmware
/// with a different layout reads garbage and relies on per-field repair.
pub const LAYOUT_VERSION: u32 = 1;

/// The persisted record as it sits in retained RAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Record {
    pub tuned_frequency: i64,
    pub correction_ppb: i32,
    pub touch_calibration_magic: u32,
    pub touch_calibration: Calibration,

    pub afsk_mark_freq: i32,
    pub afsk_space_freq: i32,
    pub afsk_bitrate: i32,
    pub afsk_bw: i32,
    pub afsk_config: u32,

    pub playdead_magic: u32,
    pub playing_dead: u32,
    pub playdead_sequence: u32,

    pub ui_config: u32,

    pub pocsag_address: u32,

    /// Explicit tail padding to the record's 8-byte alignment.
    pub reserved: u32,
}

/// Size of the record in bytes.
pub const RECORD_SIZE: usize = size_of::<Record>();

/// Byte offset of the record within the retained region.
pub const RECORD_OFFSET: usize = backup_ram::RECORD_OFFSET;

/// First byte past the record, relative to the region base.
pub const RECORD_END: usize = RECORD_OFFSET + RECORD_SIZE;

/// Field offsets relative to the record start.
pub mod offset {
    use super::*;

    pub const TUNED_FREQUENCY: usize = offset_of!(Record, tuned_frequency);
    pub const CORRECTION_PPB: usize = offset_of!(Record, correction_ppb);
    pub const TOUCH_CALIBRATION_MAGIC: usize = offset_of!(Record, touch_calibration_magic);
    pub const TOUCH_CALIBRATION: usize = offset_of!(Record, touch_calibration);
    pub const AFSK_MARK_FREQ: usize = offset_of!(Record, afsk_mark_freq);
    pub const AFSK_SPACE_FREQ: usize = offset_of!(Record, afsk_space_freq);
    pub const AFSK_BITRATE: usize = offset_of!(Record, afsk_bitrate);
    pub const AFSK_BW: usize = offset_of!(Record, afsk_bw);
    pub const AFSK_CONFIG: usize = offset_of!(Record, afsk_config);
    pub const PLAYDEAD_MAGIC: usize = offset_of!(Record, playdead_magic);
    pub const PLAYING_DEAD: usize = offset_of!(Record, playing_dead);
    pub const PLAYDEAD_SEQUENCE: usize = offset_of!(Record, playdead_sequence);
    pub const UI_CONFIG: usize = offset_of!(Record, ui_config);
    pub const POCSAG_ADDRESS: usize = offset_of!(Record, pocsag_address);
    pub const RESERVED: usize = offset_of!(Record, reserved);
}

const _: () = {
    assert!(offset::TUNED_FREQUENCY == 0x00);
    assert!(offset::CORRECTION_PPB == 0x08);
    assert!(offset::TOUCH_CALIBRATION_MAGIC == 0x0C);
    assert!(offset::TOUCH_CALIBRATION == 0x10);
    assert!(offset::AFSK_MARK_FREQ == 0x2C);
    assert!(offset::AFSK_SPACE_FREQ == 0x30);
    assert!(offset::AFSK_BITRATE == 0x34);
    assert!(offset::AFSK_BW == 0x38);
    assert!(offset::AFSK_CONFIG == 0x3C);
    assert!(offset::PLAYDEAD_MAGIC == 0x40);
    assert!(offset::PLAYING_DEAD == 0x44);
    assert!(offset::PLAYDEAD_SEQUENCE == 0x48);
    assert!(offset::UI_CONFIG == 0x4C);
    assert!(offset::POCSAG_ADDRESS == 0x50);
    assert!(offset::RESERVED == 0x54);
    assert!(RECORD_SIZE == 0x58);
    assert!(RECORD_OFFSET % core::mem::align_of::<Record>() == 0);
    assert!(
        RECORD_END <= backup_ram::SIZE,
        "Persistent memory structure too large for VBAT-maintained region"
    );
};
