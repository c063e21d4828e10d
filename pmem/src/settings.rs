//! Whole-record views used for capture, restore and diagnostics.

use crate::afsk::{self, AfskConfig};
use crate::playdead::{self, PlayDeadSequence};
use crate::rf::{self, Frequency, Ppb};
use crate::touch::{Calibration, TouchDefaults};
use crate::ui::UiConfig;

/// Every persisted setting, as reported by the validating accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub tuned_frequency: Frequency,
    pub correction_ppb: Ppb,
    pub touch_calibration: Calibration,
    pub afsk_mark_freq: i32,
    pub afsk_space_freq: i32,
    pub afsk_bitrate: i32,
    pub afsk_bw: i32,
    pub afsk_config: AfskConfig,
    pub playing_dead: u32,
    pub playdead_sequence: PlayDeadSequence,
    pub ui_config: UiConfig,
    pub pocsag_address: u32,
}

impl Settings {
    /// What a blank (all-zero) region reads back as.
    pub fn defaults(touch: &impl TouchDefaults) -> Self {
        Self {
            tuned_frequency: rf::TUNED_FREQUENCY_DEFAULT,
            correction_ppb: rf::PPB_DEFAULT,
            touch_calibration: touch.default_calibration(),
            afsk_mark_freq: afsk::MARK_DEFAULT,
            afsk_space_freq: afsk::SPACE_DEFAULT,
            afsk_bitrate: afsk::BITRATE_DEFAULT,
            afsk_bw: afsk::BW_DEFAULT,
            afsk_config: AfskConfig::default(),
            playing_dead: 0,
            playdead_sequence: playdead::SEQUENCE_DEFAULT,
            ui_config: UiConfig::default(),
            pocsag_address: 0,
        }
    }
}

bitflags::bitflags! {
    /// Fields whose stored state would be repaired on the next read.
    pub struct Faults: u32 {
        const TUNED_FREQUENCY = 1 << 0;
        const CORRECTION_PPB = 1 << 1;
        const TOUCH_CALIBRATION = 1 << 2;
        const AFSK_MARK_FREQ = 1 << 3;
        const AFSK_SPACE_FREQ = 1 << 4;
        const AFSK_BITRATE = 1 << 5;
        const AFSK_BW = 1 << 6;
        const PLAYDEAD = 1 << 7;
        const BACKLIGHT_INDEX = 1 << 8;
    }
}

impl Faults {
    /// Field names for reporting, in record order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        const NAMES: [(Faults, &str); 9] = [
            (Faults::TUNED_FREQUENCY, "tuned_frequency"),
            (Faults::CORRECTION_PPB, "correction_ppb"),
            (Faults::TOUCH_CALIBRATION, "touch_calibration"),
            (Faults::AFSK_MARK_FREQ, "afsk_mark_freq"),
            (Faults::AFSK_SPACE_FREQ, "afsk_space_freq"),
            (Faults::AFSK_BITRATE, "afsk_bitrate"),
            (Faults::AFSK_BW, "afsk_bw"),
            (Faults::PLAYDEAD, "playdead_sequence"),
            (Faults::BACKLIGHT_INDEX, "ui_backlight_index"),
        ];
        NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}
