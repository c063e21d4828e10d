//! Human-editable settings file schema.
//!
//! Every key is optional when reading. Missing keys keep the value already
//! held in the base [`Settings`], so a partial file only overrides what it
//! names.

use anyhow::{anyhow, Result};
use pmem::{AfskConfig, Calibration, PlayDeadSequence, Settings, TextEntry, UiConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    /// Hz.
    pub tuned_frequency: Option<i64>,
    pub correction_ppb: Option<i32>,
    pub touch_calibration: Option<CalibrationFile>,
    pub afsk: Option<AfskFile>,
    pub playing_dead: Option<u32>,
    pub playdead_sequence: Option<SequenceFile>,
    pub ui: Option<UiFile>,
    pub pocsag_address: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationFile {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub d: i32,
    pub e: i32,
    pub f: i32,
    pub k: i32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AfskFile {
    pub mark_freq: Option<i32>,
    pub space_freq: Option<i32>,
    pub bitrate: Option<i32>,
    pub bw: Option<i32>,
    /// Whole options word, applied before `format` and `repeats`.
    pub config: Option<u32>,
    pub format: Option<u8>,
    pub repeats: Option<u8>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiFile {
    /// Whole UI word, applied before the named flags.
    pub raw: Option<u32>,
    pub backlight_off: Option<bool>,
    pub backlight_index: Option<u8>,
    pub text_entry: Option<TextEntryFile>,
    pub stealth: Option<bool>,
}

/// Play-dead unlock sequence: key symbols, first press first (e.g. `"UDLR"`,
/// or `""` for none), or the raw sequence word when it does not decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SequenceFile {
    Symbols(String),
    Raw(u32),
}

impl SequenceFile {
    fn resolve(&self) -> Result<PlayDeadSequence> {
        match self {
            SequenceFile::Raw(word) => Ok(PlayDeadSequence(*word)),
            SequenceFile::Symbols(symbols) if symbols.is_empty() => Ok(PlayDeadSequence(0)),
            SequenceFile::Symbols(symbols) => {
                PlayDeadSequence::from_symbols(symbols).ok_or_else(|| {
                    anyhow!(
                        "invalid play-dead sequence {:?}: expected up to {} of U, D, L, R, S",
                        symbols,
                        PlayDeadSequence::MAX_KEYS
                    )
                })
            }
        }
    }
}

impl From<PlayDeadSequence> for SequenceFile {
    fn from(sequence: PlayDeadSequence) -> Self {
        let symbols: Option<String> = sequence
            .keys()
            .map(|key| key.map(|key| key.symbol()))
            .collect();
        match symbols {
            Some(symbols) if sequence.len() <= PlayDeadSequence::MAX_KEYS => {
                SequenceFile::Symbols(symbols)
            }
            _ => SequenceFile::Raw(sequence.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEntryFile {
    Keyboard,
    Handwriting,
}

impl From<TextEntry> for TextEntryFile {
    fn from(mode: TextEntry) -> Self {
        match mode {
            TextEntry::Keyboard => TextEntryFile::Keyboard,
            TextEntry::Handwriting => TextEntryFile::Handwriting,
        }
    }
}

impl From<TextEntryFile> for TextEntry {
    fn from(mode: TextEntryFile) -> Self {
        match mode {
            TextEntryFile::Keyboard => TextEntry::Keyboard,
            TextEntryFile::Handwriting => TextEntry::Handwriting,
        }
    }
}

impl From<Calibration> for CalibrationFile {
    fn from(c: Calibration) -> Self {
        Self {
            a: c.a,
            b: c.b,
            c: c.c,
            d: c.d,
            e: c.e,
            f: c.f,
            k: c.k,
        }
    }
}

impl From<CalibrationFile> for Calibration {
    fn from(c: CalibrationFile) -> Self {
        Self {
            a: c.a,
            b: c.b,
            c: c.c,
            d: c.d,
            e: c.e,
            f: c.f,
            k: c.k,
        }
    }
}

impl SettingsFile {
    pub fn from_hjson(text: &str) -> Result<Self> {
        Ok(deser_hjson::from_str(text)?)
    }

    /// Overlay the keys present in this file onto `base`.
    pub fn resolve(&self, base: Settings) -> Result<Settings> {
        let mut settings = base;

        if let Some(hz) = self.tuned_frequency {
            settings.tuned_frequency = hz;
        }
        if let Some(ppb) = self.correction_ppb {
            settings.correction_ppb = ppb;
        }
        if let Some(calibration) = self.touch_calibration {
            settings.touch_calibration = calibration.into();
        }
        if let Some(afsk) = self.afsk {
            afsk.overlay(&mut settings);
        }
        if let Some(state) = self.playing_dead {
            settings.playing_dead = state;
        }
        if let Some(sequence) = &self.playdead_sequence {
            settings.playdead_sequence = sequence.resolve()?;
        }
        if let Some(ui) = self.ui {
            settings.ui_config = ui.overlay(settings.ui_config);
        }
        if let Some(address) = self.pocsag_address {
            settings.pocsag_address = address;
        }
        Ok(settings)
    }
}

impl AfskFile {
    fn overlay(&self, settings: &mut Settings) {
        if let Some(v) = self.mark_freq {
            settings.afsk_mark_freq = v;
        }
        if let Some(v) = self.space_freq {
            settings.afsk_space_freq = v;
        }
        if let Some(v) = self.bitrate {
            settings.afsk_bitrate = v;
        }
        if let Some(v) = self.bw {
            settings.afsk_bw = v;
        }
        let mut config: AfskConfig = settings.afsk_config;
        if let Some(word) = self.config {
            config = AfskConfig(word);
        }
        if let Some(format) = self.format {
            config = config.with_format(format);
        }
        if let Some(repeats) = self.repeats {
            config = config.with_repeats(repeats);
        }
        settings.afsk_config = config;
    }
}

impl UiFile {
    fn overlay(&self, mut config: UiConfig) -> UiConfig {
        if let Some(word) = self.raw {
            config = UiConfig(word);
        }
        if let Some(enabled) = self.backlight_off {
            config = config.with_backlight_off_enabled(enabled);
        }
        if let Some(index) = self.backlight_index {
            config = config.with_backlight_index(index);
        }
        if let Some(mode) = self.text_entry {
            config = config.with_text_entry(mode.into());
        }
        if let Some(enabled) = self.stealth {
            config = config.with_stealth_mode(enabled);
        }
        config
    }
}

/// Every setting spelled out, for dumps and templates.
impl From<&Settings> for SettingsFile {
    fn from(s: &Settings) -> Self {
        Self {
            tuned_frequency: Some(s.tuned_frequency),
            correction_ppb: Some(s.correction_ppb),
            touch_calibration: Some(s.touch_calibration.into()),
            afsk: Some(AfskFile {
                mark_freq: Some(s.afsk_mark_freq),
                space_freq: Some(s.afsk_space_freq),
                bitrate: Some(s.afsk_bitrate),
                bw: Some(s.afsk_bw),
                config: Some(s.afsk_config.0),
                format: Some(s.afsk_config.format()),
                repeats: Some(s.afsk_config.repeats()),
            }),
            playing_dead: Some(s.playing_dead),
            playdead_sequence: Some(s.playdead_sequence.into()),
            ui: Some(UiFile {
                raw: Some(s.ui_config.0),
                backlight_off: Some(s.ui_config.backlight_off_enabled()),
                backlight_index: Some(s.ui_config.backlight_index()),
                text_entry: Some(s.ui_config.text_entry().into()),
                stealth: Some(s.ui_config.stealth_mode()),
            }),
            pocsag_address: Some(s.pocsag_address),
        }
    }
}
