//! Field accessors over the persisted record.

use bytemuck::Pod;
use pmem_hal::{BackupRam, Region};

use crate::afsk::{self, AfskConfig};
use crate::clock::ReferenceClock;
use crate::config::StoreConfig;
use crate::layout::{offset, RECORD_END, RECORD_OFFSET};
use crate::playdead::{self, PlayDeadSequence};
use crate::range::Range;
use crate::rf::{self, Frequency, Ppb};
use crate::settings::{Faults, Settings};
use crate::touch::{self, Calibration, TouchDefaults};
use crate::ui::{TextEntry, UiConfig};

/// Typed, self-healing access to the settings record in retained RAM.
///
/// Every getter validates before it reports: range-guarded fields that are
/// out of range, and sentinel-guarded fields whose marker does not match, are
/// rewritten to their defaults in place first. Setters never fail; values are
/// clipped into range instead.
///
/// # Concurrency
///
/// No locking is done here. `&mut self` serializes accessors sharing one
/// handle, but the region is also visible to the other core (and possibly to
/// interrupt handlers). The application must ensure that accesses from
/// contexts that can overlap in time are mutually excluded.
pub struct PersistentMemory<R, K, T> {
    region: R,
    clock: K,
    touch: T,
    config: StoreConfig,
}

impl<K: ReferenceClock, T: TouchDefaults> PersistentMemory<BackupRam, K, T> {
    /// Bind the store to the hardware backup RAM.
    ///
    /// # Safety
    ///
    /// Same contract as [`BackupRam::steal`]: one live binding per core, and
    /// cross-core accesses serialized by the caller.
    pub unsafe fn backup_ram(clock: K, touch: T, config: StoreConfig) -> Self {
        Self::new(BackupRam::steal(), clock, touch, config)
    }
}

impl<R: Region, K: ReferenceClock, T: TouchDefaults> PersistentMemory<R, K, T> {
    const RECORD_FITS: () = assert!(
        RECORD_END <= R::CAPACITY,
        "Persistent memory structure too large for the retained region"
    );

    pub fn new(region: R, clock: K, touch: T, config: StoreConfig) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::RECORD_FITS;
        Self {
            region,
            clock,
            touch,
            config,
        }
    }

    /// Underlying region, bypassing validation.
    pub fn region(&self) -> &R {
        &self.region
    }

    /// Mutable underlying region, bypassing validation.
    pub fn region_mut(&mut self) -> &mut R {
        &mut self.region
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    pub fn into_parts(self) -> (R, K, T) {
        (self.region, self.clock, self.touch)
    }

    #[inline]
    fn load<V: Pod>(&self, field: usize) -> V {
        self.region.load(RECORD_OFFSET + field)
    }

    #[inline]
    fn store<V: Pod>(&mut self, field: usize, value: V) {
        self.region.store(RECORD_OFFSET + field, value)
    }

    fn guarded(
        &mut self,
        name: &'static str,
        field: usize,
        range: Range<i32>,
        default: i32,
    ) -> i32 {
        let mut value: i32 = self.load(field);
        let found = value;
        if range.reset_if_outside(&mut value, default) {
            warn!("pmem: {} = {} out of range, reset to {}", name, found, default);
            self.store(field, value);
        }
        value
    }

    fn set_clipped(
        &mut self,
        name: &'static str,
        field: usize,
        range: Range<i32>,
        requested: i32,
    ) -> i32 {
        let value = range.clip(requested);
        if value != requested {
            debug!("pmem: {} clipped from {} to {}", name, requested, value);
        }
        self.store(field, value);
        value
    }

    // ── Radio ───────────────────────────────────────────────────────────────

    /// Last tuned frequency in Hz.
    pub fn tuned_frequency(&mut self) -> Frequency {
        let mut hz: Frequency = self.load(offset::TUNED_FREQUENCY);
        let found = hz;
        if self
            .config
            .tuning_range
            .reset_if_outside(&mut hz, rf::TUNED_FREQUENCY_DEFAULT)
        {
            warn!("pmem: tuned_frequency = {} out of range, reset to {}", found, hz);
            self.store(offset::TUNED_FREQUENCY, hz);
        }
        hz
    }

    /// Requests outside the tuning range store the reset default rather than
    /// the nearer band edge.
    pub fn set_tuned_frequency(&mut self, hz: Frequency) {
        let value = self
            .config
            .tuning_range
            .or_default(hz, rf::TUNED_FREQUENCY_DEFAULT);
        if value != hz {
            debug!("pmem: tuned_frequency {} outside tuning range, storing {}", hz, value);
        }
        self.store(offset::TUNED_FREQUENCY, value);
    }

    pub fn correction_ppb(&mut self) -> Ppb {
        self.guarded("correction_ppb", offset::CORRECTION_PPB, rf::PPB_RANGE, rf::PPB_DEFAULT)
    }

    /// Store the reference correction and forward the stored (clipped) value
    /// to the reference clock.
    pub fn set_correction_ppb(&mut self, ppb: Ppb) {
        let value = self.set_clipped("correction_ppb", offset::CORRECTION_PPB, rf::PPB_RANGE, ppb);
        debug!("pmem: reference correction {} ppb", value);
        self.clock.set_reference_ppb(value);
    }

    // ── Touch ───────────────────────────────────────────────────────────────

    pub fn touch_calibration(&mut self) -> Calibration {
        let magic: u32 = self.load(offset::TOUCH_CALIBRATION_MAGIC);
        let stored: Calibration = self.load(offset::TOUCH_CALIBRATION);
        let defaults = &self.touch;
        let healed = touch::MAGIC.heal(magic, stored, || defaults.default_calibration());
        if let Some((_, calibration)) = healed.write_back {
            warn!("pmem: touch calibration marker {:#x} invalid, restoring defaults", magic);
            self.set_touch_calibration(calibration);
        }
        healed.value
    }

    pub fn set_touch_calibration(&mut self, calibration: Calibration) {
        self.store(offset::TOUCH_CALIBRATION, calibration);
        self.store(offset::TOUCH_CALIBRATION_MAGIC, touch::MAGIC.magic());
    }

    // ── AFSK modem ──────────────────────────────────────────────────────────

    pub fn afsk_mark_freq(&mut self) -> i32 {
        self.guarded("afsk_mark_freq", offset::AFSK_MARK_FREQ, afsk::FREQ_RANGE, afsk::MARK_DEFAULT)
    }

    pub fn set_afsk_mark_freq(&mut self, value: i32) {
        self.set_clipped("afsk_mark_freq", offset::AFSK_MARK_FREQ, afsk::FREQ_RANGE, value);
    }

    pub fn afsk_space_freq(&mut self) -> i32 {
        self.guarded(
            "afsk_space_freq",
            offset::AFSK_SPACE_FREQ,
            afsk::FREQ_RANGE,
            afsk::SPACE_DEFAULT,
        )
    }

    pub fn set_afsk_space_freq(&mut self, value: i32) {
        self.set_clipped("afsk_space_freq", offset::AFSK_SPACE_FREQ, afsk::FREQ_RANGE, value);
    }

    pub fn afsk_bitrate(&mut self) -> i32 {
        self.guarded(
            "afsk_bitrate",
            offset::AFSK_BITRATE,
            afsk::BITRATE_RANGE,
            afsk::BITRATE_DEFAULT,
        )
    }

    pub fn set_afsk_bitrate(&mut self, value: i32) {
        self.set_clipped("afsk_bitrate", offset::AFSK_BITRATE, afsk::BITRATE_RANGE, value);
    }

    pub fn afsk_bw(&mut self) -> i32 {
        self.guarded("afsk_bw", offset::AFSK_BW, afsk::BW_RANGE, afsk::BW_DEFAULT)
    }

    pub fn set_afsk_bw(&mut self, value: i32) {
        self.set_clipped("afsk_bw", offset::AFSK_BW, afsk::BW_RANGE, value);
    }

    /// Raw options word; no validation.
    pub fn afsk_config(&self) -> AfskConfig {
        AfskConfig(self.load(offset::AFSK_CONFIG))
    }

    pub fn set_afsk_config(&mut self, config: AfskConfig) {
        self.store(offset::AFSK_CONFIG, config.0);
    }

    pub fn afsk_format(&self) -> u8 {
        self.afsk_config().format()
    }

    pub fn set_afsk_format(&mut self, format: u8) {
        let config = self.afsk_config().with_format(format);
        self.set_afsk_config(config);
    }

    pub fn afsk_repeats(&self) -> u8 {
        self.afsk_config().repeats()
    }

    pub fn set_afsk_repeats(&mut self, repeats: u8) {
        let config = self.afsk_config().with_repeats(repeats);
        self.set_afsk_config(config);
    }

    // ── Play dead ───────────────────────────────────────────────────────────

    fn playdead_valid(&self) -> bool {
        playdead::MAGIC.matches(self.load(offset::PLAYDEAD_MAGIC))
    }

    /// Raw play-dead state; no validation.
    pub fn playing_dead(&self) -> u32 {
        self.load(offset::PLAYING_DEAD)
    }

    /// Also seeds the unlock sequence if it has never been set, so that a
    /// device that plays dead can always be unlocked.
    pub fn set_playing_dead(&mut self, state: u32) {
        if !self.playdead_valid() {
            warn!("pmem: play-dead marker invalid, seeding default unlock sequence");
            self.set_playdead_sequence(playdead::SEQUENCE_DEFAULT);
        }
        self.store(offset::PLAYING_DEAD, state);
    }

    pub fn playdead_sequence(&mut self) -> PlayDeadSequence {
        let magic: u32 = self.load(offset::PLAYDEAD_MAGIC);
        let stored = PlayDeadSequence(self.load(offset::PLAYDEAD_SEQUENCE));
        let healed = playdead::MAGIC.heal(magic, stored, || playdead::SEQUENCE_DEFAULT);
        if let Some((_, sequence)) = healed.write_back {
            warn!("pmem: play-dead marker {:#x} invalid, restoring default sequence", magic);
            self.set_playdead_sequence(sequence);
        }
        healed.value
    }

    pub fn set_playdead_sequence(&mut self, sequence: PlayDeadSequence) {
        self.store(offset::PLAYDEAD_SEQUENCE, sequence.0);
        self.store(offset::PLAYDEAD_MAGIC, playdead::MAGIC.magic());
    }

    // ── UI ──────────────────────────────────────────────────────────────────

    /// Raw UI word; no validation.
    pub fn ui_config(&self) -> UiConfig {
        UiConfig(self.load(offset::UI_CONFIG))
    }

    pub fn set_ui_config(&mut self, config: UiConfig) {
        self.store(offset::UI_CONFIG, config.0);
    }

    pub fn stealth_mode(&self) -> bool {
        self.ui_config().stealth_mode()
    }

    pub fn set_stealth_mode(&mut self, enabled: bool) {
        let config = self.ui_config().with_stealth_mode(enabled);
        self.set_ui_config(config);
    }

    pub fn text_entry(&self) -> TextEntry {
        self.ui_config().text_entry()
    }

    pub fn set_text_entry(&mut self, mode: TextEntry) {
        let config = self.ui_config().with_text_entry(mode);
        self.set_ui_config(config);
    }

    pub fn backlight_off_enabled(&self) -> bool {
        self.ui_config().backlight_off_enabled()
    }

    pub fn set_backlight_off_enabled(&mut self, enabled: bool) {
        let config = self.ui_config().with_backlight_off_enabled(enabled);
        self.set_ui_config(config);
    }

    /// Backlight-off delay index. An index past the delay table is replaced
    /// with the 15 s entry and written back; other UI bits are untouched.
    pub fn backlight_off_index(&mut self) -> u8 {
        let config = self.ui_config();
        let index = config.backlight_index();
        if index != config.raw_backlight_index() {
            warn!(
                "pmem: backlight index {} out of table, reset to {}",
                config.raw_backlight_index(),
                index
            );
            self.set_ui_config(config.with_backlight_index(index));
        }
        index
    }

    /// Values past the delay table store the 15 s entry, as a read would.
    pub fn set_backlight_off_index(&mut self, index: u8) {
        let config = self.ui_config().with_backlight_index(index);
        self.set_ui_config(config);
    }

    /// Backlight-off delay in seconds, `None` when disabled.
    pub fn backlight_off_timeout_s(&mut self) -> Option<u16> {
        self.backlight_off_index();
        self.ui_config().backlight_timeout_s()
    }

    // ── Pager ───────────────────────────────────────────────────────────────

    pub fn pocsag_address(&self) -> u32 {
        self.load(offset::POCSAG_ADDRESS)
    }

    pub fn set_pocsag_address(&mut self, address: u32) {
        self.store(offset::POCSAG_ADDRESS, address);
    }

    // ── Whole record ────────────────────────────────────────────────────────

    /// Read every field through its validating getter. Afterwards the whole
    /// record is valid.
    pub fn snapshot(&mut self) -> Settings {
        let backlight_index = self.backlight_off_index();
        trace!("pmem: snapshot (backlight index {})", backlight_index);
        Settings {
            tuned_frequency: self.tuned_frequency(),
            correction_ppb: self.correction_ppb(),
            touch_calibration: self.touch_calibration(),
            afsk_mark_freq: self.afsk_mark_freq(),
            afsk_space_freq: self.afsk_space_freq(),
            afsk_bitrate: self.afsk_bitrate(),
            afsk_bw: self.afsk_bw(),
            afsk_config: self.afsk_config(),
            playdead_sequence: self.playdead_sequence(),
            playing_dead: self.playing_dead(),
            ui_config: self.ui_config(),
            pocsag_address: self.pocsag_address(),
        }
    }

    /// Write every field through its setter (clipping applies).
    pub fn apply(&mut self, settings: &Settings) {
        self.set_tuned_frequency(settings.tuned_frequency);
        self.set_correction_ppb(settings.correction_ppb);
        self.set_touch_calibration(settings.touch_calibration);
        self.set_afsk_mark_freq(settings.afsk_mark_freq);
        self.set_afsk_space_freq(settings.afsk_space_freq);
        self.set_afsk_bitrate(settings.afsk_bitrate);
        self.set_afsk_bw(settings.afsk_bw);
        self.set_afsk_config(settings.afsk_config);
        self.set_playdead_sequence(settings.playdead_sequence);
        self.set_playing_dead(settings.playing_dead);
        self.set_ui_config(settings.ui_config);
        self.backlight_off_index();
        self.set_pocsag_address(settings.pocsag_address);
    }

    /// Fields the next read would repair. Does not modify storage.
    pub fn diagnose(&self) -> Faults {
        let mut faults = Faults::empty();
        let in_range = |field: usize, range: Range<i32>| range.contains(self.load::<i32>(field));

        faults.set(
            Faults::TUNED_FREQUENCY,
            !self.config.tuning_range.contains(self.load(offset::TUNED_FREQUENCY)),
        );
        faults.set(Faults::CORRECTION_PPB, !in_range(offset::CORRECTION_PPB, rf::PPB_RANGE));
        faults.set(
            Faults::TOUCH_CALIBRATION,
            !touch::MAGIC.matches(self.load(offset::TOUCH_CALIBRATION_MAGIC)),
        );
        faults.set(Faults::AFSK_MARK_FREQ, !in_range(offset::AFSK_MARK_FREQ, afsk::FREQ_RANGE));
        faults.set(Faults::AFSK_SPACE_FREQ, !in_range(offset::AFSK_SPACE_FREQ, afsk::FREQ_RANGE));
        faults.set(Faults::AFSK_BITRATE, !in_range(offset::AFSK_BITRATE, afsk::BITRATE_RANGE));
        faults.set(Faults::AFSK_BW, !in_range(offset::AFSK_BW, afsk::BW_RANGE));
        faults.set(Faults::PLAYDEAD, !self.playdead_valid());

        let ui = self.ui_config();
        faults.set(Faults::BACKLIGHT_INDEX, ui.backlight_index() != ui.raw_backlight_index());
        faults
    }
}

#[cfg(test)]
mod tests {
    use pmem_hal::BufferRegion;

    use super::*;
    use crate::clock::NoReferenceClock;
    use crate::layout::RECORD_SIZE;
    use crate::touch::FactoryCalibration;

    const PATTERNS: [u8; 6] = [0x00, 0xFF, 0xA5, 0x5A, 0x7F, 0x80];

    #[derive(Debug, Default)]
    struct RecordingClock {
        calls: Vec<i32>,
    }

    impl ReferenceClock for RecordingClock {
        fn set_reference_ppb(&mut self, ppb: i32) {
            self.calls.push(ppb);
        }
    }

    type TestMemory = PersistentMemory<BufferRegion<256>, RecordingClock, FactoryCalibration>;

    fn memory(fill: u8) -> TestMemory {
        PersistentMemory::new(
            BufferRegion::filled(fill),
            RecordingClock::default(),
            FactoryCalibration,
            StoreConfig::new(),
        )
    }

    fn raw_u32(mem: &TestMemory, field: usize) -> u32 {
        mem.region().load(RECORD_OFFSET + field)
    }

    fn poke<V: Pod>(mem: &mut TestMemory, field: usize, value: V) {
        mem.region_mut().store(RECORD_OFFSET + field, value);
    }

    #[test]
    fn range_guarded_reads_are_always_in_range() {
        for fill in PATTERNS {
            let mut mem = memory(fill);
            assert!(rf::TUNING_RANGE.contains(mem.tuned_frequency()), "fill {:#x}", fill);
            assert!(rf::PPB_RANGE.contains(mem.correction_ppb()), "fill {:#x}", fill);
            assert!(afsk::FREQ_RANGE.contains(mem.afsk_mark_freq()), "fill {:#x}", fill);
            assert!(afsk::FREQ_RANGE.contains(mem.afsk_space_freq()), "fill {:#x}", fill);
            assert!(afsk::BITRATE_RANGE.contains(mem.afsk_bitrate()), "fill {:#x}", fill);
            assert!(afsk::BW_RANGE.contains(mem.afsk_bw()), "fill {:#x}", fill);
        }
    }

    #[test]
    fn blank_memory_reads_documented_defaults() {
        let mut mem = memory(0x00);
        assert_eq!(mem.tuned_frequency(), 100_000_000);
        assert_eq!(mem.correction_ppb(), 0);
        assert_eq!(mem.afsk_mark_freq(), 48);
        assert_eq!(mem.afsk_space_freq(), 88);
        assert_eq!(mem.afsk_bitrate(), 1200);
        assert_eq!(mem.afsk_bw(), 15);
    }

    #[test]
    fn out_of_range_read_repairs_storage_in_place() {
        let mut mem = memory(0x00);
        poke(&mut mem, offset::AFSK_BITRATE, 100_000i32);

        assert_eq!(mem.afsk_bitrate(), 1200);
        assert_eq!(mem.region().load::<i32>(RECORD_OFFSET + offset::AFSK_BITRATE), 1200);
    }

    #[test]
    fn set_then_get_returns_clipped_value() {
        let mut mem = memory(0x00);
        let cases: [(i32, i32); 4] = [(0, 1), (401, 400), (-5, 1), (200, 200)];
        for (requested, expected) in cases {
            mem.set_afsk_mark_freq(requested);
            assert_eq!(mem.afsk_mark_freq(), expected);
            mem.set_afsk_space_freq(requested);
            assert_eq!(mem.afsk_space_freq(), expected);
        }

        mem.set_afsk_bitrate(300);
        assert_eq!(mem.afsk_bitrate(), 600);
        mem.set_afsk_bitrate(i32::MAX);
        assert_eq!(mem.afsk_bitrate(), 9600);

        mem.set_afsk_bw(0);
        assert_eq!(mem.afsk_bw(), 1);
        mem.set_afsk_bw(51);
        assert_eq!(mem.afsk_bw(), 50);

        mem.set_correction_ppb(-150_000);
        assert_eq!(mem.correction_ppb(), -99_000);
    }

    #[test]
    fn set_get_is_idempotent() {
        let mut mem = memory(0xA5);
        for _ in 0..2 {
            mem.set_afsk_bw(77);
            assert_eq!(mem.afsk_bw(), 50);
            assert_eq!(mem.afsk_bw(), 50);
        }
        let before = mem.region().clone();
        mem.set_afsk_bw(77);
        assert_eq!(mem.region(), &before);
    }

    #[test]
    fn correction_forwards_clipped_value_once() {
        let mut mem = memory(0x00);
        mem.set_correction_ppb(150_000);

        assert_eq!(mem.correction_ppb(), 99_000);
        assert_eq!(mem.clock().calls, [99_000]);

        mem.set_correction_ppb(-2_500);
        assert_eq!(mem.clock().calls, [99_000, -2_500]);
    }

    #[test]
    fn correction_reads_never_touch_the_clock() {
        let mut mem = memory(0xFF);
        poke(&mut mem, offset::CORRECTION_PPB, 1_000_000i32);
        assert_eq!(mem.correction_ppb(), 0);
        assert!(mem.clock().calls.is_empty());
    }

    #[test]
    fn out_of_range_tuning_reads_back_reset_default() {
        let mut mem = memory(0x00);
        mem.set_tuned_frequency(433_920_000);
        assert_eq!(mem.tuned_frequency(), 433_920_000);

        mem.set_tuned_frequency(7_000_000_000);
        assert_eq!(mem.tuned_frequency(), 100_000_000);

        mem.set_tuned_frequency(-1);
        assert_eq!(mem.tuned_frequency(), 100_000_000);

        poke(&mut mem, offset::TUNED_FREQUENCY, i64::MAX);
        assert_eq!(mem.tuned_frequency(), 100_000_000);
    }

    #[test]
    fn tuning_range_is_injected() {
        let mut mem = PersistentMemory::new(
            BufferRegion::<256>::new(),
            NoReferenceClock,
            FactoryCalibration,
            StoreConfig::new().tuning_range(Range::new(50_000_000, 1_000_000_000)),
        );
        mem.set_tuned_frequency(20_000_000);
        assert_eq!(mem.tuned_frequency(), 100_000_000);
        mem.set_tuned_frequency(900_000_000);
        assert_eq!(mem.tuned_frequency(), 900_000_000);
    }

    #[test]
    fn corrupt_touch_marker_restores_defaults_and_is_stable() {
        for bad in [0, u32::MAX, touch::MAGIC.magic() ^ 1, 0x1234_5678] {
            let mut mem = memory(0x5A);
            poke(&mut mem, offset::TOUCH_CALIBRATION_MAGIC, bad);

            let first = mem.touch_calibration();
            assert_eq!(first, FactoryCalibration::CALIBRATION);
            assert_eq!(raw_u32(&mem, offset::TOUCH_CALIBRATION_MAGIC), touch::MAGIC.magic());

            let snapshot = mem.region().clone();
            assert_eq!(mem.touch_calibration(), first);
            assert_eq!(mem.region(), &snapshot);
        }
    }

    #[test]
    fn set_touch_calibration_marks_valid() {
        let mut mem = memory(0xFF);
        let custom = Calibration {
            a: 1,
            b: 2,
            c: 3,
            d: 4,
            e: 5,
            f: 6,
            k: 7,
        };
        mem.set_touch_calibration(custom);
        assert_eq!(mem.touch_calibration(), custom);
        assert_eq!(raw_u32(&mem, offset::TOUCH_CALIBRATION_MAGIC), 0x074A_F82F);
    }

    #[test]
    fn corrupt_playdead_marker_restores_default_sequence() {
        let mut mem = memory(0x00);
        poke(&mut mem, offset::PLAYDEAD_SEQUENCE, 0xDEADu32);

        assert_eq!(mem.playdead_sequence(), playdead::SEQUENCE_DEFAULT);
        assert_eq!(raw_u32(&mem, offset::PLAYDEAD_MAGIC), 0x88D3_BB57);
        assert_eq!(raw_u32(&mem, offset::PLAYDEAD_SEQUENCE), 0x8D1);
        assert_eq!(mem.playdead_sequence(), playdead::SEQUENCE_DEFAULT);
    }

    #[test]
    fn valid_playdead_sequence_is_kept() {
        let mut mem = memory(0x00);
        let seq = PlayDeadSequence::from_symbols("SSUU").unwrap();
        mem.set_playdead_sequence(seq);
        poke(&mut mem, offset::PLAYING_DEAD, 1u32);
        assert_eq!(mem.playdead_sequence(), seq);
    }

    #[test]
    fn playing_dead_seeds_sequence_only_when_unset() {
        let mut mem = memory(0xFF);
        mem.set_playing_dead(0x5A5A);
        assert_eq!(mem.playing_dead(), 0x5A5A);
        assert_eq!(raw_u32(&mem, offset::PLAYDEAD_SEQUENCE), 0x8D1);
        assert_eq!(raw_u32(&mem, offset::PLAYDEAD_MAGIC), playdead::MAGIC.magic());

        let custom = PlayDeadSequence::from_symbols("LR").unwrap();
        mem.set_playdead_sequence(custom);
        mem.set_playing_dead(0);
        assert_eq!(mem.playdead_sequence(), custom);
        assert_eq!(mem.playing_dead(), 0);
    }

    #[test]
    fn backlight_index_in_table_round_trips() {
        for index in 0..=4u32 {
            let mut mem = memory(0x00);
            mem.set_ui_config(UiConfig(index << 5));
            assert_eq!(mem.backlight_off_index(), index as u8);
            assert_eq!(mem.ui_config().0, index << 5);
        }
    }

    #[test]
    fn backlight_index_past_table_heals_to_fifteen_seconds() {
        for index in 5..=7u32 {
            let mut mem = memory(0x00);
            let others = 0xFFFF_FF1F;
            mem.set_ui_config(UiConfig(others | (index << 5)));

            assert_eq!(mem.backlight_off_index(), 1);
            assert_eq!(mem.ui_config().0, others | (1 << 5));
            assert_eq!(mem.backlight_off_timeout_s(), Some(15));
        }
    }

    #[test]
    fn backlight_index_write_past_table_matches_read_repair() {
        let mut mem = memory(0x00);
        mem.set_backlight_off_enabled(true);
        mem.set_backlight_off_index(9);

        assert_eq!(mem.ui_config().raw_backlight_index(), 1);
        assert_eq!(mem.backlight_off_timeout_s(), Some(15));
        assert!(!mem.diagnose().contains(Faults::BACKLIGHT_INDEX));
    }

    #[test]
    fn backlight_timeout_heals_even_when_disabled() {
        let mut mem = memory(0x00);
        mem.set_ui_config(UiConfig(7 << 5));
        assert_eq!(mem.backlight_off_timeout_s(), None);
        assert_eq!(mem.ui_config().raw_backlight_index(), 1);

        mem.set_backlight_off_enabled(true);
        mem.set_backlight_off_index(4);
        assert_eq!(mem.backlight_off_timeout_s(), Some(600));
    }

    #[test]
    fn ui_flag_writes_leave_adjacent_bits_alone() {
        let mut mem = memory(0x00);
        mem.set_ui_config(UiConfig(0b1111_0111));

        mem.set_stealth_mode(true);
        assert_eq!(mem.ui_config().0, 0b1111_1111);
        assert!(mem.stealth_mode());

        mem.set_stealth_mode(false);
        assert_eq!(mem.ui_config().0, 0b1111_0111);

        mem.set_text_entry(TextEntry::Keyboard);
        assert_eq!(mem.ui_config().0, 0b1111_0011);
        assert_eq!(mem.text_entry(), TextEntry::Keyboard);

        mem.set_backlight_off_enabled(false);
        assert_eq!(mem.ui_config().0, 0b1111_0001);
        assert!(!mem.backlight_off_enabled());
    }

    #[test]
    fn afsk_sub_fields_share_one_word() {
        let mut mem = memory(0x00);
        mem.set_afsk_config(AfskConfig(0x00FF_FFFF));
        mem.set_afsk_repeats(3);
        mem.set_afsk_format(1);

        assert_eq!(mem.afsk_config().0, 0x03FD_FFFF);
        assert_eq!(mem.afsk_repeats(), 3);
        assert_eq!(mem.afsk_format(), 1);
    }

    #[test]
    fn passthrough_fields_store_any_value() {
        let mut mem = memory(0x00);
        mem.set_pocsag_address(0xFFFF_FFFF);
        assert_eq!(mem.pocsag_address(), 0xFFFF_FFFF);
        mem.set_afsk_config(AfskConfig(0xDEAD_BEEF));
        assert_eq!(mem.afsk_config(), AfskConfig(0xDEAD_BEEF));
    }

    #[test]
    fn writes_land_at_abi_offsets() {
        let mut mem = memory(0x00);
        mem.set_pocsag_address(0x1122_3344);
        mem.set_tuned_frequency(145_500_000);

        let bytes = mem.region().as_bytes();
        assert_eq!(&bytes[0x50..0x54], &0x1122_3344u32.to_ne_bytes());
        assert_eq!(&bytes[0x00..0x08], &145_500_000i64.to_ne_bytes());
        assert!(bytes[RECORD_SIZE..].iter().all(|b| *b == 0));
    }

    #[test]
    fn snapshot_of_blank_memory_is_defaults_and_leaves_it_valid() {
        let mut mem = memory(0x00);
        assert_eq!(
            mem.diagnose(),
            Faults::TUNED_FREQUENCY
                | Faults::TOUCH_CALIBRATION
                | Faults::AFSK_MARK_FREQ
                | Faults::AFSK_SPACE_FREQ
                | Faults::AFSK_BITRATE
                | Faults::AFSK_BW
                | Faults::PLAYDEAD
        );

        assert_eq!(mem.snapshot(), Settings::defaults(&FactoryCalibration));
        assert_eq!(mem.diagnose(), Faults::empty());
    }

    #[test]
    fn apply_then_snapshot_reproduces_settings() {
        let mut settings = Settings::defaults(&FactoryCalibration);
        settings.tuned_frequency = 446_006_250;
        settings.correction_ppb = 1_800;
        settings.afsk_bitrate = 2400;
        settings.afsk_config = AfskConfig::default().with_repeats(5).with_format(2);
        settings.playdead_sequence = PlayDeadSequence::from_symbols("RRLL").unwrap();
        settings.ui_config = UiConfig::default()
            .with_stealth_mode(true)
            .with_backlight_off_enabled(true)
            .with_backlight_index(3);
        settings.pocsag_address = 1_234_567;

        let mut mem = memory(0xFF);
        mem.apply(&settings);

        assert_eq!(mem.diagnose(), Faults::empty());
        assert_eq!(mem.snapshot(), settings);
        assert_eq!(mem.clock().calls, [1_800]);
    }
}
