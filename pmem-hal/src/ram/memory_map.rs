//! Retained RAM memory map constants.
//!
//! Generated by `build.rs` from `data/backup_ram_layout.toml`.

include!(concat!(env!("OUT_DIR"), "/memory_map_generated.rs"));

#[cfg(test)]
mod tests {
    use super::backup_ram;

    #[test]
    fn record_start_is_inside_region_and_aligned() {
        assert!(backup_ram::RECORD_OFFSET < backup_ram::SIZE);
        assert_eq!((backup_ram::BASE + backup_ram::RECORD_OFFSET) % backup_ram::RECORD_ALIGN, 0);
    }

    #[test]
    fn region_matches_vbat_register_block() {
        assert_eq!(backup_ram::BASE, 0x4004_1000);
        assert_eq!(backup_ram::SIZE, 256);
    }
}
