//! Generates `memory_map_generated.rs` from `data/backup_ram_layout.toml`.
//!
//! The layout file is the single source of truth for where the retained
//! region lives and where the persisted record starts inside it. Invalid
//! layouts abort the build.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LayoutFile {
    backup_ram: BackupRamLayout,
}

#[derive(Debug, Deserialize)]
struct BackupRamLayout {
    base: u64,
    size: u64,
    record_offset: u64,
    #[serde(default = "default_record_align")]
    record_align: u64,
}

fn default_record_align() -> u64 {
    8
}

impl BackupRamLayout {
    fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("backup_ram.size must be non-zero".into());
        }
        if !self.record_align.is_power_of_two() {
            return Err(format!(
                "backup_ram.record_align must be a power of two, got {}",
                self.record_align
            ));
        }
        if self.base % self.record_align != 0 {
            return Err(format!(
                "backup_ram.base {:#x} is not {}-byte aligned",
                self.base, self.record_align
            ));
        }
        if self.record_offset % self.record_align != 0 {
            return Err(format!(
                "backup_ram.record_offset {:#x} is not {}-byte aligned",
                self.record_offset, self.record_align
            ));
        }
        if self.record_offset >= self.size {
            return Err(format!(
                "backup_ram.record_offset {:#x} lies outside the {:#x} byte region",
                self.record_offset, self.size
            ));
        }
        Ok(())
    }

    fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "/// VBAT-retained RAM region (identical in every core's view).").unwrap();
        writeln!(out, "pub mod backup_ram {{").unwrap();
        writeln!(out, "    /// Region base address.").unwrap();
        writeln!(out, "    pub const BASE: usize = {:#x};", self.base).unwrap();
        writeln!(out, "    /// Region capacity in bytes.").unwrap();
        writeln!(out, "    pub const SIZE: usize = {:#x};", self.size).unwrap();
        writeln!(out, "    /// Byte offset of the persisted record within the region.").unwrap();
        writeln!(out, "    pub const RECORD_OFFSET: usize = {:#x};", self.record_offset).unwrap();
        writeln!(out, "    /// Required alignment of the record start.").unwrap();
        writeln!(out, "    pub const RECORD_ALIGN: usize = {};", self.record_align).unwrap();
        writeln!(out, "}}").unwrap();
        out
    }
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let layout_path = manifest_dir.join("data").join("backup_ram_layout.toml");
    println!("cargo:rerun-if-changed={}", layout_path.display());

    let text = fs::read_to_string(&layout_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", layout_path.display(), e));
    let layout: LayoutFile = toml::from_str(&text)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", layout_path.display(), e));

    if let Err(msg) = layout.backup_ram.validate() {
        panic!("{}: {}", layout_path.display(), msg);
    }

    let out = PathBuf::from(env::var("OUT_DIR").unwrap()).join("memory_map_generated.rs");
    fs::write(&out, layout.backup_ram.render())
        .unwrap_or_else(|e| panic!("failed to write {}: {}", out.display(), e));
}
