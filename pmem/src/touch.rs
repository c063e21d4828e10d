//! Touch-panel calibration record and its default provider.

use bytemuck::{Pod, Zeroable};

use crate::sentinel::Sentinel;

pub const MAGIC: Sentinel = Sentinel::new(0x074A_F82F);

/// Affine mapping from raw digitizer readings to screen pixels.
///
/// ```text
/// x = (a * raw_x + b * raw_y + c) / k
/// y = (d * raw_x + e * raw_y + f) / k
/// ```
///
/// Stored verbatim in retained RAM; the layout is part of the record ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(C)]
pub struct Calibration {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub d: i32,
    pub e: i32,
    pub f: i32,
    pub k: i32,
}

impl Calibration {
    /// Map a raw reading to screen coordinates. A degenerate calibration
    /// (`k == 0`) maps everything to the origin.
    pub fn translate(&self, raw_x: i32, raw_y: i32) -> (i32, i32) {
        if self.k == 0 {
            return (0, 0);
        }
        let (rx, ry, k) = (raw_x as i64, raw_y as i64, self.k as i64);
        let x = (self.a as i64 * rx + self.b as i64 * ry + self.c as i64) / k;
        let y = (self.d as i64 * rx + self.e as i64 * ry + self.f as i64) / k;
        (x as i32, y as i32)
    }
}

/// Supplies the calibration used when the stored one is missing or corrupt.
pub trait TouchDefaults {
    fn default_calibration(&self) -> Calibration;
}

/// Coefficients measured on a reference unit.
///
/// Maps raw (256, 731), (880, 389), (735, 260) onto screen (32, 48),
/// (208, 288), (120, 360).
#[derive(Debug, Clone, Copy, Default)]
pub struct FactoryCalibration;

impl FactoryCalibration {
    pub const CALIBRATION: Calibration = Calibration {
        a: -52_800,
        b: -29_392,
        c: 30_839_600,
        d: -6_336,
        e: 79_728,
        f: -62_903_280,
        k: -130_086,
    };
}

impl TouchDefaults for FactoryCalibration {
    fn default_calibration(&self) -> Calibration {
        Self::CALIBRATION
    }
}

impl<T: TouchDefaults + ?Sized> TouchDefaults for &T {
    fn default_calibration(&self) -> Calibration {
        (**self).default_calibration()
    }
}
