//! Frequency-reference correction sink.

/// Receives the reference oscillator correction whenever it is persisted.
///
/// Implemented by the clock manager; the value is always already clipped to
/// [`PPB_RANGE`](crate::rf::PPB_RANGE).
pub trait ReferenceClock {
    fn set_reference_ppb(&mut self, ppb: i32);
}

/// For builds without a tunable reference (host tools, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReferenceClock;

impl ReferenceClock for NoReferenceClock {
    fn set_reference_ppb(&mut self, _ppb: i32) {}
}

impl<T: ReferenceClock + ?Sized> ReferenceClock for &mut T {
    fn set_reference_ppb(&mut self, ppb: i32) {
        (**self).set_reference_ppb(ppb)
    }
}
