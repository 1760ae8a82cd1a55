use enum_dispatch::enum_dispatch;

use super::{MediaPrimitive, MediaPrimitiveMut};

/// Capability every carrier offers to the LSB algorithm: an ordered sequence of units
/// that carry one bit each. The order is fixed and identical for reading and writing.
#[enum_dispatch]
pub trait Carrier {
    /// number of addressable units, one bit each
    fn capacity_bits(&self) -> usize;

    /// the units in scan order, read only
    fn units(&self) -> Box<dyn Iterator<Item = MediaPrimitive> + '_>;

    /// the units in scan order, for writing
    fn units_mut(&mut self) -> Box<dyn Iterator<Item = MediaPrimitiveMut<'_>> + '_>;

    /// largest magnitude a unit can take, used for signal to noise ratios
    fn peak_value(&self) -> f64;
}
