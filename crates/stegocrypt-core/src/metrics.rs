//! Distortion between a carrier and its stego version.

use crate::error::StegoError;
use crate::media::{Carrier, Media};
use crate::result::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distortion {
    /// number of compared units
    pub units: usize,
    /// units whose value differs
    pub changed_units: usize,
    /// mean squared error over all units
    pub mse: f64,
    /// peak signal to noise ratio in dB, infinite for identical media
    pub psnr: f64,
}

/// Compares two media unit by unit in scan order, both have to be of the same kind and shape.
pub fn compare(original: &Media, stego: &Media) -> Result<Distortion> {
    if original.kind() != stego.kind() {
        return Err(StegoError::MediaMismatch(format!(
            "cannot compare {} with {}",
            original.kind(),
            stego.kind()
        )));
    }
    let units = original.capacity_bits();
    if units != stego.capacity_bits() {
        return Err(StegoError::MediaMismatch(format!(
            "{units} units cannot be compared with {} units",
            stego.capacity_bits()
        )));
    }

    let (changed_units, squared_error) = original.units().zip(stego.units()).fold(
        (0usize, 0f64),
        |(changed, sum), (a, b)| {
            let diff = a.value() - b.value();
            (changed + usize::from(a != b), sum + diff * diff)
        },
    );
    let mse = if units == 0 {
        0.0
    } else {
        squared_error / units as f64
    };
    let psnr = if mse == 0.0 {
        f64::INFINITY
    } else {
        let peak = original.peak_value();
        10.0 * (peak * peak / mse).log10()
    };

    Ok(Distortion {
        units,
        changed_units,
        mse,
        psnr,
    })
}
