use crate::media::{HideBit, MediaPrimitiveMut};

/// generic hiding algorithm, used for specific ones like LSB
pub trait HideAlgorithm {
    /// encodes one bit onto a carrier unit e.g. a color channel or an audio sample
    fn hide(&self, unit: MediaPrimitiveMut<'_>, bit: bool);
}

/// default 1 bit hiding strategy
pub struct OneBitHide;

impl HideAlgorithm for OneBitHide {
    #[inline(always)]
    fn hide(&self, unit: MediaPrimitiveMut<'_>, bit: bool) {
        unit.hide_bit(bit);
    }
}

/// generic stegano encoder, writes one bit per unit in the order the units are yielded
pub struct UniversalEncoder<I, A> {
    input: I,
    algorithm: A,
}

pub type Encoder<I, A> = UniversalEncoder<I, A>;

impl<'a, I, A> UniversalEncoder<I, A>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
    A: HideAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Self { input, algorithm }
    }

    /// Hides `bits` in the next units and returns how many were written.
    /// Units after the last bit are not touched.
    pub fn write_bits(&mut self, bits: &[bool]) -> usize {
        let mut written = 0;
        for (unit, bit) in self.input.by_ref().zip(bits) {
            self.algorithm.hide(unit, *bit);
            written += 1;
        }

        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_stop_after_the_last_bit() {
        let mut colors = [0xffu8; 6];
        let written = Encoder::new(
            colors.iter_mut().map(MediaPrimitiveMut::ImageColorChannel),
            OneBitHide,
        )
        .write_bits(&[false, true, false]);

        assert_eq!(written, 3);
        assert_eq!(colors, [0xfe, 0xff, 0xfe, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn should_report_short_writes_when_units_run_out() {
        let mut samples = [0i32; 2];
        let written = Encoder::new(
            samples.iter_mut().map(MediaPrimitiveMut::AudioSample),
            OneBitHide,
        )
        .write_bits(&[true; 5]);

        assert_eq!(written, 2);
        assert_eq!(samples, [1, 1]);
    }
}
