use crate::media::MediaPrimitive;

/// generic unveil algorithm
pub trait UnveilAlgorithm {
    fn unveil(&self, unit: MediaPrimitive) -> bool;
}

/// default 1 bit unveil strategy
pub struct OneBitUnveil;

impl UnveilAlgorithm for OneBitUnveil {
    #[inline(always)]
    fn unveil(&self, unit: MediaPrimitive) -> bool {
        unit.lsb()
    }
}

/// generic stegano decoder, yields one bit per carrier unit
pub struct UniversalDecoder<I, A> {
    input: I,
    algorithm: A,
}

pub type Decoder<I, A> = UniversalDecoder<I, A>;

impl<I, A> UniversalDecoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Self { input, algorithm }
    }
}

impl<I, A> Iterator for UniversalDecoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.input.next().map(|unit| self.algorithm.unveil(unit))
    }
}
