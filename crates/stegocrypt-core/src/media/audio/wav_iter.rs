use std::slice::{Iter, IterMut};

use crate::media::{MediaPrimitive, MediaPrimitiveMut};

/// Iterating decoded wav samples in file order, channels interleaved
pub struct AudioWavIter<'a> {
    samples: Iter<'a, i32>,
}

impl<'a> AudioWavIter<'a> {
    pub fn new(samples: Iter<'a, i32>) -> Self {
        Self { samples }
    }
}

/// Audio samples iterator that yields immutable MediaPrimitives `MediaPrimitive`
impl Iterator for AudioWavIter<'_> {
    type Item = MediaPrimitive;

    fn next(&mut self) -> Option<Self::Item> {
        self.samples.next().copied().map(MediaPrimitive::AudioSample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}

/// Iterating mutable wav samples, same order as [`AudioWavIter`]
pub struct AudioWavIterMut<'a> {
    samples: IterMut<'a, i32>,
}

impl<'a> AudioWavIterMut<'a> {
    pub fn new(samples: IterMut<'a, i32>) -> Self {
        Self { samples }
    }
}

/// Audio samples iterator that yields mutable MediaPrimitives `MediaPrimitiveMut`
impl<'a> Iterator for AudioWavIterMut<'a> {
    type Item = MediaPrimitiveMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.samples.next().map(MediaPrimitiveMut::AudioSample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}
