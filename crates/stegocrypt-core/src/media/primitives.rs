/// wrap the low level data types that carries information
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum MediaPrimitive {
    ImageColorChannel(u8),
    AudioSample(i32),
}

impl MediaPrimitive {
    /// the least significant bit of the unit
    #[inline(always)]
    pub fn lsb(&self) -> bool {
        match self {
            MediaPrimitive::ImageColorChannel(c) => c & 1 == 1,
            MediaPrimitive::AudioSample(s) => s & 1 == 1,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            MediaPrimitive::ImageColorChannel(c) => f64::from(*c),
            MediaPrimitive::AudioSample(s) => f64::from(*s),
        }
    }
}

impl From<u8> for MediaPrimitive {
    fn from(value: u8) -> Self {
        MediaPrimitive::ImageColorChannel(value)
    }
}

impl From<i32> for MediaPrimitive {
    fn from(value: i32) -> Self {
        MediaPrimitive::AudioSample(value)
    }
}

/// mutable primitive for storing stegano data
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitiveMut<'a> {
    ImageColorChannel(&'a mut u8),
    AudioSample(&'a mut i32),
}

pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for MediaPrimitiveMut<'_> {
    #[inline(always)]
    fn hide_bit(self, bit: bool) {
        match self {
            MediaPrimitiveMut::ImageColorChannel(c) => {
                *c = (*c & !1) | u8::from(bit);
            }
            MediaPrimitiveMut::AudioSample(s) => {
                *s = (*s & !1) | i32::from(bit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carrier_item_mut_should_allow_to_mutate_colors() {
        let mut color: u8 = 8;
        let c = MediaPrimitiveMut::ImageColorChannel(&mut color);

        if let MediaPrimitiveMut::ImageColorChannel(i) = c {
            *i = 9;
        }

        assert_eq!(color, 9);
    }

    #[test]
    fn hide_bit_should_only_touch_the_lowest_bit() {
        let mut color: u8 = 0b1010_1010;
        MediaPrimitiveMut::ImageColorChannel(&mut color).hide_bit(true);
        assert_eq!(color, 0b1010_1011);
        MediaPrimitiveMut::ImageColorChannel(&mut color).hide_bit(false);
        assert_eq!(color, 0b1010_1010);
    }

    #[test]
    fn hide_bit_should_keep_the_sign_of_negative_samples() {
        let mut sample: i32 = -32768;
        MediaPrimitiveMut::AudioSample(&mut sample).hide_bit(true);
        assert_eq!(sample, -32767);

        let mut sample: i32 = -1;
        MediaPrimitiveMut::AudioSample(&mut sample).hide_bit(false);
        assert_eq!(sample, -2);
        assert!(!MediaPrimitive::AudioSample(sample).lsb());
    }
}
