use std::io::{Seek, Write};
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat, RgbaImage};
use log::error;

use super::iterators::{color_capacity, colors, colors_mut};
use crate::error::CarrierIoError;
use crate::media::{Carrier, MediaPrimitive, MediaPrimitiveMut};
use crate::result::Result;

/// A still image carrier. Only 8 bit RGB and RGBA sources are accepted, pixels are held as
/// RGBA and `has_alpha` remembers which of the two the stego image is written as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StillImage {
    pub pixels: RgbaImage,
    pub has_alpha: bool,
}

impl StillImage {
    pub fn new(pixels: RgbaImage, has_alpha: bool) -> Self {
        Self { pixels, has_alpha }
    }

    /// opens any raster format the `image` crate decodes (png, bmp, jpeg)
    pub fn from_file(file: &Path) -> Result<Self> {
        let img = image::open(file).map_err(|e| {
            error!("Error opening image {file:?}: {e}");
            CarrierIoError::InvalidImageMedia(e.to_string())
        })?;

        Self::try_from(img)
    }

    /// Always writes lossless PNG, any other format would destroy the hidden bits.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        let written = if self.has_alpha {
            self.pixels.write_to(&mut writer, ImageFormat::Png)
        } else {
            DynamicImage::ImageRgba8(self.pixels.clone())
                .to_rgb8()
                .write_to(&mut writer, ImageFormat::Png)
        };

        written.map_err(|e| {
            error!("Error saving image: {e}");
            CarrierIoError::ImageEncodingError.into()
        })
    }
}

impl TryFrom<DynamicImage> for StillImage {
    type Error = crate::StegoError;

    /// Converting other pixel formats would change more than the LSBs, so they are refused.
    fn try_from(img: DynamicImage) -> Result<Self> {
        match img.color() {
            ColorType::Rgb8 => Ok(Self::new(img.to_rgba8(), false)),
            ColorType::Rgba8 => Ok(Self::new(img.into_rgba8(), true)),
            other => Err(CarrierIoError::InvalidImageMedia(format!(
                "pixel format {other:?} is not supported, only 8 bit RGB and RGBA are"
            ))
            .into()),
        }
    }
}

impl Carrier for StillImage {
    fn capacity_bits(&self) -> usize {
        color_capacity(&self.pixels)
    }

    fn units(&self) -> Box<dyn Iterator<Item = MediaPrimitive> + '_> {
        Box::new(colors(&self.pixels))
    }

    fn units_mut(&mut self) -> Box<dyn Iterator<Item = MediaPrimitiveMut<'_>> + '_> {
        Box::new(colors_mut(&mut self.pixels))
    }

    fn peak_value(&self) -> f64 {
        f64::from(u8::MAX)
    }
}
