use std::fs::File;
use std::io::{BufReader, Read, Seek, Write};
use std::path::Path;

use image::RgbaImage;

use super::apng;
use crate::error::CarrierIoError;
use crate::media::image::iterators::{color_capacity, colors, colors_mut};
use crate::media::{Carrier, MediaPrimitive, MediaPrimitiveMut};
use crate::result::Result;

/// display time of one frame in seconds, `numerator / denominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDelay {
    pub numerator: u16,
    pub denominator: u16,
}

impl FrameDelay {
    pub fn new(numerator: u16, denominator: u16) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl Default for FrameDelay {
    /// 10 frames per second
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// A sequence of equally sized frames stored as animated PNG.
///
/// Units are visited frame by frame in decode order and within a frame exactly like a
/// still image: rows first, then R, G and B of every pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub width: u32,
    pub height: u32,
    pub frames: Vec<RgbaImage>,
    pub delays: Vec<FrameDelay>,
    /// 0 loops forever
    pub num_plays: u32,
    pub has_alpha: bool,
}

impl Video {
    /// builds a video from frames that all share the dimensions of the first one
    pub fn from_frames(frames: Vec<RgbaImage>, delay: FrameDelay) -> Result<Self> {
        let (width, height) = frames.first().map(|f| f.dimensions()).ok_or_else(|| {
            CarrierIoError::InvalidVideoMedia("a video needs at least one frame".to_string())
        })?;
        if let Some(i) = frames.iter().position(|f| f.dimensions() != (width, height)) {
            return Err(CarrierIoError::InvalidVideoMedia(format!(
                "frame {i} is {:?} but the video is {width}x{height}",
                frames[i].dimensions()
            ))
            .into());
        }

        Ok(Self {
            width,
            height,
            delays: vec![delay; frames.len()],
            frames,
            num_plays: 0,
            has_alpha: false,
        })
    }

    pub fn from_file(file: &Path) -> Result<Self> {
        let f = File::open(file).map_err(|source| CarrierIoError::ReadError { source })?;

        Self::from_reader(f)
    }

    pub fn from_reader<R: Read + Seek>(input: R) -> Result<Self> {
        apng::read(BufReader::new(input))
    }

    pub fn save_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        apng::write(self, writer)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl Carrier for Video {
    fn capacity_bits(&self) -> usize {
        self.frames.iter().map(color_capacity).sum()
    }

    fn units(&self) -> Box<dyn Iterator<Item = MediaPrimitive> + '_> {
        Box::new(self.frames.iter().flat_map(colors))
    }

    fn units_mut(&mut self) -> Box<dyn Iterator<Item = MediaPrimitiveMut<'_>> + '_> {
        Box::new(self.frames.iter_mut().flat_map(colors_mut))
    }

    fn peak_value(&self) -> f64 {
        f64::from(u8::MAX)
    }
}
