use std::fmt;
use std::io::{Seek, Write};
use std::path::Path;

use enum_dispatch::enum_dispatch;

use super::audio::WavAudio;
use super::image::StillImage;
use super::video::Video;
use super::{write_atomically, Carrier, MediaPrimitive, MediaPrimitiveMut, Persist};
use crate::error::CarrierIoError;
use crate::result::Result;

/// the three kinds of carriers, picked by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
    Video,
}

impl MediaKind {
    /// `png`, `bmp`, `jpg` and `jpeg` are images, `wav` is audio and `apng` is video
    pub fn from_path(file: &Path) -> Result<Self> {
        let ext = file
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| CarrierIoError::UnsupportedMedia(file.to_path_buf()))?;

        match ext.as_str() {
            "png" | "bmp" | "jpg" | "jpeg" => Ok(Self::Image),
            "wav" => Ok(Self::Audio),
            "apng" => Ok(Self::Video),
            _ => Err(CarrierIoError::UnsupportedMedia(file.to_path_buf()).into()),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => f.write_str("image"),
            MediaKind::Audio => f.write_str("audio"),
            MediaKind::Video => f.write_str("video"),
        }
    }
}

/// a media container for steganography
#[enum_dispatch(Carrier)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Image(StillImage),
    Audio(WavAudio),
    Video(Video),
}

impl Media {
    pub fn from_file(f: &Path) -> Result<Self> {
        match MediaKind::from_path(f)? {
            MediaKind::Image => StillImage::from_file(f).map(Self::Image),
            MediaKind::Audio => WavAudio::from_file(f).map(Self::Audio),
            MediaKind::Video => Video::from_file(f).map(Self::Video),
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Media::Image(_) => MediaKind::Image,
            Media::Audio(_) => MediaKind::Audio,
            Media::Video(_) => MediaKind::Video,
        }
    }

    /// Stego media keep the carrier's container and images are always written as PNG, so
    /// `file` has to be named accordingly or it could not be opened again.
    pub fn ensure_writable_as(&self, file: &Path) -> Result<()> {
        let kind = MediaKind::from_path(file)?;
        let is_png = file
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

        match (self.kind(), kind) {
            (MediaKind::Image, MediaKind::Image) if is_png => Ok(()),
            (MediaKind::Audio, MediaKind::Audio) | (MediaKind::Video, MediaKind::Video) => Ok(()),
            _ => Err(CarrierIoError::UnsupportedMedia(file.to_path_buf()).into()),
        }
    }

    pub fn save_to_writer<W: Write + Seek>(&self, writer: W) -> Result<()> {
        match self {
            Media::Image(i) => i.save_to_writer(writer),
            Media::Audio(a) => a.save_to_writer(writer),
            Media::Video(v) => v.save_to_writer(writer),
        }
    }
}

impl Persist for Media {
    /// The stego file is written next to `file` and renamed into place, so a failing
    /// encoder never leaves a partial file behind.
    fn save_as(&mut self, file: &Path) -> Result<()> {
        self.ensure_writable_as(file)?;
        write_atomically(file, |writer| self.save_to_writer(writer))
    }
}
