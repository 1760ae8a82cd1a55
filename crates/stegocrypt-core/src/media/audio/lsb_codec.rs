use std::io::{Read, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::error;

use super::wav_iter::{AudioWavIter, AudioWavIterMut};
use crate::error::CarrierIoError;
use crate::media::{Carrier, MediaPrimitive, MediaPrimitiveMut};
use crate::result::Result;

/// An integer PCM wav carrier, samples are widened to `i32` and written back with the
/// original bit depth, channel count and sample rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavAudio {
    pub spec: WavSpec,
    pub samples: Vec<i32>,
}

impl WavAudio {
    pub fn new(spec: WavSpec, samples: Vec<i32>) -> Result<Self> {
        check_spec(&spec)?;

        Ok(Self { spec, samples })
    }

    pub fn from_file(file: &Path) -> Result<Self> {
        let reader = WavReader::open(file).map_err(|e| {
            error!("Error opening wav {file:?}: {e}");
            wav_error(e)
        })?;

        Self::from_wav_reader(reader)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_wav_reader(WavReader::new(reader).map_err(wav_error)?)
    }

    fn from_wav_reader<R: Read>(mut reader: WavReader<R>) -> Result<Self> {
        let spec = reader.spec();
        check_spec(&spec)?;
        let samples = reader
            .samples::<i32>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(wav_error)?;

        Ok(Self { spec, samples })
    }

    pub fn save_to_writer<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut wav_writer = WavWriter::new(writer, self.spec).map_err(|e| {
            error!("Error creating wav writer: {e}");
            CarrierIoError::AudioEncodingError
        })?;
        for sample in &self.samples {
            wav_writer
                .write_sample(*sample)
                .map_err(|_| CarrierIoError::AudioEncodingError)?;
        }
        wav_writer.finalize().map_err(|e| {
            error!("Error finalizing wav: {e}");
            CarrierIoError::AudioEncodingError
        })?;

        Ok(())
    }
}

fn check_spec(spec: &WavSpec) -> Result<()> {
    if spec.sample_format != SampleFormat::Int {
        return Err(CarrierIoError::InvalidAudioMedia(
            "only integer PCM samples can carry data".to_string(),
        )
        .into());
    }
    if !(8..=32).contains(&spec.bits_per_sample) {
        return Err(CarrierIoError::InvalidAudioMedia(format!(
            "{} bits per sample are not supported",
            spec.bits_per_sample
        ))
        .into());
    }

    Ok(())
}

fn wav_error(e: hound::Error) -> CarrierIoError {
    match e {
        hound::Error::IoError(source) => CarrierIoError::ReadError { source },
        other => CarrierIoError::InvalidAudioMedia(other.to_string()),
    }
}

impl Carrier for WavAudio {
    fn capacity_bits(&self) -> usize {
        self.samples.len()
    }

    fn units(&self) -> Box<dyn Iterator<Item = MediaPrimitive> + '_> {
        Box::new(AudioWavIter::new(self.samples.iter()))
    }

    fn units_mut(&mut self) -> Box<dyn Iterator<Item = MediaPrimitiveMut<'_>> + '_> {
        Box::new(AudioWavIterMut::new(self.samples.iter_mut()))
    }

    fn peak_value(&self) -> f64 {
        f64::from(1u32 << (self.spec.bits_per_sample - 1))
    }
}
