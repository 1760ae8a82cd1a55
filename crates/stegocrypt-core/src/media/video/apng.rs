//! Animated PNG container: every frame is a lossless, full canvas 8 bit RGB(A) image.

use std::io::{BufRead, Seek, Write};

use image::{DynamicImage, RgbImage, RgbaImage};
use log::error;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};

use super::lsb_codec::{FrameDelay, Video};
use crate::error::CarrierIoError;
use crate::result::Result;

fn invalid(reason: impl Into<String>) -> CarrierIoError {
    CarrierIoError::InvalidVideoMedia(reason.into())
}

fn decoding_error(e: png::DecodingError) -> CarrierIoError {
    match e {
        png::DecodingError::IoError(source) => CarrierIoError::ReadError { source },
        other => invalid(other.to_string()),
    }
}

fn encoding_error(e: png::EncodingError) -> CarrierIoError {
    error!("Error encoding video frame: {e}");
    CarrierIoError::VideoEncodingError
}

pub(super) fn read<R: BufRead + Seek>(input: R) -> Result<Video> {
    let mut decoder = Decoder::new(input);
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder.read_info().map_err(decoding_error)?;

    // frames are written back as they were read, other formats would be converted
    let (color_type, bit_depth) = reader.output_color_type();
    if !matches!(color_type, ColorType::Rgb | ColorType::Rgba) || bit_depth != BitDepth::Eight {
        return Err(invalid(format!(
            "pixel format {color_type:?} with {bit_depth:?} bit depth is not supported, \
             only 8 bit RGB and RGBA are"
        ))
        .into());
    }
    let has_alpha = color_type == ColorType::Rgba;

    let (width, height) = reader.info().size();
    let animation = reader.info().animation_control;
    let num_plays = animation.map_or(0, |ac| ac.num_plays);
    // a default image outside the animation is not part of the video
    let skip_default_image = animation.is_some() && reader.info().frame_control.is_none();
    let frame_count =
        animation.map_or(1, |ac| ac.num_frames as usize) + usize::from(skip_default_image);

    let mut buf = vec![0; reader.output_buffer_size()];
    let mut frames = Vec::with_capacity(frame_count);
    let mut delays = Vec::with_capacity(frame_count);

    for index in 0..frame_count {
        let output = reader.next_frame(&mut buf).map_err(decoding_error)?;
        if index == 0 && skip_default_image {
            continue;
        }

        let delay = match reader.info().frame_control {
            Some(fc) => {
                let full_canvas = fc.x_offset == 0
                    && fc.y_offset == 0
                    && fc.width == width
                    && fc.height == height;
                if !full_canvas {
                    return Err(invalid(format!(
                        "frame {} covers {}x{} at ({}, {}) instead of the {width}x{height} canvas",
                        frames.len(),
                        fc.width,
                        fc.height,
                        fc.x_offset,
                        fc.y_offset
                    ))
                    .into());
                }
                FrameDelay::new(fc.delay_num, fc.delay_den)
            }
            None => FrameDelay::default(),
        };

        let data = buf[..output.buffer_size()].to_vec();
        let frame = if has_alpha {
            RgbaImage::from_raw(width, height, data)
        } else {
            RgbImage::from_raw(width, height, data).map(|f| DynamicImage::ImageRgb8(f).to_rgba8())
        }
        .ok_or_else(|| invalid(format!("frame {} has an unexpected layout", frames.len())))?;

        frames.push(frame);
        delays.push(delay);
    }

    Ok(Video {
        width,
        height,
        frames,
        delays,
        num_plays,
        has_alpha,
    })
}

pub(super) fn write<W: Write>(video: &Video, output: W) -> Result<()> {
    let mut encoder = Encoder::new(output, video.width, video.height);
    encoder.set_color(if video.has_alpha {
        ColorType::Rgba
    } else {
        ColorType::Rgb
    });
    encoder.set_depth(BitDepth::Eight);
    let num_frames = u32::try_from(video.frames.len())
        .map_err(|_| invalid(format!("{} frames are too many", video.frames.len())))?;
    encoder
        .set_animated(num_frames, video.num_plays)
        .map_err(encoding_error)?;

    let mut writer = encoder.write_header().map_err(encoding_error)?;
    for (frame, delay) in video.frames.iter().zip(&video.delays) {
        writer
            .set_frame_delay(delay.numerator, delay.denominator)
            .map_err(encoding_error)?;
        let written = if video.has_alpha {
            writer.write_image_data(frame.as_raw())
        } else {
            let rgb = DynamicImage::ImageRgba8(frame.clone()).to_rgb8();
            writer.write_image_data(rgb.as_raw())
        };
        written.map_err(encoding_error)?;
    }
    writer.finish().map_err(encoding_error)?;

    Ok(())
}
