#![allow(dead_code)]

use std::path::Path;
use std::sync::OnceLock;

use hound::{SampleFormat, WavSpec, WavWriter};
use stegocrypt_core::KeyPair;

/// RSA key generation is slow in debug builds, so tests share one pair
pub fn key_pair() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| KeyPair::generate().expect("Cannot generate key pair"))
}

pub fn write_key_files(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let (public_pem, private_pem) = key_pair().export().expect("Cannot export keys");
    let public = dir.join("public.pem");
    let private = dir.join("private.pem");
    std::fs::write(&public, public_pem).expect("Cannot write public key");
    std::fs::write(&private, private_pem.as_bytes()).expect("Cannot write private key");

    (public, private)
}

/// a 440 Hz tone, the kind of recording that gets hidden
pub fn write_tone(file: &Path, channels: u16, bits_per_sample: u16, seconds: f32) {
    let spec = WavSpec {
        channels,
        sample_rate: 8000,
        bits_per_sample,
        sample_format: SampleFormat::Int,
    };
    let amplitude = ((1i64 << (bits_per_sample - 1)) - 1) as f32 * 0.8;
    let frames = (8000.0 * seconds) as usize;
    let mut writer = WavWriter::create(file, spec).expect("Cannot create wav");
    for t in 0..frames {
        let v = (t as f32 / 8000.0 * 440.0 * std::f32::consts::TAU).sin() * amplitude;
        for _ in 0..channels {
            writer.write_sample(v as i32).expect("Cannot write sample");
        }
    }
    writer.finalize().expect("Cannot finalize wav");
}

pub fn write_noise_png(file: &Path, width: u32, height: u32, with_alpha: bool) {
    let mut seed = 0x2545_f491u32;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        seed as u8
    };
    if with_alpha {
        image::RgbaImage::from_fn(width, height, |_, _| {
            image::Rgba([next(), next(), next(), next()])
        })
        .save(file)
        .expect("Cannot write png");
    } else {
        image::RgbImage::from_fn(width, height, |_, _| image::Rgb([next(), next(), next()]))
            .save(file)
            .expect("Cannot write png");
    }
}
