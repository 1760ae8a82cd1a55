use criterion::{criterion_group, criterion_main, Criterion};
use hound::{SampleFormat, WavSpec};
use stegocrypt_core::bitstream;
use stegocrypt_core::lsb;
use stegocrypt_core::media::audio::WavAudio;

pub fn audio_encoding(c: &mut Criterion) {
    c.bench_function("Audio Encoding", |b| {
        let spec = WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut audio = WavAudio::new(spec, vec![0; 44100 * 2]).expect("Invalid wav spec");
        let frame = bitstream::frame(&[0x42; 4096]).expect("Cannot frame the payload");

        b.iter(|| lsb::embed(&mut audio, &frame).expect("Cannot embed the payload"))
    });
}

criterion_group!(benches, audio_encoding);
criterion_main!(benches);
