use criterion::{criterion_group, criterion_main, Criterion};
use image::RgbaImage;
use stegocrypt_core::bitstream;
use stegocrypt_core::lsb;
use stegocrypt_core::media::image::StillImage;

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let mut img = StillImage::new(RgbaImage::new(512, 512), false);
        let frame = bitstream::frame(&[0x42; 4096]).expect("Cannot frame the payload");
        lsb::embed(&mut img, &frame).expect("Cannot embed the payload");

        b.iter(|| lsb::extract_frame(&img).expect("Failed to read 4096 bytes"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
