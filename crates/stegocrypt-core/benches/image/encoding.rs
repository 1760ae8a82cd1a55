use criterion::{criterion_group, criterion_main, Criterion};
use image::RgbaImage;
use stegocrypt_core::bitstream;
use stegocrypt_core::lsb;
use stegocrypt_core::media::image::StillImage;

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let mut plain_image = StillImage::new(RgbaImage::new(512, 512), false);
        let frame = bitstream::frame(&[0x42; 4096]).expect("Cannot frame the payload");

        b.iter(|| lsb::embed(&mut plain_image, &frame).expect("Cannot embed the payload"))
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
