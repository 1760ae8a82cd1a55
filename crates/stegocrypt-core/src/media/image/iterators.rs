use image::{Pixel, RgbaImage};

use crate::media::{MediaPrimitive, MediaPrimitiveMut};

/// red, green and blue, alpha is never used for hiding
pub(crate) const COLOR_CHANNELS: usize = 3;

/// row-major over pixels, then R, G, B of every pixel
pub(crate) fn colors(image: &RgbaImage) -> impl Iterator<Item = MediaPrimitive> + '_ {
    image.pixels().flat_map(|pixel| {
        pixel
            .channels()
            .iter()
            .take(COLOR_CHANNELS)
            .copied()
            .map(MediaPrimitive::ImageColorChannel)
    })
}

/// mutable twin of [`colors`], same order
pub(crate) fn colors_mut(
    image: &mut RgbaImage,
) -> impl Iterator<Item = MediaPrimitiveMut<'_>> + '_ {
    image.pixels_mut().flat_map(|pixel| {
        pixel
            .channels_mut()
            .iter_mut()
            .take(COLOR_CHANNELS)
            .map(MediaPrimitiveMut::ImageColorChannel)
    })
}

pub(crate) fn color_capacity(image: &RgbaImage) -> usize {
    image.width() as usize * image.height() as usize * COLOR_CHANNELS
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_utils::{prepare_4x6_linear_growing_colors_skipped_alpha, prepare_5x5_image};

    #[test]
    fn should_iterate_rows_first_and_only_3_color_channels() {
        let img = prepare_4x6_linear_growing_colors_skipped_alpha();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 6);

        for (i, c) in colors(&img).enumerate() {
            assert_eq!(
                c,
                MediaPrimitive::ImageColorChannel(i as u8),
                "the ({i}+1)-th color was wrong"
            );
        }
        assert_eq!(colors(&img).count(), color_capacity(&img));
    }

    #[test]
    fn should_iterate_mutable_colors_in_the_same_order() {
        let img_ro = prepare_5x5_image();
        let mut img = img_ro.clone();
        let (width, height) = img.dimensions();
        let mut color_iter = colors_mut(&mut img);

        for y in 0..height {
            for x in 0..width {
                let expected_pixel = img_ro.get_pixel(x, y);
                for color_idx in 0..COLOR_CHANNELS {
                    let mut expected_color = expected_pixel.0[color_idx];
                    let given_color = color_iter
                        .next()
                        .unwrap_or_else(|| panic!("Color at ({x}, {y}) was not even existing!"));

                    assert_eq!(
                        given_color,
                        MediaPrimitiveMut::ImageColorChannel(&mut expected_color),
                        "Color at ({x}, {y}) does not match"
                    );
                }
            }
        }
        // ensure iterator is exhausted
        assert!(color_iter.next().is_none());
    }

    #[test]
    fn should_be_possible_to_mutate_colors_without_touching_alpha() {
        let mut img = prepare_5x5_image();
        let first_pixel = *img.get_pixel(0, 0);
        for color in colors_mut(&mut img) {
            if let MediaPrimitiveMut::ImageColorChannel(c) = color {
                *c = c.wrapping_add(2);
            }
        }

        let changed = *img.get_pixel(0, 0);
        assert_eq!(changed.0[0], first_pixel.0[0] + 2);
        assert_eq!(changed.0[2], first_pixel.0[2] + 2);
        assert_eq!(changed.0[3], first_pixel.0[3], "alpha must stay untouched");
    }
}
