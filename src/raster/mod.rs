//! Pixel buffers: strided single-channel planes and HSV splitting

mod hsv;
mod plane;

pub use hsv::{HsvPlanes, hsv_to_rgb, rgb_to_hsv, split_hsv};
pub use plane::{Plane, PlaneMut};

use crate::types::Channel;
use image::{GrayImage, RgbImage};

/// Copy one colour channel out of an RGB image
#[must_use]
pub fn extract_channel(image: &RgbImage, channel: Channel) -> GrayImage {
    let idx = channel.index();
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        image::Luma([image.get_pixel(x, y).0[idx]])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_extract_channel() {
        let img = RgbImage::from_pixel(2, 1, Rgb([10, 20, 30]));
        assert_eq!(extract_channel(&img, Channel::Red).as_raw(), &vec![10, 10]);
        assert_eq!(extract_channel(&img, Channel::Green).as_raw(), &vec![20, 20]);
        assert_eq!(extract_channel(&img, Channel::Blue).as_raw(), &vec![30, 30]);
    }
}
