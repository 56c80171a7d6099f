use std::path::Path;

use crate::{
    error::{Error, Result},
    Color,
};

/// Exponent applied to linear color before it is scaled to 8 bits.
pub const TONE_EXPONENT: f64 = 0.8;

pub trait Rgba32 {
    fn to_rgba32(&self) -> (u8, u8, u8, u8);
}

#[cfg(feature = "viewer")]
impl Rgba32 for sdl2::pixels::Color {
    fn to_rgba32(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }
}

impl Rgba32 for Color {
    fn to_rgba32(&self) -> (u8, u8, u8, u8) {
        (
            quantize(self.x),
            quantize(self.y),
            quantize(self.z),
            u8::MAX,
        )
    }
}

fn quantize(channel: f64) -> u8 {
    (channel.max(0.0).powf(TONE_EXPONENT) * 255.0)
        .clamp(0.0, 255.0)
        .round() as u8
}

/// Row-major RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixel_data: Box<[u8]>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixel_data: vec![0; width * height * 4].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn set_pixel<T: Rgba32>(&mut self, x: usize, y: usize, color: T) {
        let start = (x + y * self.width) * 4;
        let stop = start + 4;
        let (r, g, b, a) = color.to_rgba32();
        self.pixel_data[start..stop].copy_from_slice(&[r, g, b, a]);
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let start = (x + y * self.width) * 4;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixel_data[start..start + 4]);
        rgba
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let invalid = || Error::InvalidResolution {
            width: self.width,
            height: self.height,
        };
        image::save_buffer(
            path,
            &self.pixel_data,
            u32::try_from(self.width).map_err(|_| invalid())?,
            u32::try_from(self.height).map_err(|_| invalid())?,
            image::ColorType::Rgba8,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_applies_tone_curve() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.5), (0.5f64.powf(0.8) * 255.0).round() as u8);
    }

    #[test]
    fn quantize_clamps_out_of_range() {
        assert_eq!(quantize(4.0), 255);
        assert_eq!(quantize(-1.0), 0);
    }

    #[test]
    fn alpha_is_opaque() {
        let mut frame = FrameBuffer::new(2, 1);
        frame.set_pixel(1, 0, Color::new(0.0, 1.0, 0.0));
        assert_eq!(frame.pixel(1, 0), [0, 255, 0, 255]);
        assert_eq!(frame.pixel(0, 0), [0, 0, 0, 0]);
    }
}
