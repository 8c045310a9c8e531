//! Decoded images, their opacity masks, and the few transforms the game
//! needs (scale, vertical flip, rotation).

use std::rc::Rc;

use anyhow::{ensure, Result};
use flappy_common::Color;

/// Row-major RGBA8 image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Bitmap {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        ensure!(
            rgba.len() == width as usize * height as usize * 4,
            "bitmap of {}x{} needs {} bytes, got {}",
            width,
            height,
            width as usize * height as usize * 4,
            rgba.len()
        );
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let rgba = [color.r, color.g, color.b, color.a].repeat(width as usize * height as usize);
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Build a bitmap pixel by pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        let mut bitmap = Self::filled(width, height, Color::TRANSPARENT);
        for y in 0..height {
            for x in 0..width {
                bitmap.set_pixel(x, y, f(x, y));
            }
        }
        bitmap
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let i = self.index(x, y);
        Color::new_rgba(
            self.rgba[i],
            self.rgba[i + 1],
            self.rgba[i + 2],
            self.rgba[i + 3],
        )
    }

    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.rgba[self.index(x, y) + 3]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.rgba[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
    }

    /// Nearest-neighbour resize.
    pub fn scaled(&self, width: u32, height: u32) -> Bitmap {
        if width == self.width && height == self.height {
            return self.clone();
        }
        if self.width == 0 || self.height == 0 {
            return Bitmap::filled(width, height, Color::TRANSPARENT);
        }
        Bitmap::from_fn(width, height, |x, y| {
            let sx = (x as u64 * self.width as u64 / width as u64) as u32;
            let sy = (y as u64 * self.height as u64 / height as u64) as u32;
            self.pixel(sx, sy)
        })
    }

    pub fn flipped_vertical(&self) -> Bitmap {
        let row = self.width as usize * 4;
        let mut rgba = Vec::with_capacity(self.rgba.len());
        for chunk in self.rgba.chunks_exact(row.max(1)).rev() {
            rgba.extend_from_slice(chunk);
        }
        Bitmap {
            width: self.width,
            height: self.height,
            rgba,
        }
    }

    /// Rotate counter-clockwise by `degrees` around the centre.
    ///
    /// The canvas grows to the rotated bounding box and uncovered corners
    /// are transparent. Sampling is nearest-neighbour, so a rotation by a
    /// multiple of 360 degrees returns an identical bitmap.
    pub fn rotated(&self, degrees: f64) -> Bitmap {
        if degrees.rem_euclid(360.0) == 0.0 {
            return self.clone();
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (w, h) = (self.width as f64, self.height as f64);
        let out_w = (w * cos.abs() + h * sin.abs() - 1e-9).ceil().max(0.0) as u32;
        let out_h = (w * sin.abs() + h * cos.abs() - 1e-9).ceil().max(0.0) as u32;
        let (half_out_w, half_out_h) = (out_w as f64 / 2.0, out_h as f64 / 2.0);

        Bitmap::from_fn(out_w, out_h, |x, y| {
            let u = x as f64 + 0.5 - half_out_w;
            let v = y as f64 + 0.5 - half_out_h;
            let sx = u * cos - v * sin + w / 2.0;
            let sy = u * sin + v * cos + h / 2.0;
            if sx >= 0.0 && sy >= 0.0 && sx < w && sy < h {
                self.pixel(sx as u32, sy as u32)
            } else {
                Color::TRANSPARENT
            }
        })
    }
}

/// Per-pixel opacity derived from a bitmap's alpha channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// A pixel is opaque iff its alpha is non-zero.
    pub fn from_bitmap(bitmap: &Bitmap) -> Self {
        let bits = bitmap.rgba().chunks_exact(4).map(|px| px[3] > 0).collect();
        Self {
            width: bitmap.width(),
            height: bitmap.height(),
            bits,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[(y * self.width + x) as usize]
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }
}

/// A bitmap paired with its collision mask. Cloning shares both.
#[derive(Clone, Debug)]
pub struct Sprite {
    image: Rc<Bitmap>,
    mask: Rc<Mask>,
}

impl Sprite {
    pub fn new(image: Bitmap) -> Self {
        let mask = Mask::from_bitmap(&image);
        Self {
            image: Rc::new(image),
            mask: Rc::new(mask),
        }
    }

    pub fn image(&self) -> &Rc<Bitmap> {
        &self.image
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn width(&self) -> i32 {
        self.image.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.image.height() as i32
    }
}
