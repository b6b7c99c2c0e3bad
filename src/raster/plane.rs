//! Borrowed single-channel pixel planes
//!
//! A plane is a row-major grid of 8-bit samples whose rows may be padded:
//! each row starts `stride` bytes after the previous one and only the first
//! `width` bytes of it are pixels.

use crate::error::PlaneError;
use image::GrayImage;

fn required_len(width: usize, height: usize, stride: usize) -> usize {
    if width == 0 || height == 0 {
        0
    } else {
        (height - 1) * stride + width
    }
}

fn validate(width: usize, height: usize, stride: usize, len: usize) -> Result<(), PlaneError> {
    if stride < width {
        return Err(PlaneError::StrideTooSmall { width, stride });
    }

    let required = required_len(width, height, stride);
    if len < required {
        return Err(PlaneError::BufferTooSmall {
            width,
            height,
            stride,
            required,
            actual: len,
        });
    }

    Ok(())
}

/// Read-only view of one channel
#[derive(Debug, Clone, Copy)]
pub struct Plane<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> Plane<'a> {
    /// # Errors
    ///
    /// Returns an error if `stride < width` or `data` is too short for the geometry
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, PlaneError> {
        validate(width, height, stride, data.len())?;
        Ok(Self { data, width, height, stride })
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Rows without their padding
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + use<'a> {
        let width = self.width;
        let data: &'a [u8] = self.data;
        let data = &data[..required_len(self.width, self.height, self.stride)];
        data.chunks(self.stride.max(1))
            .take(if width == 0 { 0 } else { self.height })
            .map(move |row| &row[..width])
    }

    /// All pixel samples in row-major order
    pub fn samples(&self) -> impl Iterator<Item = u8> + use<'a> {
        self.rows().flat_map(|row| row.iter().copied())
    }
}

impl<'a> From<&'a GrayImage> for Plane<'a> {
    fn from(image: &'a GrayImage) -> Self {
        let width = image.width() as usize;
        Self {
            data: image.as_raw(),
            width,
            height: image.height() as usize,
            stride: width,
        }
    }
}

/// Mutable view of one channel
#[derive(Debug)]
pub struct PlaneMut<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> PlaneMut<'a> {
    /// # Errors
    ///
    /// Returns an error if `stride < width` or `data` is too short for the geometry
    pub fn new(
        data: &'a mut [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, PlaneError> {
        validate(width, height, stride, data.len())?;
        Ok(Self { data, width, height, stride })
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn as_plane(&self) -> Plane<'_> {
        Plane {
            data: &*self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }

    /// Mutable rows without their padding
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> + '_ {
        let width = self.width;
        let len = required_len(self.width, self.height, self.stride);
        self.data[..len]
            .chunks_mut(self.stride.max(1))
            .take(if width == 0 { 0 } else { self.height })
            .map(move |row| &mut row[..width])
    }

    /// Rewrite every pixel through `f`, leaving padding bytes untouched
    pub fn map_in_place(&mut self, mut f: impl FnMut(u8) -> u8) {
        for row in self.rows_mut() {
            for px in row.iter_mut() {
                *px = f(*px);
            }
        }
    }
}

impl<'a> From<&'a mut GrayImage> for PlaneMut<'a> {
    fn from(image: &'a mut GrayImage) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        Self {
            data: &mut **image,
            width,
            height,
            stride: width,
        }
    }
}
