//! Pixel grid representation shared by every transform.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, EngineResult};

/// Channel layout of a pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorLayout {
    /// Single luminance channel.
    Gray,
    /// Luminance plus alpha.
    GrayAlpha,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl ColorLayout {
    /// Number of interleaved samples per pixel.
    pub const fn channels(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::GrayAlpha => 2,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Whether the last channel is alpha.
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::GrayAlpha | Self::Rgba)
    }

    /// Number of leading channels that carry color rather than alpha.
    pub const fn color_channels(self) -> usize {
        if self.has_alpha() {
            self.channels() - 1
        } else {
            self.channels()
        }
    }
}

impl fmt::Display for ColorLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gray => write!(f, "gray"),
            Self::GrayAlpha => write!(f, "gray+alpha"),
            Self::Rgb => write!(f, "RGB"),
            Self::Rgba => write!(f, "RGBA"),
        }
    }
}

impl TryFrom<usize> for ColorLayout {
    type Error = EngineError;

    fn try_from(channels: usize) -> Result<Self, Self::Error> {
        match channels {
            1 => Ok(Self::Gray),
            2 => Ok(Self::GrayAlpha),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            n => Err(EngineError::UnsupportedChannels(n)),
        }
    }
}

/// An 8-bit raster with one to four interleaved channels.
///
/// Samples are stored row-major in one contiguous buffer of
/// `width * height * channels` bytes. Transforms never mutate a grid; they
/// return a freshly allocated one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    layout: ColorLayout,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Wrap an interleaved sample buffer, validating its length.
    pub fn new(width: u32, height: u32, layout: ColorLayout, data: Vec<u8>) -> EngineResult<Self> {
        let expected = sample_count(width, height, layout);
        if data.len() != expected {
            return Err(EngineError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Wrap a single-channel buffer.
    pub fn gray(width: u32, height: u32, data: Vec<u8>) -> EngineResult<Self> {
        Self::new(width, height, ColorLayout::Gray, data)
    }

    /// A grid with every sample set to `value`.
    pub fn filled(width: u32, height: u32, layout: ColorLayout, value: u8) -> Self {
        Self {
            width,
            height,
            layout,
            data: vec![value; sample_count(width, height, layout)],
        }
    }

    /// Build a grayscale grid by evaluating `f(x, y)` for every pixel.
    pub fn from_gray_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut data = Vec::with_capacity(sample_count(width, height, ColorLayout::Gray));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            layout: ColorLayout::Gray,
            data,
        }
    }

    /// Crate-internal constructor for buffers whose length is known to be right.
    pub(crate) fn from_parts(width: u32, height: u32, layout: ColorLayout, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), sample_count(width, height, layout));
        Self {
            width,
            height,
            layout,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> ColorLayout {
        self.layout
    }

    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Number of pixels (`width * height`).
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The raw interleaved sample buffer.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// All channels of the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.channels();
        let start = (y as usize * self.width as usize + x as usize) * c;
        &self.data[start..start + c]
    }

    /// A single sample. Panics if out of bounds.
    pub fn sample(&self, x: u32, y: u32, channel: usize) -> u8 {
        self.pixel(x, y)[channel]
    }

    /// One row of interleaved samples.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * self.channels();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Reject zero-area grids.
    pub(crate) fn ensure_non_empty(&self) -> EngineResult<()> {
        if self.is_empty() {
            return Err(EngineError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Remap every sample of a grayscale grid through a 256-entry table.
    pub(crate) fn map_gray(&self, lut: &[u8; 256]) -> Self {
        debug_assert_eq!(self.layout, ColorLayout::Gray);
        let data = self.data.iter().map(|&v| lut[v as usize]).collect();
        Self::from_parts(self.width, self.height, ColorLayout::Gray, data)
    }
}

fn sample_count(width: u32, height: u32, layout: ColorLayout) -> usize {
    width as usize * height as usize * layout.channels()
}
