//! # 像素网格模块
//!
//! 编解码器操作的抽象图像：宽、高以及按行优先排列的 RGB 三元组。
//! 网格不知道任何文件格式，图像的读写由命令行层负责。

use crate::constants::CHANNELS_PER_PIXEL;
use crate::error::StegoError;

/// 一个像素的 (R, G, B) 通道值。
pub type Rgb = [u8; 3];

/// 行优先的 RGB 像素网格。
///
/// 不变量：`pixels.len() == width * height`，且宽高都为正数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// 由尺寸和像素序列构造网格。
    ///
    /// # Errors
    ///
    /// 宽或高为 0，或像素数量不等于 `width * height` 时返回 [`StegoError::MalformedGrid`]。
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, StegoError> {
        let expected = (width as u64) * (height as u64);
        if width == 0 || height == 0 || pixels.len() as u64 != expected {
            return Err(StegoError::MalformedGrid {
                width,
                height,
                pixels: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// 构造一个所有像素都相同的网格。
    ///
    /// # Errors
    ///
    /// 宽或高为 0 时返回 [`StegoError::MalformedGrid`]。
    pub fn filled(width: u32, height: u32, pixel: Rgb) -> Result<Self, StegoError> {
        let count = (width as usize).saturating_mul(height as usize);
        Self::new(width, height, vec![pixel; count])
    }

    /// 由扁平的 `RGBRGB...` 字节序列构造网格，与 `image::RgbImage` 的原始缓冲区布局一致。
    ///
    /// # Errors
    ///
    /// 字节数不是 3 的倍数或与尺寸不符时返回 [`StegoError::MalformedGrid`]。
    pub fn from_raw(width: u32, height: u32, raw: &[u8]) -> Result<Self, StegoError> {
        let chunks = raw.chunks_exact(CHANNELS_PER_PIXEL);
        if !chunks.remainder().is_empty() {
            return Err(StegoError::MalformedGrid {
                width,
                height,
                pixels: raw.len() / CHANNELS_PER_PIXEL,
            });
        }

        let pixels = chunks.map(|c| [c[0], c[1], c[2]]).collect();
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// 可隐藏的总比特数：每个像素 3 bits。
    pub fn capacity(&self) -> u64 {
        self.pixels.len() as u64 * CHANNELS_PER_PIXEL as u64
    }

    /// 转换回扁平的 `RGBRGB...` 字节序列。
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels.into_iter().flatten().collect()
    }

    /// 以相同尺寸包装新的像素序列，调用方保证长度不变。
    pub(crate) fn with_pixels(&self, pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}
