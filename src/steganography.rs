//! # LSB 编解码核心
//!
//! 把带长度前缀的比特流写入像素通道的最低有效位，以及它的精确逆操作。
//!
//! 比特流格式：32 bits 大端序长度头 (负载的比特数)，紧跟负载各字节的 MSB-first 展开。
//! 写入顺序为像素顺序，每个像素依次使用 R、G、B 的最低位。

use crate::bits::{self, Bits};
use crate::constants::{LENGTH_HEADER_BITS, MIN_DIMENSION};
use crate::error::StegoError;
use crate::grid::{PixelGrid, Rgb};

pub type Result<T> = std::result::Result<T, StegoError>;

/// 隐藏 `payload_len` 字节负载所需的总比特数 (含长度头)。
pub fn required_bits(payload_len: usize) -> u64 {
    LENGTH_HEADER_BITS as u64 + 8 * payload_len as u64
}

/// 将负载隐藏到网格中，返回一个尺寸相同的新网格。
///
/// 比特流写完后，剩余通道的最低位保持原样，不做随机化。
///
/// # Errors
///
/// * 宽或高小于 [`MIN_DIMENSION`] 时返回 [`StegoError::InvalidGrid`]。
/// * 比特流长度超过网格容量时返回 [`StegoError::CapacityExceeded`]。
/// * 负载比特数无法用 32 位长度头表示时返回 [`StegoError::LengthOverflow`]。
pub fn embed(grid: &PixelGrid, payload: &[u8]) -> Result<PixelGrid> {
    if grid.width() < MIN_DIMENSION || grid.height() < MIN_DIMENSION {
        return Err(StegoError::InvalidGrid {
            width: grid.width(),
            height: grid.height(),
            min: MIN_DIMENSION,
        });
    }

    let required = required_bits(payload.len());
    let available = grid.capacity();
    if required > available {
        return Err(StegoError::CapacityExceeded {
            required,
            available,
        });
    }

    let payload_bits = 8 * payload.len() as u64;
    let declared =
        u32::try_from(payload_bits).map_err(|_| StegoError::LengthOverflow { bits: payload_bits })?;

    let mut stream = bits::header_bits(declared).chain(Bits::from(payload));

    let pixels = grid
        .pixels()
        .iter()
        .map(|pixel| {
            let mut out: Rgb = *pixel;
            for channel in out.iter_mut() {
                match stream.next() {
                    Some(bit) => *channel = (*channel & 0xFE) | bit,
                    None => break,
                }
            }
            out
        })
        .collect();

    Ok(grid.with_pixels(pixels))
}

/// 从网格中取出隐藏的负载。
///
/// 不检查最小尺寸，任意网格都可以尝试提取。长度头不是 8 的倍数时，
/// 末尾不足一个字节的比特会被丢弃。
///
/// # Errors
///
/// * 网格不足 32 个比特时返回 [`StegoError::TruncatedHeader`]。
/// * 长度头声明的比特数超过剩余比特时返回 [`StegoError::TruncatedPayload`]。
pub fn extract(grid: &PixelGrid) -> Result<Vec<u8>> {
    let lsbs: Vec<u8> = grid
        .pixels()
        .iter()
        .flat_map(|pixel| pixel.iter().map(|channel| channel & 1))
        .collect();

    let declared = bits::read_header(&lsbs).ok_or(StegoError::TruncatedHeader {
        available: lsbs.len() as u64,
    })?;

    let body = &lsbs[LENGTH_HEADER_BITS..];
    let declared = declared as usize;
    if declared > body.len() {
        return Err(StegoError::TruncatedPayload {
            declared: declared as u64,
            available: body.len() as u64,
        });
    }

    Ok(bits::pack_bytes(&body[..declared]))
}
