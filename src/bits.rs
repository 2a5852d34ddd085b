//! # 比特打包模块
//!
//! 字节与比特之间的转换。所有比特都以 `0`/`1` 的 `u8` 表示，按最高位优先 (MSB-first) 排列。

use crate::constants::LENGTH_HEADER_BITS;

/// 按 MSB-first 顺序逐位遍历字节序列。
pub struct Bits<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> From<&'a [u8]> for Bits<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }
}

impl Iterator for Bits<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = *self.bytes.get(self.offset / 8)?;
        let bit = (byte >> (7 - self.offset % 8)) & 1;
        self.offset += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() * 8 - self.offset;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

/// 将 `value` 展开为 32 个大端序比特。
pub fn header_bits(value: u32) -> impl Iterator<Item = u8> {
    (0..LENGTH_HEADER_BITS).rev().map(move |i| ((value >> i) & 1) as u8)
}

/// 把前 32 个比特解释为大端序的 `u32`；不足 32 个时返回 `None`。
pub fn read_header(bits: &[u8]) -> Option<u32> {
    let header = bits.get(..LENGTH_HEADER_BITS)?;
    Some(header.iter().fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit & 1)))
}

/// 每 8 个比特 (MSB-first) 组成一个字节。
///
/// 末尾不足 8 位的残余比特会被直接丢弃而不是补齐。
pub fn pack_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_msb_first() {
        let bits: Vec<u8> = Bits::from([0x41u8].as_slice()).collect();
        assert_eq!(bits, vec![0, 1, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn header_is_big_endian() {
        let bits: Vec<u8> = header_bits(8).collect();
        assert_eq!(bits.len(), 32);
        assert!(bits[..28].iter().all(|&b| b == 0));
        assert_eq!(&bits[28..], &[1, 0, 0, 0]);
        assert_eq!(read_header(&bits), Some(8));
    }

    #[test]
    fn read_header_needs_32_bits() {
        assert_eq!(read_header(&[1; 31]), None);
        assert_eq!(read_header(&[1; 40]), Some(u32::MAX));
    }

    #[test]
    fn pack_drops_partial_chunk() {
        let bits = [0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1];
        assert_eq!(pack_bytes(&bits), vec![0x41]);
        assert!(pack_bytes(&bits[..7]).is_empty());
    }

    #[test]
    fn size_hint_tracks_consumption() {
        let mut bits = Bits::from(b"ab".as_slice());
        assert_eq!(bits.len(), 16);
        bits.next();
        assert_eq!(bits.len(), 15);
    }
}
