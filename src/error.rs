//! # 错误类型模块
//!
//! 隐写核心返回的所有错误。命令行层通过 `anyhow` 为它们附加上下文。

use thiserror::Error;

/// 编解码过程中可能出现的错误。
///
/// 任何错误都是终止性的：`embed` 要么返回完整的新网格，要么什么都不返回；
/// `extract` 要么返回完整的负载，要么什么都不返回。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    #[error("Image must be at least {min}x{min} pixels, got {width}x{height}")]
    InvalidGrid { width: u32, height: u32, min: u32 },

    #[error("Message too large! Required: {required} bits, Available: {available} bits")]
    CapacityExceeded { required: u64, available: u64 },

    #[error("Invalid steganographic image: only {available} bits available, the length header needs 32")]
    TruncatedHeader { available: u64 },

    #[error("Incomplete data in image: header declares {declared} bits, only {available} bits follow")]
    TruncatedPayload { declared: u64, available: u64 },

    #[error("Malformed pixel grid: {width}x{height} cannot hold {pixels} pixels")]
    MalformedGrid {
        width: u32,
        height: u32,
        pixels: usize,
    },

    #[error("Payload of {bits} bits does not fit in the 32-bit length header")]
    LengthOverflow { bits: u64 },
}
