/// 载体图像的最小边长 (像素)。
/// 128×128 的下限保证了至少 49,152 bits 的基础容量。
pub const MIN_DIMENSION: u32 = 128;

/// 长度头占用的比特数。
/// 长度头是一个大端序的 `u32`，记录的是负载的比特数而不是字节数。
pub const LENGTH_HEADER_BITS: usize = 32;

/// 每个像素可用于隐写的通道数 (R, G, B 各 1 bit)。
pub const CHANNELS_PER_PIXEL: usize = 3;

/// 凯撒密码的默认位移量。
pub const DEFAULT_SHIFT: i32 = 7;

/// 仅隐写时的默认输出文件名。
pub const DEFAULT_STEGO_NAME: &str = "stego.bmp";

/// 先加密再隐写时的默认输出文件名。
pub const DEFAULT_COMBINED_NAME: &str = "combined_stego.bmp";
