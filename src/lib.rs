//! # lsb_caesar 库
//!
//! 本库包含凯撒密码与 RGB 最低有效位隐写的核心逻辑，以及命令行的处理层。
//! `cipher`、`grid`、`bits`、`steganography` 是纯函数核心，不做任何 I/O；
//! `cli` 与 `handler` 负责参数解析、图像编解码和用户输出。

// 声明库包含的所有模块。

pub mod bits;
pub mod cipher;
pub mod cli;
pub mod constants;
pub mod error;
pub mod grid;
pub mod handler;
pub mod steganography;

pub use error::StegoError;
pub use grid::{PixelGrid, Rgb};
