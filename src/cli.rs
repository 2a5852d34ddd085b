//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::DEFAULT_SHIFT;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// 凯撒密码与 LSB (最低有效位) 隐写工具，可单独使用，也可组合使用。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "凯撒密码与 LSB (最低有效位) 隐写工具。文本可以单独加密/解密，单独隐藏到无损格式图像 (如 PNG, BMP) 中，或先加密再隐藏。"
)]
pub struct Cli {
    /// 提高日志详细程度 (-v 为 info，-vv 为 debug)。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 使用凯撒密码加密文本。
    Encrypt(CipherArgs),

    /// 使用凯撒密码解密文本。
    Decrypt(CipherArgs),

    /// 在图像中隐藏文本，可选先用凯撒密码加密。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复文本，可选再用凯撒密码解密。
    Recover(RecoverArgs),

    /// 查看图像的隐写容量。
    Capacity(CapacityArgs),
}

/// 文本来源：直接给出的字符串，或文本文件。二者必选其一。
#[derive(Args, Debug, Clone)]
#[group(id = "source", required = true, multiple = false)]
pub struct MessageSource {
    /// 直接在命令行给出的文本。
    #[arg(short, long)]
    pub message: Option<String>,

    /// 包含文本内容的文件路径。
    #[arg(short, long)]
    pub text: Option<PathBuf>,
}

/// 'encrypt' 与 'decrypt' 命令所需的参数。
#[derive(Args, Debug)]
pub struct CipherArgs {
    #[command(flatten)]
    pub source: MessageSource,

    /// 凯撒密码的位移量，可以为负数。
    #[arg(short, long, default_value_t = DEFAULT_SHIFT, allow_negative_numbers = true)]
    pub shift: i32,

    /// 结果的输出文件路径。不提供时打印到标准输出。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 如果输出文件已存在，则强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'hide' 命令所需的参数。
#[derive(Args, Debug)]
pub struct HideArgs {
    /// 用于隐写的载体图像路径 (至少 128x128)。
    #[arg(short, long)]
    pub image: PathBuf,

    #[command(flatten)]
    pub source: MessageSource,

    /// 隐写完成后保存结果图像的路径。
    /// 不提供时在载体图像所在目录生成 `stego.bmp` (使用 --caesar 时为 `combined_stego.bmp`)。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 隐藏前先用凯撒密码加密文本。
    #[arg(short, long)]
    pub caesar: bool,

    /// 凯撒密码的位移量，仅在 --caesar 时生效。
    #[arg(short, long, default_value_t = DEFAULT_SHIFT, allow_negative_numbers = true)]
    pub shift: i32,

    /// 如果输出文件已存在，则强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Args, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文本后保存内容的路径。不提供时打印到标准输出。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 恢复后再用凯撒密码解密文本。
    #[arg(short, long)]
    pub caesar: bool,

    /// 凯撒密码的位移量，仅在 --caesar 时生效。
    #[arg(short, long, default_value_t = DEFAULT_SHIFT, allow_negative_numbers = true)]
    pub shift: i32,

    /// 如果输出文件已存在，则强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// 要检查的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
