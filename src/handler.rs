//! # 命令处理逻辑模块
//!
//! 包含处理各个子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、图像编解码、调用核心算法以及向用户报告结果。
//! 核心模块 (`cipher`, `steganography`) 本身不做任何 I/O。

use crate::cipher;
use crate::cli::{CapacityArgs, CipherArgs, HideArgs, MessageSource, RecoverArgs};
use crate::constants::{
    DEFAULT_COMBINED_NAME, DEFAULT_STEGO_NAME, MIN_DIMENSION,
};
use crate::grid::PixelGrid;
use crate::steganography::{self, required_bits};
use anyhow::{Context, Result};
use colored::Colorize;
use image::ImageFormat;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Encrypt' 命令的执行逻辑。
///
/// # Errors
///
/// 文本为空、无法读取文本文件或无法写入输出文件时返回错误。
pub fn handle_encrypt(args: CipherArgs) -> Result<()> {
    let text = read_text(&args.source)?;
    debug!("Encrypting {} characters with shift {}", text.chars().count(), args.shift);
    let encrypted = cipher::encrypt(&text, args.shift);
    emit_text(&encrypted, args.output.as_deref(), args.force, "Encrypted text")
}

/// 处理 'Decrypt' 命令的执行逻辑。
///
/// # Errors
///
/// 文本为空、无法读取文本文件或无法写入输出文件时返回错误。
pub fn handle_decrypt(args: CipherArgs) -> Result<()> {
    let text = read_text(&args.source)?;
    debug!("Decrypting {} characters with shift {}", text.chars().count(), args.shift);
    let decrypted = cipher::decrypt(&text, args.shift);
    emit_text(&decrypted, args.output.as_deref(), args.force, "Decrypted text")
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取载体图像和文本、按需先加密、调用隐写核心函数嵌入文本，
/// 最后将结果以无损格式写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与加密选项的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 文本为空，或无法读取输入的图像或文本文件。
/// * 目标文件已存在且未指定 `--force`，或目标格式为有损格式。
/// * 图像小于 128x128，或没有足够的空间来隐藏文本。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_dest(&args.image, args.caesar));

    anyhow::ensure!(
        !is_lossy(&dest),
        "Output format must be lossless, lossy compression destroys the hidden bits: {}",
        dest.to_string_lossy().red().bold()
    );
    ensure_writable(&dest, args.force)?;

    let payload = if args.caesar {
        let text = read_text(&args.source)?;
        let encrypted = cipher::encrypt(&text, args.shift);
        info!("Encrypted message with Caesar shift {}", args.shift);
        encrypted.into_bytes()
    } else {
        read_bytes(&args.source)?
    };

    let carrier = load_grid(&args.image)?;
    debug!(
        "Carrier {}x{}, capacity {} bits",
        carrier.width(),
        carrier.height(),
        carrier.capacity()
    );

    let stego = steganography::embed(&carrier, &payload).with_context(|| {
        format!(
            "Unable to hide the text in {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    save_grid(stego, &dest)?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    println!(
        "Used {} bits out of {} available",
        required_bits(payload.len()).to_string().green().bold(),
        carrier.capacity().to_string().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用提取核心函数、按需解密，
/// 最后将恢复的内容写入目标文本文件或打印到标准输出。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 图像中没有完整的隐写数据。
/// * 目标文件已存在且未指定 `--force`，或无法写入。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    if let Some(path) = &args.text {
        ensure_writable(path, args.force)?;
    }

    let grid = load_grid(&args.image)?;
    let payload = steganography::extract(&grid).with_context(|| {
        format!(
            "Failed to recover a message from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    info!("Extracted {} bytes", payload.len());

    let recovered = if args.caesar {
        let text = lossy_text(&payload);
        info!("Decrypting message with Caesar shift {}", args.shift);
        cipher::decrypt(&text, args.shift).into_bytes()
    } else {
        payload
    };

    match &args.text {
        Some(path) => {
            fs::write(path, &recovered).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The text has been successfully recovered and saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
        None => println!("Extracted text: {}", lossy_text(&recovered).green()),
    }

    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑：报告图像可隐藏的比特数和最大文本字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let grid = load_grid(&args.image)?;
    let bits = grid.capacity();
    let max_bytes = bits.saturating_sub(required_bits(0)) / 8;

    println!(
        "{}x{} pixels, {} bits available, up to {} bytes of text",
        grid.width(),
        grid.height(),
        bits.to_string().green().bold(),
        max_bytes.to_string().green().bold()
    );
    if grid.width() < MIN_DIMENSION || grid.height() < MIN_DIMENSION {
        println!(
            "{}",
            format!("The image is smaller than {MIN_DIMENSION}x{MIN_DIMENSION} and cannot be used as a carrier.")
                .red()
        );
    }

    Ok(())
}

/// 读取并展平为 RGB 的图像，丢弃 alpha 通道与调色板。
fn load_grid(path: &Path) -> Result<PixelGrid> {
    let image = image::open(path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let (width, height) = image.dimensions();
    PixelGrid::from_raw(width, height, image.as_raw())
        .with_context(|| format!("Image {} has no usable pixels", path.to_string_lossy()))
}

fn save_grid(grid: PixelGrid, path: &Path) -> Result<()> {
    let (width, height) = (grid.width(), grid.height());
    let image = image::RgbImage::from_raw(width, height, grid.into_raw())
        .context("Pixel buffer does not match the image dimensions")?;

    image.save(path).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

fn read_bytes(source: &MessageSource) -> Result<Vec<u8>> {
    let bytes = match (&source.message, &source.text) {
        (Some(message), _) => message.clone().into_bytes(),
        (None, Some(path)) => fs::read(path).with_context(|| {
            format!(
                "Unable to read text file: {}",
                path.to_string_lossy().red().bold()
            )
        })?,
        (None, None) => anyhow::bail!("Either --message or --text must be given"),
    };

    anyhow::ensure!(!bytes.is_empty(), "Text cannot be empty!");
    Ok(bytes)
}

fn read_text(source: &MessageSource) -> Result<String> {
    let bytes = read_bytes(source)?;
    String::from_utf8(bytes).context("The text is not valid UTF-8 and cannot be enciphered")
}

fn emit_text(text: &str, output: Option<&Path>, force: bool, label: &str) -> Result<()> {
    match output {
        Some(path) => {
            ensure_writable(path, force)?;
            fs::write(path, text).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "{label} has been saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
        None => println!("{label}: {}", text.green()),
    }
    Ok(())
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

// 以 `image` 的扩展名映射为准，`jpg`/`jpeg`/`jfif` 都会被编码为 JPEG。
fn is_lossy(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok_and(|format| format == ImageFormat::Jpeg)
}

fn lossy_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => {
            warn!("Recovered data is not valid UTF-8, invalid sequences were replaced");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// 'hide' 未给出 `--dest` 时使用的默认路径。
pub fn default_dest(image: &Path, caesar: bool) -> PathBuf {
    let name = if caesar {
        DEFAULT_COMBINED_NAME
    } else {
        DEFAULT_STEGO_NAME
    };
    image.with_file_name(name)
}
