//! # 凯撒密码模块
//!
//! 无状态的逐字符替换：只轮换 ASCII 字母，其余字符 (数字、标点、空白、非 ASCII) 原样保留。

/// 英文字母表长度。
const ALPHABET_LEN: i32 = 26;

/// 使用给定位移量加密文本。
///
/// 位移量可以是任意整数 (包括负数)，内部按 26 取欧几里得余数。
///
/// # Examples
///
/// ```
/// use lsb_caesar::cipher::encrypt;
///
/// assert_eq!(encrypt("Hello, World!", 7), "Olssv, Dvysk!");
/// ```
pub fn encrypt(text: &str, shift: i32) -> String {
    rotate(text, shift.rem_euclid(ALPHABET_LEN) as u8)
}

/// 使用给定位移量解密文本，等价于 `encrypt(text, -shift)`。
///
/// 对任意 `text` 和 `shift`，`decrypt(&encrypt(text, shift), shift) == text`。
pub fn decrypt(text: &str, shift: i32) -> String {
    let forward = shift.rem_euclid(ALPHABET_LEN);
    rotate(text, ((ALPHABET_LEN - forward) % ALPHABET_LEN) as u8)
}

fn rotate(text: &str, shift: u8) -> String {
    text.chars()
        .map(|c| match c {
            'A'..='Z' => rotate_in(c, b'A', shift),
            'a'..='z' => rotate_in(c, b'a', shift),
            _ => c,
        })
        .collect()
}

// 调用方保证 `c` 位于 `base` 起始的 26 个字母之内，且 `shift < 26`。
fn rotate_in(c: char, base: u8, shift: u8) -> char {
    let position = c as u8 - base;
    char::from(base + (position + shift) % ALPHABET_LEN as u8)
}
