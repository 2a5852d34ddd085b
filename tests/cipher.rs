use lsb_caesar::cipher::{decrypt, encrypt};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// 验证默认位移量下的已知加密/解密结果
#[test]
fn test_known_shift_seven() {
    assert_eq!(encrypt("Hello, World!", 7), "Olssv, Dvysk!");
    assert_eq!(decrypt("Olssv, Dvysk!", 7), "Hello, World!");
}

/// 验证字母表末尾的回绕
#[test]
fn test_wraps_around_alphabet() {
    assert_eq!(encrypt("xyz XYZ", 3), "abc ABC");
    assert_eq!(decrypt("abc ABC", 3), "xyz XYZ");
}

/// 验证负数和超过 26 的位移量都按模 26 处理
#[test]
fn test_shift_normalization() {
    assert_eq!(encrypt("abc", -1), "zab");
    assert_eq!(encrypt("abc", 27), encrypt("abc", 1));
    assert_eq!(encrypt("abc", 26), "abc");
    assert_eq!(encrypt("Hello", i32::MIN), encrypt("Hello", i32::MIN.rem_euclid(26)));
}

/// 验证非字母字符 (数字、标点、空白、非 ASCII) 原样通过
#[test]
fn test_non_letters_are_fixed_points() {
    let text = "0123 !?.,\t\n 你好 Éé ß 🚀";
    for shift in [-30, -7, 0, 7, 13, 100] {
        assert_eq!(encrypt(text, shift), text);
        assert_eq!(decrypt(text, shift), text);
    }
}

/// 验证解密等价于使用相反位移量加密
#[test]
fn test_decrypt_is_negated_encrypt() {
    let text = "The quick brown fox jumps over the lazy dog.";
    for shift in [-100, -26, -1, 0, 1, 7, 25, 26, 1000, i32::MAX] {
        assert_eq!(decrypt(text, shift), encrypt(text, -shift));
    }
}

/// 验证任意文本与任意位移量下的加解密互逆
#[test]
fn test_round_trip_random_text() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let text: String = (0..rng.random_range(0..64))
            .map(|_| rng.random::<char>())
            .collect();
        let shift: i32 = rng.random();
        assert_eq!(decrypt(&encrypt(&text, shift), shift), text);
    }
}
