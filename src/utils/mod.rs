pub mod id;
pub mod ip;
pub mod url_validator;

pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};

/// 生成短码使用的字符集
pub const SHORT_CODE_ALPHABET: &[u8] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 短码最大长度
pub const MAX_SHORT_CODE_LEN: usize = 128;

/// 从 `alphabet` 中随机生成长度为 `length` 的字符串
pub fn generate_random_code(alphabet: &[u8], length: usize) -> String {
    use std::iter;

    iter::repeat_with(|| alphabet[rand::random_range(0..alphabet.len())] as char)
        .take(length)
        .collect()
}

/// 校验去掉首尾 `/` 之后的短码
///
/// 允许 ASCII 字母数字以及 `-`、`_`、`.` 和中间的 `/`，
/// 长度不超过 [`MAX_SHORT_CODE_LEN`]
pub fn is_valid_short_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_SHORT_CODE_LEN
        && !code.starts_with('/')
        && !code.ends_with('/')
        && code
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_code_uses_alphabet() {
        let code = generate_random_code(SHORT_CODE_ALPHABET, 32);
        assert_eq!(code.len(), 32);
        assert!(code.bytes().all(|b| SHORT_CODE_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_is_valid_short_code() {
        assert!(is_valid_short_code("go"));
        assert!(is_valid_short_code("promo/spring-2024_v1.2"));
        assert!(!is_valid_short_code(""));
        assert!(!is_valid_short_code("/go"));
        assert!(!is_valid_short_code("go/"));
        assert!(!is_valid_short_code("a b"));
        assert!(!is_valid_short_code("'; DROP TABLE--"));
        assert!(is_valid_short_code(&"a".repeat(MAX_SHORT_CODE_LEN)));
        assert!(!is_valid_short_code(&"a".repeat(MAX_SHORT_CODE_LEN + 1)));
    }
}
