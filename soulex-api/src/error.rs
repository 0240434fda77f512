//! API 错误类型
//!
//! 词法分析本身对任意输入全域可用，不产生错误；
//! 错误只出现在边界上（携带状态的反序列化、上层 IO）。

use thiserror::Error;

/// Soulex 错误类型
#[derive(Error, Debug)]
pub enum SoulexError {
    /// 携带状态反序列化失败
    #[error("invalid carried lexer state: {0}")]
    State(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let bad = serde_json::from_str::<soulex_core::StateStack>("not json").unwrap_err();
        let err = SoulexError::from(bad);
        assert!(err.to_string().starts_with("invalid carried lexer state"));
    }
}
