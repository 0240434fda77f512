//! API 输出类型
//!
//! 核心 token 借用源缓冲区；这里提供拥有所有权、可序列化的
//! 记录形式，便于跨行保存与 JSON 输出。

use serde::Serialize;
use soulex_core::{StateStack, Token, TokenKind};

/// 拥有所有权的 token 记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    pub kind: TokenKind,
    pub text: String,
    /// 起始字节偏移（0-based）
    pub start: usize,
    /// 结束字节偏移（0-based，不含）
    pub end: usize,
    /// 起始行号（1-based）
    pub line: usize,
    /// 起始列号（1-based）
    pub column: usize,
}

impl From<&Token<'_>> for TokenRecord {
    fn from(token: &Token<'_>) -> Self {
        Self {
            kind: token.kind,
            text: token.text.to_string(),
            start: token.span.start.byte_offset,
            end: token.span.end.byte_offset,
            line: token.span.start.line,
            column: token.span.start.column,
        }
    }
}

/// 单行扫描结果：该行 token 加上行尾携带状态
#[derive(Debug, Clone, Serialize)]
pub struct LineScan {
    pub tokens: Vec<TokenRecord>,
    /// 行尾状态栈，原样恢复后即可续扫下一行
    pub state: StateStack,
}
