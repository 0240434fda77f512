//! 测试辅助工具
//!
//! 提供 token 流收集与筛选的辅助函数

use soulex_core::{Lexer, LexerConfig, StateStack, Token, TokenKind};

/// 以默认配置收集整个 token 流（含空白与 EndOfInput）
pub fn collect_tokens(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

/// 以指定配置收集整个 token 流
pub fn collect_with_config(source: &str, config: LexerConfig) -> Vec<Token<'_>> {
    Lexer::with_config(source, config).collect()
}

/// 扫描到末尾并返回行尾状态栈
pub fn final_state(source: &str) -> StateStack {
    let mut lexer = Lexer::new(source);
    while lexer.next_token().kind != TokenKind::EndOfInput {}
    lexer.into_state()
}

/// 过滤出对消费者有意义的 (kind, text) 序列
pub fn significant<'src>(tokens: &[Token<'src>]) -> Vec<(TokenKind, &'src str)> {
    tokens
        .iter()
        .filter(|t| t.kind.is_significant())
        .map(|t| (t.kind, t.text))
        .collect()
}

/// 快捷方式：source 的有意义 (kind, text) 序列
pub fn scan(source: &str) -> Vec<(TokenKind, &str)> {
    let tokens = collect_tokens(source);
    tokens
        .iter()
        .filter(|t| t.kind.is_significant())
        .map(|t| (t.kind, t.text))
        .collect()
}
