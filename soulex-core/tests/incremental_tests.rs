//! 增量按行扫描测试
//!
//! 验证行尾携带状态的正确性：跨行注释/字符串/端点块，
//! 以及与整块扫描的一致性

mod common;

use common::collect_tokens;
use soulex_core::{Lexer, LexerConfig, LexerState, StateStack, TokenKind};

/// 按行扫描：逐行构造 Lexer 并传递状态栈
fn scan_lines(source: &str) -> Vec<(TokenKind, String)> {
    let mut state = StateStack::new();
    let mut out = Vec::new();
    for line in source.split_inclusive('\n') {
        let mut lexer = Lexer::with_state(line, state, LexerConfig::default());
        for token in lexer.by_ref() {
            if token.kind.is_significant() {
                out.push((token.kind, token.text.to_string()));
            }
        }
        state = lexer.into_state();
    }
    out
}

/// 整块扫描的有意义 (kind, text) 序列
fn scan_whole(source: &str) -> Vec<(TokenKind, String)> {
    collect_tokens(source)
        .iter()
        .filter(|t| t.kind.is_significant())
        .map(|t| (t.kind, t.text.to_string()))
        .collect()
}

/// 合并相邻的同类内容段
///
/// 注释正文与字符串正文的最长段扫描在按行模式下被行终止符
/// 切开，整块模式下则可跨行；归一化后两种模式可直接比较。
fn normalize(tokens: Vec<(TokenKind, String)>) -> Vec<(TokenKind, String)> {
    let mut out: Vec<(TokenKind, String)> = Vec::new();
    for (kind, text) in tokens {
        let mergeable = matches!(kind, TokenKind::Comment | TokenKind::StringContent);
        match out.last_mut() {
            Some((last, acc)) if mergeable && *last == kind => acc.push_str(&text),
            _ => out.push((kind, text)),
        }
    }
    out
}

#[test]
fn test_line_scan_matches_whole_scan() {
    let source = "\
processor Gain {
    input stream float32 in;
    output stream float32 out;
    /* gain is
       fixed */
    let level = \"x\\ty\";
    connection { in -> out; }
}
#load helpers.soul
";
    assert_eq!(normalize(scan_lines(source)), normalize(scan_whole(source)));
}

#[test]
fn test_comment_carried_across_lines() {
    let mut state = StateStack::new();

    let mut first = Lexer::with_state("/* begins here\n", state, LexerConfig::default());
    while first.next_token().kind != TokenKind::EndOfInput {}
    state = first.into_state();
    assert_eq!(state.top(), LexerState::Comment);

    let mut second = Lexer::with_state("ends here */ x;\n", state, LexerConfig::default());
    let kinds: Vec<_> = second.by_ref().map(|t| t.kind).collect();
    assert!(kinds.contains(&TokenKind::Identifier));
    assert_eq!(second.into_state().top(), LexerState::Root);
}

#[test]
fn test_string_carried_across_lines() {
    let mut state = StateStack::new();

    let mut first = Lexer::with_state("\"no closing quote", state, LexerConfig::default());
    while first.next_token().kind != TokenKind::EndOfInput {}
    state = first.into_state();
    assert_eq!(state.top(), LexerState::String);

    // 字符串状态在下一行继续，直到闭合引号
    let tokens: Vec<_> = Lexer::with_state("tail\" done", state, LexerConfig::default())
        .map(|t| (t.kind, t.text))
        .collect();
    assert_eq!(tokens[0], (TokenKind::StringContent, "tail"));
    assert_eq!(tokens[1], (TokenKind::StringQuote, "\""));
}

#[test]
fn test_endpoint_block_carried_across_lines() {
    let mut state = StateStack::new();

    let mut first = Lexer::with_state("input\n", state, LexerConfig::default());
    while first.next_token().kind != TokenKind::EndOfInput {}
    state = first.into_state();
    assert_eq!(state.top(), LexerState::EndpointDefinition);

    // 下一行的 stream 子关键字只在端点块内有效
    let tokens: Vec<_> = Lexer::with_state("stream int x;", state, LexerConfig::default())
        .filter(|t| t.kind.is_significant())
        .map(|t| t.kind)
        .collect();
    assert_eq!(tokens[0], TokenKind::Keyword("stream"));
}

#[test]
fn test_carried_state_survives_json_round_trip() {
    let source = "graph G {\n/* doc\n";
    let mut state = StateStack::new();
    for line in source.split_inclusive('\n') {
        let mut lexer = Lexer::with_state(line, state, LexerConfig::default());
        while lexer.next_token().kind != TokenKind::EndOfInput {}
        state = lexer.into_state();
    }
    assert_eq!(state.top(), LexerState::Comment);

    let json = serde_json::to_string(&state).unwrap();
    let restored: StateStack = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);

    // 恢复后的栈续扫行为与原栈一致
    let direct: Vec<_> = Lexer::with_state("*/ done", state, LexerConfig::default())
        .map(|t| t.kind)
        .collect();
    let resumed: Vec<_> = Lexer::with_state("*/ done", restored, LexerConfig::default())
        .map(|t| t.kind)
        .collect();
    assert_eq!(direct, resumed);
}

#[test]
fn test_restored_stack_on_mismatched_input_stays_total() {
    // 人为构造的非常规栈也不会让扫描停滞
    let mut stack = StateStack::new();
    stack.push(LexerState::WrapClampKeyword);
    let tokens: Vec<_> = Lexer::with_state("xyz", stack, LexerConfig::default())
        .map(|t| t.kind)
        .collect();
    assert_eq!(*tokens.last().unwrap(), TokenKind::EndOfInput);
}
