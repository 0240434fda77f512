//! 规则表与模式匹配器
//!
//! 每个词法状态对应一张有序规则表，自上而下逐条尝试，
//! 首条命中即胜出；规则顺序即语义，不可重排。
//! 规则内部的匹配取其模式能吞下的最长子串，但不做跨规则的
//! 最长匹配比较。
//!
//! 匹配器只报告命中长度，消费与状态变化由引擎统一执行；
//! Transition 结果不消费任何字符（rematch / 零宽弹出）。

use once_cell::sync::Lazy;
use soulex_config::LexerConfig;

use super::cursor::{is_horizontal_ws, is_space, Cursor};
use super::state::LexerState;
use super::tables::{
    is_identifier_continue, is_identifier_start, is_operator, is_symbol_char, lookup_bracket,
    lookup_endpoint_keyword, lookup_keyword, lookup_wrap_clamp_keyword,
};
use super::token::{BracketKind, TokenKind};

/// 在游标处报告模式命中的字节长度
pub(crate) type Matcher = fn(&Cursor) -> Option<usize>;

/// 将命中文本映射为规则结果
pub(crate) type Action = fn(&str, &LexerConfig) -> Outcome;

/// 规则命中后的状态栈变化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StateChange {
    None,
    Push(LexerState),
    Pop,
}

/// 规则结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// 消费命中文本并产出一个 token
    Emit(TokenKind, StateChange),
    /// 不消费任何字符，仅变更状态栈后在原位置重新分发
    Transition(StateChange),
}

/// 单条词法规则
#[derive(Clone, Copy)]
pub(crate) struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
    pub action: Action,
}

// ---------------------------------------------------------------------------
// 通用匹配辅助
// ---------------------------------------------------------------------------

/// `[A-Za-z_][A-Za-z0-9_]*` 的命中长度
fn word_len(text: &str) -> usize {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if is_identifier_start(c) => {}
        _ => return 0,
    }
    1 + chars.take_while(|&c| is_identifier_continue(c)).count()
}

/// `[0-9_]+` 数字串（含下划线分隔符）的结束下标
fn digit_run(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && (b[i].is_ascii_digit() || b[i] == b'_') {
        i += 1;
    }
    i
}

/// 指定字符类的最长非空前缀长度（字节）
fn run_len(text: &str, pred: fn(char) -> bool) -> Option<usize> {
    let len: usize = text
        .chars()
        .take_while(|&c| pred(c))
        .map(char::len_utf8)
        .sum();
    (len > 0).then_some(len)
}

// ---------------------------------------------------------------------------
// Root 状态
// ---------------------------------------------------------------------------

/// `@?[A-Za-z_][A-Za-z0-9_]*`
fn match_root_word(cur: &Cursor) -> Option<usize> {
    let text = cur.rest();
    let at = usize::from(text.starts_with('@'));
    let len = word_len(&text[at..]);
    (len > 0).then_some(at + len)
}

/// 按单词分类分发；`@` 前缀单词不参与任何关键字表
fn action_root_word(text: &str, _cfg: &LexerConfig) -> Outcome {
    if lookup_wrap_clamp_keyword(text).is_some() {
        // 零宽 rematch：先看它是不是泛型化用法，再决定如何消费
        return Outcome::Transition(StateChange::Push(LexerState::PossibleWrapClamp));
    }
    if let Some(name) = lookup_endpoint_keyword(text) {
        return Outcome::Emit(
            TokenKind::EndpointKeyword(name),
            StateChange::Push(LexerState::EndpointDefinition),
        );
    }
    if let Some(name) = lookup_keyword(text) {
        return Outcome::Emit(
            TokenKind::Keyword(name),
            StateChange::Push(LexerState::Qualified),
        );
    }
    Outcome::Emit(
        TokenKind::Identifier,
        StateChange::Push(LexerState::Qualified),
    )
}

/// 连接箭头 `->`，必须先于符号串规则尝试
fn match_arrow(cur: &Cursor) -> Option<usize> {
    cur.rest().starts_with("->").then_some(2)
}

fn action_arrow(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::ConnectionArrow, StateChange::None)
}

fn match_bracket(cur: &Cursor) -> Option<usize> {
    lookup_bracket(cur.peek()?).map(|_| 1)
}

fn action_bracket(text: &str, _cfg: &LexerConfig) -> Outcome {
    let c = text.chars().next().expect("bracket rule matched one char");
    let (kind, open) = lookup_bracket(c).expect("bracket rule only matches bracket chars");
    let token = if open {
        TokenKind::BracketOpen(kind)
    } else {
        TokenKind::BracketClose(kind)
    };
    Outcome::Emit(token, StateChange::None)
}

fn match_symbol_run(cur: &Cursor) -> Option<usize> {
    run_len(cur.rest(), is_symbol_char)
}

/// 符号串：命中运算符拼写为 Operator，单个尖括号归入角括号，
/// 其余串保持未分类
fn action_symbol_run(text: &str, _cfg: &LexerConfig) -> Outcome {
    let kind = if is_operator(text) {
        TokenKind::Operator
    } else if text == "<" {
        TokenKind::BracketOpen(BracketKind::Angle)
    } else if text == ">" {
        TokenKind::BracketClose(BracketKind::Angle)
    } else {
        TokenKind::Invalid
    };
    Outcome::Emit(kind, StateChange::None)
}

fn match_string_open(cur: &Cursor) -> Option<usize> {
    cur.rest().starts_with('"').then_some(1)
}

fn action_string_open(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::StringQuote, StateChange::Push(LexerState::String))
}

/// `[0-9_]*\.[0-9_]+([eE][+-]?[0-9]+)?[fFdD]?`
fn match_float_dot(cur: &Cursor) -> Option<usize> {
    let b = cur.rest().as_bytes();
    let mut i = digit_run(b, 0);
    if i >= b.len() || b[i] != b'.' {
        return None;
    }
    i += 1;
    let frac = digit_run(b, i);
    if frac == i {
        return None;
    }
    i = frac;
    // 指数部分无数字时整体回退
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut k = i + 1;
        if k < b.len() && (b[k] == b'+' || b[k] == b'-') {
            k += 1;
        }
        let first_digit = k;
        while k < b.len() && b[k].is_ascii_digit() {
            k += 1;
        }
        if k > first_digit {
            i = k;
        }
    }
    if i < b.len() && matches!(b[i], b'f' | b'F' | b'd' | b'D') {
        i += 1;
    }
    Some(i)
}

fn action_float(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::FloatLiteral, StateChange::None)
}

/// `0[xX][0-9a-fA-F_]+`
fn match_hex(cur: &Cursor) -> Option<usize> {
    let b = cur.rest().as_bytes();
    if b.len() < 3 || b[0] != b'0' || !matches!(b[1], b'x' | b'X') {
        return None;
    }
    let mut i = 2;
    while i < b.len() && (b[i].is_ascii_hexdigit() || b[i] == b'_') {
        i += 1;
    }
    (i > 2).then_some(i)
}

fn action_hex(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::HexLiteral, StateChange::None)
}

/// `0[bB][01_]+`
fn match_binary(cur: &Cursor) -> Option<usize> {
    let b = cur.rest().as_bytes();
    if b.len() < 3 || b[0] != b'0' || !matches!(b[1], b'b' | b'B') {
        return None;
    }
    let mut i = 2;
    while i < b.len() && matches!(b[i], b'0' | b'1' | b'_') {
        i += 1;
    }
    (i > 2).then_some(i)
}

fn action_binary(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::BinaryLiteral, StateChange::None)
}

/// 无小数点的后缀浮点：`[0-9_]+[fF]`
fn match_float_suffix(cur: &Cursor) -> Option<usize> {
    let b = cur.rest().as_bytes();
    let i = digit_run(b, 0);
    if i == 0 || i >= b.len() || !matches!(b[i], b'f' | b'F') {
        return None;
    }
    Some(i + 1)
}

/// `[0-9_]+[lL]?`
fn match_integer(cur: &Cursor) -> Option<usize> {
    let b = cur.rest().as_bytes();
    let mut i = digit_run(b, 0);
    if i == 0 {
        return None;
    }
    if i < b.len() && matches!(b[i], b'l' | b'L') {
        i += 1;
    }
    Some(i)
}

fn action_integer(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::IntegerLiteral, StateChange::None)
}

fn match_separator(cur: &Cursor) -> Option<usize> {
    matches!(cur.peek()?, ';' | ',').then_some(1)
}

fn action_delimiter(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::Delimiter, StateChange::None)
}

// ---------------------------------------------------------------------------
// Whitespace 规则组（Root 在箭头规则之后拼接整组）
// ---------------------------------------------------------------------------

/// 行锚定的 `#r` / `#load` 指令标记，其后必须跟空白
///
/// 行锚定：上一个行终止符与游标之间只允许水平空白。
fn match_directive_marker(cur: &Cursor) -> Option<usize> {
    if !cur.line_anchored() {
        return None;
    }
    let text = cur.rest();
    let ws = text.chars().take_while(|&c| is_horizontal_ws(c)).count();
    let after = &text[ws..];
    for marker in ["#r", "#load"] {
        if let Some(tail) = after.strip_prefix(marker) {
            if tail.chars().next().is_some_and(is_space) {
                return Some(ws + marker.len());
            }
        }
    }
    None
}

/// 行锚定的通用 `#<word>` 指令，覆盖整行
fn match_directive_line(cur: &Cursor) -> Option<usize> {
    if !cur.line_anchored() {
        return None;
    }
    let text = cur.rest();
    let ws = text.chars().take_while(|&c| is_horizontal_ws(c)).count();
    let after = &text[ws..];
    let tail = after.strip_prefix('#')?;
    if !tail.chars().next().is_some_and(is_identifier_continue) {
        return None;
    }
    let line = after.find(['\n', '\r']).unwrap_or(after.len());
    Some(ws + line)
}

fn action_directive(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::Directive, StateChange::None)
}

fn match_whitespace_run(cur: &Cursor) -> Option<usize> {
    run_len(cur.rest(), is_space)
}

fn action_whitespace(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::Whitespace, StateChange::None)
}

fn match_block_comment_open(cur: &Cursor) -> Option<usize> {
    cur.rest().starts_with("/*").then_some(2)
}

fn action_block_comment_open(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::Comment, StateChange::Push(LexerState::Comment))
}

/// `//` 到行尾（不含行终止符）
fn match_line_comment(cur: &Cursor) -> Option<usize> {
    let text = cur.rest();
    if !text.starts_with("//") {
        return None;
    }
    Some(text.find(['\n', '\r']).unwrap_or(text.len()))
}

fn action_comment(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::Comment, StateChange::None)
}

// ---------------------------------------------------------------------------
// EndpointDefinition 状态
// ---------------------------------------------------------------------------

/// 字面前缀 `event`（保持原表的前缀匹配语义）
fn match_event(cur: &Cursor) -> Option<usize> {
    cur.rest().starts_with("event").then_some(5)
}

fn action_event(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::Keyword("event"), StateChange::None)
}

/// 字面前缀 `stream`，仅在端点块内是关键字
fn match_stream(cur: &Cursor) -> Option<usize> {
    cur.rest().starts_with("stream").then_some(6)
}

fn action_stream(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::Keyword("stream"), StateChange::None)
}

fn match_semicolon(cur: &Cursor) -> Option<usize> {
    cur.rest().starts_with(';').then_some(1)
}

/// `;` 结束一层端点声明；外层 `;` 总在栈见底前命中
fn action_endpoint_close(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::Delimiter, StateChange::Pop)
}

fn match_open_curly(cur: &Cursor) -> Option<usize> {
    cur.rest().starts_with('{').then_some(1)
}

/// `{` 在端点声明内开启一层嵌套分组
fn action_endpoint_nest(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(
        TokenKind::BracketOpen(BracketKind::Curly),
        StateChange::Push(LexerState::EndpointDefinition),
    )
}

/// 无 `@` 前缀的普通单词
fn match_word(cur: &Cursor) -> Option<usize> {
    let len = word_len(cur.rest());
    (len > 0).then_some(len)
}

/// 只区分通用关键字与标识符，不做端点/泛型分发
fn action_plain_word(text: &str, _cfg: &LexerConfig) -> Outcome {
    match lookup_keyword(text) {
        Some(name) => Outcome::Emit(TokenKind::Keyword(name), StateChange::None),
        None => Outcome::Emit(TokenKind::Identifier, StateChange::None),
    }
}

// ---------------------------------------------------------------------------
// Qualified 状态
// ---------------------------------------------------------------------------

fn match_dot(cur: &Cursor) -> Option<usize> {
    cur.rest().starts_with('.').then_some(1)
}

/// 零宽规则：总是命中且不消费
fn match_always(_cur: &Cursor) -> Option<usize> {
    Some(0)
}

fn action_pop(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Transition(StateChange::Pop)
}

// ---------------------------------------------------------------------------
// PossibleWrapClamp / WrapClampKeyword 状态
// ---------------------------------------------------------------------------

fn match_wrap_clamp_angle(text: &str, word: &str) -> Option<usize> {
    let tail = text.strip_prefix(word)?;
    let ws = tail.chars().take_while(|&c| is_space(c)).count();
    tail[ws..]
        .starts_with('<')
        .then_some(word.len() + ws + 1)
}

/// `wrap` 后随（可空白分隔的）`<`：确认泛型化用法
fn match_wrap_angle(cur: &Cursor) -> Option<usize> {
    match_wrap_clamp_angle(cur.rest(), "wrap")
}

fn match_clamp_angle(cur: &Cursor) -> Option<usize> {
    match_wrap_clamp_angle(cur.rest(), "clamp")
}

/// 纯预览：命中后不消费，改由 WrapClampKeyword 状态重新消费该单词
fn action_rematch_wrap_clamp(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Transition(StateChange::Push(LexerState::WrapClampKeyword))
}

fn match_wrap(cur: &Cursor) -> Option<usize> {
    cur.rest().starts_with("wrap").then_some(4)
}

fn match_clamp(cur: &Cursor) -> Option<usize> {
    cur.rest().starts_with("clamp").then_some(5)
}

/// 裸 `wrap`/`clamp`：沿用历史的未分类处理，可经配置改为标识符
fn action_bare_wrap_clamp(_text: &str, cfg: &LexerConfig) -> Outcome {
    let kind = if cfg.bare_wrap_clamp_as_identifier {
        TokenKind::Identifier
    } else {
        TokenKind::Invalid
    };
    Outcome::Emit(kind, StateChange::Pop)
}

fn action_wrap_clamp_keyword(text: &str, _cfg: &LexerConfig) -> Outcome {
    let name =
        lookup_wrap_clamp_keyword(text).expect("literal rule only matches wrap/clamp words");
    Outcome::Emit(TokenKind::WrapClampKeyword(name), StateChange::Pop)
}

// ---------------------------------------------------------------------------
// Comment / String 状态
// ---------------------------------------------------------------------------

fn match_comment_text(cur: &Cursor) -> Option<usize> {
    run_len(cur.rest(), |c| c != '/' && c != '*')
}

fn match_comment_close(cur: &Cursor) -> Option<usize> {
    cur.rest().starts_with("*/").then_some(2)
}

fn action_comment_close(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::Comment, StateChange::Pop)
}

/// 未构成 `*/` 的孤立 `/` 或 `*`；注释不嵌套，`/*` 也按普通文本消费
fn match_comment_punct(cur: &Cursor) -> Option<usize> {
    matches!(cur.peek()?, '/' | '*').then_some(1)
}

fn match_string_content(cur: &Cursor) -> Option<usize> {
    run_len(cur.rest(), |c| c != '\\' && c != '"')
}

fn action_string_content(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::StringContent, StateChange::None)
}

/// 转义序列：`\` + 单字符转义，或 `\x`(1-4 hex)、`\u`(4 hex)、`\U`(8 hex)
fn match_string_escape(cur: &Cursor) -> Option<usize> {
    let b = cur.rest().as_bytes();
    if b.len() < 2 || b[0] != b'\\' {
        return None;
    }
    match b[1] {
        b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'\\' | b'"' | b'\'' => Some(2),
        b'x' => {
            let mut i = 2;
            while i < b.len() && i < 6 && b[i].is_ascii_hexdigit() {
                i += 1;
            }
            (i > 2).then_some(i)
        }
        b'u' => fixed_hex(b, 4),
        b'U' => fixed_hex(b, 8),
        _ => None,
    }
}

/// `\u`/`\U` 要求恰好 `n` 个十六进制数字
fn fixed_hex(b: &[u8], n: usize) -> Option<usize> {
    if b.len() < 2 + n {
        return None;
    }
    b[2..2 + n]
        .iter()
        .all(u8::is_ascii_hexdigit)
        .then_some(2 + n)
}

fn action_string_escape(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::StringEscape, StateChange::None)
}

fn match_quote(cur: &Cursor) -> Option<usize> {
    cur.rest().starts_with('"').then_some(1)
}

fn action_string_close(_text: &str, _cfg: &LexerConfig) -> Outcome {
    Outcome::Emit(TokenKind::StringQuote, StateChange::Pop)
}

// ---------------------------------------------------------------------------
// 规则表
// ---------------------------------------------------------------------------

macro_rules! rule {
    ($name:literal, $matcher:expr, $action:expr) => {
        Rule {
            name: $name,
            matcher: $matcher,
            action: $action,
        }
    };
}

/// 空白/注释/指令共享规则组
static WHITESPACE_RULES: &[Rule] = &[
    rule!("directive-marker", match_directive_marker, action_directive),
    rule!("directive-line", match_directive_line, action_directive),
    rule!("whitespace-run", match_whitespace_run, action_whitespace),
    rule!(
        "block-comment-open",
        match_block_comment_open,
        action_block_comment_open
    ),
    rule!("line-comment", match_line_comment, action_comment),
];

/// Root 规则表：箭头规则之后拼接空白组，再接括号/符号/字符串/数字
static ROOT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = vec![
        rule!("word", match_root_word, action_root_word),
        rule!("connection-arrow", match_arrow, action_arrow),
    ];
    rules.extend_from_slice(state_rules(LexerState::Whitespace));
    rules.extend_from_slice(&[
        rule!("bracket", match_bracket, action_bracket),
        rule!("symbol-run", match_symbol_run, action_symbol_run),
        rule!("string-open", match_string_open, action_string_open),
        rule!("float", match_float_dot, action_float),
        rule!("hex", match_hex, action_hex),
        rule!("binary", match_binary, action_binary),
        rule!("float-suffix", match_float_suffix, action_float),
        rule!("integer", match_integer, action_integer),
        rule!("separator", match_separator, action_delimiter),
    ]);
    rules
});

/// 端点声明块：识别 `event`/`stream` 子关键字，`;` 弹出一层，
/// `{` 压入一层嵌套；不重入限定名与 wrap/clamp 消歧，
/// 数字只认整数形式
static ENDPOINT_RULES: &[Rule] = &[
    rule!("whitespace-run", match_whitespace_run, action_whitespace),
    rule!("event", match_event, action_event),
    rule!("stream", match_stream, action_stream),
    rule!("endpoint-close", match_semicolon, action_endpoint_close),
    rule!("endpoint-nest", match_open_curly, action_endpoint_nest),
    rule!("word", match_word, action_plain_word),
    rule!("bracket", match_bracket, action_bracket),
    rule!("separator", match_separator, action_delimiter),
    rule!("symbol-run", match_symbol_run, action_symbol_run),
    rule!("integer", match_integer, action_integer),
];

/// 点分限定名延续：`a.b.c` 作为整体扫描，遇到其他输入零宽弹出
static QUALIFIED_RULES: &[Rule] = &[
    rule!("word", match_word, action_plain_word),
    rule!("dot", match_dot, action_delimiter),
    rule!("pop", match_always, action_pop),
];

/// wrap/clamp 消歧：向前看 `<` 决定泛型化与否，均不命中时零宽弹出
static POSSIBLE_WRAP_CLAMP_RULES: &[Rule] = &[
    rule!("wrap-angle", match_wrap_angle, action_rematch_wrap_clamp),
    rule!("wrap-bare", match_wrap, action_bare_wrap_clamp),
    rule!("clamp-angle", match_clamp_angle, action_rematch_wrap_clamp),
    rule!("clamp-bare", match_clamp, action_bare_wrap_clamp),
    rule!("pop", match_always, action_pop),
];

/// 确认泛型化后重新消费该单词
static WRAP_CLAMP_RULES: &[Rule] = &[
    rule!("wrap-keyword", match_wrap, action_wrap_clamp_keyword),
    rule!("clamp-keyword", match_clamp, action_wrap_clamp_keyword),
];

/// 块注释内部
static COMMENT_RULES: &[Rule] = &[
    rule!("comment-text", match_comment_text, action_comment),
    rule!("comment-close", match_comment_close, action_comment_close),
    rule!("comment-punct", match_comment_punct, action_comment),
];

/// 字符串内部
static STRING_RULES: &[Rule] = &[
    rule!("string-content", match_string_content, action_string_content),
    rule!("string-escape", match_string_escape, action_string_escape),
    rule!("string-close", match_quote, action_string_close),
];

/// 取指定状态的有序规则表
pub(crate) fn state_rules(state: LexerState) -> &'static [Rule] {
    match state {
        LexerState::Root => ROOT_RULES.as_slice(),
        LexerState::EndpointDefinition => ENDPOINT_RULES,
        LexerState::PossibleWrapClamp => POSSIBLE_WRAP_CLAMP_RULES,
        LexerState::WrapClampKeyword => WRAP_CLAMP_RULES,
        LexerState::Qualified => QUALIFIED_RULES,
        LexerState::Comment => COMMENT_RULES,
        LexerState::String => STRING_RULES,
        LexerState::Whitespace => WHITESPACE_RULES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(matcher: Matcher, input: &str) -> Option<usize> {
        matcher(&Cursor::new(input))
    }

    #[test]
    fn test_root_word() {
        assert_eq!(matched(match_root_word, "foo_1 bar"), Some(5));
        assert_eq!(matched(match_root_word, "@intrinsic"), Some(10));
        assert_eq!(matched(match_root_word, "@1"), None);
        assert_eq!(matched(match_root_word, "1abc"), None);
    }

    #[test]
    fn test_float_dot() {
        assert_eq!(matched(match_float_dot, "3.14"), Some(4));
        assert_eq!(matched(match_float_dot, "3.14f"), Some(5));
        assert_eq!(matched(match_float_dot, ".5"), Some(2));
        assert_eq!(matched(match_float_dot, "1_0.0_1"), Some(7));
        assert_eq!(matched(match_float_dot, "1.5e+3D"), Some(7));
        // 指数缺数字时回退到小数部分
        assert_eq!(matched(match_float_dot, "1.0e"), Some(3));
        assert_eq!(matched(match_float_dot, "1.0e+"), Some(3));
        assert_eq!(matched(match_float_dot, "3."), None);
        assert_eq!(matched(match_float_dot, "42"), None);
    }

    #[test]
    fn test_hex_binary() {
        assert_eq!(matched(match_hex, "0xFF_00"), Some(7));
        assert_eq!(matched(match_hex, "0Xab"), Some(4));
        assert_eq!(matched(match_hex, "0x"), None);
        assert_eq!(matched(match_binary, "0b1010"), Some(6));
        assert_eq!(matched(match_binary, "0b12"), Some(3));
        assert_eq!(matched(match_binary, "0b"), None);
    }

    #[test]
    fn test_integer_and_suffix_float() {
        assert_eq!(matched(match_integer, "42L"), Some(3));
        assert_eq!(matched(match_integer, "1_000"), Some(5));
        assert_eq!(matched(match_float_suffix, "5f"), Some(2));
        assert_eq!(matched(match_float_suffix, "5"), None);
    }

    #[test]
    fn test_directive_marker() {
        assert_eq!(matched(match_directive_marker, "#load patch"), Some(5));
        assert_eq!(matched(match_directive_marker, "  #r lib"), Some(4));
        // 边界处无空白则不算标记形式
        assert_eq!(matched(match_directive_marker, "#ready x"), None);
        assert_eq!(matched(match_directive_marker, "#load"), None);
    }

    #[test]
    fn test_directive_line_spans_to_eol() {
        assert_eq!(matched(match_directive_line, "#include <x>\nfoo"), Some(12));
        assert_eq!(matched(match_directive_line, "  #pragma once"), Some(14));
        assert_eq!(matched(match_directive_line, "#!"), None);
    }

    #[test]
    fn test_directive_requires_line_anchor() {
        let mut cur = Cursor::new("a #load x");
        cur.advance(2);
        assert_eq!(match_directive_marker(&cur), None);
        assert_eq!(match_directive_line(&cur), None);
    }

    #[test]
    fn test_wrap_angle_lookahead() {
        assert_eq!(matched(match_wrap_angle, "wrap<7>"), Some(5));
        assert_eq!(matched(match_wrap_angle, "wrap  <7>"), Some(7));
        assert_eq!(matched(match_wrap_angle, "wrap = 3"), None);
        assert_eq!(matched(match_clamp_angle, "clamp<12>"), Some(6));
    }

    #[test]
    fn test_string_escape_forms() {
        assert_eq!(matched(match_string_escape, r"\n"), Some(2));
        assert_eq!(matched(match_string_escape, r#"\""#), Some(2));
        assert_eq!(matched(match_string_escape, r"\x4"), Some(3));
        assert_eq!(matched(match_string_escape, r"\x41FFzz"), Some(6));
        assert_eq!(matched(match_string_escape, r"\u0041"), Some(6));
        assert_eq!(matched(match_string_escape, r"\u41"), None);
        assert_eq!(matched(match_string_escape, r"\U0001F600"), Some(10));
        assert_eq!(matched(match_string_escape, r"\q"), None);
    }

    #[test]
    fn test_symbol_run_classification() {
        let run = |s| match action_symbol_run(s, &LexerConfig::default()) {
            Outcome::Emit(kind, _) => kind,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_eq!(run("<<="), TokenKind::Operator);
        assert_eq!(run("::"), TokenKind::Operator);
        assert_eq!(run("<"), TokenKind::BracketOpen(BracketKind::Angle));
        assert_eq!(run(">"), TokenKind::BracketClose(BracketKind::Angle));
        assert_eq!(run("!.="), TokenKind::Invalid);
    }

    #[test]
    fn test_comment_matchers() {
        assert_eq!(matched(match_comment_text, "abc */"), Some(4));
        assert_eq!(matched(match_comment_text, "*rest"), None);
        assert_eq!(matched(match_comment_close, "*/x"), Some(2));
        assert_eq!(matched(match_comment_punct, "*a"), Some(1));
    }

    #[test]
    fn test_line_comment_excludes_terminator() {
        assert_eq!(matched(match_line_comment, "// note\nnext"), Some(7));
        assert_eq!(matched(match_line_comment, "//"), Some(2));
        assert_eq!(matched(match_line_comment, "/ /"), None);
    }

    #[test]
    fn test_every_state_has_rules() {
        for state in [
            LexerState::Root,
            LexerState::EndpointDefinition,
            LexerState::PossibleWrapClamp,
            LexerState::WrapClampKeyword,
            LexerState::Qualified,
            LexerState::Comment,
            LexerState::String,
            LexerState::Whitespace,
        ] {
            assert!(!state_rules(state).is_empty());
        }
    }
}
