//! 分类数据表
//!
//! 关键字集合、运算符拼写集合与符号字符类都是固定数据。
//! 规则表依赖这里的查表函数返回静态名称，供 token 分类携带。

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::token::BracketKind;

/// 通用关键字（控制流、声明、基元类型、结构关键字、异常处理）
pub static KEYWORDS: &[&str] = &[
    "if", "else", "do", "while", "for", "loop", "break", "continue", "return", "const", "let",
    "var", "void", "int", "int32", "int64", "float", "float32", "float64", "fixed", "bool", "true",
    "false", "string", "struct", "using", "external", "graph", "processor", "namespace",
    "connection", "event", "import", "try", "catch", "throw",
];

/// 端点关键字
pub static ENDPOINT_KEYWORDS: &[&str] = &["input", "output"];

/// 泛型化的边界类型关键字
pub static WRAP_CLAMP_KEYWORDS: &[&str] = &["wrap", "clamp"];

/// 运算符拼写
///
/// `??` 虽在表中，但符号字符类不含 `?`，任何符号串都无法命中它；
/// 源码中的 `?` 走单字符 Invalid 兜底。
pub static OPERATORS: &[&str] = &[
    "!", "=", "??", "||", "&&", "|", "^", "&", "==", "!=", "<=", ">=", "<<", "+", "-", "*", "/",
    "%", "~", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=", ">>", "=>",
    "::",
];

static KEYWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| KEYWORDS.iter().copied().collect());
static ENDPOINT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENDPOINT_KEYWORDS.iter().copied().collect());
static WRAP_CLAMP_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| WRAP_CLAMP_KEYWORDS.iter().copied().collect());
static OPERATOR_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| OPERATORS.iter().copied().collect());

/// 查通用关键字，命中返回表内静态名称
pub fn lookup_keyword(word: &str) -> Option<&'static str> {
    KEYWORD_SET.get(word).copied()
}

/// 查端点关键字
pub fn lookup_endpoint_keyword(word: &str) -> Option<&'static str> {
    ENDPOINT_SET.get(word).copied()
}

/// 查 wrap/clamp 关键字
pub fn lookup_wrap_clamp_keyword(word: &str) -> Option<&'static str> {
    WRAP_CLAMP_SET.get(word).copied()
}

/// 符号串是否为合法运算符拼写
pub fn is_operator(run: &str) -> bool {
    OPERATOR_SET.contains(run)
}

/// 符号字符类
pub fn is_symbol_char(c: char) -> bool {
    matches!(
        c,
        '!' | '.' | ':' | '=' | '>' | '<' | '~' | '&' | '|' | '+' | '-' | '*' | '/' | '%' | '@'
            | '#' | '^'
    )
}

/// 显式括号规则覆盖的字符（尖括号只经符号规则参与）
pub fn lookup_bracket(c: char) -> Option<(BracketKind, bool)> {
    match c {
        '{' => Some((BracketKind::Curly, true)),
        '}' => Some((BracketKind::Curly, false)),
        '[' => Some((BracketKind::Square, true)),
        ']' => Some((BracketKind::Square, false)),
        '(' => Some((BracketKind::Paren, true)),
        ')' => Some((BracketKind::Paren, false)),
        _ => None,
    }
}

/// 标识符起始字符
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// 标识符延续字符
pub fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
