//! Token 类型定义
//!
//! Token 的文本直接借用源缓冲区切片：按产出顺序拼接所有 token 的
//! 文本即可精确还原输入（零宽控制步不产出 token）。

use serde::Serialize;

use super::position::{SourcePosition, SourceSpan};

/// 括号种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BracketKind {
    Curly,
    Square,
    Paren,
    Angle,
}

/// Token 分类
///
/// 关键字类变体携带关键字表中的静态名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// 通用关键字（控制流、声明、基元类型等）
    Keyword(&'static str),
    /// 端点关键字：`input` / `output`
    EndpointKeyword(&'static str),
    /// 泛型化使用的 `wrap` / `clamp`
    WrapClampKeyword(&'static str),
    /// 信号连接箭头 `->`
    ConnectionArrow,
    Identifier,
    Operator,
    /// `;` `,` 以及限定名中的 `.`
    Delimiter,
    BracketOpen(BracketKind),
    BracketClose(BracketKind),
    IntegerLiteral,
    FloatLiteral,
    HexLiteral,
    BinaryLiteral,
    StringQuote,
    StringContent,
    StringEscape,
    Comment,
    /// 行首 `#r` / `#load` / `#<word>` 指令
    Directive,
    Whitespace,
    /// 未分类的字符或符号串
    Invalid,
    /// 终止 token，幂等：到达后每次调用都会再次返回
    EndOfInput,
}

impl TokenKind {
    /// 是否对高亮/解析消费者有意义
    ///
    /// 空白与终止 token 不参与下游分类
    pub fn is_significant(&self) -> bool {
        !matches!(self, TokenKind::Whitespace | TokenKind::EndOfInput)
    }
}

/// 词法分析产出的单个 token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: SourceSpan,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, span: SourceSpan) -> Self {
        Self { kind, text, span }
    }

    /// 获取 token 的起始位置
    pub fn start(&self) -> SourcePosition {
        self.span.start
    }

    /// 获取 token 的结束位置
    pub fn end(&self) -> SourcePosition {
        self.span.end
    }
}
