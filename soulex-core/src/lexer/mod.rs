//! SOUL 词法分析器
//!
//! 上下文敏感的词法分析器，设计目标：
//! - 全域性：对任意输入字节序列都能产出完整 token 流，绝不失败
//! - 上下文消歧：显式状态栈解决单遍正则无法处理的歧义
//!   （泛型化关键字、点分限定名、端点声明块）
//! - 增量友好：状态栈可序列化，支持编辑器按行重扫
//! - IDE 友好：精准位置追踪，LSP 协议兼容

pub mod cursor;
pub mod position;
pub mod state;
pub mod tables;
pub mod token;

mod engine;
mod rules;

pub use cursor::Cursor;
pub use engine::Lexer;
pub use position::{SourcePosition, SourceSpan};
pub use state::{LexerState, StateStack};
pub use token::{BracketKind, Token, TokenKind};
