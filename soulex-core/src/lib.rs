//! Soulex Core - Contextual tokenizer for the SOUL DSL (pure logic, no IO)
//!
//! Turns a character buffer of SOUL source text into a flat sequence of
//! classified tokens, driven by a stack of lexical states. Only operates
//! on in-memory data structures, no file IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod lexer;

// Re-export common types
pub use lexer::{
    BracketKind, Cursor, Lexer, LexerState, SourcePosition, SourceSpan, StateStack, Token,
    TokenKind,
};

// Re-export config types from soulex-config
pub use soulex_config::{LexerConfig, Phase};
