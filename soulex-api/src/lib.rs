//! Soulex API - Tokenization orchestration layer
//!
//! Provides unified tokenization interfaces, including:
//! - Whole-buffer tokenization (`tokenize`, `tokenize_with_config`)
//! - Incremental per-line scanning with serializable carried state
//!   (`LineSession`)
//! - Unified error handling (SoulexError)
//!
//! For CLI convenience, this crate provides a global singleton config.
//! For library use, prefer the explicit `tokenize_with_config` API.

use tracing::{debug, info};

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export error and types
pub mod error;
pub mod types;
pub use error::SoulexError;
pub use types::{LineScan, TokenRecord};

// Re-export core types
pub use soulex_config::{LexerConfig, Phase};
pub use soulex_core::{
    BracketKind, Lexer, LexerState, SourcePosition, SourceSpan, StateStack, Token, TokenKind,
};

/// Tokenize a whole buffer with explicit configuration
///
/// This is the recommended API for library users. The returned tokens
/// borrow `source` and include the terminal `EndOfInput`.
pub fn tokenize_with_config<'src>(source: &'src str, config: &RunConfig) -> Vec<Token<'src>> {
    info!(target: "soulex::api", len = source.len(), "tokenizing buffer");
    let tokens: Vec<Token<'src>> =
        Lexer::with_config(source, config.lexer.clone()).collect();
    debug!(target: "soulex::api", count = tokens.len(), "tokenization completed");
    tokens
}

/// Tokenize a whole buffer with default configuration
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    tokenize_with_config(source, &RunConfig::default())
}

/// Tokenize a whole buffer (uses global config)
///
/// # Panics
/// If global config is not initialized
pub fn tokenize_with_global(source: &str) -> Vec<Token<'_>> {
    tokenize_with_config(source, get_config())
}

/// 增量按行扫描会话
///
/// 持有跨行携带的状态栈：编辑器逐行送入文本，
/// 每行扫描后更新栈；栈可导出为 JSON 保存、再恢复。
#[derive(Debug, Clone)]
pub struct LineSession {
    lexer: LexerConfig,
    state: StateStack,
}

impl LineSession {
    /// 以默认配置从文档起点开始
    pub fn new() -> Self {
        Self::with_config(LexerConfig::default())
    }

    pub fn with_config(lexer: LexerConfig) -> Self {
        Self {
            lexer,
            state: StateStack::new(),
        }
    }

    /// 当前携带状态
    pub fn state(&self) -> &StateStack {
        &self.state
    }

    /// 扫描一行，推进携带状态
    ///
    /// 行文本可含可不含行终止符；返回记录中不含 EndOfInput。
    pub fn scan_line(&mut self, line: &str) -> LineScan {
        let mut lexer = Lexer::with_state(line, self.state.clone(), self.lexer.clone());
        let tokens: Vec<TokenRecord> = lexer
            .by_ref()
            .filter(|t| t.kind != TokenKind::EndOfInput)
            .map(|t| TokenRecord::from(&t))
            .collect();
        self.state = lexer.into_state();
        debug!(
            target: "soulex::api",
            count = tokens.len(),
            depth = self.state.depth(),
            "line scanned"
        );
        LineScan {
            tokens,
            state: self.state.clone(),
        }
    }

    /// 导出携带状态为 JSON
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.state).expect("state stack serializes to JSON")
    }

    /// 从 JSON 恢复携带状态
    pub fn restore_state_json(&mut self, json: &str) -> Result<(), SoulexError> {
        self.state = serde_json::from_str(json)?;
        Ok(())
    }
}

impl Default for LineSession {
    fn default() -> Self {
        Self::new()
    }
}
