//! Soulex Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Soulex crates.

use serde::{Deserialize, Serialize};

/// Configuration for lexer behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Whether whitespace runs are emitted as tokens.
    ///
    /// When enabled, concatenating the text of every emitted token
    /// reproduces the source buffer exactly. Highlight front ends that
    /// only style visible tokens can turn this off.
    pub emit_whitespace: bool,
    /// Reclassify a bare `wrap`/`clamp` (one not followed by `<`) as an
    /// identifier instead of the historical untyped classification.
    pub bare_wrap_clamp_as_identifier: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            emit_whitespace: true,
            bare_wrap_clamp_as_identifier: false,
        }
    }
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Api,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Api => "api",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("soulex::{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexer_config() {
        let cfg = LexerConfig::default();
        assert!(cfg.emit_whitespace);
        assert!(!cfg.bare_wrap_clamp_as_identifier);
    }

    #[test]
    fn test_lexer_config_from_partial_json() {
        // 缺省字段应回落到默认值
        let cfg: LexerConfig =
            serde_json::from_str(r#"{"bare_wrap_clamp_as_identifier":true}"#).unwrap();
        assert!(cfg.emit_whitespace);
        assert!(cfg.bare_wrap_clamp_as_identifier);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Lexer.as_str(), "lexer");
        assert_eq!(Phase::Cli.target(), "soulex::cli");
    }
}
