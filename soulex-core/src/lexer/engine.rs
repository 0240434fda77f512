//! 词法分析引擎
//!
//! 以状态栈顶选取规则表，首条命中规则胜出。任何位置若无规则命中，
//! 兜底产出单字符 Invalid 并前进，保证对任意输入的全域性：
//! 每次零宽变迁要么弹栈（深度有限），要么压入的状态必然在原位置
//! 消费字符，因此 `next_token` 总能在有限步内返回。

use soulex_config::LexerConfig;
use tracing::{debug, trace};

use super::cursor::Cursor;
use super::position::SourceSpan;
use super::rules::{state_rules, Outcome, StateChange};
use super::state::{LexerState, StateStack};
use super::token::{Token, TokenKind};

/// 单次分发的结果
enum Step<'src> {
    Token(Token<'src>),
    Again,
}

/// SOUL 词法分析器
///
/// 每个实例独占一个源缓冲区与一份状态栈；重扫需构造新实例。
/// 增量模式下用 [`Lexer::with_state`] 恢复上一行行尾的栈。
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    stack: StateStack,
    config: LexerConfig,
    /// EndOfInput 已产出（迭代器据此终止；`next_token` 仍幂等返回）
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// 以默认配置创建
    pub fn new(source: &'src str) -> Self {
        Self::with_state(source, StateStack::new(), LexerConfig::default())
    }

    /// 以指定配置创建
    pub fn with_config(source: &'src str, config: LexerConfig) -> Self {
        Self::with_state(source, StateStack::new(), config)
    }

    /// 从携带的状态栈恢复（增量按行扫描）
    pub fn with_state(source: &'src str, stack: StateStack, config: LexerConfig) -> Self {
        trace!(
            target: "soulex::lexer",
            len = source.len(),
            depth = stack.depth(),
            "creating lexer"
        );
        Self {
            cursor: Cursor::new(source),
            stack,
            config,
            finished: false,
        }
    }

    /// 当前状态栈
    pub fn state(&self) -> &StateStack {
        &self.stack
    }

    /// 取出状态栈，携带给下一行的新实例
    pub fn into_state(self) -> StateStack {
        self.stack
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// 扫描下一个 token
    ///
    /// 到达输入末尾后返回 EndOfInput，且此后每次调用都幂等地
    /// 返回 EndOfInput。
    pub fn next_token(&mut self) -> Token<'src> {
        loop {
            if self.cursor.is_at_end() {
                if !self.finished {
                    self.finished = true;
                    trace!(
                        target: "soulex::lexer",
                        depth = self.stack.depth(),
                        "end of input"
                    );
                }
                let pos = self.cursor.position();
                return Token::new(TokenKind::EndOfInput, "", SourceSpan::at(pos));
            }

            match self.dispatch() {
                Step::Token(token) => {
                    if token.kind == TokenKind::Whitespace && !self.config.emit_whitespace {
                        continue;
                    }
                    return token;
                }
                Step::Again => continue,
            }
        }
    }

    /// 在当前位置对栈顶状态的规则表做一次分发
    fn dispatch(&mut self) -> Step<'src> {
        let state = self.stack.top();
        for rule in state_rules(state) {
            let Some(len) = (rule.matcher)(&self.cursor) else {
                continue;
            };
            let matched = &self.cursor.rest()[..len];
            match (rule.action)(matched, &self.config) {
                Outcome::Emit(kind, change) => {
                    let start = self.cursor.position();
                    let text = self.cursor.advance(len);
                    let span = SourceSpan::range(start, self.cursor.position());
                    self.apply(change);
                    trace!(
                        target: "soulex::lexer",
                        rule = rule.name,
                        kind = ?kind,
                        text = text,
                        "emit"
                    );
                    return Step::Token(Token::new(kind, text, span));
                }
                Outcome::Transition(change) => {
                    trace!(
                        target: "soulex::lexer",
                        rule = rule.name,
                        state = ?state,
                        "transition"
                    );
                    self.apply(change);
                    return Step::Again;
                }
            }
        }

        // 兜底：单字符 Invalid，扫描永远前进
        let start = self.cursor.position();
        let c = self
            .cursor
            .peek()
            .expect("dispatch only runs before end of input");
        let text = self.cursor.advance(c.len_utf8());
        let span = SourceSpan::range(start, self.cursor.position());
        debug!(target: "soulex::lexer", state = ?state, ch = %c, "unrecognized character");
        Step::Token(Token::new(TokenKind::Invalid, text, span))
    }

    fn apply(&mut self, change: StateChange) {
        match change {
            StateChange::None => {}
            StateChange::Push(state) => self.stack.push(state),
            StateChange::Pop => self.stack.pop(),
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// 产出到且包含唯一一次 EndOfInput，之后返回 None
    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}
