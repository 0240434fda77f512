//! 词法状态栈
//!
//! 每个状态对应一张有序规则表。栈底恒为 `Root`，永不弹出；
//! 端点声明块的嵌套深度由重复的 `EndpointDefinition` 栈项表示。
//!
//! 整个栈可序列化：编辑器按行增量重扫时，行尾的栈就是携带到
//! 下一行的全部状态。

use serde::{Deserialize, Serialize};

/// 词法状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LexerState {
    /// 顶层状态
    Root,
    /// `input`/`output` 之后的端点声明块
    EndpointDefinition,
    /// 识别出 `wrap`/`clamp` 单词后的零宽消歧状态
    PossibleWrapClamp,
    /// 确认泛型化用法后重新消费该单词的状态
    WrapClampKeyword,
    /// 标识符/关键字之后的点分限定名延续
    Qualified,
    /// `/* ... */` 块注释内部
    Comment,
    /// `" ... "` 字符串内部
    String,
    /// 空白/注释/指令共享规则组（仅作规则表键，从不入栈）
    Whitespace,
}

/// 典型栈深：Root + 端点嵌套一层 + 消歧链两层
const TYPICAL_DEPTH: usize = 8;

/// 词法状态栈
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateStack {
    entries: Vec<LexerState>,
}

impl StateStack {
    /// 创建只含 `Root` 的新栈
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(TYPICAL_DEPTH);
        entries.push(LexerState::Root);
        Self { entries }
    }

    /// 当前栈顶状态
    pub fn top(&self) -> LexerState {
        *self.entries.last().expect("state stack keeps Root at base")
    }

    /// 压入新状态
    pub fn push(&mut self, state: LexerState) {
        self.entries.push(state);
    }

    /// 弹出栈顶状态；`Root` 永不弹出
    pub fn pop(&mut self) {
        if self.entries.len() > 1 {
            self.entries.pop();
        }
    }

    /// 栈深度（`Root` 计为 1）
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}
