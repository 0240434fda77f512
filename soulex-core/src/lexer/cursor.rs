//! 扫描游标
//!
//! 在不可变源缓冲区上单调前进的游标。匹配器只做只读预览，
//! 消费由引擎统一执行；rematch 不会回退游标。

use super::position::SourcePosition;

/// 水平空白（不含行终止符）
pub fn is_horizontal_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0B' | '\x0C')
}

/// 词法意义上的空白字符（含行终止符）
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0B' | '\x0C' | '\r' | '\n')
}

/// 源缓冲区游标
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: SourcePosition,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: SourcePosition::start(),
        }
    }

    /// 当前扫描位置
    pub fn position(&self) -> SourcePosition {
        self.pos
    }

    /// 剩余未消费的输入
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos.byte_offset..]
    }

    /// 是否已到达输入末尾
    pub fn is_at_end(&self) -> bool {
        self.pos.byte_offset >= self.source.len()
    }

    /// 预读当前字符（不消费）
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// 前进 `len` 个字节，逐字符更新行列号
    ///
    /// `len` 必须落在字符边界上
    pub fn advance(&mut self, len: usize) -> &'src str {
        let consumed = &self.rest()[..len];
        for c in consumed.chars() {
            self.pos.advance(c);
        }
        consumed
    }

    /// 当前位置是否锚定在行首
    ///
    /// 行首定义为：上一个行终止符（或缓冲区开头）与当前位置之间
    /// 只有水平空白。用于指令（directive）规则的行锚定判断。
    pub fn line_anchored(&self) -> bool {
        self.source[..self.pos.byte_offset]
            .chars()
            .rev()
            .take_while(|&c| c != '\n' && c != '\r')
            .all(is_horizontal_ws)
    }
}
