//! Lexical analysis for MF1 messages.
//! MF1 消息的词法分析模块。
//!
//! The lexer is pull-based: the parser owns it and asks for the next token,
//! the next run of literal text, or the next skeleton as the grammar requires.
//! 词法分析器按需工作：由语法分析器持有并按语法需要逐个读取。

pub mod classify;
mod lexer;
mod token;

pub use lexer::{Lexer, TextRun};
pub use token::{Token, TokenKind};
