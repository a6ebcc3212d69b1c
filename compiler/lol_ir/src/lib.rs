//! Shared vocabulary for the LOLCODE pipeline.
//!
//! The lexer produces a [`TokenList`], the parser turns it into a
//! [`Program`], and the interpreter walks that tree. None of the types here
//! carry behavior beyond construction and display.

mod ast;
mod span;
mod token;

pub use ast::{
    BinaryOp, Block, Expr, ExprKind, FuncDef, IfCondition, IfStmt, Literal, LoopStep, LoopStmt,
    Name, Program, Stmt, StmtKind, TypeName, VariadicOp,
};
pub use span::Span;
pub use token::{Keyword, Token, TokenKind, TokenList};
