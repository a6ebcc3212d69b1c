//! Abstract syntax tree.
//!
//! A plain owned tree: every node is owned by its parent and the
//! [`Program`] is owned by the caller. Nodes carry spans for diagnostics.

use super::Span;
use std::fmt;

/// Variable, function, and loop-label names.
pub type Name = String;

/// A sequence of statements executed in order.
pub type Block = Vec<Stmt>;

/// Root of a parsed source file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `I HAS A name [ITZ init]`
    VarDecl { name: Name, init: Option<Expr> },
    /// `name R value`
    Assign { name: Name, value: Expr },
    /// `name IS NOW A target`
    Retype { name: Name, target: TypeName },
    /// A bare expression.
    Expr(Expr),
    If(IfStmt),
    Loop(LoopStmt),
    FuncDef(FuncDef),
    /// `VISIBLE a AN b ...`
    Visible(Vec<Expr>),
    /// `O NVM`
    Noop,
}

/// `O RLY?` conditional.
///
/// `cond` is resolved by the parser from the statement preceding `O RLY?`.
#[derive(Clone, Debug, PartialEq)]
pub struct IfStmt {
    pub cond: IfCondition,
    pub then_block: Block,
    /// `MEBBE` clauses in source order.
    pub elifs: Vec<(Expr, Block)>,
    pub else_block: Option<Block>,
}

/// Where an `O RLY?` gets its subject.
#[derive(Clone, Debug, PartialEq)]
pub enum IfCondition {
    /// An expression, read when the conditional runs.
    Expr(Expr),
    /// A preceding conditional moved inside this one; it runs first and its
    /// value is the subject.
    Stmt(Box<Stmt>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LoopStep {
    /// `UPPIN`
    Increment,
    /// `NERFIN`
    Decrement,
}

/// `IM IN YR label step YR counter WILE cond ... IM OUTTA YR label`
#[derive(Clone, Debug, PartialEq)]
pub struct LoopStmt {
    pub label: Name,
    pub counter: Name,
    pub step: LoopStep,
    pub cond: Expr,
    pub body: Block,
}

/// `HOW DUZ I name [YR p1 [AN YR p2 ...]] ... IF U SAY SO`
#[derive(Clone, Debug, PartialEq)]
pub struct FuncDef {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    Ident(Name),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `MKAY`-terminated operator over any number of operands.
    Variadic { op: VariadicOp, operands: Vec<Expr> },
    Call { name: Name, args: Vec<Expr> },
    /// `MAEK expr A target`
    Cast { expr: Box<Expr>, target: TypeName },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Noob,
    Troof(bool),
    Numbr(i64),
    Numbar(f64),
    Yarn(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `SUM OF`
    Sum,
    /// `DIFF OF`
    Diff,
    /// `BOTH SAEM`
    BothSaem,
    /// `SMALLR THAN`
    SmallrThan,
    /// `BIGGR THAN`
    BiggrThan,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Sum => "SUM OF",
            BinaryOp::Diff => "DIFF OF",
            BinaryOp::BothSaem => "BOTH SAEM",
            BinaryOp::SmallrThan => "SMALLR THAN",
            BinaryOp::BiggrThan => "BIGGR THAN",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VariadicOp {
    /// `SMOOSH`: concatenate canonical renders.
    Smoosh,
    /// `ANY OF`: short-circuit or.
    AnyOf,
    /// `ALL OF`: short-circuit and.
    AllOf,
}

impl VariadicOp {
    pub fn as_str(self) -> &'static str {
        match self {
            VariadicOp::Smoosh => "SMOOSH",
            VariadicOp::AnyOf => "ANY OF",
            VariadicOp::AllOf => "ALL OF",
        }
    }
}

/// The five runtime types, used as cast targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeName {
    Noob,
    Troof,
    Numbr,
    Numbar,
    Yarn,
}

impl TypeName {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeName::Noob => "NOOB",
            TypeName::Troof => "TROOF",
            TypeName::Numbr => "NUMBR",
            TypeName::Numbar => "NUMBAR",
            TypeName::Yarn => "YARN",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
