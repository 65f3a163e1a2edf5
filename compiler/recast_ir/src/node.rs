//! Node kinds.
//!
//! Each struct is the stored form of one node kind. Fields are public so
//! consumers can inspect them; construction goes through the allocation
//! primitives in `construct.rs`, which place the node in an
//! [`AstContext`](crate::AstContext).

use crate::{
    BinaryOpKind, ExprId, ExprMeta, ExprRange, FpOptions, Name, ObjectKind, QualType, SourceLoc,
    SourceRange, StmtId, StmtRange, UnaryOpKind, ValueKind,
};

/// A variable declaration referenced by a node.
///
/// Declarations are not nodes of their own; they are stored inline.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDecl {
    pub name: Name,
    pub ty: QualType,
    pub loc: SourceLoc,
}

/// Integer literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct IntegerLiteral {
    pub value: u64,
    pub meta: ExprMeta,
    pub loc: SourceLoc,
}

/// Reference to a named declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeclRefExpr {
    pub decl: VarDecl,
    pub meta: ExprMeta,
    pub loc: SourceLoc,
}

/// Unary operator application.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct UnaryOperator {
    pub opc: UnaryOpKind,
    pub operand: ExprId,
    pub meta: ExprMeta,
    pub op_loc: SourceLoc,
    /// Whether the operation may overflow. Generations before the flag
    /// existed store `false`.
    pub can_overflow: bool,
}

/// Binary operator application.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BinaryOperator {
    pub opc: BinaryOpKind,
    pub lhs: ExprId,
    pub rhs: ExprId,
    pub meta: ExprMeta,
    pub op_loc: SourceLoc,
    pub fp_options: FpOptions,
}

/// Function call.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallExpr {
    pub callee: ExprId,
    pub args: ExprRange,
    pub meta: ExprMeta,
    pub rparen_loc: SourceLoc,
}

/// `if` statement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfStmt {
    pub if_loc: SourceLoc,
    pub is_constexpr: bool,
    pub init: Option<StmtId>,
    pub cond_var: Option<VarDecl>,
    pub cond: ExprId,
    pub then_branch: StmtId,
    pub else_loc: SourceLoc,
    pub else_branch: Option<StmtId>,
}

/// `while` loop.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct WhileStmt {
    pub cond_var: Option<VarDecl>,
    pub cond: ExprId,
    pub body: StmtId,
    pub while_loc: SourceLoc,
}

/// `return` statement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ReturnStmt {
    pub return_loc: SourceLoc,
    pub value: Option<ExprId>,
    /// Variable the returned value may be constructed in place of.
    pub nrvo_candidate: Option<VarDecl>,
}

/// Braced block.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CompoundStmt {
    pub body: StmtRange,
    pub lbrace_loc: SourceLoc,
    pub rbrace_loc: SourceLoc,
}

impl CompoundStmt {
    pub fn source_range(&self) -> SourceRange {
        SourceRange::new(self.lbrace_loc, self.rbrace_loc)
    }
}

/// Empty statement `;`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NullStmt {
    pub semi_loc: SourceLoc,
}

/// Any node stored in a context.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Node {
    IntegerLiteral(IntegerLiteral),
    DeclRef(DeclRefExpr),
    Unary(UnaryOperator),
    Binary(BinaryOperator),
    Call(CallExpr),
    If(IfStmt),
    While(WhileStmt),
    Return(ReturnStmt),
    Compound(CompoundStmt),
    Null(NullStmt),
}

impl Node {
    /// Upstream class name of the node kind.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Node::IntegerLiteral(_) => "IntegerLiteral",
            Node::DeclRef(_) => "DeclRefExpr",
            Node::Unary(_) => "UnaryOperator",
            Node::Binary(_) => "BinaryOperator",
            Node::Call(_) => "CallExpr",
            Node::If(_) => "IfStmt",
            Node::While(_) => "WhileStmt",
            Node::Return(_) => "ReturnStmt",
            Node::Compound(_) => "CompoundStmt",
            Node::Null(_) => "NullStmt",
        }
    }

    pub const fn is_expr(&self) -> bool {
        self.expr_meta().is_some()
    }

    /// Type and categories, `None` for statements.
    pub const fn expr_meta(&self) -> Option<&ExprMeta> {
        match self {
            Node::IntegerLiteral(n) => Some(&n.meta),
            Node::DeclRef(n) => Some(&n.meta),
            Node::Unary(n) => Some(&n.meta),
            Node::Binary(n) => Some(&n.meta),
            Node::Call(n) => Some(&n.meta),
            Node::If(_) | Node::While(_) | Node::Return(_) | Node::Compound(_) | Node::Null(_) => {
                None
            }
        }
    }

    pub fn expr_type(&self) -> Option<QualType> {
        self.expr_meta().map(|meta| meta.ty)
    }

    pub fn value_kind(&self) -> Option<ValueKind> {
        self.expr_meta().map(|meta| meta.value_kind)
    }

    pub fn object_kind(&self) -> Option<ObjectKind> {
        self.expr_meta().map(|meta| meta.object_kind)
    }
}
