//! Recast IR - node context and node kinds
//!
//! This crate models the compiler-infrastructure side of AST construction:
//! - Source locations ([`SourceLoc`], [`SourceRange`])
//! - Node handles ([`ExprId`], [`StmtId`]) and child lists
//! - Qualified types interned per context ([`QualType`], [`TypeId`])
//! - Expression metadata (value kind, object kind, floating-point options)
//! - Node kinds for operators, control flow, blocks and calls
//! - The [`AstContext`] arena that owns every node
//!
//! # Allocation Surfaces
//!
//! Each node kind carries the allocation primitives of every upstream API
//! generation side by side: placement constructors (`new_in`) with the older
//! argument lists, and `create` factories with the newer ones. They store the
//! same node; only the arguments a caller must supply differ. Choosing between
//! them is the job of `recast_compat`.
//!
//! # Ownership
//!
//! - **Flatten Everything**: no `Box<Node>`, children are `u32` handles
//! - **Bulk Release**: nodes are never freed one at a time; dropping or
//!   resetting the context releases all of them

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod construct;
mod context;
pub mod dump;
mod handle;
mod loc;
mod metadata;
mod name;
pub mod node;
mod operators;
mod ty;
pub mod visitor;

pub use context::{AstContext, SharedContext};
pub use dump::{dump, structurally_equal};
pub use handle::{ExprId, ExprRange, StmtId, StmtRange};
pub use loc::{SourceLoc, SourceLocError, SourceRange};
pub use metadata::{ExprMeta, FpContract, FpOptions, ObjectKind, ValueKind};
pub use name::Name;
pub use node::{
    BinaryOperator, CallExpr, CompoundStmt, DeclRefExpr, IfStmt, IntegerLiteral, Node, NullStmt,
    ReturnStmt, UnaryOperator, VarDecl, WhileStmt,
};
pub use operators::{BinaryOpKind, UnaryOpKind};
pub use ty::{BuiltinType, QualType, Qualifiers, TypeId, TypeKind};
