//! Version-stable construction of recast AST nodes.
//!
//! The upstream node API changed shape across releases: constructors gained
//! and lost parameters, and several kinds moved from placement construction
//! (`new_in`) to static factories (`create`). This crate exposes one stable
//! function per node kind and routes it to the construction path of the
//! generation selected at build time.
//!
//! ```text
//! [features]
//! default = ["api-gen-8"]
//! ```
//!
//! Exactly one `api-gen-*` feature must be enabled; zero or several is a
//! compile error. Nodes built through this crate are indistinguishable across
//! generations: every attribute the stable functions do not take is filled
//! with the same defaults (invalid source locations, prvalue, ordinary
//! object, no optional parts).
//!
//! All functions allocate into the caller's [`AstContext`] and return a
//! handle owned by that context. They never fail; out-of-range handles are
//! caught by the context's own lookups.

mod factory;
mod generation;
mod recipes;

use std::sync::Once;

use recast_ir::{AstContext, BinaryOpKind, ExprId, QualType, StmtId, UnaryOpKind};

pub use factory::{
    factory, factory_for, Gen4Factory, Gen5Factory, Gen6Factory, Gen7Factory, Gen8Factory,
    NodeFactory, NodeKind,
};
pub use generation::{ApiGeneration, GenerationError};

/// Build a unary operator node applying `opc` to `operand`.
///
/// `res_type` is the type of the whole expression, which may differ from the
/// operand type (logical not yields `int`). The node never records overflow.
pub fn create_unary_operator(
    ctx: &mut AstContext,
    opc: UnaryOpKind,
    operand: ExprId,
    res_type: QualType,
) -> ExprId {
    factory().unary_operator(ctx, opc, operand, res_type)
}

/// Build a binary operator node with default floating-point options.
pub fn create_binary_operator(
    ctx: &mut AstContext,
    opc: BinaryOpKind,
    lhs: ExprId,
    rhs: ExprId,
    res_type: QualType,
) -> ExprId {
    factory().binary_operator(ctx, opc, lhs, rhs, res_type)
}

/// Build an `if` with no init statement, condition variable or else branch.
pub fn create_if_stmt(ctx: &mut AstContext, cond: ExprId, then_branch: StmtId) -> StmtId {
    factory().if_stmt(ctx, cond, then_branch)
}

pub fn create_while_stmt(ctx: &mut AstContext, cond: ExprId, body: StmtId) -> StmtId {
    factory().while_stmt(ctx, cond, body)
}

/// Build a `return`, with or without a value.
pub fn create_return_stmt(ctx: &mut AstContext, value: Option<ExprId>) -> StmtId {
    factory().return_stmt(ctx, value)
}

/// Build a block holding `stmts` in the given order. An empty slice builds
/// an empty block.
pub fn create_compound_stmt(ctx: &mut AstContext, stmts: &[StmtId]) -> StmtId {
    factory().compound_stmt(ctx, stmts)
}

/// Build a call of `callee` with `args` in the given order.
pub fn create_call_expr(
    ctx: &mut AstContext,
    callee: ExprId,
    args: &[ExprId],
    res_type: QualType,
) -> ExprId {
    factory().call_expr(ctx, callee, args, res_type)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for construction events.
///
/// Safe to call multiple times; does nothing unless `RUST_LOG` is set, and
/// leaves an already installed global subscriber in place.
/// Enable with `RUST_LOG=recast_compat=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if installed.is_err() {
                tracing::debug!("global subscriber already installed");
            }
        }
    });
}

#[cfg(test)]
mod tests;
