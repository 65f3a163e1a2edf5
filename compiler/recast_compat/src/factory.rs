//! Per-generation construction strategies.
//!
//! Each supported [`ApiGeneration`] has exactly one [`NodeFactory`]
//! implementation that names, for every node kind, the upstream primitive it
//! builds through. Generations differ only in which primitive they call; the
//! nodes they produce are identical.
//!
//! | kind                               | older generations      | from   | newer generations      |
//! |------------------------------------|------------------------|--------|------------------------|
//! | `BinaryOperator`                   | `new_in_contractable`  | gen5   | `new_in` + `FpOptions` |
//! | `CompoundStmt`                     | `new_in`               | gen6   | `create`               |
//! | `UnaryOperator`                    | `new_in`               | gen7   | `new_in_with_overflow` |
//! | `IfStmt` `WhileStmt` `ReturnStmt` `CallExpr` | `new_in`     | gen8   | `create`               |

use recast_ir::{AstContext, BinaryOpKind, ExprId, QualType, StmtId, UnaryOpKind};

use crate::generation::ApiGeneration;
use crate::recipes;

/// The node kinds the shim constructs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    UnaryOperator,
    BinaryOperator,
    If,
    While,
    Return,
    Compound,
    Call,
}

impl NodeKind {
    pub const ALL: [NodeKind; 7] = [
        NodeKind::UnaryOperator,
        NodeKind::BinaryOperator,
        NodeKind::If,
        NodeKind::While,
        NodeKind::Return,
        NodeKind::Compound,
        NodeKind::Call,
    ];

    /// Upstream class name, as printed by [`recast_ir::dump`].
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::UnaryOperator => "UnaryOperator",
            NodeKind::BinaryOperator => "BinaryOperator",
            NodeKind::If => "IfStmt",
            NodeKind::While => "WhileStmt",
            NodeKind::Return => "ReturnStmt",
            NodeKind::Compound => "CompoundStmt",
            NodeKind::Call => "CallExpr",
        }
    }
}

/// Builds nodes through one generation's construction surface.
///
/// Every method allocates into `ctx` and fills unexposed attributes with the
/// canonical defaults: invalid source locations, prvalue, ordinary object,
/// no init statement, no condition variable, no else branch, not constexpr,
/// no NRVO candidate, no overflow, default floating-point options.
pub trait NodeFactory: Send + Sync {
    fn generation(&self) -> ApiGeneration;

    /// Name of the recipe used for `kind`, for diagnostics and tests.
    fn primitive(&self, kind: NodeKind) -> &'static str;

    fn unary_operator(
        &self,
        ctx: &mut AstContext,
        opc: UnaryOpKind,
        operand: ExprId,
        res_type: QualType,
    ) -> ExprId;

    fn binary_operator(
        &self,
        ctx: &mut AstContext,
        opc: BinaryOpKind,
        lhs: ExprId,
        rhs: ExprId,
        res_type: QualType,
    ) -> ExprId;

    fn if_stmt(&self, ctx: &mut AstContext, cond: ExprId, then_branch: StmtId) -> StmtId;

    fn while_stmt(&self, ctx: &mut AstContext, cond: ExprId, body: StmtId) -> StmtId;

    fn return_stmt(&self, ctx: &mut AstContext, value: Option<ExprId>) -> StmtId;

    /// Statements keep their order.
    fn compound_stmt(&self, ctx: &mut AstContext, stmts: &[StmtId]) -> StmtId;

    /// Arguments keep their order.
    fn call_expr(
        &self,
        ctx: &mut AstContext,
        callee: ExprId,
        args: &[ExprId],
        res_type: QualType,
    ) -> ExprId;
}

fn trace_built(generation: ApiGeneration, kind: NodeKind, primitive: &'static str, id: StmtId) {
    tracing::trace!(%generation, kind = kind.name(), primitive, ?id, "built node");
}

macro_rules! generation_factory {
    (
        $(#[$attr:meta])*
        $name:ident => $generation:ident {
            unary: $unary:ident,
            binary: $binary:ident,
            if_stmt: $if_stmt:ident,
            while_stmt: $while_stmt:ident,
            return_stmt: $return_stmt:ident,
            compound: $compound:ident,
            call: $call:ident $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Default, Debug)]
        pub struct $name;

        impl NodeFactory for $name {
            fn generation(&self) -> ApiGeneration {
                ApiGeneration::$generation
            }

            fn primitive(&self, kind: NodeKind) -> &'static str {
                match kind {
                    NodeKind::UnaryOperator => stringify!($unary),
                    NodeKind::BinaryOperator => stringify!($binary),
                    NodeKind::If => stringify!($if_stmt),
                    NodeKind::While => stringify!($while_stmt),
                    NodeKind::Return => stringify!($return_stmt),
                    NodeKind::Compound => stringify!($compound),
                    NodeKind::Call => stringify!($call),
                }
            }

            fn unary_operator(
                &self,
                ctx: &mut AstContext,
                opc: UnaryOpKind,
                operand: ExprId,
                res_type: QualType,
            ) -> ExprId {
                let id = recipes::$unary(ctx, opc, operand, res_type);
                trace_built(
                    ApiGeneration::$generation,
                    NodeKind::UnaryOperator,
                    stringify!($unary),
                    id.into(),
                );
                id
            }

            fn binary_operator(
                &self,
                ctx: &mut AstContext,
                opc: BinaryOpKind,
                lhs: ExprId,
                rhs: ExprId,
                res_type: QualType,
            ) -> ExprId {
                let id = recipes::$binary(ctx, opc, lhs, rhs, res_type);
                trace_built(
                    ApiGeneration::$generation,
                    NodeKind::BinaryOperator,
                    stringify!($binary),
                    id.into(),
                );
                id
            }

            fn if_stmt(&self, ctx: &mut AstContext, cond: ExprId, then_branch: StmtId) -> StmtId {
                let id = recipes::$if_stmt(ctx, cond, then_branch);
                trace_built(ApiGeneration::$generation, NodeKind::If, stringify!($if_stmt), id);
                id
            }

            fn while_stmt(&self, ctx: &mut AstContext, cond: ExprId, body: StmtId) -> StmtId {
                let id = recipes::$while_stmt(ctx, cond, body);
                trace_built(
                    ApiGeneration::$generation,
                    NodeKind::While,
                    stringify!($while_stmt),
                    id,
                );
                id
            }

            fn return_stmt(&self, ctx: &mut AstContext, value: Option<ExprId>) -> StmtId {
                let id = recipes::$return_stmt(ctx, value);
                trace_built(
                    ApiGeneration::$generation,
                    NodeKind::Return,
                    stringify!($return_stmt),
                    id,
                );
                id
            }

            fn compound_stmt(&self, ctx: &mut AstContext, stmts: &[StmtId]) -> StmtId {
                let id = recipes::$compound(ctx, stmts);
                trace_built(
                    ApiGeneration::$generation,
                    NodeKind::Compound,
                    stringify!($compound),
                    id,
                );
                id
            }

            fn call_expr(
                &self,
                ctx: &mut AstContext,
                callee: ExprId,
                args: &[ExprId],
                res_type: QualType,
            ) -> ExprId {
                let id = recipes::$call(ctx, callee, args, res_type);
                trace_built(
                    ApiGeneration::$generation,
                    NodeKind::Call,
                    stringify!($call),
                    id.into(),
                );
                id
            }
        }
    };
}

generation_factory! {
    /// Oldest surface: placement construction everywhere, binary operators
    /// take a bare contractable flag.
    Gen4Factory => Gen4 {
        unary: unary_new_in,
        binary: binary_new_in_contractable,
        if_stmt: if_new_in,
        while_stmt: while_new_in,
        return_stmt: return_new_in,
        compound: compound_new_in,
        call: call_new_in,
    }
}

generation_factory! {
    /// Binary operators take a floating-point options value.
    Gen5Factory => Gen5 {
        unary: unary_new_in,
        binary: binary_new_in_fp_options,
        if_stmt: if_new_in,
        while_stmt: while_new_in,
        return_stmt: return_new_in,
        compound: compound_new_in,
        call: call_new_in,
    }
}

generation_factory! {
    /// Compound statements move to the static factory.
    Gen6Factory => Gen6 {
        unary: unary_new_in,
        binary: binary_new_in_fp_options,
        if_stmt: if_new_in,
        while_stmt: while_new_in,
        return_stmt: return_new_in,
        compound: compound_create,
        call: call_new_in,
    }
}

generation_factory! {
    /// Unary operators take an overflow flag.
    Gen7Factory => Gen7 {
        unary: unary_new_in_with_overflow,
        binary: binary_new_in_fp_options,
        if_stmt: if_new_in,
        while_stmt: while_new_in,
        return_stmt: return_new_in,
        compound: compound_create,
        call: call_new_in,
    }
}

generation_factory! {
    /// Newest surface: if, while, return and call move to static factories.
    Gen8Factory => Gen8 {
        unary: unary_new_in_with_overflow,
        binary: binary_new_in_fp_options,
        if_stmt: if_create,
        while_stmt: while_create,
        return_stmt: return_create,
        compound: compound_create,
        call: call_create,
    }
}

/// The strategy for `generation`.
pub fn factory_for(generation: ApiGeneration) -> &'static dyn NodeFactory {
    match generation {
        ApiGeneration::Gen4 => &Gen4Factory,
        ApiGeneration::Gen5 => &Gen5Factory,
        ApiGeneration::Gen6 => &Gen6Factory,
        ApiGeneration::Gen7 => &Gen7Factory,
        ApiGeneration::Gen8 => &Gen8Factory,
    }
}

/// The strategy for this build's generation.
#[inline]
pub fn factory() -> &'static dyn NodeFactory {
    factory_for(ApiGeneration::BUILD)
}
