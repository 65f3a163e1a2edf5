//! One function per upstream construction branch.
//!
//! Every recipe fills the attributes the shim does not expose with the same
//! canonical defaults, so two branches for the same node kind build
//! indistinguishable nodes. Which recipe a generation uses is decided in
//! [`crate::factory`].

use recast_ir::{
    AstContext, BinaryOpKind, BinaryOperator, CallExpr, CompoundStmt, ExprId, FpOptions, IfStmt,
    ObjectKind, QualType, ReturnStmt, SourceLoc, StmtId, UnaryOpKind, UnaryOperator, ValueKind,
    WhileStmt,
};

const NO_LOC: SourceLoc = SourceLoc::INVALID;
const VALUE_KIND: ValueKind = ValueKind::PRValue;
const OBJECT_KIND: ObjectKind = ObjectKind::Ordinary;

// Unary operators

pub(crate) fn unary_new_in(
    ctx: &mut AstContext,
    opc: UnaryOpKind,
    operand: ExprId,
    res_type: QualType,
) -> ExprId {
    UnaryOperator::new_in(ctx, operand, opc, res_type, VALUE_KIND, OBJECT_KIND, NO_LOC)
}

pub(crate) fn unary_new_in_with_overflow(
    ctx: &mut AstContext,
    opc: UnaryOpKind,
    operand: ExprId,
    res_type: QualType,
) -> ExprId {
    UnaryOperator::new_in_with_overflow(
        ctx,
        operand,
        opc,
        res_type,
        VALUE_KIND,
        OBJECT_KIND,
        NO_LOC,
        false,
    )
}

// Binary operators

pub(crate) fn binary_new_in_contractable(
    ctx: &mut AstContext,
    opc: BinaryOpKind,
    lhs: ExprId,
    rhs: ExprId,
    res_type: QualType,
) -> ExprId {
    BinaryOperator::new_in_contractable(
        ctx,
        lhs,
        rhs,
        opc,
        res_type,
        VALUE_KIND,
        OBJECT_KIND,
        NO_LOC,
        false,
    )
}

pub(crate) fn binary_new_in_fp_options(
    ctx: &mut AstContext,
    opc: BinaryOpKind,
    lhs: ExprId,
    rhs: ExprId,
    res_type: QualType,
) -> ExprId {
    BinaryOperator::new_in(
        ctx,
        lhs,
        rhs,
        opc,
        res_type,
        VALUE_KIND,
        OBJECT_KIND,
        NO_LOC,
        FpOptions::default(),
    )
}

// Statements

pub(crate) fn if_new_in(ctx: &mut AstContext, cond: ExprId, then_branch: StmtId) -> StmtId {
    IfStmt::new_in(ctx, NO_LOC, false, None, None, cond, then_branch)
}

pub(crate) fn if_create(ctx: &mut AstContext, cond: ExprId, then_branch: StmtId) -> StmtId {
    IfStmt::create(ctx, NO_LOC, false, None, None, cond, then_branch, NO_LOC, None)
}

pub(crate) fn while_new_in(ctx: &mut AstContext, cond: ExprId, body: StmtId) -> StmtId {
    WhileStmt::new_in(ctx, None, cond, body, NO_LOC)
}

pub(crate) fn while_create(ctx: &mut AstContext, cond: ExprId, body: StmtId) -> StmtId {
    WhileStmt::create(ctx, None, cond, body, NO_LOC)
}

pub(crate) fn return_new_in(ctx: &mut AstContext, value: Option<ExprId>) -> StmtId {
    ReturnStmt::new_in(ctx, NO_LOC, value, None)
}

pub(crate) fn return_create(ctx: &mut AstContext, value: Option<ExprId>) -> StmtId {
    ReturnStmt::create(ctx, NO_LOC, value, None)
}

pub(crate) fn compound_new_in(ctx: &mut AstContext, stmts: &[StmtId]) -> StmtId {
    CompoundStmt::new_in(ctx, stmts, NO_LOC, NO_LOC)
}

pub(crate) fn compound_create(ctx: &mut AstContext, stmts: &[StmtId]) -> StmtId {
    CompoundStmt::create(ctx, stmts, NO_LOC, NO_LOC)
}

// Calls

pub(crate) fn call_new_in(
    ctx: &mut AstContext,
    callee: ExprId,
    args: &[ExprId],
    res_type: QualType,
) -> ExprId {
    CallExpr::new_in(ctx, callee, args, res_type, VALUE_KIND, NO_LOC)
}

pub(crate) fn call_create(
    ctx: &mut AstContext,
    callee: ExprId,
    args: &[ExprId],
    res_type: QualType,
) -> ExprId {
    CallExpr::create(ctx, callee, args, res_type, VALUE_KIND, NO_LOC)
}
