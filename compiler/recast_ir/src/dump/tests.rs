use pretty_assertions::assert_eq;

use super::*;
use crate::{
    BinaryOpKind, BinaryOperator, CompoundStmt, DeclRefExpr, ExprId, FpOptions, IfStmt,
    IntegerLiteral, NullStmt, ReturnStmt, SourceLoc, UnaryOpKind, UnaryOperator, ValueKind,
    WhileStmt,
};

fn var(ctx: &mut AstContext, name: &str, ty: QualType) -> ExprId {
    let name = ctx.intern(name);
    DeclRefExpr::create(
        ctx,
        VarDecl::new(name, ty, SourceLoc::INVALID),
        ValueKind::LValue,
        SourceLoc::INVALID,
    )
}

fn add(ctx: &mut AstContext, lhs: ExprId, rhs: ExprId) -> ExprId {
    BinaryOperator::new_in(
        ctx,
        lhs,
        rhs,
        BinaryOpKind::Add,
        QualType::INT,
        ValueKind::PRValue,
        ObjectKind::Ordinary,
        SourceLoc::INVALID,
        FpOptions::default(),
    )
}

#[test]
fn test_dump_binary_operator() {
    let mut ctx = AstContext::new();
    let a = var(&mut ctx, "a", QualType::INT);
    let b = var(&mut ctx, "b", QualType::INT);
    let sum = add(&mut ctx, a, b);
    assert_eq!(
        dump(&ctx, sum),
        "BinaryOperator 'int' prvalue '+' contract=off <invalid sloc>\n\
         \x20 DeclRefExpr 'int' lvalue 'a' <invalid sloc>\n\
         \x20 DeclRefExpr 'int' lvalue 'b' <invalid sloc>\n"
    );
}

#[test]
fn test_dump_statements() {
    let mut ctx = AstContext::new();
    let c = var(&mut ctx, "c", QualType::BOOL);
    let neg = UnaryOperator::new_in(
        &mut ctx,
        c,
        UnaryOpKind::LNot,
        QualType::INT,
        ValueKind::PRValue,
        ObjectKind::Ordinary,
        SourceLoc::INVALID,
    );
    let ret = ReturnStmt::create(&mut ctx, SourceLoc::INVALID, None, None);
    let body = CompoundStmt::create(&mut ctx, &[ret], SourceLoc::INVALID, SourceLoc::INVALID);
    let stmt = IfStmt::new_in(&mut ctx, SourceLoc::INVALID, false, None, None, neg, body);
    assert_eq!(
        dump(&ctx, stmt),
        "IfStmt <invalid sloc>\n\
         \x20 UnaryOperator 'int' prvalue prefix '!' cannot overflow <invalid sloc>\n\
         \x20   DeclRefExpr '_Bool' lvalue 'c' <invalid sloc>\n\
         \x20 CompoundStmt <<invalid sloc>, <invalid sloc>>\n\
         \x20   ReturnStmt <invalid sloc>\n"
    );
}

#[test]
fn test_structurally_equal_distinct_allocations() {
    let mut ctx = AstContext::new();
    let a = var(&mut ctx, "a", QualType::INT);
    let b = var(&mut ctx, "b", QualType::INT);
    let first = add(&mut ctx, a, b);
    let second = add(&mut ctx, a, b);
    assert_ne!(first, second);
    assert!(structurally_equal(&ctx, first, &ctx, second));
}

#[test]
fn test_structurally_equal_detects_swapped_operands() {
    let mut ctx = AstContext::new();
    let a = var(&mut ctx, "a", QualType::INT);
    let b = var(&mut ctx, "b", QualType::INT);
    let ab = add(&mut ctx, a, b);
    let ba = add(&mut ctx, b, a);
    assert!(!structurally_equal(&ctx, ab, &ctx, ba));
}

#[test]
fn test_structurally_equal_across_contexts() {
    let mut left = AstContext::new();
    let mut right = AstContext::new();
    // Intern an unrelated name first so name indices differ between contexts.
    right.intern("padding");

    let la = var(&mut left, "a", QualType::INT);
    let lb = IntegerLiteral::create(&mut left, 1, QualType::INT, SourceLoc::INVALID);
    let l = add(&mut left, la, lb);

    let ra = var(&mut right, "a", QualType::INT);
    let rb = IntegerLiteral::create(&mut right, 1, QualType::INT, SourceLoc::INVALID);
    let r = add(&mut right, ra, rb);

    assert!(structurally_equal(&left, l, &right, r));

    let rc = IntegerLiteral::create(&mut right, 2, QualType::INT, SourceLoc::INVALID);
    let r2 = add(&mut right, ra, rc);
    assert!(!structurally_equal(&left, l, &right, r2));
}

#[test]
fn test_structurally_equal_compares_types_by_spelling() {
    let mut left = AstContext::new();
    let mut right = AstContext::new();
    // Different interning order gives the same pointer type different ids.
    right.pointer_to(QualType::LONG);
    let lp = left.pointer_to(QualType::CHAR);
    let rp = right.pointer_to(QualType::CHAR);
    assert_ne!(lp.ty, rp.ty);

    let l = var(&mut left, "p", lp);
    let r = var(&mut right, "p", rp);
    assert!(structurally_equal(&left, l, &right, r));

    let r_const = var(&mut right, "p", rp.with_const());
    assert!(!structurally_equal(&left, l, &right, r_const));
}

#[test]
fn test_dump_optional_statement_parts() {
    let mut ctx = AstContext::new();
    let Ok(if_loc) = SourceLoc::from_offset(4) else {
        panic!("offset 4 is encodable");
    };
    let Ok(else_loc) = SourceLoc::from_offset(20) else {
        panic!("offset 20 is encodable");
    };
    let name = ctx.intern("v");
    let v = VarDecl::new(name, QualType::INT, SourceLoc::INVALID);
    let cond = var(&mut ctx, "v", QualType::INT);
    let init = NullStmt::create(&mut ctx, SourceLoc::INVALID);
    let ret = ReturnStmt::create(&mut ctx, SourceLoc::INVALID, Some(cond), Some(v));
    let other = NullStmt::create(&mut ctx, SourceLoc::INVALID);
    let stmt = IfStmt::create(
        &mut ctx,
        if_loc,
        true,
        Some(init),
        Some(v),
        cond,
        ret,
        else_loc,
        Some(other),
    );
    let loop_stmt = WhileStmt::create(&mut ctx, Some(v), cond, stmt, SourceLoc::INVALID);
    assert_eq!(
        dump(&ctx, loop_stmt),
        "WhileStmt <invalid sloc> has_var 'v'\n\
         \x20 DeclRefExpr 'int' lvalue 'v' <invalid sloc>\n\
         \x20 IfStmt @4 constexpr has_init has_var 'v' has_else @20\n\
         \x20   NullStmt <invalid sloc>\n\
         \x20   DeclRefExpr 'int' lvalue 'v' <invalid sloc>\n\
         \x20   ReturnStmt <invalid sloc> nrvo_candidate 'v'\n\
         \x20     DeclRefExpr 'int' lvalue 'v' <invalid sloc>\n\
         \x20   NullStmt <invalid sloc>\n"
    );
}
