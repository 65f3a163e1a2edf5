use pretty_assertions::assert_eq;

use super::*;
use crate::{
    BinaryOpKind, BinaryOperator, CallExpr, CompoundStmt, DeclRefExpr, FpOptions, IntegerLiteral,
    NullStmt, ObjectKind, ReturnStmt, SourceLoc, UnaryOpKind, UnaryOperator, ValueKind, VarDecl,
};

#[test]
fn test_alloc_returns_sequential_handles() {
    let mut ctx = AstContext::new();
    let a = IntegerLiteral::create(&mut ctx, 1, QualType::INT, SourceLoc::INVALID);
    let b = NullStmt::create(&mut ctx, SourceLoc::INVALID);
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(ctx.len(), 2);
}

#[test]
#[should_panic(expected = "NullStmt is not an expression node")]
fn test_alloc_expr_rejects_statements() {
    let mut ctx = AstContext::new();
    ctx.alloc_expr(Node::Null(NullStmt {
        semi_loc: SourceLoc::INVALID,
    }));
}

#[test]
fn test_as_expr() {
    let mut ctx = AstContext::new();
    let lit = IntegerLiteral::create(&mut ctx, 7, QualType::INT, SourceLoc::INVALID);
    let null = NullStmt::create(&mut ctx, SourceLoc::INVALID);
    assert_eq!(ctx.as_expr(lit.into()), Some(lit));
    assert_eq!(ctx.as_expr(null), None);
    assert_eq!(ctx.as_expr(StmtId::new(99)), None);
}

#[test]
fn test_list_allocation_preserves_order() {
    let mut ctx = AstContext::new();
    let ids: Vec<ExprId> = (0..4)
        .map(|v| IntegerLiteral::create(&mut ctx, v, QualType::INT, SourceLoc::INVALID))
        .collect();
    let reversed: Vec<ExprId> = ids.iter().rev().copied().collect();
    let first = ctx.alloc_expr_list(&ids);
    let second = ctx.alloc_expr_list(&reversed);
    assert_eq!(ctx.expr_list(first), ids.as_slice());
    assert_eq!(ctx.expr_list(second), reversed.as_slice());
    assert_eq!(ctx.alloc_expr_list(&[]), ExprRange::EMPTY);
    assert_eq!(ctx.stmt_list(StmtRange::EMPTY), &[] as &[StmtId]);
}

#[test]
fn test_intern_deduplicates() {
    let mut ctx = AstContext::new();
    let a = ctx.intern("value");
    let b = ctx.intern("value");
    let c = ctx.intern("other");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(ctx.name_str(a), "value");
    assert_eq!(ctx.intern(""), Name::EMPTY);
}

#[test]
fn test_type_interning_and_spelling() {
    let mut ctx = AstContext::new();
    let p1 = ctx.pointer_to(QualType::CHAR.with_const());
    let p2 = ctx.pointer_to(QualType::CHAR.with_const());
    assert_eq!(p1, p2);
    assert!(!p1.ty.is_builtin());
    assert_eq!(ctx.type_name(p1), "const char *");
    assert_eq!(ctx.type_name(p1.with_const()), "const char *const");

    let f = ctx.function_type(QualType::INT, &[QualType::INT, QualType::LONG]);
    assert_eq!(ctx.type_name(f), "int (int, long)");
    let fp = ctx.pointer_to(f);
    assert_eq!(ctx.type_name(fp), "int (*)(int, long)");
    let g = ctx.function_type(QualType::VOID, &[]);
    assert_eq!(ctx.type_name(g), "void (void)");
    assert_eq!(ctx.type_kind(TypeId::UINT), &TypeKind::Builtin(BuiltinType::UInt));
}

#[test]
fn test_reset_releases_everything() {
    let mut ctx = AstContext::with_capacity(64);
    let name = ctx.intern("x");
    let ptr = ctx.pointer_to(QualType::INT);
    DeclRefExpr::create(
        &mut ctx,
        VarDecl::new(name, ptr, SourceLoc::INVALID),
        ValueKind::LValue,
        SourceLoc::INVALID,
    );
    assert!(!ctx.is_empty());

    ctx.reset();
    assert!(ctx.is_empty());
    assert_eq!(ctx.intern(""), Name::EMPTY);
    assert_eq!(ctx.type_name(QualType::DOUBLE), "double");
    // The first compound type after a reset reuses the first compound slot.
    assert_eq!(ctx.pointer_to(QualType::LONG), ptr);
}

#[test]
fn test_iter_in_allocation_order() {
    let mut ctx = AstContext::new();
    NullStmt::create(&mut ctx, SourceLoc::INVALID);
    IntegerLiteral::create(&mut ctx, 3, QualType::INT, SourceLoc::INVALID);
    let kinds: Vec<_> = ctx.iter().map(|(_, node)| node.kind_name()).collect();
    assert_eq!(kinds, vec!["NullStmt", "IntegerLiteral"]);
}

#[test]
fn test_shared_context_across_threads() {
    let shared = SharedContext::default();
    let handles: Vec<_> = (0..4)
        .map(|value| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                let mut ctx = shared.lock();
                IntegerLiteral::create(&mut ctx, value, QualType::INT, SourceLoc::INVALID)
            })
        })
        .collect();
    let mut ids = Vec::new();
    for handle in handles {
        let Ok(id) = handle.join() else {
            panic!("allocation thread panicked");
        };
        ids.push(id);
    }
    ids.sort_by_key(|id| id.index());
    ids.dedup();
    assert_eq!(ids.len(), 4);

    let Ok(ctx) = shared.into_inner() else {
        panic!("all other handles were dropped");
    };
    assert_eq!(ctx.len(), 4);
}

#[test]
fn test_shared_context_into_inner_with_live_clone() {
    let shared = SharedContext::new(AstContext::new());
    let other = shared.clone();
    let Err(shared) = shared.into_inner() else {
        panic!("a clone is still alive");
    };
    drop(other);
    assert!(shared.into_inner().is_ok());
}

#[test]
fn test_debug_summary() {
    let ctx = AstContext::new();
    let text = format!("{ctx:?}");
    assert!(text.starts_with("AstContext { 0 nodes"));
}

#[test]
fn test_lists_longer_than_u16() {
    let mut ctx = AstContext::new();
    let stmts: Vec<StmtId> = (0..70_000)
        .map(|_| NullStmt::create(&mut ctx, SourceLoc::INVALID))
        .collect();
    let block = ctx.alloc_stmt_list(&stmts);
    assert_eq!(block.len(), 70_000);
    assert_eq!(ctx.stmt_list(block), stmts.as_slice());

    let exprs: Vec<ExprId> = (0..70_000)
        .map(|v| IntegerLiteral::create(&mut ctx, v, QualType::INT, SourceLoc::INVALID))
        .collect();
    let args = ctx.alloc_expr_list(&exprs);
    assert_eq!(ctx.expr_list(args).len(), 70_000);
    assert_eq!(ctx.expr_list(args).last(), exprs.last());
}

#[test]
fn test_next_node_index() {
    assert_eq!(next_node_index(0), 0);
    assert_eq!(next_node_index(u32::MAX as usize - 1), u32::MAX - 1);
}

#[test]
#[should_panic(expected = "reaches the invalid handle sentinel")]
fn test_next_node_index_never_yields_sentinel() {
    next_node_index(u32::MAX as usize);
}

fn loc(offset: usize) -> SourceLoc {
    let Ok(loc) = SourceLoc::from_offset(offset) else {
        panic!("offset {offset} is encodable");
    };
    loc
}

#[test]
fn test_begin_loc_follows_leftmost_operand() {
    let mut ctx = AstContext::new();
    let name = ctx.intern("x");
    let x = DeclRefExpr::create(
        &mut ctx,
        VarDecl::new(name, QualType::INT, loc(0)),
        ValueKind::LValue,
        loc(3),
    );
    let one = IntegerLiteral::create(&mut ctx, 1, QualType::INT, loc(8));
    let sum = BinaryOperator::new_in(
        &mut ctx,
        x,
        one,
        BinaryOpKind::Add,
        QualType::INT,
        ValueKind::PRValue,
        ObjectKind::Ordinary,
        loc(5),
        FpOptions::default(),
    );
    assert_eq!(ctx.begin_loc(sum), loc(3));

    let post = UnaryOperator::new_in(
        &mut ctx,
        x,
        UnaryOpKind::PostInc,
        QualType::INT,
        ValueKind::PRValue,
        ObjectKind::Ordinary,
        loc(4),
    );
    assert_eq!(ctx.begin_loc(post), loc(3));

    let neg = UnaryOperator::new_in(
        &mut ctx,
        x,
        UnaryOpKind::Minus,
        QualType::INT,
        ValueKind::PRValue,
        ObjectKind::Ordinary,
        loc(2),
    );
    assert_eq!(ctx.begin_loc(neg), loc(2));

    let call = CallExpr::create(
        &mut ctx,
        post,
        &[one],
        QualType::INT,
        ValueKind::PRValue,
        loc(9),
    );
    assert_eq!(ctx.begin_loc(call), loc(3));

    let ret = ReturnStmt::create(&mut ctx, loc(1), Some(call), None);
    let block = CompoundStmt::create(&mut ctx, &[ret], loc(0), loc(12));
    assert_eq!(ctx.begin_loc(ret), loc(1));
    assert_eq!(ctx.begin_loc(block), loc(0));
    let null = NullStmt::create(&mut ctx, SourceLoc::INVALID);
    assert_eq!(ctx.begin_loc(null), SourceLoc::INVALID);
}
