//! Allocation primitives.
//!
//! Every upstream API generation allocates nodes through its own surface:
//!
//! | Node | Placement constructor | `create` factory |
//! |------|-----------------------|------------------|
//! | `UnaryOperator` | `new_in` (no overflow flag), `new_in_with_overflow` | |
//! | `BinaryOperator` | `new_in_contractable` (bool), `new_in` (`FpOptions`) | |
//! | `IfStmt`, `WhileStmt`, `ReturnStmt`, `CallExpr`, `CompoundStmt` | `new_in` | `create` |
//!
//! The argument lists differ, the stored node does not: a primitive that
//! lacks a field stores that field's default.

use crate::{
    AstContext, BinaryOpKind, BinaryOperator, CallExpr, CompoundStmt, DeclRefExpr, ExprId,
    ExprMeta, FpOptions, IfStmt, IntegerLiteral, Name, Node, NullStmt, ObjectKind, QualType,
    ReturnStmt, SourceLoc, StmtId, UnaryOpKind, UnaryOperator, ValueKind, VarDecl, WhileStmt,
};

impl VarDecl {
    pub const fn new(name: Name, ty: QualType, loc: SourceLoc) -> Self {
        VarDecl { name, ty, loc }
    }
}

impl IntegerLiteral {
    pub fn create(ctx: &mut AstContext, value: u64, ty: QualType, loc: SourceLoc) -> ExprId {
        ctx.alloc_expr(Node::IntegerLiteral(IntegerLiteral {
            value,
            meta: ExprMeta::prvalue(ty),
            loc,
        }))
    }
}

impl DeclRefExpr {
    /// Reference `decl` as an ordinary expression of the declared type.
    pub fn create(
        ctx: &mut AstContext,
        decl: VarDecl,
        value_kind: ValueKind,
        loc: SourceLoc,
    ) -> ExprId {
        ctx.alloc_expr(Node::DeclRef(DeclRefExpr {
            decl,
            meta: ExprMeta::new(decl.ty, value_kind, ObjectKind::Ordinary),
            loc,
        }))
    }
}

impl NullStmt {
    pub fn create(ctx: &mut AstContext, semi_loc: SourceLoc) -> StmtId {
        ctx.alloc(Node::Null(NullStmt { semi_loc }))
    }
}

impl UnaryOperator {
    /// Placement constructor of generations without the overflow flag.
    pub fn new_in(
        ctx: &mut AstContext,
        operand: ExprId,
        opc: UnaryOpKind,
        ty: QualType,
        value_kind: ValueKind,
        object_kind: ObjectKind,
        op_loc: SourceLoc,
    ) -> ExprId {
        Self::new_in_with_overflow(ctx, operand, opc, ty, value_kind, object_kind, op_loc, false)
    }

    /// Placement constructor taking the overflow flag.
    #[expect(
        clippy::too_many_arguments,
        reason = "mirrors the upstream constructor argument list"
    )]
    pub fn new_in_with_overflow(
        ctx: &mut AstContext,
        operand: ExprId,
        opc: UnaryOpKind,
        ty: QualType,
        value_kind: ValueKind,
        object_kind: ObjectKind,
        op_loc: SourceLoc,
        can_overflow: bool,
    ) -> ExprId {
        ctx.alloc_expr(Node::Unary(UnaryOperator {
            opc,
            operand,
            meta: ExprMeta::new(ty, value_kind, object_kind),
            op_loc,
            can_overflow,
        }))
    }
}

impl BinaryOperator {
    /// Placement constructor of generations with a single contraction flag.
    #[expect(
        clippy::too_many_arguments,
        reason = "mirrors the upstream constructor argument list"
    )]
    pub fn new_in_contractable(
        ctx: &mut AstContext,
        lhs: ExprId,
        rhs: ExprId,
        opc: BinaryOpKind,
        ty: QualType,
        value_kind: ValueKind,
        object_kind: ObjectKind,
        op_loc: SourceLoc,
        fp_contractable: bool,
    ) -> ExprId {
        Self::new_in(
            ctx,
            lhs,
            rhs,
            opc,
            ty,
            value_kind,
            object_kind,
            op_loc,
            FpOptions::from_contractable(fp_contractable),
        )
    }

    /// Placement constructor taking full floating-point options.
    #[expect(
        clippy::too_many_arguments,
        reason = "mirrors the upstream constructor argument list"
    )]
    pub fn new_in(
        ctx: &mut AstContext,
        lhs: ExprId,
        rhs: ExprId,
        opc: BinaryOpKind,
        ty: QualType,
        value_kind: ValueKind,
        object_kind: ObjectKind,
        op_loc: SourceLoc,
        fp_options: FpOptions,
    ) -> ExprId {
        ctx.alloc_expr(Node::Binary(BinaryOperator {
            opc,
            lhs,
            rhs,
            meta: ExprMeta::new(ty, value_kind, object_kind),
            op_loc,
            fp_options,
        }))
    }
}

impl IfStmt {
    /// Placement constructor; the else branch is attached separately upstream
    /// and is absent here.
    pub fn new_in(
        ctx: &mut AstContext,
        if_loc: SourceLoc,
        is_constexpr: bool,
        init: Option<StmtId>,
        cond_var: Option<VarDecl>,
        cond: ExprId,
        then_branch: StmtId,
    ) -> StmtId {
        Self::create(
            ctx,
            if_loc,
            is_constexpr,
            init,
            cond_var,
            cond,
            then_branch,
            SourceLoc::INVALID,
            None,
        )
    }

    /// Factory taking every optional part up front.
    #[expect(
        clippy::too_many_arguments,
        reason = "mirrors the upstream factory argument list"
    )]
    pub fn create(
        ctx: &mut AstContext,
        if_loc: SourceLoc,
        is_constexpr: bool,
        init: Option<StmtId>,
        cond_var: Option<VarDecl>,
        cond: ExprId,
        then_branch: StmtId,
        else_loc: SourceLoc,
        else_branch: Option<StmtId>,
    ) -> StmtId {
        ctx.alloc(Node::If(IfStmt {
            if_loc,
            is_constexpr,
            init,
            cond_var,
            cond,
            then_branch,
            else_loc,
            else_branch,
        }))
    }
}

impl WhileStmt {
    pub fn new_in(
        ctx: &mut AstContext,
        cond_var: Option<VarDecl>,
        cond: ExprId,
        body: StmtId,
        while_loc: SourceLoc,
    ) -> StmtId {
        Self::create(ctx, cond_var, cond, body, while_loc)
    }

    pub fn create(
        ctx: &mut AstContext,
        cond_var: Option<VarDecl>,
        cond: ExprId,
        body: StmtId,
        while_loc: SourceLoc,
    ) -> StmtId {
        ctx.alloc(Node::While(WhileStmt {
            cond_var,
            cond,
            body,
            while_loc,
        }))
    }
}

impl ReturnStmt {
    pub fn new_in(
        ctx: &mut AstContext,
        return_loc: SourceLoc,
        value: Option<ExprId>,
        nrvo_candidate: Option<VarDecl>,
    ) -> StmtId {
        Self::create(ctx, return_loc, value, nrvo_candidate)
    }

    pub fn create(
        ctx: &mut AstContext,
        return_loc: SourceLoc,
        value: Option<ExprId>,
        nrvo_candidate: Option<VarDecl>,
    ) -> StmtId {
        ctx.alloc(Node::Return(ReturnStmt {
            return_loc,
            value,
            nrvo_candidate,
        }))
    }
}

impl CompoundStmt {
    pub fn new_in(
        ctx: &mut AstContext,
        stmts: &[StmtId],
        lbrace_loc: SourceLoc,
        rbrace_loc: SourceLoc,
    ) -> StmtId {
        Self::create(ctx, stmts, lbrace_loc, rbrace_loc)
    }

    pub fn create(
        ctx: &mut AstContext,
        stmts: &[StmtId],
        lbrace_loc: SourceLoc,
        rbrace_loc: SourceLoc,
    ) -> StmtId {
        let body = ctx.alloc_stmt_list(stmts);
        ctx.alloc(Node::Compound(CompoundStmt {
            body,
            lbrace_loc,
            rbrace_loc,
        }))
    }
}

impl CallExpr {
    pub fn new_in(
        ctx: &mut AstContext,
        callee: ExprId,
        args: &[ExprId],
        ty: QualType,
        value_kind: ValueKind,
        rparen_loc: SourceLoc,
    ) -> ExprId {
        Self::create(ctx, callee, args, ty, value_kind, rparen_loc)
    }

    pub fn create(
        ctx: &mut AstContext,
        callee: ExprId,
        args: &[ExprId],
        ty: QualType,
        value_kind: ValueKind,
        rparen_loc: SourceLoc,
    ) -> ExprId {
        let args = ctx.alloc_expr_list(args);
        ctx.alloc_expr(Node::Call(CallExpr {
            callee,
            args,
            meta: ExprMeta::new(ty, value_kind, ObjectKind::Ordinary),
            rparen_loc,
        }))
    }
}
