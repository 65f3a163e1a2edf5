//! Tree rendering and structural comparison.
//!
//! Both operate on handles plus the context that owns them, and compare or
//! print names and types by spelling so nodes from different contexts can be
//! checked against each other.

use std::fmt::{self, Write};

use crate::{AstContext, ExprMeta, Node, ObjectKind, QualType, StmtId, VarDecl};

/// Render the subtree rooted at `root`, one node per line, children indented
/// by two spaces.
///
/// ```text
/// BinaryOperator 'int' prvalue '+' contract=off <invalid sloc>
///   DeclRefExpr 'int' lvalue 'a' <invalid sloc>
///   DeclRefExpr 'int' lvalue 'b' <invalid sloc>
/// ```
pub fn dump(ctx: &AstContext, root: impl Into<StmtId>) -> String {
    let mut out = String::new();
    dump_into(ctx, root.into(), 0, &mut out);
    out
}

fn dump_into(ctx: &AstContext, id: StmtId, depth: usize, out: &mut String) {
    let node = ctx.node(id);
    for _ in 0..depth {
        out.push_str("  ");
    }
    // Writing into a `String` never fails.
    let _ = write_line(ctx, node, out);
    out.push('\n');
    for child in ctx.children(id) {
        dump_into(ctx, child, depth + 1, out);
    }
}

fn write_line(ctx: &AstContext, node: &Node, out: &mut String) -> fmt::Result {
    out.push_str(node.kind_name());
    if let Some(meta) = node.expr_meta() {
        write_meta(ctx, meta, out)?;
    }
    write_details(ctx, node, out)
}

fn write_meta(ctx: &AstContext, meta: &ExprMeta, out: &mut String) -> fmt::Result {
    write!(
        out,
        " '{}' {}",
        ctx.type_name(meta.ty),
        meta.value_kind.name()
    )?;
    if meta.object_kind != ObjectKind::Ordinary {
        write!(out, " {}", meta.object_kind.name())?;
    }
    Ok(())
}

fn write_details(ctx: &AstContext, node: &Node, out: &mut String) -> fmt::Result {
    match node {
        Node::IntegerLiteral(n) => write!(out, " {} {}", n.value, n.loc),
        Node::DeclRef(n) => write!(out, " '{}' {}", ctx.name_str(n.decl.name), n.loc),
        Node::Unary(n) => {
            let fix = if n.opc.is_postfix() { "postfix" } else { "prefix" };
            let overflow = if n.can_overflow { "" } else { " cannot overflow" };
            write!(out, " {fix} '{}'{overflow} {}", n.opc.as_symbol(), n.op_loc)
        }
        Node::Binary(n) => write!(out, " '{}' {} {}", n.opc.as_symbol(), n.fp_options, n.op_loc),
        Node::Call(n) => write!(out, " {}", n.rparen_loc),
        Node::If(n) => {
            write!(out, " {}", n.if_loc)?;
            if n.is_constexpr {
                out.push_str(" constexpr");
            }
            if n.init.is_some() {
                out.push_str(" has_init");
            }
            if let Some(var) = n.cond_var {
                write!(out, " has_var '{}'", ctx.name_str(var.name))?;
            }
            if n.else_branch.is_some() {
                write!(out, " has_else {}", n.else_loc)?;
            }
            Ok(())
        }
        Node::While(n) => {
            write!(out, " {}", n.while_loc)?;
            if let Some(var) = n.cond_var {
                write!(out, " has_var '{}'", ctx.name_str(var.name))?;
            }
            Ok(())
        }
        Node::Return(n) => {
            write!(out, " {}", n.return_loc)?;
            if let Some(var) = n.nrvo_candidate {
                write!(out, " nrvo_candidate '{}'", ctx.name_str(var.name))?;
            }
            Ok(())
        }
        Node::Compound(n) => write!(out, " {:?}", n.source_range()),
        Node::Null(n) => write!(out, " {}", n.semi_loc),
    }
}

/// Deep comparison of two subtrees, ignoring handle identity.
///
/// Nodes match when they have the same kind, the same metadata (types and
/// names by spelling), the same locations and structurally equal children
/// in the same order.
pub fn structurally_equal(
    lhs: &AstContext,
    a: impl Into<StmtId>,
    rhs: &AstContext,
    b: impl Into<StmtId>,
) -> bool {
    Shapes { lhs, rhs }.subtree(a.into(), b.into())
}

struct Shapes<'a> {
    lhs: &'a AstContext,
    rhs: &'a AstContext,
}

impl Shapes<'_> {
    fn subtree(&self, a: StmtId, b: StmtId) -> bool {
        if !self.node(self.lhs.node(a), self.rhs.node(b)) {
            return false;
        }
        let left = self.lhs.children(a);
        let right = self.rhs.children(b);
        left.len() == right.len()
            && left
                .into_iter()
                .zip(right)
                .all(|(a, b)| self.subtree(a, b))
    }

    /// Compare everything but the children.
    fn node(&self, a: &Node, b: &Node) -> bool {
        match (a, b) {
            (Node::IntegerLiteral(x), Node::IntegerLiteral(y)) => {
                x.value == y.value && self.meta(&x.meta, &y.meta) && x.loc == y.loc
            }
            (Node::DeclRef(x), Node::DeclRef(y)) => {
                self.decl(&x.decl, &y.decl) && self.meta(&x.meta, &y.meta) && x.loc == y.loc
            }
            (Node::Unary(x), Node::Unary(y)) => {
                x.opc == y.opc
                    && self.meta(&x.meta, &y.meta)
                    && x.op_loc == y.op_loc
                    && x.can_overflow == y.can_overflow
            }
            (Node::Binary(x), Node::Binary(y)) => {
                x.opc == y.opc
                    && self.meta(&x.meta, &y.meta)
                    && x.op_loc == y.op_loc
                    && x.fp_options == y.fp_options
            }
            (Node::Call(x), Node::Call(y)) => {
                self.meta(&x.meta, &y.meta) && x.rparen_loc == y.rparen_loc
            }
            (Node::If(x), Node::If(y)) => {
                x.if_loc == y.if_loc
                    && x.is_constexpr == y.is_constexpr
                    && x.init.is_some() == y.init.is_some()
                    && self.opt_decl(x.cond_var.as_ref(), y.cond_var.as_ref())
                    && x.else_loc == y.else_loc
                    && x.else_branch.is_some() == y.else_branch.is_some()
            }
            (Node::While(x), Node::While(y)) => {
                self.opt_decl(x.cond_var.as_ref(), y.cond_var.as_ref())
                    && x.while_loc == y.while_loc
            }
            (Node::Return(x), Node::Return(y)) => {
                x.return_loc == y.return_loc
                    && x.value.is_some() == y.value.is_some()
                    && self.opt_decl(x.nrvo_candidate.as_ref(), y.nrvo_candidate.as_ref())
            }
            (Node::Compound(x), Node::Compound(y)) => {
                x.lbrace_loc == y.lbrace_loc && x.rbrace_loc == y.rbrace_loc
            }
            (Node::Null(x), Node::Null(y)) => x.semi_loc == y.semi_loc,
            _ => false,
        }
    }

    fn meta(&self, a: &ExprMeta, b: &ExprMeta) -> bool {
        self.ty(a.ty, b.ty) && a.value_kind == b.value_kind && a.object_kind == b.object_kind
    }

    fn ty(&self, a: QualType, b: QualType) -> bool {
        self.lhs.type_name(a) == self.rhs.type_name(b)
    }

    fn decl(&self, a: &VarDecl, b: &VarDecl) -> bool {
        self.lhs.name_str(a.name) == self.rhs.name_str(b.name)
            && self.ty(a.ty, b.ty)
            && a.loc == b.loc
    }

    fn opt_decl(&self, a: Option<&VarDecl>, b: Option<&VarDecl>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => self.decl(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests;
