//! Read-only traversal of node trees.
//!
//! Override [`Visitor::visit_stmt`] and call [`walk_stmt`] to continue into
//! the children. Children are visited in the order [`AstContext::children`]
//! returns them.

use crate::{AstContext, StmtId};

pub trait Visitor {
    fn visit_stmt(&mut self, ctx: &AstContext, id: StmtId) {
        walk_stmt(self, ctx, id);
    }
}

pub fn walk_stmt<V: Visitor + ?Sized>(visitor: &mut V, ctx: &AstContext, id: StmtId) {
    for child in ctx.children(id) {
        visitor.visit_stmt(ctx, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompoundStmt, IntegerLiteral, NullStmt, QualType, ReturnStmt, SourceLoc};

    /// Records node kinds in pre-order.
    struct KindCollector(Vec<&'static str>);

    impl Visitor for KindCollector {
        fn visit_stmt(&mut self, ctx: &AstContext, id: StmtId) {
            self.0.push(ctx.node(id).kind_name());
            walk_stmt(self, ctx, id);
        }
    }

    #[test]
    fn test_preorder_traversal() {
        let mut ctx = AstContext::new();
        let one = IntegerLiteral::create(&mut ctx, 1, QualType::INT, SourceLoc::INVALID);
        let ret = ReturnStmt::create(&mut ctx, SourceLoc::INVALID, Some(one), None);
        let null = NullStmt::create(&mut ctx, SourceLoc::INVALID);
        let block =
            CompoundStmt::create(&mut ctx, &[null, ret], SourceLoc::INVALID, SourceLoc::INVALID);

        let mut collector = KindCollector(Vec::new());
        collector.visit_stmt(&ctx, block);
        assert_eq!(
            collector.0,
            vec!["CompoundStmt", "NullStmt", "ReturnStmt", "IntegerLiteral"]
        );
    }
}
