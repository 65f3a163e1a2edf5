//! The node context: arena owner of every node, list, name and type.
//!
//! - All nodes stored in one flat `Vec<Node>`, indexed by [`StmtId`]
//! - Child lists stored in flattened `expr_lists` / `stmt_lists`
//! - Bulk deallocation only: [`AstContext::reset`] or drop

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use rustc_hash::FxHashMap;

use crate::{
    BuiltinType, ExprId, ExprMeta, ExprRange, Name, Node, QualType, SourceLoc, StmtId, StmtRange,
    TypeId, TypeKind,
};

/// Convert a length to `u32`, panicking with a descriptive message on overflow.
#[track_caller]
pub(crate) fn to_u32(n: usize, what: &str) -> u32 {
    u32::try_from(n).unwrap_or_else(|_| panic!("too many {what}: {n} exceeds u32::MAX"))
}

/// Index for the next node, panicking before it would reach the
/// `StmtId::INVALID` sentinel.
#[track_caller]
pub(crate) fn next_node_index(n: usize) -> u32 {
    u32::try_from(n)
        .ok()
        .filter(|&index| index != u32::MAX)
        .unwrap_or_else(|| panic!("too many nodes: {n} reaches the invalid handle sentinel"))
}

/// Arena owning all nodes of one translation unit.
///
/// Handles returned by allocation stay valid until the context is reset or
/// dropped. The context never frees a single node.
pub struct AstContext {
    nodes: Vec<Node>,
    expr_lists: Vec<ExprId>,
    stmt_lists: Vec<StmtId>,
    names: Vec<Box<str>>,
    name_map: FxHashMap<Box<str>, Name>,
    types: Vec<TypeKind>,
    type_map: FxHashMap<TypeKind, TypeId>,
}

impl AstContext {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create with room for roughly `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut ctx = AstContext {
            nodes: Vec::with_capacity(nodes),
            expr_lists: Vec::with_capacity(nodes / 4),
            stmt_lists: Vec::with_capacity(nodes / 4),
            names: Vec::new(),
            name_map: FxHashMap::default(),
            types: Vec::with_capacity(BuiltinType::ALL.len()),
            type_map: FxHashMap::default(),
        };
        ctx.pre_intern();
        ctx
    }

    fn pre_intern(&mut self) {
        self.intern("");
        for builtin in BuiltinType::ALL {
            self.intern_type(TypeKind::Builtin(builtin));
        }
        debug_assert_eq!(self.types.len(), TypeId::FIRST_COMPOUND as usize);
    }

    // ===== Node allocation =====

    /// Allocate a node, return its handle.
    pub fn alloc(&mut self, node: Node) -> StmtId {
        let id = StmtId::new(next_node_index(self.nodes.len()));
        self.nodes.push(node);
        id
    }

    /// Allocate an expression node, return its handle.
    ///
    /// # Panics
    /// Panics if `node` is a statement.
    #[track_caller]
    pub fn alloc_expr(&mut self, node: Node) -> ExprId {
        assert!(
            node.is_expr(),
            "{} is not an expression node",
            node.kind_name()
        );
        self.alloc(node).to_expr_unchecked()
    }

    /// Allocate an expression list, preserving order.
    pub fn alloc_expr_list(&mut self, exprs: &[ExprId]) -> ExprRange {
        if exprs.is_empty() {
            return ExprRange::EMPTY;
        }
        let start = to_u32(self.expr_lists.len(), "expression list entries");
        self.expr_lists.extend_from_slice(exprs);
        ExprRange::new(start, to_u32(exprs.len(), "expression list entries"))
    }

    /// Allocate a statement list, preserving order.
    pub fn alloc_stmt_list(&mut self, stmts: &[StmtId]) -> StmtRange {
        if stmts.is_empty() {
            return StmtRange::EMPTY;
        }
        let start = to_u32(self.stmt_lists.len(), "statement list entries");
        self.stmt_lists.extend_from_slice(stmts);
        StmtRange::new(start, to_u32(stmts.len(), "statement list entries"))
    }

    // ===== Lookup =====

    /// Get a node by handle.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this context.
    #[inline]
    #[track_caller]
    pub fn node(&self, id: impl Into<StmtId>) -> &Node {
        &self.nodes[id.into().index()]
    }

    /// Get a node by handle, `None` if out of range.
    pub fn get(&self, id: impl Into<StmtId>) -> Option<&Node> {
        self.nodes.get(id.into().index())
    }

    /// View a node as an expression if it is one.
    pub fn as_expr(&self, id: StmtId) -> Option<ExprId> {
        match self.get(id) {
            Some(node) if node.is_expr() => Some(id.to_expr_unchecked()),
            _ => None,
        }
    }

    /// Type and categories of an expression.
    ///
    /// # Panics
    /// Panics if `id` does not refer to an expression node.
    #[track_caller]
    pub fn expr_meta(&self, id: ExprId) -> &ExprMeta {
        let node = self.node(id);
        match node.expr_meta() {
            Some(meta) => meta,
            None => panic!("{id:?} refers to {}, not an expression", node.kind_name()),
        }
    }

    #[inline]
    pub fn expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    #[inline]
    pub fn stmt_list(&self, range: StmtRange) -> &[StmtId] {
        let start = range.start as usize;
        &self.stmt_lists[start..start + range.len()]
    }

    /// First source location covered by a node.
    ///
    /// Binary operators, calls and postfix unary operators begin at their
    /// leftmost operand; every other node begins at its own leading location.
    pub fn begin_loc(&self, id: impl Into<StmtId>) -> SourceLoc {
        let mut id = id.into();
        loop {
            id = match self.node(id) {
                Node::Binary(n) => n.lhs.into(),
                Node::Call(n) => n.callee.into(),
                Node::Unary(n) if n.opc.is_postfix() => n.operand.into(),
                Node::Unary(n) => return n.op_loc,
                Node::IntegerLiteral(n) => return n.loc,
                Node::DeclRef(n) => return n.loc,
                Node::If(n) => return n.if_loc,
                Node::While(n) => return n.while_loc,
                Node::Return(n) => return n.return_loc,
                Node::Compound(n) => return n.lbrace_loc,
                Node::Null(n) => return n.semi_loc,
            };
        }
    }

    /// Direct children of a node, in source order.
    pub fn children(&self, id: impl Into<StmtId>) -> Vec<StmtId> {
        match self.node(id) {
            Node::IntegerLiteral(_) | Node::DeclRef(_) | Node::Null(_) => Vec::new(),
            Node::Unary(n) => vec![n.operand.into()],
            Node::Binary(n) => vec![n.lhs.into(), n.rhs.into()],
            Node::Call(n) => std::iter::once(n.callee)
                .chain(self.expr_list(n.args).iter().copied())
                .map(StmtId::from)
                .collect(),
            Node::If(n) => n
                .init
                .into_iter()
                .chain([n.cond.into(), n.then_branch])
                .chain(n.else_branch)
                .collect(),
            Node::While(n) => vec![n.cond.into(), n.body],
            Node::Return(n) => n.value.map(StmtId::from).into_iter().collect(),
            Node::Compound(n) => self.stmt_list(n.body).to_vec(),
        }
    }

    /// All nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (StmtId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (StmtId::new(to_u32(index, "nodes")), node))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Release every node, list, name and compound type (keeps capacity).
    ///
    /// All previously returned handles become dangling.
    pub fn reset(&mut self) {
        let released = self.nodes.len();
        self.nodes.clear();
        self.expr_lists.clear();
        self.stmt_lists.clear();
        self.names.clear();
        self.name_map.clear();
        self.types.clear();
        self.type_map.clear();
        self.pre_intern();
        tracing::debug!(released, "node context reset");
    }

    // ===== Names =====

    /// Intern an identifier.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.name_map.get(s) {
            return name;
        }
        let name = Name::from_index(to_u32(self.names.len(), "names"));
        let owned: Box<str> = s.into();
        self.names.push(owned.clone());
        self.name_map.insert(owned, name);
        name
    }

    /// Look up an interned identifier.
    #[track_caller]
    pub fn name_str(&self, name: Name) -> &str {
        &self.names[name.index()]
    }

    // ===== Types =====

    fn intern_type(&mut self, kind: TypeKind) -> TypeId {
        if let Some(&id) = self.type_map.get(&kind) {
            return id;
        }
        let id = TypeId::new(to_u32(self.types.len(), "types"));
        self.types.push(kind.clone());
        self.type_map.insert(kind, id);
        id
    }

    /// Unqualified pointer to `pointee`.
    pub fn pointer_to(&mut self, pointee: QualType) -> QualType {
        QualType::unqualified(self.intern_type(TypeKind::Pointer(pointee)))
    }

    /// Function type with the given return and parameter types.
    pub fn function_type(&mut self, ret: QualType, params: &[QualType]) -> QualType {
        QualType::unqualified(self.intern_type(TypeKind::Function {
            ret,
            params: params.to_vec(),
        }))
    }

    #[track_caller]
    pub fn type_kind(&self, id: TypeId) -> &TypeKind {
        &self.types[id.index()]
    }

    /// C spelling of a type, e.g. `const int`, `char *`, `int (*)(int, long)`.
    pub fn type_name(&self, ty: QualType) -> String {
        let quals = ty.quals.spelling();
        match self.type_kind(ty.ty) {
            TypeKind::Builtin(builtin) if quals.is_empty() => builtin.name().to_owned(),
            TypeKind::Builtin(builtin) => format!("{quals} {}", builtin.name()),
            TypeKind::Pointer(pointee) => {
                let base = match self.type_kind(pointee.ty) {
                    TypeKind::Function { ret, params } => {
                        format!("{} (*)({})", self.type_name(*ret), self.param_list(params))
                    }
                    _ => format!("{} *", self.type_name(*pointee)),
                };
                format!("{base}{quals}")
            }
            TypeKind::Function { ret, params } => {
                format!("{} ({})", self.type_name(*ret), self.param_list(params))
            }
        }
    }

    fn param_list(&self, params: &[QualType]) -> String {
        if params.is_empty() {
            return "void".to_owned();
        }
        params
            .iter()
            .map(|param| self.type_name(*param))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for AstContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AstContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AstContext {{ {} nodes, {} expr list entries, {} stmt list entries, {} names, {} types }}",
            self.nodes.len(),
            self.expr_lists.len(),
            self.stmt_lists.len(),
            self.names.len(),
            self.types.len()
        )
    }
}

/// Context shared across threads.
///
/// Every construction call takes `&mut AstContext`, so sharing goes through
/// one lock; the context adds no finer-grained synchronization.
#[derive(Clone, Default)]
pub struct SharedContext(Arc<Mutex<AstContext>>);

impl SharedContext {
    pub fn new(ctx: AstContext) -> Self {
        SharedContext(Arc::new(Mutex::new(ctx)))
    }

    /// Lock the context for allocation or inspection.
    pub fn lock(&self) -> MutexGuard<'_, AstContext> {
        self.0.lock()
    }

    /// Recover the context if this is the last handle.
    pub fn into_inner(self) -> Result<AstContext, SharedContext> {
        Arc::try_unwrap(self.0)
            .map(Mutex::into_inner)
            .map_err(SharedContext)
    }
}

impl fmt::Debug for SharedContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_lock() {
            Some(ctx) => write!(f, "SharedContext({:?})", &*ctx),
            None => write!(f, "SharedContext(<locked>)"),
        }
    }
}

#[cfg(test)]
mod tests;
