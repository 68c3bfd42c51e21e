//! Arena allocation for the flat AST.
//!
//! Contiguous storage for every node family, plus the flattened side
//! tables the range types index into. One arena holds a whole resolution
//! input (all units a host wants evaluated together), so cross-unit
//! references stay plain indices.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ast::{Decl, Element, Expr, Member, Prop, Stmt};
use crate::{
    DeclId, DeclRange, ElementRange, ExprId, ExprRange, MemberRange, PropRange, SourceUnit,
    StmtRange, UnitId,
};

/// Convert a table length to the next id index.
///
/// # Panics
/// Panics if the table has reached `u32::MAX` entries.
#[inline]
fn next_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("arena table exceeded u32::MAX entries"))
}

/// Convert a list length to a range length.
///
/// # Panics
/// Panics if the list exceeds `u16::MAX` entries.
#[inline]
fn list_len(count: usize) -> u16 {
    u16::try_from(count).unwrap_or_else(|_| panic!("arena list exceeded u16::MAX entries"))
}

/// Contiguous storage for all syntax nodes.
#[derive(Clone, Default)]
pub struct SyntaxArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,

    /// Flattened expression lists (call arguments, template parts).
    expr_lists: Vec<ExprId>,

    /// Object literal properties.
    props: Vec<Prop>,

    /// Array literal elements.
    elements: Vec<Element>,

    /// Statements; function bodies are ranges into this table.
    stmts: Vec<Stmt>,

    /// All declarations (indexed by `DeclId`).
    decls: Vec<Decl>,

    /// Flattened declaration lists (parameter lists).
    decl_lists: Vec<DeclId>,

    /// Class members.
    members: Vec<Member>,

    /// Source units (indexed by `UnitId`).
    units: Vec<SourceUnit>,
}

impl SyntaxArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Expressions =====

    /// Allocate an expression, return its ID.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// Get an expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Number of expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Allocate an expression list, return its range.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = next_index(self.expr_lists.len());
        self.expr_lists.extend(exprs);
        let len = list_len(self.expr_lists.len() - start as usize);
        ExprRange::new(start, len)
    }

    /// Get an expression list by range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    // ===== Object properties / array elements =====

    /// Allocate object literal properties, return their range.
    pub fn alloc_props(&mut self, props: impl IntoIterator<Item = Prop>) -> PropRange {
        let start = next_index(self.props.len());
        self.props.extend(props);
        let len = list_len(self.props.len() - start as usize);
        PropRange::new(start, len)
    }

    /// Get object literal properties by range.
    #[inline]
    pub fn get_props(&self, range: PropRange) -> &[Prop] {
        let start = range.start as usize;
        &self.props[start..start + range.len()]
    }

    /// Allocate array literal elements, return their range.
    pub fn alloc_elements(&mut self, elements: impl IntoIterator<Item = Element>) -> ElementRange {
        let start = next_index(self.elements.len());
        self.elements.extend(elements);
        let len = list_len(self.elements.len() - start as usize);
        ElementRange::new(start, len)
    }

    /// Get array literal elements by range.
    #[inline]
    pub fn get_elements(&self, range: ElementRange) -> &[Element] {
        let start = range.start as usize;
        &self.elements[start..start + range.len()]
    }

    // ===== Statements =====

    /// Allocate a statement list (a function body), return its range.
    pub fn alloc_stmts(&mut self, stmts: impl IntoIterator<Item = Stmt>) -> StmtRange {
        let start = next_index(self.stmts.len());
        self.stmts.extend(stmts);
        let len = list_len(self.stmts.len() - start as usize);
        StmtRange::new(start, len)
    }

    /// Get statements by range.
    #[inline]
    pub fn get_stmts(&self, range: StmtRange) -> &[Stmt] {
        let start = range.start as usize;
        &self.stmts[start..start + range.len()]
    }

    // ===== Declarations =====

    /// Allocate a declaration, return its ID.
    #[inline]
    pub fn alloc_decl(&mut self, decl: Decl) -> DeclId {
        let id = DeclId::new(next_index(self.decls.len()));
        self.decls.push(decl);
        id
    }

    /// Get a declaration by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    /// Number of declarations.
    #[inline]
    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    /// Allocate a declaration list (a parameter list), return its range.
    pub fn alloc_decl_list(&mut self, decls: impl IntoIterator<Item = DeclId>) -> DeclRange {
        let start = next_index(self.decl_lists.len());
        self.decl_lists.extend(decls);
        let len = list_len(self.decl_lists.len() - start as usize);
        DeclRange::new(start, len)
    }

    /// Get a declaration list by range.
    #[inline]
    pub fn get_decl_list(&self, range: DeclRange) -> &[DeclId] {
        let start = range.start as usize;
        &self.decl_lists[start..start + range.len()]
    }

    // ===== Class members =====

    /// Allocate class members, return their range.
    pub fn alloc_members(&mut self, members: impl IntoIterator<Item = Member>) -> MemberRange {
        let start = next_index(self.members.len());
        self.members.extend(members);
        let len = list_len(self.members.len() - start as usize);
        MemberRange::new(start, len)
    }

    /// Get class members by range.
    #[inline]
    pub fn get_members(&self, range: MemberRange) -> &[Member] {
        let start = range.start as usize;
        &self.members[start..start + range.len()]
    }

    // ===== Source units =====

    /// Register a source unit, return its ID.
    #[inline]
    pub fn alloc_unit(&mut self, unit: SourceUnit) -> UnitId {
        let id = UnitId::new(next_index(self.units.len()));
        self.units.push(unit);
        id
    }

    /// Get a source unit by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_unit(&self, id: UnitId) -> &SourceUnit {
        &self.units[id.index()]
    }

    /// Check if the arena holds no expressions.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

impl PartialEq for SyntaxArena {
    fn eq(&self, other: &Self) -> bool {
        self.exprs == other.exprs
            && self.expr_lists == other.expr_lists
            && self.props == other.props
            && self.elements == other.elements
            && self.stmts == other.stmts
            && self.decls == other.decls
            && self.decl_lists == other.decl_lists
            && self.members == other.members
            && self.units == other.units
    }
}

impl Eq for SyntaxArena {}

impl Hash for SyntaxArena {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.exprs.hash(state);
        self.expr_lists.hash(state);
        self.props.hash(state);
        self.elements.hash(state);
        self.stmts.hash(state);
        self.decls.hash(state);
        self.decl_lists.hash(state);
        self.members.hash(state);
        self.units.hash(state);
    }
}

impl fmt::Debug for SyntaxArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SyntaxArena {{ {} exprs, {} decls, {} stmts, {} units }}",
            self.exprs.len(),
            self.decls.len(),
            self.stmts.len(),
            self.units.len()
        )
    }
}
