use std::fmt;
use std::sync::{Arc, Weak};

use log::trace;

use crate::spatial::CoordinateSystem;
use crate::symbol::kind::SymbolKind;

struct Node {
    name: String,
    kind: SymbolKind,
    children: Vec<Symbol>,
    parent: Weak<Node>,
}

/// A node of an expression tree.
///
/// A `Symbol` is a handle to an immutable node. Cloning the handle is cheap
/// and shares the node; attaching a symbol as a child of another always
/// copies its whole subtree first, so every node has at most one parent.
///
/// Copying, [`Symbol::id`], evaluation and dropping all recurse once per
/// level of nesting, so tree depth is bounded by the thread's stack size.
/// Chains a few thousand levels deep are fine on the default stack.
#[derive(Clone)]
pub struct Symbol {
    node: Arc<Node>,
}

impl Symbol {
    /// Build a bare node named `name`, attaching copies of `children` in order.
    ///
    /// The handles in `children` are left untouched: they keep whatever
    /// parent they had before.
    pub fn new(name: impl Into<String>, children: &[Symbol]) -> Self {
        Self::with_kind(name, SymbolKind::Base, children)
    }

    /// Build a node of any kind, attaching copies of `children` in order.
    ///
    /// Operator kinds expect exactly two children; evaluating one built with
    /// any other count fails with [`TreeError::InvalidArity`].
    ///
    /// [`TreeError::InvalidArity`]: crate::symbol::TreeError::InvalidArity
    pub fn with_kind(
        name: impl Into<String>,
        kind: SymbolKind,
        children: &[Symbol],
    ) -> Self {
        let name = name.into();
        trace!(
            "Creating {} '{}' with {} children",
            kind.tag(),
            name,
            children.len()
        );

        let node = Arc::new_cyclic(|me| Node {
            name,
            kind,
            children: children.iter().map(|child| child.copy_under(me)).collect(),
            parent: Weak::new(),
        });
        Self { node }
    }

    /// Deep copy of this subtree whose root points at `parent`
    fn copy_under(&self, parent: &Weak<Node>) -> Symbol {
        let node = Arc::new_cyclic(|me| Node {
            name: self.node.name.clone(),
            kind: self.node.kind.clone(),
            children: self
                .node
                .children
                .iter()
                .map(|child| child.copy_under(me))
                .collect(),
            parent: parent.clone(),
        });
        Symbol { node }
    }

    pub fn name(&self) -> &str {
        &self.node.name
    }

    pub fn kind(&self) -> &SymbolKind {
        &self.node.kind
    }

    pub fn children(&self) -> &[Symbol] {
        &self.node.children
    }

    /// The node this symbol is attached to.
    ///
    /// Returns `None` for a root, and also once every handle to the parent
    /// has been dropped.
    pub fn parent(&self) -> Option<Symbol> {
        self.node.parent.upgrade().map(|node| Symbol { node })
    }

    pub fn is_leaf(&self) -> bool {
        self.node.children.is_empty()
    }

    /// Domain names of a variable or spatial variable; empty for other kinds
    pub fn domain(&self) -> &[String] {
        match &self.node.kind {
            SymbolKind::Variable { domain } | SymbolKind::SpatialVariable { domain, .. } => {
                domain.as_slice()
            }
            _ => &[],
        }
    }

    pub fn coord_sys(&self) -> Option<CoordinateSystem> {
        match &self.node.kind {
            SymbolKind::SpatialVariable { coord_sys, .. } => Some(*coord_sys),
            _ => None,
        }
    }

    /// Reference identity: true when both handles point at the same node.
    ///
    /// Use [`Symbol::id`] to compare structure instead.
    pub fn ptr_eq(a: &Symbol, b: &Symbol) -> bool {
        Arc::ptr_eq(&a.node, &b.node)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.parent() {
            Some(parent) => write!(f, "Symbol({}, {:?})", self.name(), parent),
            None => write!(f, "Symbol({}, None)", self.name()),
        }
    }
}
