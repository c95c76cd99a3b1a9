use crate::symbol::node::Symbol;

/// Depth-first, left-to-right walk over a tree, parents before children
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Symbol>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        let symbol = self.stack.pop()?;
        self.stack.extend(symbol.children().iter().rev());
        Some(symbol)
    }
}

impl Symbol {
    /// Iterate over this node and all its descendants in pre-order.
    ///
    /// Every call starts a fresh, independent walk.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}
