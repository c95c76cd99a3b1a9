use std::hash::{Hash, Hasher};

use siphasher::sip::SipHasher24;

use crate::symbol::node::Symbol;

impl Symbol {
    /// Structural fingerprint of this subtree.
    ///
    /// Combines the kind tag, the name and the ids of the children in order,
    /// so two trees with the same shape and content share an id no matter
    /// which instances they were built from. Recomputed on every call.
    ///
    /// SipHash-2-4 with fixed keys keeps the value stable across runs
    /// and platforms.
    pub fn id(&self) -> u64 {
        let mut hasher = SipHasher24::new();
        self.kind().tag().hash(&mut hasher);
        self.name().hash(&mut hasher);

        // Fixed-width writes so the id does not depend on pointer width
        hasher.write_u64(self.children().len() as u64);
        for child in self.children() {
            hasher.write_u64(child.id());
        }

        hasher.finish()
    }
}
