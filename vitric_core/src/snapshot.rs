// Copyright 2026 the Vitric Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seal-then-share snapshot handles.
//!
//! [`Snapshot::commit`] is the single doorway from "mutable, single-owner"
//! to "frozen, freely shared": it seals the root (deeply, per the root
//! type's cascade policy) *before* wrapping it in an [`Arc`]. Because no
//! other constructor exists, consumers can never observe an unsealed tree
//! through a `Snapshot`, and the builder gives up `&mut` access by moving
//! the root in — so "seal happens-before publication" is a property of the
//! types, not a calling convention.
//!
//! The guard itself provides no memory barrier. The `Arc` construction and
//! whatever transport carries the snapshot across threads (see
//! `vitric_handoff`) supply the acquire/release edge.

use alloc::sync::Arc;
use core::fmt;
use core::ops::Deref;

use crate::seal::Sealable;

/// Monotonic identifier for published snapshots.
///
/// Assigned by the publishing side; later revisions supersede earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(pub u64);

/// A shared handle to a sealed root.
///
/// Cloning a `Snapshot` is a cheap handle copy (Arc bump) that shares the
/// same frozen root; use [`branch`](Self::branch) to derive a new *mutable*
/// working copy instead.
pub struct Snapshot<T: Sealable> {
    root: Arc<T>,
}

impl<T: Sealable> Snapshot<T> {
    /// Seals `root` and wraps it for sharing.
    ///
    /// Sealing an already-sealed root is a no-op, so committing a tree that
    /// was sealed early is fine.
    #[must_use]
    pub fn commit(mut root: T) -> Self {
        root.seal();
        Self {
            root: Arc::new(root),
        }
    }

    /// Returns read-only access to the sealed root.
    #[must_use]
    pub fn root(&self) -> &T {
        &self.root
    }

    /// Derives a fresh, unsealed working copy of the root.
    ///
    /// This is how a builder starts the next version: the copy is
    /// independently mutable, and the frozen original is untouched.
    #[must_use]
    pub fn branch(&self) -> T
    where
        T: Clone,
    {
        (*self.root).clone()
    }
}

impl<T: Sealable> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
        }
    }
}

impl<T: Sealable> Deref for Snapshot<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.root
    }
}

impl<T: Sealable + fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Snapshot").field(&self.root).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SceneNode;

    #[test]
    fn commit_seals_the_root() {
        let mut root = SceneNode::new();
        root.props_mut().set_opacity(0.5);
        assert!(!root.is_sealed());

        let snapshot = Snapshot::commit(root);
        assert!(snapshot.is_sealed());
        assert!(snapshot.props().is_sealed());
        assert_eq!(snapshot.props().opacity(), 0.5);
    }

    #[test]
    fn commit_accepts_an_already_sealed_root() {
        let mut root = SceneNode::new();
        root.seal();
        let snapshot = Snapshot::commit(root);
        assert!(snapshot.is_sealed());
    }

    #[test]
    fn branch_is_unsealed_and_independent() {
        let mut root = SceneNode::new();
        root.push_child(SceneNode::new());
        let snapshot = Snapshot::commit(root);

        let mut working = snapshot.branch();
        assert!(!working.is_sealed());
        working.child_mut(0).props_mut().set_opacity(0.3);
        working.push_child(SceneNode::new());

        // The frozen original is untouched.
        assert_eq!(snapshot.children().len(), 1);
        assert_eq!(snapshot.children()[0].props().opacity(), 1.0);
    }

    #[test]
    fn clone_shares_the_same_root() {
        let snapshot = Snapshot::commit(SceneNode::new());
        let other = snapshot.clone();
        assert!(Arc::ptr_eq(&snapshot.root, &other.root));
    }

    #[test]
    fn deref_reads_the_root() {
        let snapshot = Snapshot::commit(SceneNode::new());
        assert_eq!(snapshot.subtree_len(), 1);
        assert_eq!(snapshot.root().subtree_len(), 1);
    }

    #[test]
    fn revisions_order_naturally() {
        assert!(Revision(1) < Revision(2));
        assert_eq!(Revision(3), Revision(3));
    }
}
