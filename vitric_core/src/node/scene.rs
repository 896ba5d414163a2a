// Copyright 2026 the Vitric Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene-tree node type.

use alloc::vec::Vec;
use core::fmt;

use crate::seal::{Seal, Sealable};

use super::props::Props;

/// A node in a staged scene tree.
///
/// A `SceneNode` owns its [`Props`] and its children by value. While the
/// tree has a single owner it is freely mutable; sealing freezes the whole
/// subtree. Cascade policy: **deep**, bottom-up — children are sealed first,
/// then the props, then the node itself, so a node that reports sealed can
/// never reach an unsealed descendant.
///
/// A sealed child under an unsealed parent is permitted (a builder may seal
/// a subtree early, or attach one that was committed elsewhere); the child's
/// own guard keeps protecting it, and the parent's deep seal is idempotent
/// over it.
pub struct SceneNode {
    seal: Seal,
    props: Props,
    children: Vec<SceneNode>,
}

impl SceneNode {
    /// Creates an unsealed node with default props and no children.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seal: Seal::new(),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// Creates an unsealed node with the given props and no children.
    #[must_use]
    pub const fn with_props(props: Props) -> Self {
        Self {
            seal: Seal::new(),
            props,
            children: Vec::new(),
        }
    }

    // -- Read access (always allowed) --

    /// Returns the node's props.
    #[must_use]
    pub const fn props(&self) -> &Props {
        &self.props
    }

    /// Returns the node's children in order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the number of nodes in this subtree, including this node.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Self::subtree_len)
            .sum::<usize>()
    }

    // -- Mutation (guard-checked) --

    /// Returns mutable access to the node's props.
    ///
    /// The props carry their own guard, so even through this path a sealed
    /// `Props` refuses its setters.
    ///
    /// # Panics
    ///
    /// Panics if this node is sealed.
    pub fn props_mut(&mut self) -> &mut Props {
        self.seal.ensure_unsealed();
        &mut self.props
    }

    /// Replaces the node's props wholesale.
    ///
    /// # Panics
    ///
    /// Panics if this node is sealed.
    pub fn set_props(&mut self, props: Props) {
        self.seal.ensure_unsealed();
        self.props = props;
    }

    /// Appends `child` as the last child.
    ///
    /// # Panics
    ///
    /// Panics if this node is sealed.
    pub fn push_child(&mut self, child: Self) {
        self.seal.ensure_unsealed();
        self.children.push(child);
    }

    /// Inserts `child` at `index`, shifting later children right.
    ///
    /// # Panics
    ///
    /// Panics if this node is sealed, or if `index > self.children().len()`.
    pub fn insert_child(&mut self, index: usize, child: Self) {
        self.seal.ensure_unsealed();
        assert!(
            index <= self.children.len(),
            "child index {index} out of range (len {})",
            self.children.len()
        );
        self.children.insert(index, child);
    }

    /// Removes and returns the child at `index`.
    ///
    /// # Panics
    ///
    /// Panics if this node is sealed, or if `index` is out of range.
    pub fn remove_child(&mut self, index: usize) -> Self {
        self.seal.ensure_unsealed();
        assert!(
            index < self.children.len(),
            "child index {index} out of range (len {})",
            self.children.len()
        );
        self.children.remove(index)
    }

    /// Returns mutable access to the child at `index`.
    ///
    /// # Panics
    ///
    /// Panics if this node is sealed, or if `index` is out of range.
    pub fn child_mut(&mut self, index: usize) -> &mut Self {
        self.seal.ensure_unsealed();
        assert!(
            index < self.children.len(),
            "child index {index} out of range (len {})",
            self.children.len()
        );
        &mut self.children[index]
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Sealable for SceneNode {
    /// Deep seal, bottom-up: children, then props, then this node.
    fn seal(&mut self) {
        for child in &mut self.children {
            child.seal();
        }
        self.props.seal();
        self.seal.seal();
    }

    fn is_sealed(&self) -> bool {
        self.seal.is_sealed()
    }
}

impl Clone for SceneNode {
    /// Deep copy with every guard reset: the clone is a fresh working
    /// version of the whole subtree, whatever the original's state.
    fn clone(&self) -> Self {
        Self {
            seal: Seal::new(),
            props: self.props.clone(),
            children: self.children.clone(),
        }
    }

    /// Guard-checked assignment. The check precedes every write, so a
    /// refused assignment leaves the target untouched; on success the
    /// target stays unsealed and receives fresh unsealed copies of the
    /// source's props and children.
    ///
    /// # Panics
    ///
    /// Panics if `self` is sealed, regardless of `source`'s state.
    fn clone_from(&mut self, source: &Self) {
        self.seal.ensure_unsealed();
        self.props = source.props.clone();
        self.children = source.children.clone();
    }
}

impl fmt::Debug for SceneNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneNode")
            .field("seal", &self.seal)
            .field("props", &self.props)
            .field("children", &self.children)
            .finish()
    }
}
