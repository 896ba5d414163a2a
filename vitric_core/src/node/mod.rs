// Copyright 2026 the Vitric Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sealable scene-tree data model.
//!
//! A *scene node* is a node in a staged rendering tree. Each node owns:
//!
//! - A [`Seal`](crate::seal::Seal) guard of its own.
//! - **Properties** ([`Props`]): frame rectangle, opacity, and hidden flag,
//!   themselves a sealable object with an independent guard.
//! - **Children** (`Vec<SceneNode>`), owned by value — composition, not
//!   shared references. Sharing happens only at the root, after sealing,
//!   through [`Snapshot`](crate::snapshot::Snapshot).
//!
//! # Cascade policies
//!
//! Sealing cascade is a per-type decision:
//!
//! - [`Props`] seals **shallow** — it owns no sealable sub-objects.
//! - [`SceneNode`] seals **deep**, bottom-up: children first, then props,
//!   then the node itself. A node that reports sealed can never reach an
//!   unsealed descendant.
//!
//! # Branching
//!
//! `Clone` on either type produces a fully *unsealed* copy. Cloning a sealed
//! tree is how a builder derives the next frame's working copy from the last
//! committed one; the frozen original is untouched.

mod props;
mod scene;

pub use props::Props;
pub use scene::SceneNode;
