// Copyright 2026 the Vitric Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seal-once guard and sealable scene trees for cross-thread handoff.
//!
//! `vitric_core` provides the foundational types for building a scene tree on
//! a background thread and handing it to a presenter thread without locks. A
//! tree is freely mutable while it has a single owner; committing it seals
//! every node (a one-way transition) and wraps the root in a shared handle.
//! From that point on the tree is immutable by construction, and the embedded
//! guards turn any leftover mutation attempt into an immediate panic instead
//! of a torn read on the presenter.
//!
//! # Architecture
//!
//! The crate is organized around a build → commit → branch loop:
//!
//! ```text
//!   Builder thread                              Presenter thread
//!
//!   SceneNode::new() ── mutate ──► Snapshot::commit()
//!                                        │ (seals, then shares)
//!                                        ▼
//!                                   Snapshot<SceneNode> ──► read-only traversal
//!                                        │
//!   next working copy ◄── branch() ──────┘
//! ```
//!
//! **[`seal`]** — The [`Seal`](seal::Seal) guard and the
//! [`Sealable`](seal::Sealable) embedding contract. A fresh guard is
//! unsealed; `seal()` is idempotent and irreversible; copies of a guard are
//! always unsealed; assigning into a sealed owner panics before any field is
//! written.
//!
//! **[`node`]** — Sealable scene-tree types: [`Props`](node::Props)
//! (shallow-sealing property bag) and [`SceneNode`](node::SceneNode)
//! (deep-sealing node with owned children).
//!
//! **[`snapshot`]** — [`Snapshot`](snapshot::Snapshot), the seal-then-share
//! handle, and [`Revision`](snapshot::Revision) identifiers for published
//! trees. Constructing a `Snapshot` is the only way to share a root, so
//! "seal happens-before publication" is structural, not a convention.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! commit-pipeline instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod node;
pub mod seal;
pub mod snapshot;
pub mod trace;
