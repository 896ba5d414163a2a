// Copyright 2026 the Vitric Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON dumping for vitric diagnostics.
//!
//! This crate provides development and post-mortem tooling around
//! `vitric_core`:
//!
//! - [`pretty::PrettyPrintSink`] — a
//!   [`TraceSink`](vitric_core::trace::TraceSink) with human-readable
//!   one-line-per-event output.
//! - [`dump`] — `serde_json` rendering of scene trees, including per-node
//!   sealed state, for inspecting committed snapshots.

pub mod dump;
pub mod pretty;
