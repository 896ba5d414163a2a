// Copyright 2026 the Vitric Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON rendering of scene trees.
//!
//! [`tree_json`] turns a [`SceneNode`] subtree into a `serde_json` value —
//! one object per node with its props, sealed state, and children — and
//! [`write_tree_json`] streams the same to a writer. Useful for inspecting
//! exactly what a builder committed, after the fact.

use std::io::{self, Write};

use serde_json::{Value, json};

use vitric_core::node::SceneNode;
use vitric_core::seal::Sealable;

/// Renders a scene subtree as a JSON value.
///
/// Each node becomes an object with `sealed` (node and props guards),
/// `frame` / `opacity` / `hidden`, and a `children` array in order.
#[must_use]
pub fn tree_json(node: &SceneNode) -> Value {
    let frame = node.props().frame();
    json!({
        "sealed": node.is_sealed(),
        "props_sealed": node.props().is_sealed(),
        "frame": { "x0": frame.x0, "y0": frame.y0, "x1": frame.x1, "y1": frame.y1 },
        "opacity": node.props().opacity(),
        "hidden": node.props().hidden(),
        "children": node.children().iter().map(tree_json).collect::<Vec<Value>>(),
    })
}

/// Writes [`tree_json`] output to `writer`.
pub fn write_tree_json(node: &SceneNode, writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &tree_json(node)).map_err(io::Error::from)?;
    writeln!(writer)
}
