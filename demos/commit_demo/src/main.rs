// Copyright 2026 the Vitric Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-thread demo of the build → commit → adopt → branch loop.
//!
//! A builder thread publishes a handful of scene revisions, each branched
//! off the previous snapshot; the main thread adopts them as they arrive,
//! logging trace events through a
//! [`PrettyPrintSink`](vitric_debug::pretty::PrettyPrintSink), and finally
//! dumps the last adopted tree as JSON.

use std::thread;

use kurbo::Rect;
use vitric_core::node::SceneNode;
use vitric_core::seal::Sealable;
use vitric_core::snapshot::Snapshot;
use vitric_core::trace::Tracer;
use vitric_debug::dump::write_tree_json;
use vitric_debug::pretty::PrettyPrintSink;
use vitric_handoff::channel;

const REVISION_COUNT: u64 = 5;

fn main() {
    let (mut publisher, mut consumer) = channel::<SceneNode>();

    // -- builder thread ----------------------------------------------------
    let builder = thread::spawn(move || {
        let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
        let mut last: Option<Snapshot<SceneNode>> = None;

        for i in 0..REVISION_COUNT {
            // Branch the next working copy off the last committed tree (or
            // start fresh on the first revision).
            let mut root = match &last {
                Some(snapshot) => snapshot.branch(),
                None => initial_scene(),
            };

            // Simulated per-frame edits: fade the first child, grow a row.
            root.child_mut(0)
                .props_mut()
                .set_opacity(1.0 - 0.15 * i as f32);
            let mut badge = SceneNode::new();
            badge
                .props_mut()
                .set_frame(Rect::new(10.0 * i as f64, 0.0, 10.0 * i as f64 + 8.0, 8.0));
            root.push_child(badge);

            let mut tracer = Tracer::new(&mut pretty);
            let (_, snapshot) = publisher.publish_traced(root, &mut tracer);
            last = Some(snapshot);
        }
    });

    // -- consumer (main thread) --------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut final_snapshot = None;

    while final_snapshot.is_none() {
        let mut tracer = Tracer::new(&mut pretty);
        if let Some((revision, snapshot)) = consumer.adopt_traced(&mut tracer) {
            assert!(snapshot.is_sealed(), "adopted trees are always sealed");
            if revision.0 == REVISION_COUNT {
                final_snapshot = Some(snapshot);
            }
        } else {
            thread::yield_now();
        }
    }

    builder.join().expect("builder thread panicked");

    let snapshot = final_snapshot.expect("final revision was adopted");
    println!(
        "adopted revision {REVISION_COUNT}: {} nodes, sealed={}",
        snapshot.subtree_len(),
        snapshot.is_sealed()
    );

    let mut stdout = std::io::stdout();
    write_tree_json(snapshot.root(), &mut stdout).expect("failed to write tree JSON");
}

/// Root with two content children, the way a first frame might look.
fn initial_scene() -> SceneNode {
    let mut hero = SceneNode::new();
    hero.props_mut().set_frame(Rect::new(0.0, 0.0, 800.0, 450.0));

    let mut overlay = SceneNode::new();
    overlay
        .props_mut()
        .set_frame(Rect::new(0.0, 450.0, 800.0, 600.0));
    overlay.props_mut().set_hidden(true);

    let mut root = SceneNode::new();
    root.props_mut().set_frame(Rect::new(0.0, 0.0, 800.0, 600.0));
    root.push_child(hero);
    root.push_child(overlay);
    root
}
