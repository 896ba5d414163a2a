// Copyright 2026 the Vitric Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builder-to-presenter snapshot handoff.
//!
//! A [`channel`] is a single-producer/single-consumer *latest-value slot*
//! for sealed trees. The builder side owns the only mutable working copy of
//! a scene; [`Publisher::publish`] commits it into a
//! [`Snapshot`](vitric_core::snapshot::Snapshot) (sealing it in the
//! process) and stores it in the slot, where it replaces any snapshot the
//! consumer has not picked up yet — the presenter wants the latest scene,
//! not a backlog. A replaced snapshot stays alive for as long as anything
//! still holds its handle.
//!
//! The slot's mutex is the acquire/release edge of the handoff: a consumer
//! that observes revision `n` also observes every write the builder made
//! before publishing `n`. The seal guards embedded in the tree provide no
//! synchronization of their own; they exist to turn a builder that keeps
//! mutating after publish into an immediate panic instead of a torn read.
//!
//! Neither endpoint is cloneable. Snapshots themselves are, so the consumer
//! may fan adopted trees out to further reader threads freely.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use vitric_core::seal::Sealable;
use vitric_core::snapshot::{Revision, Snapshot};
use vitric_core::trace::{AdoptEvent, PublishEvent, Tracer};

/// Creates a connected publisher/consumer pair around an empty slot.
#[must_use]
pub fn channel<T: Sealable>() -> (Publisher<T>, Consumer<T>) {
    let shared = Arc::new(Mutex::new(Slot { latest: None }));
    (
        Publisher {
            shared: Arc::clone(&shared),
            next: 1,
        },
        Consumer {
            shared,
            adopted: None,
        },
    )
}

/// Shared latest-value slot. Always a consistent `Option`, even if a peer
/// panicked while holding the lock.
struct Slot<T: Sealable> {
    latest: Option<(Revision, Snapshot<T>)>,
}

fn lock_slot<T: Sealable>(shared: &Mutex<Slot<T>>) -> MutexGuard<'_, Slot<T>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The builder-side endpoint: commits working copies and publishes them.
pub struct Publisher<T: Sealable> {
    shared: Arc<Mutex<Slot<T>>>,
    next: u64,
}

impl<T: Sealable> Publisher<T> {
    /// Seals `root`, publishes it, and returns its revision together with
    /// the builder's own handle to the published snapshot.
    ///
    /// The returned snapshot is what the builder branches the next working
    /// copy from ([`Snapshot::branch`]).
    pub fn publish(&mut self, root: T) -> (Revision, Snapshot<T>) {
        self.publish_traced(root, &mut Tracer::none())
    }

    /// Like [`publish`](Self::publish), emitting a
    /// [`PublishEvent`] to `tracer`.
    pub fn publish_traced(
        &mut self,
        root: T,
        tracer: &mut Tracer<'_>,
    ) -> (Revision, Snapshot<T>) {
        let snapshot = Snapshot::commit(root);
        let revision = Revision(self.next);
        self.next += 1;

        lock_slot(&self.shared).latest = Some((revision, snapshot.clone()));
        tracer.publish(&PublishEvent { revision });
        (revision, snapshot)
    }
}

impl<T: Sealable> fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

/// The presenter-side endpoint: picks up the newest published snapshot.
pub struct Consumer<T: Sealable> {
    shared: Arc<Mutex<Slot<T>>>,
    adopted: Option<Revision>,
}

impl<T: Sealable> Consumer<T> {
    /// Returns the newest published snapshot, if any, without recording the
    /// pickup.
    #[must_use]
    pub fn latest(&self) -> Option<Snapshot<T>> {
        lock_slot(&self.shared)
            .latest
            .as_ref()
            .map(|(_, snapshot)| snapshot.clone())
    }

    /// Returns the newest snapshot only if it is newer than the last one
    /// this consumer adopted, and records the pickup.
    pub fn adopt(&mut self) -> Option<(Revision, Snapshot<T>)> {
        self.adopt_traced(&mut Tracer::none())
    }

    /// Like [`adopt`](Self::adopt), emitting an [`AdoptEvent`] to `tracer`.
    pub fn adopt_traced(&mut self, tracer: &mut Tracer<'_>) -> Option<(Revision, Snapshot<T>)> {
        let newest = {
            let slot = lock_slot(&self.shared);
            slot.latest
                .as_ref()
                .map(|(revision, snapshot)| (*revision, snapshot.clone()))
        };
        let (revision, snapshot) = newest?;
        if self.adopted.is_some_and(|seen| seen >= revision) {
            return None;
        }
        self.adopted = Some(revision);
        tracer.adopt(&AdoptEvent { revision });
        Some((revision, snapshot))
    }

    /// Returns the revision of the last adopted snapshot, if any.
    #[must_use]
    pub fn adopted(&self) -> Option<Revision> {
        self.adopted
    }
}

impl<T: Sealable> fmt::Debug for Consumer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer")
            .field("adopted", &self.adopted)
            .finish_non_exhaustive()
    }
}
