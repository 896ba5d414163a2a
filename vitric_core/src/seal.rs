// Copyright 2026 the Vitric Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seal-once mutability guard.
//!
//! A [`Seal`] is an embeddable marker that records whether its owning object
//! has been permanently frozen. Objects embed one guard each, check it at the
//! top of every mutating method, and call [`seal`](Seal::seal) exactly once
//! when construction is finished — after which the object may be shared
//! across threads for read-only access with no further synchronization.
//!
//! The guard is a plain `bool`, not an atomic. Sealing requires `&mut`
//! access, and everything after publication goes through shared references,
//! so a race on the flag cannot be expressed in safe Rust. Whatever transport
//! publishes the sealed object to other threads (see
//! [`Snapshot`](crate::snapshot::Snapshot)) supplies the happens-before edge;
//! the guard's job is only to make an in-process mutation attempt fail loudly
//! if the single-owner discipline is violated.
//!
//! # Copies and assignment
//!
//! Copying a guard — and by extension, cloning an object that embeds one —
//! always yields an *unsealed* result: a copy is a fresh working version
//! branched off a frozen original, not a second frozen original. Assignment
//! is the opposite edge of the same contract: writing into a sealed owner is
//! a mutation and must be refused, which is why [`Clone::clone_from`] on the
//! guard panics when the target is sealed, regardless of the source's state.

use core::fmt;

/// Tracks whether the owning object has been permanently frozen.
///
/// Two states, one transition: `Unsealed` (initial) → `Sealed` (terminal).
/// There is no way back; a new mutable version is obtained by cloning, which
/// always produces an unsealed copy.
pub struct Seal {
    sealed: bool,
}

impl Seal {
    /// Creates a fresh, unsealed guard.
    #[must_use]
    pub const fn new() -> Self {
        Self { sealed: false }
    }

    /// Returns whether the owning object is frozen. No side effects.
    #[inline]
    #[must_use]
    pub const fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Freezes the owning object. Idempotent and irreversible.
    #[inline]
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Asserts that the owning object is still mutable.
    ///
    /// Owners call this at the top of every mutating method, before touching
    /// any field.
    ///
    /// # Panics
    ///
    /// Panics with "attempt to mutate a sealed object" if sealed. This is a
    /// programmer error (use-after-freeze), not a recoverable condition, and
    /// fires identically in debug and release builds.
    #[inline]
    pub fn ensure_unsealed(&self) {
        assert!(!self.sealed, "attempt to mutate a sealed object");
    }
}

impl Default for Seal {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Seal {
    /// A copied guard is always unsealed: the copy is a new, independently
    /// mutable version, whatever the original's state.
    fn clone(&self) -> Self {
        Self::new()
    }

    /// The assignment half of the contract: a sealed target refuses the
    /// write before anything else happens, and an unsealed target stays
    /// unsealed — the flag itself is never copied.
    ///
    /// # Panics
    ///
    /// Panics if `self` is sealed, regardless of `source`'s state.
    fn clone_from(&mut self, source: &Self) {
        self.ensure_unsealed();
        _ = source;
    }
}

impl fmt::Debug for Seal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sealed {
            write!(f, "Seal(sealed)")
        } else {
            write!(f, "Seal(unsealed)")
        }
    }
}

/// Contract for objects that embed a [`Seal`].
///
/// Implementors must:
///
/// - check [`ensure_unsealed`](Sealable::ensure_unsealed) at the top of every
///   method that mutates instance state;
/// - route [`Clone::clone_from`] through the guard *before* copying any other
///   field, and copy all-or-nothing so a refused assignment alters nothing;
/// - document their cascade policy: whether [`seal`](Sealable::seal) freezes
///   owned sub-objects too (deep) or only the object itself (shallow). Deep
///   implementations seal bottom-up, so no child is reachable-but-unsealed
///   once the parent reports sealed.
pub trait Sealable {
    /// Freezes this object. Idempotent and irreversible.
    fn seal(&mut self);

    /// Returns whether this object is frozen.
    fn is_sealed(&self) -> bool;

    /// Asserts that this object is still mutable.
    ///
    /// # Panics
    ///
    /// Panics with "attempt to mutate a sealed object" if sealed.
    fn ensure_unsealed(&self) {
        assert!(!self.is_sealed(), "attempt to mutate a sealed object");
    }
}

impl Sealable for Seal {
    #[inline]
    fn seal(&mut self) {
        self.sealed = true;
    }

    #[inline]
    fn is_sealed(&self) -> bool {
        self.sealed
    }
}
