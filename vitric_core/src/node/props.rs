// Copyright 2026 the Vitric Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-node visual properties.

use core::fmt;

use kurbo::Rect;

use crate::seal::{Seal, Sealable};

/// Visual properties of a scene node.
///
/// All setters check the embedded guard first; once sealed, the payload can
/// no longer change. Cascade policy: **shallow** — `Props` owns no sealable
/// sub-objects, so sealing freezes only this bag.
pub struct Props {
    seal: Seal,
    frame: Rect,
    opacity: f32,
    hidden: bool,
}

impl Props {
    /// Creates unsealed props with a zero frame, full opacity, and the
    /// hidden flag cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seal: Seal::new(),
            frame: Rect::ZERO,
            opacity: 1.0,
            hidden: false,
        }
    }

    // -- Getters (read-only, always allowed) --

    /// Returns the frame rectangle.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// Returns the opacity.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Returns whether the node is hidden.
    #[must_use]
    pub const fn hidden(&self) -> bool {
        self.hidden
    }

    // -- Setters (guard-checked) --

    /// Sets the frame rectangle.
    ///
    /// # Panics
    ///
    /// Panics if these props are sealed.
    pub fn set_frame(&mut self, frame: Rect) {
        self.seal.ensure_unsealed();
        self.frame = frame;
    }

    /// Sets the opacity.
    ///
    /// # Panics
    ///
    /// Panics if these props are sealed.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.seal.ensure_unsealed();
        self.opacity = opacity;
    }

    /// Sets the hidden flag.
    ///
    /// # Panics
    ///
    /// Panics if these props are sealed.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.seal.ensure_unsealed();
        self.hidden = hidden;
    }
}

impl Default for Props {
    fn default() -> Self {
        Self::new()
    }
}

impl Sealable for Props {
    fn seal(&mut self) {
        self.seal.seal();
    }

    fn is_sealed(&self) -> bool {
        self.seal.is_sealed()
    }
}

impl Clone for Props {
    /// The copy carries the payload but starts unsealed, whatever the
    /// original's state.
    fn clone(&self) -> Self {
        Self {
            seal: Seal::new(),
            frame: self.frame,
            opacity: self.opacity,
            hidden: self.hidden,
        }
    }

    /// Guard-checked assignment: the check precedes every write, and the
    /// target's guard is excluded from the copy.
    ///
    /// # Panics
    ///
    /// Panics if `self` is sealed, regardless of `source`'s state.
    fn clone_from(&mut self, source: &Self) {
        self.seal.ensure_unsealed();
        self.frame = source.frame;
        self.opacity = source.opacity;
        self.hidden = source.hidden;
    }
}

/// Equality compares the payload only; the guard carries no identity.
impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        self.frame == other.frame && self.opacity == other.opacity && self.hidden == other.hidden
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Props")
            .field("seal", &self.seal)
            .field("frame", &self.frame)
            .field("opacity", &self.opacity)
            .field("hidden", &self.hidden)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unsealed_and_neutral() {
        let props = Props::new();
        assert!(!props.is_sealed());
        assert_eq!(props.frame(), Rect::ZERO);
        assert_eq!(props.opacity(), 1.0);
        assert!(!props.hidden());
    }

    #[test]
    fn setters_apply_while_unsealed() {
        let mut props = Props::new();
        props.set_frame(Rect::new(0.0, 0.0, 100.0, 50.0));
        props.set_opacity(0.5);
        props.set_hidden(true);
        assert_eq!(props.frame(), Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(props.opacity(), 0.5);
        assert!(props.hidden());
    }

    #[test]
    #[should_panic(expected = "attempt to mutate a sealed object")]
    fn set_opacity_panics_once_sealed() {
        let mut props = Props::new();
        props.set_opacity(0.5);
        props.seal();
        props.set_opacity(0.7);
    }

    #[test]
    #[should_panic(expected = "attempt to mutate a sealed object")]
    fn set_frame_panics_once_sealed() {
        let mut props = Props::new();
        props.seal();
        props.set_frame(Rect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "attempt to mutate a sealed object")]
    fn set_hidden_panics_once_sealed() {
        let mut props = Props::new();
        props.seal();
        props.set_hidden(true);
    }

    #[test]
    fn clone_carries_payload_but_not_sealed_state() {
        let mut original = Props::new();
        original.set_opacity(0.25);
        original.seal();

        let mut copy = original.clone();
        assert!(!copy.is_sealed());
        assert_eq!(copy.opacity(), 0.25);

        // The copy is independently mutable.
        copy.set_opacity(0.75);
        assert_eq!(copy.opacity(), 0.75);
        assert_eq!(original.opacity(), 0.25);
    }

    #[test]
    fn clone_from_copies_payload_into_unsealed_target() {
        let mut target = Props::new();
        let mut source = Props::new();
        source.set_opacity(0.5);
        source.set_hidden(true);
        source.seal();

        target.clone_from(&source);
        assert_eq!(target.opacity(), 0.5);
        assert!(target.hidden());
        // Assignment never implicitly seals.
        assert!(!target.is_sealed());
    }

    #[test]
    #[should_panic(expected = "attempt to mutate a sealed object")]
    fn clone_from_panics_on_sealed_target() {
        let mut target = Props::new();
        target.seal();
        let source = Props::new();
        target.clone_from(&source);
    }

    #[test]
    fn equality_ignores_the_guard() {
        let mut a = Props::new();
        let b = Props::new();
        a.seal();
        assert_eq!(a, b);
    }
}
