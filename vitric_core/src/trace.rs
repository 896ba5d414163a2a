// Copyright 2026 the Vitric Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the commit pipeline.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! handoff instrumentation calls at each stage. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.

use crate::snapshot::Revision;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the builder publishes a freshly sealed snapshot.
#[derive(Clone, Copy, Debug)]
pub struct PublishEvent {
    /// Revision assigned to the published snapshot.
    pub revision: Revision,
}

/// Emitted when the consumer adopts a snapshot it had not seen before.
#[derive(Clone, Copy, Debug)]
pub struct AdoptEvent {
    /// Revision of the adopted snapshot.
    pub revision: Revision,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the commit pipeline.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a snapshot is published.
    fn on_publish(&mut self, e: &PublishEvent) {
        _ = e;
    }

    /// Called when the consumer adopts a new snapshot.
    fn on_adopt(&mut self, e: &AdoptEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PublishEvent`].
    #[inline]
    pub fn publish(&mut self, e: &PublishEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_publish(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AdoptEvent`].
    #[inline]
    pub fn adopt(&mut self, e: &AdoptEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_adopt(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_publish(&PublishEvent {
            revision: Revision(1),
        });
        sink.on_adopt(&AdoptEvent {
            revision: Revision(1),
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.publish(&PublishEvent {
            revision: Revision(7),
        });
        tracer.adopt(&AdoptEvent {
            revision: Revision(7),
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            published: Vec<u64>,
            adopted: Vec<u64>,
        }
        impl TraceSink for RecordingSink {
            fn on_publish(&mut self, e: &PublishEvent) {
                self.published.push(e.revision.0);
            }
            fn on_adopt(&mut self, e: &AdoptEvent) {
                self.adopted.push(e.revision.0);
            }
        }

        let mut sink = RecordingSink {
            published: Vec::new(),
            adopted: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.publish(&PublishEvent {
            revision: Revision(3),
        });
        tracer.adopt(&AdoptEvent {
            revision: Revision(3),
        });
        drop(tracer);
        assert_eq!(sink.published, &[3]);
        assert_eq!(sink.adopted, &[3]);
    }
}
