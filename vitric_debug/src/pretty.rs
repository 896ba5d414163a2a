// Copyright 2026 the Vitric Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use vitric_core::trace::{AdoptEvent, PublishEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_publish(&mut self, e: &PublishEvent) {
        let _ = writeln!(self.writer, "[publish] revision={}", e.revision.0);
    }

    fn on_adopt(&mut self, e: &AdoptEvent) {
        let _ = writeln!(self.writer, "[adopt] revision={}", e.revision.0);
    }
}

#[cfg(test)]
mod tests {
    use vitric_core::snapshot::Revision;

    use super::*;

    #[test]
    fn pretty_print_publish() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_publish(&PublishEvent {
            revision: Revision(4),
        });
        let output = String::from_utf8(sink.writer).unwrap();
        assert!(output.contains("[publish]"), "got: {output}");
        assert!(output.contains("revision=4"), "got: {output}");
    }

    #[test]
    fn pretty_print_adopt() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_adopt(&AdoptEvent {
            revision: Revision(9),
        });
        let output = String::from_utf8(sink.writer).unwrap();
        assert!(output.contains("[adopt]"), "got: {output}");
        assert!(output.contains("revision=9"), "got: {output}");
    }
}
