//! Stale-response guard for generation forms.
//!
//! A form owns one [`FormState`]. Submitting while a request is outstanding is
//! refused, and a result is only accepted if its ticket is still the latest one
//! issued, so a reset (for example after the user changes) discards whatever was
//! in flight.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationTicket(u64);

impl GenerationTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket source.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn issue(&self) -> GenerationTicket {
        GenerationTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: GenerationTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Loading flag plus the last accepted result of one generation form.
#[derive(Debug)]
pub struct FormState<T> {
    sequencer: RequestSequencer,
    in_flight: Option<GenerationTicket>,
    result: Option<T>,
}

impl<T> Default for FormState<T> {
    fn default() -> Self {
        Self {
            sequencer: RequestSequencer::default(),
            in_flight: None,
            result: None,
        }
    }
}

impl<T> FormState<T> {
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Start a request. Returns `None` while another one is outstanding.
    pub fn begin(&mut self) -> Option<GenerationTicket> {
        if self.in_flight.is_some() {
            return None;
        }
        let ticket = self.sequencer.issue();
        self.in_flight = Some(ticket);
        Some(ticket)
    }

    /// Record the outcome for `ticket`. Stale tickets are ignored and return `false`.
    ///
    /// A `None` outcome is accepted and clears any previous result, matching the
    /// "generation failed, show nothing" behavior.
    pub fn complete(&mut self, ticket: GenerationTicket, outcome: Option<T>) -> bool {
        if !self.sequencer.is_current(ticket) {
            return false;
        }
        self.in_flight = None;
        self.result = outcome;
        true
    }

    /// Forget the current result and invalidate any outstanding ticket.
    pub fn reset(&mut self) {
        self.sequencer.issue();
        self.in_flight = None;
        self.result = None;
    }
}
