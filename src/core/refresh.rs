//! Single-writer holder for the published catalog / schedule.
//!
//! A refresh is two steps: `begin()` hands out a ticket while the caller
//! fetches, then `on_result()` builds the new value from the complete row set
//! and replaces the published one in a single assignment. Readers never see
//! a half-built structure. A second `begin()` while a ticket is outstanding
//! is refused instead of racing the first fetch.

use crate::errors::{AppError, AppResult};
use tracing::{debug, warn};

/// Proof that a fetch is in flight. Consumed by `on_result` or `abandon`.
#[must_use]
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug)]
pub struct Refresher<T> {
    label: &'static str,
    published: T,
    in_flight: Option<u64>,
    generation: u64,
}

impl<T> Refresher<T> {
    pub fn new(label: &'static str, initial: T) -> Self {
        Self {
            label,
            published: initial,
            in_flight: None,
            generation: 0,
        }
    }

    pub fn current(&self) -> &T {
        &self.published
    }

    /// Number of values published through `on_result`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn begin(&mut self) -> AppResult<FetchTicket> {
        if self.in_flight.is_some() {
            return Err(AppError::RefreshInFlight(self.label.to_string()));
        }
        let ticket = FetchTicket {
            generation: self.generation + 1,
        };
        self.in_flight = Some(ticket.generation);
        Ok(ticket)
    }

    /// Build the new value from the full result set and publish it.
    pub fn on_result<R>(&mut self, ticket: FetchTicket, rows: &[R], build: impl FnOnce(&[R]) -> T) -> &T {
        let next = build(rows);
        self.finish(&ticket);
        self.published = next;
        self.generation = ticket.generation;
        debug!(source = self.label, generation = self.generation, rows = rows.len(), "published");
        &self.published
    }

    /// The fetch failed: keep whatever is published.
    pub fn abandon(&mut self, ticket: FetchTicket) {
        self.finish(&ticket);
    }

    /// Restore a previously published value (e.g. from cache) without a fetch.
    pub fn restore(&mut self, value: T) {
        self.published = value;
    }

    /// begin → fetch → on_result, or abandon on a fetch error.
    pub fn refresh<R>(
        &mut self,
        fetch: impl FnOnce() -> AppResult<Vec<R>>,
        build: impl FnOnce(&[R]) -> T,
    ) -> AppResult<&T> {
        let ticket = self.begin()?;
        match fetch() {
            Ok(rows) => Ok(self.on_result(ticket, &rows, build)),
            Err(e) => {
                warn!(source = self.label, error = %e, "fetch failed, keeping current data");
                self.abandon(ticket);
                Err(e)
            }
        }
    }

    fn finish(&mut self, ticket: &FetchTicket) {
        debug_assert_eq!(self.in_flight, Some(ticket.generation));
        self.in_flight = None;
    }
}
