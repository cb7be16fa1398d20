//! Ticket availability fetching.
//!
//! The pipeline only sees the [`Fetcher`] trait: give it a fully-formed
//! query URL, get back a [`QueryResult`]. [`HttpFetcher`] is the real
//! implementation; tests substitute stubs.

mod client;
mod error;
mod types;

use std::future::Future;

use crate::domain::TicketRecord;

pub use client::{FetcherConfig, HttpFetcher};
pub use error::FetchError;
pub use types::{LeftTicketDto, LeftTicketItem, LeftTicketResponse};

/// Outcome of one remote query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// Trains in the service's response order.
    Success(Vec<TicketRecord>),
    /// Diagnostic message to show the user.
    Failure(String),
}

impl QueryResult {
    /// The success flag.
    pub fn status(&self) -> bool {
        matches!(self, QueryResult::Success(_))
    }
}

/// Performs the network call for a query URL.
///
/// Transport, retries and wire-format decoding all live behind this
/// trait. Failures are reported as [`QueryResult::Failure`], never as
/// panics.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = QueryResult> + Send;
}
