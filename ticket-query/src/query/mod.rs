//! Ticket query pipeline.
//!
//! Turns a user's `(from, to, train types, date)` into a rendered
//! availability table, or a diagnostic explaining why it couldn't.

mod dispatch;
mod pipeline;

#[cfg(test)]
mod pipeline_tests;

pub use dispatch::{DEFAULT_QUERY_ENDPOINT, TicketQuery};
pub use pipeline::{QueryError, TicketPipeline, TicketRequest, query_tickets};
