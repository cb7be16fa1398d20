//! Train ticket availability lookup.
//!
//! Resolves an origin/destination station pair and a travel date into a
//! query against the 12306 ticket service, then renders the (optionally
//! train-type filtered) results as a terminal table.

pub mod domain;
pub mod fetch;
pub mod query;
pub mod render;
pub mod stations;
