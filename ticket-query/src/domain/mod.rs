//! Domain types for the ticket query pipeline.
//!
//! Types here enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod date;
mod station;
mod ticket;
mod train_type;

pub use date::{InvalidDate, TravelDate};
pub use station::{InvalidStationKey, Station, StationKey};
pub use ticket::{SeatCounts, TicketRecord};
pub use train_type::{TrainCategory, TrainTypeFilter, TrainTypeFlag};
