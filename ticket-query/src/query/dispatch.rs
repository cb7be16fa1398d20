//! Query construction and dispatch.

use tracing::{debug, warn};

use crate::domain::{StationKey, TravelDate};
use crate::fetch::{Fetcher, QueryResult};

/// Default `leftTicket/query` endpoint.
pub const DEFAULT_QUERY_ENDPOINT: &str = "https://kyfw.12306.cn/otn/leftTicket/query";

/// Adult fare purpose code.
const PURPOSE_CODE: &str = "ADULT";

/// One remote availability query.
///
/// Keys are optional: an unresolved station is still sent, as an empty
/// parameter, and the remote service decides what to make of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketQuery {
    pub date: TravelDate,
    pub from_key: Option<StationKey>,
    pub to_key: Option<StationKey>,
}

impl TicketQuery {
    pub fn new(date: TravelDate, from_key: Option<StationKey>, to_key: Option<StationKey>) -> Self {
        Self {
            date,
            from_key,
            to_key,
        }
    }

    /// The full query URL against `endpoint`.
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{endpoint}?leftTicketDTO.train_date={date}\
             &leftTicketDTO.from_station={from}\
             &leftTicketDTO.to_station={to}\
             &purpose_codes={PURPOSE_CODE}",
            date = self.date,
            from = key_param(self.from_key),
            to = key_param(self.to_key),
        )
    }

    /// Send the query through `fetcher` and hand back its result unchanged.
    pub async fn dispatch<F: Fetcher>(&self, fetcher: &F, endpoint: &str) -> QueryResult {
        if self.from_key.is_none() || self.to_key.is_none() {
            warn!(
                from = ?self.from_key,
                to = ?self.to_key,
                "dispatching query with unresolved station"
            );
        }

        let url = self.url(endpoint);
        debug!(%url, "dispatching ticket query");
        fetcher.fetch(&url).await
    }
}

fn key_param(key: Option<StationKey>) -> String {
    key.map(|k| k.to_string()).unwrap_or_default()
}
