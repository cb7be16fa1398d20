//! The full query pipeline: resolve, normalize, dispatch, filter, render.

use std::io::Write;

use tracing::{debug, error, info};

use crate::domain::{InvalidDate, TrainTypeFilter, TravelDate};
use crate::fetch::{Fetcher, QueryResult};
use crate::render::{Color, Palette, render_tickets};
use crate::stations::StationTable;

use super::dispatch::{DEFAULT_QUERY_ENDPOINT, TicketQuery};

/// Errors that end a query without a table.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The date matched none of the accepted shapes
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),

    /// The fetcher reported failure
    #[error("{0}")]
    RemoteQuery(String),

    /// Writing output failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// What the user asked for.
#[derive(Debug, Clone)]
pub struct TicketRequest {
    /// Origin, as a Latin-letter code or native name.
    pub from: String,
    /// Destination, as a Latin-letter code or native name.
    pub to: String,
    pub train_types: TrainTypeFilter,
    /// Raw date; today when absent.
    pub date: Option<String>,
}

impl TicketRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            train_types: TrainTypeFilter::none(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_train_types(mut self, train_types: TrainTypeFilter) -> Self {
        self.train_types = train_types;
        self
    }
}

/// Runs ticket queries against a station table and a fetcher.
pub struct TicketPipeline<'a, F> {
    stations: &'a StationTable,
    fetcher: &'a F,
    endpoint: String,
    palette: Palette,
}

impl<'a, F: Fetcher> TicketPipeline<'a, F> {
    pub fn new(stations: &'a StationTable, fetcher: &'a F) -> Self {
        Self {
            stations,
            fetcher,
            endpoint: DEFAULT_QUERY_ENDPOINT.to_string(),
            palette: Palette::colored(),
        }
    }

    /// Query a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Run the query, writing echoed station names and the table to `out`.
    ///
    /// Returns the number of rows rendered.
    pub async fn run<W: Write>(
        &self,
        request: &TicketRequest,
        out: &mut W,
    ) -> Result<usize, QueryError> {
        let date = TravelDate::from_optional(request.date.as_deref())?;

        let from = self.stations.resolve(&request.from);
        if let Some(name) = from.echo() {
            writeln!(out, "{name}")?;
        }
        let to = self.stations.resolve(&request.to);
        if let Some(name) = to.echo() {
            writeln!(out, "{name}")?;
        }

        let query = TicketQuery::new(date, from.key(), to.key());
        let records = match query.dispatch(self.fetcher, &self.endpoint).await {
            QueryResult::Success(records) => records,
            QueryResult::Failure(message) => return Err(QueryError::RemoteQuery(message)),
        };

        let selected = request.train_types.selected();
        let filtered = request.train_types.apply(&records);
        debug!(
            fetched = records.len(),
            kept = filtered.len(),
            category = ?selected,
            "filtered trains"
        );

        write!(out, "{}", render_tickets(filtered.iter().copied(), &self.palette))?;
        info!(rows = filtered.len(), date = %query.date, "rendered ticket table");

        Ok(filtered.len())
    }

    /// Run the query and report any failure to `out` as a red diagnostic.
    ///
    /// Returns `true` if a table was rendered.
    pub async fn query_tickets<W: Write>(&self, request: &TicketRequest, out: &mut W) -> bool {
        match self.run(request, out).await {
            Ok(_) => true,
            Err(QueryError::Output(e)) => {
                error!(error = %e, "failed to write output");
                false
            }
            Err(e) => {
                let message = self.palette.paint(&e.to_string(), Color::Red);
                if let Err(write_err) = writeln!(out, "{message}") {
                    error!(error = %write_err, "failed to write diagnostic");
                }
                false
            }
        }
    }
}

/// Resolve, fetch and print in one call with default endpoint and colors.
pub async fn query_tickets<F: Fetcher, W: Write>(
    stations: &StationTable,
    fetcher: &F,
    request: &TicketRequest,
    out: &mut W,
) -> bool {
    TicketPipeline::new(stations, fetcher)
        .query_tickets(request, out)
        .await
}
