//! End-to-end tests for the query pipeline with a stub fetcher.

use super::*;
use crate::domain::{SeatCounts, Station, StationKey, TicketRecord, TrainCategory, TrainTypeFilter};
use crate::fetch::{Fetcher, QueryResult};
use crate::render::Palette;
use crate::stations::StationTable;
use std::sync::Mutex;

fn stations() -> StationTable {
    let station = |abbr: &str, name: &str, key: &str, code: &str| Station {
        name: name.to_string(),
        code: code.to_string(),
        abbreviation: abbr.to_string(),
        key: StationKey::parse(key).unwrap(),
    };
    StationTable::from_stations(&[
        station("bjn", "北京南", "VNP", "beijingnan"),
        station("shh", "上海虹桥", "AOH", "shanghaihongqiao"),
    ])
}

fn record(code: &str, business: &str) -> TicketRecord {
    TicketRecord {
        train_code: code.to_string(),
        from_station: "北京南".to_string(),
        to_station: "上海虹桥".to_string(),
        departure: "06:43".to_string(),
        arrival: "12:39".to_string(),
        duration: "05:56".to_string(),
        seats: SeatCounts {
            business: business.to_string(),
            super_first: "--".into(),
            first: "有".into(),
            second: "有".into(),
            soft_sleeper: "--".into(),
            hard_sleeper: "--".into(),
            soft_seat: "--".into(),
            hard_seat: "--".into(),
            standing: "无".into(),
        },
    }
}

/// Stub fetcher that returns a canned result and records requested URLs.
struct StubFetcher {
    result: QueryResult,
    urls: Mutex<Vec<String>>,
}

impl StubFetcher {
    fn new(result: QueryResult) -> Self {
        Self {
            result,
            urls: Mutex::new(Vec::new()),
        }
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> QueryResult {
        self.urls.lock().unwrap().push(url.to_string());
        self.result.clone()
    }
}

/// Lines of the rendered table that are data rows (first line of each row).
fn data_rows(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.starts_with('|'))
        .skip(1)
        .filter(|line| line.split('|').nth(1).is_some_and(|c| !c.trim().is_empty()))
        .collect()
}

#[tokio::test]
async fn filtered_render_contains_only_matching_train() {
    let table = stations();
    let fetcher = StubFetcher::new(QueryResult::Success(vec![
        record("G101", "3"),
        record("D311", "--"),
    ]));
    let pipeline = TicketPipeline::new(&table, &fetcher).with_palette(Palette::plain());
    let request = TicketRequest::new("北京南", "上海虹桥")
        .with_date("2016-7-18")
        .with_train_types(TrainTypeFilter::from_enabled(&[TrainCategory::HighSpeed]));

    let mut out = Vec::new();
    let rows = pipeline.run(&request, &mut out).await.unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(rows, 1);
    let rows = data_rows(&output);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("G101"));
    assert!(!output.contains("D311"));
}

#[tokio::test]
async fn query_url_uses_resolved_keys_and_normalized_date() {
    let table = stations();
    let fetcher = StubFetcher::new(QueryResult::Success(Vec::new()));
    let pipeline = TicketPipeline::new(&table, &fetcher).with_endpoint("http://localhost/query");
    let request = TicketRequest::new("beijingnan", "上海虹桥").with_date("20160718");

    let mut out = Vec::new();
    pipeline.run(&request, &mut out).await.unwrap();

    assert_eq!(
        fetcher.urls(),
        [TicketQuery::new(
            crate::domain::TravelDate::normalize("2016-07-18").unwrap(),
            StationKey::parse("VNP").ok(),
            StationKey::parse("AOH").ok(),
        )
        .url("http://localhost/query")]
    );
}

#[tokio::test]
async fn code_input_echoes_native_name() {
    let table = stations();
    let fetcher = StubFetcher::new(QueryResult::Success(Vec::new()));
    let pipeline = TicketPipeline::new(&table, &fetcher).with_palette(Palette::plain());
    let request = TicketRequest::new("bjn", "上海虹桥").with_date("2016-07-18");

    let mut out = Vec::new();
    pipeline.run(&request, &mut out).await.unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(output.lines().next(), Some("北京南"));
}

#[tokio::test]
async fn invalid_date_short_circuits_before_dispatch() {
    let table = stations();
    let fetcher = StubFetcher::new(QueryResult::Success(vec![record("G1", "1")]));
    let pipeline = TicketPipeline::new(&table, &fetcher).with_palette(Palette::plain());
    let request = TicketRequest::new("北京南", "上海虹桥").with_date("2016/07/18");

    let mut out = Vec::new();
    let ok = pipeline.query_tickets(&request, &mut out).await;
    let output = String::from_utf8(out).unwrap();

    assert!(!ok);
    assert!(fetcher.urls().is_empty());
    assert_eq!(
        output.trim_end(),
        "date is invalid, you should use '2016-07-18' or '20160718' or '2016-7-18'"
    );
}

#[tokio::test]
async fn diagnostics_are_red_when_colored() {
    let table = stations();
    let fetcher = StubFetcher::new(QueryResult::Success(Vec::new()));
    let request = TicketRequest::new("北京南", "上海虹桥").with_date("bad");

    let mut out = Vec::new();
    let ok = query_tickets(&table, &fetcher, &request, &mut out).await;
    let output = String::from_utf8(out).unwrap();

    assert!(!ok);
    assert!(output.starts_with("\x1b[31mdate is invalid"));
}

#[tokio::test]
async fn remote_failure_prints_message_and_no_table() {
    let table = stations();
    let fetcher = StubFetcher::new(QueryResult::Failure("系统忙，请稍后重试".to_string()));
    let pipeline = TicketPipeline::new(&table, &fetcher).with_palette(Palette::plain());
    let request = TicketRequest::new("北京南", "上海虹桥").with_date("2016-07-18");

    let mut out = Vec::new();
    let ok = pipeline.query_tickets(&request, &mut out).await;
    let output = String::from_utf8(out).unwrap();

    assert!(!ok);
    assert_eq!(output.trim_end(), "系统忙，请稍后重试");
    assert!(!output.contains('+'));
}

#[tokio::test]
async fn unresolved_station_is_still_dispatched() {
    let table = stations();
    let fetcher = StubFetcher::new(QueryResult::Success(Vec::new()));
    let pipeline = TicketPipeline::new(&table, &fetcher);
    let request = TicketRequest::new("nowhere", "上海虹桥").with_date("2016-07-18");

    let mut out = Vec::new();
    assert!(pipeline.query_tickets(&request, &mut out).await);

    let urls = fetcher.urls();
    assert_eq!(urls.len(), 1);
    assert!(urls[0].contains("from_station=&"));
}

#[tokio::test]
async fn empty_filter_result_renders_empty_table() {
    let table = stations();
    let fetcher = StubFetcher::new(QueryResult::Success(vec![record("G101", "3")]));
    let pipeline = TicketPipeline::new(&table, &fetcher).with_palette(Palette::plain());
    let request = TicketRequest::new("北京南", "上海虹桥")
        .with_date("2016-07-18")
        .with_train_types(TrainTypeFilter::from_enabled(&[TrainCategory::Fast]));

    let mut out = Vec::new();
    let rows = pipeline.run(&request, &mut out).await.unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(rows, 0);
    assert!(output.contains("车次"));
    assert!(data_rows(&output).is_empty());
}

#[tokio::test]
async fn unfiltered_render_keeps_response_order() {
    let table = stations();
    let fetcher = StubFetcher::new(QueryResult::Success(vec![
        record("K1", "--"),
        record("G2", "1"),
        record("D3", "2"),
    ]));
    let pipeline = TicketPipeline::new(&table, &fetcher).with_palette(Palette::plain());
    let request = TicketRequest::new("北京南", "上海虹桥").with_date("2016-07-18");

    let mut out = Vec::new();
    assert_eq!(pipeline.run(&request, &mut out).await.unwrap(), 3);
    let output = String::from_utf8(out).unwrap();

    let rows = data_rows(&output);
    assert_eq!(rows.len(), 3);
    assert!(rows[0].contains("K1"));
    assert!(rows[1].contains("G2"));
    assert!(rows[2].contains("D3"));
}
