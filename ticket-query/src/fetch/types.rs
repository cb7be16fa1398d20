//! Ticket service response DTOs.
//!
//! These map directly to the `leftTicket/query` JSON envelope. Fields are
//! `Option` or defaulted liberally because the service omits rather than
//! nulls them, especially on failure.

use serde::Deserialize;

use crate::domain::{SeatCounts, TicketRecord};

/// Top-level response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct LeftTicketResponse {
    /// Whether the query succeeded.
    #[serde(default)]
    pub status: bool,

    /// One item per train. Absent on failure.
    #[serde(default)]
    pub data: Option<Vec<LeftTicketItem>>,

    /// Human-readable diagnostics.
    #[serde(default)]
    pub messages: Vec<String>,
}

impl LeftTicketResponse {
    /// Diagnostic text for a failed response.
    pub fn failure_message(&self) -> String {
        if self.messages.is_empty() {
            "ticket service returned no data".to_string()
        } else {
            self.messages.join("; ")
        }
    }
}

/// One train in the response. Booking tokens and captions alongside the
/// DTO are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LeftTicketItem {
    #[serde(rename = "queryLeftNewDTO")]
    pub query_left_new_dto: LeftTicketDto,
}

/// Availability snapshot for one train. Only the columns the table shows
/// are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct LeftTicketDto {
    pub station_train_code: String,
    pub end_station_name: String,
    pub from_station_name: String,
    pub start_time: String,
    pub arrive_time: String,
    /// Elapsed time, `HH:MM`.
    pub lishi: String,

    #[serde(default = "unavailable")]
    pub swz_num: String,
    #[serde(default = "unavailable")]
    pub tz_num: String,
    #[serde(default = "unavailable")]
    pub zy_num: String,
    #[serde(default = "unavailable")]
    pub ze_num: String,
    #[serde(default = "unavailable")]
    pub rw_num: String,
    #[serde(default = "unavailable")]
    pub yw_num: String,
    #[serde(default = "unavailable")]
    pub rz_num: String,
    #[serde(default = "unavailable")]
    pub yz_num: String,
    #[serde(default = "unavailable")]
    pub wz_num: String,
}

fn unavailable() -> String {
    "--".to_string()
}

impl From<LeftTicketDto> for TicketRecord {
    fn from(dto: LeftTicketDto) -> Self {
        TicketRecord {
            train_code: dto.station_train_code,
            from_station: dto.from_station_name,
            to_station: dto.end_station_name,
            departure: dto.start_time,
            arrival: dto.arrive_time,
            duration: dto.lishi,
            seats: SeatCounts {
                business: dto.swz_num,
                super_first: dto.tz_num,
                first: dto.zy_num,
                second: dto.ze_num,
                soft_sleeper: dto.rw_num,
                hard_sleeper: dto.yw_num,
                soft_seat: dto.rz_num,
                hard_seat: dto.yz_num,
                standing: dto.wz_num,
            },
        }
    }
}
