//! Ticket availability records.

/// Seat-class availability counts for one train.
///
/// Values are kept verbatim from the remote service: a literal count
/// (`"12"`), `"有"` (available, count unspecified), or `"--"`/`"无"`
/// (not offered / sold out).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatCounts {
    pub business: String,
    pub super_first: String,
    pub first: String,
    pub second: String,
    pub soft_sleeper: String,
    pub hard_sleeper: String,
    pub soft_seat: String,
    pub hard_seat: String,
    pub standing: String,
}

impl SeatCounts {
    /// All nine counts in table column order.
    pub fn in_column_order(&self) -> [&str; 9] {
        [
            &self.business,
            &self.super_first,
            &self.first,
            &self.second,
            &self.soft_sleeper,
            &self.hard_sleeper,
            &self.soft_seat,
            &self.hard_seat,
            &self.standing,
        ]
    }
}

/// One train's availability snapshot from a query response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    /// Train number, e.g. `G101`. The first character encodes the category.
    pub train_code: String,
    pub from_station: String,
    pub to_station: String,
    /// Departure time, `HH:MM`.
    pub departure: String,
    /// Arrival time, `HH:MM`.
    pub arrival: String,
    /// Elapsed journey time, `HH:MM`.
    pub duration: String,
    pub seats: SeatCounts,
}

impl TicketRecord {
    /// First character of the train code, if any.
    pub fn code_prefix(&self) -> Option<char> {
        self.train_code.chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_prefix() {
        let record = TicketRecord {
            train_code: "G101".to_string(),
            from_station: "北京南".to_string(),
            to_station: "上海虹桥".to_string(),
            departure: "06:43".to_string(),
            arrival: "12:39".to_string(),
            duration: "05:56".to_string(),
            seats: SeatCounts::default(),
        };
        assert_eq!(record.code_prefix(), Some('G'));

        let blank = TicketRecord {
            train_code: String::new(),
            ..record
        };
        assert_eq!(blank.code_prefix(), None);
    }

    #[test]
    fn column_order() {
        let seats = SeatCounts {
            business: "1".into(),
            super_first: "2".into(),
            first: "3".into(),
            second: "4".into(),
            soft_sleeper: "5".into(),
            hard_sleeper: "6".into(),
            soft_seat: "7".into(),
            hard_seat: "8".into(),
            standing: "9".into(),
        };
        assert_eq!(
            seats.in_column_order(),
            ["1", "2", "3", "4", "5", "6", "7", "8", "9"]
        );
    }
}
