//! Terminal rendering of ticket availability.

mod style;
mod table;

pub use style::{Color, Palette, display_width, seats_available};
pub use table::{Cell, TextTable};

use crate::domain::TicketRecord;

/// Column headers, in order: train code, stations, time span, duration,
/// then the nine seat classes.
pub const TICKETS_TABLE_HEADER: [&str; 13] = [
    "车次", "站点", "起止时间", "历时", "商务座", "特等座", "一等座", "二等座", "软卧", "硬卧",
    "软座", "硬座", "无座",
];

/// A seat-count cell, emphasized when seats are available.
pub fn seat_cell(value: &str) -> Cell {
    if seats_available(value) {
        Cell::colored(value, Color::Magenta)
    } else {
        Cell::plain(value)
    }
}

/// Project one record into a table row.
pub fn ticket_row(record: &TicketRecord) -> Vec<Cell> {
    let mut row = Vec::with_capacity(TICKETS_TABLE_HEADER.len());
    row.push(Cell::plain(record.train_code.as_str()));
    row.push(
        Cell::colored(record.from_station.as_str(), Color::Cyan)
            .with_line(record.to_station.as_str(), Some(Color::Cyan)),
    );
    row.push(Cell::plain(record.departure.as_str()).with_line(record.arrival.as_str(), None));
    row.push(Cell::plain(record.duration.as_str()));
    row.extend(record.seats.in_column_order().into_iter().map(seat_cell));
    row
}

/// Build the ticket table, one row per record in iteration order.
pub fn tickets_table<'a>(records: impl IntoIterator<Item = &'a TicketRecord>) -> TextTable {
    let mut table = TextTable::new(TICKETS_TABLE_HEADER);
    for record in records {
        table.add_row(ticket_row(record));
    }
    table
}

/// Render records straight to text.
pub fn render_tickets<'a>(
    records: impl IntoIterator<Item = &'a TicketRecord>,
    palette: &Palette,
) -> String {
    tickets_table(records).render(palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeatCounts;

    fn record() -> TicketRecord {
        TicketRecord {
            train_code: "G101".to_string(),
            from_station: "北京南".to_string(),
            to_station: "上海虹桥".to_string(),
            departure: "06:43".to_string(),
            arrival: "12:39".to_string(),
            duration: "05:56".to_string(),
            seats: SeatCounts {
                business: "3".into(),
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

    #[test]
    fn seat_cells_follow_highlight_rule() {
        assert_eq!(seat_cell("--"), Cell::plain("--"));
        assert_eq!(seat_cell("无"), Cell::plain("无"));
        assert_eq!(seat_cell("有"), Cell::colored("有", Color::Magenta));
        assert_eq!(seat_cell("3"), Cell::colored("3", Color::Magenta));
    }

    #[test]
    fn row_has_every_column() {
        let row = ticket_row(&record());
        assert_eq!(row.len(), TICKETS_TABLE_HEADER.len());
        assert_eq!(
            row[1],
            Cell::colored("北京南", Color::Cyan).with_line("上海虹桥", Some(Color::Cyan))
        );
        assert_eq!(row[2], Cell::plain("06:43").with_line("12:39", None));
    }

    #[test]
    fn rendered_table_lists_stations_on_two_lines() {
        let rendered = render_tickets([&record()], &Palette::plain());
        let lines: Vec<&str> = rendered.lines().collect();

        // rule, header, rule, two row lines, rule
        assert_eq!(lines.len(), 6);
        assert!(lines[3].contains("G101"));
        assert!(lines[3].contains("北京南"));
        assert!(lines[3].contains("06:43"));
        assert!(lines[4].contains("上海虹桥"));
        assert!(lines[4].contains("12:39"));
        assert!(!lines[4].contains("G101"));
    }

    #[test]
    fn colored_table_emphasizes_available_seats() {
        let rendered = render_tickets([&record()], &Palette::colored());
        assert!(rendered.contains("\x1b[35m有\x1b[39m"));
        assert!(rendered.contains("\x1b[35m3\x1b[39m"));
        assert!(rendered.contains("\x1b[36m北京南\x1b[39m"));
        assert!(!rendered.contains("\x1b[35m--"));
        assert!(!rendered.contains("\x1b[35m无"));
    }

    #[test]
    fn empty_input_renders_header_only() {
        let table = tickets_table(std::iter::empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.render(&Palette::plain()).lines().count(), 3);
    }
}
