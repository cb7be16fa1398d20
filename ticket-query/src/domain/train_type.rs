//! Train category selection.
//!
//! The leading letter of a train code names its service category. A
//! [`TrainTypeFilter`] is an ordered list of categories with an enabled
//! flag each; the first enabled entry in declaration order is the one
//! applied, and the rest are ignored.

use std::fmt;

use super::TicketRecord;

/// A train service category, identified by its train-code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainCategory {
    /// 高铁
    HighSpeed,
    /// 动车
    Bullet,
    /// 城际
    Intercity,
    /// 直达特快
    Direct,
    /// 特快
    Express,
    /// 快速
    Fast,
}

impl TrainCategory {
    /// Every category, in declaration (selection) order.
    pub const ALL: [TrainCategory; 6] = [
        TrainCategory::HighSpeed,
        TrainCategory::Bullet,
        TrainCategory::Intercity,
        TrainCategory::Direct,
        TrainCategory::Express,
        TrainCategory::Fast,
    ];

    /// The train-code prefix letter.
    pub fn prefix(self) -> char {
        match self {
            TrainCategory::HighSpeed => 'G',
            TrainCategory::Bullet => 'D',
            TrainCategory::Intercity => 'C',
            TrainCategory::Direct => 'Z',
            TrainCategory::Express => 'T',
            TrainCategory::Fast => 'K',
        }
    }

    /// Whether `record`'s train code carries this category's prefix.
    pub fn matches(self, record: &TicketRecord) -> bool {
        record.code_prefix() == Some(self.prefix())
    }
}

impl fmt::Display for TrainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrainCategory::HighSpeed => "high-speed",
            TrainCategory::Bullet => "bullet",
            TrainCategory::Intercity => "intercity",
            TrainCategory::Direct => "direct",
            TrainCategory::Express => "express",
            TrainCategory::Fast => "fast",
        };
        write!(f, "{name} ({})", self.prefix())
    }
}

/// One entry of the selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainTypeFlag {
    pub category: TrainCategory,
    pub enabled: bool,
}

/// Ordered train-type flags. First enabled entry wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTypeFilter {
    flags: Vec<TrainTypeFlag>,
}

impl TrainTypeFilter {
    /// Build a filter from an explicit ordered list of flags.
    pub fn new(flags: Vec<TrainTypeFlag>) -> Self {
        Self { flags }
    }

    /// A filter with every category disabled; passes everything through.
    pub fn none() -> Self {
        Self::from_enabled(&[])
    }

    /// All categories in [`TrainCategory::ALL`] order, enabling those listed.
    pub fn from_enabled(enabled: &[TrainCategory]) -> Self {
        let flags = TrainCategory::ALL
            .iter()
            .map(|&category| TrainTypeFlag {
                category,
                enabled: enabled.contains(&category),
            })
            .collect();
        Self { flags }
    }

    /// The category that will be applied, if any flag is set.
    pub fn selected(&self) -> Option<TrainCategory> {
        self.flags
            .iter()
            .find(|flag| flag.enabled)
            .map(|flag| flag.category)
    }

    /// Narrow `records` to the selected category, preserving order.
    pub fn apply<'a>(&self, records: &'a [TicketRecord]) -> Vec<&'a TicketRecord> {
        match self.selected() {
            Some(category) => records.iter().filter(|r| category.matches(r)).collect(),
            None => records.iter().collect(),
        }
    }
}

impl Default for TrainTypeFilter {
    fn default() -> Self {
        Self::none()
    }
}
