use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DayLog {
    /// Date key (`YYYY-MM-DD`, local time) to tag. An absent key means the
    /// day is unlogged; an empty tag is never stored.
    pub days: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct TagRequest {
    pub key: String,
    pub tag: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayResponse {
    pub key: String,
    pub tag: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub key: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub tag: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    /// 1-based; any integer is accepted and rolled into the year.
    pub month: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct MonthResponse {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub month_name_short: String,
    pub days: Vec<MonthDay>,
    pub weeks: Vec<WeekFlags>,
    pub stats: TagStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthDay {
    pub key: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub in_current_month: bool,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekFlags {
    /// Category name to "every day of this week carries a tag from that
    /// category's set".
    pub full: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct TagStats {
    pub total: u64,
    pub categories: BTreeMap<String, CategoryStats>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct CategoryStats {
    pub count: u64,
    pub percentage: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: TagStats,
    pub mood: String,
}

#[derive(Debug, Serialize)]
pub struct IndexBootstrap {
    pub today: String,
    pub year: i32,
    pub month: u32,
    pub tags: Vec<String>,
}
