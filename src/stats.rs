//! Derived statistics over the day log: tag proportions, consecutive-day
//! streaks per category, and the full-week flags used to decorate grid rows.

use crate::grid::{parse_date_key, GridCell, YearMonth};
use crate::models::{CategoryStats, TagStats, WeekFlags};
use crate::tags::TagConfig;
use chrono::Datelike;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
struct CategoryAcc {
    count: u64,
    current: u32,
    longest: u32,
}

pub fn compute_stats(days: &BTreeMap<String, String>, tags: &TagConfig) -> TagStats {
    compute_stats_where(days, tags, |_| true)
}

/// Stats over the entries of `days` whose key belongs to `ym`.
pub fn compute_month_stats(
    days: &BTreeMap<String, String>,
    tags: &TagConfig,
    ym: YearMonth,
) -> TagStats {
    compute_stats_where(days, tags, |key| {
        parse_date_key(key).is_some_and(|d| d.year() == ym.year && d.month() == ym.month)
    })
}

/// Single ordered walk over the entries `keep` admits. The map iterates in
/// ascending lexical key order, which for the zero-padded `YYYY-MM-DD` keys
/// is chronological order. An entry is consecutive when it falls exactly one
/// calendar day after the previously processed entry; unlogged days in
/// between break nothing on their own. A day whose tag sits outside a
/// category resets that category's current run, including tags that belong
/// to no category at all. Keys that do not parse as dates are skipped
/// entirely, in the proportions as well as the streaks. Percentages round
/// half away from zero; an empty view yields 0 everywhere.
pub fn compute_stats_where<F>(days: &BTreeMap<String, String>, tags: &TagConfig, keep: F) -> TagStats
where
    F: Fn(&str) -> bool,
{
    let mut total = 0u64;
    let mut acc = vec![CategoryAcc::default(); tags.categories.len()];
    let mut prev: Option<chrono::NaiveDate> = None;

    for (key, tag) in days {
        if !keep(key) {
            continue;
        }
        let Some(date) = parse_date_key(key) else {
            continue;
        };
        total += 1;
        let consecutive = prev.is_some_and(|p| (date - p).num_days() == 1);
        for (members, slot) in tags.categories.values().zip(acc.iter_mut()) {
            if members.contains(tag) {
                slot.count += 1;
                slot.current = if consecutive { slot.current + 1 } else { 1 };
                slot.longest = slot.longest.max(slot.current);
            } else {
                slot.current = 0;
            }
        }
        prev = Some(date);
    }

    let categories = tags
        .categories
        .keys()
        .zip(acc)
        .map(|(name, slot)| {
            (
                name.clone(),
                CategoryStats {
                    count: slot.count,
                    percentage: percentage(slot.count, total),
                    current_streak: slot.current,
                    longest_streak: slot.longest,
                },
            )
        })
        .collect();

    TagStats { total, categories }
}

fn percentage(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 * 100.0 / total as f64).round() as u32
}

/// One entry per grid row. A category's flag is true iff all seven cells of
/// the row carry a logged tag from that category's set; spill-over cells
/// look up the full log, so neighboring months participate.
pub fn week_flags(
    cells: &[GridCell],
    days: &BTreeMap<String, String>,
    tags: &TagConfig,
) -> Vec<WeekFlags> {
    cells
        .chunks(7)
        .map(|week| {
            let full = tags
                .categories
                .iter()
                .map(|(name, members)| {
                    let all = week
                        .iter()
                        .all(|cell| days.get(&cell.key).is_some_and(|tag| members.contains(tag)));
                    (name.clone(), all)
                })
                .collect();
            WeekFlags { full }
        })
        .collect()
}
