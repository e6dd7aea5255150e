use chrono::{DateTime, Days, NaiveDate, Utc};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use super::entities::DailyCount;

pub const WINDOW_DAYS: u64 = 7;
pub const TOP_N: usize = 5;

/// Today and the six UTC days before it, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportWindow {
    pub fn ending(today: NaiveDate) -> Self {
        Self {
            from: today - Days::new(WINDOW_DAYS - 1),
            to: today,
        }
    }

    pub fn ending_now() -> Self {
        Self::ending(Utc::now().date_naive())
    }

    /// Midnight UTC of the first day; repositories load events from here on.
    pub fn start(&self) -> DateTime<Utc> {
        self.from.and_time(chrono::NaiveTime::MIN).and_utc()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |d| *d <= to)
    }
}

/// One entry per day of the window, zero-filled. Events outside it are ignored.
pub fn bucket_by_day<I>(window: &ReportWindow, events: I) -> Vec<DailyCount>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let mut counts: BTreeMap<NaiveDate, u64> = window.days().map(|d| (d, 0)).collect();

    for at in events {
        let date = at.date_naive();
        if let Some(count) = counts.get_mut(&date) {
            *count += 1;
        }
    }

    counts
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

/// Most frequent ids first, ties broken by id so output is stable.
pub fn top_by_count<I>(ids: I, n: usize) -> Vec<(Uuid, u64)>
where
    I: IntoIterator<Item = Uuid>,
{
    let mut counts: HashMap<Uuid, u64> = HashMap::new();
    for id in ids {
        *counts.entry(id).or_default() += 1;
    }

    let mut ranked: Vec<(Uuid, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

pub fn total(buckets: &[DailyCount]) -> u64 {
    buckets.iter().map(|b| b.count).sum()
}
