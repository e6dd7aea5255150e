use std::cmp::Ordering as DayOrder;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Datelike, NaiveDate, Utc};

/// Process-wide cap on AI provider calls per UTC day.
///
/// The UTC day and the number of calls made on it share one `AtomicU64`
/// (day in the high 32 bits, count in the low 32). A reservation is a single
/// `fetch_update`, so a day rollover and the count increment are applied
/// together and concurrent callers can never overshoot the limit. The stored
/// day only moves forward: a caller still holding yesterday's date is refused
/// rather than resetting today's count.
/// The counter lives in memory only and restarts with the process.
#[derive(Debug)]
pub struct AiCallBudget {
    daily_limit: u32,
    state: AtomicU64,
}

impl AiCallBudget {
    pub fn new(daily_limit: u32) -> Self {
        Self {
            daily_limit,
            state: AtomicU64::new(0),
        }
    }

    pub fn daily_limit(&self) -> u32 {
        self.daily_limit
    }

    /// Reserves one call for today. Returns false when the budget is spent.
    pub fn try_acquire(&self) -> bool {
        self.try_acquire_on(Utc::now().date_naive())
    }

    pub fn try_acquire_on(&self, today: NaiveDate) -> bool {
        let today = day_key(today);
        let limit = self.daily_limit;

        self.state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |packed| {
                let (day, used) = unpack(packed);
                let used = match day.cmp(&today) {
                    DayOrder::Less => 0,
                    DayOrder::Equal => used,
                    DayOrder::Greater => return None,
                };
                (used < limit).then(|| pack(today, used + 1))
            })
            .is_ok()
    }

    pub fn remaining_on(&self, today: NaiveDate) -> u32 {
        let (day, used) = unpack(self.state.load(Ordering::Acquire));
        match day.cmp(&day_key(today)) {
            DayOrder::Less => self.daily_limit,
            DayOrder::Equal => self.daily_limit.saturating_sub(used),
            DayOrder::Greater => 0,
        }
    }
}

fn day_key(date: NaiveDate) -> u32 {
    date.num_days_from_ce().max(0) as u32
}

fn pack(day: u32, used: u32) -> u64 {
    ((day as u64) << 32) | used as u64
}

fn unpack(packed: u64) -> (u32, u32) {
    ((packed >> 32) as u32, packed as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_refuses_calls_beyond_limit() {
        let budget = AiCallBudget::new(2);

        assert!(budget.try_acquire_on(day(1)));
        assert!(budget.try_acquire_on(day(1)));
        assert!(!budget.try_acquire_on(day(1)));
        assert_eq!(budget.remaining_on(day(1)), 0);
    }

    #[test]
    fn test_resets_on_new_day() {
        let budget = AiCallBudget::new(1);

        assert!(budget.try_acquire_on(day(1)));
        assert!(!budget.try_acquire_on(day(1)));

        assert_eq!(budget.remaining_on(day(2)), 1);
        assert!(budget.try_acquire_on(day(2)));
        assert!(!budget.try_acquire_on(day(2)));
    }

    #[test]
    fn test_stale_day_does_not_reset_newer_count() {
        let budget = AiCallBudget::new(2);

        assert!(budget.try_acquire_on(day(2)));
        assert!(budget.try_acquire_on(day(2)));

        assert!(!budget.try_acquire_on(day(1)));
        assert_eq!(budget.remaining_on(day(1)), 0);
        assert!(!budget.try_acquire_on(day(2)));
        assert_eq!(budget.remaining_on(day(2)), 0);
    }

    #[test]
    fn test_zero_limit_refuses_everything() {
        let budget = AiCallBudget::new(0);
        assert!(!budget.try_acquire_on(day(1)));
    }

    #[test]
    fn test_concurrent_callers_never_overshoot() {
        let budget = Arc::new(AiCallBudget::new(50));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let budget = Arc::clone(&budget);
                std::thread::spawn(move || {
                    (0..20).filter(|_| budget.try_acquire_on(day(5))).count()
                })
            })
            .collect();

        let granted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(granted, 50);
    }
}
