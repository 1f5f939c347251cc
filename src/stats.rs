use crate::errors::StatsError;
use crate::models::{DailyEntry, UsageSession};
use crate::week::{week_for, WeekId};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use tracing::warn;

/// Accumulator for one week of daily check-ins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyBucket {
    pub energy_sum: f64,
    pub energy_count: u32,
    /// Occurrences of mood codes 1-6, indexed by `code - 1`. A fixed array
    /// keeps tie-breaking over codes deterministic.
    pub mood_freq: [u32; 6],
}

/// Accumulator for one week of apportioned session shares.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageBucket {
    pub puffs: f64,
    pub cost: f64,
    pub days: u32,
}

/// One calendar day's even share of a session's totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyShare {
    pub date: NaiveDate,
    pub puffs: f64,
    pub cost: f64,
}

/// Spread a session's totals evenly over every day it spans, both endpoints
/// inclusive. The shares stay fractional; rounding is presentation's job.
pub fn apportion(
    start: NaiveDate,
    end: NaiveDate,
    puffs: f64,
    cost: f64,
) -> Result<Vec<DailyShare>, StatsError> {
    if end < start {
        return Err(StatsError::InvalidRange { start, end });
    }

    let total_days = (end - start).num_days() + 1;
    let daily_puffs = puffs / total_days as f64;
    let daily_cost = cost / total_days as f64;

    let mut shares = Vec::with_capacity(total_days as usize);
    let mut date = start;
    while date <= end {
        shares.push(DailyShare {
            date,
            puffs: daily_puffs,
            cost: daily_cost,
        });
        date += Duration::days(1);
    }

    Ok(shares)
}

/// Group daily check-ins into per-week buckets. Entries whose date does not
/// parse are dropped whole; a present energy value always counts, a mood
/// code only when it is one of the known 1-6 codes.
pub fn aggregate_daily(entries: &[DailyEntry]) -> BTreeMap<WeekId, DailyBucket> {
    let mut weeks: BTreeMap<WeekId, DailyBucket> = BTreeMap::new();

    for entry in entries {
        let Some(week) = week_for(&entry.date) else {
            continue;
        };
        let bucket = weeks.entry(week).or_default();

        if let Some(energy) = entry.energy {
            bucket.energy_sum += energy;
            bucket.energy_count += 1;
        }
        if let Some(mood) = entry.mood {
            if (1..=6).contains(&mood) {
                bucket.mood_freq[usize::from(mood) - 1] += 1;
            }
        }
    }

    weeks
}

/// Apportion every session and sum the day shares into per-week buckets.
/// A session crossing an ISO week boundary contributes to both weeks.
/// Sessions with unparseable dates are dropped; a session whose end precedes
/// its start is skipped with a warning rather than aggregated backwards.
pub fn aggregate_sessions(sessions: &[UsageSession]) -> BTreeMap<WeekId, UsageBucket> {
    let mut weeks: BTreeMap<WeekId, UsageBucket> = BTreeMap::new();

    for session in sessions {
        let (Ok(start), Ok(end)) = (
            session.start_date.parse::<NaiveDate>(),
            session.end_date.parse::<NaiveDate>(),
        ) else {
            continue;
        };

        let shares = match apportion(start, end, session.puffs, session.cost) {
            Ok(shares) => shares,
            Err(err) => {
                warn!("skipping usage session: {err}");
                continue;
            }
        };

        for share in shares {
            let bucket = weeks.entry(WeekId::from_date(share.date)).or_default();
            bucket.puffs += share.puffs;
            bucket.cost += share.cost;
            bucket.days += 1;
        }
    }

    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session(start: &str, end: &str, puffs: f64, cost: f64) -> UsageSession {
        UsageSession {
            start_date: start.to_string(),
            end_date: end.to_string(),
            puffs,
            cost,
        }
    }

    #[test]
    fn apportion_covers_every_day_and_preserves_totals() {
        let shares = apportion(day(2024, 1, 1), day(2024, 1, 3), 400.0, 12.0).unwrap();
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].date, day(2024, 1, 1));
        assert_eq!(shares[2].date, day(2024, 1, 3));

        let puffs: f64 = shares.iter().map(|s| s.puffs).sum();
        let cost: f64 = shares.iter().map(|s| s.cost).sum();
        assert!((puffs - 400.0).abs() < 1e-9);
        assert!((cost - 12.0).abs() < 1e-9);
    }

    #[test]
    fn apportion_single_day_session() {
        let shares = apportion(day(2024, 1, 5), day(2024, 1, 5), 300.0, 10.0).unwrap();
        assert_eq!(shares.len(), 1);
        assert!((shares[0].puffs - 300.0).abs() < 1e-9);
        assert!((shares[0].cost - 10.0).abs() < 1e-9);
    }

    #[test]
    fn apportion_rejects_reversed_range() {
        let err = apportion(day(2024, 1, 10), day(2024, 1, 3), 100.0, 5.0).unwrap_err();
        assert!(matches!(err, StatsError::InvalidRange { .. }));
    }

    #[test]
    fn daily_entries_land_in_their_weeks() {
        let entries = vec![
            DailyEntry {
                date: "2025-01-01".into(),
                energy: Some(6.0),
                mood: Some(6),
            },
            DailyEntry {
                date: "2025-01-02".into(),
                energy: Some(8.0),
                mood: Some(1),
            },
            DailyEntry {
                date: "2025-01-08".into(),
                energy: Some(5.0),
                mood: None,
            },
        ];

        let weeks = aggregate_daily(&entries);
        assert_eq!(weeks.len(), 2);

        let first = &weeks[&week_for("2025-01-01").unwrap()];
        assert_eq!(first.energy_count, 2);
        assert!((first.energy_sum - 14.0).abs() < 1e-9);
        assert_eq!(first.mood_freq[5], 1);
        assert_eq!(first.mood_freq[0], 1);

        let second = &weeks[&week_for("2025-01-08").unwrap()];
        assert_eq!(second.energy_count, 1);
        assert_eq!(second.mood_freq, [0; 6]);
    }

    #[test]
    fn garbage_dates_and_unknown_moods_are_dropped() {
        let entries = vec![
            DailyEntry {
                date: "whenever".into(),
                energy: Some(9.0),
                mood: Some(2),
            },
            DailyEntry {
                date: "2025-01-03".into(),
                energy: Some(7.0),
                mood: Some(9),
            },
        ];

        let weeks = aggregate_daily(&entries);
        assert_eq!(weeks.len(), 1);
        let bucket = &weeks[&week_for("2025-01-03").unwrap()];
        // energy still counts even though the mood code is unknown
        assert_eq!(bucket.energy_count, 1);
        assert_eq!(bucket.mood_freq, [0; 6]);
    }

    #[test]
    fn entries_without_measurements_leave_counts_at_zero() {
        let entries = vec![DailyEntry {
            date: "2025-01-04".into(),
            energy: None,
            mood: None,
        }];

        let weeks = aggregate_daily(&entries);
        let bucket = &weeks[&week_for("2025-01-04").unwrap()];
        assert_eq!(bucket.energy_count, 0);
        assert_eq!(bucket.energy_sum, 0.0);
    }

    #[test]
    fn session_inside_one_week_sums_to_its_totals() {
        // 2024-01-01 is a Monday; all three days sit in 2024-W1.
        let weeks = aggregate_sessions(&[session("2024-01-01", "2024-01-03", 400.0, 12.0)]);
        assert_eq!(weeks.len(), 1);

        let bucket = &weeks[&week_for("2024-01-01").unwrap()];
        assert_eq!(bucket.days, 3);
        assert!((bucket.puffs - 400.0).abs() < 1e-9);
        assert!((bucket.cost - 12.0).abs() < 1e-9);
    }

    #[test]
    fn session_straddling_sunday_splits_across_weeks() {
        // Jan 6-7 2024 is Sat-Sun of W1, Jan 8 the Monday of W2.
        let weeks = aggregate_sessions(&[session("2024-01-06", "2024-01-08", 600.0, 15.0)]);
        assert_eq!(weeks.len(), 2);

        let first = &weeks[&week_for("2024-01-06").unwrap()];
        let second = &weeks[&week_for("2024-01-08").unwrap()];
        assert_eq!(first.days, 2);
        assert_eq!(second.days, 1);
        assert!((first.puffs - 400.0).abs() < 1e-9);
        assert!((second.puffs - 200.0).abs() < 1e-9);
        assert!((first.cost + second.cost - 15.0).abs() < 1e-9);
    }

    #[test]
    fn reversed_and_unparseable_sessions_are_skipped() {
        let weeks = aggregate_sessions(&[
            session("2024-01-10", "2024-01-03", 100.0, 5.0),
            session("soon", "later", 100.0, 5.0),
            session("2024-01-18", "2024-01-20", 450.0, 15.0),
        ]);

        assert_eq!(weeks.len(), 1);
        let bucket = &weeks[&week_for("2024-01-18").unwrap()];
        assert!((bucket.puffs - 450.0).abs() < 1e-9);
    }
}
