use crate::models::UserDoc;
use crate::stats::{aggregate_daily, aggregate_sessions, DailyBucket};
use serde::Serialize;

/// Display names for mood codes 1-6.
pub const MOOD_LABELS: [&str; 6] = ["Great", "Good", "Neutral", "Sad", "Upset", "Irritated/Angry"];

const NO_MOOD_TEXT: &str = "No mood data";

/// Aligned label/value arrays, one point per week in chronological order.
#[derive(Debug, Serialize, Default)]
pub struct ChartSeries {
    pub weeks: Vec<String>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub energy: ChartSeries,
    pub puffs: ChartSeries,
    pub cost: ChartSeries,
    pub dominant_mood: Option<u8>,
    pub dominant_mood_text: String,
    pub puffs_change_pct: f64,
    pub puffs_change_text: String,
    pub cost_change_pct: f64,
    pub cost_change_text: String,
    pub cost_delta: f64,
    pub cost_delta_text: String,
    pub projected_annual_savings: Option<f64>,
    pub savings_text: Option<String>,
}

/// Mean energy for one week's bucket, 0 when nothing was rated.
pub fn weekly_average(bucket: &DailyBucket) -> f64 {
    if bucket.energy_count > 0 {
        bucket.energy_sum / f64::from(bucket.energy_count)
    } else {
        0.0
    }
}

/// The mood code observed strictly most often in the bucket. Ties go to the
/// lowest code; `None` when no mood was logged at all.
pub fn dominant_mood(bucket: &DailyBucket) -> Option<u8> {
    let mut best = None;
    let mut max = 0;
    for (idx, &count) in bucket.mood_freq.iter().enumerate() {
        if count > max {
            max = count;
            best = Some(idx as u8 + 1);
        }
    }
    best
}

/// Week-over-week change in percent. A zero previous week yields 100 or 0
/// instead of dividing by zero.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    (current - previous) / previous * 100.0
}

/// Last and second-to-last points of a weekly series. With fewer than two
/// weeks of history the previous value falls back to the last, so every
/// change computed from the pair comes out zero.
pub fn last_two(series: &[f64]) -> (f64, f64) {
    let last = series.last().copied().unwrap_or(0.0);
    let prev = if series.len() >= 2 {
        series[series.len() - 2]
    } else {
        last
    };
    (last, prev)
}

/// Projected yearly savings from the latest week-over-week cost drop.
/// Only a drop projects; flat or rising spend yields nothing.
pub fn annual_savings(last_cost: f64, prev_cost: f64) -> Option<f64> {
    if percent_change(last_cost, prev_cost) < 0.0 {
        Some((last_cost - prev_cost).abs() * 52.0)
    } else {
        None
    }
}

fn mood_text(code: Option<u8>) -> String {
    code.and_then(|c| MOOD_LABELS.get(usize::from(c) - 1))
        .map_or_else(|| NO_MOOD_TEXT.to_string(), |label| (*label).to_string())
}

/// Run the whole pipeline over one user's raw log and assemble the insights
/// view: chart series plus the headline numbers and their display strings.
pub fn build_insights(doc: &UserDoc) -> InsightsResponse {
    let daily_weeks = aggregate_daily(&doc.daily);

    let mut energy = ChartSeries::default();
    for (week, bucket) in &daily_weeks {
        energy.weeks.push(week.to_string());
        energy.labels.push(week.label());
        energy.values.push(weekly_average(bucket));
    }
    let dominant = daily_weeks.values().last().and_then(dominant_mood);

    let usage_weeks = aggregate_sessions(&doc.sessions);

    let mut puffs = ChartSeries::default();
    let mut cost = ChartSeries::default();
    for (week, bucket) in &usage_weeks {
        puffs.weeks.push(week.to_string());
        puffs.labels.push(week.label());
        puffs.values.push(bucket.puffs);
        cost.weeks.push(week.to_string());
        cost.labels.push(week.label());
        cost.values.push(bucket.cost);
    }

    let (last_puffs, prev_puffs) = last_two(&puffs.values);
    let puffs_change_pct = percent_change(last_puffs, prev_puffs);

    let (last_cost, prev_cost) = last_two(&cost.values);
    let cost_change_pct = percent_change(last_cost, prev_cost);
    let cost_delta = last_cost - prev_cost;

    let projected_annual_savings = annual_savings(last_cost, prev_cost);

    InsightsResponse {
        energy,
        puffs,
        cost,
        dominant_mood: dominant,
        dominant_mood_text: mood_text(dominant),
        puffs_change_pct,
        puffs_change_text: format!("{:.1}%", puffs_change_pct.abs()),
        cost_change_pct,
        cost_change_text: format!("{:.1}%", cost_change_pct.abs()),
        cost_delta,
        cost_delta_text: format!("${:.2}", cost_delta.abs()),
        projected_annual_savings,
        savings_text: projected_annual_savings.map(|savings| format!("${savings:.2}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyEntry, UsageSession};

    fn entry(date: &str, energy: Option<f64>, mood: Option<u8>) -> DailyEntry {
        DailyEntry {
            date: date.to_string(),
            energy,
            mood,
        }
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
    fn percent_change_policy_values() {
        assert_eq!(percent_change(0.0, 0.0), 0.0);
        assert_eq!(percent_change(5.0, 0.0), 100.0);
        assert_eq!(percent_change(8.0, 4.0), 100.0);
        assert_eq!(percent_change(3.0, 6.0), -50.0);
    }

    #[test]
    fn single_week_history_yields_zero_change() {
        let (last, prev) = last_two(&[42.0]);
        assert_eq!(last, prev);
        assert_eq!(percent_change(last, prev), 0.0);

        let (last, prev) = last_two(&[]);
        assert_eq!((last, prev), (0.0, 0.0));
    }

    #[test]
    fn weekly_average_of_empty_bucket_is_zero() {
        assert_eq!(weekly_average(&DailyBucket::default()), 0.0);

        let bucket = DailyBucket {
            energy_sum: 15.0,
            energy_count: 2,
            mood_freq: [0; 6],
        };
        assert_eq!(weekly_average(&bucket), 7.5);
    }

    #[test]
    fn dominant_mood_breaks_ties_toward_the_lowest_code() {
        let mut bucket = DailyBucket::default();
        assert_eq!(dominant_mood(&bucket), None);

        bucket.mood_freq = [2, 2, 0, 0, 0, 3];
        assert_eq!(dominant_mood(&bucket), Some(6));

        bucket.mood_freq = [2, 2, 0, 0, 0, 0];
        assert_eq!(dominant_mood(&bucket), Some(1));
    }

    #[test]
    fn savings_projected_only_on_a_cost_drop() {
        assert_eq!(annual_savings(10.0, 15.0), Some(260.0));
        assert_eq!(annual_savings(15.0, 10.0), None);
        assert_eq!(annual_savings(10.0, 10.0), None);
        assert_eq!(annual_savings(5.0, 0.0), None);
    }

    #[test]
    fn insights_over_a_three_day_session() {
        let doc = UserDoc {
            daily: Vec::new(),
            sessions: vec![session("2024-01-01", "2024-01-03", 400.0, 12.0)],
        };

        let insights = build_insights(&doc);
        let total_puffs: f64 = insights.puffs.values.iter().sum();
        let total_cost: f64 = insights.cost.values.iter().sum();
        assert!((total_puffs - 400.0).abs() < 1e-9);
        assert!((total_cost - 12.0).abs() < 1e-9);
        assert_eq!(insights.puffs.labels, vec!["Jan 1 - Jan 7"]);
        assert_eq!(insights.puffs.weeks, vec!["2024-W1"]);

        // one week of history: no movement, no projection
        assert_eq!(insights.puffs_change_pct, 0.0);
        assert_eq!(insights.projected_annual_savings, None);
    }

    #[test]
    fn insights_report_mood_and_savings_across_weeks() {
        let doc = UserDoc {
            daily: vec![
                entry("2024-01-02", Some(6.0), Some(6)),
                entry("2024-01-03", Some(8.0), Some(1)),
                entry("2024-01-09", Some(4.0), Some(3)),
                entry("2024-01-10", None, Some(3)),
                entry("2024-01-11", Some(10.0), Some(5)),
            ],
            sessions: vec![
                session("2024-01-01", "2024-01-03", 450.0, 15.0),
                session("2024-01-08", "2024-01-12", 300.0, 10.0),
            ],
        };

        let insights = build_insights(&doc);

        assert_eq!(insights.energy.values.len(), 2);
        assert!((insights.energy.values[0] - 7.0).abs() < 1e-9);
        assert!((insights.energy.values[1] - 7.0).abs() < 1e-9);

        // most recent week logged mood 3 twice, 5 once
        assert_eq!(insights.dominant_mood, Some(3));
        assert_eq!(insights.dominant_mood_text, "Neutral");

        // cost fell 15 -> 10, so the drop projects over 52 weeks
        assert!((insights.cost_delta + 5.0).abs() < 1e-9);
        assert_eq!(insights.cost_delta_text, "$5.00");
        assert_eq!(insights.projected_annual_savings, Some(260.0));
        assert_eq!(insights.savings_text.as_deref(), Some("$260.00"));
        assert!((insights.cost_change_pct + 33.333_333_333_333_33).abs() < 1e-6);
    }

    #[test]
    fn empty_document_yields_empty_series_and_sentinel_text() {
        let insights = build_insights(&UserDoc::default());
        assert!(insights.energy.values.is_empty());
        assert!(insights.puffs.values.is_empty());
        assert_eq!(insights.dominant_mood, None);
        assert_eq!(insights.dominant_mood_text, "No mood data");
        assert_eq!(insights.puffs_change_pct, 0.0);
        assert_eq!(insights.savings_text, None);
    }
}
