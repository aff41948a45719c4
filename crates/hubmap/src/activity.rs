//! Monthly install timeline shaping for the activity dashboard.
//!
//! The metrics endpoint returns sparse monthly rows; charts need one point
//! per tick. [`align_timeline`] pins the rows onto a fixed month range and
//! fills the gaps with zero.

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Longest window [`month_range`] will produce (ten years).
pub const MAX_MONTHS: u32 = 120;

/// Installs for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallPoint {
    /// Milliseconds since the epoch at 00:00 UTC on the first of the month.
    pub timestamp: i64,
    pub installs: u64,
}

/// Month starts (epoch ms) of the `months` months before the one containing
/// `now`, oldest first. `months` is capped at [`MAX_MONTHS`].
pub fn month_range(now: DateTime<Utc>, months: u32) -> Vec<i64> {
    let months = months.min(MAX_MONTHS);
    let Some(current) = NaiveDate::from_ymd_opt(now.year(), now.month(), 1) else {
        return Vec::new();
    };

    (1..=months)
        .rev()
        .filter_map(|back| current.checked_sub_months(Months::new(back)))
        .filter_map(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).timestamp_millis())
        .collect()
}

/// Snap an epoch-ms timestamp to the start of its month.
pub fn month_start(timestamp_ms: i64) -> Option<i64> {
    let dt = Utc.timestamp_millis_opt(timestamp_ms).single()?;
    let first = NaiveDate::from_ymd_opt(dt.year(), dt.month(), 1)?.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&first).timestamp_millis())
}

/// One point per month of [`month_range`]; months without data get zero
/// installs, points outside the range are dropped and points sharing a
/// month are summed.
pub fn align_timeline(points: &[InstallPoint], now: DateTime<Utc>, months: u32) -> Vec<InstallPoint> {
    let mut by_month: HashMap<i64, u64> = HashMap::new();
    for point in points {
        if let Some(start) = month_start(point.timestamp) {
            let total = by_month.entry(start).or_default();
            *total = total.saturating_add(point.installs);
        }
    }

    month_range(now, months)
        .into_iter()
        .map(|timestamp| InstallPoint {
            timestamp,
            installs: by_month.get(&timestamp).copied().unwrap_or(0),
        })
        .collect()
}

/// Sum of installs across a timeline.
pub fn total_installs(points: &[InstallPoint]) -> u64 {
    points.iter().fold(0u64, |acc, p| acc.saturating_add(p.installs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(y: i32, m: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, 1, 0, 0, 0).unwrap().timestamp_millis()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 3, 21, 15, 4, 5).unwrap()
    }

    #[test]
    fn test_month_range_ends_at_previous_month() {
        let range = month_range(now(), 3);
        assert_eq!(range, vec![ms(2022, 12), ms(2023, 1), ms(2023, 2)]);
    }

    #[test]
    fn test_month_range_zero() {
        assert!(month_range(now(), 0).is_empty());
    }

    #[test]
    fn test_align_fills_gaps_with_zero() {
        let points = [InstallPoint {
            timestamp: ms(2023, 1),
            installs: 7,
        }];
        let aligned = align_timeline(&points, now(), 3);
        let installs: Vec<u64> = aligned.iter().map(|p| p.installs).collect();
        assert_eq!(installs, vec![0, 7, 0]);
        assert_eq!(aligned[0].timestamp, ms(2022, 12));
    }

    #[test]
    fn test_align_drops_out_of_range_and_snaps_mid_month() {
        let mid_feb = Utc
            .with_ymd_and_hms(2023, 2, 14, 8, 0, 0)
            .unwrap()
            .timestamp_millis();
        let points = [
            InstallPoint {
                timestamp: ms(2020, 1),
                installs: 100,
            },
            InstallPoint {
                timestamp: mid_feb,
                installs: 4,
            },
            InstallPoint {
                timestamp: ms(2023, 3),
                installs: 9,
            },
        ];
        let aligned = align_timeline(&points, now(), 2);
        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned[1], InstallPoint { timestamp: ms(2023, 2), installs: 4 });
        assert_eq!(total_installs(&aligned), 4);
    }

    #[test]
    fn test_align_saturates_same_month_sums() {
        let points = [
            InstallPoint {
                timestamp: ms(2023, 2),
                installs: u64::MAX,
            },
            InstallPoint {
                timestamp: ms(2023, 2),
                installs: 1,
            },
        ];
        let aligned = align_timeline(&points, now(), 1);
        assert_eq!(aligned, vec![InstallPoint { timestamp: ms(2023, 2), installs: u64::MAX }]);
        assert_eq!(total_installs(&[aligned[0], aligned[0]]), u64::MAX);
    }

    #[test]
    fn test_month_range_is_capped() {
        let range = month_range(now(), u32::MAX);
        assert_eq!(range.len(), MAX_MONTHS as usize);
        assert_eq!(range.last().copied(), Some(ms(2023, 2)));
        assert_eq!(align_timeline(&[], now(), 4_000_000_000).len(), MAX_MONTHS as usize);
    }

    #[test]
    fn test_month_range_crosses_year_boundary() {
        let jan = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(month_range(jan, 2), vec![ms(2023, 11), ms(2023, 12)]);
    }
}
