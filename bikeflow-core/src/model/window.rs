use std::sync::Arc;

use itertools::Itertools;

use crate::model::{TimeFilter, TripRecord, MINUTES_PER_DAY};

/// flattens the buckets falling inside a circular time-of-day window.
///
/// unfiltered selection flattens all 1440 buckets. a centered window covers
/// `2 * half_width + 1` minutes inclusive of both ends; when the window
/// crosses midnight it is selected as the union of the two segments
/// `[lo, 1439]` and `[0, hi]`. downstream aggregation is order-independent,
/// so no ordering is promised across the two segments.
///
/// # Arguments
///
/// * `buckets` - one full day of minute buckets (length 1440)
/// * `filter` - active time filter; must already be validated
/// * `half_width` - minutes covered on each side of the window center
pub fn select_window(
    buckets: &[Vec<Arc<TripRecord>>],
    filter: &TimeFilter,
    half_width: u16,
) -> Vec<Arc<TripRecord>> {
    let center = match filter {
        TimeFilter::Unfiltered => {
            return buckets.iter().flatten().cloned().collect_vec();
        }
        TimeFilter::CenteredAt(minute) => *minute as usize,
    };

    let half_width = half_width as usize;
    let lo = (center + MINUTES_PER_DAY - half_width) % MINUTES_PER_DAY;
    let hi = (center + half_width) % MINUTES_PER_DAY;

    if lo <= hi {
        buckets[lo..=hi].iter().flatten().cloned().collect_vec()
    } else {
        // window wraps past midnight
        buckets[lo..]
            .iter()
            .chain(buckets[..=hi].iter())
            .flatten()
            .cloned()
            .collect_vec()
    }
}

#[cfg(test)]
mod test {
    use super::select_window;
    use crate::model::{BucketStore, TimeFilter, TripRecord};
    use chrono::NaiveDate;

    /// one trip departing and arriving at the given minutes-of-day
    fn trip_at(id: &str, started_minute: u16, ended_minute: u16) -> TripRecord {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        TripRecord::new(
            id.to_string(),
            String::from("A"),
            String::from("B"),
            date.and_hms_opt(started_minute as u32 / 60, started_minute as u32 % 60, 0)
                .unwrap(),
            date.and_hms_opt(ended_minute as u32 / 60, ended_minute as u32 % 60, 0)
                .unwrap(),
        )
    }

    fn store_with_departures(minutes: &[u16]) -> BucketStore {
        let trips = minutes
            .iter()
            .enumerate()
            .map(|(i, m)| trip_at(&format!("t{i}"), *m, *m))
            .collect();
        BucketStore::build(trips)
    }

    #[test]
    fn test_unfiltered_is_size_preserving() {
        let store = store_with_departures(&[0, 1, 719, 720, 1439, 1439]);
        let selected = select_window(store.departures(), &TimeFilter::Unfiltered, 60);
        assert_eq!(selected.len(), store.trip_count());
    }

    #[test]
    fn test_window_is_inclusive_of_both_ends() {
        let store = store_with_departures(&[539, 540, 660, 661]);
        let selected = select_window(store.departures(), &TimeFilter::CenteredAt(600), 60);
        let ids: Vec<&str> = selected.iter().map(|t| t.trip_id.as_str()).collect();
        // 600 +/- 60 covers [540, 660]; 539 and 661 fall just outside
        assert_eq!(selected.len(), 2);
        assert!(ids.contains(&"t1"));
        assert!(ids.contains(&"t2"));
    }

    #[test]
    fn test_wraparound_window_unions_both_segments() {
        // center 10 with half width 60 covers [1390, 1439] and [0, 70]
        let store = store_with_departures(&[1389, 1390, 1439, 0, 70, 71]);
        let selected = select_window(store.departures(), &TimeFilter::CenteredAt(10), 60);
        let ids: Vec<&str> = selected.iter().map(|t| t.trip_id.as_str()).collect();
        assert_eq!(selected.len(), 4);
        for id in ["t1", "t2", "t3", "t4"] {
            assert!(ids.contains(&id), "missing {id}");
        }
    }

    #[test]
    fn test_wraparound_window_does_not_duplicate() {
        let store = store_with_departures(&[1400]);
        let selected = select_window(store.departures(), &TimeFilter::CenteredAt(0), 60);
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_window_touches_expected_bucket_count() {
        // every minute holds one trip, so selection size equals buckets touched
        let minutes: Vec<u16> = (0..1440).collect();
        let store = store_with_departures(&minutes);
        for center in [0u16, 10, 60, 600, 1380, 1439] {
            let selected =
                select_window(store.departures(), &TimeFilter::CenteredAt(center), 60);
            assert_eq!(selected.len(), 121, "center {center}");
        }
    }
}
