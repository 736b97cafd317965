use chrono::{DateTime, Duration, TimeZone, Utc};
use tickrange::{TickRange, TickUnit};

#[test]
fn hourly_walk_over_fixed_endpoints() {
    let range = TickRange::new(
        Some(Utc.with_ymd_and_hms(2016, 2, 14, 3, 17, 27).unwrap()),
        Some(Utc.with_ymd_and_hms(2016, 2, 14, 5, 43, 17).unwrap()),
        Some(TickUnit::Hours),
    );

    let ticks: Vec<_> = range.iter().collect();
    assert_eq!(
        ticks,
        vec![
            Utc.with_ymd_and_hms(2016, 2, 14, 3, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2016, 2, 14, 4, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2016, 2, 14, 5, 0, 0).unwrap(),
        ]
    );
    assert_eq!(ticks.len() as u64, range.len());
    assert!(range.contains_all(Some(ticks)));
}

#[test]
fn ten_hours_back_from_now_is_eleven_ticks() {
    // Clocks are not always intuitive: "10 hours ago" up to "the current
    // hour" spans eleven distinct hourly ticks, both ends included.
    let now = Utc::now();
    let range =
        TickRange::new(Some(now - Duration::hours(10)), Some(now), Some(TickUnit::Hours));

    assert_eq!(range.len(), 11);
    assert_eq!(range.iter().count(), 11);

    let ticks: Vec<_> = range.iter().collect();
    assert_eq!(ticks[0], range.from());
    assert_eq!(ticks[10], range.to());
    assert!(ticks.iter().all(|t| range.contains(*t)));
}

#[test]
fn minute_ticks_across_a_day_boundary() {
    let range = TickRange::new(
        Some(Utc.with_ymd_and_hms(2023, 12, 31, 23, 58, 30).unwrap()),
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 2, 10).unwrap()),
        Some(TickUnit::Minutes),
    );

    let ticks: Vec<_> = range.iter().collect();
    assert_eq!(ticks.len(), 5);
    assert_eq!(ticks[0], Utc.with_ymd_and_hms(2023, 12, 31, 23, 58, 0).unwrap());
    assert_eq!(ticks[2], Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(ticks[4], Utc.with_ymd_and_hms(2024, 1, 1, 0, 2, 0).unwrap());
}

#[test]
fn reversed_endpoints_walk_identically() {
    let a = Utc.with_ymd_and_hms(2024, 6, 1, 8, 5, 0).unwrap();
    let b = Utc.with_ymd_and_hms(2024, 6, 3, 19, 40, 0).unwrap();

    let forward = TickRange::new(Some(a), Some(b), Some(TickUnit::Days));
    let reversed = TickRange::new(Some(b), Some(a), Some(TickUnit::Days));

    assert_eq!(forward, reversed);
    assert_eq!(
        forward.iter().collect::<Vec<_>>(),
        reversed.iter().collect::<Vec<_>>()
    );
}

#[test]
fn degenerate_range_still_ticks_once() {
    let t = Utc.with_ymd_and_hms(2024, 3, 10, 12, 30, 45).unwrap();
    let range = TickRange::new(Some(t), Some(t), Some(TickUnit::Days));

    assert!(range.is_empty());
    assert_eq!(range.len(), 1);
    assert_eq!(
        range.iter().collect::<Vec<_>>(),
        vec![Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()]
    );
}

#[test]
fn rejected_mutation_leaves_ticks_unchanged() {
    let mut range = TickRange::new(
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 4, 0, 0).unwrap()),
        Some(TickUnit::Hours),
    );
    let before: Vec<_> = range.iter().collect();

    assert!(range.insert(Utc::now()).is_err());
    assert!(range.clear().is_err());

    assert_eq!(range.iter().collect::<Vec<_>>(), before);
    assert_eq!(range.len(), 5);
}

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrip_preserves_the_range() {
    let range = TickRange::new(
        Some(Utc.with_ymd_and_hms(2016, 2, 14, 3, 17, 27).unwrap()),
        Some(Utc.with_ymd_and_hms(2016, 2, 14, 5, 43, 17).unwrap()),
        Some(TickUnit::Hours),
    );

    let json = serde_json::to_string(&range).unwrap();
    assert!(json.contains("\"from\""));
    assert!(json.contains("\"to\""));
    assert!(json.contains("\"unit\":\"hours\""));

    let back: TickRange = serde_json::from_str(&json).unwrap();
    assert_eq!(back, range);
}

#[cfg(feature = "serde")]
#[test]
fn serde_deserialisation_renormalises_hostile_input() {
    // Endpoints swapped and un-truncated: deserialisation routes through
    // the constructor, so the result is ordered and aligned.
    let json = r#"{"from":"2016-02-14T05:43:17Z","to":"2016-02-14T03:17:27Z","unit":"hours"}"#;
    let range: TickRange = serde_json::from_str(json).unwrap();

    assert_eq!(
        range.from(),
        Utc.with_ymd_and_hms(2016, 2, 14, 3, 0, 0).unwrap()
    );
    assert_eq!(
        range.to(),
        Utc.with_ymd_and_hms(2016, 2, 14, 5, 0, 0).unwrap()
    );
}

#[test]
fn shared_across_threads_without_synchronisation() {
    let range = TickRange::new(
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap()),
        Some(TickUnit::Hours),
    );

    let counts: Vec<u64> = std::thread::scope(|scope| {
        (0..4)
            .map(|_| scope.spawn(|| range.iter().count() as u64))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().expect("reader thread"))
            .collect()
    });

    assert!(counts.iter().all(|count| *count == range.len()));
}

#[test]
fn absent_candidates_are_never_contained() {
    let range = TickRange::default();

    assert!(!range.contains(None::<DateTime<Utc>>));
    assert!(!range.contains_all(None::<Vec<DateTime<Utc>>>));
}
