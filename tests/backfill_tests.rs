//! Backfill reconciler harness: delegation, trailing-gap fill,
//! idempotency, and the calendar-vs-epoch ordering trap.

use chrono::{TimeZone, Utc};
use rhabitlogger::core::backfill::plan_backfill;
use rhabitlogger::core::generate::plan_logs;
use rhabitlogger::core::localday::{LocalDay, local_midnight_utc};
use rhabitlogger::db::db_utils::find_gaps;
use rhabitlogger::db::initialize::init_db;
use rhabitlogger::db::pool::DbPool;
use rhabitlogger::db::queries::{bulk_insert_logs, count_logs, insert_tracker, load_logs_by_tracker};
use rhabitlogger::db::users::ensure_user;
use rhabitlogger::errors::AppError;
use rhabitlogger::models::tracker_log::TrackerLog;

fn utc_ms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
        .timestamp_millis()
}

/// An existing log row as the reconciler sees it; the canonical epoch is
/// computed from the day and zone so it never lies.
fn existing_log(tracker_id: i64, year: i32, month: u32, day: u32, tz: &str) -> TrackerLog {
    let local_day = LocalDay::new(year, month, day);
    TrackerLog {
        id: 0,
        tracker_id,
        log_epoch_ms: local_midnight_utc(local_day, tz).unwrap(),
        timezone: tz.to_string(),
        user_year: year,
        user_month: month,
        user_day: day,
        is_accomplished: false,
    }
}

#[test]
fn empty_set_delegates_to_full_generation() {
    let start = utc_ms(2026, 1, 12, 10, 0, 0);
    let now = utc_ms(2026, 1, 14, 18, 0, 0);

    let from_backfill = plan_backfill(&[], start, "UTC", now).unwrap();
    let from_generate = plan_logs(start, "UTC", now).unwrap();

    assert_eq!(from_backfill, from_generate);
    assert_eq!(from_backfill.len(), 3);
}

#[test]
fn fills_exactly_the_trailing_gap() {
    let existing = vec![
        existing_log(1, 2026, 1, 8, "UTC"),
        existing_log(1, 2026, 1, 9, "UTC"),
        existing_log(1, 2026, 1, 10, "UTC"),
    ];

    let now = utc_ms(2026, 1, 13, 18, 0, 0);
    let plan = plan_backfill(&existing, utc_ms(2026, 1, 8, 9, 0, 0), "UTC", now).unwrap();

    let days: Vec<LocalDay> = plan.iter().map(|p| p.local_day).collect();
    assert_eq!(
        days,
        vec![
            LocalDay::new(2026, 1, 11),
            LocalDay::new(2026, 1, 12),
            LocalDay::new(2026, 1, 13),
        ]
    );
}

#[test]
fn already_current_yields_empty_plan() {
    let existing = vec![existing_log(1, 2026, 1, 13, "UTC")];
    let now = utc_ms(2026, 1, 13, 18, 0, 0);

    let plan = plan_backfill(&existing, utc_ms(2026, 1, 10, 0, 0, 0), "UTC", now).unwrap();
    assert!(plan.is_empty());
}

#[test]
fn latest_log_ahead_of_now_yields_empty_plan() {
    // A tracker last filled from a zone far ahead of the caller's: the
    // latest recorded day may postdate "today". Nothing to create.
    let existing = vec![existing_log(1, 2026, 1, 14, "Pacific/Kiritimati")];
    let now = utc_ms(2026, 1, 13, 12, 0, 0); // Jan 13 in UTC

    let plan = plan_backfill(&existing, utc_ms(2026, 1, 10, 0, 0, 0), "UTC", now).unwrap();
    assert!(plan.is_empty());
}

#[test]
fn empty_history_with_now_before_start_is_invalid_range() {
    let r = plan_backfill(
        &[],
        utc_ms(2026, 1, 14, 12, 0, 0),
        "UTC",
        utc_ms(2026, 1, 13, 12, 0, 0),
    );
    assert!(matches!(r, Err(AppError::InvalidRange(_))));
}

#[test]
fn latest_day_is_chosen_by_calendar_order_not_epoch() {
    // Midnight of Jan 10 at UTC-12 is 12:00Z on the 10th; midnight of
    // Jan 11 at UTC+14 is 10:00Z on the 10th. Picking the "latest" log by
    // epoch would name Jan 10 and re-emit Jan 11 as a duplicate.
    let a = existing_log(1, 2026, 1, 10, "Etc/GMT+12");
    let b = existing_log(1, 2026, 1, 11, "Pacific/Kiritimati");
    assert!(a.log_epoch_ms > b.log_epoch_ms, "precondition: epochs invert");

    // Jan 12 12:00Z = Jan 13, 02:00 in Kiritimati
    let now = utc_ms(2026, 1, 12, 12, 0, 0);
    let plan = plan_backfill(
        &[a, b],
        utc_ms(2026, 1, 9, 0, 0, 0),
        "Pacific/Kiritimati",
        now,
    )
    .unwrap();

    let days: Vec<LocalDay> = plan.iter().map(|p| p.local_day).collect();
    assert_eq!(
        days,
        vec![LocalDay::new(2026, 1, 12), LocalDay::new(2026, 1, 13)],
        "must resume after Jan 11, not duplicate it"
    );
}

// ---------------------------------------------------------------------
// Through the store: uniqueness, idempotency, contiguity
// ---------------------------------------------------------------------

fn temp_db(name: &str) -> String {
    let mut path = std::env::temp_dir();
    path.push(format!("{name}_rhabitlogger.sqlite"));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

#[test]
fn store_rejects_duplicates_and_stays_contiguous() {
    let db_path = temp_db("backfill_store");
    let mut pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init schema");

    let user = ensure_user(&pool.conn, "default", "default").expect("user");
    let start = utc_ms(2026, 1, 10, 9, 0, 0);
    let tracker_id =
        insert_tracker(&pool.conn, user.id, "hydrate", start, "UTC").expect("tracker");

    // Initial generation: Jan 10..12
    let plan = plan_logs(start, "UTC", utc_ms(2026, 1, 12, 18, 0, 0)).unwrap();
    let created = bulk_insert_logs(&pool.conn, tracker_id, &plan).unwrap();
    assert_eq!(created, 3);

    // Replaying the same plan creates nothing: the day-uniqueness key
    // absorbs the duplicate batch.
    let replay = bulk_insert_logs(&pool.conn, tracker_id, &plan).unwrap();
    assert_eq!(replay, 0);
    assert_eq!(count_logs(&pool.conn, tracker_id).unwrap(), 3);

    // Backfill three days later, twice; second run is a no-op.
    let now = utc_ms(2026, 1, 15, 18, 0, 0);
    let existing = load_logs_by_tracker(&pool.conn, tracker_id).unwrap();
    let fill = plan_backfill(&existing, start, "UTC", now).unwrap();
    assert_eq!(fill.len(), 3);
    assert_eq!(bulk_insert_logs(&pool.conn, tracker_id, &fill).unwrap(), 3);

    let existing = load_logs_by_tracker(&pool.conn, tracker_id).unwrap();
    let again = plan_backfill(&existing, start, "UTC", now).unwrap();
    assert!(again.is_empty());

    // Unbroken Jan 10..15, no duplicate (tracker, day) pairs.
    let logs = load_logs_by_tracker(&pool.conn, tracker_id).unwrap();
    assert_eq!(logs.len(), 6);
    let days: Vec<LocalDay> = logs.iter().map(|l| l.local_day()).collect();
    let mut deduped = days.clone();
    deduped.dedup();
    assert_eq!(days, deduped, "duplicate days found");
    assert_eq!(days[0], LocalDay::new(2026, 1, 10));
    assert_eq!(days[5], LocalDay::new(2026, 1, 15));
    assert!(find_gaps(&mut pool, tracker_id).unwrap().is_empty());
}
