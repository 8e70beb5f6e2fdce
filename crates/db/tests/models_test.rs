use chrono::{NaiveDate, NaiveTime, Utc};
use rstest::rstest;
use slotbook_core::models::time_slot::SlotType;
use slotbook_db::models::DbTimeSlot;
use uuid::Uuid;

fn row(slot_type: &str) -> DbTimeSlot {
    DbTimeSlot {
        id: Uuid::new_v4(),
        slot_type: slot_type.to_string(),
        day_of_week: None,
        date: NaiveDate::from_ymd_opt(2024, 6, 1),
        start_time: None,
        end_time: None,
        is_booked: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_day_only_row_converts() {
    let slot = row("DAY_ONLY").into_time_slot().unwrap();

    assert_eq!(slot.slot_type(), SlotType::DayOnly);
    assert_eq!(slot.date(), NaiveDate::from_ymd_opt(2024, 6, 1));
    assert_eq!(slot.start_time(), None);
}

#[test]
fn test_weekly_row_converts() {
    let mut weekly = row("WEEKLY");
    weekly.date = None;
    weekly.day_of_week = Some(5);
    weekly.start_time = NaiveTime::from_hms_opt(9, 0, 0);
    weekly.end_time = NaiveTime::from_hms_opt(10, 0, 0);

    let slot = weekly.into_time_slot().unwrap();
    assert_eq!(slot.day_of_week().map(i32::from), Some(5));
}

#[test]
fn test_unknown_slot_type_is_rejected() {
    let err = row("MONTHLY").into_time_slot().unwrap_err();
    assert!(err.to_string().contains("unknown slot type"));
}

#[rstest]
// A flexible slot needs times.
#[case("FLEXIBLE", None, true, None)]
// A weekly slot has a day of week, not a date.
#[case("WEEKLY", Some(2), true, Some(((9, 0), (10, 0))))]
#[case("WEEKLY", None, false, Some(((9, 0), (10, 0))))]
// A day-only slot has no times.
#[case("DAY_ONLY", None, true, Some(((9, 0), (10, 0))))]
// Stored ranges must still run forwards.
#[case("FLEXIBLE", None, true, Some(((11, 0), (10, 0))))]
// Out-of-range day of week.
#[case("WEEKLY", Some(7), false, Some(((9, 0), (10, 0))))]
fn test_row_with_wrong_shape_is_rejected(
    #[case] slot_type: &str,
    #[case] day_of_week: Option<i16>,
    #[case] has_date: bool,
    #[case] times: Option<((u32, u32), (u32, u32))>,
) {
    let mut stored = row(slot_type);
    stored.day_of_week = day_of_week;
    if !has_date {
        stored.date = None;
    }
    if let Some(((sh, sm), (eh, em))) = times {
        stored.start_time = NaiveTime::from_hms_opt(sh, sm, 0);
        stored.end_time = NaiveTime::from_hms_opt(eh, em, 0);
    }

    let err = stored.into_time_slot().unwrap_err();
    assert!(err.to_string().contains("is not a valid"));
}
