use chrono::NaiveDate;
use mockall::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_booking::TimeSlotRepository;
use slotbook_core::{
    errors::{ErrorKind, SlotError},
    models::time_slot::{
        CreateDayOnlySlot, CreateFlexibleSlot, CreateWeeklySlot, DayOfWeek, SlotFilter, SlotType,
    },
};
use slotbook_db::{MemorySlotStore, mock::store::MockSlotStore};
use std::error::Error;
use uuid::Uuid;

fn weekly(day_of_week: i32, start: &str, end: &str) -> CreateWeeklySlot {
    CreateWeeklySlot {
        day_of_week,
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

fn flexible(date: &str, start: &str, end: &str) -> CreateFlexibleSlot {
    CreateFlexibleSlot {
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

#[tokio::test]
async fn test_create_weekly_for_every_valid_day() {
    let repository = TimeSlotRepository::new(MemorySlotStore::new());

    for day in 0..=6 {
        for (start, end) in [("00:00", "00:01"), ("9:00", "17:00"), ("09:00", "23:59")] {
            let slot = repository
                .create_weekly(&weekly(day, start, end))
                .await
                .unwrap();

            assert_eq!(slot.slot_type(), SlotType::Weekly);
            assert_eq!(slot.day_of_week().map(i32::from), Some(day));
            assert!(!slot.is_booked);
        }
    }

    assert_eq!(repository.store().len().await, 21);
}

#[tokio::test]
async fn test_create_flexible_and_day_only() {
    let repository = TimeSlotRepository::new(MemorySlotStore::new());

    let flexible = repository
        .create_flexible(&flexible("2024-02-29", "10:00", "11:00"))
        .await
        .unwrap();
    let day_only = repository
        .create_day_only(&CreateDayOnlySlot {
            date: "2024-03-01".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(flexible.slot_type(), SlotType::Flexible);
    assert!(flexible.start_time().is_some());
    assert_eq!(day_only.slot_type(), SlotType::DayOnly);
    assert_eq!(day_only.start_time(), None);
    assert!(!day_only.is_booked);
}

#[rstest]
#[case(weekly(7, "09:00", "10:00"))]
#[case(weekly(-1, "09:00", "10:00"))]
#[case(weekly(1, "24:00", "23:00"))]
#[case(weekly(1, "9:60", "10:00"))]
#[case(weekly(1, "10:00", "10:00"))]
#[case(weekly(1, "11:00", "10:00"))]
#[tokio::test]
async fn test_invalid_weekly_never_reaches_store(#[case] dto: CreateWeeklySlot) {
    // No expectations: any store call would panic.
    let repository = TimeSlotRepository::new(MockSlotStore::new());

    let err = repository.create_weekly(&dto).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[rstest]
#[case(flexible("2024-02-30", "09:00", "10:00"))]
#[case(flexible("2024-2-03", "09:00", "10:00"))]
#[case(flexible("2024-02-03", "09:00", "09:00"))]
#[tokio::test]
async fn test_invalid_flexible_never_reaches_store(#[case] dto: CreateFlexibleSlot) {
    let repository = TimeSlotRepository::new(MockSlotStore::new());

    let err = repository.create_flexible(&dto).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_invalid_day_only_never_reaches_store() {
    let repository = TimeSlotRepository::new(MockSlotStore::new());

    let err = repository
        .create_day_only(&CreateDayOnlySlot {
            date: "2023-02-29".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_store_failure_is_wrapped_with_cause() {
    let mut store = MockSlotStore::new();
    store
        .expect_insert()
        .times(1)
        .returning(|_| Err(eyre::eyre!("connection refused")));

    let repository = TimeSlotRepository::new(store);
    let err = repository
        .create_weekly(&weekly(1, "09:00", "10:00"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Storage);
    assert_eq!(err.to_string(), "Storage failure: Failed to create weekly slot");
    let cause = err.source().expect("storage failures keep their cause");
    assert!(cause.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_find_failure_names_the_slot() {
    let id = Uuid::new_v4();
    let mut store = MockSlotStore::new();
    store
        .expect_find()
        .with(predicate::eq(id))
        .returning(|_| Err(eyre::eyre!("timeout")));

    let repository = TimeSlotRepository::new(store);
    match repository.find_by_id(id).await {
        Err(SlotError::Storage { message, .. }) => {
            assert_eq!(message, format!("Failed to find slot with ID {id}"));
        }
        other => panic!("expected storage failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_booking_status_is_unconditional() {
    let repository = TimeSlotRepository::new(MemorySlotStore::new());
    let slot = repository
        .create_weekly(&weekly(2, "09:00", "10:00"))
        .await
        .unwrap();

    let booked = repository
        .update_booking_status(slot.id, true)
        .await
        .unwrap()
        .unwrap();
    assert!(booked.is_booked);

    let still_booked = repository
        .update_booking_status(slot.id, true)
        .await
        .unwrap()
        .unwrap();
    assert!(still_booked.is_booked);

    assert_eq!(
        repository
            .update_booking_status(Uuid::new_v4(), true)
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn test_list_all_filters_by_day_and_date() {
    let repository = TimeSlotRepository::new(MemorySlotStore::new());
    repository
        .create_weekly(&weekly(1, "09:00", "10:00"))
        .await
        .unwrap();
    repository
        .create_weekly(&weekly(2, "09:00", "10:00"))
        .await
        .unwrap();
    repository
        .create_flexible(&flexible("2024-05-01", "09:00", "10:00"))
        .await
        .unwrap();

    let tuesday = SlotFilter::new().day_of_week(DayOfWeek::new(2).unwrap());
    let slots = repository.list_all(&tuesday).await.unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].day_of_week().map(i32::from), Some(2));

    let may_first = SlotFilter::new().date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    let slots = repository.list_all(&may_first).await.unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].slot_type(), SlotType::Flexible);
}
