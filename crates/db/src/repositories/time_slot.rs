use crate::models::DbTimeSlot;
use eyre::Result;
use slotbook_core::models::time_slot::{SlotFilter, SlotKind};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_time_slot(pool: &Pool<Postgres>, kind: &SlotKind) -> Result<DbTimeSlot> {
    tracing::debug!("Creating time slot: type={}", kind.slot_type());

    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        INSERT INTO time_slots (slot_type, day_of_week, date, start_time, end_time, is_booked)
        VALUES ($1, $2, $3, $4, $5, FALSE)
        RETURNING id, slot_type, day_of_week, date, start_time, end_time, is_booked, created_at, updated_at
        "#,
    )
    .bind(kind.slot_type().as_str())
    .bind(kind.day_of_week().map(|day| i16::from(day.value())))
    .bind(kind.date())
    .bind(kind.start_time())
    .bind(kind.end_time())
    .fetch_one(pool)
    .await?;

    tracing::debug!("Time slot created: id={}", time_slot.id);
    Ok(time_slot)
}

pub async fn get_time_slot_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbTimeSlot>> {
    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, slot_type, day_of_week, date, start_time, end_time, is_booked, created_at, updated_at
        FROM time_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(time_slot)
}

pub async fn list_time_slots(
    pool: &Pool<Postgres>,
    filter: &SlotFilter,
) -> Result<Vec<DbTimeSlot>> {
    tracing::debug!("Listing time slots: filter={:?}", filter);

    let time_slots = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, slot_type, day_of_week, date, start_time, end_time, is_booked, created_at, updated_at
        FROM time_slots
        WHERE ($1::varchar IS NULL OR slot_type = $1)
          AND ($2::boolean IS NULL OR is_booked = $2)
          AND ($3::smallint IS NULL OR day_of_week = $3)
          AND ($4::date IS NULL OR date = $4)
        ORDER BY date ASC, start_time ASC, created_at ASC, id ASC
        "#,
    )
    .bind(filter.slot_type.map(|slot_type| slot_type.as_str()))
    .bind(filter.is_booked)
    .bind(filter.day_of_week.map(|day| i16::from(day.value())))
    .bind(filter.date)
    .fetch_all(pool)
    .await?;

    Ok(time_slots)
}

pub async fn update_booking_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    is_booked: bool,
) -> Result<Option<DbTimeSlot>> {
    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        UPDATE time_slots
        SET is_booked = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING id, slot_type, day_of_week, date, start_time, end_time, is_booked, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(is_booked)
    .fetch_optional(pool)
    .await?;

    Ok(time_slot)
}

/// Sets the booking flag only if it currently equals `expected`.
///
/// Returns `None` when the row is missing or holds a different state.
pub async fn swap_booking_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    expected: bool,
    is_booked: bool,
) -> Result<Option<DbTimeSlot>> {
    tracing::debug!(
        "Swapping booking status: id={}, expected={}, is_booked={}",
        id,
        expected,
        is_booked
    );

    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        UPDATE time_slots
        SET is_booked = $3, updated_at = NOW()
        WHERE id = $1 AND is_booked = $2
        RETURNING id, slot_type, day_of_week, date, start_time, end_time, is_booked, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(expected)
    .bind(is_booked)
    .fetch_optional(pool)
    .await?;

    Ok(time_slot)
}

pub async fn delete_time_slot(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM time_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_all_time_slots(pool: &Pool<Postgres>) -> Result<u64> {
    let result = sqlx::query("DELETE FROM time_slots").execute(pool).await?;

    tracing::debug!("Deleted {} time slots", result.rows_affected());
    Ok(result.rows_affected())
}
