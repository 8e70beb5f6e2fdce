//! Row-store contract for time slots and its PostgreSQL implementation.

use async_trait::async_trait;
use eyre::Result;
use slotbook_core::models::time_slot::{SlotFilter, SlotKind, TimeSlot};
use uuid::Uuid;

use crate::DbPool;
use crate::repositories::time_slot;

/// CRUD access to the `time_slots` rows.
///
/// Implementations report every failure as an [`eyre::Report`]; callers above
/// this layer translate them into domain errors.
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Inserts an available slot and returns it with its assigned id.
    async fn insert(&self, kind: &SlotKind) -> Result<TimeSlot>;

    async fn find(&self, id: Uuid) -> Result<Option<TimeSlot>>;

    /// Returns matching slots ordered by date, then start time, nulls last.
    async fn list(&self, filter: &SlotFilter) -> Result<Vec<TimeSlot>>;

    async fn set_booked(&self, id: Uuid, is_booked: bool) -> Result<Option<TimeSlot>>;

    /// Atomically sets the booking flag to `is_booked` if it currently equals
    /// `expected`. Returns `None` when no row matched both conditions.
    async fn swap_booked(
        &self,
        id: Uuid,
        expected: bool,
        is_booked: bool,
    ) -> Result<Option<TimeSlot>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Removes every row, returning how many were deleted.
    async fn clear(&self) -> Result<u64>;
}

/// [`SlotStore`] backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgSlotStore {
    pool: DbPool,
}

impl PgSlotStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SlotStore for PgSlotStore {
    async fn insert(&self, kind: &SlotKind) -> Result<TimeSlot> {
        time_slot::create_time_slot(&self.pool, kind)
            .await?
            .into_time_slot()
    }

    async fn find(&self, id: Uuid) -> Result<Option<TimeSlot>> {
        time_slot::get_time_slot_by_id(&self.pool, id)
            .await?
            .map(|row| row.into_time_slot())
            .transpose()
    }

    async fn list(&self, filter: &SlotFilter) -> Result<Vec<TimeSlot>> {
        time_slot::list_time_slots(&self.pool, filter)
            .await?
            .into_iter()
            .map(|row| row.into_time_slot())
            .collect()
    }

    async fn set_booked(&self, id: Uuid, is_booked: bool) -> Result<Option<TimeSlot>> {
        time_slot::update_booking_status(&self.pool, id, is_booked)
            .await?
            .map(|row| row.into_time_slot())
            .transpose()
    }

    async fn swap_booked(
        &self,
        id: Uuid,
        expected: bool,
        is_booked: bool,
    ) -> Result<Option<TimeSlot>> {
        time_slot::swap_booking_status(&self.pool, id, expected, is_booked)
            .await?
            .map(|row| row.into_time_slot())
            .transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        time_slot::delete_time_slot(&self.pool, id).await
    }

    async fn clear(&self) -> Result<u64> {
        time_slot::delete_all_time_slots(&self.pool).await
    }
}
