use slotbook_core::{
    errors::{SlotError, SlotResult},
    models::time_slot::{
        CreateDayOnlySlot, CreateFlexibleSlot, CreateWeeklySlot, SlotFilter, SlotKind, TimeSlot,
    },
};
use slotbook_db::SlotStore;
use uuid::Uuid;

/// Validating persistence access for time slots.
///
/// Create requests are validated before the store is touched. Every store
/// error comes back as [`SlotError::Storage`] with the original report attached.
pub struct TimeSlotRepository<S> {
    store: S,
}

impl<S: SlotStore> TimeSlotRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn create_weekly(&self, dto: &CreateWeeklySlot) -> SlotResult<TimeSlot> {
        let kind = dto.validate()?;
        self.insert(&kind, "Failed to create weekly slot").await
    }

    pub async fn create_flexible(&self, dto: &CreateFlexibleSlot) -> SlotResult<TimeSlot> {
        let kind = dto.validate()?;
        self.insert(&kind, "Failed to create flexible slot").await
    }

    pub async fn create_day_only(&self, dto: &CreateDayOnlySlot) -> SlotResult<TimeSlot> {
        let kind = dto.validate()?;
        self.insert(&kind, "Failed to create day-only slot").await
    }

    pub async fn find_by_id(&self, id: Uuid) -> SlotResult<Option<TimeSlot>> {
        self.store
            .find(id)
            .await
            .map_err(|e| SlotError::storage(format!("Failed to find slot with ID {id}"), e))
    }

    /// Lists slots matching `filter`, ordered by date then start time.
    pub async fn list_all(&self, filter: &SlotFilter) -> SlotResult<Vec<TimeSlot>> {
        self.store
            .list(filter)
            .await
            .map_err(|e| SlotError::storage("Failed to list slots", e))
    }

    /// Unconditionally writes the booking flag. `None` if the slot does not exist.
    pub async fn update_booking_status(
        &self,
        id: Uuid,
        is_booked: bool,
    ) -> SlotResult<Option<TimeSlot>> {
        self.store
            .set_booked(id, is_booked)
            .await
            .map_err(|e| {
                SlotError::storage(format!("Failed to update booking status for slot {id}"), e)
            })
    }

    /// Writes `next` only if the stored flag still equals `expected`.
    pub async fn transition_booking(
        &self,
        id: Uuid,
        expected: bool,
        next: bool,
    ) -> SlotResult<Option<TimeSlot>> {
        self.store
            .swap_booked(id, expected, next)
            .await
            .map_err(|e| {
                SlotError::storage(format!("Failed to update booking status for slot {id}"), e)
            })
    }

    pub async fn delete(&self, id: Uuid) -> SlotResult<bool> {
        self.store
            .delete(id)
            .await
            .map_err(|e| SlotError::storage(format!("Failed to delete slot {id}"), e))
    }

    pub async fn delete_all(&self) -> SlotResult<u64> {
        self.store
            .clear()
            .await
            .map_err(|e| SlotError::storage("Failed to clear slots", e))
    }

    async fn insert(&self, kind: &SlotKind, context: &'static str) -> SlotResult<TimeSlot> {
        self.store
            .insert(kind)
            .await
            .map_err(|e| SlotError::storage(context, e))
    }
}
