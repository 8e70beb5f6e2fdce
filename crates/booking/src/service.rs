use slotbook_core::{
    errors::{SlotError, SlotResult},
    models::time_slot::{
        BookingResult, CreateDayOnlySlot, CreateFlexibleSlot, CreateWeeklySlot, SlotFilter,
        TimeSlot,
    },
};
use slotbook_db::SlotStore;
use tracing::{info, warn};
use uuid::Uuid;

use crate::repository::TimeSlotRepository;

/// Booking rules over a [`TimeSlotRepository`].
///
/// A slot is either available or booked. `book` moves it to booked, `cancel`
/// moves it back, and each move is a single conditional write so two callers
/// racing for the same slot cannot both succeed.
pub struct BookingService<S> {
    repository: TimeSlotRepository<S>,
}

impl<S: SlotStore> BookingService<S> {
    pub fn new(repository: TimeSlotRepository<S>) -> Self {
        Self { repository }
    }

    /// Builds the repository around `store` and wraps it.
    pub fn with_store(store: S) -> Self {
        Self::new(TimeSlotRepository::new(store))
    }

    pub fn repository(&self) -> &TimeSlotRepository<S> {
        &self.repository
    }

    /// Creates a weekly slot; `day_of_week` runs from 0 (Sunday) to 6 (Saturday).
    pub async fn create_weekly(
        &self,
        day_of_week: i32,
        start_time: &str,
        end_time: &str,
    ) -> SlotResult<TimeSlot> {
        self.repository
            .create_weekly(&CreateWeeklySlot {
                day_of_week,
                start_time: start_time.to_string(),
                end_time: end_time.to_string(),
            })
            .await
    }

    pub async fn create_flexible(
        &self,
        date: &str,
        start_time: &str,
        end_time: &str,
    ) -> SlotResult<TimeSlot> {
        self.repository
            .create_flexible(&CreateFlexibleSlot {
                date: date.to_string(),
                start_time: start_time.to_string(),
                end_time: end_time.to_string(),
            })
            .await
    }

    pub async fn create_day_only(&self, date: &str) -> SlotResult<TimeSlot> {
        self.repository
            .create_day_only(&CreateDayOnlySlot {
                date: date.to_string(),
            })
            .await
    }

    pub async fn list_all(&self, filter: &SlotFilter) -> SlotResult<Vec<TimeSlot>> {
        self.repository.list_all(filter).await
    }

    /// Lists slots that are not booked. Any `is_booked` in `filter` is overridden.
    pub async fn list_available(&self, filter: &SlotFilter) -> SlotResult<Vec<TimeSlot>> {
        self.repository
            .list_all(&filter.clone().is_booked(false))
            .await
    }

    /// Lists booked slots. Any `is_booked` in `filter` is overridden.
    pub async fn list_booked(&self, filter: &SlotFilter) -> SlotResult<Vec<TimeSlot>> {
        self.repository
            .list_all(&filter.clone().is_booked(true))
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> SlotResult<TimeSlot> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(SlotError::NotFound(id))
    }

    /// Marks an available slot as booked.
    ///
    /// When the conditional write misses, the follow-up read only checks that
    /// the slot still exists. A concurrent `cancel` landing between the two
    /// still yields `AlreadyBooked`, reported as a conflict with the write.
    pub async fn book(&self, id: Uuid) -> SlotResult<BookingResult> {
        match self.repository.transition_booking(id, false, true).await? {
            Some(slot) => {
                info!("Slot booked: id={}", id);
                Ok(BookingResult {
                    success: true,
                    slot,
                    message: "Slot booked successfully".to_string(),
                })
            }
            None => {
                // Existence check happens after the write missed, only to pick the error.
                self.get_by_id(id).await?;
                warn!("Rejected booking of already booked slot: id={}", id);
                Err(SlotError::AlreadyBooked(id))
            }
        }
    }

    /// Returns a booked slot to available.
    ///
    /// Mirrors `book`: after a missed conditional write, an existing slot
    /// yields `NotBooked` even if a concurrent `book` has since landed.
    pub async fn cancel(&self, id: Uuid) -> SlotResult<BookingResult> {
        match self.repository.transition_booking(id, true, false).await? {
            Some(slot) => {
                info!("Booking cancelled: id={}", id);
                Ok(BookingResult {
                    success: true,
                    slot,
                    message: "Booking cancelled successfully".to_string(),
                })
            }
            None => {
                self.get_by_id(id).await?;
                warn!("Rejected cancellation of available slot: id={}", id);
                Err(SlotError::NotBooked(id))
            }
        }
    }

    /// Permanently removes a slot whether or not it is booked.
    pub async fn delete(&self, id: Uuid) -> SlotResult<()> {
        if !self.repository.delete(id).await? {
            return Err(SlotError::NotFound(id));
        }

        info!("Slot deleted: id={}", id);
        Ok(())
    }
}
