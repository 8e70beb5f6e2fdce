//! In-process [`SlotStore`] used by tests and demos.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use eyre::Result;
use slotbook_core::models::time_slot::{SlotFilter, SlotKind, TimeSlot};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::SlotStore;

/// Keeps slots in a map guarded by a single lock, so the conditional booking
/// swap is atomic with respect to every other operation.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<Uuid, TimeSlot>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}

#[async_trait]
impl SlotStore for MemorySlotStore {
    async fn insert(&self, kind: &SlotKind) -> Result<TimeSlot> {
        let now = Utc::now();
        let slot = TimeSlot {
            id: Uuid::new_v4(),
            kind: *kind,
            is_booked: false,
            created_at: now,
            updated_at: now,
        };

        self.slots.write().await.insert(slot.id, slot.clone());
        Ok(slot)
    }

    async fn find(&self, id: Uuid) -> Result<Option<TimeSlot>> {
        Ok(self.slots.read().await.get(&id).cloned())
    }

    async fn list(&self, filter: &SlotFilter) -> Result<Vec<TimeSlot>> {
        let mut slots: Vec<TimeSlot> = self
            .slots
            .read()
            .await
            .values()
            .filter(|slot| filter.matches(slot))
            .cloned()
            .collect();

        // NULL dates and times sort after present values, as in PostgreSQL.
        slots.sort_by_key(|slot| {
            (
                slot.date().is_none(),
                slot.date(),
                slot.start_time().is_none(),
                slot.start_time(),
                slot.created_at,
                slot.id,
            )
        });
        Ok(slots)
    }

    async fn set_booked(&self, id: Uuid, is_booked: bool) -> Result<Option<TimeSlot>> {
        let mut slots = self.slots.write().await;
        Ok(slots.get_mut(&id).map(|slot| {
            slot.is_booked = is_booked;
            slot.updated_at = Utc::now();
            slot.clone()
        }))
    }

    async fn swap_booked(
        &self,
        id: Uuid,
        expected: bool,
        is_booked: bool,
    ) -> Result<Option<TimeSlot>> {
        let mut slots = self.slots.write().await;
        Ok(slots
            .get_mut(&id)
            .filter(|slot| slot.is_booked == expected)
            .map(|slot| {
                slot.is_booked = is_booked;
                slot.updated_at = Utc::now();
                slot.clone()
            }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.slots.write().await.remove(&id).is_some())
    }

    async fn clear(&self) -> Result<u64> {
        let mut slots = self.slots.write().await;
        let count = slots.len() as u64;
        slots.clear();
        Ok(count)
    }
}
