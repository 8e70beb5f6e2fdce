use async_trait::async_trait;
use mockall::mock;
use slotbook_core::models::time_slot::{SlotFilter, SlotKind, TimeSlot};
use uuid::Uuid;

use crate::store::SlotStore;

// Mock store for injecting storage failures in tests
mock! {
    pub SlotStore {}

    #[async_trait]
    impl SlotStore for SlotStore {
        async fn insert(&self, kind: &SlotKind) -> eyre::Result<TimeSlot>;

        async fn find(&self, id: Uuid) -> eyre::Result<Option<TimeSlot>>;

        async fn list(&self, filter: &SlotFilter) -> eyre::Result<Vec<TimeSlot>>;

        async fn set_booked(&self, id: Uuid, is_booked: bool) -> eyre::Result<Option<TimeSlot>>;

        async fn swap_booked(
            &self,
            id: Uuid,
            expected: bool,
            is_booked: bool,
        ) -> eyre::Result<Option<TimeSlot>>;

        async fn delete(&self, id: Uuid) -> eyre::Result<bool>;

        async fn clear(&self) -> eyre::Result<u64>;
    }
}
