use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use slotbook_core::models::time_slot::{SlotKind, SlotType, TimeSlot};
use sqlx::FromRow;
use uuid::Uuid;

/// A row of the `time_slots` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeSlot {
    pub id: Uuid,
    pub slot_type: String,
    pub day_of_week: Option<i16>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub is_booked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbTimeSlot {
    /// Converts the nullable row into the typed domain slot.
    ///
    /// Fails when the stored columns do not form a valid slot of the stored type.
    pub fn into_time_slot(self) -> Result<TimeSlot> {
        let slot_type: SlotType = self
            .slot_type
            .parse()
            .wrap_err_with(|| format!("Row {} has an unknown slot type", self.id))?;

        let kind = SlotKind::from_parts(
            slot_type,
            self.day_of_week.map(i32::from),
            self.date,
            self.start_time,
            self.end_time,
        )
        .wrap_err_with(|| format!("Row {} is not a valid {} slot", self.id, slot_type))?;

        Ok(TimeSlot {
            id: self.id,
            kind,
            is_booked: self.is_booked,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
