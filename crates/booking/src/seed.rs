//! Demonstration data for a fresh database.
//!
//! Weekly slots cover Monday to Friday, hourly from 09:00 to 17:00. Each of the
//! next seven days gets two flexible slots (10:00-11:00 and 14:00-15:00), and
//! the seven days after that get one day-only slot each.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use slotbook_core::{
    errors::SlotResult,
    models::time_slot::{CreateDayOnlySlot, CreateFlexibleSlot, CreateWeeklySlot},
};
use slotbook_db::SlotStore;
use tracing::info;

use crate::service::BookingService;

const FLEXIBLE_HOURS: [(&str, &str); 2] = [("10:00", "11:00"), ("14:00", "15:00")];

#[derive(Debug, Clone, Default)]
pub struct SampleSlots {
    pub weekly: Vec<CreateWeeklySlot>,
    pub flexible: Vec<CreateFlexibleSlot>,
    pub day_only: Vec<CreateDayOnlySlot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    pub cleared: u64,
    pub weekly: usize,
    pub flexible: usize,
    pub day_only: usize,
}

/// Builds the sample requests relative to `today`.
pub fn sample_slots(today: NaiveDate) -> SampleSlots {
    let weekly = (1..=5)
        .flat_map(|day| {
            (9..17).map(move |hour| CreateWeeklySlot {
                day_of_week: day,
                start_time: format!("{:02}:00", hour),
                end_time: format!("{:02}:00", hour + 1),
            })
        })
        .collect();

    let flexible = (1..=7)
        .flat_map(|offset| {
            let date = format_date(today + Duration::days(offset));
            FLEXIBLE_HOURS
                .iter()
                .map(move |(start, end)| CreateFlexibleSlot {
                    date: date.clone(),
                    start_time: start.to_string(),
                    end_time: end.to_string(),
                })
        })
        .collect();

    let day_only = (8..=14)
        .map(|offset| CreateDayOnlySlot {
            date: format_date(today + Duration::days(offset)),
        })
        .collect();

    SampleSlots {
        weekly,
        flexible,
        day_only,
    }
}

/// Replaces the store contents with the sample slots.
pub async fn seed<S: SlotStore>(
    service: &BookingService<S>,
    today: NaiveDate,
) -> SlotResult<SeedReport> {
    let repository = service.repository();
    let samples = sample_slots(today);

    let cleared = repository.delete_all().await?;
    info!("Cleared {} existing slots", cleared);

    for dto in &samples.weekly {
        repository.create_weekly(dto).await?;
    }
    info!("Created {} weekly slots", samples.weekly.len());

    for dto in &samples.flexible {
        repository.create_flexible(dto).await?;
    }
    info!("Created {} flexible slots", samples.flexible.len());

    for dto in &samples.day_only {
        repository.create_day_only(dto).await?;
    }
    info!("Created {} day-only slots", samples.day_only.len());

    Ok(SeedReport {
        cleared,
        weekly: samples.weekly.len(),
        flexible: samples.flexible.len(),
        day_only: samples.day_only.len(),
    })
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
