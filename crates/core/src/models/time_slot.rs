use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{SlotError, SlotResult};
use crate::validation::{self, minutes_of_day};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotType {
    Weekly,
    Flexible,
    DayOnly,
}

impl SlotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotType::Weekly => "WEEKLY",
            SlotType::Flexible => "FLEXIBLE",
            SlotType::DayOnly => "DAY_ONLY",
        }
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotType {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WEEKLY" => Ok(SlotType::Weekly),
            "FLEXIBLE" => Ok(SlotType::Flexible),
            "DAY_ONLY" => Ok(SlotType::DayOnly),
            other => Err(SlotError::validation(format!("Unknown slot type: {other}"))),
        }
    }
}

/// Day of the week, 0 (Sunday) through 6 (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const SUNDAY: DayOfWeek = DayOfWeek(0);
    pub const SATURDAY: DayOfWeek = DayOfWeek(6);

    pub fn new(value: i32) -> SlotResult<Self> {
        match u8::try_from(value) {
            Ok(day) if day <= 6 => Ok(DayOfWeek(day)),
            _ => Err(SlotError::validation(
                "day_of_week must be between 0 (Sunday) and 6 (Saturday)",
            )),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for DayOfWeek {
    type Error = SlotError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        DayOfWeek::new(value)
    }
}

impl From<DayOfWeek> for i32 {
    fn from(day: DayOfWeek) -> Self {
        i32::from(day.0)
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        DayOfWeek(weekday.num_days_from_sunday() as u8)
    }
}

/// Start and end of a slot within a single day; `start_time < end_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimeRangeFields")]
pub struct TimeRange {
    #[serde(with = "hhmm")]
    start_time: NaiveTime,
    #[serde(with = "hhmm")]
    end_time: NaiveTime,
}

#[derive(Deserialize)]
struct TimeRangeFields {
    #[serde(with = "hhmm")]
    start_time: NaiveTime,
    #[serde(with = "hhmm")]
    end_time: NaiveTime,
}

impl TryFrom<TimeRangeFields> for TimeRange {
    type Error = SlotError;

    fn try_from(fields: TimeRangeFields) -> Result<Self, Self::Error> {
        TimeRange::new(fields.start_time, fields.end_time)
    }
}

impl TimeRange {
    /// Builds a range, comparing at minute precision.
    pub fn new(start_time: NaiveTime, end_time: NaiveTime) -> SlotResult<Self> {
        if minutes_of_day(start_time) >= minutes_of_day(end_time) {
            return Err(SlotError::validation("Start time must be before end time"));
        }
        Ok(Self {
            start_time,
            end_time,
        })
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }
}

/// The schedule part of a slot. Each variant carries exactly the fields that
/// are meaningful for its slot type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotKind {
    Weekly {
        day_of_week: DayOfWeek,
        #[serde(flatten)]
        time: TimeRange,
    },
    Flexible {
        date: NaiveDate,
        #[serde(flatten)]
        time: TimeRange,
    },
    DayOnly {
        date: NaiveDate,
    },
}

impl SlotKind {
    pub fn slot_type(&self) -> SlotType {
        match self {
            SlotKind::Weekly { .. } => SlotType::Weekly,
            SlotKind::Flexible { .. } => SlotType::Flexible,
            SlotKind::DayOnly { .. } => SlotType::DayOnly,
        }
    }

    pub fn day_of_week(&self) -> Option<DayOfWeek> {
        match self {
            SlotKind::Weekly { day_of_week, .. } => Some(*day_of_week),
            _ => None,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            SlotKind::Flexible { date, .. } | SlotKind::DayOnly { date } => Some(*date),
            SlotKind::Weekly { .. } => None,
        }
    }

    pub fn time_range(&self) -> Option<TimeRange> {
        match self {
            SlotKind::Weekly { time, .. } | SlotKind::Flexible { time, .. } => Some(*time),
            SlotKind::DayOnly { .. } => None,
        }
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        self.time_range().map(|range| range.start_time())
    }

    pub fn end_time(&self) -> Option<NaiveTime> {
        self.time_range().map(|range| range.end_time())
    }

    /// Reassembles a kind from the nullable columns of a stored row.
    pub fn from_parts(
        slot_type: SlotType,
        day_of_week: Option<i32>,
        date: Option<NaiveDate>,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
    ) -> SlotResult<Self> {
        let time = match (start_time, end_time) {
            (Some(start), Some(end)) => Some(TimeRange::new(start, end)?),
            (None, None) => None,
            _ => {
                return Err(SlotError::validation(
                    "start_time and end_time must be set together",
                ));
            }
        };

        match (slot_type, day_of_week, date, time) {
            (SlotType::Weekly, Some(day), None, Some(time)) => Ok(SlotKind::Weekly {
                day_of_week: DayOfWeek::new(day)?,
                time,
            }),
            (SlotType::Flexible, None, Some(date), Some(time)) => {
                Ok(SlotKind::Flexible { date, time })
            }
            (SlotType::DayOnly, None, Some(date), None) => Ok(SlotKind::DayOnly { date }),
            (slot_type, ..) => Err(SlotError::validation(format!(
                "Fields do not match slot type {slot_type}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    #[serde(flatten)]
    pub kind: SlotKind,
    pub is_booked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimeSlot {
    pub fn slot_type(&self) -> SlotType {
        self.kind.slot_type()
    }

    pub fn day_of_week(&self) -> Option<DayOfWeek> {
        self.kind.day_of_week()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.kind.date()
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        self.kind.start_time()
    }

    pub fn end_time(&self) -> Option<NaiveTime> {
        self.kind.end_time()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWeeklySlot {
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
}

impl CreateWeeklySlot {
    pub fn validate(&self) -> SlotResult<SlotKind> {
        let day_of_week = validation::parse_day_of_week(self.day_of_week)?;
        let time = validation::parse_time_range(&self.start_time, &self.end_time)?;
        Ok(SlotKind::Weekly { day_of_week, time })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFlexibleSlot {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl CreateFlexibleSlot {
    pub fn validate(&self) -> SlotResult<SlotKind> {
        let date = validation::parse_date(&self.date)?;
        let time = validation::parse_time_range(&self.start_time, &self.end_time)?;
        Ok(SlotKind::Flexible { date, time })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDayOnlySlot {
    pub date: String,
}

impl CreateDayOnlySlot {
    pub fn validate(&self) -> SlotResult<SlotKind> {
        let date = validation::parse_date(&self.date)?;
        Ok(SlotKind::DayOnly { date })
    }
}

/// Optional constraints for listing slots. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotFilter {
    pub slot_type: Option<SlotType>,
    pub is_booked: Option<bool>,
    pub day_of_week: Option<DayOfWeek>,
    pub date: Option<NaiveDate>,
}

impl SlotFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot_type(mut self, slot_type: SlotType) -> Self {
        self.slot_type = Some(slot_type);
        self
    }

    pub fn is_booked(mut self, is_booked: bool) -> Self {
        self.is_booked = Some(is_booked);
        self
    }

    pub fn day_of_week(mut self, day_of_week: DayOfWeek) -> Self {
        self.day_of_week = Some(day_of_week);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn matches(&self, slot: &TimeSlot) -> bool {
        self.slot_type.is_none_or(|t| slot.slot_type() == t)
            && self.is_booked.is_none_or(|b| slot.is_booked == b)
            && self.day_of_week.is_none_or(|d| slot.day_of_week() == Some(d))
            && self.date.is_none_or(|d| slot.date() == Some(d))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResult {
    pub success: bool,
    pub slot: TimeSlot,
    pub message: String,
}

/// Serde adapter writing times as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        crate::validation::parse_time(&value).map_err(de::Error::custom)
    }
}
