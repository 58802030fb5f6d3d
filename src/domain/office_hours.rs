use crate::utils::error::FixtureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_OPENING_TIME: &str = "08:00";
pub const DEFAULT_CLOSING_TIME: &str = "05:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OfficeDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl OfficeDay {
    /// 依星期順序，週一為首
    pub const ALL: [OfficeDay; 7] = [
        OfficeDay::Monday,
        OfficeDay::Tuesday,
        OfficeDay::Wednesday,
        OfficeDay::Thursday,
        OfficeDay::Friday,
        OfficeDay::Saturday,
        OfficeDay::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OfficeDay::Monday => "MONDAY",
            OfficeDay::Tuesday => "TUESDAY",
            OfficeDay::Wednesday => "WEDNESDAY",
            OfficeDay::Thursday => "THURSDAY",
            OfficeDay::Friday => "FRIDAY",
            OfficeDay::Saturday => "SATURDAY",
            OfficeDay::Sunday => "SUNDAY",
        }
    }
}

impl fmt::Display for OfficeDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfficeDay {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        OfficeDay::ALL
            .into_iter()
            .find(|day| day.as_str() == wanted)
            .ok_or_else(|| FixtureError::InvalidValue {
                field: "office_day".to_string(),
                value: s.to_string(),
                reason: "Expected a weekday name such as MONDAY".to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeUnit {
    Am,
    Pm,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Am => "AM",
            TimeUnit::Pm => "PM",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(TimeUnit::Am),
            "PM" => Ok(TimeUnit::Pm),
            _ => Err(FixtureError::InvalidValue {
                field: "time_unit".to_string(),
                value: s.to_string(),
                reason: "Expected AM or PM".to_string(),
            }),
        }
    }
}

/// 診所單日的營業與休息時間
///
/// 時間保留頁面上顯示的 `HH:MM` 文字，不檢查格式，也不檢查休息時間是否晚於營業時間
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicOfficeHours {
    pub office_day: OfficeDay,
    pub opening_time: String,
    pub opening_time_unit: TimeUnit,
    pub closing_time: String,
    pub closing_time_unit: TimeUnit,
}

impl Default for ClinicOfficeHours {
    fn default() -> Self {
        Self {
            office_day: OfficeDay::Monday,
            opening_time: DEFAULT_OPENING_TIME.to_string(),
            opening_time_unit: TimeUnit::Am,
            closing_time: DEFAULT_CLOSING_TIME.to_string(),
            closing_time_unit: TimeUnit::Pm,
        }
    }
}

impl ClinicOfficeHours {
    /// 週一 08:00 AM 至 05:00 PM
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(
        office_day: OfficeDay,
        opening_time: impl Into<String>,
        opening_time_unit: TimeUnit,
        closing_time: impl Into<String>,
        closing_time_unit: TimeUnit,
    ) -> Self {
        Self {
            office_day,
            opening_time: opening_time.into(),
            opening_time_unit,
            closing_time: closing_time.into(),
            closing_time_unit,
        }
    }
}
