use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Day/night classification of a visit, derived solely from its time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShiftType {
    Diurno,
    Noturno,
}

impl ShiftType {
    /// Classify a time of day.
    /// Day window is [07:00:00, 19:00:00), half-open at both ends:
    /// 07:00:00 is day, 18:59:59 is day, 19:00:00 is night, 06:59:59 is night.
    pub fn classify(time: NaiveTime) -> Self {
        let day_start = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        let night_start = NaiveTime::from_hms_opt(19, 0, 0).unwrap();

        if time >= day_start && time < night_start {
            ShiftType::Diurno
        } else {
            ShiftType::Noturno
        }
    }

    pub fn st_from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DIURNO" => Some(Self::Diurno),
            "NOTURNO" => Some(Self::Noturno),
            _ => None,
        }
    }

    pub fn st_as_str(&self) -> &'static str {
        match self {
            ShiftType::Diurno => "DIURNO",
            ShiftType::Noturno => "NOTURNO",
        }
    }

    pub fn is_day(&self) -> bool {
        matches!(self, ShiftType::Diurno)
    }

    pub fn is_night(&self) -> bool {
        matches!(self, ShiftType::Noturno)
    }
}
