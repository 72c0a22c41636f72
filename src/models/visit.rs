use super::shift_type::ShiftType;
use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classified, identity-bearing visit record ready for editing and export.
///
/// `date`, `time` and `shift_date` stay literal strings: manual edits are
/// free-form, and team assignment must tolerate a shift date it cannot
/// parse. Structured values are derived on demand via the accessors below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Visit {
    pub id: Uuid,
    pub date: String,       // DD/MM/YYYY, as printed on the source record
    pub time: String,       // HH:MM:SS
    pub location: String,
    pub shift_date: String, // the date the shift is attributed to
    pub shift_type: ShiftType,
    pub team: String,       // empty until assigned
}

impl Visit {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        date::parse_date(&self.date)
    }

    pub fn parsed_time(&self) -> Option<NaiveTime> {
        time::parse_time(&self.time)
    }

    pub fn parsed_shift_date(&self) -> Option<NaiveDate> {
        date::parse_date(&self.shift_date)
    }

    /// Day-of-month of `shift_date`, read leniently: the first of exactly
    /// three `/`-separated components, if it is an integer. `None` marks
    /// the shift date as unparseable for bulk operations.
    pub fn shift_day_of_month(&self) -> Option<u32> {
        date::day_of_month(&self.shift_date)
    }

    pub fn has_team(&self) -> bool {
        !self.team.trim().is_empty()
    }
}
