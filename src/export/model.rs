// src/export/model.rs

use crate::models::Visit;
use serde::Serialize;

/// Flat row shape shared by the CSV / JSON / XLSX exporters.
#[derive(Serialize, Clone, Debug)]
pub struct VisitExport {
    pub id: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub shift_date: String,
    pub shift_type: String,
    pub team: String,
}

impl From<&Visit> for VisitExport {
    fn from(v: &Visit) -> Self {
        Self {
            id: v.id.to_string(),
            date: v.date.clone(),
            time: v.time.clone(),
            location: v.location.clone(),
            shift_date: v.shift_date.clone(),
            shift_type: v.shift_type.st_as_str().to_string(),
            team: v.team.clone(),
        }
    }
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "time",
        "location",
        "shift_date",
        "shift_type",
        "team",
    ]
}

pub(crate) fn visit_to_row(v: &VisitExport) -> Vec<String> {
    vec![
        v.id.clone(),
        v.date.clone(),
        v.time.clone(),
        v.location.clone(),
        v.shift_date.clone(),
        v.shift_type.clone(),
        v.team.clone(),
    ]
}
