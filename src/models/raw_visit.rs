use serde::{Deserialize, Serialize};

/// Unclassified record as extracted from a source document.
/// Field values are kept as the literal strings printed on the record:
/// `date` is DD/MM/YYYY, `time` is HH:MM:SS.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawVisit {
    pub date: String,
    pub time: String,
    pub location: String,
}

impl RawVisit {
    pub fn new(date: impl Into<String>, time: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            location: location.into(),
        }
    }
}
