//! Single-visit collection helpers: manual field edits and removal.

use crate::errors::{AppError, AppResult};
use crate::models::Visit;
use clap::ValueEnum;
use uuid::Uuid;

/// The finite set of manually editable fields. Edits are literal
/// replacements: changing `time` does not re-derive `shift_type`, and
/// changing `date` does not touch `shift_date`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VisitField {
    Date,
    Time,
    Location,
    Team,
}

impl VisitField {
    pub fn vf_as_str(&self) -> &'static str {
        match self {
            VisitField::Date => "date",
            VisitField::Time => "time",
            VisitField::Location => "location",
            VisitField::Team => "team",
        }
    }
}

pub struct UpdateLogic;

impl UpdateLogic {
    /// Replace one field of the visit matching `id`. No other visit is
    /// touched; an unknown id is signalled, not ignored.
    pub fn update(visits: &mut [Visit], id: Uuid, field: VisitField, value: &str) -> AppResult<()> {
        let visit = visits
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| AppError::VisitNotFound(id.to_string()))?;

        match field {
            VisitField::Date => visit.date = value.to_string(),
            VisitField::Time => visit.time = value.to_string(),
            VisitField::Location => visit.location = value.to_string(),
            VisitField::Team => visit.team = value.to_string(),
        }

        Ok(())
    }

    /// Remove the visit matching `id` from the collection.
    pub fn remove(visits: &mut Vec<Visit>, id: Uuid) -> AppResult<Visit> {
        let index = visits
            .iter()
            .position(|v| v.id == id)
            .ok_or_else(|| AppError::VisitNotFound(id.to_string()))?;

        Ok(visits.remove(index))
    }
}
