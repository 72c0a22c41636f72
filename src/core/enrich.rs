//! Visit enrichment: identity, shift classification, shift date.

use crate::errors::{AppError, AppResult};
use crate::models::{RawVisit, ShiftType, Visit};
use crate::utils::{date, time};
use uuid::Uuid;

pub struct EnrichLogic;

impl EnrichLogic {
    /// Classify a batch of raw visits.
    ///
    /// Output preserves input order and cardinality, and every produced
    /// visit gets a fresh unique id. The whole batch fails on the first
    /// malformed date or time: a misclassified shift must never reach the
    /// dataset, and the caller keeps its pre-call state on error.
    pub fn enrich(raw: &[RawVisit]) -> AppResult<Vec<Visit>> {
        raw.iter().map(Self::enrich_one).collect()
    }

    fn enrich_one(r: &RawVisit) -> AppResult<Visit> {
        date::parse_date(&r.date).ok_or_else(|| AppError::InvalidDate(r.date.clone()))?;

        let t = time::parse_time(&r.time).ok_or_else(|| AppError::InvalidTime(r.time.clone()))?;
        let shift_type = ShiftType::classify(t);

        // A night shift is attributed to the date printed on the source
        // record even when it runs past midnight: shift_date == date for
        // both shift types, no calendar rollover.
        Ok(Visit {
            id: Uuid::new_v4(),
            date: r.date.clone(),
            time: r.time.clone(),
            location: r.location.clone(),
            shift_date: r.date.clone(),
            shift_type,
            team: String::new(),
        })
    }
}
