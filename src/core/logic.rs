//! Dataset-level summary built over the classified collection.

use crate::models::{ShiftType, Visit};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VisitSummary {
    pub total: usize,
    pub day: usize,
    pub night: usize,
    pub unassigned: usize,
    /// Team name → visit count, sorted by team name.
    pub per_team: BTreeMap<String, usize>,
}

pub struct Core;

impl Core {
    pub fn build_summary(visits: &[Visit]) -> VisitSummary {
        let mut summary = VisitSummary {
            total: visits.len(),
            ..Default::default()
        };

        for v in visits {
            match v.shift_type {
                ShiftType::Diurno => summary.day += 1,
                ShiftType::Noturno => summary.night += 1,
            }

            if v.has_team() {
                *summary.per_team.entry(v.team.clone()).or_insert(0) += 1;
            } else {
                summary.unassigned += 1;
            }
        }

        summary
    }
}
