use rvisitlog::core::enrich::EnrichLogic;
use rvisitlog::core::update::{UpdateLogic, VisitField};
use rvisitlog::errors::AppError;
use rvisitlog::models::{RawVisit, ShiftType};
use uuid::Uuid;

fn sample_visits() -> Vec<rvisitlog::models::Visit> {
    EnrichLogic::enrich(&[
        RawVisit::new("14/03/2024", "08:30:00", "Site A"),
        RawVisit::new("15/03/2024", "22:00:00", "Site B"),
    ])
    .unwrap()
}

#[test]
fn test_update_replaces_single_field() {
    let mut visits = sample_visits();
    let id = visits[0].id;

    UpdateLogic::update(&mut visits, id, VisitField::Team, "Alpha").unwrap();

    assert_eq!(visits[0].team, "Alpha");
    assert_eq!(visits[0].location, "Site A");
}

#[test]
fn test_update_does_not_touch_other_visits() {
    let mut visits = sample_visits();
    let id = visits[0].id;
    let other_before = visits[1].clone();

    UpdateLogic::update(&mut visits, id, VisitField::Location, "Warehouse").unwrap();

    assert_eq!(visits[0].location, "Warehouse");
    assert_eq!(visits[1], other_before);
}

#[test]
fn test_update_is_a_literal_replacement() {
    // Editing the time does not re-derive the classification; the visit
    // keeps the shift type computed at enrichment.
    let mut visits = sample_visits();
    let id = visits[0].id;

    UpdateLogic::update(&mut visits, id, VisitField::Time, "23:00:00").unwrap();

    assert_eq!(visits[0].time, "23:00:00");
    assert_eq!(visits[0].shift_type, ShiftType::Diurno);
}

#[test]
fn test_update_unknown_id_is_signalled() {
    let mut visits = sample_visits();

    let err = UpdateLogic::update(&mut visits, Uuid::new_v4(), VisitField::Team, "X").unwrap_err();
    assert!(matches!(err, AppError::VisitNotFound(_)));
}

#[test]
fn test_remove_deletes_only_the_matching_visit() {
    let mut visits = sample_visits();
    let id = visits[0].id;
    let keep = visits[1].clone();

    let removed = UpdateLogic::remove(&mut visits, id).unwrap();

    assert_eq!(removed.id, id);
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0], keep);
}

#[test]
fn test_remove_unknown_id_is_signalled() {
    let mut visits = sample_visits();

    let err = UpdateLogic::remove(&mut visits, Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, AppError::VisitNotFound(_)));
    assert_eq!(visits.len(), 2);
}
