use rvisitlog::core::enrich::EnrichLogic;
use rvisitlog::errors::AppError;
use rvisitlog::models::{RawVisit, ShiftType};
use rvisitlog::utils::time::parse_time;
use std::collections::HashSet;

fn raw(date: &str, time: &str, location: &str) -> RawVisit {
    RawVisit::new(date, time, location)
}

#[test]
fn test_day_shift_boundaries() {
    assert_eq!(
        ShiftType::classify(parse_time("07:00:00").unwrap()),
        ShiftType::Diurno
    );
    assert_eq!(
        ShiftType::classify(parse_time("18:59:59").unwrap()),
        ShiftType::Diurno
    );
    assert_eq!(
        ShiftType::classify(parse_time("19:00:00").unwrap()),
        ShiftType::Noturno
    );
    assert_eq!(
        ShiftType::classify(parse_time("06:59:59").unwrap()),
        ShiftType::Noturno
    );
}

#[test]
fn test_midnight_and_noon_classification() {
    assert_eq!(
        ShiftType::classify(parse_time("00:00:00").unwrap()),
        ShiftType::Noturno
    );
    assert_eq!(
        ShiftType::classify(parse_time("12:00:00").unwrap()),
        ShiftType::Diurno
    );
    assert_eq!(
        ShiftType::classify(parse_time("23:59:59").unwrap()),
        ShiftType::Noturno
    );
}

#[test]
fn test_night_visit_keeps_start_date() {
    let visits = EnrichLogic::enrich(&[raw("15/03/2024", "22:00:00", "Site A")]).unwrap();

    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].shift_type, ShiftType::Noturno);
    assert_eq!(visits[0].shift_date, "15/03/2024");
    assert_eq!(visits[0].date, "15/03/2024");
}

#[test]
fn test_early_morning_visit_keeps_literal_date() {
    // 01:00 is conceptually the tail of the previous night's shift, but a
    // record is attributed to the date printed on it.
    let visits = EnrichLogic::enrich(&[raw("16/03/2024", "01:00:00", "Site A")]).unwrap();

    assert_eq!(visits[0].shift_type, ShiftType::Noturno);
    assert_eq!(visits[0].shift_date, "16/03/2024");
}

#[test]
fn test_enrich_preserves_order_and_cardinality() {
    let input = vec![
        raw("10/01/2024", "08:00:00", "Alpha"),
        raw("11/01/2024", "20:00:00", "Beta"),
        raw("12/01/2024", "12:30:00", "Gamma"),
    ];

    let visits = EnrichLogic::enrich(&input).unwrap();

    assert_eq!(visits.len(), input.len());
    for (v, r) in visits.iter().zip(input.iter()) {
        assert_eq!(v.date, r.date);
        assert_eq!(v.time, r.time);
        assert_eq!(v.location, r.location);
    }
}

#[test]
fn test_enrich_assigns_distinct_ids_and_empty_team() {
    let input: Vec<RawVisit> = (1..=9)
        .map(|d| raw(&format!("{:02}/02/2024", d), "09:00:00", "Site"))
        .collect();

    let visits = EnrichLogic::enrich(&input).unwrap();

    let ids: HashSet<_> = visits.iter().map(|v| v.id).collect();
    assert_eq!(ids.len(), visits.len());
    assert!(visits.iter().all(|v| v.team.is_empty()));
}

#[test]
fn test_enrich_empty_batch() {
    let visits = EnrichLogic::enrich(&[]).unwrap();
    assert!(visits.is_empty());
}

#[test]
fn test_malformed_time_fails_whole_batch() {
    let input = vec![
        raw("10/01/2024", "08:00:00", "Alpha"),
        raw("11/01/2024", "8h30", "Beta"),
    ];

    let err = EnrichLogic::enrich(&input).unwrap_err();
    assert!(matches!(err, AppError::InvalidTime(ref s) if s == "8h30"));
}

#[test]
fn test_malformed_date_fails_whole_batch() {
    let err = EnrichLogic::enrich(&[raw("2024-01-10", "08:00:00", "Alpha")]).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(ref s) if s == "2024-01-10"));
}

#[test]
fn test_non_padded_literals_are_rejected() {
    // chrono would accept "1/3/2024", but the record format is strict.
    assert!(EnrichLogic::enrich(&[raw("1/3/2024", "08:00:00", "A")]).is_err());
    assert!(EnrichLogic::enrich(&[raw("01/03/2024", "8:00:00", "A")]).is_err());
}

#[test]
fn test_impossible_calendar_date_is_rejected() {
    let err = EnrichLogic::enrich(&[raw("32/13/2024", "08:00:00", "A")]).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));
}
