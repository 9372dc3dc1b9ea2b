// Integration tests for Doctor Finder

use doctor_finder::core::{DoctorMatcher, DoctorQuery, MatchError, UNRECOGNIZED_SYMPTOMS_MESSAGE};
use doctor_finder::models::{Doctor, SymptomMap};
use doctor_finder::services::{parse_doctors, parse_symptom_map, ReferenceData};
use std::path::Path;
use std::sync::Arc;

fn scenario_matcher() -> DoctorMatcher {
    let path = Path::new("scenario.json");
    let symptom_map = parse_symptom_map(
        r#"{"fever": ["General Physician"], "skin rash": ["Dermatologist"]}"#,
        path,
    )
    .unwrap();
    let doctors = parse_doctors(
        r#"[
            {"name": "A", "specialization": "General Physician", "city": "X", "lat": 0, "lng": 0},
            {"name": "B", "specialization": "General Physician", "city": "X", "lat": 0, "lng": 1}
        ]"#,
        path,
    )
    .unwrap();

    DoctorMatcher::new(Arc::new(ReferenceData::new(symptom_map, doctors)))
}

fn shipped_matcher() -> DoctorMatcher {
    let data = ReferenceData::load("data/symptom_map.json", "data/doctors.json")
        .expect("shipped reference data should load");
    DoctorMatcher::new(Arc::new(data))
}

#[test]
fn test_integration_scenario() {
    let matcher = scenario_matcher();
    let query = DoctorQuery::new("fever", Some("x".to_string()), Some(0.0), Some(0.0)).unwrap();

    let result = matcher.find_doctors(&query).unwrap();

    assert_eq!(result.specialization, "General Physician");
    assert_eq!(result.doctors.len(), 2);
    assert_eq!(result.doctors[0].name, "A");
    assert_eq!(result.doctors[0].distance_km, Some(0.0));
    assert_eq!(result.doctors[1].name, "B");
    assert_eq!(result.doctors[1].distance_km, Some(111.19));
}

#[test]
fn test_integration_unrecognized() {
    let matcher = scenario_matcher();
    let query = DoctorQuery::new("unknown complaint", None, None, None).unwrap();

    let err = matcher.find_doctors(&query).unwrap_err();
    assert_eq!(err, MatchError::UnrecognizedSymptoms);
    assert_eq!(err.to_string(), UNRECOGNIZED_SYMPTOMS_MESSAGE);
}

#[test]
fn test_shipped_data_sorted_by_distance() {
    let matcher = shipped_matcher();
    // Requester in central Mumbai
    let query = DoctorQuery::new("fever and headache", None, Some(19.0760), Some(72.8777)).unwrap();

    let result = matcher.find_doctors(&query).unwrap();

    assert_eq!(result.specialization, "General Physician, Neurologist");
    assert!(result.doctors.len() >= 3);
    for pair in result.doctors.windows(2) {
        assert!(pair[0].distance_km <= pair[1].distance_km, "Doctors not sorted by distance");
    }
    assert!(result.doctors.iter().all(|d| d.distance_km.is_some()));
}

#[test]
fn test_shipped_data_excludes_unplaced_doctor() {
    let matcher = shipped_matcher();

    // The dentist in the shipped roster has no coordinates
    let located = DoctorQuery::new("toothache", None, Some(17.3850), Some(78.4867)).unwrap();
    assert!(matcher.find_doctors(&located).unwrap().doctors.is_empty());

    let unlocated = DoctorQuery::new("toothache", Some("hyderabad".to_string()), None, None).unwrap();
    let result = matcher.find_doctors(&unlocated).unwrap();
    assert_eq!(result.doctors.len(), 1);
    assert!(result.doctors[0].distance_km.is_none());
}

#[test]
fn test_city_refilter_is_idempotent() {
    let matcher = shipped_matcher();
    let query = DoctorQuery::new("fever", Some("Pune".to_string()), Some(18.52), Some(73.85)).unwrap();
    let first = matcher.find_doctors(&query).unwrap();
    assert!(!first.doctors.is_empty());

    // Re-run the search over only the returned doctors, filtered by their own city
    let city = first.doctors[0].city.clone();
    assert!(first.doctors.iter().all(|d| d.city == city));

    let roster: Vec<Doctor> = first
        .doctors
        .iter()
        .map(|d| Doctor {
            name: d.name.clone(),
            specialization: d.specialization.clone(),
            city: d.city.clone(),
            hospital: d.hospital.clone(),
            phone: d.phone.clone(),
            lat: d.lat,
            lng: d.lng,
        })
        .collect();
    let narrowed = DoctorMatcher::new(Arc::new(ReferenceData::new(
        matcher.reference_data().symptom_map.clone(),
        roster,
    )));

    let second = narrowed.find_doctors(&DoctorQuery { city, ..query }).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_searches_share_roster() {
    let matcher = shipped_matcher();
    let before = matcher.reference_data().doctors.clone();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let matcher = matcher.clone();
            std::thread::spawn(move || {
                let query = DoctorQuery::new("cough", None, Some(10.0 + i as f64), Some(75.0)).unwrap();
                matcher.find_doctors(&query).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.specialization, "General Physician, Pulmonologist");
    }

    assert_eq!(matcher.reference_data().doctors, before);
}

#[test]
fn test_empty_symptom_map_rejects_everything() {
    let matcher = DoctorMatcher::new(Arc::new(ReferenceData::new(SymptomMap::default(), vec![])));
    let query = DoctorQuery::new("fever", None, None, None).unwrap();

    assert_eq!(matcher.find_doctors(&query).unwrap_err(), MatchError::UnrecognizedSymptoms);
}
