//! Sanitized person tests

use accessors_types::{SanitizedPerson, sanitize_name};

#[test]
fn construction_sanitizes_both_names() {
    let person = SanitizedPerson::new("Carr@ol-Ann", ")Freel*ing");
    assert_eq!(person.first_name(), "Carrol-Ann");
    assert_eq!(person.last_name(), "Freeling");
}

#[test]
fn first_name_setter_sanitizes() {
    let mut person = SanitizedPerson::new("Carr@ol-Ann", ")Freel*ing");
    person.set_first_name("Hea@)@(!$)ther");
    assert_eq!(person.first_name(), "Heather");
}

#[test]
fn apostrophes_survive() {
    let person = SanitizedPerson::new("d'arcy", "o'neil");
    assert_eq!(person.first_name(), "D'arcy");
    assert_eq!(person.last_name(), "O'neil");
}

#[test]
fn sanitization_is_idempotent() {
    for raw in ["Carr@ol-Ann", ")Freel*ing", "Hea@)@(!$)ther", "a b c", "!!!"] {
        let once = sanitize_name(raw).into_owned();
        assert_eq!(sanitize_name(&once), once);
    }
}

#[test]
fn round_trips_through_json_as_stored_form() {
    let person = SanitizedPerson::new("heather", "freeling");
    let json = serde_json::to_string(&person).unwrap();
    let parsed: SanitizedPerson = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, person);
    assert_eq!(parsed.raw_first_name(), "heather");
    assert_eq!(parsed.first_name(), "Heather");
}
