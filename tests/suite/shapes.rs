//! Square and derived-area tests

use accessors_types::{AreaUpdate, DerivedAreaShape, EagerSquare, ShapeError, SideLength, Square};

use crate::common::approx_eq;

const SIDES: [f64; 8] = [1e-3, 0.25, 1.0, 2.0, 3.0, 5.0, 17.5, 1e4];

#[test]
fn area_is_side_squared() {
    for s in SIDES {
        assert_eq!(DerivedAreaShape::new(s).unwrap().area(), s * s);
    }
}

#[test]
fn assigning_area_round_trips_side_length() {
    for s in SIDES {
        let mut shape = DerivedAreaShape::new(42.0).unwrap();
        assert!(shape.set_area(s * s).is_applied());
        assert!(approx_eq(shape.side_length(), s), "s = {s}");
    }
}

#[test]
fn non_positive_area_leaves_side_unchanged() {
    let mut shape = DerivedAreaShape::new(5.0).unwrap();
    shape.set_area(64.0);
    assert_eq!(shape.set_area(0.0), AreaUpdate::Rejected { requested: 0.0 });
    assert_eq!(shape.side_length(), 8.0);
    assert_eq!(shape.set_area(-9.0), AreaUpdate::Rejected { requested: -9.0 });
    assert_eq!(shape.side_length(), 8.0);
}

#[test]
fn non_positive_side_fails_construction() {
    for bad in [0.0, -1.0, -1e-9] {
        assert_eq!(
            DerivedAreaShape::new(bad),
            Err(ShapeError::InvalidSideLength { value: bad })
        );
    }
}

#[test]
fn side_assignment_fails_hard_but_area_assignment_does_not() {
    let mut shape = DerivedAreaShape::new(2.0).unwrap();
    assert!(shape.set_side_length(-2.0).is_err());
    assert!(!shape.set_area(-4.0).is_applied());
    assert_eq!(shape.side_length(), 2.0);
}

#[test]
fn applied_update_carries_new_side_length() {
    let mut shape = DerivedAreaShape::new(1.0).unwrap();
    match shape.set_area(81.0) {
        AreaUpdate::Applied { side_length } => assert_eq!(side_length.as_f64(), 9.0),
        AreaUpdate::Rejected { .. } => panic!("81 is a valid area"),
    }
}

#[test]
fn from_validated_side_length() {
    let side = SideLength::new(6.0).unwrap();
    let shape = DerivedAreaShape::from_side_length(side);
    assert_eq!(shape.area(), 36.0);
}

#[test]
fn side_length_serde_rejects_invalid() {
    assert_eq!(serde_json::to_string(&SideLength::new(2.5).unwrap()).unwrap(), "2.5");
    assert!(serde_json::from_str::<SideLength>("2.5").is_ok());
    assert!(serde_json::from_str::<SideLength>("0").is_err());
    assert!(serde_json::from_str::<SideLength>("-3.0").is_err());
}

#[test]
fn lazy_square_tracks_side_but_eager_square_does_not() {
    let mut lazy = Square::new(2.0);
    let mut eager = EagerSquare::new(2.0);

    lazy.set_side_length(10.0);
    eager.set_side_length(10.0);

    assert_eq!(lazy.area(), 100.0);
    assert_eq!(eager.area(), 4.0);
    assert!(eager.is_stale());
}
