use symlib2schlib_rs::{
    error::Error,
    pin_name::normalize_pin_name,
    schlib_models::{Coord, CoordPoint, LineWidth, Orientation},
    style::{map_line_width, map_orientation, map_point},
};

#[test]
fn test_line_width_buckets() {
    assert_eq!(map_line_width(5.0), LineWidth::Small);
    assert_eq!(map_line_width(9.9), LineWidth::Small);
    assert_eq!(map_line_width(10.0), LineWidth::Smallest);
    assert_eq!(map_line_width(10.1), LineWidth::Medium);
    assert_eq!(map_line_width(40.0), LineWidth::Medium);
}

#[test]
fn test_orientation_buckets() {
    let cases = [
        (0.0, Orientation::None),
        (44.0, Orientation::None),
        (45.0, Orientation::Rotated),
        (134.0, Orientation::Rotated),
        (135.0, Orientation::Flipped),
        (224.9, Orientation::Flipped),
        (270.0, Orientation::RotatedFlipped),
        (400.0, Orientation::None),
        (360.0, Orientation::None),
    ];
    for (angle, expected) in cases {
        assert_eq!(map_orientation(angle).unwrap(), expected, "angle {angle}");
    }
}

#[test]
fn test_orientation_gap_rejected() {
    for angle in [315.0, 320.0, 359.9, 680.0] {
        assert!(
            matches!(map_orientation(angle), Err(Error::RotationOutOfRange(_))),
            "angle {angle} should be rejected"
        );
    }
}

#[test]
fn test_point_scaling() {
    assert_eq!(
        map_point(glam::DVec2::new(1.5, -2.0)),
        CoordPoint {
            x: Coord(15_000),
            y: Coord(-20_000)
        }
    );
    assert_eq!(Coord::from_mils(100.0).to_mils(), 100.0);
}

#[test]
fn test_pin_name_normalization() {
    assert_eq!(normalize_pin_name(Some("!TST!/GPO"), true), "T\\S\\T\\/GPO");
    assert_eq!(normalize_pin_name(Some("!TST!/GPO"), false), "!TST!/GPO");
    assert_eq!(normalize_pin_name(Some("D0\\D1"), true), "D0/D1");
    assert_eq!(normalize_pin_name(Some("EN/~OE"), true), "EN/O\\E\\");
    assert_eq!(normalize_pin_name(Some(""), true), "");
}
