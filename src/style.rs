// src/style.rs

use crate::error::{Error, Result};
use crate::schlib_models::{CoordPoint, Justification, LineWidth, Orientation};
use glam::DVec2;

/// Width that the target library treats as its implicit "smallest" stroke.
const DEFAULT_WIDTH: f64 = 10.0;

/// Discretizes a source line width.
///
/// Older converters checked a fourth `> 12 => Large` threshold after `> 10`,
/// which could never fire. Only the three reachable outcomes are kept here.
pub fn map_line_width(width: f64) -> LineWidth {
    if width < DEFAULT_WIDTH {
        LineWidth::Small
    } else if width > DEFAULT_WIDTH {
        LineWidth::Medium
    } else {
        LineWidth::Smallest
    }
}

/// Discretizes a rotation angle in degrees.
///
/// `[315, 360)` falls in no bucket and is rejected rather than wrapped to `None`.
pub fn map_orientation(angle: f64) -> Result<Orientation> {
    let normalized = angle.rem_euclid(360.0);
    match normalized {
        a if (0.0..45.0).contains(&a) => Ok(Orientation::None),
        a if (45.0..135.0).contains(&a) => Ok(Orientation::Rotated),
        a if (135.0..225.0).contains(&a) => Ok(Orientation::Flipped),
        a if (225.0..315.0).contains(&a) => Ok(Orientation::RotatedFlipped),
        _ => Err(Error::RotationOutOfRange(angle)),
    }
}

/// Maps a source justification code (horizontal 0/1/2 plus vertical 0/4/8).
pub fn map_justification(code: i32) -> Result<Justification> {
    let justification = match code {
        0 => Justification::BottomLeft,
        1 => Justification::BottomCenter,
        2 => Justification::BottomRight,
        4 => Justification::MiddleLeft,
        5 => Justification::MiddleCenter,
        6 => Justification::MiddleRight,
        8 => Justification::TopLeft,
        9 => Justification::TopCenter,
        10 => Justification::TopRight,
        other => return Err(Error::UnmappedJustification(other)),
    };
    Ok(justification)
}

/// Converts a point in mils to fixed-point schematic coordinates.
pub fn map_point(p: DVec2) -> CoordPoint {
    CoordPoint::from_mils(p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn justification_table_is_closed() {
        let valid = [0, 1, 2, 4, 5, 6, 8, 9, 10];
        for code in -2..16 {
            assert_eq!(map_justification(code).is_ok(), valid.contains(&code), "code {code}");
        }
        assert_eq!(map_justification(5).unwrap(), Justification::MiddleCenter);
        assert_eq!(map_justification(10).unwrap(), Justification::TopRight);
    }

    #[test]
    fn negative_angles_normalize() {
        assert_eq!(map_orientation(-90.0).unwrap(), Orientation::RotatedFlipped);
        assert_eq!(map_orientation(-300.0).unwrap(), Orientation::Rotated);
        assert!(map_orientation(-10.0).is_err());
    }
}
