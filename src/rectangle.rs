// src/rectangle.rs

use crate::schlib_models::{LineWidth, SchRectangle};
use crate::style::{map_line_width, map_point};
use crate::symlib_models::{SymLine, SymRecord};
use glam::DVec2;

/// Endpoint match tolerance in mils.
const ENDPOINT_EPSILON: f64 = 1e-6;

/// Tries to read `records[index..index + 4]` as one closed loop of four lines.
///
/// The walk starts at the first line's origin and must pass through the other
/// three lines before arriving back at the first line's endpoint. Any closed
/// loop is accepted and reduced to its bounding box.
pub fn detect_rectangle(
    records: &[SymRecord],
    index: usize,
    width_override: Option<LineWidth>,
) -> Option<SchRectangle> {
    let window = records.get(index..index + 4)?;
    let mut lines = [None; 4];
    for (slot, record) in lines.iter_mut().zip(window) {
        match record {
            SymRecord::Line(line) => *slot = Some(line),
            _ => return None,
        }
    }
    let lines: [&SymLine; 4] = [lines[0]?, lines[1]?, lines[2]?, lines[3]?];

    let mut visited = [true, false, false, false];
    let mut current = lines[0].origin;
    for _ in 0..3 {
        let (idx, next) = lines
            .iter()
            .enumerate()
            .filter(|(i, _)| !visited[*i])
            .find_map(|(i, line)| other_end(line, current).map(|p| (i, p)))?;
        visited[idx] = true;
        current = next;
    }
    if !current.abs_diff_eq(lines[0].endpoint, ENDPOINT_EPSILON) {
        return None;
    }

    let (min, max) = lines.iter().fold(
        (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
        |(min, max), line| {
            (
                min.min(line.origin).min(line.endpoint),
                max.max(line.origin).max(line.endpoint),
            )
        },
    );

    Some(SchRectangle {
        location: map_point(min),
        corner: map_point(max),
        width: width_override.unwrap_or_else(|| map_line_width(lines[0].width)),
    })
}

/// If `line` touches `point`, returns the line's opposite endpoint.
fn other_end(line: &SymLine, point: DVec2) -> Option<DVec2> {
    if line.origin.abs_diff_eq(point, ENDPOINT_EPSILON) {
        Some(line.endpoint)
    } else if line.endpoint.abs_diff_eq(point, ENDPOINT_EPSILON) {
        Some(line.origin)
    } else {
        None
    }
}
