//! §3.5.3 Color-Stop "Fixup" — placing stops declared without a position.
//! Spec: <https://www.w3.org/TR/css-images-3/#color-stop-fixup>
//!
//! Explicit positions are never moved, so a gradient whose authored
//! positions go backwards keeps them in declaration order as written.

use super::part_3_5_color_stops::{ColorStop, Stop};
use crate::error::GradientError;
use log::trace;

/// The nearest stops with a position on either side of a pending stop.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Anchors {
    prev_index: usize,
    prev_position: f32,
    next_index: usize,
    next_position: f32,
}

/// Find the anchors around the interior pending stop at `index`.
///
/// With no positioned stop before it, the run starts at index 0 / position 0;
/// with none after it, the run ends at the last index / `full_length`.
fn find_anchors(stops: &[Stop], index: usize, full_length: f32) -> Anchors {
    let last_index = stops.len().saturating_sub(1);
    let (prev_index, prev_position) = stops
        .iter()
        .enumerate()
        .take(index)
        .rev()
        .find_map(|(candidate, stop)| stop.position().map(|position| (candidate, position)))
        .unwrap_or((0, 0.0));
    let (next_index, next_position) = stops
        .iter()
        .enumerate()
        .skip(index + 1)
        .find_map(|(candidate, stop)| stop.position().map(|position| (candidate, position)))
        .unwrap_or((last_index, full_length));
    Anchors {
        prev_index,
        prev_position,
        next_index,
        next_position,
    }
}

/// Position for the interior pending stop at `index`: the anchors split
/// their span into `next_index - prev_index` equal segments.
///
/// # Errors
/// Returns `GradientError::DegenerateGradientRange` when the anchors coincide.
fn interpolate(stops: &[Stop], index: usize, full_length: f32) -> Result<f32, GradientError> {
    let anchors = find_anchors(stops, index, full_length);
    let segments = anchors.next_index.saturating_sub(anchors.prev_index);
    // Interior stops always have `prev_index < index <= next_index`; only an
    // index outside the slice can collapse the range.
    if segments == 0 {
        return Err(GradientError::DegenerateGradientRange { index });
    }
    let interval = (anchors.next_position - anchors.prev_position) / segments as f32;
    let steps = index.saturating_sub(anchors.prev_index);
    let position = interval.mul_add(steps as f32, anchors.prev_position);
    trace!(
        target: "css::images::linear_gradient",
        "[FIXUP] stop={index} anchors={anchors:?} segments={segments} position={position:.3}"
    );
    Ok(position)
}

/// Give every pending stop an absolute position.
///
/// - Resolved stops pass through untouched.
/// - A pending first stop goes to 0 and a pending last stop to `full_length`
///   (the 100% position). A single pending stop counts as first.
/// - Interior pending stops are spaced evenly between their anchors.
///
/// # Errors
/// Returns `GradientError::DegenerateGradientRange` if an interpolation range is empty.
pub fn fixup_stop_positions(
    stops: &[Stop],
    full_length: f32,
) -> Result<Vec<ColorStop>, GradientError> {
    let last_index = stops.len().saturating_sub(1);
    stops
        .iter()
        .enumerate()
        .map(|(index, stop)| match *stop {
            Stop::Resolved(resolved) => Ok(resolved),
            Stop::Pending(color) if index == 0 => Ok(ColorStop {
                color,
                position: 0.0,
            }),
            Stop::Pending(color) if index == last_index => Ok(ColorStop {
                color,
                position: full_length,
            }),
            Stop::Pending(color) => interpolate(stops, index, full_length)
                .map(|position| ColorStop { color, position }),
        })
        .collect()
}
