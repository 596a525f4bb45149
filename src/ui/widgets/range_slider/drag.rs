//! Drag session and thumb ordering rules
//!
//! Thumbs never swap roles. When a thumb is pushed past a neighbour, the
//! neighbour snaps to the same value and the two travel together.

use super::interval::{Interval, Track};

/// Pointer capture state of a slider
///
/// Window-wide pointer tracking is held exactly while the state is
/// `Dragging`; `begin` and `end` report the acquire and release edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(usize),
}

impl DragState {
    /// Enter `Dragging(thumb)`. Returns `false` if a drag is already active.
    pub fn begin(&mut self, thumb: usize) -> bool {
        match self {
            DragState::Idle => {
                *self = DragState::Dragging(thumb);
                true
            }
            DragState::Dragging(_) => false,
        }
    }

    /// Return to `Idle`, yielding the thumb that was being dragged
    pub fn end(&mut self) -> Option<usize> {
        match std::mem::take(self) {
            DragState::Dragging(thumb) => Some(thumb),
            DragState::Idle => None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        match self {
            DragState::Dragging(thumb) => Some(*thumb),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

/// New sequence with thumb `index` set to `value`
///
/// Neighbours that would end up on the wrong side snap to `value`.
/// An out-of-bounds index returns the sequence unchanged.
pub fn move_thumb(values: &[f32], index: usize, value: f32) -> Vec<f32> {
    let mut next = values.to_vec();
    if index >= next.len() {
        return next;
    }
    next[index] = value;

    for later in next[index + 1..].iter_mut() {
        if *later >= value {
            break;
        }
        *later = value;
    }
    for earlier in next[..index].iter_mut().rev() {
        if *earlier <= value {
            break;
        }
        *earlier = value;
    }
    next
}

/// Move thumb `index` by `steps` quantization steps
pub fn step_thumb(values: &[f32], interval: &Interval, index: usize, steps: i32) -> Vec<f32> {
    let Some(current) = values.get(index) else {
        return values.to_vec();
    };
    let target = interval.quantize(current + steps as f32 * interval.step());
    move_thumb(values, index, target)
}

/// Thumb whose centre is closest to `pointer_x`
///
/// Overlapping thumbs resolve to whichever can move further on its own:
/// the lowest index when there is more room below the shared value,
/// the highest index otherwise.
pub fn nearest_thumb(
    values: &[f32],
    interval: &Interval,
    track: Track,
    pointer_x: f32,
) -> Option<(usize, f32)> {
    const TIE: f32 = 0.5;

    let distances: Vec<f32> = values
        .iter()
        .map(|&value| (interval.position(value, track) - pointer_x).abs())
        .collect();

    let best = distances.iter().copied().reduce(f32::min)?;
    let tied: Vec<usize> = distances
        .iter()
        .enumerate()
        .filter(|(_, d)| **d - best <= TIE)
        .map(|(i, _)| i)
        .collect();

    let index = match tied.as_slice() {
        [only] => *only,
        [first, .., last] => {
            let shared = values[*first];
            if shared - interval.min() > interval.max() - shared {
                *first
            } else {
                *last
            }
        }
        [] => return None,
    };
    Some((index, distances[index]))
}

/// Thumb hit by a press at `pointer_x`, if any lies within `radius`
pub fn pick_thumb(
    values: &[f32],
    interval: &Interval,
    track: Track,
    pointer_x: f32,
    radius: f32,
) -> Option<usize> {
    nearest_thumb(values, interval, track, pointer_x)
        .filter(|(_, distance)| *distance <= radius)
        .map(|(index, _)| index)
}
