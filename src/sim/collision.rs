//! Swept collision detection for axis-aligned rectangles
//!
//! The tricky part of the arena: a rectangle moving in a straight line for one
//! tick must stop at the first obstruction along its path, not merely be
//! tested at its end position. Everything is integer geometry, so the time of
//! impact is kept as an exact fraction and never rounded until the contact
//! point is produced.

use std::cmp::Ordering;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Side};

/// Result of a swept collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    /// The rectangle that was struck
    pub obstruction: Rect,
    /// Position (top-left) of the mover at first contact
    pub point: IVec2,
    /// The contact ends the rally (ball got past a paddle)
    pub game_ending: bool,
    /// Who won the rally, set together with `game_ending`
    pub winner: Option<Side>,
}

impl Collision {
    pub fn new(obstruction: Rect, point: IVec2) -> Self {
        Self {
            obstruction,
            point,
            game_ending: false,
            winner: None,
        }
    }

    /// Mark this contact as the end of the rally
    pub fn end_rally(&mut self, winner: Side) {
        self.game_ending = true;
        self.winner = Some(winner);
    }
}

/// Finds the earliest obstruction along a straight-line move
///
/// Implementations must not mutate anything observable; the arena may call
/// them any number of times per tick.
pub trait HitDetector {
    /// Sweep `mover` from its current position to `final_position` and return
    /// the first candidate it strikes, or `None` if the path is clear.
    fn check_obstructions(
        &self,
        candidates: &[Rect],
        mover: Rect,
        final_position: IVec2,
    ) -> Option<Collision>;
}

/// Exact swept AABB test (slab method on integer rationals)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweptAabb;

impl HitDetector for SweptAabb {
    fn check_obstructions(
        &self,
        candidates: &[Rect],
        mover: Rect,
        final_position: IVec2,
    ) -> Option<Collision> {
        let travel = final_position - mover.position();
        if travel == IVec2::ZERO {
            return None;
        }

        let mut earliest: Option<(Toi, &Rect)> = None;
        for candidate in candidates {
            let Some(toi) = time_of_impact(&mover, travel, candidate) else {
                continue;
            };
            // Strictly earlier only: ties keep the first candidate listed
            if earliest.is_none_or(|(best, _)| toi < best) {
                earliest = Some((toi, candidate));
            }
        }

        earliest.map(|(toi, obstruction)| {
            Collision::new(*obstruction, toi.point_along(mover.position(), travel))
        })
    }
}

/// Time of impact as the exact fraction `num / den` of the tick, `den > 0`
#[derive(Debug, Clone, Copy)]
struct Toi {
    num: i64,
    den: i64,
}

impl Toi {
    const ZERO: Toi = Toi { num: 0, den: 1 };
    const ONE: Toi = Toi { num: 1, den: 1 };

    fn new(num: i32, den: i32) -> Self {
        debug_assert!(den > 0);
        Self {
            num: i64::from(num),
            den: i64::from(den),
        }
    }

    /// `start + travel * t`, each component truncated toward `start`
    fn point_along(self, start: IVec2, travel: IVec2) -> IVec2 {
        let along = |delta: i32| (i64::from(delta) * self.num / self.den) as i32;
        start + IVec2::new(along(travel.x), along(travel.y))
    }
}

impl PartialEq for Toi {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Toi {}

impl PartialOrd for Toi {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Toi {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.num * other.den).cmp(&(other.num * self.den))
    }
}

/// When, along one axis, the moving interval overlaps the obstacle interval
enum Span {
    /// No travel on this axis and the intervals already overlap
    Always,
    /// No travel on this axis and the intervals never meet
    Never,
    /// Overlap holds strictly between the two parameters
    Between(Toi, Toi),
}

/// Mover interval `[start, start + len)` moving by `delta`, obstacle `[lo, hi)`
fn axis_span(start: i32, len: i32, delta: i32, lo: i32, hi: i32) -> Span {
    match delta.cmp(&0) {
        Ordering::Equal => {
            if start + len > lo && start < hi {
                Span::Always
            } else {
                Span::Never
            }
        }
        Ordering::Greater => Span::Between(
            Toi::new(lo - len - start, delta),
            Toi::new(hi - start, delta),
        ),
        Ordering::Less => Span::Between(
            Toi::new(start - hi, -delta),
            Toi::new(start + len - lo, -delta),
        ),
    }
}

/// First moment within the tick at which `mover` overlaps `obstacle`
///
/// A mover that already overlaps reports an impact at the start of the tick.
fn time_of_impact(mover: &Rect, travel: IVec2, obstacle: &Rect) -> Option<Toi> {
    let spans = [
        axis_span(mover.x, mover.width, travel.x, obstacle.x, obstacle.right()),
        axis_span(mover.y, mover.height, travel.y, obstacle.y, obstacle.bottom()),
    ];

    let mut window: Option<(Toi, Toi)> = None;
    for span in spans {
        match span {
            Span::Never => return None,
            Span::Always => {}
            Span::Between(enter, exit) => {
                window = Some(match window {
                    Some((e, x)) => (e.max(enter), x.min(exit)),
                    None => (enter, exit),
                });
            }
        }
    }

    let Some((enter, exit)) = window else {
        // Overlapping on both axes with no travel at all
        return Some(Toi::ZERO);
    };

    if enter < exit && enter < Toi::ONE && exit > Toi::ZERO {
        Some(enter.max(Toi::ZERO))
    } else {
        None
    }
}
