use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::math::normalize_angle;

/// Progress of a [`MovePlan`] after an [`MovePlan::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    /// The plan still has rotation or travel left.
    Running,
    /// Both phases are done; the pose rests at the target.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Phase {
    Rotating,
    Moving,
    Done,
}

/// A two-phase wander plan: turn toward a target point, then travel to it.
///
/// Replaces the in-place activity objects of the original game with an
/// explicit state machine. The pose is sampled, not accumulated: the
/// rotation phase interpolates the orientation along the shortest arc over
/// a fixed duration, then the travel phase interpolates the position
/// linearly over `distance / speed`. Leftover time on a phase boundary is
/// dropped, and a finished plan stays finished until it is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovePlan {
    phase: Phase,
    elapsed: f32,
    angle_origin: f32,
    angle_target: f32,
    rotation_time: f32,
    move_origin: Vec2,
    move_target: Vec2,
    move_time: f32,
}

impl MovePlan {
    /// Plan a rotation-then-travel from `origin` (at `orientation`) to
    /// `target`, moving at `speed` world units per second and spending
    /// `rotation_time` seconds on the turn.
    pub fn new(origin: Vec2, orientation: f32, target: Vec2, speed: f32, rotation_time: f32) -> Self {
        let distance = origin.distance(target);
        let move_time = if speed > 0.0 { distance / speed } else { 0.0 };
        let phase = if rotation_time > 0.0 {
            Phase::Rotating
        } else if move_time > 0.0 {
            Phase::Moving
        } else {
            Phase::Done
        };
        Self {
            phase,
            elapsed: 0.0,
            angle_origin: normalize_angle(orientation),
            angle_target: crate::math::bearing(origin, target),
            rotation_time,
            move_origin: origin,
            move_target: target,
            move_time,
        }
    }

    /// An already-finished plan resting at the given pose. Used for
    /// freshly constructed creatures before their first wander target
    /// is drawn.
    pub fn idle(position: Vec2, orientation: f32) -> Self {
        Self {
            phase: Phase::Done,
            elapsed: 0.0,
            angle_origin: normalize_angle(orientation),
            angle_target: normalize_angle(orientation),
            rotation_time: 0.0,
            move_origin: position,
            move_target: position,
            move_time: 0.0,
        }
    }

    /// Advance the plan by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> PlanStatus {
        match self.phase {
            Phase::Rotating => {
                self.elapsed += dt;
                if self.elapsed >= self.rotation_time {
                    self.phase = if self.move_time > 0.0 {
                        Phase::Moving
                    } else {
                        Phase::Done
                    };
                    self.elapsed = 0.0;
                }
            }
            Phase::Moving => {
                self.elapsed += dt;
                if self.elapsed >= self.move_time {
                    self.phase = Phase::Done;
                    self.elapsed = 0.0;
                }
            }
            Phase::Done => {}
        }
        self.status()
    }

    /// Current progress without advancing.
    pub fn status(&self) -> PlanStatus {
        match self.phase {
            Phase::Done => PlanStatus::Finished,
            Phase::Rotating | Phase::Moving => PlanStatus::Running,
        }
    }

    /// The position sampled at the current plan progress.
    pub fn position(&self) -> Vec2 {
        match self.phase {
            Phase::Rotating => self.move_origin,
            Phase::Moving => {
                let t = (self.elapsed / self.move_time).clamp(0.0, 1.0);
                self.move_origin.lerp(self.move_target, t)
            }
            Phase::Done => self.move_target,
        }
    }

    /// The orientation sampled at the current plan progress, in `(-PI, PI]`.
    pub fn orientation(&self) -> f32 {
        match self.phase {
            Phase::Rotating => {
                let t = (self.elapsed / self.rotation_time).clamp(0.0, 1.0);
                let arc = normalize_angle(self.angle_target - self.angle_origin);
                normalize_angle(self.angle_origin + arc * t)
            }
            Phase::Moving | Phase::Done => self.angle_target,
        }
    }

    /// The target point of the travel phase.
    pub fn target(&self) -> Vec2 {
        self.move_target
    }
}
