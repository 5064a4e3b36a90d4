use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::genome::Genome;
use crate::movement::MovePlan;

/// The simulated creature.
///
/// Plain data, owned exclusively by the population simulator. Whether a
/// kreature is the player is a property of its slot in the population
/// (slot 0), not of any field here — swapping bodies swaps slots, never
/// contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kreature {
    /// World-space location, kept inside the square map bound.
    pub position: Vec2,
    /// Heading in radians, normalized to `(-PI, PI]`.
    pub orientation: f32,
    /// One-tick forward impulse; only the sign matters. Reset after each update.
    pub forward_move: f32,
    /// One-tick turn impulse; only the sign matters. Reset after each update.
    pub side_move: f32,
    /// Remaining breeding generations. Breeding costs one; at 0 the
    /// kreature is eligible for off-screen removal.
    pub age_level: i32,
    /// Food reserve, kept in `[0, food_max]`. Breeding drains it.
    pub food_level: f32,
    /// The four inheritable trait parts.
    pub genome: Genome,
    /// Seconds accumulated toward the next animation flip.
    pub anim_elapsed: f32,
    /// Animation frame toggle, flipped once per animation period.
    pub anim_flip: bool,
    /// Seconds of natural life remaining. Infinite for the special
    /// creature; ignored for whoever sits in the player slot.
    pub life_left: f32,
    /// The current wander plan, driven only while AI-controlled.
    pub plan: MovePlan,
}

impl Kreature {
    /// Create a kreature at rest with an idle (already finished) plan.
    ///
    /// The first `update` reseeds the plan with a real wander target.
    pub fn new(position: Vec2, orientation: f32, genome: Genome, age_level: i32, life_left: f32) -> Self {
        Self {
            position,
            orientation,
            forward_move: 0.0,
            side_move: 0.0,
            age_level,
            food_level: 0.0,
            genome,
            anim_elapsed: 0.0,
            anim_flip: false,
            life_left,
            plan: MovePlan::idle(position, orientation),
        }
    }

    /// Replace the wander plan with one from the current pose to `target`.
    ///
    /// `speed` is the travel speed in world units per second and
    /// `rotation_time` the fixed duration of the turn phase.
    pub fn retarget(&mut self, target: Vec2, speed: f32, rotation_time: f32) {
        self.plan = MovePlan::new(self.position, self.orientation, target, speed, rotation_time);
    }

    /// Accumulate animation time and flip the frame toggle once the
    /// period is crossed. The remainder carries into the next period.
    pub fn advance_animation(&mut self, dt: f32, period: f32) {
        self.anim_elapsed += dt;
        if self.anim_elapsed >= period {
            self.anim_elapsed -= period;
            self.anim_flip = !self.anim_flip;
        }
    }

    /// Whether this kreature has run out of breeding generations or
    /// natural lifespan. Expired kreatures are only removed while
    /// off-screen.
    pub fn is_expired(&self) -> bool {
        self.age_level <= 0 || self.life_left <= 0.0
    }
}
