use glam::Vec2;

use crate::error::{SimError, SimResult};

/// Gameplay tunables for a population run.
///
/// Defaults reproduce the original game's constants; tests shrink the
/// world or the population to make scenarios tractable.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for deterministic simulation.
    pub seed: u64,
    /// Number of kreatures seeded at construction and after a reset.
    pub spawn_limit: usize,
    /// Population floor restored by repopulation after the removal pass.
    pub min_population: usize,
    /// Half-extent of the square map; positions live in `[-bound, bound]^2`.
    pub map_bound: f32,
    /// Player forward speed in world units per second.
    pub forward_velocity: f32,
    /// Player turn rate in radians per second.
    pub side_velocity: f32,
    /// Fixed duration of an AI turn phase, seconds.
    pub rotation_time: f32,
    /// AI travel speed multiplier (below 1: AI is slower than the player).
    pub ai_speed_malus: f32,
    /// Breeding generations granted at spawn.
    pub max_age: i32,
    /// Food gauge ceiling.
    pub food_max: f32,
    /// Food gained per second while not sprinting.
    pub food_step_rate: f32,
    /// Speed multiplier while sprinting.
    pub sprint_speed_factor: f32,
    /// Food-growth multiplier while sprinting (below 1: sprinting costs food).
    pub sprint_food_factor: f32,
    /// Food drained from the player by one fusion.
    pub fusion_cost: f32,
    /// Maximum distance to the nearest kreature for fusion to proceed.
    pub fusion_range: f32,
    /// Inheritance threshold when the partner's color is dominant.
    pub upper_fusion_factor: f32,
    /// Inheritance threshold when the partner's color is not dominant.
    pub lower_fusion_factor: f32,
    /// Rolls at or above this value mutate the color instead of keeping it.
    pub fumble_mutation: f32,
    /// Offset from the player at which a fusion child appears.
    pub child_offset: Vec2,
    /// Seconds between animation frame flips.
    pub animation_period: f32,
    /// Lower bound of the random AI lifespan, seconds.
    pub min_lifetime: f32,
    /// Upper bound of the random AI lifespan, seconds.
    pub max_lifetime: f32,
    /// Margin added around the viewport for despawn/respawn checks.
    pub viewport_margin: f32,
    /// Viewport size assumed before the first viewport notification.
    pub default_view_size: Vec2,
    /// Attempts at finding an off-screen respawn point before giving up
    /// and accepting the first candidate.
    pub offscreen_spawn_retries: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawn_limit: 20,
            min_population: 10,
            map_bound: 1500.0,
            forward_velocity: 200.0,
            side_velocity: 2.0,
            rotation_time: 1.0,
            ai_speed_malus: 0.80,
            max_age: 5,
            food_max: 100.0,
            food_step_rate: 5.0,
            sprint_speed_factor: 2.0,
            sprint_food_factor: 0.5,
            fusion_cost: 50.0,
            fusion_range: 150.0,
            upper_fusion_factor: 0.75,
            lower_fusion_factor: 0.25,
            fumble_mutation: 0.90,
            child_offset: Vec2::new(100.0, 100.0),
            animation_period: 0.25,
            min_lifetime: 30.0,
            max_lifetime: 90.0,
            viewport_margin: 100.0,
            default_view_size: Vec2::new(1024.0, 576.0),
            offscreen_spawn_retries: 10,
        }
    }
}

impl SimConfig {
    /// Set the RNG seed for deterministic simulation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of kreatures seeded at construction.
    pub fn with_spawn_limit(mut self, spawn_limit: usize) -> Self {
        self.spawn_limit = spawn_limit;
        self
    }

    /// Set the repopulation floor.
    pub fn with_min_population(mut self, min_population: usize) -> Self {
        self.min_population = min_population;
        self
    }

    /// Set the half-extent of the square map.
    pub fn with_map_bound(mut self, map_bound: f32) -> Self {
        self.map_bound = map_bound;
        self
    }

    /// Check the configuration for values the simulator cannot run with.
    pub fn validate(&self) -> SimResult<()> {
        if self.spawn_limit < 2 {
            return Err(SimError::SpawnLimitTooSmall(self.spawn_limit));
        }
        if self.min_population < 1 {
            return Err(SimError::PopulationFloorTooSmall(self.min_population));
        }
        if !self.map_bound.is_finite() || self.map_bound <= 0.0 {
            return Err(SimError::InvalidMapBound(self.map_bound));
        }
        if self.min_lifetime <= 0.0 || self.max_lifetime <= self.min_lifetime {
            return Err(SimError::InvalidLifetimeRange {
                min: self.min_lifetime,
                max: self.max_lifetime,
            });
        }
        for (name, value) in [
            ("upper_fusion_factor", self.upper_fusion_factor),
            ("lower_fusion_factor", self.lower_fusion_factor),
            ("fumble_mutation", self.fumble_mutation),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}
