use glam::Vec2;

use kkd_core::genome::{Genome, TraitPart};
use kkd_core::kreature::Kreature;
use kkd_core::math::{clamp_to_bound, normalize_angle};
use kkd_core::movement::PlanStatus;
use kkd_core::viewport::Viewport;

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::event::{Notification, Outbox};
use crate::fusion::fuse_genome;
use crate::rng::{RandomSource, SeededRandom};

/// The Kreature population simulator.
///
/// Owns every kreature, advances them by caller-supplied time deltas,
/// answers the player command surface, and maintains the population
/// bounds. Slot 0 of the collection is always the player; every other
/// slot is AI-controlled. Swapping bodies exchanges slots, never
/// kreature contents.
///
/// Observers never reach into the population: per-tick camera and HUD
/// updates and the completion signal are appended to an outbox the
/// caller drains each frame.
#[derive(Debug)]
pub struct Population<R: RandomSource> {
    config: SimConfig,
    rng: R,
    kreatures: Vec<Kreature>,
    outbox: Outbox,
    viewport: Viewport,
    sprinting: bool,
}

impl Population<SeededRandom> {
    /// Create a population using the seed from the configuration.
    pub fn seeded(config: SimConfig) -> SimResult<Self> {
        let rng = SeededRandom::new(config.seed);
        Self::new(config, rng)
    }
}

impl<R: RandomSource> Population<R> {
    /// Create a population from a validated configuration and a random
    /// source, seeding `spawn_limit` kreatures at random poses with
    /// random genomes and lifespans.
    pub fn new(config: SimConfig, rng: R) -> SimResult<Self> {
        config.validate()?;
        let viewport = Viewport::new(Vec2::ZERO, config.default_view_size);
        let mut population = Self {
            config,
            rng,
            kreatures: Vec::new(),
            outbox: Outbox::new(),
            viewport,
            sprinting: false,
        };
        population.seed();
        Ok(population)
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// The step order is fixed for reproducibility: player animation,
    /// player orientation, player position, AI wandering, camera
    /// notification, food growth, stats notification, expiry removal,
    /// repopulation.
    pub fn update(&mut self, dt: f32) {
        debug_assert!(!self.kreatures.is_empty(), "population must never be empty");
        if self.kreatures.is_empty() {
            return;
        }

        let period = self.config.animation_period;
        let sprint_factor = if self.sprinting {
            self.config.sprint_speed_factor
        } else {
            1.0
        };

        // Player: animate only while receiving input, then consume the
        // one-tick impulses.
        let forward_velocity = self.config.forward_velocity;
        let side_velocity = self.config.side_velocity;
        let bound = self.config.map_bound;
        let player = &mut self.kreatures[0];
        if player.forward_move != 0.0 || player.side_move != 0.0 {
            player.advance_animation(dt, period);
        }

        player.orientation =
            normalize_angle(player.orientation + side_velocity * player.side_move * dt);
        player.side_move = 0.0;

        let step = Vec2::from_angle(player.orientation)
            * forward_velocity
            * player.forward_move
            * dt
            * sprint_factor;
        player.position = clamp_to_bound(player.position + step, bound);
        player.forward_move = 0.0;

        // AI: advance the wander plan, reseed on completion, animate, age.
        let ai_speed = forward_velocity * self.config.ai_speed_malus;
        let rotation_time = self.config.rotation_time;
        let rng = &mut self.rng;
        for kreature in self.kreatures.iter_mut().skip(1) {
            let status = kreature.plan.advance(dt);
            kreature.position = kreature.plan.position();
            kreature.orientation = kreature.plan.orientation();
            if status == PlanStatus::Finished {
                let target = Vec2::new(
                    rng.next_float(-bound, bound),
                    rng.next_float(-bound, bound),
                );
                kreature.retarget(target, ai_speed, rotation_time);
            }
            kreature.advance_animation(dt, period);
            kreature.life_left -= dt;
        }

        let player = &self.kreatures[0];
        self.outbox.push(Notification::PositionChanged {
            position: player.position,
            angle: player.orientation,
        });

        // Sprinting trades food growth for speed.
        let food_factor = if self.sprinting {
            self.config.sprint_food_factor
        } else {
            1.0
        };
        let food_max = self.config.food_max;
        let food_step = dt * self.config.food_step_rate * food_factor;
        let player = &mut self.kreatures[0];
        player.food_level = (player.food_level + food_step).clamp(0.0, food_max);

        let player = &self.kreatures[0];
        self.outbox.push(Notification::StatsChanged {
            food_level: player.food_level,
            age_level: player.age_level,
        });

        self.remove_expired();
        self.repopulate();
    }

    /// Set the player's one-tick forward impulse; only the sign matters.
    pub fn set_forward_move(&mut self, direction: f32) {
        if let Some(player) = self.kreatures.first_mut() {
            player.forward_move = direction;
        }
    }

    /// Set the player's one-tick turn impulse; only the sign matters.
    pub fn set_sided_move(&mut self, direction: f32) {
        if let Some(player) = self.kreatures.first_mut() {
            player.side_move = direction;
        }
    }

    /// Toggle the sprint modifier applied by the next updates.
    pub fn set_sprint(&mut self, sprinting: bool) {
        self.sprinting = sprinting;
    }

    /// Swap bodies with the nearest AI kreature.
    ///
    /// The outgoing player gets a fresh wander plan so it resumes AI
    /// life from a sane state; then the two kreatures exchange container
    /// slots and the win condition is re-checked.
    pub fn swap_with_closest(&mut self) {
        debug_assert!(
            self.kreatures.len() >= 2,
            "swap requires at least two kreatures"
        );
        let Some(target) = self.closest_to_player() else {
            return;
        };

        let bound = self.config.map_bound;
        let wander = Vec2::new(
            self.rng.next_float(-bound, bound),
            self.rng.next_float(-bound, bound),
        );
        let ai_speed = self.config.forward_velocity * self.config.ai_speed_malus;
        let rotation_time = self.config.rotation_time;
        if let Some(player) = self.kreatures.first_mut() {
            player.retarget(wander, ai_speed, rotation_time);
        }

        self.kreatures.swap(0, target);
        self.check_completed();
    }

    /// Breed with the nearest AI kreature.
    ///
    /// Silently does nothing when the partner is out of fusion range or
    /// the player lacks the age or food to breed — a UI can probe "can
    /// fuse" by attempting it. On success a child with per-part fused
    /// traits appears next to the player, both parents age by one
    /// generation, and the fusion cost is drained from the player's
    /// food. A player that spends its last generation hands control to
    /// the newborn.
    pub fn fuse_dna(&mut self) {
        debug_assert!(
            self.kreatures.len() >= 2,
            "fusion requires at least two kreatures"
        );
        let Some(partner_index) = self.closest_to_player() else {
            return;
        };

        let player = &self.kreatures[0];
        let partner = &self.kreatures[partner_index];
        let distance = player.position.distance(partner.position);
        if distance > self.config.fusion_range
            || player.age_level <= 0
            || player.food_level < self.config.fusion_cost
        {
            return;
        }

        let position = clamp_to_bound(
            player.position + self.config.child_offset,
            self.config.map_bound,
        );
        let player_genome = player.genome;
        let partner_genome = partner.genome;

        let genome = fuse_genome(&self.config, &player_genome, &partner_genome, &mut self.rng);
        let child = Self::spawn_at(&self.config, &mut self.rng, position, genome);

        self.kreatures[0].food_level -= self.config.fusion_cost;
        self.kreatures[0].age_level -= 1;
        self.kreatures[partner_index].age_level -= 1;
        self.kreatures.push(child);

        if self.kreatures[0].age_level <= 0 {
            // The spent player's body retires to AI life; the newborn
            // takes the player slot.
            let last = self.kreatures.len() - 1;
            self.kreatures.swap(0, last);
        }

        self.remove_expired();
        self.check_completed();
    }

    /// Spawn a kreature that already matches the completion target, with
    /// an infinite lifespan, at a random position. Easter-egg shortcut
    /// toward finishing the game.
    pub fn create_special_creature(&mut self) {
        let bound = self.config.map_bound;
        let position = Vec2::new(
            self.rng.next_float(-bound, bound),
            self.rng.next_float(-bound, bound),
        );
        let mut kreature = Self::spawn_at(
            &self.config,
            &mut self.rng,
            position,
            Genome::uniform(Genome::TARGET),
        );
        kreature.life_left = f32::INFINITY;
        self.kreatures.push(kreature);
    }

    /// Discard the whole population and reseed it exactly as at
    /// construction. Used to restart after game completion.
    pub fn reset(&mut self) {
        self.sprinting = false;
        self.seed();
    }

    /// Viewport notification handler: cache the camera's visible
    /// rectangle for the despawn/respawn checks.
    pub fn on_viewport_changed(&mut self, center: Vec2, size: Vec2) {
        self.viewport = Viewport::new(center, size);
    }

    /// All kreatures, player first.
    pub fn kreatures(&self) -> &[Kreature] {
        &self.kreatures
    }

    /// The kreature in the player slot.
    ///
    /// The population is never empty after construction, so this always
    /// resolves.
    pub fn player(&self) -> &Kreature {
        &self.kreatures[0]
    }

    /// Number of kreatures currently alive.
    pub fn len(&self) -> usize {
        self.kreatures.len()
    }

    /// Whether the population is empty. Always `false` after
    /// construction; present for completeness of the slice-like API.
    pub fn is_empty(&self) -> bool {
        self.kreatures.is_empty()
    }

    /// Undrained notifications, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        self.outbox.pending()
    }

    /// Take all pending notifications for delivery to observers.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.outbox.drain()
    }

    /// The active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    fn seed(&mut self) {
        self.kreatures.clear();
        for _ in 0..self.config.spawn_limit {
            let kreature = Self::draw_kreature(&self.config, &mut self.rng);
            self.kreatures.push(kreature);
        }
    }

    /// Index of the AI kreature closest to the player, `None` when the
    /// population has no AI kreatures. Ties keep the first minimal
    /// element in iteration order.
    fn closest_to_player(&self) -> Option<usize> {
        let player = self.kreatures.first()?;
        let mut best: Option<(usize, f32)> = None;
        for (index, kreature) in self.kreatures.iter().enumerate().skip(1) {
            let distance = player.position.distance(kreature.position);
            if best.is_none_or(|(_, closest)| distance < closest) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    fn check_completed(&mut self) {
        if self
            .kreatures
            .first()
            .is_some_and(|player| player.genome.is_complete())
        {
            self.outbox.push(Notification::GameCompleted);
        }
    }

    /// Remove expired kreatures, but only while they are outside the
    /// margin-expanded viewport — nothing vanishes in front of the
    /// player. The player slot itself is never removed.
    fn remove_expired(&mut self) {
        let view = self.viewport.expanded(self.config.viewport_margin);
        let mut index = 0;
        self.kreatures.retain(|kreature| {
            let is_player = index == 0;
            index += 1;
            is_player || view.contains(kreature.position) || !kreature.is_expired()
        });
    }

    /// Refill the population up to the configured floor with fresh AI
    /// kreatures spawned outside the viewport.
    fn repopulate(&mut self) {
        while self.kreatures.len() < self.config.min_population {
            let kreature = self.spawn_offscreen();
            self.kreatures.push(kreature);
        }
    }

    /// Draw a spawn point outside the margin-expanded viewport, giving
    /// up after a bounded number of retries and accepting the first
    /// candidate rather than looping forever.
    fn spawn_offscreen(&mut self) -> Kreature {
        let view = self.viewport.expanded(self.config.viewport_margin);
        let bound = self.config.map_bound;
        let first = Vec2::new(
            self.rng.next_float(-bound, bound),
            self.rng.next_float(-bound, bound),
        );
        let mut position = first;
        let mut retries = self.config.offscreen_spawn_retries;
        while view.contains(position) && retries > 0 {
            position = Vec2::new(
                self.rng.next_float(-bound, bound),
                self.rng.next_float(-bound, bound),
            );
            retries -= 1;
        }
        if view.contains(position) {
            position = first;
        }
        let genome = Self::draw_genome(&mut self.rng);
        Self::spawn_at(&self.config, &mut self.rng, position, genome)
    }

    fn draw_kreature(config: &SimConfig, rng: &mut R) -> Kreature {
        let bound = config.map_bound;
        let position = Vec2::new(
            rng.next_float(-bound, bound),
            rng.next_float(-bound, bound),
        );
        let genome = Self::draw_genome(rng);
        Self::spawn_at(config, rng, position, genome)
    }

    fn draw_genome(rng: &mut R) -> Genome {
        Genome {
            head: Self::draw_part(rng),
            body: Self::draw_part(rng),
            limbs: Self::draw_part(rng),
            tail: Self::draw_part(rng),
        }
    }

    fn draw_part(rng: &mut R) -> TraitPart {
        TraitPart::new(rng.next_color(), rng.next_variant())
    }

    /// Finish a spawn at a known position: draw the wander target,
    /// orientation, animation phase, and lifespan, in that order.
    fn spawn_at(config: &SimConfig, rng: &mut R, position: Vec2, genome: Genome) -> Kreature {
        let bound = config.map_bound;
        let target = Vec2::new(
            rng.next_float(-bound, bound),
            rng.next_float(-bound, bound),
        );
        let orientation = normalize_angle(rng.next_float(0.0, 2.0 * std::f32::consts::PI));
        let mut kreature = Kreature::new(position, orientation, genome, config.max_age, 0.0);
        kreature.anim_elapsed = rng.next_float(0.0, config.animation_period);
        kreature.life_left = rng.next_float(config.min_lifetime, config.max_lifetime);
        let ai_speed = config.forward_velocity * config.ai_speed_malus;
        kreature.retarget(target, ai_speed, config.rotation_time);
        kreature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;
    use kkd_core::ColorKind;
    use kkd_core::movement::MovePlan;

    /// Pin a kreature to a fixed spot: the wander plan would otherwise
    /// overwrite the position on the next update.
    fn pin(kreature: &mut Kreature, position: Vec2) {
        kreature.position = position;
        kreature.plan = MovePlan::idle(position, kreature.orientation);
    }

    fn small_config() -> SimConfig {
        SimConfig::default()
            .with_seed(1)
            .with_spawn_limit(5)
            .with_min_population(3)
            .with_map_bound(1000.0)
    }

    fn seeded(config: SimConfig) -> Population<SeededRandom> {
        Population::seeded(config).expect("valid config")
    }

    /// A population built from empty scripted queues: every float draw
    /// collapses to its range minimum, so all kreatures start stacked at
    /// the map corner with azure genomes and minimum lifespans.
    fn scripted(config: SimConfig) -> Population<ScriptedRandom> {
        Population::new(config, ScriptedRandom::default()).expect("valid config")
    }

    #[test]
    fn seeds_spawn_limit_kreatures() {
        let population = seeded(small_config());
        assert_eq!(population.len(), 5);
        assert!(!population.is_empty());
        for kreature in population.kreatures() {
            assert!((-1000.0..=1000.0).contains(&kreature.position.x));
            assert!((-1000.0..=1000.0).contains(&kreature.position.y));
            assert!((30.0..90.0).contains(&kreature.life_left));
            assert_eq!(kreature.age_level, 5);
        }
    }

    #[test]
    fn player_position_clamped_for_any_delta() {
        let mut population = seeded(small_config());
        population.kreatures[0].position = Vec2::new(999.0, 0.0);
        population.kreatures[0].orientation = 0.0;
        for _ in 0..5 {
            population.set_forward_move(1.0);
            population.update(1.0e4);
            let position = population.player().position;
            assert!((-1000.0..=1000.0).contains(&position.x));
            assert!((-1000.0..=1000.0).contains(&position.y));
        }
        assert!((population.player().position.x - 1000.0).abs() < f32::EPSILON);
    }

    #[test]
    fn forward_motion_follows_orientation() {
        let mut population = seeded(small_config());
        population.kreatures[0].position = Vec2::ZERO;
        population.kreatures[0].orientation = 0.0;
        population.set_forward_move(1.0);
        population.update(0.1);
        let player = population.player();
        // 200 units/s for 0.1s along +x
        assert!((player.position.x - 20.0).abs() < 1e-3);
        assert!(player.position.y.abs() < 1e-3);
        // The one-tick impulse was consumed
        assert!(player.forward_move.abs() < f32::EPSILON);
    }

    #[test]
    fn turn_impulse_applies_and_resets() {
        let mut population = seeded(small_config());
        population.kreatures[0].orientation = 0.0;
        population.set_sided_move(1.0);
        population.update(0.5);
        let player = population.player();
        // 2 rad/s for 0.5s
        assert!((player.orientation - 1.0).abs() < 1e-5);
        assert!(player.side_move.abs() < f32::EPSILON);

        // Without fresh input the orientation holds
        population.update(0.5);
        assert!((population.player().orientation - 1.0).abs() < 1e-5);
    }

    #[test]
    fn sprint_trades_food_for_speed() {
        let mut walking = seeded(small_config());
        let mut sprinting = seeded(small_config());
        for population in [&mut walking, &mut sprinting] {
            population.kreatures[0].position = Vec2::ZERO;
            population.kreatures[0].orientation = 0.0;
        }
        sprinting.set_sprint(true);

        walking.set_forward_move(1.0);
        sprinting.set_forward_move(1.0);
        walking.update(1.0);
        sprinting.update(1.0);

        assert!((walking.player().position.x - 200.0).abs() < 1e-3);
        assert!((sprinting.player().position.x - 400.0).abs() < 1e-3);
        // Food grows at half rate while sprinting
        assert!((walking.player().food_level - 5.0).abs() < 1e-3);
        assert!((sprinting.player().food_level - 2.5).abs() < 1e-3);
    }

    #[test]
    fn food_level_stays_clamped() {
        let mut population = seeded(small_config());
        for _ in 0..50 {
            population.update(10.0);
            let food = population.player().food_level;
            assert!((0.0..=100.0).contains(&food));
        }
        assert!((population.player().food_level - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn player_animates_only_with_input() {
        let mut population = seeded(small_config());
        population.kreatures[0].anim_elapsed = 0.0;
        population.update(1.0);
        assert!(!population.player().anim_flip);

        population.set_forward_move(1.0);
        population.update(0.3);
        assert!(population.player().anim_flip);
    }

    #[test]
    fn notifications_published_each_tick() {
        let mut population = seeded(small_config());
        population.drain_notifications();
        population.update(0.1);
        let drained = population.drain_notifications();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], Notification::PositionChanged { .. }));
        assert!(matches!(drained[1], Notification::StatsChanged { .. }));
        assert!(population.notifications().is_empty());
    }

    #[test]
    fn ai_kreatures_age_and_keep_wandering() {
        let mut population = seeded(small_config());
        // Keep everything alive and visible: an enormous viewport
        population.on_viewport_changed(Vec2::ZERO, Vec2::splat(1.0e9));
        let lifespans: Vec<f32> = population.kreatures()[1..]
            .iter()
            .map(|k| k.life_left)
            .collect();

        population.update(2.0);
        for (kreature, before) in population.kreatures()[1..].iter().zip(&lifespans) {
            assert!((kreature.life_left - (before - 2.0)).abs() < 1e-3);
        }

        // After generous time every AI plan has been reseeded and is
        // running toward a fresh in-bounds target
        population.update(1.0e5);
        population.update(1.0e5);
        for kreature in &population.kreatures()[1..] {
            assert_eq!(kreature.plan.status(), PlanStatus::Running);
            let target = kreature.plan.target();
            assert!((-1000.0..=1000.0).contains(&target.x));
            assert!((-1000.0..=1000.0).contains(&target.y));
        }
    }

    #[test]
    fn expired_kreatures_removed_only_off_screen() {
        let mut population = seeded(small_config());
        population.on_viewport_changed(Vec2::ZERO, Vec2::new(10.0, 10.0));
        // One expired kreature on screen, one expired far off screen
        pin(&mut population.kreatures[1], Vec2::ZERO);
        population.kreatures[1].life_left = -1.0;
        pin(&mut population.kreatures[2], Vec2::new(900.0, 900.0));
        population.kreatures[2].life_left = -1.0;

        population.update(0.0);

        let positions: Vec<Vec2> = population.kreatures().iter().map(|k| k.position).collect();
        assert!(positions.contains(&Vec2::ZERO));
        assert!(!positions.contains(&Vec2::new(900.0, 900.0)));
    }

    #[test]
    fn repopulation_restores_floor_with_offscreen_spawns() {
        let config = small_config().with_spawn_limit(6).with_min_population(5);
        let mut population = seeded(config);
        population.on_viewport_changed(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let view = population.viewport.expanded(population.config.viewport_margin);
        for kreature in population.kreatures.iter_mut().skip(1) {
            pin(kreature, Vec2::new(950.0, 950.0));
            kreature.life_left = -1.0;
        }

        population.update(0.0);

        assert_eq!(population.len(), 5);
        for kreature in &population.kreatures()[1..] {
            assert!(!view.contains(kreature.position));
        }
    }

    #[test]
    fn repopulation_terminates_when_everything_is_visible() {
        let config = small_config().with_spawn_limit(4).with_min_population(4);
        let mut population = seeded(config);
        // The viewport covers the whole map, so no off-screen spawn
        // point exists: the bounded retry must give up and accept a
        // candidate instead of looping forever.
        population.on_viewport_changed(Vec2::ZERO, Vec2::splat(1.0e6));
        population.kreatures.truncate(1);

        population.update(0.0);

        assert_eq!(population.len(), 4);
        for kreature in population.kreatures() {
            assert!((-1000.0..=1000.0).contains(&kreature.position.x));
            assert!((-1000.0..=1000.0).contains(&kreature.position.y));
        }
    }

    #[test]
    fn population_never_drops_below_floor() {
        let mut population = seeded(small_config());
        population.on_viewport_changed(Vec2::ZERO, Vec2::new(10.0, 10.0));
        for _ in 0..20 {
            // Long ticks expire natural lifespans over and over
            population.update(100.0);
            assert!(population.len() >= population.config().min_population);
            assert!(population.len() >= 1);
        }
    }

    #[test]
    fn swap_exchanges_slots_not_contents() {
        let mut population = seeded(small_config());
        let target = population.closest_to_player().expect("ai present");
        let old_player = population.kreatures[0].clone();
        let old_closest = population.kreatures[target].clone();

        population.swap_with_closest();

        // The nearest kreature's body now sits in the player slot
        assert_eq!(population.player().position, old_closest.position);
        assert_eq!(population.player().genome, old_closest.genome);
        // The former player's body sits where the nearest one was; its
        // wander plan was reseeded but its body state is untouched
        assert_eq!(population.kreatures[target].position, old_player.position);
        assert_eq!(population.kreatures[target].genome, old_player.genome);
    }

    #[test]
    fn swap_tie_break_prefers_first_in_order() {
        let mut population = scripted(small_config());
        // Everyone is stacked at the same corner: index 1 must win
        let marker = Genome::uniform(TraitPart::new(ColorKind::Red, 1));
        population.kreatures[1].genome = marker;
        population.swap_with_closest();
        assert_eq!(population.player().genome, marker);
    }

    #[test]
    fn special_creature_then_swap_completes_the_game() {
        let mut population = scripted(small_config().with_spawn_limit(3));
        // Push the ordinary AI kreatures far away so the special one,
        // spawned on top of the player, is the nearest
        population.kreatures[1].position = Vec2::new(900.0, 900.0);
        population.kreatures[2].position = Vec2::new(900.0, 900.0);

        population.create_special_creature();
        assert_eq!(population.len(), 4);
        assert!(population.kreatures()[3].life_left.is_infinite());

        population.drain_notifications();
        population.swap_with_closest();

        assert!(population.player().genome.is_complete());
        let drained = population.drain_notifications();
        assert_eq!(drained, vec![Notification::GameCompleted]);
    }

    #[test]
    fn fusion_out_of_range_is_a_no_op() {
        let mut population = seeded(small_config());
        population.kreatures[0].position = Vec2::ZERO;
        population.kreatures[0].food_level = 100.0;
        for kreature in population.kreatures.iter_mut().skip(1) {
            kreature.position = Vec2::new(800.0, 800.0);
        }
        let before = population.kreatures.clone();

        population.fuse_dna();

        assert_eq!(population.kreatures, before);
    }

    #[test]
    fn fusion_rejected_when_player_age_spent() {
        let mut population = scripted(small_config());
        population.kreatures[0].age_level = 0;
        population.kreatures[0].food_level = 100.0;
        let before = population.len();

        population.fuse_dna();

        assert_eq!(population.len(), before);
    }

    #[test]
    fn fusion_rejected_when_food_below_cost() {
        let mut population = scripted(small_config());
        population.kreatures[0].food_level = 49.9;
        let before = population.kreatures.clone();

        population.fuse_dna();

        assert_eq!(population.kreatures, before);
    }

    #[test]
    fn fusion_breeds_a_child_with_fused_traits() {
        let mut population = scripted(small_config().with_spawn_limit(3));
        population.kreatures[0].food_level = 100.0;
        population.kreatures[0].genome = Genome::uniform(TraitPart::new(ColorKind::Azure, 0));
        population.kreatures[1].genome = Genome::uniform(TraitPart::new(ColorKind::Yellow, 2));

        // Four fusion rolls (head mutates via the scripted color index),
        // then the child's target/orientation/animation/lifespan draws
        population.rng.push_ints(&[3]);
        population
            .rng
            .push_floats(&[0.95, 0.1, 0.8, 0.2, 0.0, 0.0, 0.0, 0.0, 30.0]);

        population.fuse_dna();

        assert_eq!(population.len(), 4);
        let child = &population.kreatures()[3];
        assert_eq!(child.genome.head, TraitPart::new(ColorKind::Red, 2));
        assert_eq!(child.genome.body, TraitPart::new(ColorKind::Yellow, 0));
        assert_eq!(child.genome.limbs, TraitPart::new(ColorKind::Azure, 2));
        assert_eq!(child.genome.tail, TraitPart::new(ColorKind::Yellow, 0));
        // The child appears at the fixed offset from the player
        assert_eq!(child.position, Vec2::new(-900.0, -900.0));
        assert!((child.life_left - 30.0).abs() < f32::EPSILON);

        // Costs: food drained, both parents aged one generation
        assert!((population.player().food_level - 50.0).abs() < f32::EPSILON);
        assert_eq!(population.player().age_level, 4);
        assert_eq!(population.kreatures()[1].age_level, 4);
    }

    #[test]
    fn fusion_hands_control_to_newborn_when_player_spent() {
        let mut population = scripted(small_config().with_spawn_limit(3));
        population.kreatures[0].food_level = 100.0;
        population.kreatures[0].age_level = 1;
        population.kreatures[0].genome = Genome::uniform(TraitPart::new(ColorKind::Azure, 0));
        population.kreatures[1].genome = Genome::uniform(TraitPart::new(ColorKind::Yellow, 2));
        // All four rolls inherit the partner's color and variant
        population.rng.push_floats(&[0.6, 0.6, 0.6, 0.6]);

        population.fuse_dna();

        // The newborn took the player slot; the spent body retired
        let player = population.player();
        assert_eq!(player.age_level, 5);
        assert_eq!(
            player.genome,
            Genome::uniform(TraitPart::new(ColorKind::Yellow, 2))
        );
        assert!(!population.kreatures().iter().any(|k| k.age_level < 0));
    }

    #[test]
    fn identical_seeds_and_commands_replay_identically() {
        let run = || {
            let mut population = seeded(small_config().with_seed(77));
            population.set_sprint(true);
            population.set_forward_move(1.0);
            population.update(0.5);
            population.swap_with_closest();
            population.update(0.5);
            population.fuse_dna();
            population.update(2.0);
            let notifications = population.drain_notifications();
            (population.kreatures.clone(), notifications)
        };

        let (kreatures_a, notifications_a) = run();
        let (kreatures_b, notifications_b) = run();
        assert_eq!(kreatures_a, kreatures_b);
        assert_eq!(notifications_a, notifications_b);
    }

    #[test]
    fn reset_reseeds_a_full_population() {
        let mut population = seeded(small_config());
        population.set_sprint(true);
        population.update(5.0);
        population.swap_with_closest();

        population.reset();

        assert_eq!(population.len(), 5);
        assert!(!population.sprinting);
        for kreature in population.kreatures() {
            assert_eq!(kreature.age_level, 5);
            assert!((-1000.0..=1000.0).contains(&kreature.position.x));
        }
    }

    #[test]
    fn viewport_notification_updates_the_cached_rect() {
        let mut population = seeded(small_config());
        population.on_viewport_changed(Vec2::new(50.0, -25.0), Vec2::new(640.0, 360.0));
        assert_eq!(population.viewport.center, Vec2::new(50.0, -25.0));
        assert_eq!(population.viewport.size, Vec2::new(640.0, 360.0));
    }

    #[test]
    #[should_panic(expected = "at least two kreatures")]
    fn swap_with_a_lone_kreature_violates_the_invariant() {
        let mut population = seeded(small_config());
        population.kreatures.truncate(1);
        population.swap_with_closest();
    }
}
