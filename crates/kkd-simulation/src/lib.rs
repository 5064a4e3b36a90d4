//! Kreature population simulator for Krokodile.
//!
//! Drives the living world behind the game: a bounded population of
//! kreatures wandering a square map, advanced by caller-supplied time
//! deltas. The player occupies slot 0 of the population and acts
//! through a small command surface (move, turn, sprint, swap bodies,
//! fuse DNA); everything else is AI-controlled. State changes the
//! caller cares about are published through a drainable notification
//! outbox rather than callbacks, keeping kkd-core free of any frontend
//! concern.

/// Configuration for a simulation run, with validation.
pub mod config;
/// Error types for the simulation crate.
pub mod error;
/// Notification types and the outbox observers drain.
pub mod event;
/// Trait fusion: per-part breeding over the color dominance wheel.
pub mod fusion;
/// The population container and its per-tick update loop.
pub mod population;
/// Random sources: the seeded default and the test-only scripted one.
pub mod rng;

/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::Notification`] and [`event::Outbox`].
pub use event::{Notification, Outbox};
/// Re-exports of [`fusion::fuse_genome`] and [`fusion::fuse_part`].
pub use fusion::{fuse_genome, fuse_part};
/// Re-export of [`population::Population`].
pub use population::Population;
/// Re-exports of [`rng::RandomSource`] and [`rng::SeededRandom`].
pub use rng::{RandomSource, SeededRandom};
