//! Core types for Krokodile: trait colors, genomes, and creature state.
//!
//! This crate defines the data model that the population simulator in
//! `kkd-simulation` operates on. Everything here is plain deterministic
//! data and kinematics — all random draws and orchestration live in the
//! simulation crate, so these types can be constructed and inspected
//! directly in tests.

/// Trait colors and the non-transitive dominance wheel.
pub mod color;
/// Trait parts, sprite variants, and the four-part genome.
pub mod genome;
/// The creature state record.
pub mod kreature;
/// Angle and bound math helpers.
pub mod math;
/// The two-phase AI movement plan state machine.
pub mod movement;
/// The camera-visible world-space rectangle.
pub mod viewport;

/// Re-export of [`color::ColorKind`].
pub use color::ColorKind;
/// Re-exports of [`genome::Genome`], [`genome::PartKind`], and [`genome::TraitPart`].
pub use genome::{Genome, PartKind, TraitPart};
/// Re-export of [`kreature::Kreature`].
pub use kreature::Kreature;
/// Re-exports of [`movement::MovePlan`] and [`movement::PlanStatus`].
pub use movement::{MovePlan, PlanStatus};
/// Re-export of [`viewport::Viewport`].
pub use viewport::Viewport;
