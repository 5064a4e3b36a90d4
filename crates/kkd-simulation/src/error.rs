/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur when setting up a simulation.
///
/// Gameplay preconditions (fusion range, age, food) are deliberately not
/// errors: those commands no-op silently so a UI layer can probe "can
/// fuse" by attempting it.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The initial population must hold the player plus at least one AI
    /// kreature.
    #[error("spawn limit must be at least 2, got {0}")]
    SpawnLimitTooSmall(usize),

    /// The repopulation floor must keep the population non-empty.
    #[error("minimum population must be at least 1, got {0}")]
    PopulationFloorTooSmall(usize),

    /// The map bound must span a real area.
    #[error("map bound must be positive, got {0}")]
    InvalidMapBound(f32),

    /// The lifespan range must be non-empty and ordered.
    #[error("invalid lifetime range: {min}..{max}")]
    InvalidLifetimeRange {
        /// Lower lifespan bound in seconds.
        min: f32,
        /// Upper lifespan bound in seconds.
        max: f32,
    },

    /// A probability-valued tunable fell outside `[0, 1]`.
    #[error("probability {name} must be in [0, 1], got {value}")]
    InvalidProbability {
        /// The tunable's name.
        name: &'static str,
        /// The offending value.
        value: f32,
    },
}
