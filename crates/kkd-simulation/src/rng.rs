use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use kkd_core::ColorKind;
use kkd_core::genome::TraitPart;

/// Uniform random source injected into the population simulator.
///
/// Replaces the original game's process-wide random singleton with an
/// explicit dependency, so runs are deterministic under a fixed seed and
/// tests can substitute scripted draws.
pub trait RandomSource {
    /// A uniform integer in `min..=max` (both ends inclusive).
    fn next_int(&mut self, min: i32, max: i32) -> i32;

    /// A uniform float in `[min, max)`.
    fn next_float(&mut self, min: f32, max: f32) -> f32;

    /// A uniformly chosen trait color.
    fn next_color(&mut self) -> ColorKind {
        let index = self.next_int(0, ColorKind::ALL.len() as i32 - 1);
        ColorKind::ALL[index as usize]
    }

    /// A uniformly chosen sprite variant.
    fn next_variant(&mut self) -> u8 {
        self.next_int(0, i32::from(TraitPart::VARIANTS) - 1) as u8
    }
}

/// The production random source: a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a random source from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }

    fn next_float(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.random_range(min..max)
        } else {
            min
        }
    }
}

/// A random source replaying scripted draws, for deterministic tests.
///
/// Integer and float draws are consumed from separate queues; once a
/// queue runs dry, further draws return the queue's last value (or the
/// range minimum if the queue was never filled).
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    ints: std::collections::VecDeque<i32>,
    floats: std::collections::VecDeque<f32>,
    last_int: Option<i32>,
    last_float: Option<f32>,
}

#[cfg(test)]
impl ScriptedRandom {
    /// Script the upcoming integer and float draws.
    pub fn new(ints: &[i32], floats: &[f32]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            floats: floats.iter().copied().collect(),
            last_int: None,
            last_float: None,
        }
    }

    /// Append further scripted integer draws.
    pub fn push_ints(&mut self, ints: &[i32]) {
        self.ints.extend(ints.iter().copied());
    }

    /// Append further scripted float draws.
    pub fn push_floats(&mut self, floats: &[f32]) {
        self.floats.extend(floats.iter().copied());
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        let value = self.ints.pop_front().or(self.last_int).unwrap_or(min);
        self.last_int = Some(value);
        value.clamp(min, max)
    }

    fn next_float(&mut self, min: f32, max: f32) -> f32 {
        let value = self.floats.pop_front().or(self.last_float).unwrap_or(min);
        self.last_float = Some(value);
        value.clamp(min, max.max(min))
    }
}
