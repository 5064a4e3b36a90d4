use kkd_core::genome::{Genome, PartKind, TraitPart};

use crate::config::SimConfig;
use crate::rng::RandomSource;

/// Combine one trait part of the two parents into a child part.
///
/// A single roll `r` in `[0, 1)` decides both inheritances:
/// - variant: `r > 0.5` takes the partner's sprite variant, otherwise the
///   player's is kept;
/// - color: `r` below the dominance threshold inherits the partner's
///   color; failing that, `r >= fumble_mutation` re-randomizes the color
///   entirely; otherwise the player's color is kept.
///
/// The threshold is `upper_fusion_factor` when the partner's color is
/// dominant over the player's on the color wheel, `lower_fusion_factor`
/// otherwise — a dominant partner color is three times as likely to be
/// passed on.
pub fn fuse_part<R: RandomSource>(
    config: &SimConfig,
    current: TraitPart,
    other: TraitPart,
    rng: &mut R,
) -> TraitPart {
    let threshold = if current.color.dominance(other.color) == 1 {
        config.upper_fusion_factor
    } else {
        config.lower_fusion_factor
    };

    let roll = rng.next_float(0.0, 1.0);

    let variant = if roll > 0.5 { other.variant } else { current.variant };

    let color = if roll < threshold {
        other.color
    } else if roll >= config.fumble_mutation {
        rng.next_color()
    } else {
        current.color
    };

    TraitPart::new(color, variant)
}

/// Fuse every part of the two parents, in [`PartKind::ALL`] order.
pub fn fuse_genome<R: RandomSource>(
    config: &SimConfig,
    current: &Genome,
    other: &Genome,
    rng: &mut R,
) -> Genome {
    let mut child = *current;
    for kind in PartKind::ALL {
        let part = fuse_part(config, current.part(kind), other.part(kind), rng);
        child.set_part(kind, part);
    }
    child
}
