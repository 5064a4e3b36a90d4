use serde::{Deserialize, Serialize};

use crate::color::ColorKind;

/// The four body parts that carry inheritable traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    /// The head part.
    Head,
    /// The body part.
    Body,
    /// The limbs part.
    Limbs,
    /// The tail part.
    Tail,
}

impl PartKind {
    /// All parts in fusion order.
    pub const ALL: [PartKind; 4] = [
        PartKind::Head,
        PartKind::Body,
        PartKind::Limbs,
        PartKind::Tail,
    ];
}

/// One inheritable trait: a color and a sprite variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitPart {
    /// The part's hue.
    pub color: ColorKind,
    /// Sprite sheet variant, `0..TraitPart::VARIANTS`.
    pub variant: u8,
}

impl TraitPart {
    /// Number of sprite variants per part in the sprite sheet.
    pub const VARIANTS: u8 = 3;

    /// Create a part with the given color and variant.
    pub fn new(color: ColorKind, variant: u8) -> Self {
        Self { color, variant }
    }
}

/// A creature's full set of trait parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    /// Head trait.
    pub head: TraitPart,
    /// Body trait.
    pub body: TraitPart,
    /// Limbs trait.
    pub limbs: TraitPart,
    /// Tail trait.
    pub tail: TraitPart,
}

impl Genome {
    /// The completion target for a single part: green with the base variant.
    pub const TARGET: TraitPart = TraitPart {
        color: ColorKind::Green,
        variant: 0,
    };

    /// A genome with every part equal to `part`.
    pub fn uniform(part: TraitPart) -> Self {
        Self {
            head: part,
            body: part,
            limbs: part,
            tail: part,
        }
    }

    /// The trait carried by the given part.
    pub fn part(&self, kind: PartKind) -> TraitPart {
        match kind {
            PartKind::Head => self.head,
            PartKind::Body => self.body,
            PartKind::Limbs => self.limbs,
            PartKind::Tail => self.tail,
        }
    }

    /// Overwrite the trait carried by the given part.
    pub fn set_part(&mut self, kind: PartKind, part: TraitPart) {
        match kind {
            PartKind::Head => self.head = part,
            PartKind::Body => self.body = part,
            PartKind::Limbs => self.limbs = part,
            PartKind::Tail => self.tail = part,
        }
    }

    /// Whether all four parts match the completion target.
    pub fn is_complete(&self) -> bool {
        PartKind::ALL.iter().all(|&k| self.part(k) == Self::TARGET)
    }
}
