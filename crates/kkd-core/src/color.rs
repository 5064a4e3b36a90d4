use serde::{Deserialize, Serialize};

/// The five trait hues a creature part can carry.
///
/// The discriminants match the original sprite sheet ordering, so
/// `ColorKind::ALL[i]` is the color with index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorKind {
    /// Azure, index 0.
    Azure,
    /// Green, index 1. The completion target color.
    Green,
    /// Yellow, index 2.
    Yellow,
    /// Red, index 3.
    Red,
    /// Magenta, index 4.
    Magenta,
}

impl ColorKind {
    /// All colors in index order.
    pub const ALL: [ColorKind; 5] = [
        ColorKind::Azure,
        ColorKind::Green,
        ColorKind::Yellow,
        ColorKind::Red,
        ColorKind::Magenta,
    ];

    /// Directional dominance between two colors on the fixed wheel.
    ///
    /// Returns `+1` if `other` is dominant over `self`, `-1` if `other`
    /// is recessive to `self`, and `0` if the colors are equal. The
    /// relation is a rock-paper-scissors-style cycle, not a total order:
    /// every color dominates two others and is dominated by the
    /// remaining two. It is antisymmetric, so
    /// `a.dominance(b) == -b.dominance(a)` for distinct `a` and `b`.
    pub fn dominance(self, other: ColorKind) -> i8 {
        use ColorKind::{Azure, Green, Magenta, Red, Yellow};
        match self {
            Azure => match other {
                Yellow | Magenta => 1,
                Green | Red => -1,
                Azure => 0,
            },
            Green => match other {
                Azure | Yellow => 1,
                Magenta | Red => -1,
                Green => 0,
            },
            Yellow => match other {
                Red | Magenta => 1,
                Azure | Green => -1,
                Yellow => 0,
            },
            Red => match other {
                Azure | Green => 1,
                Yellow | Magenta => -1,
                Red => 0,
            },
            Magenta => match other {
                Red | Green => 1,
                Yellow | Azure => -1,
                Magenta => 0,
            },
        }
    }
}

impl std::fmt::Display for ColorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Azure => write!(f, "azure"),
            Self::Green => write!(f, "green"),
            Self::Yellow => write!(f, "yellow"),
            Self::Red => write!(f, "red"),
            Self::Magenta => write!(f, "magenta"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominance_table_spot_checks() {
        // Yellow and Magenta are dominant over Azure
        assert_eq!(ColorKind::Azure.dominance(ColorKind::Yellow), 1);
        assert_eq!(ColorKind::Azure.dominance(ColorKind::Magenta), 1);
        // Green and Red are recessive from Azure's side
        assert_eq!(ColorKind::Azure.dominance(ColorKind::Green), -1);
        assert_eq!(ColorKind::Azure.dominance(ColorKind::Red), -1);
        // A middle-of-the-wheel pair
        assert_eq!(ColorKind::Magenta.dominance(ColorKind::Red), 1);
        assert_eq!(ColorKind::Red.dominance(ColorKind::Magenta), -1);
    }

    #[test]
    fn dominance_is_zero_on_equal_colors() {
        for color in ColorKind::ALL {
            assert_eq!(color.dominance(color), 0);
        }
    }

    #[test]
    fn dominance_is_antisymmetric() {
        for a in ColorKind::ALL {
            for b in ColorKind::ALL {
                assert_eq!(a.dominance(b), -b.dominance(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn every_color_dominates_exactly_two() {
        for a in ColorKind::ALL {
            let dominated = ColorKind::ALL
                .iter()
                .filter(|b| b.dominance(a) == 1)
                .count();
            assert_eq!(dominated, 2, "{a} should dominate two colors");
        }
    }

    #[test]
    fn index_order_matches_all_array() {
        assert_eq!(ColorKind::ALL[0], ColorKind::Azure);
        assert_eq!(ColorKind::ALL[1], ColorKind::Green);
        assert_eq!(ColorKind::ALL[4], ColorKind::Magenta);
    }
}
