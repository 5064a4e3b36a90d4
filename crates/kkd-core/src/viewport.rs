use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The camera-visible world-space rectangle.
///
/// The simulator caches the last viewport notification and uses a
/// margin-expanded version of it to gate despawning (expired kreatures
/// must not vanish on screen) and respawning (new kreatures must not
/// pop in on screen).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Center of the visible area.
    pub center: Vec2,
    /// Full width and height of the visible area.
    pub size: Vec2,
}

impl Viewport {
    /// Create a viewport from its center and full size.
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// The same viewport grown by `margin` world units on every side.
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            center: self.center,
            size: self.size + Vec2::splat(2.0 * margin),
        }
    }

    /// Whether `point` lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.size * 0.5;
        let delta = point - self.center;
        delta.x.abs() <= half.x && delta.y.abs() <= half.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_center_and_edges() {
        let view = Viewport::new(Vec2::ZERO, Vec2::new(200.0, 100.0));
        assert!(view.contains(Vec2::ZERO));
        assert!(view.contains(Vec2::new(100.0, 50.0)));
        assert!(!view.contains(Vec2::new(100.1, 0.0)));
        assert!(!view.contains(Vec2::new(0.0, -50.1)));
    }

    #[test]
    fn expansion_grows_every_side() {
        let view = Viewport::new(Vec2::new(10.0, 10.0), Vec2::new(100.0, 100.0));
        let grown = view.expanded(25.0);
        assert!(!view.contains(Vec2::new(70.0, 10.0)));
        assert!(grown.contains(Vec2::new(70.0, 10.0)));
        assert_eq!(grown.center, view.center);
    }

    #[test]
    fn off_center_viewport() {
        let view = Viewport::new(Vec2::new(1000.0, -500.0), Vec2::new(1024.0, 576.0));
        assert!(view.contains(Vec2::new(1500.0, -300.0)));
        assert!(!view.contains(Vec2::ZERO));
    }
}
