use glam::Vec2;

/// Notifications published by the simulator for decoupled observers.
///
/// Replaces the original game's run-time-typed message bus with a tagged
/// union that collaborators (camera, HUD, scene controller) drain and
/// interpret — no downcasts involved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    /// The player moved or turned this tick; consumed by the camera.
    PositionChanged {
        /// The player's world-space position.
        position: Vec2,
        /// The player's heading in radians.
        angle: f32,
    },
    /// The player's stats after this tick; consumed by the HUD.
    StatsChanged {
        /// Current food gauge value.
        food_level: f32,
        /// Remaining breeding generations.
        age_level: i32,
    },
    /// The player's genome reached the completion target.
    GameCompleted,
}

/// Accumulates notifications until the caller drains them.
#[derive(Debug, Default)]
pub struct Outbox {
    pending: Vec<Notification>,
}

impl Outbox {
    /// Create an empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification.
    pub fn push(&mut self, notification: Notification) {
        self.pending.push(notification);
    }

    /// The notifications accumulated so far, oldest first.
    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    /// Take all accumulated notifications, leaving the outbox empty.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }

    /// Number of undrained notifications.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the outbox holds no notifications.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
