use glam::Vec2;

/// Normalize an angle in radians into `(-PI, PI]`.
///
/// Total over all finite inputs; `PI` maps to itself and `-PI` to `PI`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(2.0 * std::f32::consts::PI);
    if wrapped > std::f32::consts::PI {
        wrapped - 2.0 * std::f32::consts::PI
    } else {
        wrapped
    }
}

/// The bearing from `from` toward `to`, in `(-PI, PI]`.
pub fn bearing(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    normalize_angle(delta.y.atan2(delta.x))
}

/// Clamp a position into the square bound `[-bound, bound]^2`.
pub fn clamp_to_bound(position: Vec2, bound: f32) -> Vec2 {
    position.clamp(Vec2::splat(-bound), Vec2::splat(bound))
}
