use crate::motion::Facing;

/// Result of one vertical integration step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalStep {
    pub y: f32,
    pub vy: f32,
    pub landed: bool,
}

/// Horizontal speed from held keys. Left wins when both are held.
/// Returns the new facing only when a direction is held.
pub fn horizontal_velocity(left: bool, right: bool, speed: f32) -> (f32, Option<Facing>) {
    if left {
        (-speed, Some(Facing::Left))
    } else if right {
        (speed, Some(Facing::Right))
    } else {
        (0.0, None)
    }
}

/// Integrate gravity for one tick. The position moves with the velocity the
/// tick started with; gravity lands in the velocity for the next tick.
/// Anything at or below ground height snaps onto the ground and stops.
pub fn integrate_vertical(y: f32, vy: f32, dt: f32, gravity: f32, ground: f32) -> VerticalStep {
    let next_vy = vy - gravity * dt;
    let next_y = y + vy * dt;

    if next_y <= ground {
        VerticalStep {
            y: ground,
            vy: 0.0,
            landed: true,
        }
    } else {
        VerticalStep {
            y: next_y,
            vy: next_vy,
            landed: false,
        }
    }
}
