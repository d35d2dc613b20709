use bevy::prelude::*;

use crate::session::{EnemyView, PlayerView};

/// Which clip a character is playing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    #[default]
    Idle,
    Running,
    Shooting,
}

impl AnimationState {
    pub fn for_player(view: &PlayerView) -> Self {
        if view.is_shooting {
            AnimationState::Shooting
        } else if view.is_jumping || view.is_moving {
            AnimationState::Running
        } else {
            AnimationState::Idle
        }
    }

    /// Enemies patrol without pause, so they are never idle
    pub fn for_enemy(view: &EnemyView) -> Self {
        if view.is_shooting {
            AnimationState::Shooting
        } else {
            AnimationState::Running
        }
    }

    pub fn frame_count(self) -> usize {
        match self {
            AnimationState::Idle => 1,
            AnimationState::Running => 4,
            AnimationState::Shooting => 2,
        }
    }

    pub fn frames_per_second(self) -> f32 {
        match self {
            AnimationState::Idle => 1.0,
            AnimationState::Running => 10.0,
            AnimationState::Shooting => 10.0,
        }
    }
}

/// Current clip and how long it has been playing
#[derive(Component, Clone, Debug, Default)]
pub struct Animator {
    pub state: AnimationState,
    pub elapsed: f32,
}

impl Animator {
    /// Switch clips, restarting only when the clip actually changes
    pub fn play(&mut self, state: AnimationState) {
        if self.state != state {
            self.state = state;
            self.elapsed = 0.0;
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    pub fn frame(&self) -> usize {
        let frames = self.state.frame_count();
        let index = (self.elapsed * self.state.frames_per_second()) as usize;
        index % frames
    }

    /// Vertical squash for the current frame, standing in for sprite frames
    pub fn squash(&self) -> f32 {
        match (self.state, self.frame()) {
            (AnimationState::Running, 1) | (AnimationState::Running, 3) => 0.92,
            (AnimationState::Shooting, 1) => 0.96,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::{Archetype, EnemyId};
    use crate::motion::Facing;

    fn player_view() -> PlayerView {
        PlayerView {
            position: Vec3::new(0.0, 1.0, 0.0),
            facing: Facing::Right,
            is_moving: false,
            is_jumping: false,
            is_shooting: false,
            is_invulnerable: false,
            visible: true,
            health: 3,
            health_fraction: 1.0,
        }
    }

    #[test]
    fn test_player_state_priority() {
        let mut view = player_view();
        assert_eq!(AnimationState::for_player(&view), AnimationState::Idle);

        view.is_jumping = true;
        assert_eq!(AnimationState::for_player(&view), AnimationState::Running);

        view.is_jumping = false;
        view.is_moving = true;
        assert_eq!(AnimationState::for_player(&view), AnimationState::Running);

        view.is_shooting = true;
        assert_eq!(AnimationState::for_player(&view), AnimationState::Shooting);
    }

    #[test]
    fn test_enemy_never_idle() {
        let mut view = EnemyView {
            id: EnemyId(1),
            position: Vec3::ZERO,
            facing: Facing::Left,
            archetype: Archetype::Walker,
            is_jumping: false,
            is_shooting: false,
            health: 1,
        };
        assert_eq!(AnimationState::for_enemy(&view), AnimationState::Running);

        view.is_shooting = true;
        assert_eq!(AnimationState::for_enemy(&view), AnimationState::Shooting);
    }

    #[test]
    fn test_frames_cycle() {
        let mut animator = Animator::default();
        animator.play(AnimationState::Running);

        assert_eq!(animator.frame(), 0);
        animator.advance(0.25);
        assert_eq!(animator.frame(), 2);
        animator.advance(0.2);
        assert_eq!(animator.frame(), 0);
    }

    #[test]
    fn test_replaying_same_clip_keeps_time() {
        let mut animator = Animator::default();
        animator.play(AnimationState::Running);
        animator.advance(0.15);

        animator.play(AnimationState::Running);
        assert_eq!(animator.frame(), 1);

        animator.play(AnimationState::Shooting);
        assert_eq!(animator.elapsed, 0.0);
    }
}
