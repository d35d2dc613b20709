use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExplosionId(pub u64);

/// Emitted by the collision pass on every enemy hit. The simulation never
/// reads these back; they only drive the effect on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Explosion {
    pub id: ExplosionId,
    pub position: Vec3,
}

/// Running state of one explosion effect
#[derive(Component, Clone, Debug)]
pub struct ExplosionEffect {
    pub elapsed: f32,
    pub duration: f32,
    pub base_scale: f32,
}

impl Default for ExplosionEffect {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            duration: 0.5,
            base_scale: 1.2,
        }
    }
}

impl ExplosionEffect {
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }

    /// Grows from half size to double size over the effect
    pub fn scale(&self) -> f32 {
        self.base_scale * (0.5 + self.progress() * 1.5)
    }

    /// Fully opaque for the first 70%, then fades out linearly
    pub fn opacity(&self) -> f32 {
        let progress = self.progress();
        if progress < 0.7 {
            1.0
        } else {
            1.0 - (progress - 0.7) / 0.3
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}
