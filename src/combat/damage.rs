/// Hit points for the player and enemies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Remove one point. Enemies may go below zero when several shots land
    /// in the same pass; the player is floored separately.
    pub fn take_hit(&mut self) {
        self.current -= 1;
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn fraction(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        self.current.max(0) as f32 / self.max as f32
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(1)
    }
}
