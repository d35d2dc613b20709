use bevy::prelude::*;

/// Horizontal heading of anything that walks or flies along the x axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Strict proximity test used by every hit check
pub fn within(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance(b) < radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_sign_and_flip() {
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Right.sign(), 1.0);
        assert_eq!(Facing::Left.flipped(), Facing::Right);
        assert_eq!(Facing::default(), Facing::Right);
    }

    #[test]
    fn test_within_is_strict() {
        let origin = Vec3::new(0.0, 1.0, 0.0);

        assert!(within(origin, Vec3::new(0.4, 1.0, 0.0), 0.5));
        assert!(!within(origin, Vec3::new(0.5, 1.0, 0.0), 0.5));
        assert!(within(origin, Vec3::new(0.3, 1.4, 0.0), 0.8));
    }
}
