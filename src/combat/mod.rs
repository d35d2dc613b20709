//! Combat: health, projectiles, explosions and the per-tick hit resolution

pub mod collision;
pub mod damage;
pub mod explosion;
pub mod projectiles;

pub use collision::*;
pub use damage::*;
pub use explosion::*;
pub use projectiles::*;
