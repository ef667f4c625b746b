pub mod base_player;
pub mod combatant;
pub mod health;
pub mod template;

pub use base_player::*;
pub use combatant::*;
pub use health::*;
pub use template::*;
