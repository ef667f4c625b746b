pub mod card;
pub mod data;
pub mod effect;
pub mod enemy;
pub mod power;
pub mod relic;
pub mod status;
pub mod trigger;

pub use card::*;
pub use data::*;
pub use effect::*;
pub use enemy::*;
pub use power::*;
pub use relic::*;
pub use status::*;
pub use trigger::*;
