pub mod card;
pub mod combat_event;
pub mod controller;
pub mod damage;
pub mod enemy;
pub mod intent;
pub mod player;
pub mod resolver;
pub mod result;
pub mod reward;
pub mod rng;
pub mod run;
pub mod session;
pub mod simulation;
pub mod statics;
pub mod status;
pub mod summary;
pub mod template;
pub mod triggers;
pub mod turn;

pub use card::*;
pub use combat_event::*;
pub use controller::*;
pub use damage::*;
pub use enemy::*;
pub use intent::*;
pub use player::*;
pub use resolver::*;
pub use result::*;
pub use reward::*;
pub use rng::*;
pub use run::*;
pub use session::*;
pub use simulation::*;
pub use statics::*;
pub use status::*;
pub use summary::*;
pub use template::*;
pub use triggers::*;
pub use turn::*;
