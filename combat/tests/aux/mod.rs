mod fixtures;
mod init;
mod rng;
mod sim;

#[allow(unused)]
pub use fixtures::*;
#[allow(unused)]
pub use rng::*;
#[allow(unused)]
pub use sim::*;
