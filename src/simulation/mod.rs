pub mod engine;
pub mod policy;

pub use engine::{run_game, GameResult};
pub use policy::Policy;
