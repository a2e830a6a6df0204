pub mod save;
pub mod state;

pub use save::SaveError;
pub use state::{Game, RoundRecord, TurnError, MAX_THROWS, TOTAL_ROUNDS};
