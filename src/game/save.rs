use crate::game::state::{Game, MAX_THROWS, TOTAL_ROUNDS};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Corrupt session state: {0}")]
    Invalid(String),
}

/// Check the fixed schema of a deserialized session. A session that fails
/// here must be discarded; the caller starts a fresh game instead.
fn validate(game: &Game) -> Result<(), SaveError> {
    if game.dice().values().iter().any(|v| !(1..=6).contains(v)) {
        return Err(SaveError::Invalid("die value out of range".to_string()));
    }
    if game.throws_this_round() > MAX_THROWS {
        return Err(SaveError::Invalid(format!(
            "throw counter {} exceeds limit {}",
            game.throws_this_round(),
            MAX_THROWS
        )));
    }
    if game.round() < 1 || game.round() > TOTAL_ROUNDS {
        return Err(SaveError::Invalid(format!(
            "round counter {} outside 1..={}",
            game.round(),
            TOTAL_ROUNDS
        )));
    }
    if game.records().len() > usize::from(TOTAL_ROUNDS) {
        return Err(SaveError::Invalid("more than ten round records".to_string()));
    }
    let record_sum: u32 = game.records().iter().map(|r| r.score).sum();
    if record_sum != game.total_score() {
        return Err(SaveError::Invalid(
            "total score does not match round records".to_string(),
        ));
    }
    for record in game.records() {
        if !record.category.is_valid() {
            return Err(SaveError::Invalid(format!(
                "record {} has an unrecognized category",
                record.round
            )));
        }
        if record.faces.iter().any(|v| !(1..=6).contains(v)) {
            return Err(SaveError::Invalid(format!(
                "record {} has a die value out of range",
                record.round
            )));
        }
    }
    Ok(())
}

impl Game {
    /// Serialize the session to JSON for pause/resume
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a session from JSON, rejecting malformed or corrupt state
    pub fn from_json(json: &str) -> Result<Game, SaveError> {
        let game: Game = serde_json::from_str(json)?;
        validate(&game)?;
        Ok(game)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Game, SaveError> {
        let json = std::fs::read_to_string(path)?;
        Game::from_json(&json)
    }
}
