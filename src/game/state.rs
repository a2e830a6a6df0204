use crate::dice::{DiceSet, DIE_COUNT};
use crate::rng::GameRng;
use crate::score::{score_round, Category};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Throws allowed per round
pub const MAX_THROWS: u8 = 3;

/// Rounds in a full game
pub const TOTAL_ROUNDS: u8 = 10;

/// An action that is not permitted in the current session state. These are
/// no-op rejections for the interactive layer to surface, not hard failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    #[error("no throws left this round (3 per round)")]
    ThrowLimitReached,
    #[error("throw the dice before this action")]
    NothingThrownYet,
    #[error("the game is over; start a new game")]
    GameOver,
    #[error("no die at index {0}")]
    NoSuchDie(usize),
}

/// One completed round, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u8,
    pub category: Category,
    pub score: u32,
    pub faces: [u8; DIE_COUNT],
    /// The die values actually consumed by the winning scoring pass,
    /// for the results view
    pub dice_used: Vec<u8>,
}

/// Session state for one ten-round game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    dice: DiceSet,
    throws_this_round: u8,
    round: u8,
    total_score: u32,
    records: Vec<RoundRecord>,
    game_over: bool,
}

impl Game {
    pub fn new() -> Self {
        Game {
            dice: DiceSet::new(),
            throws_this_round: 0,
            round: 1,
            total_score: 0,
            records: Vec::new(),
            game_over: false,
        }
    }

    /// Roll all unheld dice. Rejected once the throw limit is reached or the
    /// game is over.
    pub fn throw(&mut self, rng: &mut GameRng) -> Result<(), TurnError> {
        if self.game_over {
            return Err(TurnError::GameOver);
        }
        if self.throws_this_round >= MAX_THROWS {
            return Err(TurnError::ThrowLimitReached);
        }
        self.dice.roll_unheld(rng);
        self.throws_this_round += 1;
        Ok(())
    }

    /// Flip the held flag of one die. Holding is only meaningful once the
    /// dice have been thrown at least once this round.
    pub fn toggle_hold(&mut self, index: usize) -> Result<(), TurnError> {
        if self.game_over {
            return Err(TurnError::GameOver);
        }
        if self.throws_this_round == 0 {
            return Err(TurnError::NothingThrownYet);
        }
        if !self.dice.toggle_held(index) {
            return Err(TurnError::NoSuchDie(index));
        }
        Ok(())
    }

    /// Score the current dice against the chosen category and move to the
    /// next round, or end the game after round ten.
    pub fn score(&mut self, category: Category) -> Result<RoundRecord, TurnError> {
        if self.game_over {
            return Err(TurnError::GameOver);
        }
        if self.throws_this_round == 0 {
            return Err(TurnError::NothingThrownYet);
        }

        let faces = self.dice.values();
        let outcome = score_round(&faces, category);
        let record = RoundRecord {
            round: self.round,
            category,
            score: outcome.score,
            faces,
            dice_used: outcome.dice_used,
        };
        self.total_score += record.score;
        self.records.push(record.clone());

        if self.round < TOTAL_ROUNDS {
            self.round += 1;
            self.throws_this_round = 0;
            self.dice.reset_for_round();
        } else {
            self.game_over = true;
        }

        Ok(record)
    }

    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    pub fn throws_this_round(&self) -> u8 {
        self.throws_this_round
    }

    pub fn throws_left(&self) -> u8 {
        MAX_THROWS - self.throws_this_round
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// The per-round history, read-only, for the results view
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
