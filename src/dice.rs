use crate::rng::GameRng;
use serde::{Deserialize, Serialize};

/// Number of dice in play each round
pub const DIE_COUNT: usize = 6;

/// A single six-sided die with hold state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    pub value: u8,
    pub held: bool,
    /// Set when the value was reassigned by the latest throw; presentation
    /// layers use it to decide whether to animate. Not persisted.
    #[serde(skip, default)]
    pub just_rolled: bool,
}

impl Die {
    pub fn new() -> Self {
        Die {
            value: 1,
            held: false,
            just_rolled: false,
        }
    }

    /// Reassign the face value unless the die is held
    pub fn roll(&mut self, rng: &mut GameRng) {
        if !self.held {
            self.value = rng.roll_die();
            self.just_rolled = true;
        } else {
            self.just_rolled = false;
        }
    }

    pub fn toggle_held(&mut self) {
        self.held = !self.held;
        self.just_rolled = false;
    }

    /// Release the die at the start of a new round
    pub fn reset_for_round(&mut self) {
        self.held = false;
        self.just_rolled = false;
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}

/// The six dice of one round, fixed-size by construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSet {
    dice: [Die; DIE_COUNT],
}

impl DiceSet {
    pub fn new() -> Self {
        DiceSet {
            dice: [Die::new(); DIE_COUNT],
        }
    }

    /// Build a dice set from known face values, e.g. for tests or resume
    pub fn from_values(values: [u8; DIE_COUNT]) -> Self {
        let mut set = DiceSet::new();
        for (die, value) in set.dice.iter_mut().zip(values) {
            die.value = value;
        }
        set
    }

    /// Roll every die that is not held
    pub fn roll_unheld(&mut self, rng: &mut GameRng) {
        for die in &mut self.dice {
            die.roll(rng);
        }
    }

    /// Flip the held flag of one die; returns false if the index is out of range
    pub fn toggle_held(&mut self, index: usize) -> bool {
        match self.dice.get_mut(index) {
            Some(die) => {
                die.toggle_held();
                true
            }
            None => false,
        }
    }

    /// Release all held dice for the next round
    pub fn reset_for_round(&mut self) {
        for die in &mut self.dice {
            die.reset_for_round();
        }
    }

    /// Snapshot of the six face values in position order
    pub fn values(&self) -> [u8; DIE_COUNT] {
        let mut values = [0u8; DIE_COUNT];
        for (slot, die) in values.iter_mut().zip(&self.dice) {
            *slot = die.value;
        }
        values
    }

    pub fn dice(&self) -> &[Die; DIE_COUNT] {
        &self.dice
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::new()
    }
}
