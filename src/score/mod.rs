pub mod partition;
pub mod subsets;

pub use partition::{greedy_pass, PassResult, SortOrder};
pub use subsets::{enumerate, filter_by_target, Subset};

use crate::dice::DIE_COUNT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Die values below this count toward the Low category
const LOW_LIMIT: u8 = 4;

/// The player's declared scoring target for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Sum of all die values strictly below 4
    Low,
    /// Partition dice into groups each summing to the target (4..=12)
    Target(u8),
}

impl Category {
    /// All ten categories in menu order
    pub const ALL: [Category; 10] = [
        Category::Low,
        Category::Target(4),
        Category::Target(5),
        Category::Target(6),
        Category::Target(7),
        Category::Target(8),
        Category::Target(9),
        Category::Target(10),
        Category::Target(11),
        Category::Target(12),
    ];

    pub fn is_valid(self) -> bool {
        match self {
            Category::Low => true,
            Category::Target(t) => (4..=12).contains(&t),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Low => write!(f, "Low"),
            Category::Target(t) => write!(f, "{}", t),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a valid category (expected 'Low' or 4..12)")]
pub struct CategoryParseError(pub String);

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("low") {
            return Ok(Category::Low);
        }
        match s.parse::<u8>() {
            Ok(t) if (4..=12).contains(&t) => Ok(Category::Target(t)),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// A round's score and the die values consumed to produce it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundScore {
    pub score: u32,
    pub dice_used: Vec<u8>,
}

/// Score one round's dice against the chosen category.
///
/// For Low the score is simply the sum of all values below 4. For a numeric
/// target, the power set of die positions is filtered to subsets summing to
/// the target and consumed greedily under both tie-break orderings; the
/// better total wins, with the sum-only pass preferred on a tie.
///
/// Pure: the same input always yields the same score and nothing is mutated.
pub fn score_round(values: &[u8; DIE_COUNT], category: Category) -> RoundScore {
    match category {
        Category::Low => {
            let dice_used: Vec<u8> = values.iter().copied().filter(|&v| v < LOW_LIMIT).collect();
            let score = dice_used.iter().map(|&v| u32::from(v)).sum();
            RoundScore { score, dice_used }
        }
        Category::Target(target) => {
            let candidates = filter_by_target(&enumerate(values), u32::from(target));

            let sum_only = greedy_pass(values, &candidates, SortOrder::SumOnly);
            let sum_and_size = greedy_pass(values, &candidates, SortOrder::SumAndSize);

            let winner = if sum_only.total >= sum_and_size.total {
                sum_only
            } else {
                sum_and_size
            };
            RoundScore {
                score: winner.total,
                dice_used: winner.consumed,
            }
        }
    }
}
